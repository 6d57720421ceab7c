//! The user interface collaborator.

mod console;
pub use console::Console;
#[cfg(test)]
mod scripted;
#[cfg(test)]
pub use scripted::ScriptedUi;

use super::{Decision, Event, InputError, PlayerId};

/// A trait that implements the engine's user interface.
///
/// Prompts are blocking request/response exchanges: the engine performs no
/// work while suspended and resumes deterministically with the returned
/// value. There is no timeout or cancellation; the engine rejects an invalid
/// response via [`invalid_input`](Ui::invalid_input) and prompts again.
/// Notifications are fire-and-forget and delivered in order.
pub trait Ui {
    /// Asks how many players are seated. `None` indicates a non-numeric
    /// response. Range enforcement is the engine's job.
    fn prompt_player_count(&self) -> Option<u8>;

    /// Asks the player for a turn decision. `None` indicates an unrecognized
    /// response, which does not consume the turn.
    fn prompt_decision(&self, player: PlayerId) -> Option<Decision>;

    /// Asks the player to choose a target from `candidates`. The engine
    /// validates membership, so an inactive or self target is rejected and
    /// requested again.
    fn prompt_target(&self, player: PlayerId, candidates: &[PlayerId]) -> Option<PlayerId>;

    /// Explains why the preceding response was rejected, ahead of a
    /// re-prompt.
    fn invalid_input(&self, err: &InputError);

    /// A notification of an event that all players can see.
    fn notify(&self, event: &Event);
}
