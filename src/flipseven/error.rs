//! Error types

use super::{Card, PlayerId};

/// A rejected user response. Always recoverable: the engine explains the
/// rejection and re-prompts without any state change.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// The response was not a number.
    #[error("enter a number")]
    NotANumber,

    /// The player count falls outside the supported table size.
    #[error("player count must be between 3 and 18")]
    PlayerCountOutOfRange,

    /// The turn decision was not recognized.
    #[error("choose hit, stay, or end")]
    UnknownDecision,

    /// The chosen target is not an active opponent.
    #[error("choose an active opponent")]
    InvalidTarget,
}

/// A broken engine invariant. Fatal: the game cannot continue.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A targeted action card was drawn with no active opponent to receive
    /// it.
    #[error("no eligible target for {card} drawn by {player}")]
    NoEligibleTarget { player: PlayerId, card: Card },

    /// The deck, discard pile, and hands no longer account for every card
    /// dealt into the session.
    #[error("card count drifted: expected {expected}, found {found}")]
    CardCountDrift { expected: usize, found: usize },
}
