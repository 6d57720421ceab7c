//! The game of Flip Seven.

mod action;
mod card;
mod error;
mod game;
mod player;
mod table;
mod ui;

use serde::{Deserialize, Serialize};

pub use self::card::{ActionKind, Card, Deck, Modifier};
pub use self::error::{EngineError, InputError};
pub use self::game::{Decision, Game, GameOutcome, MAX_PLAYERS, MIN_PLAYERS};
pub use self::player::{Player, PlayerId, WINNING_SCORE};
pub use self::table::{Standing, Table};
pub use self::ui::{Console, Ui};

use crate::args::Args;

/// An event that occurs during the game. Events are delivered to the UI in
/// order and recorded as the session's history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A new round has begun.
    RoundStarted { round: u32 },
    /// A card was drawn into a player's hand.
    Draw { player: PlayerId, card: Card },
    /// The discard pile was recycled into the empty deck.
    DeckRecycled { cards: usize },
    /// The player ended their round, voluntarily or with nothing left to
    /// draw.
    Stayed { player: PlayerId },
    /// The player busted on a duplicate number.
    Busted { player: PlayerId },
    /// The player was granted a second chance.
    SecondChanceGranted { player: PlayerId },
    /// The player consumed their second chance to cure a duplicate.
    SecondChanceUsed { player: PlayerId },
    /// The player was frozen by an action card.
    Frozen { player: PlayerId },
    /// The player reached seven distinct numbers, ending the round.
    FlipSeven { player: PlayerId },
    /// The player earned the flip seven bonus.
    BonusAwarded { player: PlayerId },
    /// Scores after a completed round.
    RoundEnded {
        round: u32,
        scores: Vec<(PlayerId, u32)>,
    },
    /// The game is over. An empty winner list means the game was ended
    /// early, before anyone reached the winning score.
    GameEnded {
        winners: Vec<PlayerId>,
        ranking: Vec<Standing>,
    },
}

/// Fans an event out to the UI while recording it in the session history.
pub(crate) struct Notifier<'a> {
    ui: &'a dyn Ui,
    history: &'a mut Vec<Event>,
}

impl<'a> Notifier<'a> {
    pub fn new(ui: &'a dyn Ui, history: &'a mut Vec<Event>) -> Self {
        Self { ui, history }
    }

    pub fn send(&mut self, event: Event) {
        self.ui.notify(&event);
        self.history.push(event);
    }
}

/// Runs the game with a simple command-line interface.
pub fn cli_main(args: &Args) -> anyhow::Result<()> {
    let console = Console::new(!args.no_color);
    console.print_rules();
    let count = match args.players {
        Some(n) => n,
        None => Game::prompt_player_count(&console),
    };
    let mut rng = rand::thread_rng();
    let mut game = Game::new(count, &mut rng);
    game.run(&console, &mut rng)?;
    serde_json::to_writer(std::io::stderr(), game.history())?;
    Ok(())
}
