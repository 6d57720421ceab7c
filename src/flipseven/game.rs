//! Game management.
//!
//! A game consists of a sequence of rounds, by which players accumulate
//! score. A player wins the game by reaching two hundred points.

use std::str::FromStr;

use rand::Rng;

use super::action;
use super::{
    Card, Deck, EngineError, Event, InputError, Notifier, PlayerId, Standing, Table, Ui,
};

/// Minimum number of seated players.
pub const MIN_PLAYERS: u8 = 3;
/// Maximum number of seated players.
pub const MAX_PLAYERS: u8 = 18;

/// A turn decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw a card.
    Hit,
    /// Lock in the hand for the round.
    Stay,
    /// Terminate the game immediately, with no winner.
    End,
}

impl FromStr for Decision {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hit" => Ok(Decision::Hit),
            "stay" => Ok(Decision::Stay),
            "end" => Ok(Decision::End),
            _ => Err(()),
        }
    }
}

/// How a round came to an end.
enum RoundEnd {
    /// Every player went inactive, or one of them flipped seven.
    Finished,
    /// A player ended the game mid-round.
    Aborted,
}

/// Whether a turn is settled or must be taken over.
enum Turn {
    Complete,
    Redo,
}

/// The result of a completed game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOutcome {
    /// The winning players; empty when the game was ended early.
    pub winners: Vec<PlayerId>,
    /// The full final ranking, best score first.
    pub ranking: Vec<Standing>,
}

/// The round/turn controller. Sole owner of turn sequencing, the deck, and
/// the discard pile.
#[derive(Debug)]
pub struct Game {
    table: Table,
    deck: Deck,
    discard: Vec<Card>,
    round: u32,
    total_cards: usize,
    history: Vec<Event>,
}

impl Game {
    /// Seats `count` players behind a freshly shuffled standard deck.
    pub fn new<R: Rng + ?Sized>(count: u8, rng: &mut R) -> Self {
        let mut deck = Deck::default();
        deck.shuffle(rng);
        Self::with_deck(count, deck)
    }

    /// Seats `count` players behind the given deck, drawn as-is.
    pub fn with_deck(count: u8, deck: Deck) -> Self {
        let total_cards = deck.len();
        Self {
            table: Table::new(count),
            deck,
            discard: vec![],
            round: 1,
            total_cards,
            history: vec![],
        }
    }

    /// The seated players.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The ordered event history for the session.
    pub fn history(&self) -> &[Event] {
        &self.history
    }

    /// Asks the UI for a player count until it falls within
    /// [`MIN_PLAYERS`]..=[`MAX_PLAYERS`].
    pub fn prompt_player_count(ui: &dyn Ui) -> u8 {
        loop {
            match ui.prompt_player_count() {
                None => ui.invalid_input(&InputError::NotANumber),
                Some(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => return n,
                Some(_) => ui.invalid_input(&InputError::PlayerCountOutOfRange),
            }
        }
    }

    /// Runs rounds until a player reaches the winning score or a player ends
    /// the game early. An early end declares no winner, regardless of
    /// scores.
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        ui: &dyn Ui,
        rng: &mut R,
    ) -> Result<GameOutcome, EngineError> {
        loop {
            match self.play_round(ui, rng)? {
                RoundEnd::Aborted => return Ok(self.finish(ui, false)),
                RoundEnd::Finished => {
                    if self.table.iter().any(|p| p.won_game()) {
                        return Ok(self.finish(ui, true));
                    }
                }
            }
        }
    }

    fn finish(&mut self, ui: &dyn Ui, declare: bool) -> GameOutcome {
        let ranking = self.table.standings();
        let winners: Vec<PlayerId> = if declare {
            ranking
                .iter()
                .filter(|s| s.rank == 1)
                .map(|s| s.player)
                .collect()
        } else {
            vec![]
        };
        let outcome = GameOutcome {
            winners: winners.clone(),
            ranking: ranking.clone(),
        };
        self.notify(ui, Event::GameEnded { winners, ranking });
        outcome
    }

    fn notify(&mut self, ui: &dyn Ui, event: Event) {
        ui.notify(&event);
        self.history.push(event);
    }

    fn round_over(&self) -> bool {
        self.table.seven_holder().is_some() || self.table.all_inactive()
    }

    fn play_round<R: Rng + ?Sized>(
        &mut self,
        ui: &dyn Ui,
        rng: &mut R,
    ) -> Result<RoundEnd, EngineError> {
        self.notify(ui, Event::RoundStarted { round: self.round });
        let order = self.table.ids();
        let mut cursor = 0;
        while !self.round_over() {
            self.check_card_count()?;
            let id = order[cursor % order.len()];
            cursor += 1;
            if !self.table[id].is_active() {
                // Skipped without consuming a prompt.
                continue;
            }
            // Unrecognized input re-prompts without consuming the turn, and
            // an exhausted deck redoes the turn after a recycle.
            loop {
                match ui.prompt_decision(id) {
                    None => ui.invalid_input(&InputError::UnknownDecision),
                    Some(Decision::Stay) => {
                        self.table[id].stay();
                        self.notify(ui, Event::Stayed { player: id });
                        break;
                    }
                    Some(Decision::End) => return Ok(RoundEnd::Aborted),
                    Some(Decision::Hit) => match self.hit(id, ui, rng)? {
                        Turn::Complete => break,
                        Turn::Redo => continue,
                    },
                }
            }
        }
        self.finish_round(ui);
        Ok(RoundEnd::Finished)
    }

    fn hit<R: Rng + ?Sized>(
        &mut self,
        id: PlayerId,
        ui: &dyn Ui,
        rng: &mut R,
    ) -> Result<Turn, EngineError> {
        let Some(card) = self.deck.draw() else {
            return Ok(self.refill(id, ui, rng));
        };
        self.table[id].receive_card(card);
        self.notify(ui, Event::Draw { player: id, card });
        if let Card::Action(kind) = card {
            let target = self.choose_target(id, card, ui)?;
            let mut notifier = Notifier::new(ui, &mut self.history);
            action::resolve(
                kind,
                target,
                &mut self.table,
                &mut self.deck,
                &mut self.discard,
                &mut notifier,
            );
        }
        let mut notifier = Notifier::new(ui, &mut self.history);
        action::settle_after_draw(id, &mut self.table, &mut self.discard, &mut notifier);
        Ok(Turn::Complete)
    }

    /// Recycles the discard pile into the empty deck so the turn can be
    /// redone. With every card already out in hands there is nothing left to
    /// draw, and the player is forced to stay.
    fn refill<R: Rng + ?Sized>(&mut self, id: PlayerId, ui: &dyn Ui, rng: &mut R) -> Turn {
        if self.discard.is_empty() {
            self.table[id].stay();
            self.notify(ui, Event::Stayed { player: id });
            return Turn::Complete;
        }
        self.deck.recycle(&mut self.discard);
        self.deck.shuffle(rng);
        let cards = self.deck.len();
        self.notify(ui, Event::DeckRecycled { cards });
        Turn::Redo
    }

    /// Requests a target from the UI until it names an active, non-self
    /// opponent. A targeted card with no eligible target is a broken
    /// invariant.
    fn choose_target(
        &self,
        source: PlayerId,
        card: Card,
        ui: &dyn Ui,
    ) -> Result<PlayerId, EngineError> {
        let candidates = self.table.eligible_targets(source);
        if candidates.is_empty() {
            return Err(EngineError::NoEligibleTarget {
                player: source,
                card,
            });
        }
        loop {
            match ui.prompt_target(source, &candidates) {
                Some(id) if candidates.contains(&id) => return Ok(id),
                Some(_) => ui.invalid_input(&InputError::InvalidTarget),
                None => ui.invalid_input(&InputError::NotANumber),
            }
        }
    }

    /// Applies scoring to every player and rearms the table for the next
    /// round. Scoring runs exactly once per player per round; the bonus is
    /// evaluated against the hand before it is cleared.
    fn finish_round(&mut self, ui: &dyn Ui) {
        let mut scores = Vec::with_capacity(self.table.len());
        for id in self.table.ids() {
            let player = &mut self.table[id];
            player.update_score();
            let bonus = player.has_seven() && !player.is_busted();
            player.add_bonus();
            let cards = player.reset();
            let score = player.score();
            self.discard.extend(cards);
            if bonus {
                self.notify(ui, Event::BonusAwarded { player: id });
            }
            scores.push((id, score));
        }
        let round = self.round;
        self.notify(ui, Event::RoundEnded { round, scores });
        self.round += 1;
    }

    /// Verifies that the deck, discard pile, and hands still account for
    /// every card dealt into the session.
    fn check_card_count(&self) -> Result<(), EngineError> {
        let found = self.deck.len() + self.discard.len() + self.table.cards_in_hands();
        if found == self.total_cards {
            Ok(())
        } else {
            Err(EngineError::CardCountDrift {
                expected: self.total_cards,
                found,
            })
        }
    }
}
