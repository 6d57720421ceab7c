//! Per-seat player state.

use std::collections::HashSet;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::Card;

/// The number of distinct values that ends a round on the spot.
const FLIP_SEVEN: usize = 7;
/// Bonus awarded for a flip seven.
const SEVEN_BONUS: u32 = 15;
/// Score at which a player wins the game.
pub const WINNING_SCORE: u32 = 200;

/// A stable per-session player identifier. Ids are assigned 1..=N at game
/// start, in turn order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PlayerId(pub u8);

impl Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat mutable state.
///
/// A player is `active` while still drawing this round. Staying voluntarily,
/// busting, and flipping seven all collapse to `active = false`; the
/// distinguishing condition is recomputed on demand via
/// [`is_busted`](Player::is_busted) and [`has_seven`](Player::has_seven)
/// rather than stored.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    score: u32,
    hand: Vec<Card>,
    active: bool,
    second_chance: bool,
}

impl Player {
    /// Creates a new [`Player`] with an empty hand and no score.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            score: 0,
            hand: vec![],
            active: true,
            second_chance: false,
        }
    }

    /// The player's identifier.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The cumulative score, carried across rounds.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The cards drawn this round, in draw order.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns true while the player is still drawing this round.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true if a second chance is outstanding.
    pub fn has_second_chance(&self) -> bool {
        self.second_chance
    }

    fn number_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.hand.iter().filter_map(|card| match card {
            Card::Number(n) => Some(*n),
            _ => None,
        })
    }

    /// Returns true if the hand holds two number cards of equal value,
    /// regardless of any second chance.
    pub fn has_duplicate(&self) -> bool {
        let mut seen = HashSet::new();
        self.number_values().any(|n| !seen.insert(n))
    }

    /// A player is busted iff the hand holds duplicate number values and no
    /// second chance is held. Holding a second chance suppresses the bust
    /// without altering the hand; only
    /// [`use_second_chance`](Player::use_second_chance) removes the
    /// duplicates.
    pub fn is_busted(&self) -> bool {
        !self.second_chance && self.has_duplicate()
    }

    /// Returns true if the hand holds exactly seven distinct number values.
    /// Duplicates count once; other card types are ignored.
    pub fn has_seven(&self) -> bool {
        self.number_values().collect::<HashSet<_>>().len() == FLIP_SEVEN
    }

    /// Appends a card to the hand unconditionally. Bust and seven checks are
    /// the caller's responsibility after every draw.
    pub fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Ends the player's participation in the round. Scoring is a separate
    /// step at round end, so effects that force a stay cannot lock in a
    /// score before the round settles.
    pub fn stay(&mut self) {
        self.active = false;
    }

    /// Grants a second chance. At most one is outstanding; a repeat grant
    /// has no further effect.
    pub fn add_second_chance(&mut self) {
        self.second_chance = true;
    }

    /// Consumes the second chance, collapsing the number cards to their
    /// distinct-value set. The first copy of each value is kept in hand
    /// order; the removed excess copies are returned so the caller can route
    /// them to the discard pile. Non-number cards are untouched.
    pub fn use_second_chance(&mut self) -> Vec<Card> {
        self.second_chance = false;
        let mut seen = HashSet::new();
        let mut removed = vec![];
        self.hand.retain(|card| match card {
            Card::Number(n) => {
                if seen.insert(*n) {
                    true
                } else {
                    removed.push(Card::Number(*n));
                    false
                }
            }
            _ => true,
        });
        removed
    }

    /// Applies the round's hand to the cumulative score: the score is first
    /// multiplied by the product of all multiplier cards, then the number
    /// and addition values are added. A busted hand scores nothing. Must be
    /// invoked exactly once per round.
    pub fn update_score(&mut self) {
        if self.is_busted() {
            return;
        }
        let mut multiplier = 1;
        let mut addition = 0;
        for card in &self.hand {
            match card {
                Card::Number(n) => addition += u32::from(*n),
                Card::Modifier(m) if m.additive => addition += u32::from(m.value),
                Card::Modifier(m) => multiplier *= u32::from(m.value),
                Card::Action(_) => (),
            }
        }
        self.score = self.score * multiplier + addition;
    }

    /// Awards the flip seven bonus if the hand qualifies. Must be invoked
    /// after [`update_score`](Player::update_score) and before
    /// [`reset`](Player::reset), while the hand still reflects the round.
    pub fn add_bonus(&mut self) {
        if self.has_seven() && !self.is_busted() {
            self.score += SEVEN_BONUS;
        }
    }

    /// Rearms the player for a new round, returning the discarded hand for
    /// deck recycling. The score is untouched.
    pub fn reset(&mut self) -> Vec<Card> {
        self.active = true;
        self.second_chance = false;
        std::mem::take(&mut self.hand)
    }

    /// Returns true once the player has reached the winning score.
    pub fn won_game(&self) -> bool {
        self.score >= WINNING_SCORE
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    fn card(s: &str) -> Card {
        Card::from_str(s).unwrap()
    }

    fn player_with(cards: &[&str]) -> Player {
        let mut player = Player::new(PlayerId(1));
        for s in cards {
            player.receive_card(card(s));
        }
        player
    }

    #[test]
    fn test_busted_iff_duplicate_without_second_chance() {
        let mut player = player_with(&["5", "3"]);
        assert!(!player.has_duplicate());
        assert!(!player.is_busted());

        player.receive_card(card("5"));
        assert!(player.has_duplicate());
        assert!(player.is_busted());

        // Granting a second chance suppresses the bust without altering the
        // hand.
        player.add_second_chance();
        assert!(!player.is_busted());
        assert!(player.has_duplicate());
        assert_eq!(player.hand().len(), 3);

        // Using it removes the excess copies and clears the flag.
        let removed = player.use_second_chance();
        assert_eq!(removed, vec![card("5")]);
        assert_eq!(player.hand(), &[card("5"), card("3")]);
        assert!(!player.has_second_chance());
        assert!(!player.is_busted());
    }

    #[test]
    fn test_use_second_chance_keeps_first_copies() {
        let mut player = player_with(&["4", "x2", "4", "7", "7", "Freeze"]);
        player.add_second_chance();
        let removed = player.use_second_chance();
        assert_eq!(removed, vec![card("4"), card("7")]);
        assert_eq!(
            player.hand(),
            &[card("4"), card("x2"), card("7"), card("Freeze")]
        );
    }

    #[test]
    fn test_has_seven_counts_distinct_numbers_only() {
        let mut player = player_with(&["1", "2", "3", "4", "5", "6", "x2", "+4"]);
        assert!(!player.has_seven());
        player.receive_card(card("7"));
        assert!(player.has_seven());

        // An eighth card duplicating an existing value still counts as seven
        // distinct values.
        player.add_second_chance();
        player.receive_card(card("7"));
        assert!(player.has_seven());
    }

    #[test]
    fn test_update_score_mixed_hand() {
        let mut player = player_with(&["5", "3", "x2", "+4"]);
        player.update_score();
        assert_eq!(player.score(), 12);
    }

    #[test]
    fn test_update_score_compounds_prior_score() {
        let mut player = player_with(&["5", "3", "x2", "+4"]);
        player.set_score(10);
        player.update_score();
        assert_eq!(player.score(), 32);
    }

    #[test]
    fn test_update_score_busted_is_noop() {
        let mut player = player_with(&["5", "5", "x2", "+4"]);
        player.set_score(10);
        player.update_score();
        assert_eq!(player.score(), 10);
    }

    #[test]
    fn test_update_score_twice_double_applies() {
        let mut player = player_with(&["5", "3", "x2", "+4"]);
        player.update_score();
        player.update_score();
        assert_eq!(player.score(), 36);
    }

    #[test]
    fn test_bonus_requires_seven_without_bust() {
        let mut player = player_with(&["1", "2", "3", "4", "5", "6", "7"]);
        player.update_score();
        assert_eq!(player.score(), 28);
        player.add_bonus();
        assert_eq!(player.score(), 43);

        // A duplicate eighth card spoils the bonus.
        let mut player = player_with(&["1", "2", "3", "4", "5", "6", "7", "7"]);
        player.update_score();
        player.add_bonus();
        assert_eq!(player.score(), 0);

        // Six distinct values earn nothing extra.
        let mut player = player_with(&["1", "2", "3", "4", "5", "6"]);
        player.update_score();
        player.add_bonus();
        assert_eq!(player.score(), 21);
    }

    #[test]
    fn test_reset_returns_hand_and_rearms() {
        let mut player = player_with(&["5", "3"]);
        player.add_second_chance();
        player.stay();
        player.update_score();

        let discarded = player.reset();
        assert_eq!(discarded, vec![card("5"), card("3")]);
        assert!(player.hand().is_empty());
        assert!(player.is_active());
        assert!(!player.has_second_chance());
        assert_eq!(player.score(), 8);
    }

    #[test]
    fn test_won_game_at_threshold() {
        let mut player = Player::new(PlayerId(1));
        player.set_score(199);
        assert!(!player.won_game());
        player.set_score(200);
        assert!(player.won_game());
    }
}
