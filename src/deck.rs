//! A deck of cards.

use rand::seq::SliceRandom;
use rand::Rng;

/// A deck of cards, drawn from the top of the stack.
#[derive(Debug, Clone)]
pub struct Deck<C> {
    cards: Vec<C>,
}

impl<C> FromIterator<C> for Deck<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        let cards = iter.into_iter().collect();
        Self { cards }
    }
}

impl<C> Deck<C> {
    /// The number of cards remaining in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if no cards remain.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Randomly permutes the draw order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the next card. An empty deck is an expected
    /// condition, not an error.
    pub fn draw(&mut self) -> Option<C> {
        self.cards.pop()
    }

    /// Appends the discard pile's contents back into the deck and clears the
    /// pile. Callers must reshuffle afterward.
    pub fn recycle(&mut self, discard: &mut Vec<C>) {
        self.cards.append(discard);
    }
}
