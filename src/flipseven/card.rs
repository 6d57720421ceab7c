//! Flip Seven deck.

use std::fmt::Display;
use std::str::FromStr;

use ansi_term::ANSIString;
use itertools::repeat_n;
use serde::{Deserialize, Serialize};

use crate::deck;

/// Number of x2 multiplier cards in the standard deck.
pub const MULTIPLIER_COUNT: usize = 6;
/// Copies of each action card in the standard deck.
pub const ACTION_COPIES: usize = 4;
/// Total number of cards in the standard deck. Fixed for the session; the
/// controller verifies the count never drifts.
pub const STANDARD_SIZE: usize = 106;

/// A score-modifier card: an addition of +2 through +10, or a x2 multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifier {
    /// The modification value.
    pub value: u8,
    /// True for additions, false for multipliers.
    pub additive: bool,
}

impl Modifier {
    /// Creates an additive modifier.
    pub fn addition(value: u8) -> Self {
        Self {
            value,
            additive: true,
        }
    }

    /// Creates a multiplicative modifier.
    pub fn multiplier(value: u8) -> Self {
        Self {
            value,
            additive: false,
        }
    }
}

/// An action card variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Freeze,
    SecondChance,
    FlipThree,
}

impl ActionKind {
    /// Returns an array of all action kinds, in no particular order.
    pub fn all_kinds() -> &'static [ActionKind] {
        static KINDS: [ActionKind; 3] = [
            ActionKind::Freeze,
            ActionKind::SecondChance,
            ActionKind::FlipThree,
        ];
        &KINDS
    }
}

/// A Flip Seven card.
///
/// A card's identity is its variant and payload: two number cards of equal
/// value are indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// A numbered card, 0 through 12.
    Number(u8),
    /// A score modifier.
    Modifier(Modifier),
    /// An action card, applied to a chosen opponent when drawn.
    Action(ActionKind),
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Number(n) => write!(f, "{n}"),
            Card::Modifier(m) if m.additive => write!(f, "+{}", m.value),
            Card::Modifier(m) => write!(f, "x{}", m.value),
            Card::Action(ActionKind::Freeze) => f.write_str("Freeze"),
            Card::Action(ActionKind::SecondChance) => f.write_str("Second Chance"),
            Card::Action(ActionKind::FlipThree) => f.write_str("Flip Three"),
        }
    }
}

impl FromStr for Card {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "freeze" | "fr" => return Ok(Card::Action(ActionKind::Freeze)),
            "second chance" | "sc" => return Ok(Card::Action(ActionKind::SecondChance)),
            "flip three" | "f3" => return Ok(Card::Action(ActionKind::FlipThree)),
            _ => (),
        }
        if let Some(v) = s.strip_prefix('+') {
            let value: u8 = v.parse().map_err(|_| ())?;
            return if (2..=10).contains(&value) {
                Ok(Card::Modifier(Modifier::addition(value)))
            } else {
                Err(())
            };
        }
        if let Some(v) = s.strip_prefix('x').or_else(|| s.strip_prefix('X')) {
            let value: u8 = v.parse().map_err(|_| ())?;
            return Ok(Card::Modifier(Modifier::multiplier(value)));
        }
        let value: u8 = s.parse().map_err(|_| ())?;
        if value <= 12 {
            Ok(Card::Number(value))
        } else {
            Err(())
        }
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|()| serde::de::Error::custom("not a flip seven card"))
    }
}

impl Card {
    /// Returns a string representation of the card, decorated with ANSI color
    /// codes.
    pub fn to_ansi_string(self) -> ANSIString<'static> {
        use ansi_term::Colour::{Cyan, Yellow};
        match self {
            Card::Number(_) => self.to_string().into(),
            Card::Modifier(_) => Yellow.paint(self.to_string()),
            Card::Action(_) => Cyan.paint(self.to_string()),
        }
    }
}

/// A Flip Seven deck.
pub type Deck = deck::Deck<Card>;

impl Default for Deck {
    /// The standard composition: one 0 and n copies of each number n in
    /// 1..=12, one addition each for +2 through +10, six x2 multipliers, and
    /// four copies of each action card.
    fn default() -> Self {
        let mut cards = vec![Card::Number(0)];
        for n in 1..=12u8 {
            cards.extend(repeat_n(Card::Number(n), usize::from(n)));
        }
        for value in 2..=10u8 {
            cards.push(Card::Modifier(Modifier::addition(value)));
        }
        cards.extend(repeat_n(
            Card::Modifier(Modifier::multiplier(2)),
            MULTIPLIER_COUNT,
        ));
        for &kind in ActionKind::all_kinds() {
            cards.extend(repeat_n(Card::Action(kind), ACTION_COPIES));
        }
        assert_eq!(cards.len(), STANDARD_SIZE);
        cards.into_iter().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn drain(mut deck: Deck) -> Vec<Card> {
        let mut cards = vec![];
        while let Some(card) = deck.draw() {
            cards.push(card);
        }
        cards
    }

    #[test]
    fn test_standard_composition() {
        let cards = drain(Deck::default());
        assert_eq!(cards.len(), STANDARD_SIZE);

        let numbers = cards
            .iter()
            .filter(|c| matches!(c, Card::Number(_)))
            .count();
        let additions = cards
            .iter()
            .filter(|c| matches!(c, Card::Modifier(m) if m.additive))
            .count();
        let multipliers = cards
            .iter()
            .filter(|c| matches!(c, Card::Modifier(m) if !m.additive))
            .count();
        let actions = cards
            .iter()
            .filter(|c| matches!(c, Card::Action(_)))
            .count();
        assert_eq!(numbers, 79);
        assert_eq!(additions, 9);
        assert_eq!(multipliers, MULTIPLIER_COUNT);
        assert_eq!(actions, 3 * ACTION_COPIES);

        for n in 1..=12u8 {
            let copies = cards
                .iter()
                .filter(|c| **c == Card::Number(n))
                .count();
            assert_eq!(copies, usize::from(n));
        }
        assert_eq!(
            cards.iter().filter(|c| **c == Card::Number(0)).count(),
            1
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Card::from_str("7"), Ok(Card::Number(7)));
        assert_eq!(Card::from_str("0"), Ok(Card::Number(0)));
        assert_eq!(Card::from_str("+4"), Ok(Card::Modifier(Modifier::addition(4))));
        assert_eq!(Card::from_str("x2"), Ok(Card::Modifier(Modifier::multiplier(2))));
        assert_eq!(Card::from_str("sc"), Ok(Card::Action(ActionKind::SecondChance)));
        assert_eq!(Card::from_str("Freeze"), Ok(Card::Action(ActionKind::Freeze)));
        assert_eq!(Card::from_str("13"), Err(()));
        assert_eq!(Card::from_str("+11"), Err(()));
        assert_eq!(Card::from_str("seven"), Err(()));
    }

    #[test]
    fn test_display_round_trip() {
        let cards = [
            Card::Number(0),
            Card::Number(12),
            Card::Modifier(Modifier::addition(10)),
            Card::Modifier(Modifier::multiplier(2)),
            Card::Action(ActionKind::Freeze),
            Card::Action(ActionKind::SecondChance),
            Card::Action(ActionKind::FlipThree),
        ];
        for card in cards {
            assert_eq!(card.to_string().parse(), Ok(card));
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let cards = vec![
            Card::Number(7),
            Card::Modifier(Modifier::addition(4)),
            Card::Action(ActionKind::FlipThree),
        ];
        let ser = serde_json::to_string(&cards).unwrap();
        assert_eq!(ser, r#"["7","+4","Flip Three"]"#);
        let de: Vec<Card> = serde_json::from_str(&ser).unwrap();
        assert_eq!(cards, de);
    }
}
