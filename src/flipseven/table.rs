//! The table of players.

use std::cmp::Reverse;
use std::ops::{Index, IndexMut};

use delegate::delegate;
use serde::{Deserialize, Serialize};

use super::{Player, PlayerId};

/// A row in the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// Rank, starting at 1. Equal scores share a rank.
    pub rank: usize,
    pub player: PlayerId,
    pub score: u32,
}

/// The players at the table. Insertion order is turn order: ids are assigned
/// 1..=N at game start and double as the fixed cyclic turn sequence.
#[derive(Debug, Clone)]
pub struct Table {
    players: Vec<Player>,
}

impl Index<PlayerId> for Table {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Player {
        usize::from(id.0)
            .checked_sub(1)
            .and_then(|i| self.players.get(i))
            .expect("player exists")
    }
}

impl IndexMut<PlayerId> for Table {
    fn index_mut(&mut self, id: PlayerId) -> &mut Player {
        usize::from(id.0)
            .checked_sub(1)
            .and_then(|i| self.players.get_mut(i))
            .expect("player exists")
    }
}

impl Table {
    /// Seats `count` players, with ids 1..=count.
    pub fn new(count: u8) -> Self {
        let players = (1..=count).map(|n| Player::new(PlayerId(n))).collect();
        Self { players }
    }

    delegate! {
        to self.players {
            pub fn len(&self) -> usize;
            pub fn iter(&self) -> std::slice::Iter<'_, Player>;
        }
    }

    /// Player ids, in turn order.
    pub fn ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(Player::id).collect()
    }

    /// Targeting candidates for an action card drawn by `source`: the
    /// currently-active opponents, derived on demand from live state.
    pub fn eligible_targets(&self, source: PlayerId) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.is_active() && p.id() != source)
            .map(Player::id)
            .collect()
    }

    /// Returns true once every player is inactive.
    pub fn all_inactive(&self) -> bool {
        self.players.iter().all(|p| !p.is_active())
    }

    /// The player who reached seven distinct values this round, if any.
    pub fn seven_holder(&self) -> Option<PlayerId> {
        self.players.iter().find(|p| p.has_seven()).map(Player::id)
    }

    /// Total cards currently held in hands.
    pub fn cards_in_hands(&self) -> usize {
        self.players.iter().map(|p| p.hand().len()).sum()
    }

    /// The final standings, best score first. The sort is stable, so equal
    /// scores keep turn order and share a rank.
    pub fn standings(&self) -> Vec<Standing> {
        let mut by_score: Vec<&Player> = self.players.iter().collect();
        by_score.sort_by_key(|p| Reverse(p.score()));
        let mut standings: Vec<Standing> = Vec::with_capacity(by_score.len());
        for (i, player) in by_score.into_iter().enumerate() {
            let rank = match standings.last() {
                Some(prev) if prev.score == player.score() => prev.rank,
                _ => i + 1,
            };
            standings.push(Standing {
                rank,
                player: player.id(),
                score: player.score(),
            });
        }
        standings
    }
}
