//! Action-card resolution.
//!
//! Resolution is a function of (card kind, target, table, deck, discard,
//! notifier): action cards carry no references of their own, and the
//! controller chooses the target before resolution begins. Nested action
//! cards drawn by a Flip Three never re-target.

use super::{ActionKind, Card, Deck, Event, Notifier, PlayerId, Table};

/// How a player stands after a card lands in their hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Settled {
    /// Still drawing.
    Active,
    /// Busted on an uncovered duplicate; the player was forced to stay.
    Busted,
    /// Reached seven distinct values.
    Seven,
}

/// Re-checks a player after a draw. An uncovered duplicate busts the player
/// and forces a stay; a covered one consumes the second chance on the spot,
/// with the excess copies routed to the discard pile; seven distinct values
/// halt drawing.
pub(crate) fn settle_after_draw(
    id: PlayerId,
    table: &mut Table,
    discard: &mut Vec<Card>,
    notifier: &mut Notifier<'_>,
) -> Settled {
    let player = &mut table[id];
    if player.has_duplicate() {
        if player.has_second_chance() {
            let removed = player.use_second_chance();
            discard.extend(removed);
            notifier.send(Event::SecondChanceUsed { player: id });
        } else {
            player.stay();
            notifier.send(Event::Busted { player: id });
            return Settled::Busted;
        }
    }
    if table[id].has_seven() {
        notifier.send(Event::FlipSeven { player: id });
        return Settled::Seven;
    }
    Settled::Active
}

/// Applies an action card to its chosen target.
pub(crate) fn resolve(
    kind: ActionKind,
    target: PlayerId,
    table: &mut Table,
    deck: &mut Deck,
    discard: &mut Vec<Card>,
    notifier: &mut Notifier<'_>,
) {
    match kind {
        ActionKind::Freeze => {
            // Freezing an already-inactive player is a no-op, not an error.
            table[target].stay();
            notifier.send(Event::Frozen { player: target });
        }
        ActionKind::SecondChance => {
            table[target].add_second_chance();
            notifier.send(Event::SecondChanceGranted { player: target });
        }
        ActionKind::FlipThree => flip_three(target, table, deck, discard, notifier),
    }
}

/// Draws up to three cards on the target's behalf. Drawing halts early when
/// the deck runs dry (no recycling mid-resolution), when the target busts or
/// flips seven, or when the target is no longer active. Action cards drawn
/// along the way are deferred on a local stack and resolved last-drawn-first
/// against the same target once the draws complete; a nested Flip Three
/// stacks further cards through the same protocol.
fn flip_three(
    target: PlayerId,
    table: &mut Table,
    deck: &mut Deck,
    discard: &mut Vec<Card>,
    notifier: &mut Notifier<'_>,
) {
    let mut pending = vec![];
    for _ in 0..3 {
        if !table[target].is_active() {
            break;
        }
        let Some(card) = deck.draw() else {
            break;
        };
        table[target].receive_card(card);
        notifier.send(Event::Draw {
            player: target,
            card,
        });
        if let Card::Action(kind) = card {
            pending.push(kind);
        }
        if settle_after_draw(target, table, discard, notifier) != Settled::Active {
            break;
        }
    }
    while let Some(kind) = pending.pop() {
        resolve(kind, target, table, deck, discard, notifier);
    }
}
