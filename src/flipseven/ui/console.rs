//! Console interactive interface.

use std::fmt::Display;
use std::io::Write;

use ansi_term::ANSIStrings;
use itertools::Itertools;

use super::{Decision, Event, InputError, PlayerId, Ui};
use crate::flipseven::Card;

/// A line-oriented console implementation of [`Ui`].
pub struct Console {
    color: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self { color: true }
    }
}

fn prompt<S: Display>(prompt: S) -> String {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        let mut buffer = String::new();
        print!("{prompt}");
        stdout.flush().expect("flush");
        stdin.read_line(&mut buffer).expect("read");
        let trimmed = buffer.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Prints the rules text.
    pub fn print_rules(&self) {
        println!("{}", include_str!("../../../rules.txt"));
    }

    fn format(&self, s: &ANSIStrings) -> String {
        if self.color {
            s.to_string()
        } else {
            ansi_term::unstyle(s)
        }
    }

    fn format_card(&self, card: Card) -> String {
        self.format(&ANSIStrings(&[card.to_ansi_string()]))
    }
}

impl Ui for Console {
    fn prompt_player_count(&self) -> Option<u8> {
        prompt("How many players? ").parse().ok()
    }

    fn prompt_decision(&self, player: PlayerId) -> Option<Decision> {
        prompt(format!("{player}: hit, stay, or end? ")).parse().ok()
    }

    fn prompt_target(&self, player: PlayerId, candidates: &[PlayerId]) -> Option<PlayerId> {
        let list = candidates.iter().map(|id| id.0.to_string()).join(", ");
        prompt(format!("{player}: choose a target ({list})? "))
            .parse::<u8>()
            .ok()
            .map(PlayerId)
    }

    fn invalid_input(&self, err: &InputError) {
        println!("Invalid input: {err}");
    }

    fn notify(&self, event: &Event) {
        match event {
            Event::RoundStarted { round } => {
                println!();
                println!("=== Round {round} ===");
            }
            Event::Draw { player, card } => {
                println!("{player} draws {}", self.format_card(*card));
            }
            Event::DeckRecycled { cards } => {
                println!("Deck is empty; recycled the discard pile ({cards} cards)");
            }
            Event::Stayed { player } => println!("{player} stays"),
            Event::Busted { player } => println!("{player} busts!"),
            Event::SecondChanceGranted { player } => {
                println!("{player} gains a second chance");
            }
            Event::SecondChanceUsed { player } => {
                println!("{player} uses their second chance");
            }
            Event::Frozen { player } => println!("{player} is frozen"),
            Event::FlipSeven { player } => println!("{player} flips seven!"),
            Event::BonusAwarded { player } => {
                println!("{player} earns the flip seven bonus");
            }
            Event::RoundEnded { round, scores } => {
                println!("Round {round} scores:");
                for (player, score) in scores {
                    println!("  {player}: {score}");
                }
            }
            Event::GameEnded { winners, ranking } => match winners.as_slice() {
                [] => {
                    println!("Game ended. No winner.");
                    self.print_ranking(ranking);
                }
                [winner] => {
                    println!("{winner} wins!");
                    self.print_ranking(ranking);
                }
                _ => {
                    let list = winners.iter().map(|id| id.to_string()).join(" and ");
                    println!("Joint win: {list}!");
                    self.print_ranking(ranking);
                }
            },
        }
    }
}

impl Console {
    fn print_ranking(&self, ranking: &[crate::flipseven::Standing]) {
        println!("Final ranking:");
        for standing in ranking {
            println!(
                "  {}. {}: {}",
                standing.rank, standing.player, standing.score
            );
        }
    }
}
