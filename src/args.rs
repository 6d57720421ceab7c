//! Command line arguments

use clap::Parser;

use crate::flipseven::{MAX_PLAYERS, MIN_PLAYERS};

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of seated players; prompts interactively when omitted.
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(MIN_PLAYERS as i64..=MAX_PLAYERS as i64)
    )]
    pub players: Option<u8>,

    /// Disables colored card output.
    #[arg(long)]
    pub no_color: bool,
}
