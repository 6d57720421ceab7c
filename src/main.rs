use clap::Parser;

mod args;
mod deck;
mod flipseven;
use self::args::Args;
use self::flipseven::cli_main;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    cli_main(&args)
}
