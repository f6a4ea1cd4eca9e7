//! lineup CLI - play the classic or misère k-in-a-row game in a terminal

use anyhow::Result;
use clap::Parser;

use lineup::cli::PlayArgs;

fn main() -> Result<()> {
    lineup::cli::execute(PlayArgs::parse())
}
