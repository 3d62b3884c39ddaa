mod batch;
mod export;
mod generate;
mod place;
mod units;

use clap::{Parser, Subcommand};

use crate::{
    cli::{export::ExportArgs, generate::GenerateArgs, place::PlaceArgs, units::UnitsArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate conversion exercises and print their sheets.
    #[clap(name = "generate")]
    Generate(Box<GenerateArgs>),

    /// Place a single value on the abacus.
    #[clap(name = "place")]
    Place(Box<PlaceArgs>),

    /// Write exercise and solution sheets into a directory.
    #[clap(name = "export")]
    Export(Box<ExportArgs>),

    /// Print the unit table of a quantity kind.
    #[clap(name = "units")]
    Units(UnitsArgs),
}

impl Command {
    pub fn run(self) -> Result {
        match self {
            Self::Generate(args) => args.run(),
            Self::Place(args) => args.run(),
            Self::Export(args) => args.run(),
            Self::Units(args) => args.run(),
        }
    }
}
