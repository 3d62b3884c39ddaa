#![allow(clippy::doc_markdown)]

mod abacus;
mod cli;
mod exercise;
mod fmt;
mod prelude;
mod quantity;
mod sheet;
mod tables;

use clap::{Parser, crate_version};

use crate::{cli::Args, prelude::*};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    debug!(version = crate_version!(), "starting…");

    Args::parse().command.run()?;

    debug!("done!");
    Ok(())
}
