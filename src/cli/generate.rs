use clap::Parser;

use crate::{cli::batch::BatchArgs, prelude::*, sheet::Sheet};

#[derive(Parser)]
pub struct GenerateArgs {
    #[clap(flatten)]
    batch: BatchArgs,

    /// Show the abacus under each statement.
    #[clap(long)]
    abacus: bool,

    /// Reveal the solutions.
    #[clap(long)]
    solutions: bool,
}

impl GenerateArgs {
    #[instrument(skip_all)]
    pub fn run(&self) -> Result {
        for (kind, exercises) in self.batch.generate()? {
            println!("# {kind}\n");
            for exercise in &exercises {
                let sheet = Sheet::builder()
                    .exercise(exercise)
                    .abacus(self.abacus)
                    .solution(self.solutions)
                    .build();
                println!("{sheet}");
            }
        }
        Ok(())
    }
}
