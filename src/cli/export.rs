use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;

use crate::{cli::batch::BatchArgs, prelude::*, sheet::export};

#[derive(Parser)]
pub struct ExportArgs {
    #[clap(flatten)]
    batch: BatchArgs,

    #[clap(long, short = 'o', env = "ABAQUE_OUTPUT_DIR", default_value = "sheets")]
    output_dir: PathBuf,
}

impl ExportArgs {
    #[instrument(skip_all)]
    pub fn run(&self) -> Result {
        let exercises =
            self.batch.generate()?.into_iter().flat_map(|(_, exercises)| exercises).collect_vec();
        let paths = export(&exercises, &self.output_dir)
            .context("failed to export the sheets")?;
        for path in paths {
            println!("{}", path.display());
        }
        Ok(())
    }
}
