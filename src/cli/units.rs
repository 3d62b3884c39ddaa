use clap::Parser;

use crate::{prelude::*, quantity::QuantityKind, tables::build_units_table};

#[derive(Parser)]
pub struct UnitsArgs {
    #[clap(long, env = "ABAQUE_KIND", default_value = "length")]
    kind: QuantityKind,
}

impl UnitsArgs {
    pub fn run(&self) -> Result {
        info!(kind = %self.kind, sub_columns = self.kind.sub_columns(), "unit table");
        println!("{}", build_units_table(self.kind));
        Ok(())
    }
}
