use clap::Parser;

use crate::{
    abacus::{Abacus, Grid},
    exercise::convert,
    prelude::*,
    quantity::QuantityKind,
    tables::build_grid_table,
};

#[derive(Parser)]
pub struct PlaceArgs {
    #[clap(long, env = "ABAQUE_KIND", default_value = "length")]
    kind: QuantityKind,

    /// Value written in the start unit.
    #[clap(long)]
    value: f64,

    /// Start unit symbol, for example `dam`.
    #[clap(long = "from")]
    start_unit: String,

    /// Target unit symbol.
    #[clap(long = "to")]
    target_unit: Option<String>,

    /// Pad the digits up to the target unit and mark its decimal comma.
    #[clap(long, requires = "target_unit")]
    reveal: bool,
}

impl PlaceArgs {
    #[instrument(skip_all, fields(kind = %self.kind, value = self.value))]
    pub fn run(&self) -> Result {
        ensure!(
            self.value.is_finite() && self.value >= 0.0,
            "the value must be a non-negative number, got {}",
            self.value,
        );
        let units = self.kind.units();
        let start_index = units
            .position(&self.start_unit)
            .with_context(|| format!("unknown {} unit `{}`", self.kind, self.start_unit))?;
        let target_index = self
            .target_unit
            .as_deref()
            .map(|symbol| {
                units
                    .position(symbol)
                    .with_context(|| format!("unknown {} unit `{symbol}`", self.kind))
            })
            .transpose()?;

        let target_unit = self.target_unit.as_deref();
        let digits =
            Abacus::new(self.kind).digits(self.value, &self.start_unit, target_unit, self.reveal);
        debug!(n_digits = digits.len(), "placed");
        let grid = Grid::new(self.kind, digits, target_unit.filter(|_| self.reveal));
        println!("{}", build_grid_table(&grid));

        if let (Some(target_unit), Some(target_index)) = (target_unit, target_index) {
            let solution = convert(self.kind, self.value, start_index, target_index);
            println!("{} {} = {solution} {target_unit}", self.value, self.start_unit);
        }
        Ok(())
    }
}
