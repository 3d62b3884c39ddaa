use bon::Builder;
use rand::Rng;

use crate::{
    exercise::{Exercise, convert},
    fmt::round_decimals,
    prelude::*,
    quantity::QuantityKind,
};

/// Attempts to pick a distinct pair of named units before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct Generator<'a, R: Rng> {
    kind: QuantityKind,
    count: usize,
    rng: &'a mut R,

    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
}

impl<R: Rng, S: generator_builder::IsComplete> GeneratorBuilder<'_, R, S> {
    pub fn generate(self) -> Result<Vec<Exercise>> {
        self.build().generate()
    }
}

impl<R: Rng> Generator<'_, R> {
    #[instrument(skip_all, fields(kind = %self.kind, count = self.count))]
    fn generate(mut self) -> Result<Vec<Exercise>> {
        self.kind
            .units()
            .validate()
            .with_context(|| format!("cannot generate {} exercises", self.kind))?;
        let exercises =
            (1..=self.count).map(|id| self.generate_exercise(id)).collect::<Result<Vec<_>>>()?;
        debug!(n_exercises = exercises.len(), "generated");
        Ok(exercises)
    }

    fn generate_exercise(&mut self, id: usize) -> Result<Exercise> {
        let (start_index, target_index) = self.pick_units()?;
        let value = self.draw_value();
        let units = self.kind.units();
        let (start_unit, target_unit) = (units[start_index].symbol, units[target_index].symbol);
        let exercise = Exercise {
            id,
            kind: self.kind,
            statement: format!("Convert {value} {start_unit} to {target_unit}"),
            value,
            start_unit,
            target_unit,
            solution: convert(self.kind, value, start_index, target_index),
        };
        trace!(id, statement = %exercise.statement, exercise.solution, "generated exercise");
        Ok(exercise)
    }

    /// Pick two distinct named units uniformly at random.
    fn pick_units(&mut self) -> Result<(usize, usize)> {
        let units = self.kind.units();
        for _ in 0..self.max_attempts {
            let start_index = self.rng.random_range(0..units.len());
            let target_index = self.rng.random_range(0..units.len());
            if start_index != target_index
                && !units[start_index].is_placeholder()
                && !units[target_index].is_placeholder()
            {
                return Ok((start_index, target_index));
            }
        }
        bail!("no distinct pair of {} units picked in {} attempts", self.kind, self.max_attempts)
    }

    /// Draw a value in `[1, 101)`, either whole or with two decimals.
    fn draw_value(&mut self) -> f64 {
        let value = self.rng.random_range(1.0..101.0);
        let places = if self.rng.random_bool(0.5) { 0 } else { 2 };
        round_decimals(value, places)
    }
}
