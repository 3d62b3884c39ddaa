mod export;

use std::fmt::{Display, Formatter};

use bon::Builder;

pub use self::export::export;
use crate::{
    abacus::{Abacus, Grid},
    exercise::Exercise,
    tables::build_grid_table,
};

/// Printable exercise card.
#[derive(Builder)]
pub struct Sheet<'a> {
    exercise: &'a Exercise,

    /// Show the abacus grid under the statement.
    #[builder(default)]
    abacus: bool,

    /// Reveal the solution, padding the grid up to the target unit.
    #[builder(default)]
    solution: bool,

    /// Never emit terminal styling.
    #[builder(default)]
    plain: bool,
}

impl Sheet<'_> {
    pub fn grid(&self) -> Grid {
        let exercise = self.exercise;
        let digits = Abacus::new(exercise.kind).digits(
            exercise.value,
            exercise.start_unit,
            Some(exercise.target_unit),
            self.solution,
        );
        Grid::new(exercise.kind, digits, self.solution.then_some(exercise.target_unit))
    }
}

impl Display for Sheet<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Exercise {}: {}", self.exercise.id, self.exercise.statement)?;
        if self.abacus {
            let mut table = build_grid_table(&self.grid());
            if self.plain {
                table.force_no_tty();
            }
            writeln!(f, "{table}")?;
        }
        if self.solution {
            writeln!(f, "Solution: {} {}", self.exercise.solution, self.exercise.target_unit)?;
        }
        Ok(())
    }
}
