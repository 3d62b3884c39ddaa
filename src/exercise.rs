mod generator;

use serde::Serialize;

pub use self::generator::{DEFAULT_MAX_ATTEMPTS, Generator};
use crate::{
    fmt::{SIGNIFICANT_DIGITS, round_significant},
    quantity::QuantityKind,
};

/// Conversion exercise, immutable once generated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Exercise {
    /// 1-based position within the batch.
    pub id: usize,

    pub kind: QuantityKind,
    pub statement: String,
    pub value: f64,
    pub start_unit: &'static str,
    pub target_unit: &'static str,
    pub solution: f64,
}

/// Convert the value between two units given by their table indices.
pub fn convert(kind: QuantityKind, value: f64, start_index: usize, target_index: usize) -> f64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let n_steps = target_index as i32 - start_index as i32;
    round_significant(value * 10_f64.powi(n_steps * kind.power()), SIGNIFICANT_DIGITS)
}
