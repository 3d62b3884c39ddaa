mod grid;
mod position;

use std::collections::HashSet;

use itertools::Itertools;

pub use self::{
    grid::Grid,
    position::{Cell, TotalPosition},
};
use crate::{fmt::split_digits, prelude::*, quantity::QuantityKind};

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct PlacedDigit {
    pub digit: char,

    /// Whether the digit sits on the ones-place of the start unit.
    pub is_unit: bool,

    /// Unit column, may be negative or beyond the table for large or tiny values.
    pub column: isize,

    pub sub_column: usize,
}

impl PlacedDigit {
    const fn new(digit: char, is_unit: bool, cell: Cell) -> Self {
        Self { digit, is_unit, column: cell.column, sub_column: cell.sub_column }
    }

    pub const fn cell(&self) -> Cell {
        Cell { column: self.column, sub_column: self.sub_column }
    }
}

/// Place-value grid of a quantity kind.
#[derive(Copy, Clone, Debug)]
pub struct Abacus {
    kind: QuantityKind,
}

impl Abacus {
    pub const fn new(kind: QuantityKind) -> Self {
        Self { kind }
    }

    fn anchor(self, symbol: &str) -> Option<TotalPosition> {
        let index = self.kind.units().position(symbol)?;
        Some(TotalPosition::anchor(index, self.kind.sub_columns()))
    }

    /// Place the digits of the value written in the start unit.
    ///
    /// An unknown unit or a non-finite value places nothing.
    pub fn place_digits(self, value: f64, start_unit: &str) -> Vec<PlacedDigit> {
        if !value.is_finite() {
            warn!(kind = %self.kind, value, "non-finite value");
            return Vec::new();
        }
        let Some(anchor) = self.anchor(start_unit) else {
            warn!(kind = %self.kind, start_unit, "unknown start unit");
            return Vec::new();
        };
        let sub_columns = self.kind.sub_columns();
        let (integer_part, fractional_part) = split_digits(value);

        let integer_digits = integer_part.chars().rev().zip(0_isize..).map(|(digit, i)| {
            PlacedDigit::new(digit, i == 0, (anchor - i).to_cell(sub_columns))
        });
        let fractional_digits = fractional_part.chars().zip(1_isize..).map(|(digit, i)| {
            PlacedDigit::new(digit, false, (anchor + i).to_cell_truncated(sub_columns))
        });
        integer_digits.chain(fractional_digits).collect()
    }

    /// Pad the placed digits with zeros up to the ones-place of the target unit.
    ///
    /// Nothing is added when the target unit is unknown or already covered by the digits.
    pub fn extend_for_solution(
        self,
        mut digits: Vec<PlacedDigit>,
        target_unit: &str,
    ) -> Vec<PlacedDigit> {
        let Some(target_position) = self.anchor(target_unit) else {
            warn!(kind = %self.kind, target_unit, "unknown target unit");
            return digits;
        };
        let sub_columns = self.kind.sub_columns();
        let Some(max_position) =
            digits.iter().map(|digit| digit.cell().total_position(sub_columns)).max()
        else {
            return digits;
        };
        if target_position <= max_position {
            return digits;
        }

        let occupied: HashSet<Cell> = digits.iter().map(PlacedDigit::cell).collect();
        let zeros = (max_position.0 + 1..=target_position.0)
            .map(|position| TotalPosition(position).to_cell_truncated(sub_columns))
            .filter(|cell| !occupied.contains(cell))
            .map(|cell| PlacedDigit::new('0', false, cell))
            .collect_vec();
        trace!(n_zeros = zeros.len(), %target_position, "padded");
        digits.extend(zeros);
        digits
    }

    /// Digits as displayed: the base placement, extended when the solution is revealed.
    pub fn digits(
        self,
        value: f64,
        start_unit: &str,
        target_unit: Option<&str>,
        reveal: bool,
    ) -> Vec<PlacedDigit> {
        let digits = self.place_digits(value, start_unit);
        match target_unit {
            Some(target_unit) if reveal => self.extend_for_solution(digits, target_unit),
            _ => digits,
        }
    }
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;

    use super::*;

    fn digit(digit: char, is_unit: bool, column: isize, sub_column: usize) -> PlacedDigit {
        PlacedDigit { digit, is_unit, column, sub_column }
    }

    #[test]
    fn test_single_digit() {
        let digits = Abacus::new(QuantityKind::Length).place_digits(5.0, "m");
        assert_eq!(digits, [digit('5', true, 3, 0)]);
    }

    #[test]
    fn test_integer_and_fraction() {
        let digits = Abacus::new(QuantityKind::Length).place_digits(123.45, "m");
        assert_eq!(
            digits,
            [
                digit('3', true, 3, 0),
                digit('2', false, 2, 0),
                digit('1', false, 1, 0),
                digit('4', false, 4, 0),
                digit('5', false, 5, 0),
            ]
        );
    }

    #[test]
    fn test_area_anchor() {
        let digits = Abacus::new(QuantityKind::Area).place_digits(42.0, "m²");
        assert_eq!(digits, [digit('2', true, 3, 1), digit('4', false, 3, 0)]);
    }

    #[test]
    fn test_volume_fraction() {
        let digits = Abacus::new(QuantityKind::Volume).place_digits(1.25, "dm³");
        assert_eq!(
            digits,
            [digit('1', true, 4, 2), digit('2', false, 5, 0), digit('5', false, 5, 1)]
        );
    }

    #[test]
    fn test_left_of_table() {
        let digits = Abacus::new(QuantityKind::Area).place_digits(123.0, "km²");
        assert_eq!(
            digits,
            [digit('3', true, 0, 1), digit('2', false, 0, 0), digit('1', false, -1, 1)]
        );
    }

    #[test]
    fn test_mass_placeholder_column() {
        let digits = Abacus::new(QuantityKind::Mass).place_digits(25.0, "kg");
        assert_eq!(digits, [digit('5', true, 3, 0), digit('2', false, 2, 0)]);
    }

    #[test]
    fn test_unknown_start_unit() {
        assert!(Abacus::new(QuantityKind::Length).place_digits(5.0, "kg").is_empty());
        assert!(Abacus::new(QuantityKind::Mass).place_digits(5.0, "").is_empty());
    }

    #[test]
    fn test_non_finite_value() {
        let abacus = Abacus::new(QuantityKind::Length);
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(abacus.place_digits(value, "m").is_empty());
            assert!(abacus.digits(value, "m", Some("mm"), true).is_empty());
        }
    }

    #[test]
    fn test_extend_to_smaller_unit() {
        let abacus = Abacus::new(QuantityKind::Length);
        let digits = abacus.extend_for_solution(abacus.place_digits(7.0, "m"), "cm");
        assert_eq!(
            digits,
            [digit('7', true, 3, 0), digit('0', false, 4, 0), digit('0', false, 5, 0)]
        );
    }

    #[test]
    fn test_extend_volume() {
        let abacus = Abacus::new(QuantityKind::Volume);
        let digits = abacus.extend_for_solution(abacus.place_digits(2.5, "m³"), "cm³");
        let zeros = digits.iter().filter(|digit| digit.digit == '0').count();
        assert_eq!(digits.len(), 7);
        assert_eq!(zeros, 5);
        assert_eq!(digits.last(), Some(&digit('0', false, 5, 2)));
    }

    #[test]
    fn test_extend_noop_within_digits() {
        let abacus = Abacus::new(QuantityKind::Length);
        let base = abacus.place_digits(123.45, "m");
        assert_eq!(abacus.extend_for_solution(base.clone(), "dm"), base);
        assert_eq!(abacus.extend_for_solution(base.clone(), "km"), base);
    }

    #[test]
    fn test_extend_unknown_target() {
        let abacus = Abacus::new(QuantityKind::Length);
        let base = abacus.place_digits(7.0, "m");
        assert_eq!(abacus.extend_for_solution(base.clone(), "L"), base);
    }

    #[test]
    fn test_digits_without_reveal() {
        let abacus = Abacus::new(QuantityKind::Length);
        assert_eq!(abacus.digits(7.0, "m", Some("cm"), false), abacus.place_digits(7.0, "m"));
        assert_eq!(abacus.digits(7.0, "m", None, true), abacus.place_digits(7.0, "m"));
        assert_eq!(abacus.digits(7.0, "m", Some("cm"), true).len(), 3);
    }

    #[test]
    fn test_invariants_for_all_unit_pairs() {
        for kind in EnumSet::<QuantityKind>::all() {
            let abacus = Abacus::new(kind);
            let units = kind.units();
            for start in units.selectable() {
                for target in units.selectable() {
                    for value in [1.0, 7.5, 42.0, 100.99, 0.05] {
                        let start_unit = units[start].symbol;
                        let base = abacus.place_digits(value, start_unit);
                        assert_eq!(base, abacus.place_digits(value, start_unit));
                        assert_eq!(base.iter().filter(|digit| digit.is_unit).count(), 1);

                        let extended =
                            abacus.extend_for_solution(base.clone(), units[target].symbol);
                        assert_eq!(extended[..base.len()], base[..]);
                        let cells: HashSet<_> = extended.iter().map(PlacedDigit::cell).collect();
                        assert_eq!(cells.len(), extended.len(), "{value} {start_unit} in {kind}");
                    }
                }
            }
        }
    }
}
