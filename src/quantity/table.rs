use std::{ops::Index, slice::Iter};

use crate::{prelude::*, quantity::Unit};

/// Units of one quantity kind, from the largest to the smallest magnitude.
///
/// Adjacent entries differ by the same power of ten, including placeholders.
#[derive(Debug)]
pub struct UnitTable(&'static [Unit]);

pub static LENGTHS: UnitTable = UnitTable(&[
    Unit::new("km", "kilomètre"),
    Unit::new("hm", "hectomètre"),
    Unit::new("dam", "décamètre"),
    Unit::new("m", "mètre"),
    Unit::new("dm", "décimètre"),
    Unit::new("cm", "centimètre"),
    Unit::new("mm", "millimètre"),
]);

pub static MASSES: UnitTable = UnitTable(&[
    Unit::new("t", "tonne"),
    Unit::new("q", "quintal"),
    Unit::placeholder(),
    Unit::new("kg", "kilogramme"),
    Unit::new("hg", "hectogramme"),
    Unit::new("dag", "décagramme"),
    Unit::new("g", "gramme"),
    Unit::new("dg", "décigramme"),
    Unit::new("cg", "centigramme"),
    Unit::new("mg", "milligramme"),
]);

pub static CAPACITIES: UnitTable = UnitTable(&[
    Unit::new("hl", "hectolitre"),
    Unit::new("dal", "décalitre"),
    Unit::new("L", "litre"),
    Unit::new("dL", "décilitre"),
    Unit::new("cL", "centilitre"),
    Unit::new("mL", "millilitre"),
]);

pub static AREAS: UnitTable = UnitTable(&[
    Unit::new("km²", "kilomètre carré"),
    Unit::new("hm²", "hectomètre carré"),
    Unit::new("dam²", "décamètre carré"),
    Unit::new("m²", "mètre carré"),
    Unit::new("dm²", "décimètre carré"),
    Unit::new("cm²", "centimètre carré"),
    Unit::new("mm²", "millimètre carré"),
]);

pub static VOLUMES: UnitTable = UnitTable(&[
    Unit::new("km³", "kilomètre cube"),
    Unit::new("hm³", "hectomètre cube"),
    Unit::new("dam³", "décamètre cube"),
    Unit::new("m³", "mètre cube"),
    Unit::new("dm³", "décimètre cube"),
    Unit::new("cm³", "centimètre cube"),
    Unit::new("mm³", "millimètre cube"),
]);

impl UnitTable {
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> Iter<'_, Unit> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&'static Unit> {
        self.0.get(index)
    }

    /// Index of the unit with the symbol, placeholders never match.
    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.0.iter().position(|unit| !unit.is_placeholder() && unit.symbol == symbol)
    }

    /// Indices of the units which may be picked for an exercise.
    pub fn selectable(&self) -> impl Iterator<Item = usize> {
        self.0.iter().enumerate().filter(|(_, unit)| !unit.is_placeholder()).map(|(index, _)| index)
    }

    /// Ensure that a distinct pair of named units can be picked from the table.
    pub fn validate(&self) -> Result {
        let n_selectable = self.selectable().count();
        ensure!(n_selectable >= 2, "the unit table has only {n_selectable} selectable unit(s)");
        Ok(())
    }
}

impl Index<usize> for UnitTable {
    type Output = Unit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a UnitTable {
    type Item = &'a Unit;
    type IntoIter = Iter<'a, Unit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        assert_eq!(LENGTHS.position("km"), Some(0));
        assert_eq!(LENGTHS.position("m"), Some(3));
        assert_eq!(MASSES.position("kg"), Some(3));
        assert_eq!(AREAS.position("m²"), Some(3));
        assert_eq!(LENGTHS.position("kg"), None);
    }

    #[test]
    fn test_capacity_symbols() {
        let symbols: Vec<_> = CAPACITIES.iter().map(|unit| unit.symbol).collect();
        assert_eq!(symbols, ["hl", "dal", "L", "dL", "cL", "mL"]);
        assert_eq!(CAPACITIES.position("hl"), Some(0));
        assert_eq!(CAPACITIES.position("hL"), None);
    }

    #[test]
    fn test_placeholder_is_not_resolvable() {
        assert_eq!(MASSES.position(""), None);
        assert_eq!(MASSES.position(" "), None);
    }

    #[test]
    fn test_selectable_skips_placeholder() {
        let selectable: Vec<_> = MASSES.selectable().collect();
        assert_eq!(selectable, [0, 1, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_validate_degenerate_table() {
        static DEGENERATE: UnitTable =
            UnitTable(&[Unit::new("m", "mètre"), Unit::placeholder(), Unit::placeholder()]);
        assert!(DEGENERATE.validate().is_err());
    }
}
