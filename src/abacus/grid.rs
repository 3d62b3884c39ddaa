use std::{collections::HashMap, ops::RangeInclusive};

use itertools::Itertools;

use crate::{
    abacus::{Cell, PlacedDigit, TotalPosition},
    quantity::{QuantityKind, Unit},
};

/// Empty columns shown on each side of the unit table.
const MARGIN_COLUMNS: isize = 3;

/// Visible part of the abacus with the digits laid over it.
#[derive(Debug)]
pub struct Grid {
    kind: QuantityKind,
    columns: RangeInclusive<isize>,
    digits: HashMap<Cell, PlacedDigit>,
    boundary: Option<Cell>,
    equivalents: HashMap<Cell, &'static Unit>,
}

impl Grid {
    /// Lay out the digits, marking the decimal boundary of the unit if any.
    ///
    /// The visible columns span the unit table with its margins,
    /// and grow to include any digit falling outside.
    pub fn new(kind: QuantityKind, digits: Vec<PlacedDigit>, boundary_unit: Option<&str>) -> Self {
        let sub_columns = kind.sub_columns();

        #[allow(clippy::cast_possible_wrap)]
        let last_column = kind.units().len() as isize - 1 + MARGIN_COLUMNS;
        let (first, last) = match digits.iter().map(|digit| digit.column).minmax().into_option() {
            Some((min, max)) => (min.min(-MARGIN_COLUMNS), max.max(last_column)),
            None => (-MARGIN_COLUMNS, last_column),
        };

        let boundary = boundary_unit
            .and_then(|symbol| kind.units().position(symbol))
            .map(|index| TotalPosition::anchor(index, sub_columns).to_cell(sub_columns));

        Self {
            kind,
            columns: first..=last,
            digits: digits.into_iter().map(|digit| (digit.cell(), digit)).collect(),
            boundary,
            equivalents: capacity_equivalents(kind),
        }
    }

    pub fn columns(&self) -> RangeInclusive<isize> {
        self.columns.clone()
    }

    /// All the cells from left to right.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let sub_columns = self.kind.sub_columns();
        self.columns().flat_map(move |column| {
            (0..sub_columns).map(move |sub_column| Cell { column, sub_column })
        })
    }

    pub fn unit(&self, column: isize) -> Option<&'static Unit> {
        usize::try_from(column).ok().and_then(|index| self.kind.units().get(index))
    }

    /// Whether the column lies outside the unit table.
    pub fn is_margin(&self, column: isize) -> bool {
        self.unit(column).is_none()
    }

    pub fn digit(&self, cell: Cell) -> Option<&PlacedDigit> {
        self.digits.get(&cell)
    }

    /// Whether the decimal comma is drawn right after the cell.
    pub fn is_boundary(&self, cell: Cell) -> bool {
        self.boundary == Some(cell)
    }

    /// Capacity unit drawn under the cell, only for volumes.
    pub fn equivalent(&self, cell: Cell) -> Option<&'static Unit> {
        self.equivalents.get(&cell).copied()
    }

    pub fn has_equivalents(&self) -> bool {
        !self.equivalents.is_empty()
    }
}

/// Align the litre family under the cubic grid: 1 L = 1 dm³.
fn capacity_equivalents(kind: QuantityKind) -> HashMap<Cell, &'static Unit> {
    if kind != QuantityKind::Volume {
        return HashMap::new();
    }
    let capacities = QuantityKind::Capacity.units();
    let (Some(cubic_decimetre), Some(litre)) =
        (kind.units().position("dm³"), capacities.position("L"))
    else {
        return HashMap::new();
    };
    let sub_columns = kind.sub_columns();
    let anchor = TotalPosition::anchor(cubic_decimetre, sub_columns);

    #[allow(clippy::cast_possible_wrap)]
    let litre = litre as isize;

    capacities
        .iter()
        .zip(0_isize..)
        .map(|(unit, index)| ((anchor + index - litre).to_cell(sub_columns), unit))
        .collect()
}
