use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::quantity::table::{AREAS, CAPACITIES, LENGTHS, MASSES, UnitTable, VOLUMES};

#[derive(Debug, Serialize, clap::ValueEnum, enumset::EnumSetType)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    /// Metres and their decimal multiples.
    Length,

    /// Grams, including the tonne and the quintal.
    Mass,

    /// Litres.
    Capacity,

    /// Square metres: two digits per unit.
    Area,

    /// Cubic metres: three digits per unit.
    Volume,
}

impl QuantityKind {
    /// Number of place-value digits spanned by one unit column.
    pub const fn sub_columns(self) -> usize {
        match self {
            Self::Length | Self::Mass | Self::Capacity => 1,
            Self::Area => 2,
            Self::Volume => 3,
        }
    }

    /// Decimal exponent between two adjacent units.
    #[allow(clippy::cast_possible_wrap)]
    pub const fn power(self) -> i32 {
        self.sub_columns() as i32
    }

    pub fn units(self) -> &'static UnitTable {
        match self {
            Self::Length => &LENGTHS,
            Self::Mass => &MASSES,
            Self::Capacity => &CAPACITIES,
            Self::Area => &AREAS,
            Self::Volume => &VOLUMES,
        }
    }
}

impl Display for QuantityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Length => write!(f, "length"),
            Self::Mass => write!(f, "mass"),
            Self::Capacity => write!(f, "capacity"),
            Self::Area => write!(f, "area"),
            Self::Volume => write!(f, "volume"),
        }
    }
}
