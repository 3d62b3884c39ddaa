mod kind;
mod table;
mod unit;

pub use self::{kind::QuantityKind, table::UnitTable, unit::Unit};
