use std::ops::{Add, Sub};

/// Linear place-value coordinate, growing towards smaller magnitudes.
///
/// Zero is the leftmost sub-column of the first unit in the table.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, derive_more::Display)]
pub struct TotalPosition(pub isize);

/// Grid cell: unit column and sub-column within it, 0 being the most significant one.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Cell {
    pub column: isize,
    pub sub_column: usize,
}

impl TotalPosition {
    /// Ones-place of the unit, that is the last sub-column of its column.
    #[allow(clippy::cast_possible_wrap)]
    pub const fn anchor(unit_index: usize, sub_columns: usize) -> Self {
        Self((unit_index * sub_columns + (sub_columns - 1)) as isize)
    }

    /// Floor-style conversion, valid for the positions left of the table as well.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub const fn to_cell(self, sub_columns: usize) -> Cell {
        let n = sub_columns as isize;
        Cell { column: self.0.div_euclid(n), sub_column: self.0.rem_euclid(n) as usize }
    }

    /// Truncating conversion, only meant for non-negative positions.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub const fn to_cell_truncated(self, sub_columns: usize) -> Cell {
        let n = sub_columns as isize;
        Cell { column: self.0 / n, sub_column: (self.0 % n) as usize }
    }
}

impl Cell {
    #[allow(clippy::cast_possible_wrap)]
    pub const fn total_position(self, sub_columns: usize) -> TotalPosition {
        TotalPosition(self.column * sub_columns as isize + self.sub_column as isize)
    }
}

impl Add<isize> for TotalPosition {
    type Output = Self;

    fn add(self, rhs: isize) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<isize> for TotalPosition {
    type Output = Self;

    fn sub(self, rhs: isize) -> Self::Output {
        Self(self.0 - rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor() {
        assert_eq!(TotalPosition::anchor(3, 1), TotalPosition(3));
        assert_eq!(TotalPosition::anchor(3, 2), TotalPosition(7));
        assert_eq!(TotalPosition::anchor(0, 3), TotalPosition(2));
    }

    #[test]
    fn test_to_cell_negative() {
        assert_eq!(TotalPosition(-1).to_cell(2), Cell { column: -1, sub_column: 1 });
        assert_eq!(TotalPosition(-3).to_cell(3), Cell { column: -1, sub_column: 0 });
        assert_eq!(TotalPosition(-4).to_cell(3), Cell { column: -2, sub_column: 2 });
    }

    #[test]
    fn test_conversions_agree_on_non_negative() {
        for sub_columns in 1..=3 {
            for position in 0..30 {
                let position = TotalPosition(position);
                assert_eq!(position.to_cell(sub_columns), position.to_cell_truncated(sub_columns));
            }
        }
    }

    #[test]
    fn test_total_position_inverse() {
        for position in -10..20 {
            let position = TotalPosition(position);
            assert_eq!(position.to_cell(3).total_position(3), position);
        }
    }
}
