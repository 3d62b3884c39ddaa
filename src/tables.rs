use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{abacus::Grid, quantity::QuantityKind};

#[must_use]
pub fn build_grid_table(grid: &Grid) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);

    table.set_header(
        grid.cells()
            .map(|cell| {
                let symbol = if cell.sub_column == 0 {
                    grid.unit(cell.column).map_or("", |unit| unit.symbol)
                } else {
                    ""
                };
                Cell::new(symbol).set_alignment(CellAlignment::Center)
            })
            .collect_vec(),
    );

    table.add_row(
        grid.cells()
            .map(|cell| {
                let digit = grid.digit(cell);
                let mut text = digit.map_or_else(String::new, |digit| digit.digit.to_string());
                if grid.is_boundary(cell) {
                    text.push(',');
                }
                let mut table_cell = Cell::new(text).set_alignment(CellAlignment::Center);
                if digit.is_some_and(|digit| digit.is_unit) {
                    table_cell = table_cell.fg(Color::Blue).add_attribute(Attribute::Bold);
                }
                if grid.is_boundary(cell) {
                    table_cell = table_cell.fg(Color::Red);
                }
                if grid.is_margin(cell.column) {
                    table_cell = table_cell.add_attribute(Attribute::Dim);
                }
                table_cell
            })
            .collect_vec(),
    );

    if grid.has_equivalents() {
        table.add_row(
            grid.cells()
                .map(|cell| {
                    Cell::new(grid.equivalent(cell).map_or("", |unit| unit.symbol))
                        .set_alignment(CellAlignment::Center)
                        .fg(Color::Green)
                })
                .collect_vec(),
        );
    }

    table
}

#[must_use]
pub fn build_units_table(kind: QuantityKind) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec!["#", "Symbol", "Name"]);
    for (index, unit) in kind.units().iter().enumerate() {
        if unit.is_placeholder() {
            table.add_row(vec![
                Cell::new(index).add_attribute(Attribute::Dim),
                Cell::new("—").add_attribute(Attribute::Dim),
                Cell::new(""),
            ]);
        } else {
            table.add_row(vec![Cell::new(index), Cell::new(unit.symbol), Cell::new(unit.name)]);
        }
    }
    table
}
