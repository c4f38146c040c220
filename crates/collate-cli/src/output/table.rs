//! Table formatting utilities for CLI output.

use std::cmp::Ordering;

use collate::Strength;
use comfy_table::{presets, ContentArrangement, Table};

use super::ordering_sign;

/// One sensitivity combination in a comparison matrix.
pub struct MatrixRow {
    pub case_sensitive: bool,
    pub diacritic_sensitive: bool,
    /// Native strength the combination maps to.
    pub strength: Strength,
    pub result: Ordering,
}

/// Format matrix rows as a table.
pub fn format_matrix_table(rows: &[MatrixRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Case-sensitive",
        "Diacritic-sensitive",
        "Strength",
        "Result",
    ]);

    for row in rows {
        table.add_row(vec![
            row.case_sensitive.to_string(),
            row.diacritic_sensitive.to_string(),
            row.strength.to_string(),
            ordering_sign(row.result).to_string(),
        ]);
    }

    table
}
