//! Body row component.

use super::{Layout, COLUMN_SEPARATOR};
use crate::ui::helpers::fit;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BodyRow;

/// Renders each body row as one line.
///
/// Selected rows are drawn with the selection colors across the full width.
#[must_use]
pub fn render_body_rows(rows: &[BodyRow], layout: &Layout, theme: &Theme) -> Vec<String> {
    rows.iter()
        .map(|row| render_body_row(row, layout, theme))
        .collect()
}

fn render_body_row(row: &BodyRow, layout: &Layout, theme: &Theme) -> String {
    let mut cells: Vec<String> = Vec::with_capacity(row.cells.len() + 1);
    if layout.selection {
        cells.push(if row.selected { "[x]" } else { "[ ]" }.to_string());
    }
    cells.extend(
        row.cells
            .iter()
            .zip(&layout.widths)
            .map(|(cell, width)| fit(&cell.text, *width)),
    );

    let style = if row.selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    format!("{style}{}{}", cells.join(COLUMN_SEPARATOR), Theme::reset())
}
