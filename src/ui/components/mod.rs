//! Composable grid component renderers.
//!
//! Each component turns one part of a [`GridViewModel`] into lines of
//! ANSI-styled text. Components never look at grid state directly.
//!
//! # Components
//!
//! - [`header`]: Header row with pin markers, sort arrows, and drop indicators
//! - [`table`]: Body rows with selection boxes
//! - [`empty`]: Placeholder row spanning every column
//! - [`menu`]: A column's "..." menu
//! - [`column_manager`]: Show/hide checklist
//!
//! # Layout
//!
//! ```text
//! [Header Row]
//! [Border]
//! [Body Rows | Empty State]
//! [Border]
//! [Header Menu]        (when open)
//! [Column Manager]     (when open)
//! ```

mod column_manager;
mod empty;
mod header;
mod menu;
mod table;

pub use column_manager::render_column_manager;
pub use empty::render_empty_state;
pub use header::render_header_row;
pub use menu::render_header_menu;
pub use table::render_body_rows;

use crate::ui::helpers::{char_width, horizontal_rule};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::GridViewModel;

/// Character cells of the selection checkbox column (`[x]`).
pub const SELECTION_CHARS: usize = 3;

/// Separator drawn between adjacent columns.
pub const COLUMN_SEPARATOR: &str = "│";

/// Character widths of the rendered columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub selection: bool,
    pub widths: Vec<usize>,
}

impl Layout {
    #[must_use]
    pub fn from_viewmodel(vm: &GridViewModel, px_per_char: f64) -> Self {
        Self {
            selection: vm.selection_column.is_some(),
            widths: vm
                .columns
                .iter()
                .map(|c| char_width(c.width, px_per_char))
                .collect(),
        }
    }

    /// Width of a full row in characters, separators included.
    #[must_use]
    pub fn total_chars(&self) -> usize {
        let cells = usize::from(self.selection) + self.widths.len();
        let content = self.widths.iter().sum::<usize>()
            + if self.selection { SELECTION_CHARS } else { 0 };
        content + cells.saturating_sub(1)
    }
}

/// Renders the complete grid as lines of styled text.
#[must_use]
pub fn render_grid(vm: &GridViewModel, theme: &Theme, px_per_char: f64) -> Vec<String> {
    let layout = Layout::from_viewmodel(vm, px_per_char);
    let total = layout.total_chars();

    let mut lines = vec![
        render_header_row(vm, &layout, theme),
        horizontal_rule(total, theme),
    ];
    match &vm.empty_state {
        Some(empty) => lines.push(render_empty_state(empty, total, theme)),
        None => lines.extend(render_body_rows(&vm.rows, &layout, theme)),
    }
    lines.push(horizontal_rule(total, theme));

    if let Some(menu) = &vm.open_menu {
        let label = vm
            .columns
            .iter()
            .find(|c| c.field_key == menu.field_key)
            .map_or(menu.field_key.as_str(), |c| c.label.as_str());
        lines.extend(render_header_menu(label, menu, theme));
    }
    if let Some(panel) = &vm.column_manager {
        lines.extend(render_column_manager(panel, theme));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_counts_selection_and_separators() {
        let layout = Layout {
            selection: true,
            widths: vec![10, 5],
        };
        assert_eq!(layout.total_chars(), 3 + 10 + 5 + 2);

        let bare = Layout {
            selection: false,
            widths: vec![],
        };
        assert_eq!(bare.total_chars(), 0);
    }
}
