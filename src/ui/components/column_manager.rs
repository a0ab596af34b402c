//! Column manager checklist.

use crate::ui::helpers::colored;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ColumnManagerPanel;

/// Renders the show/hide checklist, one line per listed column.
#[must_use]
pub fn render_column_manager(panel: &ColumnManagerPanel, theme: &Theme) -> Vec<String> {
    let mut lines = Vec::with_capacity(panel.entries.len() + 1);
    lines.push(format!(
        "{}{}{}",
        Theme::bold(),
        colored("Columns", &theme.colors.menu_fg),
        Theme::reset()
    ));
    for entry in &panel.entries {
        let (mark, color) = if entry.checked {
            ("[x]", &theme.colors.menu_fg)
        } else {
            ("[ ]", &theme.colors.text_dim)
        };
        lines.push(colored(&format!(" {mark} {}", entry.label), color));
    }
    lines
}
