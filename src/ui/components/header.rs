//! Header row component.

use super::{Layout, COLUMN_SEPARATOR};
use crate::app::modes::{DropSide, SortDirection};
use crate::ui::helpers::{colored, fit};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GridViewModel, HeaderCell, SelectionHeader};

/// Prefix marking a pinned column.
pub const PIN_MARKER: &str = "⇤ ";
/// Prefix marking an active inline rename.
pub const RENAME_MARKER: &str = "✎ ";
/// Insertion marker drawn on the drop side of the target column.
pub const DROP_MARKER: char = '┃';

/// Renders the header row.
///
/// Labels carry a pin marker when pinned and a sort arrow (`▼` descending,
/// `▲` ascending) when they are the active sort. While renaming, the label is
/// replaced by the draft.
#[must_use]
pub fn render_header_row(vm: &GridViewModel, layout: &Layout, theme: &Theme) -> String {
    let mut cells = Vec::with_capacity(vm.columns.len() + 1);
    if let Some(selection) = &vm.selection_column {
        cells.push(colored(select_all_box(selection), &theme.colors.header_fg));
    }
    for (column, width) in vm.columns.iter().zip(&layout.widths) {
        cells.push(render_header_cell(column, *width, theme));
    }

    let mut line = String::new();
    line.push_str(Theme::bold());
    if let Some(bg) = &theme.colors.header_bg {
        line.push_str(&Theme::bg(bg));
    }
    line.push_str(&cells.join(COLUMN_SEPARATOR));
    line.push_str(Theme::reset());
    line
}

fn select_all_box(selection: &SelectionHeader) -> &'static str {
    if selection.all_selected {
        "[x]"
    } else if selection.some_selected {
        "[-]"
    } else {
        "[ ]"
    }
}

fn render_header_cell(column: &HeaderCell, width: usize, theme: &Theme) -> String {
    let mut label = String::new();
    if column.is_pinned() {
        label.push_str(PIN_MARKER);
    }
    match &column.rename_draft {
        Some(draft) => {
            label.push_str(RENAME_MARKER);
            label.push_str(draft);
        }
        None => label.push_str(&column.label),
    }

    let arrow = column.sort.map(|direction| match direction {
        SortDirection::Desc => " ▼",
        SortDirection::Asc => " ▲",
    });
    let marker_len = usize::from(column.drop_indicator.is_some());
    let arrow_len = arrow.map_or(0, |a| a.chars().count());
    let text_width = width.saturating_sub(marker_len + arrow_len);

    let color = if column.is_pinned() {
        &theme.colors.pinned_fg
    } else {
        &theme.colors.header_fg
    };
    let mut cell = colored(&fit(&label, text_width), color);
    if let Some(arrow) = arrow {
        cell.push_str(&colored(arrow, &theme.colors.sort_indicator));
    }

    let marker = colored(&DROP_MARKER.to_string(), &theme.colors.drop_indicator);
    match column.drop_indicator {
        Some(DropSide::Before) => format!("{marker}{cell}"),
        Some(DropSide::After) => format!("{cell}{marker}"),
        None => cell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldType;
    use crate::ui::helpers::strip_ansi;

    fn cell(label: &str) -> HeaderCell {
        HeaderCell {
            field_key: label.to_lowercase(),
            label: label.to_string(),
            help_text: None,
            field_type: FieldType::Text,
            width: 80.0,
            sticky_left: None,
            sortable: true,
            sort: None,
            draggable: true,
            hideable: true,
            resizing: false,
            rename_draft: None,
            drop_indicator: None,
        }
    }

    #[test]
    fn pinned_sorted_label_shows_marker_and_arrow() {
        let mut column = cell("Status");
        column.sticky_left = Some(0.0);
        column.sort = Some(SortDirection::Desc);
        let text = strip_ansi(&render_header_cell(&column, 12, &Theme::default()));
        assert_eq!(text, "⇤ Status   ▼");
        assert_eq!(text.chars().count(), 12);
    }

    #[test]
    fn drop_indicator_sits_on_requested_side() {
        let mut column = cell("Name");
        column.drop_indicator = Some(DropSide::Before);
        assert_eq!(strip_ansi(&render_header_cell(&column, 6, &Theme::default())), "┃Name ");
        column.drop_indicator = Some(DropSide::After);
        assert_eq!(strip_ansi(&render_header_cell(&column, 6, &Theme::default())), "Name ┃");
    }

    #[test]
    fn rename_draft_replaces_label() {
        let mut column = cell("Name");
        column.rename_draft = Some("Full".to_string());
        assert_eq!(strip_ansi(&render_header_cell(&column, 8, &Theme::default())), "✎ Full  ");
    }
}
