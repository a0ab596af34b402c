//! View model types representing renderable grid state.
//!
//! View models are immutable snapshots created by
//! [`GridState::compute_viewmodel`](crate::app::GridState::compute_viewmodel)
//! and consumed by the renderer or by a host that draws its own widgets. They
//! contain no business logic, only display-ready data: resolved labels, pixel
//! widths, sticky offsets, and formatted cell text.
//!
//! # Example
//!
//! ```rust
//! use gridview::ui::viewmodel::{EmptyState, GridViewModel};
//!
//! let vm = GridViewModel {
//!     selection_column: None,
//!     columns: vec![],
//!     rows: vec![],
//!     empty_state: Some(EmptyState { message: "No data available".into(), colspan: 0 }),
//!     open_menu: None,
//!     column_manager: None,
//!     total_width: 0.0,
//! };
//! assert!(vm.empty_state.is_some());
//! ```

use crate::app::modes::{DropSide, SortDirection};
use crate::domain::FieldType;

/// Complete grid view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct GridViewModel {
    /// Leading checkbox column, present when the grid is selectable.
    pub selection_column: Option<SelectionHeader>,

    /// Header cells in render order.
    pub columns: Vec<HeaderCell>,

    /// Body rows in data order.
    pub rows: Vec<BodyRow>,

    /// Set when there are no rows to show.
    pub empty_state: Option<EmptyState>,

    /// The open "..." menu, if any.
    pub open_menu: Option<HeaderMenu>,

    /// The column manager checklist, if open.
    pub column_manager: Option<ColumnManagerPanel>,

    /// Sum of all rendered column widths, selection column included.
    pub total_width: f64,
}

/// Header of the selection checkbox column.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionHeader {
    pub width: f64,
    pub all_selected: bool,
    /// Some but not all rows are selected (indeterminate checkbox).
    pub some_selected: bool,
}

/// One header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub field_key: String,
    /// Display name after session renames.
    pub label: String,
    pub help_text: Option<String>,
    pub field_type: FieldType,
    pub width: f64,
    /// Left offset in pixels for pinned columns.
    pub sticky_left: Option<f64>,
    pub sortable: bool,
    /// Direction indicator when this column is the active sort.
    pub sort: Option<SortDirection>,
    /// `false` for frozen and pinned columns.
    pub draggable: bool,
    /// Whether the menu offers "Hide".
    pub hideable: bool,
    /// A resize gesture is in progress on this column.
    pub resizing: bool,
    /// Text of the inline rename input while renaming.
    pub rename_draft: Option<String>,
    /// Insertion indicator while another column is dragged over this one.
    pub drop_indicator: Option<DropSide>,
}

impl HeaderCell {
    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.sticky_left.is_some()
    }
}

/// One body row.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRow {
    /// Resolved row key.
    pub key: String,
    /// Position in the data set.
    pub index: usize,
    pub selected: bool,
    pub cells: Vec<BodyCell>,
}

/// One formatted body cell.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyCell {
    pub field_key: String,
    pub text: String,
    pub sticky_left: Option<f64>,
}

/// Single placeholder row shown when there is no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    /// Number of columns the placeholder spans, selection column included.
    pub colspan: usize,
}

/// Entries of a column's "..." menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Rename,
    Hide,
}

impl MenuItem {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rename => "Rename",
            Self::Hide => "Hide column",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMenu {
    pub field_key: String,
    pub items: Vec<MenuItem>,
}

/// Checklist of non-pinned, non-action columns in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnManagerPanel {
    pub entries: Vec<ColumnManagerEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnManagerEntry {
    pub field_key: String,
    pub label: String,
    /// Whether the column is currently shown.
    pub checked: bool,
}
