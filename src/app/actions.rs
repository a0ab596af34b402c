//! Actions reporting grid interactions back to the owner.
//!
//! The event handler returns a `Vec<Action>` after processing each event. Each
//! action corresponds to one callback the owning page would receive: the grid
//! does not wait on them or track what the owner does with them. An owner that
//! controls a piece of state (sort, order, widths, hidden set) must apply the
//! matching action and pass the new value back through the props for the view
//! to change.
//!
//! # Example
//!
//! ```rust
//! use gridview::app::Action;
//! use gridview::app::modes::{SortDescriptor, SortDirection};
//!
//! let actions = vec![
//!     Action::SortChanged(Some(SortDescriptor::new("status", SortDirection::Desc))),
//!     Action::ColumnResized { field_key: "name".into(), width: 180.0 },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use super::modes::SortDescriptor;

/// Outbound notifications produced by [`handle_event`](super::handle_event).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The sort descriptor changed (`None` = unsorted).
    ///
    /// Advisory: rows are not reordered by the grid. The owner sorts the data
    /// and passes it back.
    SortChanged(Option<SortDescriptor>),

    /// A drag-and-drop produced a new column order (full key list).
    ColumnOrderChanged(Vec<String>),

    /// A resize gesture was committed.
    ColumnResized {
        field_key: String,
        width: f64,
    },

    /// The full set of hidden field keys after a hide/show toggle.
    HiddenFieldsChanged(Vec<String>),

    /// A single field was shown or hidden.
    FieldVisibilityChanged {
        field_key: String,
        visible: bool,
    },

    /// A header label was renamed inline.
    ColumnRenamed {
        field_key: String,
        display_name: String,
    },

    /// The selected row keys, in data order.
    SelectionChanged(Vec<String>),
}
