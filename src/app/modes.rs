//! Sort and pointer-interaction state types.
//!
//! This module defines the small state machines that drive header interaction:
//!
//! - **Sort cycle**: `none → desc → asc → none` per column, single column at a time
//! - **Drag reorder**: `Idle → Dragging → Idle` (on drop or drag end)
//! - **Resize**: `Idle → Resizing → Idle` (commit on pointer up)
//! - **Rename**: `Idle → Renaming → Idle` (commit or cancel)
//!
//! Only one interaction is active at a time; starting a new one replaces the
//! previous one without committing it.

use serde::{Deserialize, Serialize};

/// Absolute floor for column widths during resize, in pixels.
pub const MIN_COLUMN_WIDTH: f64 = 80.0;

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// The single active sort: which field, which direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDescriptor {
    pub field: String,
    pub direction: SortDirection,
}

impl SortDescriptor {
    #[must_use]
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// Computes the sort that follows a click on `field`'s header.
///
/// Clicking the active column steps `desc → asc → none`; clicking any other
/// column starts it at `desc`.
///
/// # Examples
///
/// ```
/// use gridview::app::modes::{next_sort, SortDescriptor, SortDirection};
///
/// let first = next_sort(None, "status");
/// assert_eq!(first, Some(SortDescriptor::new("status", SortDirection::Desc)));
/// let second = next_sort(first.as_ref(), "status");
/// assert_eq!(second, Some(SortDescriptor::new("status", SortDirection::Asc)));
/// assert_eq!(next_sort(second.as_ref(), "status"), None);
/// ```
#[must_use]
pub fn next_sort(current: Option<&SortDescriptor>, field: &str) -> Option<SortDescriptor> {
    match current {
        Some(active) if active.field == field => match active.direction {
            SortDirection::Desc => Some(SortDescriptor::new(field, SortDirection::Asc)),
            SortDirection::Asc => None,
        },
        _ => Some(SortDescriptor::new(field, SortDirection::Desc)),
    }
}

/// Horizontal extent of a header cell, as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderRect {
    pub left: f64,
    pub width: f64,
}

/// Which side of the drop target the dragged column lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSide {
    Before,
    After,
}

impl DropSide {
    /// Picks a side by comparing the cursor with the target cell's midpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridview::app::modes::{DropSide, HeaderRect};
    ///
    /// let rect = HeaderRect { left: 100.0, width: 80.0 };
    /// assert_eq!(DropSide::from_cursor(139.0, rect), DropSide::Before);
    /// assert_eq!(DropSide::from_cursor(140.0, rect), DropSide::After);
    /// ```
    #[must_use]
    pub fn from_cursor(cursor_x: f64, rect: HeaderRect) -> Self {
        if cursor_x - rect.left < rect.width / 2.0 {
            Self::Before
        } else {
            Self::After
        }
    }
}

/// Width after dragging a resize handle from `start_x` to `current_x`.
///
/// # Examples
///
/// ```
/// use gridview::app::modes::resized_width;
///
/// assert_eq!(resized_width(100.0, 0.0, 40.0), 140.0);
/// assert_eq!(resized_width(100.0, 0.0, -500.0), 80.0);
/// ```
#[must_use]
pub fn resized_width(start_width: f64, start_x: f64, current_x: f64) -> f64 {
    (start_width + (current_x - start_x)).max(MIN_COLUMN_WIDTH)
}

/// The header interaction currently in progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,

    /// A column header is being dragged.
    Dragging {
        source: String,
        /// Current drop target and side, for the insertion indicator.
        over: Option<(String, DropSide)>,
    },

    /// A column's right edge is being dragged.
    Resizing {
        field_key: String,
        start_x: f64,
        start_width: f64,
        current_width: f64,
    },

    /// A header label is being edited inline.
    Renaming { field_key: String, draft: String },
}

impl Interaction {
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_clicks_cycle_back_to_unsorted() {
        let mut sort = None;
        let mut seen = vec![];
        for _ in 0..3 {
            sort = next_sort(sort.as_ref(), "status");
            seen.push(sort.as_ref().map(|s| s.direction));
        }
        assert_eq!(
            seen,
            vec![Some(SortDirection::Desc), Some(SortDirection::Asc), None]
        );
    }

    #[test]
    fn other_column_always_starts_descending() {
        let asc = SortDescriptor::new("name", SortDirection::Asc);
        let desc = SortDescriptor::new("name", SortDirection::Desc);
        for active in [&asc, &desc] {
            assert_eq!(
                next_sort(Some(active), "status"),
                Some(SortDescriptor::new("status", SortDirection::Desc))
            );
        }
    }

    #[test]
    fn resize_is_clamped_at_floor() {
        assert_eq!(resized_width(100.0, 300.0, -200.0), MIN_COLUMN_WIDTH);
        assert_eq!(resized_width(60.0, 0.0, 0.0), MIN_COLUMN_WIDTH);
        assert_eq!(resized_width(120.0, 10.0, 15.0), 125.0);
    }

    #[test]
    fn drop_side_uses_strict_midpoint() {
        let rect = HeaderRect { left: 0.0, width: 100.0 };
        assert_eq!(DropSide::from_cursor(0.0, rect), DropSide::Before);
        assert_eq!(DropSide::from_cursor(49.9, rect), DropSide::Before);
        assert_eq!(DropSide::from_cursor(50.0, rect), DropSide::After);
        assert_eq!(DropSide::from_cursor(250.0, rect), DropSide::After);
    }

    #[test]
    fn sort_descriptor_serializes_lowercase_direction() {
        let json =
            serde_json::to_string(&SortDescriptor::new("status", SortDirection::Desc)).unwrap();
        assert_eq!(json, r#"{"field":"status","direction":"desc"}"#);
    }
}
