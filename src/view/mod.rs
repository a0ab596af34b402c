//! Tabular view controller.
//!
//! [`TableView`] holds the full row set of a list page together with the
//! search query, filter rules, sort, and page, and derives the rows of the
//! current page. It is the owner-side counterpart of the grid: the grid emits
//! [`Action`]s, the view applies the ones about data ordering, and the page
//! hands [`TableView::page_rows`] back to the grid.
//!
//! # Example
//!
//! ```rust
//! use gridview::domain::{FieldDefinition, FieldType};
//! use gridview::view::{Condition, FilterRule, TableView};
//! use serde_json::json;
//!
//! let fields = vec![
//!     FieldDefinition::new("name", "Name"),
//!     FieldDefinition::new("days", "Days").with_type(FieldType::Number),
//! ];
//! let rows = vec![
//!     json!({"name": "Ada", "days": 3}).as_object().cloned().unwrap(),
//!     json!({"name": "Lin", "days": 8}).as_object().cloned().unwrap(),
//! ];
//!
//! let mut view = TableView::new(fields, rows, 10);
//! view.set_filters(vec![FilterRule::new("days", Condition::Gt(5.0))]).unwrap();
//! assert_eq!(view.total_matches(), 1);
//! assert_eq!(view.page_rows()[0]["name"], "Lin");
//! ```

pub mod filter;
pub mod operators;
pub mod pagination;
pub mod search;
pub mod sort;

pub use filter::{Condition, FilterRule};
pub use operators::{operators_for, OperatorKind};
pub use pagination::Pagination;
pub use search::RowSearch;

use crate::app::{Action, SortDescriptor};
use crate::domain::error::{GridError, Result};
use crate::domain::{FieldDefinition, Row};
use crate::Config;

/// Search, filter, sort, and pagination over an in-memory row set.
#[derive(Debug, Clone)]
pub struct TableView {
    definitions: Vec<FieldDefinition>,
    rows: Vec<Row>,
    search: String,
    filters: Vec<FilterRule>,
    sort: Option<SortDescriptor>,
    pagination: Pagination,
    /// Positions into `rows` that pass search and filters, in sorted order.
    matched: Vec<usize>,
}

impl TableView {
    #[must_use]
    pub fn new(definitions: Vec<FieldDefinition>, rows: Vec<Row>, page_size: usize) -> Self {
        let mut view = Self {
            definitions,
            rows,
            search: String::new(),
            filters: Vec::new(),
            sort: None,
            pagination: Pagination::new(page_size),
            matched: Vec::new(),
        };
        view.refresh();
        view
    }

    /// Creates a view paged by `config.page_size`.
    #[must_use]
    pub fn with_config(definitions: Vec<FieldDefinition>, rows: Vec<Row>, config: &Config) -> Self {
        Self::new(definitions, rows, config.page_size)
    }

    #[must_use]
    pub fn definitions(&self) -> &[FieldDefinition] {
        &self.definitions
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn filters(&self) -> &[FilterRule] {
        &self.filters
    }

    #[must_use]
    pub fn sort(&self) -> Option<&SortDescriptor> {
        self.sort.as_ref()
    }

    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Number of rows passing search and filters, across all pages.
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.matched.len()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.matched.len())
    }

    /// Replaces the row set, keeping query state.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.refresh();
    }

    /// Sets the search query and returns to page 1.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.pagination.page = 1;
        self.refresh();
    }

    /// Replaces the filter rules. All rules must hold for a row to match.
    ///
    /// Every rule is validated against its field first. On error nothing
    /// changes. The current page is kept and clamped to the new result.
    ///
    /// # Errors
    ///
    /// - [`GridError::UnknownField`] if a rule targets an undefined field
    /// - [`GridError::UnsupportedOperator`] / [`GridError::InvalidFilter`] from
    ///   [`FilterRule::validate`]
    pub fn set_filters(&mut self, filters: Vec<FilterRule>) -> Result<()> {
        for rule in &filters {
            let field = self
                .field(&rule.field_key)
                .ok_or_else(|| GridError::UnknownField(rule.field_key.clone()))?;
            rule.validate(field)?;
        }
        tracing::debug!(count = filters.len(), "filters replaced");
        self.filters = filters;
        self.refresh();
        Ok(())
    }

    /// Sets the sort, keeping the current page.
    ///
    /// A sort on a field not marked sortable is kept but has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownField`] if the sort names an undefined field.
    pub fn set_sort(&mut self, sort: Option<SortDescriptor>) -> Result<()> {
        if let Some(s) = &sort {
            if self.field(&s.field).is_none() {
                return Err(GridError::UnknownField(s.field.clone()));
            }
        }
        self.sort = sort;
        self.refresh();
        Ok(())
    }

    /// Moves to `page`, clamped to the available pages.
    pub fn set_page(&mut self, page: usize) {
        self.pagination.page = page;
        self.pagination.clamp(self.matched.len());
    }

    /// Applies a grid action that affects row order.
    ///
    /// `SortChanged` replaces the sort and returns to page 1. A sort naming an
    /// unknown field clears the sort. Other actions are ignored.
    ///
    /// Returns `true` if the view changed.
    pub fn apply_grid_action(&mut self, action: &Action) -> bool {
        match action {
            Action::SortChanged(sort) => {
                let known = sort.as_ref().filter(|s| self.field(&s.field).is_some()).cloned();
                if known.is_none() && sort.is_some() {
                    tracing::debug!(?sort, "sort on unknown field dropped");
                }
                self.sort = known;
                self.pagination.page = 1;
                self.refresh();
                true
            }
            _ => false,
        }
    }

    /// Recomputes the matching rows and clamps the page.
    pub fn refresh(&mut self) {
        let _span = tracing::debug_span!(
            "table_view_refresh",
            total_rows = self.rows.len(),
            filters = self.filters.len(),
            query_len = self.search.len()
        )
        .entered();

        let search = RowSearch::parse(&self.search);
        let mut matched: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                self.filters.iter().all(|rule| match self.field(&rule.field_key) {
                    Some(field) => rule.matches_field(row, field),
                    None => rule.matches(row),
                })
            })
            .filter(|(_, row)| {
                search
                    .as_ref()
                    .map_or(true, |s| s.matches(row, &self.definitions))
            })
            .map(|(i, _)| i)
            .collect();

        if let Some(descriptor) = &self.sort {
            match self.field(&descriptor.field) {
                Some(field) if field.is_sortable && !field.is_action() => {
                    sort::sort_indices(&self.rows, &mut matched, descriptor, field.field_type);
                }
                _ => tracing::trace!(field = %descriptor.field, "sort field not sortable, skipped"),
            }
        }

        self.matched = matched;
        self.pagination.clamp(self.matched.len());

        tracing::debug!(
            matched = self.matched.len(),
            page = self.pagination.page,
            "table view refreshed"
        );
    }

    /// Rows of the current page, in display order.
    #[must_use]
    pub fn page_rows(&self) -> Vec<&Row> {
        self.matched
            .get(self.pagination.range(self.matched.len()))
            .unwrap_or_default()
            .iter()
            .filter_map(|&i| self.rows.get(i))
            .collect()
    }

    fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.definitions.iter().find(|f| f.field_key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SortDirection;
    use crate::domain::FieldType;
    use serde_json::json;

    fn fields() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("name", "Name").sortable(),
            FieldDefinition::new("status", "Status")
                .with_type(FieldType::Dropdown)
                .sortable(),
            FieldDefinition::new("days", "Days").with_type(FieldType::Number),
        ]
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| {
                let status = if i % 3 == 0 { "Approved" } else { "Pending" };
                json!({"id": i, "name": format!("Employee {i:02}"), "status": status, "days": i})
                    .as_object()
                    .cloned()
                    .unwrap_or_default()
            })
            .collect()
    }

    fn names(view: &TableView) -> Vec<String> {
        view.page_rows()
            .iter()
            .map(|r| r["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn page_clamps_after_filter_shrinks_result() {
        let mut view = TableView::new(fields(), rows(25), 10);
        view.set_page(3);
        assert_eq!(view.pagination().page, 3);
        assert_eq!(view.page_rows().len(), 5);

        view.set_filters(vec![FilterRule::new("days", Condition::Lt(12.0))])
            .unwrap();
        assert_eq!(view.total_matches(), 12);
        assert_eq!(view.pagination().page, 2);
        assert_eq!(names(&view), vec!["Employee 10", "Employee 11"]);
    }

    #[test]
    fn grid_sort_action_reorders_and_resets_page() {
        let mut view = TableView::new(fields(), rows(6), 2);
        view.set_page(2);

        let changed = view.apply_grid_action(&Action::SortChanged(Some(SortDescriptor::new(
            "status",
            SortDirection::Asc,
        ))));
        assert!(changed);
        assert_eq!(view.pagination().page, 1);
        assert_eq!(names(&view), vec!["Employee 00", "Employee 03"]);

        assert!(!view.apply_grid_action(&Action::HiddenFieldsChanged(vec![])));
    }

    #[test]
    fn unsortable_field_leaves_data_order() {
        let mut view = TableView::new(fields(), rows(3), 10);
        view.set_sort(Some(SortDescriptor::new("days", SortDirection::Desc)))
            .unwrap();
        assert_eq!(names(&view)[0], "Employee 00");
    }

    #[test]
    fn rejected_filters_leave_view_unchanged() {
        let mut view = TableView::new(fields(), rows(4), 10);
        let err = view.set_filters(vec![
            FilterRule::new("days", Condition::Gt(1.0)),
            FilterRule::new("name", Condition::Gt(1.0)),
        ]);
        assert!(matches!(err, Err(GridError::UnsupportedOperator { .. })));
        assert!(view.filters().is_empty());
        assert_eq!(view.total_matches(), 4);

        assert!(matches!(
            view.set_filters(vec![FilterRule::new("salary", Condition::IsEmpty)]),
            Err(GridError::UnknownField(_))
        ));
        assert!(matches!(
            view.set_sort(Some(SortDescriptor::new("salary", SortDirection::Asc))),
            Err(GridError::UnknownField(_))
        ));
    }

    #[test]
    fn epoch_millis_date_range_counts_matching_rows() {
        let defs = vec![FieldDefinition::new("d", "Hired").with_type(FieldType::Date)];
        let rows: Vec<Row> = ["2024-06-01", "2023-11-30", "2025-02-14"]
            .iter()
            .map(|d| json!({"d": d}).as_object().cloned().unwrap_or_default())
            .collect();
        let mut view = TableView::new(defs, rows, 10);

        view.set_filters(vec![FilterRule::new(
            "d",
            Condition::Between(json!(1_704_067_200_000_i64), json!(1_735_603_200_000_i64)),
        )])
        .unwrap();
        assert_eq!(view.total_matches(), 1);
        assert_eq!(view.page_rows()[0]["d"], "2024-06-01");
    }

    #[test]
    fn search_and_filters_combine() {
        let mut view = TableView::with_config(fields(), rows(12), &Config::default());
        view.set_filters(vec![FilterRule::new(
            "status",
            Condition::Equals(json!("approved")),
        )])
        .unwrap();
        view.set_search("employee 0");
        assert_eq!(view.total_matches(), 4);
        assert_eq!(view.page_count(), 1);

        view.set_search("nobody-here");
        assert_eq!(view.total_matches(), 0);
        assert_eq!(view.pagination().page, 1);
        assert!(view.page_rows().is_empty());
    }
}
