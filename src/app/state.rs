//! Grid state management and view model computation.
//!
//! This module defines [`GridState`], the state container for one grid
//! instance, and [`GridProps`], the inputs supplied by the owning page. The
//! state keeps the owner's props and rows untouched and layers local overrides
//! on top of them.
//!
//! # State Components
//!
//! - **Order**: Column keys in display order (local, or controlled by props)
//! - **Widths**: Per-column pixel widths (local, or controlled by props)
//! - **Hidden set**: Columns removed from view (local, or controlled by props)
//! - **Display names**: Per-session label overrides from inline rename
//! - **Pinned keys**: Props, then configured defaults, then frozen definitions
//! - **Sort**: The single active sort descriptor (local, or controlled by props)
//! - **Selection**: Selected row keys
//! - **Interaction**: The drag/resize/rename gesture in progress
//!
//! # Controlled State
//!
//! Each of sort, order, widths, and hidden set is *controlled* when the
//! corresponding prop is `Some`. Interactions on controlled state still emit
//! their actions, but only the props decide what the next view model shows.
//!
//! # Example
//!
//! ```rust
//! use gridview::app::{GridProps, GridState};
//! use gridview::domain::{FieldDefinition, FieldType};
//! use gridview::ui::Theme;
//!
//! let props = GridProps::new(vec![
//!     FieldDefinition::new("name", "Name"),
//!     FieldDefinition::new("action", "Action").with_type(FieldType::Action).with_order(-1),
//!     FieldDefinition::new("status", "Status").with_order(1),
//! ]);
//! let state = GridState::new(props, Theme::default());
//! let keys: Vec<&str> = state.render_fields().iter().map(|f| f.field_key.as_str()).collect();
//! assert_eq!(keys, ["name", "status", "action"]);
//! ```

use super::modes::{DropSide, Interaction, SortDescriptor};
use crate::domain::{resolve_path, FieldDefinition, Row, RowKey};
use crate::ui::cell::{format_cell, CellContext, CellRenderer};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyCell, BodyRow, ColumnManagerEntry, ColumnManagerPanel, EmptyState, GridViewModel,
    HeaderCell, HeaderMenu, MenuItem, SelectionHeader,
};
use crate::Config;
use std::collections::{HashMap, HashSet};

/// Message shown in the single row rendered for an empty data set.
pub const EMPTY_MESSAGE: &str = "No data available";

/// Inputs supplied by the page that owns the grid.
#[derive(Debug, Clone, Default)]
pub struct GridProps {
    pub field_definitions: Vec<FieldDefinition>,
    pub row_key: RowKey,
    /// Renders a checkbox column for row selection.
    pub selectable: bool,
    /// `Some` makes the sort controlled; `Some(None)` means "controlled, unsorted".
    pub sort_config: Option<Option<SortDescriptor>>,
    pub column_widths: Option<HashMap<String, f64>>,
    pub hidden_field_keys: Option<Vec<String>>,
    pub controlled_column_order: Option<Vec<String>>,
    /// Columns that cannot be picked up by drag.
    pub frozen_column_keys: Vec<String>,
    /// Columns kept sticky at the left edge, in this order.
    pub pinned_column_keys: Vec<String>,
}

impl GridProps {
    #[must_use]
    pub fn new(field_definitions: Vec<FieldDefinition>) -> Self {
        Self {
            field_definitions,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_row_key(mut self, row_key: RowKey) -> Self {
        self.row_key = row_key;
        self
    }

    #[must_use]
    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    #[must_use]
    pub fn with_sort_config(mut self, sort: Option<SortDescriptor>) -> Self {
        self.sort_config = Some(sort);
        self
    }

    #[must_use]
    pub fn with_column_widths(mut self, widths: HashMap<String, f64>) -> Self {
        self.column_widths = Some(widths);
        self
    }

    #[must_use]
    pub fn with_hidden_field_keys(mut self, keys: Vec<String>) -> Self {
        self.hidden_field_keys = Some(keys);
        self
    }

    #[must_use]
    pub fn with_column_order(mut self, order: Vec<String>) -> Self {
        self.controlled_column_order = Some(order);
        self
    }

    #[must_use]
    pub fn with_frozen_columns(mut self, keys: Vec<String>) -> Self {
        self.frozen_column_keys = keys;
        self
    }

    #[must_use]
    pub fn with_pinned_columns(mut self, keys: Vec<String>) -> Self {
        self.pinned_column_keys = keys;
        self
    }
}

/// State container for one grid instance.
///
/// Mutated by [`handle_event`](super::handle_event) in response to pointer and
/// menu input. View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct GridState {
    pub(crate) props: GridProps,
    pub(crate) data: Vec<Row>,
    pub config: Config,
    pub theme: Theme,

    pub(crate) order: Vec<String>,
    pub(crate) widths: HashMap<String, f64>,
    pub(crate) hidden: HashSet<String>,
    pub(crate) display_names: HashMap<String, String>,
    pub(crate) sort: Option<SortDescriptor>,
    pub(crate) selected: HashSet<String>,

    /// Gesture in progress.
    pub interaction: Interaction,

    /// Column whose "..." menu is open.
    pub open_menu: Option<String>,

    /// Whether the column manager checklist is showing.
    pub column_manager_open: bool,
}

impl GridState {
    /// Creates grid state with the default configuration.
    #[must_use]
    pub fn new(props: GridProps, theme: Theme) -> Self {
        Self::with_config(props, Config::default(), theme)
    }

    /// Creates grid state with an explicit configuration.
    ///
    /// Local order starts from `display_order` (ties keep definition order) and
    /// the local hidden set starts from definitions with `is_visible == false`.
    #[must_use]
    pub fn with_config(props: GridProps, config: Config, theme: Theme) -> Self {
        let order = display_ordered(&props.field_definitions)
            .into_iter()
            .map(|f| f.field_key.clone())
            .collect();
        let hidden = props
            .field_definitions
            .iter()
            .filter(|f| !f.is_visible)
            .map(|f| f.field_key.clone())
            .collect();

        tracing::debug!(
            field_count = props.field_definitions.len(),
            selectable = props.selectable,
            "grid state created"
        );

        Self {
            props,
            data: Vec::new(),
            config,
            theme,
            order,
            widths: HashMap::new(),
            hidden,
            display_names: HashMap::new(),
            sort: None,
            selected: HashSet::new(),
            interaction: Interaction::Idle,
            open_menu: None,
            column_manager_open: false,
        }
    }

    #[must_use]
    pub const fn props(&self) -> &GridProps {
        &self.props
    }

    #[must_use]
    pub fn data(&self) -> &[Row] {
        &self.data
    }

    /// Replaces the props, reconciling local state with the new definitions.
    ///
    /// Surviving keys keep their local position and new fields are appended in
    /// `display_order`. Local state for removed fields is dropped, and a gesture
    /// on a removed field is abandoned.
    pub fn set_props(&mut self, props: GridProps) {
        let _span = tracing::debug_span!(
            "set_props",
            field_count = props.field_definitions.len()
        )
        .entered();

        let known: HashSet<&str> = props
            .field_definitions
            .iter()
            .map(|f| f.field_key.as_str())
            .collect();

        let previous: HashSet<String> = self.order.iter().cloned().collect();
        self.order.retain(|k| known.contains(k.as_str()));
        for field in display_ordered(&props.field_definitions) {
            if !previous.contains(&field.field_key) {
                self.order.push(field.field_key.clone());
                if !field.is_visible {
                    self.hidden.insert(field.field_key.clone());
                }
            }
        }

        self.hidden.retain(|k| known.contains(k.as_str()));
        self.widths.retain(|k, _| known.contains(k.as_str()));
        self.display_names.retain(|k, _| known.contains(k.as_str()));
        if self
            .sort
            .as_ref()
            .is_some_and(|s| !known.contains(s.field.as_str()))
        {
            tracing::debug!("sorted field removed, clearing sort");
            self.sort = None;
        }
        if let Some(key) = self.interaction_field() {
            if !known.contains(key) {
                self.interaction = Interaction::Idle;
            }
        }
        if self.open_menu.as_deref().is_some_and(|k| !known.contains(k)) {
            self.open_menu = None;
        }

        self.props = props;
    }

    /// Replaces the rows. Selection is kept by key.
    pub fn set_data(&mut self, data: Vec<Row>) {
        tracing::trace!(row_count = data.len(), "grid data replaced");
        self.data = data;
    }

    /// Looks up a field definition by key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.props
            .field_definitions
            .iter()
            .find(|f| f.field_key == key)
    }

    /// Column order in effect: controlled order if supplied, else local order.
    ///
    /// A controlled order is normalized: unknown and duplicate keys are dropped
    /// and fields it omits are appended in `display_order`.
    #[must_use]
    pub fn effective_order(&self) -> Vec<String> {
        let source = self
            .props
            .controlled_column_order
            .as_deref()
            .unwrap_or(&self.order);

        let mut seen = HashSet::new();
        let mut order: Vec<String> = source
            .iter()
            .filter(|k| self.field(k).is_some() && seen.insert(k.as_str()))
            .cloned()
            .collect();
        for field in display_ordered(&self.props.field_definitions) {
            if !seen.contains(field.field_key.as_str()) {
                order.push(field.field_key.clone());
            }
        }
        order
    }

    /// Width in effect for a column.
    ///
    /// Resolution order: live resize draft, controlled width, local width, the
    /// definition's width, then the configured default.
    #[must_use]
    pub fn column_width(&self, key: &str) -> f64 {
        if let Interaction::Resizing {
            field_key,
            current_width,
            ..
        } = &self.interaction
        {
            if field_key == key {
                return *current_width;
            }
        }
        if let Some(width) = self
            .props
            .column_widths
            .as_ref()
            .and_then(|w| w.get(key))
            .filter(|w| w.is_finite() && **w > 0.0)
        {
            return *width;
        }
        if let Some(width) = self.widths.get(key) {
            return *width;
        }
        self.field(key)
            .and_then(|f| f.column_width.as_ref())
            .and_then(crate::domain::ColumnWidth::to_pixels)
            .unwrap_or(self.config.default_column_width)
    }

    /// Whether a column is in the hidden set in effect.
    ///
    /// Pinned columns may be in the hidden set and still render.
    #[must_use]
    pub fn is_hidden(&self, key: &str) -> bool {
        self.props.hidden_field_keys.as_ref().map_or_else(
            || self.hidden.contains(key),
            |keys| keys.iter().any(|k| k == key),
        )
    }

    /// The hidden set in effect, in column order.
    #[must_use]
    pub fn hidden_keys(&self) -> Vec<String> {
        self.effective_order()
            .into_iter()
            .filter(|k| self.is_hidden(k))
            .collect()
    }

    /// Header label: the session override if renamed, else the definition's name.
    #[must_use]
    pub fn display_name(&self, key: &str) -> String {
        self.display_names
            .get(key)
            .cloned()
            .or_else(|| self.field(key).map(|f| f.display_name.clone()))
            .unwrap_or_default()
    }

    /// Sort in effect.
    ///
    /// A controlled descriptor naming an unknown, unsortable, or action column
    /// is treated as no sort.
    #[must_use]
    pub fn sort(&self) -> Option<SortDescriptor> {
        let sort = match &self.props.sort_config {
            Some(controlled) => controlled.as_ref(),
            None => self.sort.as_ref(),
        }?;
        let valid = self
            .field(&sort.field)
            .is_some_and(|f| f.is_sortable && !f.is_action());
        if !valid {
            tracing::trace!(field = %sort.field, "ignoring sort on unsortable field");
        }
        valid.then(|| sort.clone())
    }

    /// Pinned column keys in pin order.
    ///
    /// Props come first, then configured default pins, then frozen definitions
    /// in `display_order`. Unknown keys are dropped; the first occurrence wins.
    #[must_use]
    pub fn pinned_keys(&self) -> Vec<String> {
        let freezed = display_ordered(&self.props.field_definitions)
            .into_iter()
            .filter(|f| f.is_freezed)
            .map(|f| &f.field_key);

        let mut seen = HashSet::new();
        self.props
            .pinned_column_keys
            .iter()
            .chain(self.config.default_pinned_keys.iter())
            .chain(freezed)
            .filter(|k| self.field(k).is_some() && seen.insert(k.as_str()))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn is_pinned(&self, key: &str) -> bool {
        self.pinned_keys().iter().any(|k| k == key)
    }

    /// Whether a column can never be a drag source (frozen or pinned).
    #[must_use]
    pub fn is_drag_locked(&self, key: &str) -> bool {
        self.props.frozen_column_keys.iter().any(|k| k == key) || self.is_pinned(key)
    }

    /// Columns that are shown: in order, existing, and not hidden unless pinned.
    #[must_use]
    pub fn visible_fields(&self) -> Vec<&FieldDefinition> {
        let pinned = self.pinned_keys();
        self.effective_order()
            .iter()
            .filter_map(|k| self.field(k))
            .filter(|f| !self.is_hidden(&f.field_key) || pinned.contains(&f.field_key))
            .collect()
    }

    /// Visible columns in render order: pinned, then others, then actions last.
    #[must_use]
    pub fn render_fields(&self) -> Vec<&FieldDefinition> {
        let visible = self.visible_fields();
        let pinned = self.pinned_keys();

        let mut fields: Vec<&FieldDefinition> = pinned
            .iter()
            .filter_map(|k| visible.iter().find(|f| &f.field_key == k).copied())
            .collect();
        let (actions, others): (Vec<&FieldDefinition>, Vec<&FieldDefinition>) = visible
            .into_iter()
            .filter(|f| !pinned.contains(&f.field_key))
            .partition(|f| f.is_action());
        fields.extend(others);
        fields.extend(actions);
        fields
    }

    /// Left offset of a pinned column, in pixels.
    ///
    /// The selection column width (when selectable) plus the widths of all
    /// pinned columns rendered before it. `None` for non-pinned or non-rendered
    /// columns.
    #[must_use]
    pub fn sticky_offset(&self, key: &str) -> Option<f64> {
        let pinned = self.pinned_keys();
        if !pinned.iter().any(|k| k == key) {
            return None;
        }
        let mut offset = self.selection_width().unwrap_or(0.0);
        for field in self.render_fields() {
            if field.field_key == key {
                return Some(offset);
            }
            if pinned.contains(&field.field_key) {
                offset += self.column_width(&field.field_key);
            }
        }
        None
    }

    /// Width of the selection checkbox column, if the grid is selectable.
    #[must_use]
    pub fn selection_width(&self) -> Option<f64> {
        self.props
            .selectable
            .then_some(self.config.selection_column_width)
    }

    /// Resolved key of every row, in data order.
    #[must_use]
    pub fn row_keys(&self) -> Vec<String> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, row)| self.props.row_key.resolve(row, i))
            .collect()
    }

    #[must_use]
    pub fn is_row_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    /// Selected row keys: rows in data order first, then keys of rows no
    /// longer present, sorted.
    #[must_use]
    pub fn selected_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::with_capacity(self.selected.len());
        for key in self.row_keys() {
            if self.selected.contains(&key) && !keys.contains(&key) {
                keys.push(key);
            }
        }
        let mut stale: Vec<String> = self
            .selected
            .iter()
            .filter(|k| !keys.contains(k))
            .cloned()
            .collect();
        stale.sort();
        keys.extend(stale);
        keys
    }

    /// Fields listed in the column manager: non-pinned, non-action, in
    /// `display_order`, paired with whether each is currently shown.
    #[must_use]
    pub fn column_manager_entries(&self) -> Vec<(&FieldDefinition, bool)> {
        let pinned = self.pinned_keys();
        display_ordered(&self.props.field_definitions)
            .into_iter()
            .filter(|f| !f.is_action() && !pinned.contains(&f.field_key))
            .map(|f| (f, !self.is_hidden(&f.field_key)))
            .collect()
    }

    /// Key of the field the current gesture applies to.
    pub(crate) fn interaction_field(&self) -> Option<&str> {
        match &self.interaction {
            Interaction::Idle => None,
            Interaction::Dragging { source, .. } => Some(source),
            Interaction::Resizing { field_key, .. } | Interaction::Renaming { field_key, .. } => {
                Some(field_key)
            }
        }
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Cells are produced by `cell_renderer` when it returns `Some`, otherwise
    /// by the default formatter for the field's type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gridview::app::{GridProps, GridState};
    /// use gridview::domain::FieldDefinition;
    /// use gridview::ui::Theme;
    ///
    /// let state = GridState::new(GridProps::new(vec![FieldDefinition::new("name", "Name")]), Theme::default());
    /// let vm = state.compute_viewmodel(None);
    /// assert_eq!(vm.empty_state.map(|e| e.colspan), Some(1));
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, cell_renderer: Option<&dyn CellRenderer>) -> GridViewModel {
        let _span = tracing::debug_span!(
            "compute_viewmodel",
            row_count = self.data.len(),
            has_cell_renderer = cell_renderer.is_some()
        )
        .entered();

        let fields = self.render_fields();
        let pinned = self.pinned_keys();
        let sort = self.sort();
        let selection_width = self.selection_width();

        let mut pinned_offset = selection_width.unwrap_or(0.0);
        let columns: Vec<HeaderCell> = fields
            .iter()
            .map(|field| {
                let key = field.field_key.as_str();
                let width = self.column_width(key);
                let is_pinned = pinned.iter().any(|k| k == key);
                let sticky_left = is_pinned.then(|| {
                    let offset = pinned_offset;
                    pinned_offset += width;
                    offset
                });
                HeaderCell {
                    field_key: field.field_key.clone(),
                    label: self.display_name(key),
                    help_text: field.help_text.clone(),
                    field_type: field.field_type,
                    width,
                    sticky_left,
                    sortable: field.is_sortable && !field.is_action(),
                    sort: sort
                        .as_ref()
                        .filter(|s| s.field == key)
                        .map(|s| s.direction),
                    draggable: !self.is_drag_locked(key),
                    hideable: !is_pinned && !field.is_action(),
                    resizing: matches!(
                        &self.interaction,
                        Interaction::Resizing { field_key, .. } if field_key == key
                    ),
                    rename_draft: match &self.interaction {
                        Interaction::Renaming { field_key, draft } if field_key == key => {
                            Some(draft.clone())
                        }
                        _ => None,
                    },
                    drop_indicator: match &self.interaction {
                        Interaction::Dragging {
                            over: Some((target, side)),
                            ..
                        } if target == key => Some(*side),
                        _ => None,
                    },
                }
            })
            .collect();

        let rows: Vec<BodyRow> = self
            .data
            .iter()
            .enumerate()
            .map(|(row_index, row)| {
                let key = self.props.row_key.resolve(row, row_index);
                let cells = fields
                    .iter()
                    .zip(&columns)
                    .map(|(field, column)| {
                        let value = resolve_path(row, &field.field_key);
                        let context = CellContext {
                            field,
                            row,
                            value,
                            row_index,
                        };
                        let text = cell_renderer
                            .and_then(|r| r.render_cell(&context))
                            .unwrap_or_else(|| format_cell(field.field_type, value));
                        BodyCell {
                            field_key: field.field_key.clone(),
                            text,
                            sticky_left: column.sticky_left,
                        }
                    })
                    .collect();
                BodyRow {
                    selected: self.selected.contains(&key),
                    key,
                    index: row_index,
                    cells,
                }
            })
            .collect();

        let empty_state = rows.is_empty().then(|| EmptyState {
            message: EMPTY_MESSAGE.to_string(),
            colspan: columns.len() + usize::from(selection_width.is_some()),
        });

        let selection_column = selection_width.map(|width| {
            let selected_count = rows.iter().filter(|r| r.selected).count();
            SelectionHeader {
                width,
                all_selected: !rows.is_empty() && selected_count == rows.len(),
                some_selected: selected_count > 0 && selected_count < rows.len(),
            }
        });

        let open_menu = self.open_menu.as_deref().and_then(|key| {
            let column = columns.iter().find(|c| c.field_key == key)?;
            let mut items = vec![MenuItem::Rename];
            if column.hideable {
                items.push(MenuItem::Hide);
            }
            Some(HeaderMenu {
                field_key: key.to_string(),
                items,
            })
        });

        let column_manager = self.column_manager_open.then(|| ColumnManagerPanel {
            entries: self
                .column_manager_entries()
                .into_iter()
                .map(|(field, checked)| ColumnManagerEntry {
                    field_key: field.field_key.clone(),
                    label: self.display_name(&field.field_key),
                    checked,
                })
                .collect(),
        });

        let total_width =
            selection_width.unwrap_or(0.0) + columns.iter().map(|c| c.width).sum::<f64>();

        tracing::trace!(
            column_count = columns.len(),
            total_width = total_width,
            "view model computed"
        );

        GridViewModel {
            selection_column,
            columns,
            rows,
            empty_state,
            open_menu,
            column_manager,
            total_width,
        }
    }
}

/// Definitions sorted by `display_order`, ties kept in definition order.
fn display_ordered(fields: &[FieldDefinition]) -> Vec<&FieldDefinition> {
    let mut ordered: Vec<&FieldDefinition> = fields.iter().collect();
    ordered.sort_by_key(|f| f.display_order);
    ordered
}

/// Moves `source` next to `target` on the given side.
///
/// Returns `order` unchanged when `target` is not in it.
#[must_use]
pub fn drop_position(order: &[String], source: &str, target: &str, side: DropSide) -> Vec<String> {
    let mut next: Vec<String> = order.iter().filter(|k| *k != source).cloned().collect();
    let Some(target_index) = next.iter().position(|k| k == target) else {
        return order.to_vec();
    };
    let insert_at = match side {
        DropSide::Before => target_index,
        DropSide::After => target_index + 1,
    };
    next.insert(insert_at, source.to_string());
    next
}
