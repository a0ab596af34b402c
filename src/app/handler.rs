//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes pointer, menu, and
//! selection input, translating it into state changes and outbound actions.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The host translates its input (mouse, keyboard, touch) into [`Event`]s
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Local state is mutated unless the corresponding prop is controlled
//! 4. Actions are collected and returned to the owner
//!
//! # Event Types
//!
//! - **Sort**: `HeaderClicked`
//! - **Reorder**: `DragStart`, `DragOver`, `Drop`, `DragEnd`
//! - **Resize**: `ResizeStart`, `PointerMove`, `PointerUp`
//! - **Header menu**: `OpenMenu`, `CloseMenu`, `StartRename`, `RenameInput`,
//!   `CommitRename`, `CancelRename`, `HideColumn`
//! - **Column manager**: `ToggleColumnManager`, `ToggleFieldVisibility`
//! - **Selection**: `ToggleRowSelection`, `ToggleSelectAll`
//! - **Lifecycle**: `Teardown`
//!
//! # Example
//!
//! ```rust
//! use gridview::app::{handle_event, Action, Event, GridProps, GridState};
//! use gridview::domain::FieldDefinition;
//! use gridview::ui::Theme;
//!
//! let props = GridProps::new(vec![FieldDefinition::new("status", "Status").sortable()]);
//! let mut state = GridState::new(props, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::HeaderClicked { field_key: "status".into() })?;
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::SortChanged(Some(_))]));
//! # Ok::<(), gridview::domain::GridError>(())
//! ```

use super::modes::{next_sort, resized_width, DropSide, HeaderRect, Interaction};
use super::state::drop_position;
use crate::app::{Action, GridState};
use crate::domain::error::{GridError, Result};

/// Input events delivered by the host.
///
/// Coordinates are horizontal client positions in pixels. Each event
/// represents a discrete occurrence; the handler processes them sequentially.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A header cell was clicked (sort toggle).
    HeaderClicked { field_key: String },

    /// A header started being dragged.
    DragStart { field_key: String },

    /// The dragged header is over another header.
    DragOver {
        field_key: String,
        cursor_x: f64,
        rect: HeaderRect,
    },

    /// The dragged header was released over a target header.
    Drop {
        field_key: String,
        cursor_x: f64,
        rect: HeaderRect,
    },

    /// The drag finished without a drop.
    DragEnd,

    /// Pointer down on a column's right-edge resize handle.
    ResizeStart { field_key: String, cursor_x: f64 },

    /// Global pointer move while a resize is active.
    PointerMove { cursor_x: f64 },

    /// Global pointer release; commits an active resize.
    PointerUp,

    /// Opens a column's "..." menu.
    OpenMenu { field_key: String },

    /// Closes any open column menu.
    CloseMenu,

    /// Replaces a header label with an inline text input.
    StartRename { field_key: String },

    /// The inline rename input changed.
    RenameInput { text: String },

    /// Blur or Enter on the rename input.
    CommitRename,

    /// Escape on the rename input.
    CancelRename,

    /// "Hide" chosen from a column menu.
    HideColumn { field_key: String },

    /// Opens or closes the column manager checklist.
    ToggleColumnManager,

    /// A checkbox in the column manager was toggled.
    ToggleFieldVisibility { field_key: String },

    /// A row's selection checkbox was toggled.
    ToggleRowSelection { row_key: String },

    /// The header selection checkbox was toggled.
    ToggleSelectAll,

    /// The grid is going away; abandon gestures and close overlays.
    Teardown,
}

impl Event {
    fn coordinates(&self) -> Vec<f64> {
        match self {
            Self::DragOver { cursor_x, rect, .. } | Self::Drop { cursor_x, rect, .. } => {
                vec![*cursor_x, rect.left, rect.width]
            }
            Self::ResizeStart { cursor_x, .. } | Self::PointerMove { cursor_x } => vec![*cursor_x],
            _ => vec![],
        }
    }
}

/// Processes an event, mutates grid state, and returns actions for the owner.
///
/// # Returns
///
/// A tuple of whether the view must re-render and the actions to deliver, in
/// order. Events naming unknown fields or rows return `(false, [])`.
///
/// # Errors
///
/// Returns [`GridError::InvalidEvent`] for events carrying non-finite
/// coordinates. State is left untouched in that case.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event for debugging.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut GridState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if event.coordinates().iter().any(|c| !c.is_finite()) {
        tracing::debug!("rejecting event with non-finite coordinates");
        return Err(GridError::InvalidEvent(format!(
            "non-finite coordinate in {event:?}"
        )));
    }

    match event {
        Event::HeaderClicked { field_key } => {
            let Some(field) = state.field(field_key) else {
                return Ok((false, vec![]));
            };
            if !field.is_sortable || field.is_action() {
                tracing::trace!(field = %field_key, "header not sortable");
                return Ok((false, vec![]));
            }

            let next = next_sort(state.sort().as_ref(), field_key);
            tracing::debug!(field = %field_key, next = ?next, "sort toggled");
            if state.props.sort_config.is_none() {
                state.sort.clone_from(&next);
            }
            Ok((true, vec![Action::SortChanged(next)]))
        }
        Event::DragStart { field_key } => {
            if state.field(field_key).is_none() || state.is_drag_locked(field_key) {
                tracing::debug!(field = %field_key, "drag source locked or unknown");
                return Ok((false, vec![]));
            }
            state.interaction = Interaction::Dragging {
                source: field_key.clone(),
                over: None,
            };
            Ok((true, vec![]))
        }
        Event::DragOver {
            field_key,
            cursor_x,
            rect,
        } => {
            if state.field(field_key).is_none() {
                return Ok((false, vec![]));
            }
            let Interaction::Dragging { source, over } = &mut state.interaction else {
                return Ok((false, vec![]));
            };
            let next = (source.as_str() != field_key.as_str())
                .then(|| (field_key.clone(), DropSide::from_cursor(*cursor_x, *rect)));
            if *over == next {
                return Ok((false, vec![]));
            }
            *over = next;
            Ok((true, vec![]))
        }
        Event::Drop {
            field_key,
            cursor_x,
            rect,
        } => {
            let Interaction::Dragging { source, .. } = &state.interaction else {
                return Ok((false, vec![]));
            };
            let source = source.clone();
            state.interaction = Interaction::Idle;
            if source == *field_key || state.field(field_key).is_none() {
                return Ok((true, vec![]));
            }

            let side = DropSide::from_cursor(*cursor_x, *rect);
            let current = state.effective_order();
            let next = drop_position(&current, &source, field_key, side);
            if next == current {
                return Ok((true, vec![]));
            }

            tracing::debug!(
                source = %source,
                target = %field_key,
                side = ?side,
                "column reordered"
            );
            if state.props.controlled_column_order.is_none() {
                state.order.clone_from(&next);
            }
            Ok((true, vec![Action::ColumnOrderChanged(next)]))
        }
        Event::DragEnd => {
            if matches!(state.interaction, Interaction::Dragging { .. }) {
                state.interaction = Interaction::Idle;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::ResizeStart {
            field_key,
            cursor_x,
        } => {
            if state.field(field_key).is_none() {
                return Ok((false, vec![]));
            }
            let start_width = state.column_width(field_key);
            tracing::debug!(field = %field_key, start_width = start_width, "resize started");
            state.interaction = Interaction::Resizing {
                field_key: field_key.clone(),
                start_x: *cursor_x,
                start_width,
                current_width: start_width,
            };
            Ok((true, vec![]))
        }
        Event::PointerMove { cursor_x } => {
            let Interaction::Resizing {
                start_x,
                start_width,
                current_width,
                ..
            } = &mut state.interaction
            else {
                return Ok((false, vec![]));
            };
            let width = resized_width(*start_width, *start_x, *cursor_x);
            if (width - *current_width).abs() < f64::EPSILON {
                return Ok((false, vec![]));
            }
            *current_width = width;
            Ok((true, vec![]))
        }
        Event::PointerUp => {
            let Interaction::Resizing {
                field_key,
                current_width,
                ..
            } = &state.interaction
            else {
                return Ok((false, vec![]));
            };
            let (field_key, current_width) = (field_key.clone(), *current_width);
            state.interaction = Interaction::Idle;
            tracing::debug!(field = %field_key, width = current_width, "resize committed");
            if state.props.column_widths.is_none() {
                state.widths.insert(field_key.clone(), current_width);
            }
            Ok((
                true,
                vec![Action::ColumnResized {
                    field_key,
                    width: current_width,
                }],
            ))
        }
        Event::OpenMenu { field_key } => {
            if state.field(field_key).is_none() {
                return Ok((false, vec![]));
            }
            state.open_menu = Some(field_key.clone());
            Ok((true, vec![]))
        }
        Event::CloseMenu => Ok((state.open_menu.take().is_some(), vec![])),
        Event::StartRename { field_key } => {
            if state.field(field_key).is_none() {
                return Ok((false, vec![]));
            }
            state.open_menu = None;
            state.interaction = Interaction::Renaming {
                field_key: field_key.clone(),
                draft: state.display_name(field_key),
            };
            Ok((true, vec![]))
        }
        Event::RenameInput { text } => {
            let Interaction::Renaming { draft, .. } = &mut state.interaction else {
                return Ok((false, vec![]));
            };
            draft.clone_from(text);
            Ok((true, vec![]))
        }
        Event::CommitRename => {
            let Interaction::Renaming { field_key, draft } = &state.interaction else {
                return Ok((false, vec![]));
            };
            let (field_key, draft) = (field_key.clone(), draft.clone());
            state.interaction = Interaction::Idle;
            let label = draft.trim();
            if label.is_empty() || label == state.display_name(&field_key) {
                tracing::trace!(field = %field_key, "rename left label unchanged");
                return Ok((true, vec![]));
            }
            tracing::debug!(field = %field_key, label = %label, "column renamed");
            state
                .display_names
                .insert(field_key.clone(), label.to_string());
            Ok((
                true,
                vec![Action::ColumnRenamed {
                    field_key,
                    display_name: label.to_string(),
                }],
            ))
        }
        Event::CancelRename => {
            if matches!(state.interaction, Interaction::Renaming { .. }) {
                state.interaction = Interaction::Idle;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::HideColumn { field_key } => {
            let hideable = state
                .field(field_key)
                .is_some_and(|f| !f.is_action() && !state.is_pinned(field_key));
            if !hideable {
                tracing::debug!(field = %field_key, "column cannot be hidden");
                return Ok((false, vec![]));
            }
            let closed_menu = state.open_menu.take().is_some();
            if state.is_hidden(field_key) {
                return Ok((closed_menu, vec![]));
            }
            Ok((true, set_visibility(state, field_key, false)))
        }
        Event::ToggleColumnManager => {
            state.column_manager_open = !state.column_manager_open;
            Ok((true, vec![]))
        }
        Event::ToggleFieldVisibility { field_key } => {
            let listed = state
                .column_manager_entries()
                .iter()
                .any(|(f, _)| &f.field_key == field_key);
            if !listed {
                return Ok((false, vec![]));
            }
            let visible = state.is_hidden(field_key);
            Ok((true, set_visibility(state, field_key, visible)))
        }
        Event::ToggleRowSelection { row_key } => {
            if !state.props.selectable || !state.row_keys().contains(row_key) {
                return Ok((false, vec![]));
            }
            if !state.selected.remove(row_key) {
                state.selected.insert(row_key.clone());
            }
            tracing::trace!(
                row = %row_key,
                selected = state.selected.len(),
                "row selection toggled"
            );
            Ok((true, vec![Action::SelectionChanged(state.selected_keys())]))
        }
        Event::ToggleSelectAll => {
            let keys = state.row_keys();
            if !state.props.selectable || keys.is_empty() {
                return Ok((false, vec![]));
            }
            if keys.iter().all(|k| state.selected.contains(k)) {
                for key in &keys {
                    state.selected.remove(key);
                }
            } else {
                state.selected.extend(keys);
            }
            Ok((true, vec![Action::SelectionChanged(state.selected_keys())]))
        }
        Event::Teardown => {
            let changed = !state.interaction.is_idle()
                || state.open_menu.is_some()
                || state.column_manager_open;
            tracing::debug!(interaction = ?state.interaction, "grid torn down");
            state.interaction = Interaction::Idle;
            state.open_menu = None;
            state.column_manager_open = false;
            Ok((changed, vec![]))
        }
    }
}

/// Shows or hides one column and returns the resulting actions.
fn set_visibility(state: &mut GridState, field_key: &str, visible: bool) -> Vec<Action> {
    let mut hidden: Vec<String> = state
        .hidden_keys()
        .into_iter()
        .filter(|k| k != field_key)
        .collect();
    if !visible {
        hidden.push(field_key.to_string());
    }

    if state.props.hidden_field_keys.is_none() {
        if visible {
            state.hidden.remove(field_key);
        } else {
            state.hidden.insert(field_key.to_string());
        }
    }
    tracing::debug!(field = %field_key, visible = visible, "column visibility changed");

    vec![
        Action::HiddenFieldsChanged(hidden),
        Action::FieldVisibilityChanged {
            field_key: field_key.to_string(),
            visible,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{SortDescriptor, SortDirection};
    use crate::app::GridProps;
    use crate::domain::{FieldDefinition, FieldType, Row};
    use crate::ui::Theme;
    use serde_json::json;

    fn columns() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("name", "Name").with_order(0).sortable(),
            FieldDefinition::new("email", "Email").with_order(1).with_type(FieldType::Email),
            FieldDefinition::new("status", "Status")
                .with_order(2)
                .with_type(FieldType::Dropdown)
                .sortable(),
            FieldDefinition::new("action", "Action").with_order(3).with_type(FieldType::Action),
        ]
    }

    fn state_with(props: GridProps) -> GridState {
        GridState::new(props, Theme::default())
    }

    fn click(state: &mut GridState, key: &str) -> Vec<Action> {
        handle_event(state, &Event::HeaderClicked { field_key: key.into() })
            .map(|(_, actions)| actions)
            .unwrap_or_default()
    }

    fn rect(left: f64) -> HeaderRect {
        HeaderRect { left, width: 100.0 }
    }

    fn drag(state: &mut GridState, source: &str, target: &str, cursor_x: f64) -> Vec<Action> {
        handle_event(state, &Event::DragStart { field_key: source.into() }).unwrap();
        handle_event(
            state,
            &Event::Drop {
                field_key: target.into(),
                cursor_x,
                rect: rect(0.0),
            },
        )
        .unwrap()
        .1
    }

    #[test]
    fn sort_cycles_desc_asc_none() {
        let mut state = state_with(GridProps::new(columns()));
        let directions: Vec<Option<SortDirection>> = (0..3)
            .map(|_| match click(&mut state, "status").as_slice() {
                [Action::SortChanged(sort)] => sort.as_ref().map(|s| s.direction),
                other => panic!("unexpected actions {other:?}"),
            })
            .collect();
        assert_eq!(
            directions,
            vec![Some(SortDirection::Desc), Some(SortDirection::Asc), None]
        );
    }

    #[test]
    fn switching_columns_restarts_at_desc() {
        let mut state = state_with(GridProps::new(columns()));
        click(&mut state, "status");
        click(&mut state, "status");
        assert_eq!(
            click(&mut state, "name"),
            vec![Action::SortChanged(Some(SortDescriptor::new(
                "name",
                SortDirection::Desc
            )))]
        );
    }

    #[test]
    fn unsortable_and_action_headers_are_inert() {
        let mut state = state_with(GridProps::new(columns()));
        assert!(click(&mut state, "email").is_empty());
        assert!(click(&mut state, "action").is_empty());
        assert!(click(&mut state, "nope").is_empty());
    }

    #[test]
    fn controlled_sort_reports_but_does_not_change_locally() {
        let mut state = state_with(GridProps::new(columns()).with_sort_config(None));
        let actions = click(&mut state, "status");
        assert_eq!(
            actions,
            vec![Action::SortChanged(Some(SortDescriptor::new(
                "status",
                SortDirection::Desc
            )))]
        );
        assert_eq!(state.sort(), None);
        // Owner never applied it, so the next click still starts at desc.
        assert_eq!(click(&mut state, "status"), actions);
    }

    #[test]
    fn drop_on_left_half_inserts_before_and_right_half_after() {
        let mut state = state_with(GridProps::new(columns()));
        assert_eq!(
            drag(&mut state, "status", "name", 10.0),
            vec![Action::ColumnOrderChanged(vec![
                "status".into(),
                "name".into(),
                "email".into(),
                "action".into()
            ])]
        );
        assert_eq!(
            drag(&mut state, "status", "email", 60.0),
            vec![Action::ColumnOrderChanged(vec![
                "name".into(),
                "email".into(),
                "status".into(),
                "action".into()
            ])]
        );
        assert!(state.interaction.is_idle());
    }

    #[test]
    fn frozen_column_never_moves_as_source_but_anchors_drops() {
        let mut state = state_with(
            GridProps::new(columns()).with_frozen_columns(vec!["email".into()]),
        );
        let (render, actions) =
            handle_event(&mut state, &Event::DragStart { field_key: "email".into() }).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.interaction.is_idle());

        let actions = drag(&mut state, "status", "email", 5.0);
        assert_eq!(
            actions,
            vec![Action::ColumnOrderChanged(vec![
                "name".into(),
                "status".into(),
                "email".into(),
                "action".into()
            ])]
        );
    }

    #[test]
    fn pinned_column_is_not_a_drag_source() {
        let mut state =
            state_with(GridProps::new(columns()).with_pinned_columns(vec!["name".into()]));
        assert!(drag(&mut state, "name", "status", 90.0).is_empty());
    }

    #[test]
    fn drop_without_position_change_emits_nothing() {
        let mut state = state_with(GridProps::new(columns()));
        assert!(drag(&mut state, "email", "status", 10.0).is_empty());
        assert!(drag(&mut state, "email", "email", 10.0).is_empty());
    }

    #[test]
    fn controlled_order_emits_without_local_change() {
        let order: Vec<String> =
            vec!["name".into(), "email".into(), "status".into(), "action".into()];
        let mut state = state_with(GridProps::new(columns()).with_column_order(order.clone()));
        assert_eq!(drag(&mut state, "status", "name", 0.0).len(), 1);
        assert_eq!(state.effective_order(), order);
    }

    #[test]
    fn drag_over_tracks_indicator_and_drag_end_cancels() {
        let mut state = state_with(GridProps::new(columns()));
        handle_event(&mut state, &Event::DragStart { field_key: "status".into() }).unwrap();
        let over = Event::DragOver {
            field_key: "name".into(),
            cursor_x: 70.0,
            rect: rect(0.0),
        };
        assert_eq!(handle_event(&mut state, &over).unwrap(), (true, vec![]));
        assert_eq!(handle_event(&mut state, &over).unwrap(), (false, vec![]));
        assert_eq!(
            state.interaction,
            Interaction::Dragging {
                source: "status".into(),
                over: Some(("name".into(), DropSide::After)),
            }
        );
        assert_eq!(handle_event(&mut state, &Event::DragEnd).unwrap(), (true, vec![]));
        assert!(state.interaction.is_idle());
    }

    #[test]
    fn resize_is_clamped_and_committed_on_pointer_up() {
        let mut state = state_with(GridProps::new(vec![
            FieldDefinition::new("name", "Name").with_width(100.0),
        ]));
        handle_event(
            &mut state,
            &Event::ResizeStart {
                field_key: "name".into(),
                cursor_x: 500.0,
            },
        )
        .unwrap();
        handle_event(&mut state, &Event::PointerMove { cursor_x: 0.0 }).unwrap();
        assert_eq!(state.column_width("name"), 80.0);

        let (_, actions) = handle_event(&mut state, &Event::PointerUp).unwrap();
        assert_eq!(
            actions,
            vec![Action::ColumnResized {
                field_key: "name".into(),
                width: 80.0
            }]
        );
        assert_eq!(state.column_width("name"), 80.0);
        assert!(state.interaction.is_idle());
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let mut state = state_with(GridProps::new(columns()));
        let result = handle_event(
            &mut state,
            &Event::ResizeStart {
                field_key: "name".into(),
                cursor_x: f64::NAN,
            },
        );
        assert!(matches!(result, Err(GridError::InvalidEvent(_))));
        assert!(state.interaction.is_idle());
    }

    #[test]
    fn rename_commits_trimmed_label_and_keeps_old_on_empty() {
        let mut state = state_with(GridProps::new(columns()));
        handle_event(&mut state, &Event::StartRename { field_key: "email".into() }).unwrap();
        handle_event(&mut state, &Event::RenameInput { text: "  Work email ".into() }).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::CommitRename).unwrap();
        assert_eq!(
            actions,
            vec![Action::ColumnRenamed {
                field_key: "email".into(),
                display_name: "Work email".into()
            }]
        );
        assert_eq!(state.display_name("email"), "Work email");

        handle_event(&mut state, &Event::StartRename { field_key: "email".into() }).unwrap();
        handle_event(&mut state, &Event::RenameInput { text: "   ".into() }).unwrap();
        assert!(handle_event(&mut state, &Event::CommitRename).unwrap().1.is_empty());
        assert_eq!(state.display_name("email"), "Work email");
    }

    #[test]
    fn cancel_rename_discards_draft() {
        let mut state = state_with(GridProps::new(columns()));
        handle_event(&mut state, &Event::StartRename { field_key: "name".into() }).unwrap();
        handle_event(&mut state, &Event::RenameInput { text: "Full name".into() }).unwrap();
        handle_event(&mut state, &Event::CancelRename).unwrap();
        assert_eq!(state.display_name("name"), "Name");
    }

    #[test]
    fn hide_emits_both_callbacks_and_skips_pinned_and_action() {
        let mut state =
            state_with(GridProps::new(columns()).with_pinned_columns(vec!["name".into()]));
        handle_event(&mut state, &Event::OpenMenu { field_key: "email".into() }).unwrap();
        let (_, actions) =
            handle_event(&mut state, &Event::HideColumn { field_key: "email".into() }).unwrap();
        assert_eq!(
            actions,
            vec![
                Action::HiddenFieldsChanged(vec!["email".into()]),
                Action::FieldVisibilityChanged {
                    field_key: "email".into(),
                    visible: false
                },
            ]
        );
        assert_eq!(state.open_menu, None);

        for key in ["name", "action"] {
            let (_, actions) =
                handle_event(&mut state, &Event::HideColumn { field_key: key.into() }).unwrap();
            assert!(actions.is_empty(), "{key} should not be hideable");
        }
    }

    #[test]
    fn column_manager_toggles_listed_fields_only() {
        let mut state =
            state_with(GridProps::new(columns()).with_pinned_columns(vec!["name".into()]));
        handle_event(&mut state, &Event::ToggleColumnManager).unwrap();
        let listed: Vec<String> = state
            .column_manager_entries()
            .iter()
            .map(|(f, _)| f.field_key.clone())
            .collect();
        assert_eq!(listed, vec!["email", "status"]);

        let toggle = Event::ToggleFieldVisibility { field_key: "status".into() };
        let (_, hide) = handle_event(&mut state, &toggle).unwrap();
        assert_eq!(hide[0], Action::HiddenFieldsChanged(vec!["status".into()]));
        let toggle = Event::ToggleFieldVisibility { field_key: "status".into() };
        let (_, show) = handle_event(&mut state, &toggle).unwrap();
        assert_eq!(
            show,
            vec![
                Action::HiddenFieldsChanged(vec![]),
                Action::FieldVisibilityChanged {
                    field_key: "status".into(),
                    visible: true
                },
            ]
        );
        let toggle = Event::ToggleFieldVisibility { field_key: "name".into() };
        let (_, ignored) = handle_event(&mut state, &toggle).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn selection_toggles_and_select_all() {
        let mut state = state_with(GridProps::new(columns()).selectable());
        let data: Vec<Row> = [json!({"id": "a"}), json!({"_id": "b"}), json!({})]
            .into_iter()
            .filter_map(|v| v.as_object().cloned())
            .collect();
        state.set_data(data);

        let (_, actions) =
            handle_event(&mut state, &Event::ToggleRowSelection { row_key: "b".into() }).unwrap();
        assert_eq!(actions, vec![Action::SelectionChanged(vec!["b".into()])]);

        let (_, actions) = handle_event(&mut state, &Event::ToggleSelectAll).unwrap();
        assert_eq!(
            actions,
            vec![Action::SelectionChanged(vec!["a".into(), "b".into(), "2".into()])]
        );
        let (_, actions) = handle_event(&mut state, &Event::ToggleSelectAll).unwrap();
        assert_eq!(actions, vec![Action::SelectionChanged(vec![])]);

        let (_, actions) =
            handle_event(&mut state, &Event::ToggleRowSelection { row_key: "zz".into() }).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn selection_ignored_when_not_selectable() {
        let mut state = state_with(GridProps::new(columns()));
        state.set_data(vec![json!({"id": 1}).as_object().cloned().unwrap()]);
        assert_eq!(
            handle_event(&mut state, &Event::ToggleRowSelection { row_key: "1".into() }).unwrap(),
            (false, vec![])
        );
    }

    #[test]
    fn teardown_abandons_resize_without_committing() {
        let mut state = state_with(GridProps::new(columns()));
        handle_event(
            &mut state,
            &Event::ResizeStart {
                field_key: "name".into(),
                cursor_x: 0.0,
            },
        )
        .unwrap();
        handle_event(&mut state, &Event::PointerMove { cursor_x: 200.0 }).unwrap();
        handle_event(&mut state, &Event::ToggleColumnManager).unwrap();

        assert_eq!(handle_event(&mut state, &Event::Teardown).unwrap(), (true, vec![]));
        assert_eq!(state.column_width("name"), state.config.default_column_width);
        assert!(!state.column_manager_open);
        assert_eq!(handle_event(&mut state, &Event::PointerUp).unwrap(), (false, vec![]));
    }
}
