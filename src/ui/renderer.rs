//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `GridState` into `GridViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! # Example
//!
//! ```rust
//! use gridview::app::{GridProps, GridState};
//! use gridview::domain::FieldDefinition;
//! use gridview::ui::{render, Theme};
//!
//! let state = GridState::new(GridProps::new(vec![FieldDefinition::new("name", "Name")]), Theme::default());
//! let text = render(&state, None);
//! assert!(text.contains("No data available"));
//! ```

use crate::app::GridState;
use crate::ui::cell::CellRenderer;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::GridViewModel;

/// Renders the grid to ANSI-styled text, one line per row.
///
/// Column pixel widths are mapped to character cells using the configured
/// `px_per_char`. Does not clear the screen or manage cursor position.
#[must_use]
pub fn render(state: &GridState, cell_renderer: Option<&dyn CellRenderer>) -> String {
    let viewmodel = state.compute_viewmodel(cell_renderer);
    render_viewmodel(&viewmodel, &state.theme, state.config.px_per_char)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &GridViewModel, theme: &Theme, px_per_char: f64) -> String {
    let _span = tracing::trace_span!("render", columns = vm.columns.len(), rows = vm.rows.len())
        .entered();
    components::render_grid(vm, theme, px_per_char).join("\n")
}
