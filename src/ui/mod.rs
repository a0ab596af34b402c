//! User interface layer: view models, cell formatting, and text rendering.
//!
//! This module transforms grid state into display-ready view models and, for
//! terminal hosts, into ANSI-styled text through composable components.
//!
//! # Architecture
//!
//! ```text
//! GridState → compute_viewmodel → GridViewModel → render → ANSI text
//!                    ↑
//!              CellRenderer (optional, per cell)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable grid state
//! - [`cell`]: Caller cell renderers and the default per-type formatter
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable grid component renderers
//! - [`helpers`]: Shared text utilities (fitting, colouring)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod cell;
pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use cell::{format_cell, CellContext, CellRenderer};
pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    BodyCell, BodyRow, ColumnManagerEntry, ColumnManagerPanel, EmptyState, GridViewModel,
    HeaderCell, HeaderMenu, MenuItem, SelectionHeader,
};
