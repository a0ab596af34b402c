//! Application layer coordinating grid state, events, and actions.
//!
//! This module sits between the host (which owns rendering surfaces and input
//! devices) and the domain layer. It implements the event-driven architecture
//! behind the interactive grid.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Host Input → Events → Event Handler → State Mutations → Actions → Owner
//!                                            ↓                        ↓
//!                                       View Model  ←──── Props ──────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Outbound notifications emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Sort cycle and pointer interaction state machine types
//! - [`state`]: Grid state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use gridview::app::{handle_event, Event, GridProps, GridState};
//! use gridview::domain::FieldDefinition;
//! use gridview::ui::Theme;
//!
//! let mut state = GridState::new(GridProps::new(vec![FieldDefinition::new("name", "Name")]), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::ToggleColumnManager)?;
//! assert!(render && actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{DropSide, HeaderRect, Interaction, SortDescriptor, SortDirection};
pub use state::{GridProps, GridState};
