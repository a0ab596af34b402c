//! Gridview: a configurable data grid and tabular view controller.
//!
//! Gridview renders records described by field definitions as an interactive
//! table and derives what a list page shows from its full data set:
//! - Column reorder by drag and drop, resize by pointer drag, pinning
//! - Three-state header sort, inline rename, hide/show via a column manager
//! - Row selection with a select-all header checkbox
//! - Declarative filter rules, fuzzy global search, sorting, and pagination
//! - ANSI text rendering with built-in and TOML themes
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Owner (list page)                                  │  ← Props in, actions out
//! └─────────────────────────────────────────────────────┘
//!             │ GridProps / Event         ▲ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Controlled/uncontrolled column state             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐        ┌─────────────────────────┐
//! │ UI Layer (ui/)        │        │ View Layer (view/)      │
//! │ - Cell formatting     │        │ - Filter rules          │
//! │ - Components          │        │ - Search, sort          │
//! │ - Theming             │        │ - Pagination            │
//! └───────────────────────┘        └─────────────────────────┘
//!         │                                      │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Field definitions, rows, row keys                │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Grid state, events, and actions
//! - [`domain`]: Field definitions, rows, and errors
//! - [`ui`]: View model, cell formatting, and terminal rendering
//! - [`view`]: Filtering, search, sorting, and pagination of a row set
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Settings come from a TOML file or a flat string map:
//!
//! ```toml
//! default_column_width = 160
//! default_pinned_keys = ["employee_name"]
//! page_size = 25
//! theme_name = "catppuccin-latte"
//! trace_level = "debug"
//! log_file = "/var/log/gridview/grid.log"
//! ```
//!
//! # Example
//!
//! ```rust
//! use gridview::domain::{FieldDefinition, FieldType};
//! use gridview::{handle_event, initialize, Action, Config, Event, GridProps};
//! use serde_json::json;
//!
//! let props = GridProps::new(vec![
//!     FieldDefinition::new("name", "Name").freezed(),
//!     FieldDefinition::new("status", "Status").with_type(FieldType::Dropdown).sortable(),
//! ]);
//! let mut state = initialize(&Config::default(), props);
//! state.set_data(vec![json!({"id": 1, "name": "Ada", "status": "Open"})
//!     .as_object()
//!     .cloned()
//!     .unwrap()]);
//!
//! let (rerender, actions) =
//!     handle_event(&mut state, &Event::HeaderClicked { field_key: "status".into() })?;
//! assert!(rerender);
//! assert!(matches!(actions.as_slice(), [Action::SortChanged(Some(_))]));
//! # Ok::<(), gridview::GridError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod observability;
pub mod ui;
pub mod view;

pub use app::{handle_event, Action, Event, GridProps, GridState};
pub use domain::{GridError, Result};
pub use ui::Theme;
pub use view::{Condition, FilterRule, TableView};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const DEFAULT_COLUMN_WIDTH: f64 = 150.0;
const DEFAULT_SELECTION_WIDTH: f64 = 48.0;
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_PX_PER_CHAR: f64 = 8.0;

/// Grid and view configuration.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width in pixels of columns with no usable width of their own.
    /// Default: 150
    pub default_column_width: f64,

    /// Width in pixels of the selection checkbox column. Default: 48
    pub selection_column_width: f64,

    /// Field keys pinned in addition to those the props name.
    pub default_pinned_keys: Vec<String>,

    /// Rows per page in a [`TableView`]. Default: 10
    pub page_size: usize,

    /// Pixels per character cell when rendering to text. Default: 8
    pub px_per_char: f64,

    /// Built-in theme name. Ignored if `theme_file` is set.
    #[serde(alias = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter directive, e.g. `debug` or `gridview=trace`.
    pub trace_level: Option<String>,

    /// Log file for [`observability::init_tracing`]. Logs go to stderr when
    /// unset.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_column_width: DEFAULT_COLUMN_WIDTH,
            selection_column_width: DEFAULT_SELECTION_WIDTH,
            default_pinned_keys: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            px_per_char: DEFAULT_PX_PER_CHAR,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a flat string map.
    ///
    /// # Parsing Rules
    ///
    /// - Widths and `px_per_char`: positive number, else the default
    /// - `page_size`: positive integer, else the default
    /// - `default_pinned_keys`: comma-separated keys (empty entries dropped)
    /// - `theme` or `theme_name`, `theme_file`, `trace_level`, `log_file`:
    ///   taken as is
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use gridview::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("default_pinned_keys".to_string(), "name, id".to_string());
    /// map.insert("page_size".to_string(), "zero".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.default_pinned_keys, vec!["name", "id"]);
    /// assert_eq!(config.page_size, 10);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let positive = |key: &str, default: f64| {
            config
                .get(key)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|n| n.is_finite() && *n > 0.0)
                .unwrap_or(default)
        };

        let default_pinned_keys = config
            .get("default_pinned_keys")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.page_size);

        Self {
            default_column_width: positive("default_column_width", defaults.default_column_width),
            selection_column_width: positive(
                "selection_column_width",
                defaults.selection_column_width,
            ),
            default_pinned_keys,
            page_size,
            px_per_char: positive("px_per_char", defaults.px_per_char),
            theme_name: config
                .get("theme")
                .or_else(|| config.get("theme_name"))
                .cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
            log_file: config.get("log_file").map(PathBuf::from),
        }
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`GridError::Io`] if the file cannot be read
    /// - [`GridError::Config`] if the TOML is invalid or a value is out of
    ///   range
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| GridError::Config(format!("failed to parse config TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that sizes are positive.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Config`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        let widths = [
            ("default_column_width", self.default_column_width),
            ("selection_column_width", self.selection_column_width),
            ("px_per_char", self.px_per_char),
        ];
        if let Some((key, _)) = widths.iter().find(|(_, v)| !v.is_finite() || *v <= 0.0) {
            return Err(GridError::Config(format!("{key} must be a positive number")));
        }
        if self.page_size == 0 {
            return Err(GridError::Config("page_size must be positive".to_string()));
        }
        Ok(())
    }
}

/// Creates grid state for `props` with the configured theme.
///
/// The theme comes from `theme_file`, else `theme_name`, else the default.
/// A theme that fails to load falls back to the default with a debug log.
/// Tracing is not set up here; call [`observability::init_tracing`] first if
/// logs are wanted.
///
/// # Example
///
/// ```rust
/// use gridview::{initialize, Config, GridProps};
///
/// let config = Config {
///     theme_name: Some("catppuccin-latte".to_string()),
///     ..Default::default()
/// };
/// let state = initialize(&config, GridProps::new(vec![]));
/// assert_eq!(state.theme.name, "catppuccin-latte");
/// ```
#[must_use]
pub fn initialize(config: &Config, props: GridProps) -> GridState {
    tracing::debug!(
        fields = props.field_definitions.len(),
        "initializing grid"
    );

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(
                    theme_file = %theme_file,
                    error = %e,
                    "failed to load theme from file, using default"
                );
                Theme::default()
            })
        },
    );

    GridState::with_config(props, config.clone(), theme)
}
