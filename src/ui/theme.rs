//! Grid color palettes and ANSI truecolor escapes.
//!
//! Two palettes ship with the crate, `catppuccin-mocha` (dark, the default)
//! and `catppuccin-latte` (light). Any other palette is read from a TOML file
//! whose `[colors]` table names every required slot as a `#rrggbb` string:
//!
//! ```toml
//! name = "office"
//!
//! [colors]
//! header_fg = "#e0e0e0"
//! text_normal = "#d0d0d0"
//! text_dim = "#808080"
//! border = "#404040"
//! selection_fg = "#000000"
//! selection_bg = "#ffd75f"
//! pinned_fg = "#5fafff"
//! sort_indicator = "#ffaf00"
//! drop_indicator = "#87d787"
//! menu_fg = "#e0e0e0"
//! menu_bg = "#303030"
//! empty_state_fg = "#5fafff"
//! ```
//!
//! `header_bg` is optional.
//!
//! ```rust
//! use gridview::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap_or_default();
//! let label = format!("{}{}Name{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
//! assert!(label.ends_with("\u{1b}[0m"));
//! ```

use crate::domain::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors for each styled part of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    /// Header row background; unset leaves the terminal background.
    #[serde(default)]
    pub header_bg: Option<String>,
    pub text_normal: String,
    /// Help text, unchecked boxes, hidden entries.
    pub text_dim: String,
    /// Rules and column separators.
    pub border: String,
    pub selection_fg: String,
    pub selection_bg: String,
    pub pinned_fg: String,
    pub sort_indicator: String,
    /// Insertion marker drawn while a column is dragged.
    pub drop_indicator: String,
    /// Shared by the header menu and the column manager.
    pub menu_fg: String,
    pub menu_bg: String,
    pub empty_state_fg: String,
}

impl Theme {
    /// Looks up a built-in palette. Unknown names give `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "catppuccin-mocha" => Some(Self::mocha()),
            "catppuccin-latte" => Some(Self::latte()),
            _ => None,
        }
    }

    /// Reads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// [`GridError::Theme`] when the file is unreadable or is not a complete
    /// palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| GridError::Theme(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|e| GridError::Theme(format!("invalid palette in {}: {e}", path.display())))
    }

    fn mocha() -> Self {
        Self {
            name: "catppuccin-mocha".to_string(),
            colors: ThemeColors {
                header_fg: "#cdd6f4".to_string(),
                header_bg: Some("#181825".to_string()),
                text_normal: "#cdd6f4".to_string(),
                text_dim: "#6c7086".to_string(),
                border: "#45475a".to_string(),
                selection_fg: "#1e1e2e".to_string(),
                selection_bg: "#f5c2e7".to_string(),
                pinned_fg: "#89b4fa".to_string(),
                sort_indicator: "#f9e2af".to_string(),
                drop_indicator: "#a6e3a1".to_string(),
                menu_fg: "#cdd6f4".to_string(),
                menu_bg: "#313244".to_string(),
                empty_state_fg: "#89b4fa".to_string(),
            },
        }
    }

    fn latte() -> Self {
        Self {
            name: "catppuccin-latte".to_string(),
            colors: ThemeColors {
                header_fg: "#4c4f69".to_string(),
                header_bg: Some("#e6e9ef".to_string()),
                text_normal: "#4c4f69".to_string(),
                text_dim: "#9ca0b0".to_string(),
                border: "#bcc0cc".to_string(),
                selection_fg: "#eff1f5".to_string(),
                selection_bg: "#ea76cb".to_string(),
                pinned_fg: "#1e66f5".to_string(),
                sort_indicator: "#df8e1d".to_string(),
                drop_indicator: "#40a02b".to_string(),
                menu_fg: "#4c4f69".to_string(),
                menu_bg: "#ccd0da".to_string(),
                empty_state_fg: "#1e66f5".to_string(),
            },
        }
    }

    /// Parses `#rrggbb` (the `#` is optional). Malformed colors read as white.
    fn rgb(hex: &str) -> (u8, u8, u8) {
        let digits = hex.trim().trim_start_matches('#');
        let packed = (digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
            .then(|| u32::from_str_radix(digits, 16).ok())
            .flatten()
            .unwrap_or(0x00ff_ffff);
        let [_, r, g, b] = packed.to_be_bytes();
        (r, g, b)
    }

    fn sgr(layer: u8, hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{1b}[{layer};2;{r};{g};{b}m")
    }

    /// Truecolor foreground escape.
    ///
    /// ```rust
    /// use gridview::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Self::sgr(38, hex)
    }

    /// Truecolor background escape.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        Self::sgr(48, hex)
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    /// Clears every style set since the last reset.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}
