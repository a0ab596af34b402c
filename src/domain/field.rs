//! Field (column) definitions.
//!
//! A [`FieldDefinition`] describes one grid column: the key used to look values
//! up in each row, its label, its type tag, and its initial layout flags. The
//! JSON shape matches what admin list pages already emit (camelCase keys,
//! upper-case type tags), so definition arrays can be decoded directly with
//! [`FieldDefinition::list_from_json`].

use super::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixels per `rem`/`em` when resolving string widths.
const PX_PER_REM: f64 = 16.0;

/// Type tag selecting a column's default cell formatting and filter operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Text,
    Textarea,
    Email,
    Phone,
    Number,
    Currency,
    Date,
    Dropdown,
    Checkbox,
    Url,
    /// Row action buttons; always rendered as the rightmost non-pinned column.
    Action,
    /// Any tag this crate does not know. Formatted like [`FieldType::Text`].
    #[serde(other)]
    Unknown,
}

impl FieldType {
    /// Returns the wire tag for this type (e.g. `"DROPDOWN"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Textarea => "TEXTAREA",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Number => "NUMBER",
            Self::Currency => "CURRENCY",
            Self::Date => "DATE",
            Self::Dropdown => "DROPDOWN",
            Self::Checkbox => "CHECKBOX",
            Self::Url => "URL",
            Self::Action => "ACTION",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Whether values of this type compare numerically.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Currency)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initial column width: a pixel count or a CSS-like string with a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnWidth {
    Pixels(f64),
    Css(String),
}

impl ColumnWidth {
    /// Resolves the width to pixels.
    ///
    /// Unitless numbers and `px` resolve directly, `rem`/`em` use 16px per unit.
    /// Relative units such as `%` cannot be resolved without a container and
    /// return `None`, as do non-positive or unparseable values.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridview::domain::ColumnWidth;
    ///
    /// assert_eq!(ColumnWidth::Css("180px".into()).to_pixels(), Some(180.0));
    /// assert_eq!(ColumnWidth::Css("10rem".into()).to_pixels(), Some(160.0));
    /// assert_eq!(ColumnWidth::Css("25%".into()).to_pixels(), None);
    /// ```
    #[must_use]
    pub fn to_pixels(&self) -> Option<f64> {
        let px = match self {
            Self::Pixels(px) => *px,
            Self::Css(raw) => {
                let raw = raw.trim();
                let split = raw
                    .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                    .unwrap_or(raw.len());
                let (number, unit) = raw.split_at(split);
                let number: f64 = number.parse().ok()?;
                match unit.trim().to_ascii_lowercase().as_str() {
                    "" | "px" => number,
                    "rem" | "em" => number * PX_PER_REM,
                    _ => return None,
                }
            }
        };
        (px.is_finite() && px > 0.0).then_some(px)
    }
}

const fn default_true() -> bool {
    true
}

/// Metadata describing one grid column.
///
/// The grid never mutates the definitions it is given. Renames and visibility
/// changes are kept as local overrides and reported back through actions so the
/// owner can persist them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Unique column key, also the dot-notation path into each row.
    pub field_key: String,
    pub display_name: String,
    #[serde(default = "default_field_type")]
    pub field_type: FieldType,
    /// Initial position; ties keep definition order.
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub column_width: Option<ColumnWidth>,
    /// Initial visibility when the hidden set is not controlled.
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default)]
    pub is_sortable: bool,
    /// Pins the column to the left edge and disables dragging it.
    #[serde(default)]
    pub is_freezed: bool,
    #[serde(default)]
    pub help_text: Option<String>,
}

const fn default_field_type() -> FieldType {
    FieldType::Text
}

impl FieldDefinition {
    /// Creates a visible, unsortable text column.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridview::domain::{FieldDefinition, FieldType};
    ///
    /// let status = FieldDefinition::new("status", "Status")
    ///     .with_type(FieldType::Dropdown)
    ///     .sortable();
    /// assert!(status.is_sortable);
    /// assert!(!status.is_action());
    /// ```
    #[must_use]
    pub fn new(field_key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            field_key: field_key.into(),
            display_name: display_name.into(),
            field_type: FieldType::Text,
            display_order: 0,
            column_width: None,
            is_visible: true,
            is_sortable: false,
            is_freezed: false,
            help_text: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    #[must_use]
    pub fn with_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    #[must_use]
    pub fn with_width(mut self, px: f64) -> Self {
        self.column_width = Some(ColumnWidth::Pixels(px));
        self
    }

    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.is_sortable = true;
        self
    }

    #[must_use]
    pub fn freezed(mut self) -> Self {
        self.is_freezed = true;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    /// Whether this is the row-actions column (by type or by the `action` key).
    #[must_use]
    pub fn is_action(&self) -> bool {
        self.field_type == FieldType::Action || self.field_key == "action"
    }

    /// Decodes a JSON array of field definitions.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Definitions`] if the input is not a valid array of
    /// definitions.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridview::domain::{FieldDefinition, FieldType};
    ///
    /// let defs = FieldDefinition::list_from_json(
    ///     r#"[{"fieldKey":"email","displayName":"Email","fieldType":"EMAIL","isSortable":true}]"#,
    /// )?;
    /// assert_eq!(defs[0].field_type, FieldType::Email);
    /// # Ok::<(), gridview::GridError>(())
    /// ```
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        serde_json::from_str(json).map_err(|e| GridError::Definitions(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_admin_page_shape() {
        let json = r#"[
            {"fieldKey":"leaveType","displayName":"Leave Type","fieldType":"DROPDOWN",
             "displayOrder":2,"columnWidth":"160px","isVisible":true,"isSortable":true,
             "isFreezed":false,"helpText":"Category of leave"},
            {"fieldKey":"action","displayName":"Action","fieldType":"ACTION","displayOrder":1,
             "columnWidth":90},
            {"fieldKey":"rating","displayName":"Rating","fieldType":"STAR_RATING"}
        ]"#;
        let defs = FieldDefinition::list_from_json(json).unwrap();

        assert_eq!(defs.len(), 3);
        assert_eq!(defs[0].column_width.as_ref().and_then(ColumnWidth::to_pixels), Some(160.0));
        assert_eq!(defs[0].help_text.as_deref(), Some("Category of leave"));
        assert!(defs[1].is_action());
        assert_eq!(defs[1].column_width.as_ref().and_then(ColumnWidth::to_pixels), Some(90.0));
        assert_eq!(defs[2].field_type, FieldType::Unknown);
        assert!(defs[2].is_visible);
        assert!(!defs[2].is_sortable);
    }

    #[test]
    fn rejects_malformed_definitions() {
        let err = FieldDefinition::list_from_json(r#"{"fieldKey":"x"}"#).unwrap_err();
        assert!(matches!(err, GridError::Definitions(_)));
    }

    #[test]
    fn action_detected_by_key_alone() {
        let def = FieldDefinition::new("action", "Actions");
        assert!(def.is_action());
    }

    #[test]
    fn width_resolution_edge_cases() {
        assert_eq!(ColumnWidth::Css(" 120 ".into()).to_pixels(), Some(120.0));
        assert_eq!(ColumnWidth::Css("1.5em".into()).to_pixels(), Some(24.0));
        assert_eq!(ColumnWidth::Css("wide".into()).to_pixels(), None);
        assert_eq!(ColumnWidth::Pixels(0.0).to_pixels(), None);
        assert_eq!(ColumnWidth::Pixels(f64::NAN).to_pixels(), None);
    }
}
