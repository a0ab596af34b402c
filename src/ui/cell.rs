//! Cell content dispatch.
//!
//! Each body cell is produced by the caller's [`CellRenderer`] when it returns
//! `Some`, and by [`format_cell`] otherwise.

use crate::domain::{
    is_truthy, value_to_date, value_to_number, value_to_text, FieldDefinition, FieldType, Row,
};
use serde_json::Value;

/// Everything a cell renderer may look at.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    pub field: &'a FieldDefinition,
    pub row: &'a Row,
    /// Value at the field's path, `None` when the path does not resolve.
    pub value: Option<&'a Value>,
    pub row_index: usize,
}

/// Caller-supplied per-cell rendering.
///
/// Returning `None` falls back to the default formatter for the field's type.
/// Closures taking a `&CellContext` implement this trait.
///
/// # Example
///
/// ```rust
/// use gridview::ui::cell::{CellContext, CellRenderer};
///
/// let upper = |ctx: &CellContext<'_>| {
///     ctx.value.and_then(|v| v.as_str()).map(str::to_uppercase)
/// };
/// let _: &dyn CellRenderer = &upper;
/// ```
pub trait CellRenderer {
    fn render_cell(&self, ctx: &CellContext<'_>) -> Option<String>;
}

impl<F> CellRenderer for F
where
    F: Fn(&CellContext<'_>) -> Option<String>,
{
    fn render_cell(&self, ctx: &CellContext<'_>) -> Option<String> {
        self(ctx)
    }
}

/// Default text for a cell of the given type.
///
/// Missing and null values render empty. Values that do not parse as the
/// field's type are shown as their raw text.
///
/// # Examples
///
/// ```
/// use gridview::domain::FieldType;
/// use gridview::ui::cell::format_cell;
/// use serde_json::json;
///
/// assert_eq!(format_cell(FieldType::Date, Some(&json!("2024-03-01"))), "01 Mar 2024");
/// assert_eq!(format_cell(FieldType::Currency, Some(&json!(12))), "12.00");
/// assert_eq!(format_cell(FieldType::Checkbox, Some(&json!(false))), "No");
/// assert_eq!(format_cell(FieldType::Text, None), "");
/// ```
#[must_use]
pub fn format_cell(field_type: FieldType, value: Option<&Value>) -> String {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return String::new();
    };

    match field_type {
        FieldType::Action => String::new(),
        FieldType::Checkbox => {
            if is_truthy(value) { "Yes" } else { "No" }.to_string()
        }
        FieldType::Number => value_to_number(value)
            .map_or_else(|| value_to_text(value), format_number),
        FieldType::Currency => value_to_number(value)
            .map_or_else(|| value_to_text(value), |n| format!("{n:.2}")),
        FieldType::Date => value_to_date(value).map_or_else(
            || value_to_text(value),
            |d| d.format("%d %b %Y").to_string(),
        ),
        FieldType::Text
        | FieldType::Textarea
        | FieldType::Email
        | FieldType::Phone
        | FieldType::Dropdown
        | FieldType::Url
        | FieldType::Unknown => value_to_text(value),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
