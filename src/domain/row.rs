//! Row records and row identity.
//!
//! Rows are opaque JSON objects. Values are addressed by dot-notation paths
//! (`"employee.name"`), and each row is identified by a [`RowKey`] strategy
//! that falls back to `id`, then `_id`, then the row index.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// An opaque record displayed as one grid row.
pub type Row = Map<String, Value>;

/// Callback deriving a row key from the row and its index.
pub type RowKeyFn = Arc<dyn Fn(&Row, usize) -> String + Send + Sync>;

/// Strategy for identifying rows.
///
/// Keys must be stable and unique across the row set for selection to behave.
/// The grid does not verify this; duplicate keys collapse into one selection
/// entry.
#[derive(Clone, Default)]
pub enum RowKey {
    /// Read the key from a named property (dot-notation allowed).
    Field(String),
    /// Compute the key with a callback.
    Fn(RowKeyFn),
    /// Use `id`, then `_id`, then the row index.
    #[default]
    Default,
}

impl RowKey {
    /// Builds a callback-based key strategy.
    pub fn from_fn(f: impl Fn(&Row, usize) -> String + Send + Sync + 'static) -> Self {
        Self::Fn(Arc::new(f))
    }

    /// Resolves the key of `row` at position `index`.
    ///
    /// An explicit field that is missing or null falls through to the default
    /// chain, so a partially keyed data set still gets distinct keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridview::domain::RowKey;
    /// use serde_json::json;
    ///
    /// let with_id = json!({"id": 7}).as_object().cloned().unwrap();
    /// let with_mongo_id = json!({"_id": "a1"}).as_object().cloned().unwrap();
    /// let bare = json!({"name": "x"}).as_object().cloned().unwrap();
    ///
    /// let key = RowKey::Default;
    /// assert_eq!(key.resolve(&with_id, 0), "7");
    /// assert_eq!(key.resolve(&with_mongo_id, 1), "a1");
    /// assert_eq!(key.resolve(&bare, 2), "2");
    /// ```
    #[must_use]
    pub fn resolve(&self, row: &Row, index: usize) -> String {
        match self {
            Self::Fn(f) => f(row, index),
            Self::Field(name) => key_text(resolve_path(row, name))
                .unwrap_or_else(|| default_key(row, index)),
            Self::Default => default_key(row, index),
        }
    }
}

impl fmt::Debug for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Fn(_) => f.write_str("Fn(..)"),
            Self::Default => f.write_str("Default"),
        }
    }
}

fn default_key(row: &Row, index: usize) -> String {
    key_text(row.get("id"))
        .or_else(|| key_text(row.get("_id")))
        .unwrap_or_else(|| index.to_string())
}

fn key_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        other => Some(value_to_text(other)),
    }
}

/// Looks up a dot-notation path in a row.
///
/// Returns `None` for any missing segment or for a segment that traverses a
/// non-object value. Array elements can be addressed by numeric segments.
///
/// # Examples
///
/// ```
/// use gridview::domain::resolve_path;
/// use serde_json::json;
///
/// let row = json!({"employee": {"name": "Asha", "tags": ["a", "b"]}})
///     .as_object().cloned().unwrap();
/// assert_eq!(resolve_path(&row, "employee.name"), Some(&json!("Asha")));
/// assert_eq!(resolve_path(&row, "employee.tags.1"), Some(&json!("b")));
/// assert_eq!(resolve_path(&row, "employee..name"), None);
/// ```
#[must_use]
pub fn resolve_path<'a>(row: &'a Row, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next().filter(|s| !s.is_empty())?;
    let mut current = row.get(first)?;
    for segment in segments {
        if segment.is_empty() {
            return None;
        }
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Renders a JSON value as plain text.
///
/// Strings are unquoted, null is empty, arrays are joined with `", "`, and
/// objects fall back to their JSON form.
#[must_use]
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// Whether a value counts as empty for display and filtering purposes.
#[must_use]
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

/// Reads a value as a calendar date.
///
/// Accepts RFC 3339 timestamps (the date as written, in the timestamp's own
/// offset), naive `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD HH:MM:SS` datetimes,
/// plain `YYYY-MM-DD` dates, and integer epoch milliseconds (UTC).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use gridview::domain::value_to_date;
/// use serde_json::json;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 1);
/// assert_eq!(value_to_date(&json!("2024-03-01T23:30:00-05:00")), expected);
/// assert_eq!(value_to_date(&json!("2024-03-01")), expected);
/// assert_eq!(value_to_date(&json!("soon")), None);
/// ```
#[must_use]
pub fn value_to_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date(s.trim()),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        _ => None,
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Whether a value reads as a checked checkbox.
///
/// `true`, non-zero numbers, and the strings `true`/`yes`/`y`/`1` (any case)
/// are truthy; everything else is not.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "1"
        ),
        _ => false,
    }
}

/// Reads a value as a number. Numeric strings are accepted.
#[must_use]
pub fn value_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn key_priority_is_id_then_underscore_id_then_index() {
        let rows = vec![
            row(json!({"id": 10, "_id": "ignored"})),
            row(json!({"_id": "m-2"})),
            row(json!({"name": "no key"})),
            row(json!({"id": null, "name": "null id"})),
        ];
        let keys: Vec<String> = rows
            .iter()
            .enumerate()
            .map(|(i, r)| RowKey::Default.resolve(r, i))
            .collect();
        assert_eq!(keys, vec!["10", "m-2", "2", "3"]);
    }

    #[test]
    fn explicit_field_key_wins_and_falls_back_when_missing() {
        let key = RowKey::Field("employeeCode".to_string());
        assert_eq!(key.resolve(&row(json!({"employeeCode": "E-1", "id": 4})), 0), "E-1");
        assert_eq!(key.resolve(&row(json!({"id": 4})), 0), "4");
    }

    #[test]
    fn callback_key_receives_index() {
        let key = RowKey::from_fn(|r, i| format!("{}#{i}", value_to_text(&r["name"])));
        assert_eq!(key.resolve(&row(json!({"name": "a"})), 3), "a#3");
        assert_eq!(format!("{key:?}"), "Fn(..)");
    }

    #[test]
    fn malformed_paths_resolve_to_none() {
        let r = row(json!({"a": {"b": 1}, "list": [1, 2]}));
        assert_eq!(resolve_path(&r, ""), None);
        assert_eq!(resolve_path(&r, "a.b.c"), None);
        assert_eq!(resolve_path(&r, "list.x"), None);
        assert_eq!(resolve_path(&r, "list.5"), None);
        assert_eq!(resolve_path(&r, "missing"), None);
    }

    #[test]
    fn dates_keep_the_written_calendar_day() {
        let day = NaiveDate::from_ymd_opt(2024, 12, 31);
        assert_eq!(value_to_date(&json!("2024-12-31T23:59:59+09:00")), day);
        assert_eq!(value_to_date(&json!("2024-12-31 08:00:00")), day);
        assert_eq!(value_to_date(&json!("2024-12-31T08:00:00.250")), day);
        assert_eq!(value_to_date(&json!(1_735_603_200_000_i64)), day);
        assert_eq!(value_to_date(&json!(true)), None);
    }

    #[test]
    fn numbers_parse_from_strings() {
        assert_eq!(value_to_number(&json!(" 12.5 ")), Some(12.5));
        assert_eq!(value_to_number(&json!(3)), Some(3.0));
        assert_eq!(value_to_number(&json!("n/a")), None);
        assert_eq!(value_to_number(&json!("NaN")), None);
    }

    #[test]
    fn text_and_blank_rendering() {
        assert_eq!(value_to_text(&json!(["a", null, "b"])), "a, b");
        assert_eq!(value_to_text(&json!(null)), "");
        assert_eq!(value_to_text(&json!(2.5)), "2.5");
        assert!(is_blank(Some(&json!("   "))));
        assert!(is_blank(Some(&json!([]))));
        assert!(!is_blank(Some(&json!(0))));
    }
}
