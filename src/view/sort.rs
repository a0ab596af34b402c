//! Row ordering for the table view.

use crate::app::{SortDescriptor, SortDirection};
use crate::domain::{
    is_blank, is_truthy, resolve_path, value_to_date, value_to_number, value_to_text, FieldType,
    Row,
};
use serde_json::Value;
use std::cmp::Ordering;

/// Compares two non-blank cell values of a field of type `field_type`.
///
/// Numbers compare numerically and dates chronologically. In those columns,
/// values that parse as the field's type sort before values that do not, and
/// the unparsed ones compare as lowercase text, so a mixed column still has
/// one consistent order. Other types compare as lowercase text.
#[must_use]
pub fn compare_values(a: &Value, b: &Value, field_type: FieldType) -> Ordering {
    match field_type {
        FieldType::Number | FieldType::Currency => {
            parsed_first(value_to_number(a), value_to_number(b), f64::total_cmp)
                .unwrap_or_else(|| compare_text(a, b))
        }
        FieldType::Date => parsed_first(value_to_date(a), value_to_date(b), |x, y| x.cmp(y))
            .unwrap_or_else(|| compare_text(a, b)),
        FieldType::Checkbox => is_truthy(a).cmp(&is_truthy(b)),
        _ => compare_text(a, b),
    }
}

/// Orders parsed values before unparsed ones. `None` when neither parsed.
fn parsed_first<T>(
    a: Option<T>,
    b: Option<T>,
    cmp: impl FnOnce(&T, &T) -> Ordering,
) -> Option<Ordering> {
    match (a, b) {
        (Some(x), Some(y)) => Some(cmp(&x, &y)),
        (Some(_), None) => Some(Ordering::Less),
        (None, Some(_)) => Some(Ordering::Greater),
        (None, None) => None,
    }
}

fn compare_text(a: &Value, b: &Value) -> Ordering {
    value_to_text(a)
        .to_lowercase()
        .cmp(&value_to_text(b).to_lowercase())
}

/// Sorts `indices` (positions into `rows`) by `sort`.
///
/// The sort is stable. Blank values go last in both directions.
pub fn sort_indices(
    rows: &[Row],
    indices: &mut [usize],
    sort: &SortDescriptor,
    field_type: FieldType,
) {
    let value = |i: usize| rows.get(i).and_then(|r| resolve_path(r, &sort.field));

    indices.sort_by(|&x, &y| {
        let (a, b) = (value(x), value(y));
        match (is_blank(a), is_blank(b)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => match (a, b) {
                (Some(a), Some(b)) => {
                    let ord = compare_values(a, b, field_type);
                    match sort.direction {
                        SortDirection::Asc => ord,
                        SortDirection::Desc => ord.reverse(),
                    }
                }
                _ => Ordering::Equal,
            },
        }
    });
}
