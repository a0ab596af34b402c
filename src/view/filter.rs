//! Declarative filter rules and their evaluator.
//!
//! A [`FilterRule`] pairs a field key with a [`Condition`]: one operator plus
//! its operand. Rules serialize as plain JSON so list pages can persist and
//! exchange them:
//!
//! ```json
//! { "fieldKey": "salary", "condition": { "op": "between", "value": [1000, 5000] } }
//! ```
//!
//! [`Condition::evaluate_as`] is the single evaluator for every operator. Text
//! comparisons are case-insensitive; date comparisons work on calendar days.

use super::operators::{operators_for, OperatorKind};
use crate::domain::error::{GridError, Result};
use crate::domain::{
    is_blank, is_truthy, resolve_path, value_to_date, value_to_number, value_to_text,
    FieldDefinition, FieldType, Row,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An operator together with its operand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Condition {
    Equals(Value),
    NotEquals(Value),
    Contains(String),
    NotContains(String),
    StartsWith(String),
    EndsWith(String),
    Gt(f64),
    Gte(f64),
    Lt(f64),
    Lte(f64),
    /// Inclusive range of numbers or of dates.
    Between(Value, Value),
    On(NaiveDate),
    Before(NaiveDate),
    After(NaiveDate),
    In(Vec<Value>),
    NotIn(Vec<Value>),
    IsEmpty,
    IsNotEmpty,
    IsTrue,
    IsFalse,
}

impl Condition {
    #[must_use]
    pub const fn kind(&self) -> OperatorKind {
        match self {
            Self::Equals(_) => OperatorKind::Equals,
            Self::NotEquals(_) => OperatorKind::NotEquals,
            Self::Contains(_) => OperatorKind::Contains,
            Self::NotContains(_) => OperatorKind::NotContains,
            Self::StartsWith(_) => OperatorKind::StartsWith,
            Self::EndsWith(_) => OperatorKind::EndsWith,
            Self::Gt(_) => OperatorKind::Gt,
            Self::Gte(_) => OperatorKind::Gte,
            Self::Lt(_) => OperatorKind::Lt,
            Self::Lte(_) => OperatorKind::Lte,
            Self::Between(..) => OperatorKind::Between,
            Self::On(_) => OperatorKind::On,
            Self::Before(_) => OperatorKind::Before,
            Self::After(_) => OperatorKind::After,
            Self::In(_) => OperatorKind::In,
            Self::NotIn(_) => OperatorKind::NotIn,
            Self::IsEmpty => OperatorKind::IsEmpty,
            Self::IsNotEmpty => OperatorKind::IsNotEmpty,
            Self::IsTrue => OperatorKind::IsTrue,
            Self::IsFalse => OperatorKind::IsFalse,
        }
    }

    /// Evaluates the condition against one cell value.
    ///
    /// Missing values only satisfy `IsEmpty`, the negated operators
    /// (`NotEquals`, `NotContains`, `NotIn`), and `IsFalse`.
    ///
    /// Without a field type, `Between` compares numerically when the value
    /// and both bounds read as numbers, and as calendar dates otherwise.
    #[must_use]
    pub fn evaluate(&self, value: Option<&Value>) -> bool {
        self.evaluate_as(value, None)
    }

    /// Evaluates against a value of a field of known type.
    ///
    /// `Between` on a `Date` field always compares calendar dates, so epoch
    /// millisecond bounds select by day. On `Number` and `Currency` fields it
    /// always compares numbers.
    #[must_use]
    pub fn evaluate_as(&self, value: Option<&Value>, field_type: Option<FieldType>) -> bool {
        match self {
            Self::IsEmpty => is_blank(value),
            Self::IsNotEmpty => !is_blank(value),
            Self::IsTrue => value.is_some_and(is_truthy),
            Self::IsFalse => !value.is_some_and(is_truthy),
            Self::NotEquals(operand) => !equals(value, operand),
            Self::NotContains(needle) => !contains(value, needle),
            Self::NotIn(options) => !options.iter().any(|o| equals(value, o)),
            Self::Equals(operand) => equals(value, operand),
            Self::Contains(needle) => contains(value, needle),
            Self::In(options) => options.iter().any(|o| equals(value, o)),
            Self::StartsWith(prefix) => {
                text_of(value).is_some_and(|t| t.starts_with(&prefix.to_lowercase()))
            }
            Self::EndsWith(suffix) => {
                text_of(value).is_some_and(|t| t.ends_with(&suffix.to_lowercase()))
            }
            Self::Gt(n) => number_of(value).is_some_and(|v| v > *n),
            Self::Gte(n) => number_of(value).is_some_and(|v| v >= *n),
            Self::Lt(n) => number_of(value).is_some_and(|v| v < *n),
            Self::Lte(n) => number_of(value).is_some_and(|v| v <= *n),
            Self::On(day) => date_of(value).is_some_and(|d| d == *day),
            Self::Before(day) => date_of(value).is_some_and(|d| d < *day),
            Self::After(day) => date_of(value).is_some_and(|d| d > *day),
            Self::Between(low, high) => between(value, low, high, field_type),
        }
    }
}

/// One filter: a condition applied to the value at `field_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRule {
    pub field_key: String,
    pub condition: Condition,
}

impl FilterRule {
    #[must_use]
    pub fn new(field_key: impl Into<String>, condition: Condition) -> Self {
        Self {
            field_key: field_key.into(),
            condition,
        }
    }

    /// Checks the rule against the definition of the field it targets.
    ///
    /// # Errors
    ///
    /// - [`GridError::UnknownField`] if `field` is not the rule's field
    /// - [`GridError::UnsupportedOperator`] if the operator is not allowed for
    ///   the field's type
    /// - [`GridError::InvalidFilter`] if a numeric operand is not finite or a
    ///   range bound does not fit the field's type
    ///
    /// # Examples
    ///
    /// ```
    /// use gridview::domain::{FieldDefinition, GridError};
    /// use gridview::view::{Condition, FilterRule};
    ///
    /// let name = FieldDefinition::new("name", "Name");
    /// let rule = FilterRule::new("name", Condition::Gt(3.0));
    /// assert!(matches!(rule.validate(&name), Err(GridError::UnsupportedOperator { .. })));
    /// ```
    pub fn validate(&self, field: &FieldDefinition) -> Result<()> {
        if field.field_key != self.field_key {
            return Err(GridError::UnknownField(self.field_key.clone()));
        }

        let kind = self.condition.kind();
        if !operators_for(field.field_type).contains(&kind) {
            return Err(GridError::UnsupportedOperator {
                field_key: self.field_key.clone(),
                operator: kind.to_string(),
                field_type: field.field_type.to_string(),
            });
        }

        let invalid = |reason: &str| GridError::InvalidFilter {
            field_key: self.field_key.clone(),
            reason: reason.to_string(),
        };
        match &self.condition {
            Condition::Gt(n) | Condition::Gte(n) | Condition::Lt(n) | Condition::Lte(n)
                if !n.is_finite() =>
            {
                Err(invalid("operand must be a finite number"))
            }
            Condition::Between(low, high) if field.field_type == FieldType::Date => {
                match (value_to_date(low), value_to_date(high)) {
                    (Some(_), Some(_)) => Ok(()),
                    _ => Err(invalid("range bounds must be dates")),
                }
            }
            Condition::Between(low, high) => match (value_to_number(low), value_to_number(high)) {
                (Some(_), Some(_)) => Ok(()),
                _ => Err(invalid("range bounds must be numbers")),
            },
            _ => Ok(()),
        }
    }

    /// Whether `row` satisfies the rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridview::view::{Condition, FilterRule};
    /// use serde_json::json;
    ///
    /// let row = json!({"leave": {"days": 4}}).as_object().cloned().unwrap();
    /// assert!(FilterRule::new("leave.days", Condition::Gte(3.0)).matches(&row));
    /// assert!(!FilterRule::new("leave.days", Condition::Lt(3.0)).matches(&row));
    /// ```
    #[must_use]
    pub fn matches(&self, row: &Row) -> bool {
        self.condition.evaluate(resolve_path(row, &self.field_key))
    }

    /// Whether `row` satisfies the rule, reading the value as `field`'s type.
    ///
    /// This is the evaluation [`validate`](Self::validate) checks operands
    /// for.
    #[must_use]
    pub fn matches_field(&self, row: &Row, field: &FieldDefinition) -> bool {
        self.condition
            .evaluate_as(resolve_path(row, &self.field_key), Some(field.field_type))
    }
}

fn text_of(value: Option<&Value>) -> Option<String> {
    value
        .filter(|v| !v.is_null())
        .map(|v| value_to_text(v).to_lowercase())
}

fn number_of(value: Option<&Value>) -> Option<f64> {
    value.and_then(value_to_number)
}

fn date_of(value: Option<&Value>) -> Option<NaiveDate> {
    value.and_then(value_to_date)
}

fn contains(value: Option<&Value>, needle: &str) -> bool {
    text_of(value).is_some_and(|t| t.contains(&needle.to_lowercase()))
}

/// Equality used by `Equals`, `In`, and their negations.
///
/// Numeric operands compare numerically, booleans by truthiness, and anything
/// else as trimmed case-insensitive text. An array cell (multi-select) matches
/// when any element does.
fn equals(value: Option<&Value>, operand: &Value) -> bool {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return operand.is_null();
    };
    if let Value::Array(items) = value {
        return items.iter().any(|item| equals(Some(item), operand));
    }
    match operand {
        Value::Null => false,
        Value::Number(_) => match (value_to_number(value), value_to_number(operand)) {
            (Some(a), Some(b)) => (a - b).abs() <= f64::EPSILON * a.abs().max(b.abs()).max(1.0),
            _ => false,
        },
        Value::Bool(b) => is_truthy(value) == *b,
        _ => {
            value_to_text(value).trim().to_lowercase()
                == value_to_text(operand).trim().to_lowercase()
        }
    }
}

/// Inclusive range check used by `Between`.
fn between(
    value: Option<&Value>,
    low: &Value,
    high: &Value,
    field_type: Option<FieldType>,
) -> bool {
    let numeric = || match (value_to_number(low), value_to_number(high), number_of(value)) {
        (Some(lo), Some(hi), Some(v)) => lo <= v && v <= hi,
        _ => false,
    };
    let dated = || match (value_to_date(low), value_to_date(high), date_of(value)) {
        (Some(lo), Some(hi), Some(d)) => lo <= d && d <= hi,
        _ => false,
    };

    match field_type {
        Some(FieldType::Date) => dated(),
        Some(FieldType::Number | FieldType::Currency) => numeric(),
        _ => {
            let all_numbers = number_of(value).is_some()
                && value_to_number(low).is_some()
                && value_to_number(high).is_some();
            if all_numbers {
                numeric()
            } else {
                dated()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap_or_default()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_on_matches_timestamp_on_that_day() {
        let rule = FilterRule::new("appliedOn", Condition::On(day(2024, 7, 15)));
        assert!(rule.matches(&row(json!({"appliedOn": "2024-07-15T23:45:00+05:30"}))));
        assert!(rule.matches(&row(json!({"appliedOn": "2024-07-15"}))));
        assert!(!rule.matches(&row(json!({"appliedOn": "2024-07-16T00:00:01+05:30"}))));
        assert!(!rule.matches(&row(json!({"appliedOn": null}))));
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let rule = FilterRule::new(
            "date",
            Condition::Between(json!("2024-01-01"), json!("2024-01-31")),
        );
        for (value, expected) in [
            ("2024-01-01T00:00:00Z", true),
            ("2024-01-31T18:00:00Z", true),
            ("2024-02-01", false),
            ("2023-12-31", false),
        ] {
            assert_eq!(rule.matches(&row(json!({ "date": value }))), expected, "{value}");
        }
    }

    #[test]
    fn epoch_millis_range_on_date_field_selects_by_day() {
        let date = FieldDefinition::new("d", "Date").with_type(FieldType::Date);
        // 2024-01-01T00:00:00Z ..= 2024-12-31T00:00:00Z
        let rule = FilterRule::new(
            "d",
            Condition::Between(json!(1_704_067_200_000_i64), json!(1_735_603_200_000_i64)),
        );
        assert!(rule.validate(&date).is_ok());

        let inside = row(json!({"d": "2024-06-01"}));
        let last_day = row(json!({"d": "2024-12-31T18:30:00Z"}));
        let outside = row(json!({"d": "2025-01-01"}));
        assert!(rule.matches_field(&inside, &date));
        assert!(rule.matches_field(&last_day, &date));
        assert!(!rule.matches_field(&outside, &date));
        assert!(rule.matches(&inside));
    }

    #[test]
    fn typed_number_range_ignores_date_like_text() {
        let amount = FieldDefinition::new("amount", "Amount").with_type(FieldType::Number);
        let rule = FilterRule::new("amount", Condition::Between(json!(0), json!(5000)));
        assert!(!rule.matches_field(&row(json!({"amount": "2024-06-01"})), &amount));
        assert!(rule.matches_field(&row(json!({"amount": 4999.5})), &amount));
    }

    #[test]
    fn text_operators_ignore_case() {
        let r = row(json!({"name": "Priya Nair", "email": "PRIYA@corp.io"}));
        assert!(FilterRule::new("name", Condition::Contains("nai".into())).matches(&r));
        assert!(FilterRule::new("name", Condition::StartsWith("pri".into())).matches(&r));
        assert!(FilterRule::new("email", Condition::EndsWith("@CORP.IO".into())).matches(&r));
        assert!(FilterRule::new("email", Condition::Equals(json!(" priya@corp.io "))).matches(&r));
        assert!(!FilterRule::new("name", Condition::NotContains("priya".into())).matches(&r));
    }

    #[test]
    fn numeric_comparisons_accept_numeric_strings() {
        let r = row(json!({"amount": "2500.50"}));
        assert!(FilterRule::new("amount", Condition::Gt(2500.0)).matches(&r));
        assert!(FilterRule::new("amount", Condition::Equals(json!(2500.5))).matches(&r));
        let range = Condition::Between(json!(2000), json!(3000));
        assert!(FilterRule::new("amount", range).matches(&r));
        assert!(!FilterRule::new("amount", Condition::Lte(100.0)).matches(&r));
    }

    #[test]
    fn missing_values_only_match_negative_operators() {
        let r = row(json!({"other": 1}));
        assert!(FilterRule::new("status", Condition::IsEmpty).matches(&r));
        assert!(FilterRule::new("status", Condition::NotEquals(json!("Open"))).matches(&r));
        assert!(FilterRule::new("status", Condition::NotIn(vec![json!("Open")])).matches(&r));
        assert!(FilterRule::new("flag", Condition::IsFalse).matches(&r));
        assert!(!FilterRule::new("status", Condition::Contains(String::new())).matches(&r));
        assert!(!FilterRule::new("amount", Condition::Gte(0.0)).matches(&r));
    }

    #[test]
    fn in_matches_any_element_of_multi_select_cells() {
        let r = row(json!({"tags": ["Remote", "Contract"]}));
        let any_of = Condition::In(vec![json!("contract"), json!("x")]);
        assert!(FilterRule::new("tags", any_of).matches(&r));
        assert!(!FilterRule::new("tags", Condition::NotIn(vec![json!("remote")])).matches(&r));
    }

    #[test]
    fn validation_uses_operator_table_and_operand_shape() {
        let amount = FieldDefinition::new("amount", "Amount").with_type(FieldType::Currency);
        let joined = FieldDefinition::new("joined", "Joined").with_type(FieldType::Date);

        assert!(FilterRule::new("amount", Condition::Gt(5.0)).validate(&amount).is_ok());
        assert!(matches!(
            FilterRule::new("amount", Condition::Contains("5".into())).validate(&amount),
            Err(GridError::UnsupportedOperator { .. })
        ));
        assert!(matches!(
            FilterRule::new("amount", Condition::Gt(f64::INFINITY)).validate(&amount),
            Err(GridError::InvalidFilter { .. })
        ));
        assert!(matches!(
            FilterRule::new("joined", Condition::Between(json!(1), json!("x"))).validate(&joined),
            Err(GridError::InvalidFilter { .. })
        ));
        assert!(matches!(
            FilterRule::new("amount", Condition::IsEmpty).validate(&joined),
            Err(GridError::UnknownField(_))
        ));
    }

    #[test]
    fn rules_use_tagged_json() {
        let rule: FilterRule = serde_json::from_value(json!({
            "fieldKey": "joined",
            "condition": {"op": "before", "value": "2024-02-29"}
        }))
        .unwrap();
        assert_eq!(rule.condition, Condition::Before(day(2024, 2, 29)));

        let empty: FilterRule = serde_json::from_value(json!({
            "fieldKey": "notes",
            "condition": {"op": "is_empty"}
        }))
        .unwrap();
        assert_eq!(empty.condition.kind(), OperatorKind::IsEmpty);
    }
}
