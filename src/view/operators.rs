//! Filter operators and the per-type operator table.

use crate::domain::FieldType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every comparison a filter rule can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    Gt,
    Gte,
    Lt,
    Lte,
    Between,
    On,
    Before,
    After,
    In,
    NotIn,
    IsEmpty,
    IsNotEmpty,
    IsTrue,
    IsFalse,
}

impl OperatorKind {
    /// Wire name, as used in the `op` tag of a serialized condition.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "not_equals",
            Self::Contains => "contains",
            Self::NotContains => "not_contains",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Between => "between",
            Self::On => "on",
            Self::Before => "before",
            Self::After => "after",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::IsEmpty => "is_empty",
            Self::IsNotEmpty => "is_not_empty",
            Self::IsTrue => "is_true",
            Self::IsFalse => "is_false",
        }
    }

    /// Human-readable label for filter pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Equals | Self::On => "is",
            Self::NotEquals => "is not",
            Self::Contains => "contains",
            Self::NotContains => "does not contain",
            Self::StartsWith => "starts with",
            Self::EndsWith => "ends with",
            Self::Gt => "greater than",
            Self::Gte => "at least",
            Self::Lt => "less than",
            Self::Lte => "at most",
            Self::Between => "between",
            Self::Before => "before",
            Self::After => "after",
            Self::In => "is any of",
            Self::NotIn => "is none of",
            Self::IsEmpty => "is empty",
            Self::IsNotEmpty => "is not empty",
            Self::IsTrue => "is checked",
            Self::IsFalse => "is not checked",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const TEXT_OPERATORS: &[OperatorKind] = &[
    OperatorKind::Contains,
    OperatorKind::NotContains,
    OperatorKind::Equals,
    OperatorKind::NotEquals,
    OperatorKind::StartsWith,
    OperatorKind::EndsWith,
    OperatorKind::IsEmpty,
    OperatorKind::IsNotEmpty,
];

const NUMBER_OPERATORS: &[OperatorKind] = &[
    OperatorKind::Equals,
    OperatorKind::NotEquals,
    OperatorKind::Gt,
    OperatorKind::Gte,
    OperatorKind::Lt,
    OperatorKind::Lte,
    OperatorKind::Between,
    OperatorKind::IsEmpty,
    OperatorKind::IsNotEmpty,
];

const DATE_OPERATORS: &[OperatorKind] = &[
    OperatorKind::On,
    OperatorKind::Before,
    OperatorKind::After,
    OperatorKind::Between,
    OperatorKind::IsEmpty,
    OperatorKind::IsNotEmpty,
];

const CHOICE_OPERATORS: &[OperatorKind] = &[
    OperatorKind::Equals,
    OperatorKind::NotEquals,
    OperatorKind::In,
    OperatorKind::NotIn,
    OperatorKind::IsEmpty,
    OperatorKind::IsNotEmpty,
];

const CHECKBOX_OPERATORS: &[OperatorKind] = &[OperatorKind::IsTrue, OperatorKind::IsFalse];

/// Operators a filter on a field of this type may use, in picker order.
///
/// Action columns hold no data and cannot be filtered.
///
/// # Examples
///
/// ```
/// use gridview::domain::FieldType;
/// use gridview::view::{operators_for, OperatorKind};
///
/// assert!(operators_for(FieldType::Date).contains(&OperatorKind::On));
/// assert!(!operators_for(FieldType::Text).contains(&OperatorKind::Gt));
/// assert!(operators_for(FieldType::Action).is_empty());
/// ```
#[must_use]
pub const fn operators_for(field_type: FieldType) -> &'static [OperatorKind] {
    match field_type {
        FieldType::Text
        | FieldType::Textarea
        | FieldType::Email
        | FieldType::Phone
        | FieldType::Url
        | FieldType::Unknown => TEXT_OPERATORS,
        FieldType::Number | FieldType::Currency => NUMBER_OPERATORS,
        FieldType::Date => DATE_OPERATORS,
        FieldType::Dropdown => CHOICE_OPERATORS,
        FieldType::Checkbox => CHECKBOX_OPERATORS,
        FieldType::Action => &[],
    }
}
