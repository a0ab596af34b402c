//! Global row search.
//!
//! The query is split on whitespace and lowercased. A row matches when every
//! token fuzzy-matches the text of at least one searchable field, so
//! `"pri eng"` finds a row with name "Priya" and department "Engineering".

use crate::domain::{resolve_path, value_to_text, FieldDefinition, Row};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// A parsed search query, ready to test rows against.
pub struct RowSearch {
    tokens: Vec<String>,
    matcher: SkimMatcherV2,
}

impl RowSearch {
    /// Parses `query`. Returns `None` for a blank query, which matches every
    /// row.
    #[must_use]
    pub fn parse(query: &str) -> Option<Self> {
        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return None;
        }
        Some(Self {
            tokens,
            matcher: SkimMatcherV2::default(),
        })
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether every token matches some searchable field of `row`.
    ///
    /// Action fields are never searched.
    #[must_use]
    pub fn matches(&self, row: &Row, fields: &[FieldDefinition]) -> bool {
        let haystacks: Vec<String> = fields
            .iter()
            .filter(|f| !f.is_action())
            .filter_map(|f| resolve_path(row, &f.field_key))
            .filter(|v| !v.is_null())
            .map(|v| value_to_text(v).to_lowercase())
            .collect();

        self.tokens.iter().all(|token| {
            haystacks
                .iter()
                .any(|text| self.matcher.fuzzy_match(text, token).is_some())
        })
    }
}
