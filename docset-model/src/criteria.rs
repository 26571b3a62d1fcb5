//! Predicate clauses for index-backed queries.

use serde::{Deserialize, Serialize};

/// Comparison operator applied to an index field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriteriaOperator {
    /// Exact value equality.
    Eq,
    /// Substring containment.
    Contains,
}

/// A single predicate clause: field, operator, operand.
///
/// The field name must match a declared [`IndexMap`](crate::IndexMap) name;
/// the engine rejects unknown fields before touching any data. Multiple
/// clauses in one query combine with logical AND.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub field: String,
    pub operator: CriteriaOperator,
    pub value: String,
}

impl Criteria {
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        operator: CriteriaOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Shorthand for an equality clause.
    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, CriteriaOperator::Eq, value)
    }

    /// Shorthand for a containment clause.
    #[must_use]
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, CriteriaOperator::Contains, value)
    }
}
