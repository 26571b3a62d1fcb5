//! Document key normalization.
//!
//! Keys arrive as text, integers, or UUIDs; all of them collapse to one
//! canonical text representation at the API boundary, so the engine only
//! ever compares and stores a single key type.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Canonical text form of a document key.
///
/// Together with a [`TagSet`](crate::TagSet) this addresses exactly one
/// stored document per document type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocKey(String);

impl DocKey {
    /// Normalizes any accepted key form into its canonical representation.
    #[must_use]
    pub fn new(key: impl Into<DocKey>) -> Self {
        key.into()
    }

    /// Returns the canonical text form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for DocKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<Uuid> for DocKey {
    fn from(key: Uuid) -> Self {
        Self(key.to_string())
    }
}

macro_rules! doc_key_from_int {
    ($($t:ty),+) => {
        $(impl From<$t> for DocKey {
            fn from(key: $t) -> Self {
                Self(key.to_string())
            }
        })+
    };
}

doc_key_from_int!(i32, i64, u32, u64);
