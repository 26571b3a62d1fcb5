//! Tag sets — the partition half of a document address.
//!
//! A tag set is an ordered sequence of labels (locales, tenants). Insertion
//! order is preserved so stored documents round-trip exactly, but address
//! equality and the canonical signature compare the sorted set: the same
//! labels in a different order name the same document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Delimiter surrounding every tag in a stored signature.
pub const TAG_DELIMITER: &str = "||";

/// An ordered, duplicate-free set of partition labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Builds a tag set, dropping empty labels and duplicates while keeping
    /// first-seen order.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.into();
            if !tag.is_empty() && !out.contains(&tag) {
                out.push(tag);
            }
        }
        Self(out)
    }

    /// The empty tag set. As a filter it matches every document.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Display signature in insertion order, e.g. `||en-US||en-GB||`.
    /// Empty for the empty set.
    #[must_use]
    pub fn signature(&self) -> String {
        Self::render(&self.0)
    }

    /// Canonical signature in sorted order; two tag sets address the same
    /// document exactly when their canonical signatures are equal.
    #[must_use]
    pub fn canonical_signature(&self) -> String {
        let mut sorted = self.0.clone();
        sorted.sort();
        Self::render(&sorted)
    }

    /// Parses a stored signature back into a tag set, preserving its order.
    #[must_use]
    pub fn parse(signature: &str) -> Self {
        Self::new(signature.split(TAG_DELIMITER))
    }

    fn render(tags: &[String]) -> String {
        if tags.is_empty() {
            return String::new();
        }
        format!(
            "{}{}{}",
            TAG_DELIMITER,
            tags.join(TAG_DELIMITER),
            TAG_DELIMITER
        )
    }

    fn sorted(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.0.iter().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl PartialEq for TagSet {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for TagSet {}

impl Hash for TagSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signature())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for TagSet {
    fn from(tags: [S; N]) -> Self {
        Self::new(tags)
    }
}

impl From<&[&str]> for TagSet {
    fn from(tags: &[&str]) -> Self {
        Self::new(tags.iter().copied())
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        Self::new(tags)
    }
}

impl FromIterator<String> for TagSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter)
    }
}
