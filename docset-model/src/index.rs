//! Index field declarations.
//!
//! An [`IndexMap`] names one derived field and supplies a pure extraction
//! function from a document to zero, one, or many textual values. The set
//! of maps for a document type is declared once at engine construction and
//! never changes afterwards.

use std::fmt;

type Extractor<T> = Box<dyn Fn(&T) -> Vec<String> + Send + Sync>;

/// A named extraction rule mapping a document to index values.
pub struct IndexMap<T: 'static> {
    name: String,
    extract: Extractor<T>,
}

impl<T: 'static> IndexMap<T> {
    /// Declares a single-valued field; `None` yields no index entry for
    /// that document.
    pub fn new<F>(name: impl Into<String>, value: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            extract: Box::new(move |doc| value(doc).into_iter().collect()),
        }
    }

    /// Declares a multi-valued field, one index entry per yielded value.
    pub fn multi<F>(name: impl Into<String>, values: F) -> Self
    where
        F: Fn(&T) -> Vec<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            extract: Box::new(values),
        }
    }

    /// The field name used in criteria lookups.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the extractor against a document. Empty values are dropped so
    /// they never become index rows.
    #[must_use]
    pub fn values(&self, document: &T) -> Vec<String> {
        (self.extract)(document)
            .into_iter()
            .filter(|v| !v.is_empty())
            .collect()
    }
}

impl<T: 'static> fmt::Debug for IndexMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexMap").field("name", &self.name).finish()
    }
}
