//! Storage configuration.

use crate::{StorageError, StorageResult};
use std::path::PathBuf;

/// Immutable configuration consumed by [`DocStore`](crate::DocStore) at
/// construction.
///
/// Table names are composed from the optional schema name, prefix, base
/// name and suffix, so several stores (or several document types) can share
/// one database file without colliding.
#[derive(Debug, Clone)]
pub struct StorageOptions {
    /// SQLite database path; `None` opens an in-memory database.
    pub connection_path: Option<PathBuf>,
    /// Optional schema prefix for composed table names.
    pub schema_name: Option<String>,
    /// Base table name for the document type.
    pub table_name: String,
    pub table_name_prefix: Option<String>,
    pub table_name_suffix: Option<String>,
    /// Fetch tag-filtered loads in pages of `default_take_size`.
    pub buffered_load: bool,
    /// Commit the document row and its index rows as one transaction.
    pub use_transactions: bool,
    /// Page size for buffered loads.
    pub default_take_size: usize,
    /// Permits `reset` to destroy data.
    pub allow_destructive: bool,
}

impl StorageOptions {
    /// Options for an in-memory store with the given base table name.
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            connection_path: None,
            schema_name: None,
            table_name: table_name.into(),
            table_name_prefix: None,
            table_name_suffix: None,
            buffered_load: false,
            use_transactions: true,
            default_take_size: 1000,
            allow_destructive: true,
        }
    }

    /// Options for a store backed by a database file.
    #[must_use]
    pub fn with_path(table_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let mut options = Self::new(table_name);
        options.connection_path = Some(path.into());
        options
    }

    /// Name of the document table.
    #[must_use]
    pub fn doc_table_name(&self) -> String {
        format!("{}_docs", self.base_table_name())
    }

    /// Name of the index table.
    #[must_use]
    pub fn index_table_name(&self) -> String {
        format!("{}_idx", self.base_table_name())
    }

    /// Rejects options whose composed table names could not be used as
    /// bare SQL identifiers.
    pub fn validate(&self) -> StorageResult<()> {
        if self.table_name.is_empty() {
            return Err(StorageError::InvalidOptions("empty table name".into()));
        }
        let name = self.base_table_name();
        let valid = name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !name.starts_with(|c: char| c.is_ascii_digit());
        if !valid {
            return Err(StorageError::InvalidOptions(format!(
                "table name is not a valid identifier: {name}"
            )));
        }
        if self.default_take_size == 0 {
            return Err(StorageError::InvalidOptions(
                "default_take_size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    fn base_table_name(&self) -> String {
        let mut name = String::new();
        if let Some(schema) = &self.schema_name {
            name.push_str(schema);
            name.push('_');
        }
        if let Some(prefix) = &self.table_name_prefix {
            name.push_str(prefix);
            name.push('_');
        }
        name.push_str(&self.table_name);
        if let Some(suffix) = &self.table_name_suffix {
            name.push('_');
            name.push_str(suffix);
        }
        name
    }
}
