//! Pluggable document serialization.

use crate::StorageResult;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Text encoding of a document.
///
/// Implementations must round-trip: `from_text(to_text(d))` is equivalent
/// to `d` for every valid document.
pub trait DocSerializer<T>: Send + Sync {
    fn to_text(&self, document: &T) -> StorageResult<String>;
    fn from_text(&self, text: &str) -> StorageResult<T>;
}

/// JSON serializer backed by serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl<T> DocSerializer<T> for JsonSerializer
where
    T: Serialize + DeserializeOwned,
{
    fn to_text(&self, document: &T) -> StorageResult<String> {
        Ok(serde_json::to_string(document)?)
    }

    fn from_text(&self, text: &str) -> StorageResult<T> {
        Ok(serde_json::from_str(text)?)
    }
}
