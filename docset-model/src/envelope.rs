//! The persisted unit of storage.

use crate::{DocKey, TagSet};

/// One stored document: its address, serialized content, and the content
/// fingerprint used for change detection.
///
/// `document` is only populated transiently in memory; loads rebuild it
/// from `content` via the configured serializer.
#[derive(Debug, Clone)]
pub struct DocumentEnvelope<T> {
    pub key: DocKey,
    pub tags: TagSet,
    pub content: String,
    pub content_hash: String,
    pub document: Option<T>,
}

impl<T> DocumentEnvelope<T> {
    #[must_use]
    pub fn new(key: DocKey, tags: TagSet, content: String, content_hash: String) -> Self {
        Self {
            key,
            tags,
            content,
            content_hash,
            document: None,
        }
    }

    /// Attaches the deserialized document value.
    #[must_use]
    pub fn with_document(mut self, document: T) -> Self {
        self.document = Some(document);
        self
    }

    /// True when both envelopes name the same stored document.
    #[must_use]
    pub fn same_address(&self, other: &Self) -> bool {
        self.key == other.key && self.tags == other.tags
    }
}
