//! Content fingerprinting.

use sha2::{Digest, Sha256};

/// Deterministic digest over serialized content.
///
/// Used only for equality testing during upsert change detection, never
/// for security. Equal inputs must produce equal fingerprints.
pub trait ContentHasher: Send + Sync {
    fn hash(&self, content: &str) -> String;
}

/// SHA-256 hasher rendering a lowercase hex digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl ContentHasher for Sha256Hasher {
    fn hash(&self, content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
