//! SQLite-backed document store.
//!
//! Layers document semantics on top of a relational backend:
//! - documents are addressed by (key, tag set) and stored as serialized
//!   text plus a content fingerprint
//! - declared index fields are re-extracted and fully replaced on every
//!   write, so predicate queries never scan document content
//! - upserts are change-detected by hash: writing identical content again
//!   is a no-op reported as `Unchanged`
//!
//! The engine is generic over the document type and over its collaborators:
//! [`DocSerializer`] (text encoding), [`ContentHasher`] (fingerprinting)
//! and [`StorageObserver`] (instrumentation). Defaults backed by serde_json
//! and SHA-256 are provided.

mod error;
mod hasher;
mod indexer;
mod observer;
mod options;
mod query;
mod serializer;
mod store;

pub use error::{StorageError, StorageResult};
pub use hasher::{ContentHasher, Sha256Hasher};
pub use observer::{NoopObserver, StorageObserver, TracingObserver};
pub use options::StorageOptions;
pub use serializer::{DocSerializer, JsonSerializer};
pub use store::{DocStore, StorageAction};
