//! Data contracts for the docset engine.
//!
//! Defines the types shared by the storage engine and its callers:
//! - [`DocKey`] / [`TagSet`] — the two halves of a document address
//! - [`DocumentEnvelope`] — the persisted unit (serialized content + fingerprint)
//! - [`IndexMap`] — named index-field extraction rules
//! - [`Criteria`] / [`CriteriaOperator`] — predicate clauses for index-backed queries
//!
//! No I/O lives here; the engine crate (`docset-store`) consumes these types
//! and keeps the backing tables consistent with them.

mod criteria;
mod envelope;
mod index;
mod key;
mod tags;

pub use criteria::{Criteria, CriteriaOperator};
pub use envelope::DocumentEnvelope;
pub use index::IndexMap;
pub use key::DocKey;
pub use tags::{TagSet, TAG_DELIMITER};
