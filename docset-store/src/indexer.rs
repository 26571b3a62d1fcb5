//! Index-row maintenance.
//!
//! Index entries for an envelope are replaced wholesale on every write and
//! removed wholesale on delete; nothing is patched incrementally. A
//! multi-valued extractor yields one row per value, an extractor yielding
//! nothing contributes zero rows for its field.

use crate::StorageResult;
use docset_model::{DocKey, IndexMap};
use rusqlite::{params, Connection};

/// Computes the full set of (field, value) index pairs for a document.
pub(crate) fn index_values<T: 'static>(maps: &[IndexMap<T>], document: &T) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    for map in maps {
        for value in map.values(document) {
            rows.push((map.name().to_string(), value));
        }
    }
    rows
}

/// Replaces every index row for the addressed envelope.
pub(crate) fn replace_index_rows(
    conn: &Connection,
    table: &str,
    key: &DocKey,
    tag_sig: &str,
    rows: &[(String, String)],
) -> StorageResult<()> {
    conn.execute(
        &format!("DELETE FROM {table} WHERE doc_key = ?1 AND tag_sig = ?2"),
        params![key.as_str(), tag_sig],
    )?;
    let mut stmt = conn.prepare(&format!(
        "INSERT INTO {table} (doc_key, tag_sig, field, value) VALUES (?1, ?2, ?3, ?4)"
    ))?;
    for (field, value) in rows {
        stmt.execute(params![key.as_str(), tag_sig, field, value])?;
    }
    Ok(())
}

/// Removes index rows for one address, or for every tag variant of a key.
pub(crate) fn delete_index_rows(
    conn: &Connection,
    table: &str,
    key: &DocKey,
    tag_sig: Option<&str>,
) -> StorageResult<()> {
    match tag_sig {
        Some(sig) => conn.execute(
            &format!("DELETE FROM {table} WHERE doc_key = ?1 AND tag_sig = ?2"),
            params![key.as_str(), sig],
        )?,
        None => conn.execute(
            &format!("DELETE FROM {table} WHERE doc_key = ?1"),
            params![key.as_str()],
        )?,
    };
    Ok(())
}
