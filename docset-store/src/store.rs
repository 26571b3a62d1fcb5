//! The document store engine.
//!
//! [`DocStore`] persists typed documents addressed by (key, tag set) into a
//! pair of SQLite tables: one row per envelope plus index rows derived from
//! the declared [`IndexMap`]s. Upserts are change-detected by content hash,
//! index rows are fully replaced on every successful write, and criteria
//! queries resolve through the index table without scanning content.
//!
//! The store is safe to share across threads; per-document atomicity is
//! delegated to SQLite transactions when `use_transactions` is set. Writers
//! racing on the same address resolve last-writer-wins.

use crate::indexer;
use crate::query;
use crate::{
    ContentHasher, DocSerializer, JsonSerializer, NoopObserver, Sha256Hasher, StorageError,
    StorageObserver, StorageOptions, StorageResult,
};
use docset_model::{Criteria, DocKey, DocumentEnvelope, IndexMap, TagSet};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Outcome classification of a mutating call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageAction {
    Inserted,
    Updated,
    Unchanged,
    Deleted,
    NotFound,
}

/// SQLite-backed document store for one document type.
pub struct DocStore<T: 'static> {
    conn: Arc<Mutex<Connection>>,
    options: StorageOptions,
    serializer: Box<dyn DocSerializer<T>>,
    hasher: Box<dyn ContentHasher>,
    index_maps: Vec<IndexMap<T>>,
    observer: Arc<dyn StorageObserver>,
}

impl<T: 'static> DocStore<T> {
    /// Opens (or creates) a store per the options' connection target and
    /// ensures the backing tables exist.
    pub fn new(
        options: StorageOptions,
        serializer: Box<dyn DocSerializer<T>>,
        hasher: Box<dyn ContentHasher>,
        index_maps: Vec<IndexMap<T>>,
    ) -> StorageResult<Self> {
        options.validate()?;
        let conn = match &options.connection_path {
            Some(path) => Connection::open(path)?,
            None => Connection::open_in_memory()?,
        };
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
            options,
            serializer,
            hasher,
            index_maps,
            observer: Arc::new(NoopObserver),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Opens a store with the default JSON serializer and SHA-256 hasher.
    pub fn open(options: StorageOptions, index_maps: Vec<IndexMap<T>>) -> StorageResult<Self>
    where
        T: Serialize + DeserializeOwned,
    {
        Self::new(
            options,
            Box::new(JsonSerializer),
            Box::new(Sha256Hasher),
            index_maps,
        )
    }

    /// Replaces the instrumentation observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn StorageObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The options this store was built with.
    #[must_use]
    pub fn options(&self) -> &StorageOptions {
        &self.options
    }

    /// Idempotently creates the document and index tables. Safe to call
    /// repeatedly and from several stores pointed at the same database.
    pub fn initialize(&self) -> StorageResult<()> {
        let docs_table = self.options.doc_table_name();
        let index_table = self.options.index_table_name();
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {docs_table} (
                key TEXT NOT NULL,
                tag_sig TEXT NOT NULL,
                tags TEXT NOT NULL,
                hash TEXT NOT NULL,
                content TEXT NOT NULL,
                UNIQUE(key, tag_sig)
            );
            CREATE INDEX IF NOT EXISTS {docs_table}_key ON {docs_table} (key);
            CREATE TABLE IF NOT EXISTS {index_table} (
                doc_key TEXT NOT NULL,
                tag_sig TEXT NOT NULL,
                field TEXT NOT NULL,
                value TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS {index_table}_field_value
                ON {index_table} (field, value);
            CREATE INDEX IF NOT EXISTS {index_table}_doc
                ON {index_table} (doc_key, tag_sig);"
        ))?;
        debug!("initialized tables {docs_table} and {index_table}");
        Ok(())
    }

    /// Removes every document and index row for this store's document
    /// type. Other tables in the same database are untouched.
    pub fn reset(&self) -> StorageResult<()> {
        if !self.options.allow_destructive {
            return Err(StorageError::DestructiveOperationDenied);
        }
        let docs_table = self.options.doc_table_name();
        let index_table = self.options.index_table_name();
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(&format!(
            "DELETE FROM {docs_table}; DELETE FROM {index_table};"
        ))?;
        warn!("reset cleared {docs_table} and {index_table}");
        Ok(())
    }

    /// Counts live documents whose tag set contains every filter tag; the
    /// empty filter counts all documents of the type.
    pub fn count(&self, filter: &TagSet) -> StorageResult<u64> {
        let (where_clause, query_params) =
            query::build_filter(&self.options.index_table_name(), filter, &[]);
        let sql = format!(
            "SELECT COUNT(*) FROM {} d{where_clause}",
            self.options.doc_table_name()
        );
        let conn = self.conn.lock().unwrap();
        let count: i64 =
            conn.query_row(&sql, params_from_iter(query_params.iter()), |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Inserts or updates the document at (`key`, `tags`).
    ///
    /// Serializes and fingerprints the document first; if an envelope with
    /// an equal fingerprint already sits at the address, nothing is written
    /// and `Unchanged` is returned. Otherwise the envelope and its complete
    /// index-row set are written, as one transaction when configured.
    pub fn upsert(
        &self,
        key: impl Into<DocKey>,
        document: &T,
        tags: &TagSet,
    ) -> StorageResult<StorageAction> {
        let key = key.into();
        self.observer.started("upsert");
        let content = self.serializer.to_text(document)?;
        let hash = self.hasher.hash(&content);
        let index_rows = indexer::index_values(&self.index_maps, document);
        self.observer.step("upsert", "content serialized and hashed");

        let docs_table = self.options.doc_table_name();
        let index_table = self.options.index_table_name();
        let tag_sig = tags.canonical_signature();

        let mut conn = self.conn.lock().unwrap();
        let existing: Option<String> = conn
            .query_row(
                &format!("SELECT hash FROM {docs_table} WHERE key = ?1 AND tag_sig = ?2"),
                params![key.as_str(), tag_sig],
                |row| row.get(0),
            )
            .optional()?;

        let action = match existing {
            Some(stored) if stored == hash => StorageAction::Unchanged,
            Some(_) => StorageAction::Updated,
            None => StorageAction::Inserted,
        };

        if action != StorageAction::Unchanged {
            if self.options.use_transactions {
                let tx = conn.transaction()?;
                write_envelope(
                    &tx,
                    &docs_table,
                    &index_table,
                    &key,
                    tags,
                    &content,
                    &hash,
                    &index_rows,
                )?;
                tx.commit()?;
            } else {
                write_envelope(
                    &conn,
                    &docs_table,
                    &index_table,
                    &key,
                    tags,
                    &content,
                    &hash,
                    &index_rows,
                )?;
            }
        }
        debug!("upsert {key} -> {action:?}");
        self.observer.finished("upsert");
        Ok(action)
    }

    /// Loads the documents stored at `key` whose tag set exactly matches
    /// `tags`. Missing addresses yield an empty result, never an error.
    pub fn load(&self, key: impl Into<DocKey>, tags: &TagSet) -> StorageResult<Vec<T>> {
        Ok(self
            .load_envelopes(key, tags)?
            .into_iter()
            .filter_map(|envelope| envelope.document)
            .collect())
    }

    /// Loads full envelopes (content, fingerprint, stored tag order) at the
    /// address.
    pub fn load_envelopes(
        &self,
        key: impl Into<DocKey>,
        tags: &TagSet,
    ) -> StorageResult<Vec<DocumentEnvelope<T>>> {
        let key = key.into();
        let sql = format!(
            "SELECT key, tags, hash, content FROM {} WHERE key = ?1 AND tag_sig = ?2",
            self.options.doc_table_name()
        );
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params![key.as_str(), tags.canonical_signature()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        )?;

        let mut out = Vec::new();
        for row in rows {
            let (key_text, tags_text, hash, content) = row?;
            let document = self.serializer.from_text(&content)?;
            out.push(
                DocumentEnvelope::new(
                    DocKey::from(key_text),
                    TagSet::parse(&tags_text),
                    content,
                    hash,
                )
                .with_document(document),
            );
        }
        Ok(out)
    }

    /// Loads every document matching the tag filter. When buffered loading
    /// is configured, rows are fetched in pages of `default_take_size`.
    pub fn load_tagged(&self, filter: &TagSet) -> StorageResult<Vec<T>> {
        if !self.options.buffered_load {
            return self.load_page(filter, &[], None, 0);
        }
        let take = self.options.default_take_size;
        let mut out = Vec::new();
        let mut skip = 0usize;
        loop {
            let page = self.load_page(filter, &[], Some(take), skip)?;
            let fetched = page.len();
            out.extend(page);
            if fetched < take {
                break;
            }
            skip += fetched;
        }
        Ok(out)
    }

    /// Loads documents matching the tag filter and every criterion
    /// (conjunctive AND). A criterion naming an undeclared field fails the
    /// call before any data is read.
    pub fn load_matching(&self, filter: &TagSet, criteria: &[Criteria]) -> StorageResult<Vec<T>> {
        query::validate_criteria(&self.index_maps, criteria)?;
        self.load_page(filter, criteria, None, 0)
    }

    /// Deletes the document stored at exactly (`key`, `tags`).
    pub fn delete(&self, key: impl Into<DocKey>, tags: &TagSet) -> StorageResult<StorageAction> {
        self.delete_address(key.into(), Some(tags.canonical_signature()))
    }

    /// Deletes every tag variant stored under `key`.
    pub fn delete_key(&self, key: impl Into<DocKey>) -> StorageResult<StorageAction> {
        self.delete_address(key.into(), None)
    }

    fn delete_address(
        &self,
        key: DocKey,
        tag_sig: Option<String>,
    ) -> StorageResult<StorageAction> {
        self.observer.started("delete");
        let docs_table = self.options.doc_table_name();
        let index_table = self.options.index_table_name();

        let mut conn = self.conn.lock().unwrap();
        let removed = if self.options.use_transactions {
            let tx = conn.transaction()?;
            let removed =
                remove_envelopes(&tx, &docs_table, &index_table, &key, tag_sig.as_deref())?;
            tx.commit()?;
            removed
        } else {
            remove_envelopes(&conn, &docs_table, &index_table, &key, tag_sig.as_deref())?
        };
        self.observer.finished("delete");

        if removed > 0 {
            debug!("deleted {removed} document(s) for key {key}");
            Ok(StorageAction::Deleted)
        } else {
            Ok(StorageAction::NotFound)
        }
    }

    fn load_page(
        &self,
        filter: &TagSet,
        criteria: &[Criteria],
        take: Option<usize>,
        skip: usize,
    ) -> StorageResult<Vec<T>> {
        let (where_clause, query_params) =
            query::build_filter(&self.options.index_table_name(), filter, criteria);
        let limit = match take {
            Some(take) => take as i64,
            None => -1,
        };
        let sql = format!(
            "SELECT d.content FROM {} d{where_clause} \
             ORDER BY d.key, d.tag_sig LIMIT {limit} OFFSET {skip}",
            self.options.doc_table_name()
        );

        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(query_params.iter()), |row| {
            row.get::<_, String>(0)
        })?;
        let mut contents = Vec::new();
        for row in rows {
            contents.push(row?);
        }

        let mut out = Vec::with_capacity(contents.len());
        for content in &contents {
            out.push(self.serializer.from_text(content)?);
        }
        Ok(out)
    }
}

/// Writes the document row, then replaces its index rows. Outside a
/// transaction an interruption leaves stale index rows at worst, never a
/// document without its row.
#[allow(clippy::too_many_arguments)]
fn write_envelope(
    conn: &Connection,
    docs_table: &str,
    index_table: &str,
    key: &DocKey,
    tags: &TagSet,
    content: &str,
    hash: &str,
    index_rows: &[(String, String)],
) -> StorageResult<()> {
    let tag_sig = tags.canonical_signature();
    conn.execute(
        &format!(
            "INSERT OR REPLACE INTO {docs_table} (key, tag_sig, tags, hash, content) \
             VALUES (?1, ?2, ?3, ?4, ?5)"
        ),
        params![key.as_str(), tag_sig, tags.signature(), hash, content],
    )?;
    indexer::replace_index_rows(conn, index_table, key, &tag_sig, index_rows)
}

/// Removes document rows first, index rows second; orphaned index rows are
/// unreachable through the document table and get swept by the next write.
fn remove_envelopes(
    conn: &Connection,
    docs_table: &str,
    index_table: &str,
    key: &DocKey,
    tag_sig: Option<&str>,
) -> StorageResult<usize> {
    let removed = match tag_sig {
        Some(sig) => conn.execute(
            &format!("DELETE FROM {docs_table} WHERE key = ?1 AND tag_sig = ?2"),
            params![key.as_str(), sig],
        )?,
        None => conn.execute(
            &format!("DELETE FROM {docs_table} WHERE key = ?1"),
            params![key.as_str()],
        )?,
    };
    indexer::delete_index_rows(conn, index_table, key, tag_sig)?;
    Ok(removed)
}
