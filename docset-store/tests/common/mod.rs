//! Shared fixtures for document store tests.

#![allow(dead_code)]

use docset_model::{IndexMap, TagSet};
use docset_store::{DocStore, StorageOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Product-shaped test document with a multi-valued sku collection, an
/// optional date, and an open extension map for ad hoc properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub group: String,
    pub position: i32,
    pub date: Option<String>,
    pub skus: Vec<Sku>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    pub sku: String,
    pub ean: String,
}

/// Builds a product with one sku per entry of `skus`.
pub fn product(name: &str, group: &str, skus: &[&str]) -> Product {
    Product {
        name: name.to_string(),
        group: group.to_string(),
        position: 0,
        date: None,
        skus: skus
            .iter()
            .map(|sku| Sku {
                sku: (*sku).to_string(),
                ean: format!("ean-{sku}"),
            })
            .collect(),
        extra: BTreeMap::new(),
    }
}

/// The index declarations every store test runs with: two single-valued
/// fields, one multi-valued field, one optional field.
pub fn index_maps() -> Vec<IndexMap<Product>> {
    vec![
        IndexMap::new("name", |p: &Product| Some(p.name.clone())),
        IndexMap::new("group", |p: &Product| Some(p.group.clone())),
        IndexMap::multi("sku", |p: &Product| {
            p.skus.iter().map(|s| s.sku.clone()).collect()
        }),
        IndexMap::new("date", |p: &Product| p.date.clone()),
    ]
}

/// Opens an in-memory store with the standard index declarations.
pub fn open_store() -> DocStore<Product> {
    DocStore::open(StorageOptions::new("products"), index_maps()).unwrap()
}

pub fn en_us() -> TagSet {
    TagSet::from(["en-US"])
}

pub fn en_gb() -> TagSet {
    TagSet::from(["en-GB"])
}
