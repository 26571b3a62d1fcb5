//! Criteria-to-SQL translation.
//!
//! Resolves a tag filter plus an ordered list of criteria into a WHERE
//! clause over the document table, probing the index table with one EXISTS
//! subquery per criterion. Criteria combine with logical AND: a document
//! matches when, for every criterion, at least one of its index entries for
//! that field satisfies the clause.

use crate::{StorageError, StorageResult};
use docset_model::{Criteria, CriteriaOperator, IndexMap, TagSet, TAG_DELIMITER};

/// Rejects criteria naming fields with no matching index declaration.
pub(crate) fn validate_criteria<T: 'static>(
    maps: &[IndexMap<T>],
    criteria: &[Criteria],
) -> StorageResult<()> {
    for criterion in criteria {
        if !maps.iter().any(|m| m.name() == criterion.field) {
            return Err(StorageError::UnknownIndexField(criterion.field.clone()));
        }
    }
    Ok(())
}

/// Builds the WHERE clause and its parameters for a tag filter plus
/// criteria. The clause expects the document table aliased as `d`.
pub(crate) fn build_filter(
    index_table: &str,
    filter: &TagSet,
    criteria: &[Criteria],
) -> (String, Vec<String>) {
    let mut clauses: Vec<String> = Vec::new();
    let mut params: Vec<String> = Vec::new();

    for tag in filter.iter() {
        params.push(format!("%{TAG_DELIMITER}{tag}{TAG_DELIMITER}%"));
        clauses.push(format!("d.tags LIKE ?{}", params.len()));
    }

    for criterion in criteria {
        params.push(criterion.field.clone());
        let field_param = params.len();
        let value_clause = match criterion.operator {
            CriteriaOperator::Eq => {
                params.push(criterion.value.clone());
                format!("i.value = ?{}", params.len())
            }
            CriteriaOperator::Contains => {
                params.push(format!("%{}%", criterion.value));
                format!("i.value LIKE ?{}", params.len())
            }
        };
        clauses.push(format!(
            "EXISTS (SELECT 1 FROM {index_table} i \
             WHERE i.doc_key = d.key AND i.tag_sig = d.tag_sig \
             AND i.field = ?{field_param} AND {value_clause})"
        ));
    }

    let where_clause = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };
    (where_clause, params)
}
