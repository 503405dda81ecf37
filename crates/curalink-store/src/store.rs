//! Document store contract and filter model.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// A single filter clause applied to one document field.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Field equals the given value.
    Eq(Value),
    /// Field is an array containing the given string.
    Contains(String),
}

/// A field → predicate map. Not a query language: equality and
/// array-membership only, combined with AND.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    clauses: BTreeMap<String, Predicate>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.clauses.insert(field.to_string(), Predicate::Eq(value.into()));
        self
    }

    pub fn contains(mut self, field: &str, value: impl Into<String>) -> Self {
        self.clauses.insert(field.to_string(), Predicate::Contains(value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether a document satisfies every clause. An empty filter matches
    /// every document.
    pub fn matches(&self, doc: &Value) -> bool {
        self.clauses.iter().all(|(field, pred)| {
            let field_value = doc.get(field);
            match pred {
                Predicate::Eq(expected) => field_value == Some(expected),
                Predicate::Contains(member) => field_value
                    .and_then(Value::as_array)
                    .map(|arr| arr.iter().any(|v| v.as_str() == Some(member)))
                    .unwrap_or(false),
            }
        })
    }
}

/// Insert / filtered-read contract over a document collection.
///
/// The handle is owned by the process entry point and injected into every
/// caller, so tests can substitute [`crate::MemoryStore`] directly.
/// Insert-only lifecycle: no update or delete operations exist.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document, returning the generated opaque id.
    async fn insert(&self, collection: &str, document: Value) -> Result<String>;

    /// Read documents matching `filter`, in store-native (insertion) order,
    /// bounded by `limit`. An unknown collection yields an empty list.
    async fn find(&self, collection: &str, filter: &Filter, limit: usize) -> Result<Vec<Value>>;

    /// Names of the collections currently holding documents.
    async fn collections(&self) -> Result<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_filter_matches_everything() {
        let f = Filter::new();
        assert!(f.matches(&json!({"a": 1})));
        assert!(f.matches(&json!({})));
    }

    #[test]
    fn test_eq_clause() {
        let f = Filter::new().eq("category", "oncology");
        assert!(f.matches(&json!({"category": "oncology", "title": "t"})));
        assert!(!f.matches(&json!({"category": "cardiology"})));
        assert!(!f.matches(&json!({"title": "no category"})));
    }

    #[test]
    fn test_contains_clause() {
        let f = Filter::new().contains("tags", "trials");
        assert!(f.matches(&json!({"tags": ["trials", "help"]})));
        assert!(!f.matches(&json!({"tags": ["help"]})));
        // non-array field never matches a membership clause
        assert!(!f.matches(&json!({"tags": "trials"})));
        assert!(!f.matches(&json!({})));
    }

    #[test]
    fn test_clauses_combine_with_and() {
        let f = Filter::new().eq("category", "oncology").contains("tags", "kras");
        assert!(f.matches(&json!({"category": "oncology", "tags": ["kras"]})));
        assert!(!f.matches(&json!({"category": "oncology", "tags": ["egfr"]})));
        assert!(!f.matches(&json!({"category": "cardiology", "tags": ["kras"]})));
    }
}
