//! In-memory document store.
//!
//! Backs the process when no external store is configured and substitutes
//! for one in tests. Documents are held per collection in insertion order;
//! ids are uuid v4 strings assigned on insert.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::store::{DocumentStore, Filter};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, mut document: Value) -> Result<String> {
        let obj = document.as_object_mut().ok_or_else(|| {
            StoreError::InvalidDocument("document must be a JSON object".to_string())
        })?;

        let id = Uuid::new_v4().to_string();
        obj.insert("_id".to_string(), Value::String(id.clone()));
        obj.insert(
            "created_at".to_string(),
            Value::String(chrono::Utc::now().to_rfc3339()),
        );

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        debug!(collection, id = %id, "document inserted");
        Ok(id)
    }

    async fn find(&self, collection: &str, filter: &Filter, limit: usize) -> Result<Vec<Value>> {
        let collections = self.collections.read().await;
        let docs = match collections.get(collection) {
            Some(docs) => docs,
            None => return Ok(Vec::new()),
        };

        Ok(docs
            .iter()
            .filter(|doc| filter.matches(doc))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn collections(&self) -> Result<Vec<String>> {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let store = MemoryStore::new();
        let id = store
            .insert("patient", json!({"name": "Ada", "email": "ada@example.org"}))
            .await
            .unwrap();
        assert!(!id.is_empty());

        let docs = store.find("patient", &Filter::new(), 10).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["_id"].as_str(), Some(id.as_str()));
        assert!(docs[0]["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_insert_rejects_non_object() {
        let store = MemoryStore::new();
        let err = store.insert("patient", json!([1, 2, 3])).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidDocument(_)));
    }

    #[tokio::test]
    async fn test_find_unknown_collection_is_empty_not_error() {
        let store = MemoryStore::new();
        let docs = store.find("favorite", &Filter::new(), 10).await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_find_applies_filter_and_limit_in_insertion_order() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store
                .insert(
                    "forumquestion",
                    json!({"title": format!("q{}", i), "category": "oncology", "tags": ["kras"]}),
                )
                .await
                .unwrap();
        }
        store
            .insert("forumquestion", json!({"title": "other", "category": "cardiology"}))
            .await
            .unwrap();

        let filter = Filter::new().eq("category", "oncology").contains("tags", "kras");
        let docs = store.find("forumquestion", &filter, 3).await.unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0]["title"], "q0");
        assert_eq!(docs[2]["title"], "q2");
    }

    #[tokio::test]
    async fn test_collections_lists_sorted_names() {
        let store = MemoryStore::new();
        store.insert("researcher", json!({"name": "n"})).await.unwrap();
        store.insert("patient", json!({"name": "n"})).await.unwrap();
        assert_eq!(
            store.collections().await.unwrap(),
            vec!["patient".to_string(), "researcher".to_string()]
        );
    }
}
