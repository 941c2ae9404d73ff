//! Almacén de documentos en memoria
//!
//! Misma semántica que `MongoStore` (identificadores `ObjectId`, orden de
//! inserción, `NotFound` para identificadores mal formados). Se usa en los
//! tests y para levantar el servidor sin base de datos.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::store::{parse_document_id, Document, DocumentStore, StoreStatus, StoredDocument};
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<(ObjectId, Document)>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, document: Document) -> AppResult<String> {
        let id = ObjectId::new();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push((id, document));
        debug!("💾 Documento {} insertado en '{}' (memoria)", id, collection);
        Ok(id.to_hex())
    }

    async fn list(&self, collection: &str) -> AppResult<Vec<StoredDocument>> {
        let collections = self.collections.read().await;
        let documents = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| StoredDocument {
                        id: id.to_hex(),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(documents)
    }

    async fn get(&self, collection: &str, id: &str) -> AppResult<StoredDocument> {
        let oid = parse_document_id(collection, id)?;
        let collections = self.collections.read().await;
        collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|(doc_id, _)| *doc_id == oid))
            .map(|(doc_id, fields)| StoredDocument {
                id: doc_id.to_hex(),
                fields: fields.clone(),
            })
            .ok_or_else(|| not_found_error(collection, id))
    }

    async fn status(&self) -> StoreStatus {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        StoreStatus {
            url_configured: false,
            initialized: true,
            database_name: Some("memory".to_string()),
            collections: Ok(names),
        }
    }
}
