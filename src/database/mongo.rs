//! Adaptador MongoDB del almacén de documentos

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Bson};
use mongodb::options::FindOptions;
use mongodb::Database;
use serde_json::Value;
use tracing::debug;

use super::store::{parse_document_id, Document, DocumentStore, StoreStatus, StoredDocument};
use crate::utils::errors::{
    internal_error, not_found_error, truncate_message, unavailable_error, AppError, AppResult,
};

/// Longitud máxima del error mostrado en el diagnóstico
const STATUS_ERROR_LEN: usize = 80;

/// Almacén sobre una base de datos MongoDB.
///
/// Sin `database` el almacén queda en modo degradado: todas las operaciones
/// devuelven `ServiceUnavailable`.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Option<Database>,
    database_name: String,
    url_configured: bool,
}

impl MongoStore {
    pub fn new(database: Database) -> Self {
        Self {
            database_name: database.name().to_string(),
            database: Some(database),
            url_configured: true,
        }
    }

    /// Almacén sin conexión
    pub fn unavailable(database_name: &str, url_configured: bool) -> Self {
        Self {
            database: None,
            database_name: database_name.to_string(),
            url_configured,
        }
    }

    fn database(&self) -> AppResult<&Database> {
        self.database
            .as_ref()
            .ok_or_else(|| unavailable_error("Database not available"))
    }

    fn collection(&self, name: &str) -> AppResult<mongodb::Collection<bson::Document>> {
        Ok(self.database()?.collection::<bson::Document>(name))
    }
}

/// Separar `_id` del resto de campos y pasar a JSON
fn into_stored(mut document: bson::Document) -> AppResult<StoredDocument> {
    let id = match document.remove("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(id)) => id,
        Some(other) => other.to_string(),
        None => return Err(internal_error("Stored document has no _id")),
    };

    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(fields) => Ok(StoredDocument { id, fields }),
        _ => Err(internal_error("Stored document is not an object")),
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: &str, document: Document) -> AppResult<String> {
        let document = bson::to_document(&document)
            .map_err(|e| AppError::Internal(format!("Error serializing document: {}", e)))?;

        let result = self.collection(collection)?.insert_one(document, None).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| internal_error("Inserted id is not an ObjectId"))?;

        debug!("💾 Documento {} insertado en '{}'", id, collection);
        Ok(id)
    }

    async fn list(&self, collection: &str) -> AppResult<Vec<StoredDocument>> {
        // Los ObjectId crecen con el segundo de creación y un contador por proceso:
        // el orden es el de inserción salvo entre procesos distintos en el mismo segundo
        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();
        let cursor = self.collection(collection)?.find(None, options).await?;
        let documents: Vec<bson::Document> = cursor.try_collect().await?;

        debug!("📋 {} documentos leídos de '{}'", documents.len(), collection);
        documents.into_iter().map(into_stored).collect()
    }

    async fn get(&self, collection: &str, id: &str) -> AppResult<StoredDocument> {
        let coll = self.collection(collection)?;
        let oid = parse_document_id(collection, id)?;

        match coll.find_one(doc! { "_id": oid }, None).await? {
            Some(document) => into_stored(document),
            None => Err(not_found_error(collection, id)),
        }
    }

    async fn status(&self) -> StoreStatus {
        let collections = match &self.database {
            Some(database) => database
                .list_collection_names(None)
                .await
                .map_err(|e| truncate_message(&e.to_string(), STATUS_ERROR_LEN)),
            None => Err("Database not available".to_string()),
        };

        StoreStatus {
            url_configured: self.url_configured,
            initialized: self.database.is_some(),
            database_name: self.database.as_ref().map(|_| self.database_name.clone()),
            collections,
        }
    }
}
