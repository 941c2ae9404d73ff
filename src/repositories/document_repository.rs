use crate::database::{DocumentStore, StoredDocument};
use crate::dto::entity_dto::Record;
use crate::models::{Entity, ValidatedEntity};
use crate::utils::errors::{AppError, AppResult};
use serde_json::Value;
use std::sync::Arc;

pub struct DocumentRepository {
    store: Arc<dyn DocumentStore>,
}

impl DocumentRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Guarda la entidad en la colección de su tipo
    pub async fn insert(&self, entity: &ValidatedEntity) -> AppResult<String> {
        let document = entity.to_document()?;
        self.store.insert(entity.kind().collection(), document).await
    }

    pub async fn list<T: Entity>(&self) -> AppResult<Vec<Record<T>>> {
        let documents = self.store.list(T::KIND.collection()).await?;
        documents.into_iter().map(into_record::<T>).collect()
    }

    pub async fn get<T: Entity>(&self, id: &str) -> AppResult<Record<T>> {
        let document = self.store.get(T::KIND.collection(), id).await?;
        into_record::<T>(document)
    }
}

// Un documento que ya no cumple el esquema es un error interno
fn into_record<T: Entity>(document: StoredDocument) -> AppResult<Record<T>> {
    let StoredDocument { id, fields } = document;
    let entity = serde_json::from_value::<T>(Value::Object(fields)).map_err(|e| {
        AppError::Internal(format!(
            "Stored {} '{}' does not match its schema: {}",
            T::KIND.collection(),
            id,
            e
        ))
    })?;
    Ok(Record { id, entity })
}
