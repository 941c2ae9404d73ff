use crate::database::DocumentStore;
use crate::dto::entity_dto::{CreatedResponse, Record};
use crate::models::{validate, EntityKind, Lead};
use crate::repositories::DocumentRepository;
use crate::utils::errors::AppResult;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub struct LeadController {
    repository: DocumentRepository,
}

impl LeadController {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repository: DocumentRepository::new(store),
        }
    }

    pub async fn create(&self, payload: Value) -> AppResult<CreatedResponse> {
        let lead = validate(payload, EntityKind::Lead)?;
        let id = self.repository.insert(&lead).await?;

        info!("📨 Lead creado: {}", id);
        Ok(CreatedResponse { id })
    }

    pub async fn list(&self) -> AppResult<Vec<Record<Lead>>> {
        self.repository.list::<Lead>().await
    }
}
