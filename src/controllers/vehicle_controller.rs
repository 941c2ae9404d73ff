use crate::database::DocumentStore;
use crate::dto::entity_dto::{CreatedResponse, Record};
use crate::models::{validate, EntityKind, Vehicle};
use crate::repositories::DocumentRepository;
use crate::utils::errors::{AppError, AppResult};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub struct VehicleController {
    repository: DocumentRepository,
}

impl VehicleController {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repository: DocumentRepository::new(store),
        }
    }

    pub async fn create(&self, payload: Value) -> AppResult<CreatedResponse> {
        // Validar antes de tocar la base de datos
        let vehicle = validate(payload, EntityKind::Vehicle)?;
        let id = self.repository.insert(&vehicle).await?;

        info!("🚗 Vehículo creado: {}", id);
        Ok(CreatedResponse { id })
    }

    pub async fn list(&self) -> AppResult<Vec<Record<Vehicle>>> {
        self.repository.list::<Vehicle>().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Record<Vehicle>> {
        self.repository.get::<Vehicle>(id).await.map_err(|e| match e {
            AppError::NotFound(_) => AppError::NotFound("Vehicle not found".to_string()),
            other => other,
        })
    }
}
