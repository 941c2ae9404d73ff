use crate::database::DocumentStore;
use crate::dto::diagnostics_dto::{DiagnosticsResponse, RootResponse};
use std::sync::Arc;

/// Máximo de colecciones listadas en el diagnóstico
const MAX_LISTED_COLLECTIONS: usize = 10;

pub struct DiagnosticsController {
    store: Arc<dyn DocumentStore>,
}

impl DiagnosticsController {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn root() -> RootResponse {
        RootResponse {
            message: "Automobile API running".to_string(),
        }
    }

    /// Estado del backend y de la base de datos. Nunca falla: los errores
    /// se describen dentro de la respuesta.
    pub async fn report(&self) -> DiagnosticsResponse {
        let status = self.store.status().await;

        let mut response = DiagnosticsResponse {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        };

        if !status.initialized {
            if status.url_configured {
                response.database = "⚠️  Available but not initialized".to_string();
            }
            return response;
        }

        response.database = "✅ Available".to_string();
        response.database_url = Some(if status.url_configured { "✅ Set" } else { "❌ Not Set" }.to_string());
        response.database_name = Some(status.database_name.unwrap_or_else(|| "✅ Connected".to_string()));
        response.connection_status = "Connected".to_string();

        match status.collections {
            Ok(collections) => {
                response.collections = collections.into_iter().take(MAX_LISTED_COLLECTIONS).collect();
                response.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                response.database = format!("⚠️  Connected but Error: {}", e);
            }
        }

        response
    }
}
