//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mongodb::error::ErrorKind;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Longitud máxima de un mensaje de error interno expuesto al cliente
pub const MAX_ERROR_MESSAGE_LEN: usize = 200;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(mongodb::error::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<mongodb::error::Error> for AppError {
    /// Los fallos de selección de servidor o de red significan que la base
    /// de datos no es alcanzable; el resto son errores de base de datos.
    fn from(e: mongodb::error::Error) -> Self {
        let unreachable = matches!(*e.kind, ErrorKind::ServerSelection { .. } | ErrorKind::Io(_));
        if unreachable {
            AppError::ServiceUnavailable(truncate_message(&e.to_string(), MAX_ERROR_MESSAGE_LEN))
        } else {
            AppError::Database(e)
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl AppError {
    /// Código HTTP asociado al error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match self {
            AppError::Database(e) => {
                error!("❌ Database error: {}", e);
                ErrorResponse {
                    error: "Database Error".to_string(),
                    message: "An error occurred while accessing the database".to_string(),
                    details: Some(json!({
                        "db_error": truncate_message(&e.to_string(), MAX_ERROR_MESSAGE_LEN)
                    })),
                    code: Some("DB_ERROR".to_string()),
                }
            }

            AppError::Validation(e) => {
                warn!("⚠️ Validation error: {}", e);
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: "The provided data is invalid".to_string(),
                    details: Some(json!(e)),
                    code: Some("VALIDATION_ERROR".to_string()),
                }
            }

            AppError::NotFound(msg) => {
                warn!("🔍 Resource not found: {}", msg);
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_FOUND".to_string()),
                }
            }

            AppError::BadRequest(msg) => {
                warn!("⚠️ Bad request: {}", msg);
                ErrorResponse {
                    error: "Bad Request".to_string(),
                    message: truncate_message(&msg, MAX_ERROR_MESSAGE_LEN),
                    details: None,
                    code: Some("BAD_REQUEST".to_string()),
                }
            }

            AppError::Internal(msg) => {
                error!("❌ Internal error: {}", msg);
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    message: "An unexpected error occurred".to_string(),
                    details: Some(json!({
                        "internal_error": truncate_message(&msg, MAX_ERROR_MESSAGE_LEN)
                    })),
                    code: Some("INTERNAL_ERROR".to_string()),
                }
            }

            AppError::ServiceUnavailable(msg) => {
                error!("🔌 Service unavailable: {}", msg);
                ErrorResponse {
                    error: "Service Unavailable".to_string(),
                    message: truncate_message(&msg, MAX_ERROR_MESSAGE_LEN),
                    details: None,
                    code: Some("SERVICE_UNAVAILABLE".to_string()),
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Recorta un mensaje a `max` caracteres sin partir caracteres UTF-8
pub fn truncate_message(message: &str, max: usize) -> String {
    match message.char_indices().nth(max) {
        Some((idx, _)) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: impl Into<String>) -> AppError {
    use validator::ValidationError;

    let message = message.into();
    let mut error = ValidationError::new("invalid");
    error.add_param("field".into(), &field);
    error.message = Some(message.into());

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de servicio no disponible
pub fn unavailable_error(reason: &str) -> AppError {
    AppError::ServiceUnavailable(reason.to_string())
}

/// Función helper para crear errores internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(validation_error("year", "out of range").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(not_found_error("vehicle", "abc").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(unavailable_error("down").status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(internal_error("boom").status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_truncate_message() {
        assert_eq!(truncate_message("short", 80), "short");
        assert_eq!(truncate_message(&"a".repeat(300), 200).len(), 200);
        // No debe partir caracteres multibyte
        assert_eq!(truncate_message("⚠️ñandú", 3), "⚠️ñ");
    }

    #[test]
    fn test_validation_error_lists_field() {
        match validation_error("email", "invalid email") {
            AppError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("email"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_internal_response_is_truncated() {
        let response = internal_error(&"x".repeat(1000)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
