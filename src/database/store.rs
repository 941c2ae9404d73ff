//! Contrato del almacén de documentos

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde_json::{Map, Value};

use crate::utils::errors::{not_found_error, AppResult};

/// Campos de un documento, sin identificador
pub type Document = Map<String, Value>;

/// Documento leído del almacén con su identificador opaco
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub fields: Document,
}

/// Estado del almacén para diagnóstico
#[derive(Debug, Clone)]
pub struct StoreStatus {
    /// Hay una cadena de conexión configurada
    pub url_configured: bool,
    /// El cliente se inicializó correctamente
    pub initialized: bool,
    pub database_name: Option<String>,
    /// Colecciones presentes, o el error al consultarlas
    pub collections: Result<Vec<String>, String>,
}

/// Operaciones genéricas sobre colecciones de documentos.
///
/// Si la base de datos no está disponible, todas las operaciones fallan con
/// `AppError::ServiceUnavailable`; nunca devuelven un resultado vacío.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserta un documento y devuelve el identificador generado
    async fn insert(&self, collection: &str, document: Document) -> AppResult<String>;

    /// Todos los documentos de la colección en orden de inserción
    async fn list(&self, collection: &str) -> AppResult<Vec<StoredDocument>>;

    /// Busca por identificador; `NotFound` si no existe o está mal formado
    async fn get(&self, collection: &str, id: &str) -> AppResult<StoredDocument>;

    async fn status(&self) -> StoreStatus;
}

/// Convertir el identificador opaco al `ObjectId` nativo.
///
/// Un identificador mal formado no puede existir, así que se reporta como
/// `NotFound` y no como error interno.
pub fn parse_document_id(collection: &str, id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| not_found_error(collection, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    #[test]
    fn test_parse_document_id() {
        assert!(parse_document_id("vehicle", "000000000000000000000000").is_ok());
        assert!(matches!(
            parse_document_id("vehicle", "not-an-id"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(parse_document_id("vehicle", ""), Err(AppError::NotFound(_))));
    }
}
