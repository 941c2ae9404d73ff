use serde::{Deserialize, Serialize};

// Response de creación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

// Entidad guardada + identificador del almacén bajo la clave `id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: String,
    #[serde(flatten)]
    pub entity: T,
}
