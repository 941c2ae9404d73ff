//! Modelo de Lead
//!
//! Colección: "lead". `vehicle_id` es una referencia libre: no se comprueba
//! que el vehículo exista.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{required, Entity, EntityKind};
use crate::utils::errors::AppResult;

/// Tipo de lead por defecto
pub const DEFAULT_LEAD_TYPE: &str = "test_drive";

fn default_lead_type() -> String {
    DEFAULT_LEAD_TYPE.to_string()
}

/// Lead validado tal como se guarda en la colección
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub vehicle_id: Option<String>,
    pub message: Option<String>,
    /// test_drive | inquiry | service (texto libre)
    #[serde(rename = "type", default = "default_lead_type")]
    pub lead_type: String,
}

/// Request para crear un lead
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateLeadRequest {
    #[validate(required)]
    pub name: Option<String>,

    #[validate(required, email)]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub vehicle_id: Option<String>,
    pub message: Option<String>,

    #[serde(rename = "type")]
    pub lead_type: Option<String>,
}

impl Entity for Lead {
    const KIND: EntityKind = EntityKind::Lead;

    const FIELDS: &'static [&'static str] =
        &["name", "email", "phone", "vehicle_id", "message", "type"];

    type Request = CreateLeadRequest;

    fn from_request(request: CreateLeadRequest) -> AppResult<Self> {
        Ok(Self {
            name: required("name", request.name)?,
            email: required("email", request.email)?,
            phone: request.phone,
            vehicle_id: request.vehicle_id,
            message: request.message,
            lead_type: request.lead_type.unwrap_or_else(default_lead_type),
        })
    }
}
