//! Esquema de entidades y validación
//!
//! Cada entidad tiene un request (todos los campos opcionales a nivel de tipo,
//! restricciones declaradas con `validator`) y una entidad validada con los
//! valores por defecto ya aplicados.

use serde::{
    de::{self, DeserializeOwned},
    Deserialize, Deserializer, Serialize,
};
use serde_json::{Map, Number, Value};
use validator::{Validate, ValidationError, ValidationErrors};

use super::{lead::Lead, product::Product, user::User, vehicle::Vehicle};
use crate::database::Document;
use crate::utils::errors::{internal_error, validation_error, AppResult};

/// Tipos de entidad; cada uno vive en su propia colección
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Vehicle,
    Lead,
    User,
    Product,
}

impl EntityKind {
    /// Nombre de la colección (nombre de la entidad en minúsculas)
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Vehicle => "vehicle",
            EntityKind::Lead => "lead",
            EntityKind::User => "user",
            EntityKind::Product => "product",
        }
    }
}

/// Entidad persistible
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Nombres de los campos tal como llegan en el JSON
    const FIELDS: &'static [&'static str];

    type Request: DeserializeOwned + Validate;

    /// Construir la entidad a partir de un request ya validado
    fn from_request(request: Self::Request) -> AppResult<Self>;
}

/// Resultado de `validate`
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedEntity {
    Vehicle(Vehicle),
    Lead(Lead),
    User(User),
    Product(Product),
}

impl ValidatedEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            ValidatedEntity::Vehicle(_) => EntityKind::Vehicle,
            ValidatedEntity::Lead(_) => EntityKind::Lead,
            ValidatedEntity::User(_) => EntityKind::User,
            ValidatedEntity::Product(_) => EntityKind::Product,
        }
    }

    /// Serializar los campos validados como documento
    pub fn to_document(&self) -> AppResult<Document> {
        let value = match self {
            ValidatedEntity::Vehicle(entity) => serde_json::to_value(entity),
            ValidatedEntity::Lead(entity) => serde_json::to_value(entity),
            ValidatedEntity::User(entity) => serde_json::to_value(entity),
            ValidatedEntity::Product(entity) => serde_json::to_value(entity),
        }
        .map_err(|e| internal_error(&format!("Error serializing entity: {}", e)))?;

        match value {
            Value::Object(document) => Ok(document),
            _ => Err(internal_error("Entity did not serialize to an object")),
        }
    }
}

/// Validar un payload JSON como la entidad indicada
pub fn validate(payload: Value, kind: EntityKind) -> AppResult<ValidatedEntity> {
    match kind {
        EntityKind::Vehicle => validate_as::<Vehicle>(payload).map(ValidatedEntity::Vehicle),
        EntityKind::Lead => validate_as::<Lead>(payload).map(ValidatedEntity::Lead),
        EntityKind::User => validate_as::<User>(payload).map(ValidatedEntity::User),
        EntityKind::Product => validate_as::<Product>(payload).map(ValidatedEntity::Product),
    }
}

/// Versión tipada de `validate`
///
/// Cada campo se deserializa por separado para que los errores de tipo se
/// reporten bajo su propio nombre junto con los de `validator`.
pub fn validate_as<T: Entity>(payload: Value) -> AppResult<T> {
    let Value::Object(fields) = payload else {
        return Err(validation_error("payload", "Expected a JSON object"));
    };

    let mut type_errors = Vec::new();
    let mut accepted = Map::new();
    for (key, value) in fields {
        let single = Value::Object(Map::from_iter([(key.clone(), value.clone())]));
        match serde_json::from_value::<T::Request>(single) {
            Ok(_) => {
                accepted.insert(key, value);
            }
            Err(e) => type_errors.push((field_name::<T>(&key), e.to_string())),
        }
    }

    let request: T::Request = serde_json::from_value(Value::Object(accepted))
        .map_err(|e| validation_error("payload", e.to_string()))?;

    let mut errors = match request.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };
    for (field, message) in type_errors {
        // El campo descartado no debe figurar además como "required"
        errors.errors_mut().remove(field);
        let mut error = ValidationError::new("type");
        error.message = Some(message.into());
        errors.add(field, error);
    }
    if !errors.is_empty() {
        return Err(errors.into());
    }

    T::from_request(request)
}

fn field_name<T: Entity>(key: &str) -> &'static str {
    T::FIELDS
        .iter()
        .copied()
        .find(|field| *field == key)
        .unwrap_or("payload")
}

/// Entero opcional que también acepta números enteros escritos como float (`2022.0`)
pub(crate) fn whole_number<'de, D, N>(deserializer: D) -> Result<Option<N>, D::Error>
where
    D: Deserializer<'de>,
    N: TryFrom<i64>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let value = match (number.as_i64(), number.as_f64()) {
        (Some(value), _) => value,
        (None, Some(value))
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            value as i64
        }
        _ => {
            return Err(de::Error::custom(format!(
                "invalid value: {}, expected an integer",
                number
            )))
        }
    };

    N::try_from(value)
        .map(Some)
        .map_err(|_| de::Error::custom(format!("integer {} out of range", value)))
}

/// Campo obligatorio de un request ya validado
pub(crate) fn required<T>(field: &'static str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| validation_error(field, "This field is required"))
}

pub(crate) fn default_true() -> bool {
    true
}
