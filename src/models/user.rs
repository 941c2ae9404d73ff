//! Modelo de User
//!
//! Colección: "user".

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{default_true, required, whole_number, Entity, EntityKind};
use crate::utils::errors::AppResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub address: String,
    pub age: Option<i32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Request para crear un nuevo usuario
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(required)]
    pub name: Option<String>,

    #[validate(required, email)]
    pub email: Option<String>,

    #[validate(required)]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "whole_number")]
    #[validate(range(min = 0, max = 120))]
    pub age: Option<i32>,

    pub is_active: Option<bool>,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    const FIELDS: &'static [&'static str] = &["name", "email", "address", "age", "is_active"];

    type Request = CreateUserRequest;

    fn from_request(request: CreateUserRequest) -> AppResult<Self> {
        Ok(Self {
            name: required("name", request.name)?,
            email: required("email", request.email)?,
            address: required("address", request.address)?,
            age: request.age,
            is_active: request.is_active.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::validate_as;
    use serde_json::json;

    #[test]
    fn test_age_bounds() {
        let base = json!({ "name": "Ana", "email": "ana@example.com", "address": "Calle 1" });
        let user = validate_as::<User>(base.clone()).unwrap();
        assert!(user.is_active);
        assert_eq!(user.age, None);

        for (age, ok) in [(0, true), (120, true), (-1, false), (121, false)] {
            let mut payload = base.clone();
            payload["age"] = json!(age);
            assert_eq!(validate_as::<User>(payload).is_ok(), ok, "age {}", age);
        }

        let mut payload = base;
        payload["age"] = json!(30.0);
        assert_eq!(validate_as::<User>(payload).unwrap().age, Some(30));
    }

    #[test]
    fn test_address_required() {
        assert!(validate_as::<User>(json!({ "name": "Ana", "email": "ana@example.com" })).is_err());
    }
}
