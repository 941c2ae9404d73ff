//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su request de creación.
//! Colección: "vehicle".

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{default_true, required, whole_number, Entity, EntityKind};
use crate::utils::errors::AppResult;

/// Vehículo validado tal como se guarda en la colección
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub mileage: Option<i64>,
    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub color: Option<String>,
    pub vin: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(required)]
    pub make: Option<String>,

    #[validate(required)]
    pub model: Option<String>,

    #[serde(default, deserialize_with = "whole_number")]
    #[validate(required, range(min = 1950, max = 2100))]
    pub year: Option<i32>,

    #[validate(required, range(min = 0.0))]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "whole_number")]
    #[validate(range(min = 0))]
    pub mileage: Option<i64>,

    pub body_type: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub color: Option<String>,
    pub vin: Option<String>,
    pub images: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub description: Option<String>,
    pub in_stock: Option<bool>,
}

impl Entity for Vehicle {
    const KIND: EntityKind = EntityKind::Vehicle;

    const FIELDS: &'static [&'static str] = &[
        "make", "model", "year", "price", "mileage", "body_type", "fuel_type",
        "transmission", "color", "vin", "images", "features", "description", "in_stock",
    ];

    type Request = CreateVehicleRequest;

    fn from_request(request: CreateVehicleRequest) -> AppResult<Self> {
        Ok(Self {
            make: required("make", request.make)?,
            model: required("model", request.model)?,
            year: required("year", request.year)?,
            price: required("price", request.price)?,
            mileage: request.mileage,
            body_type: request.body_type,
            fuel_type: request.fuel_type,
            transmission: request.transmission,
            color: request.color,
            vin: request.vin,
            images: request.images.unwrap_or_default(),
            features: request.features.unwrap_or_default(),
            description: request.description,
            in_stock: request.in_stock.unwrap_or(true),
        })
    }
}
