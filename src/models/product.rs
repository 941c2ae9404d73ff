//! Modelo de Product
//!
//! Colección: "product".

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{default_true, required, Entity, EntityKind};
use crate::utils::errors::AppResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(required)]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(required, range(min = 0.0))]
    pub price: Option<f64>,

    #[validate(required)]
    pub category: Option<String>,

    pub in_stock: Option<bool>,
}

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;

    const FIELDS: &'static [&'static str] =
        &["title", "description", "price", "category", "in_stock"];

    type Request = CreateProductRequest;

    fn from_request(request: CreateProductRequest) -> AppResult<Self> {
        Ok(Self {
            title: required("title", request.title)?,
            description: request.description,
            price: required("price", request.price)?,
            category: required("category", request.category)?,
            in_stock: request.in_stock.unwrap_or(true),
        })
    }
}
