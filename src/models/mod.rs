//! Modelos del sistema
//!
//! Este módulo contiene las entidades del concesionario y su validación.

pub mod lead;
pub mod product;
pub mod schema;
pub mod user;
pub mod vehicle;

pub use lead::Lead;
pub use product::Product;
pub use schema::{validate, validate_as, Entity, EntityKind, ValidatedEntity};
pub use user::User;
pub use vehicle::Vehicle;
