//! API del concesionario de automóviles
//!
//! Backend CRUD de vehículos y leads sobre una base de datos de documentos.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
