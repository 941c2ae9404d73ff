//! Módulo de base de datos
//!
//! Almacén genérico de documentos sobre colecciones con nombre. La capa de
//! entidades no conoce la representación nativa de la base de datos.

pub mod connection;
pub mod memory;
pub mod mongo;
pub mod store;

pub use connection::connect;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{parse_document_id, Document, DocumentStore, StoreStatus, StoredDocument};
