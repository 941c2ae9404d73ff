//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde diferentes orígenes.

use tower_http::cors::CorsLayer;

/// Crear middleware de CORS.
///
/// NOTA: política totalmente abierta a propósito (cualquier origen, método y
/// header, con credenciales). Restringirla es tarea de una capa externa.
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
