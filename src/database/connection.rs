//! Configuración de conexión a MongoDB
//!
//! Este módulo abre el cliente de MongoDB a partir de `DatabaseConfig`. Un
//! fallo de conexión nunca detiene el servidor: el almacén queda degradado.

use mongodb::bson::doc;
use mongodb::Client;
use tracing::{error, info, warn};

use super::mongo::MongoStore;
use crate::config::DatabaseConfig;

/// Crear el almacén MongoDB
pub async fn connect(config: &DatabaseConfig) -> MongoStore {
    let Some(url) = config.url.as_deref() else {
        warn!("⚠️ DATABASE_URL no configurada, base de datos no disponible");
        return MongoStore::unavailable(&config.name, false);
    };

    info!("🔗 Conectando a MongoDB: {}", mask_database_url(url));

    let options = match config.client_options(url).await {
        Ok(options) => options,
        Err(e) => {
            error!("❌ DATABASE_URL inválida: {}", e);
            return MongoStore::unavailable(&config.name, true);
        }
    };

    let client = match Client::with_options(options) {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Error creando cliente MongoDB: {}", e);
            return MongoStore::unavailable(&config.name, true);
        }
    };

    let database = client.database(&config.name);

    // El cliente reconecta solo; un ping fallido solo se registra
    match database.run_command(doc! { "ping": 1 }, None).await {
        Ok(_) => info!("✅ MongoDB conectado, base de datos '{}'", config.name),
        Err(e) => warn!("⚠️ MongoDB no responde todavía: {}", e),
    }

    MongoStore::new(database)
}

/// Función helper para enmascarar las credenciales de la URL en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let rest = &url[scheme_end + 3..];

    match rest.rfind('@') {
        Some(at_pos) => format!("{}***:***@{}", &url[..scheme_end + 3], &rest[at_pos + 1..]),
        None => url.to_string(),
    }
}
