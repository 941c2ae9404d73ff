//! Configuración de base de datos
//!
//! Este módulo maneja la configuración del cliente MongoDB.

use mongodb::options::ClientOptions;
use std::env;
use std::time::Duration;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: String,
    pub app_name: String,
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: "automobile".to_string(),
            app_name: "automobile-api".to_string(),
            max_pool_size: 20,
            connect_timeout: Duration::from_secs(5),
            server_selection_timeout: Duration::from_secs(5),
        }
    }
}

impl DatabaseConfig {
    /// Leer `DATABASE_URL` y `DATABASE_NAME`; la URL es opcional
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty()),
            name: env::var("DATABASE_NAME").unwrap_or(defaults.name.clone()),
            ..defaults
        }
    }

    /// Construir las opciones del cliente a partir de la URL configurada
    pub async fn client_options(&self, url: &str) -> Result<ClientOptions, mongodb::error::Error> {
        let mut options = ClientOptions::parse(url).await?;
        options.app_name = Some(self.app_name.clone());
        options.max_pool_size = Some(self.max_pool_size);
        options.connect_timeout = Some(self.connect_timeout);
        options.server_selection_timeout = Some(self.server_selection_timeout);
        Ok(options)
    }
}
