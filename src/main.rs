use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use dotenvy::dotenv;

use automobile_api::config::{DatabaseConfig, EnvironmentConfig, StoreBackend};
use automobile_api::database::{self, DocumentStore, MemoryStore};
use automobile_api::routes::create_app;
use automobile_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    // En desarrollo se muestra el origen de cada línea de log
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_file(config.is_development())
        .with_line_number(config.is_development())
        .init();

    info!("🚗 Automobile Company API");
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);

    // Inicializar almacén de documentos; sin base de datos el servidor
    // arranca igualmente en modo degradado
    let store: Arc<dyn DocumentStore> = match config.store_backend {
        StoreBackend::Mongo => Arc::new(database::connect(&DatabaseConfig::from_env()).await),
        StoreBackend::Memory => {
            warn!("⚠️ Usando almacén en memoria, los datos no se persisten");
            Arc::new(MemoryStore::new())
        }
    };

    let app = create_app(AppState::new(store));

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Mensaje de bienvenida");
    info!("   GET  /test - Diagnóstico de base de datos");
    info!("🚗 Endpoints - Vehicles:");
    info!("   POST /api/vehicles - Crear vehículo");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   GET  /api/vehicles/:vehicle_id - Obtener vehículo");
    info!("📨 Endpoints - Leads:");
    info!("   POST /api/leads - Crear lead");
    info!("   GET  /api/leads - Listar leads");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
