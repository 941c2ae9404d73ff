use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

pub mod diagnostics_routes;
pub mod lead_routes;
pub mod vehicle_routes;

/// Router completo de la API
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(diagnostics_routes::create_diagnostics_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/leads", lead_routes::create_lead_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_middleware()),
        )
        .with_state(state)
}
