use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::diagnostics_controller::DiagnosticsController;
use crate::dto::diagnostics_dto::{DiagnosticsResponse, RootResponse};
use crate::state::AppState;

pub fn create_diagnostics_router() -> Router<AppState> {
    Router::new()
        .route("/", get(read_root))
        .route("/test", get(test_database))
}

async fn read_root() -> Json<RootResponse> {
    Json(DiagnosticsController::root())
}

/// Endpoint de diagnóstico de la base de datos
async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let controller = DiagnosticsController::new(state.store.clone());
    Json(controller.report().await)
}
