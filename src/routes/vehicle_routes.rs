use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::entity_dto::{CreatedResponse, Record};
use crate::models::Vehicle;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/:vehicle_id", get(get_vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<CreatedResponse>> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let controller = VehicleController::new(state.store.clone());
    let response = controller.create(payload).await?;
    Ok(Json(response))
}

async fn list_vehicles(State(state): State<AppState>) -> AppResult<Json<Vec<Record<Vehicle>>>> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> AppResult<Json<Record<Vehicle>>> {
    let controller = VehicleController::new(state.store.clone());
    let response = controller.get_by_id(&vehicle_id).await?;
    Ok(Json(response))
}
