use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::controllers::lead_controller::LeadController;
use crate::dto::entity_dto::{CreatedResponse, Record};
use crate::models::Lead;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_lead_router() -> Router<AppState> {
    Router::new().route("/", get(list_leads).post(create_lead))
}

async fn create_lead(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<CreatedResponse>> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let controller = LeadController::new(state.store.clone());
    let response = controller.create(payload).await?;
    Ok(Json(response))
}

async fn list_leads(State(state): State<AppState>) -> AppResult<Json<Vec<Record<Lead>>>> {
    let controller = LeadController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
