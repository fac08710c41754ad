use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::{ClinicalRecord, PredictionResult};
use crate::server::ApiError;
use crate::server::context::AppState;

pub const LIVENESS_MESSAGE: &str = "Heart Disease Prediction API Running ✅";

#[derive(Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub message: String,
}

pub fn construct_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/predict", post(predict))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

/// Liveness only; does not touch the model.
#[tracing::instrument(name = "GET /")]
async fn home() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: LIVENESS_MESSAGE.to_string(),
    })
}

#[tracing::instrument(name = "POST /predict", skip_all)]
async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<ClinicalRecord>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let Json(record) = payload.map_err(ApiError::validation)?;
    let result = state
        .service
        .predict(&record)
        .map_err(ApiError::prediction)?;
    tracing::debug!(probability = result.probability, risk = %result.risk, "prediction served");
    Ok(Json(result))
}
