use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::inference::PredictionError;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Body did not parse into a record; nothing downstream ran.
    pub fn validation(rejection: JsonRejection) -> Self {
        let detail = rejection.body_text();
        tracing::warn!("Rejected request body: {}", detail);
        Self::new(rejection.status(), detail)
    }

    pub fn prediction(err: PredictionError) -> Self {
        tracing::error!("Prediction error: {}", err);
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Prediction error: {err}"),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                detail: &self.detail,
            }),
        )
            .into_response()
    }
}
