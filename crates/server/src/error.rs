use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tripwise::{itinerary, oracle, schedule};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    InvalidStop(#[from] itinerary::Error),

    #[error(transparent)]
    UnknownStop(#[from] schedule::Error),

    #[error("A newer validation for this session superseded this one")]
    Superseded,

    #[error(transparent)]
    Oracle(#[from] oracle::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload(_) | AppError::InvalidStop(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownStop(_) => StatusCode::NOT_FOUND,
            AppError::Superseded => StatusCode::CONFLICT,
            AppError::Oracle(_) => StatusCode::BAD_GATEWAY,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
