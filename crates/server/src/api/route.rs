use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
};
use tripwise::shared::Coordinate;

use crate::{dto::RouteDto, error::AppError, state::AppState};

/// Duration and distance of the drive between two `lat,lng` points.
pub async fn route(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<RouteDto>, AppError> {
    let from = coordinate_param(&params, "from")?;
    let to = coordinate_param(&params, "to")?;
    let summary = state.oracle.inner().route(from, to).await?;
    Ok(Json(RouteDto::from(summary)))
}

fn coordinate_param(params: &HashMap<String, String>, key: &str) -> Result<Coordinate, AppError> {
    let value = params
        .get(key)
        .ok_or_else(|| AppError::MalformedPayload(format!("missing {key}")))?;
    coordinate_from_str(value)
        .ok_or_else(|| AppError::MalformedPayload(format!("{key} must be lat,lng, got {value}")))
}

fn coordinate_from_str(str: &str) -> Option<Coordinate> {
    let (latitude, longitude) = str.split_once(',')?;
    let coordinate = Coordinate {
        latitude: latitude.trim().parse().ok()?,
        longitude: longitude.trim().parse().ok()?,
    };
    coordinate.is_valid().then_some(coordinate)
}
