use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, info};
use tripwise::{
    itinerary::Itinerary,
    oracle::TravelTimeOracle,
    schedule::{FailurePolicy, Validator, WarningMap},
};

use crate::{
    dto::{ValidateRequest, ValidateResponse, WarningDto},
    error::AppError,
    state::AppState,
};

pub async fn validate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, AppError> {
    let Json(request) = payload.map_err(|err| AppError::MalformedPayload(err.body_text()))?;
    run_pass(&state, &state.oracle, request).await.map(Json)
}

/// One validation pass. Sessions come from `state`, drive times from `oracle`.
async fn run_pass<O: TravelTimeOracle>(
    state: &AppState,
    oracle: &O,
    request: ValidateRequest,
) -> Result<ValidateResponse, AppError> {
    let itinerary = Itinerary::from_records(request.stops)?;

    let session = match request.session.as_deref() {
        Some(key) => {
            let generations = state.generations(key).await;
            let generation = generations.begin();
            Some((generations, generation))
        }
        None => None,
    };

    let policy = request
        .policy
        .map(FailurePolicy::from)
        .unwrap_or(state.failure_policy);
    let validator = Validator::new(oracle).on_failure(policy);

    let days: Vec<u32> = match request.day {
        Some(day) => vec![day],
        None => itinerary.days().into_iter().collect(),
    };
    let mut warnings = WarningMap::new();
    for day in days {
        warnings.extend(validator.validate(itinerary.day(day)).await);
    }

    if let Some((generations, generation)) = &session
        && !generations.is_current(*generation)
    {
        info!(
            "Validation generation {} superseded by {}",
            generation.as_u64(),
            generations.current().as_u64()
        );
        return Err(AppError::Superseded);
    }

    let mut warnings: Vec<WarningDto> = warnings
        .into_iter()
        .map(|(stop_id, warning)| WarningDto::from(stop_id, &warning))
        .collect();
    warnings.sort_by(|a, b| a.stop_id.cmp(&b.stop_id));
    debug!("Answering with {} warnings", warnings.len());

    Ok(ValidateResponse {
        generation: session.map(|(_, generation)| generation.as_u64()),
        warnings,
    })
}
