use axum::{Json, extract::rejection::JsonRejection};
use tracing::debug;
use tripwise::{
    itinerary::Itinerary,
    schedule::{self, move_adjacent},
};

use crate::{
    dto::{ReorderRequest, ReorderResponse},
    error::AppError,
};

/// Swaps a stop with its neighbour within its day. The caller persists the
/// returned updates, nothing is stored here.
pub async fn reorder(
    payload: Result<Json<ReorderRequest>, JsonRejection>,
) -> Result<Json<ReorderResponse>, AppError> {
    let Json(request) = payload.map_err(|err| AppError::MalformedPayload(err.body_text()))?;
    let itinerary = Itinerary::from_records(request.stops)?;
    let day = itinerary
        .get(&request.stop_id)
        .map(|stop| stop.day)
        .ok_or_else(|| schedule::Error::UnknownStop(request.stop_id.clone()))?;

    let moved = move_adjacent(itinerary.day(day), &request.stop_id, request.direction)?;
    let updates = moved.updates();
    debug!(
        "Moving {} {:?} gives {} updates",
        request.stop_id,
        request.direction,
        updates.len()
    );
    Ok(Json(ReorderResponse { updates }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripwise::itinerary::StopId;

    fn request(stop_id: u64, direction: &str) -> Result<Json<ReorderRequest>, JsonRejection> {
        let json = format!(
            r#"{{
                "stop_id": {stop_id},
                "direction": "{direction}",
                "stops": [
                    {{"id": 1, "day_number": 1, "order": 1}},
                    {{"id": 2, "day_number": 1, "order": 2}},
                    {{"id": 3, "day_number": 2, "order": 1}}
                ]
            }}"#
        );
        Ok(Json(serde_json::from_str(&json).unwrap()))
    }

    #[tokio::test]
    async fn swaps_within_the_day() {
        let Json(response) = reorder(request(2, "up")).await.unwrap();
        let updates: Vec<_> = response
            .updates
            .iter()
            .map(|update| (update.id.clone(), update.order))
            .collect();
        assert_eq!(
            updates,
            vec![(StopId::from(2), 1), (StopId::from(1), 2)]
        );
    }

    #[tokio::test]
    async fn other_days_do_not_count_as_neighbours() {
        let Json(response) = reorder(request(2, "down")).await.unwrap();
        assert!(response.updates.is_empty());
        let Json(response) = reorder(request(3, "up")).await.unwrap();
        assert!(response.updates.is_empty());
    }

    #[tokio::test]
    async fn unknown_stop_is_not_found() {
        let result = reorder(request(9, "up")).await;
        assert!(matches!(result, Err(AppError::UnknownStop(_))));
    }
}
