use serde::Serialize;

use crate::oracle::RouteSummary;

#[derive(Debug, Clone, Serialize)]
pub struct RouteDto {
    pub duration_seconds: u32,
    pub distance_meters: f64,
    pub duration_text: String,
    pub distance_text: String,
}

impl RouteDto {
    pub fn from(route: RouteSummary) -> Self {
        Self {
            duration_seconds: route.duration.as_seconds(),
            distance_meters: route.distance.as_meters(),
            duration_text: route.duration.to_string(),
            distance_text: route.distance.to_string(),
        }
    }
}
