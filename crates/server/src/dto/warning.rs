use serde::Serialize;
use tripwise::{
    itinerary::StopId,
    schedule::{OrderUpdate, ValidationWarning},
};

#[derive(Debug, Clone, Serialize)]
pub struct WarningDto {
    pub stop_id: StopId,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap_minutes: Option<u32>,
    pub message: String,
}

impl WarningDto {
    pub fn from(stop_id: StopId, warning: &ValidationWarning) -> Self {
        let (required, available, overlap) = match warning {
            ValidationWarning::Overlap { overlap } => (None, None, Some(overlap.as_minutes())),
            ValidationWarning::Infeasible {
                required,
                available,
            } => (
                Some(required.as_minutes()),
                Some(available.as_minutes()),
                None,
            ),
            ValidationWarning::Unknown { available } => {
                (None, Some(available.as_minutes()), None)
            }
        };
        Self {
            stop_id,
            kind: warning.kind().as_str(),
            required_minutes: required,
            available_minutes: available,
            overlap_minutes: overlap,
            message: warning.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<u64>,
    pub warnings: Vec<WarningDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReorderResponse {
    pub updates: Vec<OrderUpdate>,
}
