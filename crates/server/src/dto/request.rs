use serde::Deserialize;
use tripwise::{
    itinerary::{ItineraryRecord, StopId},
    schedule::{Direction, FailurePolicy},
};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyDto {
    AssumeFeasible,
    Report,
}

impl From<PolicyDto> for FailurePolicy {
    fn from(value: PolicyDto) -> Self {
        match value {
            PolicyDto::AssumeFeasible => FailurePolicy::AssumeFeasible,
            PolicyDto::Report => FailurePolicy::Report,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub stops: Vec<ItineraryRecord>,
    /// Validate a single day, every day when absent.
    #[serde(default)]
    pub day: Option<u32>,
    /// Requests sharing a session supersede each other.
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub policy: Option<PolicyDto>,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub stops: Vec<ItineraryRecord>,
    pub stop_id: StopId,
    pub direction: Direction,
}
