mod cache;
mod osrm;

pub use cache::*;
pub use osrm::*;

use tripwise::{
    oracle::{EstimateOracle, Error, TravelTimeOracle},
    shared::{Coordinate, Duration},
};

/// The routing oracle picked by configuration.
pub enum Backend {
    Osrm(OsrmClient),
    Estimate(EstimateOracle),
}

impl Backend {
    /// Duration and distance of the fastest drive.
    pub async fn route(&self, from: Coordinate, to: Coordinate) -> Result<RouteSummary, Error> {
        match self {
            Backend::Osrm(client) => client.route(from, to).await,
            Backend::Estimate(estimate) => Ok(RouteSummary {
                duration: estimate.estimate(&from, &to),
                distance: from.network_distance(&to),
            }),
        }
    }
}

impl TravelTimeOracle for Backend {
    async fn travel_time(&self, from: Coordinate, to: Coordinate) -> Result<Duration, Error> {
        match self {
            Backend::Osrm(client) => client.travel_time(from, to).await,
            Backend::Estimate(estimate) => estimate.travel_time(from, to).await,
        }
    }
}
