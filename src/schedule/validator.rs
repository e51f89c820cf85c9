use std::collections::{HashMap, HashSet};

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::{
    itinerary::{Stop, StopId, traversal_order},
    oracle::TravelTimeOracle,
    schedule::{ValidationWarning, WarningMap},
    shared::{
        geo::{Coordinate, CoordinateKey},
        time::Duration,
    },
};

/// What to do with a pair whose drive could not be looked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Count the drive as zero minutes, so nothing is flagged.
    #[default]
    AssumeFeasible,
    /// Flag the pair with [`ValidationWarning::Unknown`].
    Report,
}

/// A pair that needs the oracle to be settled.
struct PendingLeg {
    stop: StopId,
    available: Duration,
    route: (Coordinate, Coordinate),
}

type RouteKey = (CoordinateKey, CoordinateKey);

/// Checks one day of stops for overlapping visits and for gaps too short
/// to drive between consecutive stops.
pub struct Validator<'a, O> {
    oracle: &'a O,
    policy: FailurePolicy,
}

impl<'a, O: TravelTimeOracle> Validator<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self {
            oracle,
            policy: FailurePolicy::default(),
        }
    }

    pub fn on_failure(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// `stops` must all belong to the same day, the caller filters.
    /// Never fails, an oracle failure is resolved by the [`FailurePolicy`].
    pub async fn validate<'s, I>(&self, stops: I) -> WarningMap
    where
        I: IntoIterator<Item = &'s Stop>,
    {
        let sorted = traversal_order(stops);
        let mut warnings = WarningMap::new();
        let mut pending: Vec<PendingLeg> = Vec::new();

        for pair in sorted.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            let (Some(departure), Some(start)) = (current.departure(), next.time) else {
                continue;
            };

            let gap = departure.seconds_until(start);
            if gap < 0 {
                let overlap = Duration::from_seconds(gap.unsigned_abs() as u32);
                warnings.insert(next.id.clone(), ValidationWarning::Overlap { overlap });
                continue;
            }

            let (Some(from), Some(to)) = (current.coordinate, next.coordinate) else {
                debug!(
                    "Skipping drive check from {} to {}, missing coordinates",
                    current.id, next.id
                );
                continue;
            };

            pending.push(PendingLeg {
                stop: next.id.clone(),
                available: start - departure,
                route: (from, to),
            });
        }

        let travel_times = self.lookup(&pending).await;
        for leg in pending {
            let key = (leg.route.0.key(), leg.route.1.key());
            let warning = match travel_times.get(&key) {
                Some(Some(required)) if leg.available < *required => {
                    Some(ValidationWarning::Infeasible {
                        required: *required,
                        available: leg.available,
                    })
                }
                Some(Some(_)) => None,
                _ => match self.policy {
                    FailurePolicy::AssumeFeasible => None,
                    FailurePolicy::Report => Some(ValidationWarning::Unknown {
                        available: leg.available,
                    }),
                },
            };
            if let Some(warning) = warning {
                warnings.insert(leg.stop, warning);
            }
        }

        debug!(
            "Validated {} stops, {} warnings",
            sorted.len(),
            warnings.len()
        );
        warnings
    }

    /// Looks up every distinct route once, all at the same time.
    /// A failed lookup maps to `None`.
    async fn lookup(&self, pending: &[PendingLeg]) -> HashMap<RouteKey, Option<Duration>> {
        let mut seen: HashSet<RouteKey> = HashSet::new();
        let mut routes: Vec<(RouteKey, Coordinate, Coordinate)> = Vec::new();
        for leg in pending {
            let (from, to) = leg.route;
            let key = (from.key(), to.key());
            if seen.insert(key) {
                routes.push((key, from, to));
            }
        }

        let travel_times = join_all(
            routes
                .iter()
                .map(|(_, from, to)| self.travel_time(*from, *to)),
        )
        .await;
        routes
            .into_iter()
            .map(|(key, _, _)| key)
            .zip(travel_times)
            .collect()
    }

    async fn travel_time(&self, from: Coordinate, to: Coordinate) -> Option<Duration> {
        match self.oracle.travel_time(from, to).await {
            Ok(duration) => Some(duration),
            Err(err) => {
                warn!("Travel time lookup from {from} to {to} failed: {err}");
                None
            }
        }
    }
}

/// Validates with the default [`FailurePolicy`].
pub async fn validate<'s, I, O>(stops: I, oracle: &O) -> WarningMap
where
    I: IntoIterator<Item = &'s Stop>,
    O: TravelTimeOracle,
{
    Validator::new(oracle).validate(stops).await
}
