use crate::{
    oracle::{Error, TravelTimeOracle},
    shared::{geo::Coordinate, time::Duration},
};

pub const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Offline oracle, drive time is network distance over an average speed.
#[derive(Debug, Clone, Copy)]
pub struct EstimateOracle {
    speed_kmh: f64,
}

impl Default for EstimateOracle {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl EstimateOracle {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_speed(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = speed_kmh;
        self
    }

    pub fn estimate(&self, from: &Coordinate, to: &Coordinate) -> Duration {
        let hours = from.network_distance(to).as_kilometers() / self.speed_kmh;
        Duration::from_seconds_f64(hours * 3600.0)
    }
}

impl TravelTimeOracle for EstimateOracle {
    async fn travel_time(&self, from: Coordinate, to: Coordinate) -> Result<Duration, Error> {
        if !self.speed_kmh.is_finite() || self.speed_kmh <= 0.0 {
            return Err(Error::Unavailable(format!(
                "average speed must be positive, got {}",
                self.speed_kmh
            )));
        }
        Ok(self.estimate(&from, &to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_place_is_instant() {
        let oracle = EstimateOracle::new();
        let here = Coordinate::from((14.5995, 120.9842));
        assert_eq!(oracle.estimate(&here, &here), Duration::ZERO);
    }

    #[test]
    fn slower_speed_takes_longer() {
        let a = Coordinate::from((14.5995, 120.9842));
        let b = Coordinate::from((14.6760, 121.0437));
        let fast = EstimateOracle::new().with_speed(80.0).estimate(&a, &b);
        let slow = EstimateOracle::new().with_speed(20.0).estimate(&a, &b);
        assert!(slow > fast);
    }
}
