mod models;
mod stop;

pub use models::*;
pub use stop::*;

use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

use crate::schedule::OrderUpdate;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Stop {0} has day number 0, days start at 1")]
    InvalidDay(StopId),
    #[error("Stop {0} has an unreadable time: {1}")]
    InvalidTime(StopId, String),
    #[error("Stop {0} has a negative duration: {1}")]
    NegativeDuration(StopId, i64),
    #[error("Stop {0} has a duration out of range: {1}")]
    DurationOutOfRange(StopId, i64),
    #[error("Stop {0} has coordinates that are not a valid WGS84 position")]
    InvalidCoordinate(StopId),
}

/// Snapshot of every stop in a trip.
#[derive(Debug, Clone, Default)]
pub struct Itinerary {
    stops: Vec<Stop>,
}

impl Itinerary {
    pub fn new(stops: Vec<Stop>) -> Self {
        Self { stops }
    }

    /// Parses backend rows, failing on the first malformed one.
    pub fn from_records<I>(records: I) -> Result<Self, self::Error>
    where
        I: IntoIterator<Item = ItineraryRecord>,
    {
        let stops = records
            .into_iter()
            .map(Stop::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Parsed {} itinerary stops", stops.len());
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn days(&self) -> BTreeSet<u32> {
        self.stops.iter().map(|stop| stop.day).collect()
    }

    /// The day's stops in traversal order.
    pub fn day(&self, day: u32) -> Vec<&Stop> {
        traversal_order(self.stops.iter().filter(|stop| stop.day == day))
    }

    pub fn get(&self, id: &StopId) -> Option<&Stop> {
        self.stops.iter().find(|stop| &stop.id == id)
    }

    /// Order given to a stop appended to the end of `day`.
    pub fn next_order(&self, day: u32) -> i32 {
        self.stops
            .iter()
            .filter(|stop| stop.day == day)
            .map(|stop| stop.order)
            .fold(0, i32::max)
            + 1
    }

    /// Mirrors a persisted reorder locally. Returns false for unknown ids.
    pub fn apply(&mut self, update: &OrderUpdate) -> bool {
        match self.stops.iter_mut().find(|stop| stop.id == update.id) {
            Some(stop) => {
                stop.order = update.order;
                true
            }
            None => false,
        }
    }
}
