use std::{fmt::Display, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::shared::{
    geo::Coordinate,
    time::{Duration, Time},
};

pub const DEFAULT_STAY: Duration = Duration::from_minutes(60);

/// Identity of a stop. Stable across reorders.
/// The backend hands out integer ids but anything string-like is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(Arc<str>);

impl StopId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StopId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for StopId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<u64> for StopId {
    fn from(value: u64) -> Self {
        Self(value.to_string().into())
    }
}

impl Serialize for StopId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StopId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(value) => value.into(),
            Raw::Text(value) => value.into(),
        })
    }
}

/// One itinerary entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub day: u32,
    pub order: i32,
    /// Unscheduled when `None`.
    pub time: Option<Time>,
    pub duration: Duration,
    pub coordinate: Option<Coordinate>,
    pub name: Arc<str>,
}

impl Stop {
    pub fn new(id: impl Into<StopId>, day: u32, order: i32) -> Self {
        Self {
            id: id.into(),
            day,
            order,
            time: None,
            duration: DEFAULT_STAY,
            coordinate: None,
            name: "".into(),
        }
    }

    pub fn at(mut self, time: Time) -> Self {
        self.time = Some(time);
        self
    }

    pub fn staying(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn located(mut self, coordinate: impl Into<Coordinate>) -> Self {
        self.coordinate = Some(coordinate.into());
        self
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    /// When the visit is over and the traveller can leave.
    /// Saturates rather than wrapping for absurdly long stays.
    pub fn departure(&self) -> Option<Time> {
        self.time.map(|time| time + self.duration)
    }
}

/// Stable sort by `order`, ties keep their input order.
pub fn traversal_order<'a, I>(stops: I) -> Vec<&'a Stop>
where
    I: IntoIterator<Item = &'a Stop>,
{
    let mut sorted: Vec<&Stop> = stops.into_iter().collect();
    sorted.sort_by_key(|stop| stop.order);
    sorted
}
