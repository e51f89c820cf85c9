use serde::Deserialize;

use crate::{
    itinerary::{DEFAULT_STAY, Error, Stop, StopId},
    shared::{
        geo::Coordinate,
        time::{Duration, Time},
    },
};

// A week, anything longer is a data entry mistake.
const MAX_DURATION_MINUTES: u32 = 7 * 24 * 60;

/// An itinerary row as the trip backend serves it.
#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryRecord {
    pub id: StopId,
    pub day_number: u32,
    pub order: i32,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub lat: Option<LooseNumber>,
    #[serde(default)]
    pub lng: Option<LooseNumber>,
    #[serde(default)]
    pub place_name: Option<String>,
    #[serde(default)]
    pub place_address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Decimal columns come back as JSON numbers or as numeric strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    fn value(&self) -> Option<f64> {
        match self {
            LooseNumber::Number(value) => Some(*value),
            LooseNumber::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl TryFrom<ItineraryRecord> for Stop {
    type Error = Error;

    fn try_from(value: ItineraryRecord) -> Result<Self, Self::Error> {
        if value.day_number == 0 {
            return Err(Error::InvalidDay(value.id));
        }

        let time = match value.time.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(
                Time::parse(text).ok_or_else(|| Error::InvalidTime(value.id.clone(), text.into()))?,
            ),
        };

        let duration = match value.duration_minutes {
            None => DEFAULT_STAY,
            Some(minutes) if minutes < 0 => {
                return Err(Error::NegativeDuration(value.id, minutes));
            }
            Some(minutes) => {
                let minutes = u32::try_from(minutes)
                    .ok()
                    .filter(|minutes| *minutes <= MAX_DURATION_MINUTES)
                    .ok_or_else(|| Error::DurationOutOfRange(value.id.clone(), minutes))?;
                Duration::from_minutes(minutes)
            }
        };

        let coordinate = match (&value.lat, &value.lng) {
            (Some(lat), Some(lng)) => {
                let coordinate = lat
                    .value()
                    .zip(lng.value())
                    .map(Coordinate::from)
                    .filter(Coordinate::is_valid)
                    .ok_or_else(|| Error::InvalidCoordinate(value.id.clone()))?;
                Some(coordinate)
            }
            _ => None,
        };

        Ok(Self {
            id: value.id,
            day: value.day_number,
            order: value.order,
            time,
            duration,
            coordinate,
            name: value.place_name.unwrap_or_default().into(),
        })
    }
}
