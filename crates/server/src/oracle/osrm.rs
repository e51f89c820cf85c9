use std::time;

use serde::Deserialize;
use tracing::debug;
use tripwise::{
    oracle::{Error, TravelTimeOracle},
    shared::{Coordinate, Distance, Duration},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummary {
    pub duration: Duration,
    pub distance: Distance,
}

#[derive(Debug, Deserialize)]
pub struct OsrmResponse {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Seconds.
    pub duration: f64,
    /// Meters.
    pub distance: f64,
}

impl OsrmResponse {
    pub fn into_summary(self, from: Coordinate, to: Coordinate) -> Result<RouteSummary, Error> {
        match self.code.as_str() {
            "Ok" => {
                let route = self
                    .routes
                    .into_iter()
                    .next()
                    .ok_or(Error::NoRoute(from, to))?;
                Ok(RouteSummary {
                    duration: Duration::from_seconds_f64(route.duration),
                    distance: Distance::from_meters(route.distance),
                })
            }
            "NoRoute" => Err(Error::NoRoute(from, to)),
            code => Err(Error::InvalidResponse(format!(
                "{code}: {}",
                self.message.unwrap_or_default()
            ))),
        }
    }
}

/// Client for the OSRM `route` service, driving profile.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn route_url(&self, from: &Coordinate, to: &Coordinate) -> String {
        // OSRM wants longitude first.
        format!(
            "{}/route/v1/driving/{},{};{},{}?overview=false",
            self.base_url, from.longitude, from.latitude, to.longitude, to.latitude
        )
    }

    pub async fn route(&self, from: Coordinate, to: Coordinate) -> Result<RouteSummary, Error> {
        let url = self.route_url(&from, &to);
        debug!("Requesting {url}");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| Error::Unavailable(err.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(Error::Unavailable(format!("OSRM answered {status}")));
        }

        let body: OsrmResponse = response
            .json()
            .await
            .map_err(|err| Error::InvalidResponse(err.to_string()))?;
        body.into_summary(from, to)
    }
}

impl TravelTimeOracle for OsrmClient {
    async fn travel_time(&self, from: Coordinate, to: Coordinate) -> Result<Duration, Error> {
        Ok(self.route(from, to).await?.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> (Coordinate, Coordinate) {
        (
            Coordinate::from((14.5995, 120.9842)),
            Coordinate::from((14.5547, 121.0244)),
        )
    }

    #[test]
    fn ok_response_is_summarised() {
        let (from, to) = points();
        let body: OsrmResponse = serde_json::from_str(
            r#"{"code":"Ok","routes":[{"duration":1199.6,"distance":8421.3,"weight":1199.6,"legs":[]}],"waypoints":[]}"#,
        )
        .unwrap();

        let summary = body.into_summary(from, to).unwrap();
        assert_eq!(summary.duration, Duration::from_minutes(20));
        assert_eq!(summary.distance, Distance::from_meters(8421.3));
    }

    #[test]
    fn no_route_is_an_error() {
        let (from, to) = points();
        let body: OsrmResponse =
            serde_json::from_str(r#"{"code":"NoRoute","message":"Impossible route"}"#).unwrap();
        assert_eq!(body.into_summary(from, to), Err(Error::NoRoute(from, to)));

        let body: OsrmResponse = serde_json::from_str(r#"{"code":"Ok","routes":[]}"#).unwrap();
        assert_eq!(body.into_summary(from, to), Err(Error::NoRoute(from, to)));
    }

    #[test]
    fn other_codes_are_invalid() {
        let (from, to) = points();
        let body: OsrmResponse =
            serde_json::from_str(r#"{"code":"InvalidQuery","message":"bad coordinates"}"#)
                .unwrap();
        assert_eq!(
            body.into_summary(from, to),
            Err(Error::InvalidResponse("InvalidQuery: bad coordinates".into()))
        );
    }

    #[test]
    fn url_puts_longitude_first() {
        let (from, to) = points();
        let client = OsrmClient::new("http://localhost:5000/", 1).unwrap();
        assert_eq!(
            client.route_url(&from, &to),
            "http://localhost:5000/route/v1/driving/120.9842,14.5995;121.0244,14.5547?overview=false"
        );
    }
}
