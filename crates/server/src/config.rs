use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};
use tripwise::schedule::FailurePolicy;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleBackend {
    Osrm,
    Estimate,
}

impl FromStr for OracleBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "osrm" => Ok(Self::Osrm),
            "estimate" => Ok(Self::Estimate),
            other => Err(format!("expected osrm or estimate, got {other}")),
        }
    }
}

/// `FAILURE_POLICY` values.
pub fn parse_policy(s: &str) -> Result<FailurePolicy, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "assume_feasible" => Ok(FailurePolicy::AssumeFeasible),
        "report" => Ok(FailurePolicy::Report),
        other => Err(format!("expected assume_feasible or report, got {other}")),
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub oracle: OracleBackend,
    pub osrm_url: String,
    pub oracle_timeout_secs: u64,
    pub estimate_speed_kmh: f64,
    pub cache_capacity: usize,
    pub session_capacity: usize,
    pub failure_policy: FailurePolicy,
}

impl Config {
    pub fn load() -> Result<Self, self::Error> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Same as [`Config::load`] but reads values through `lookup`.
    pub fn load_with<F>(lookup: F) -> Result<Self, self::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let policy = lookup("FAILURE_POLICY").unwrap_or_else(|| "assume_feasible".into());
        let failure_policy = parse_policy(&policy).map_err(|message| Error::Invalid {
            key: "FAILURE_POLICY",
            message,
        })?;

        let config = Self {
            port: try_load(&lookup, "PORT", "3000")?,
            oracle: try_load(&lookup, "ORACLE", "osrm")?,
            osrm_url: try_load::<String, _>(&lookup, "OSRM_URL", "https://router.project-osrm.org")?
                .trim_end_matches('/')
                .to_string(),
            oracle_timeout_secs: try_load(&lookup, "ORACLE_TIMEOUT_SECS", "5")?,
            estimate_speed_kmh: try_load(&lookup, "ESTIMATE_SPEED_KMH", "40")?,
            cache_capacity: try_load(&lookup, "CACHE_CAPACITY", "4096")?,
            session_capacity: try_load(&lookup, "SESSION_CAPACITY", "1024")?,
            failure_policy,
        };

        if !(config.estimate_speed_kmh.is_finite() && config.estimate_speed_kmh > 0.0) {
            return Err(Error::Invalid {
                key: "ESTIMATE_SPEED_KMH",
                message: "must be a positive number".into(),
            });
        }
        Ok(config)
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, self::Error>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            Error::Invalid {
                key,
                message: e.to_string(),
            }
        })
}
