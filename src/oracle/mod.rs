//! Routing oracle seam.
//!
//! The validator only ever asks one question: how long does it take to
//! drive from one coordinate to another. Anything that can answer it
//! implements [`TravelTimeOracle`], be it a routing service over HTTP, an
//! offline estimate or a closure in a test.

mod estimate;
pub use estimate::*;

use std::future::Future;

use thiserror::Error;

use crate::shared::{geo::Coordinate, time::Duration};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Routing service unavailable: {0}")]
    Unavailable(String),
    #[error("No route between {0} and {1}")]
    NoRoute(Coordinate, Coordinate),
    #[error("Routing service answered with something unreadable: {0}")]
    InvalidResponse(String),
}

pub trait TravelTimeOracle: Sync {
    /// Driving time of the fastest route from `from` to `to`.
    fn travel_time(
        &self,
        from: Coordinate,
        to: Coordinate,
    ) -> impl Future<Output = Result<Duration, self::Error>> + Send;
}

/// Oracle backed by an async closure.
#[derive(Clone)]
pub struct FnOracle<F> {
    f: F,
}

pub fn from_fn<F, Fut>(f: F) -> FnOracle<F>
where
    F: Fn(Coordinate, Coordinate) -> Fut + Sync,
    Fut: Future<Output = Result<Duration, self::Error>> + Send,
{
    FnOracle { f }
}

impl<F, Fut> TravelTimeOracle for FnOracle<F>
where
    F: Fn(Coordinate, Coordinate) -> Fut + Sync,
    Fut: Future<Output = Result<Duration, self::Error>> + Send,
{
    fn travel_time(
        &self,
        from: Coordinate,
        to: Coordinate,
    ) -> impl Future<Output = Result<Duration, self::Error>> + Send {
        (self.f)(from, to)
    }
}
