mod generation;
mod reorder;
mod validator;
mod warning;

pub use generation::*;
pub use reorder::*;
pub use validator::*;
pub use warning::*;

use thiserror::Error;

use crate::itinerary::StopId;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Stop id does not match any stop of the day: {0}")]
    UnknownStop(StopId),
}
