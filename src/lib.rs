pub mod itinerary;
pub mod oracle;
pub mod schedule;
pub mod shared;

pub mod prelude {
    pub use crate::itinerary::{Itinerary, ItineraryRecord, Stop, StopId};
    pub use crate::oracle::{EstimateOracle, TravelTimeOracle};
    pub use crate::schedule::{
        Direction, FailurePolicy, Generation, Generations, Latest, Move, OrderUpdate,
        ValidationWarning, Validator, WarningMap, move_adjacent, validate,
    };
    pub use crate::shared::{Coordinate, Distance, Duration, Time};
}
