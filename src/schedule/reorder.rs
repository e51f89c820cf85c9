use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    itinerary::{Stop, StopId, traversal_order},
    schedule::Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

/// New `order` for one stop, for the caller to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderUpdate {
    pub id: StopId,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    /// The stop and its neighbour trade `order` values.
    Swap { a: OrderUpdate, b: OrderUpdate },
    /// Already first moving up, or last moving down.
    NoOp,
}

impl Move {
    pub fn updates(&self) -> Vec<OrderUpdate> {
        match self {
            Move::Swap { a, b } => vec![a.clone(), b.clone()],
            Move::NoOp => Vec::new(),
        }
    }
}

/// Moves `id` one position within its day by swapping `order` with the
/// neighbour. No other stop is renumbered. Nothing is mutated, the returned
/// updates must be persisted and the day validated again.
pub fn move_adjacent<'a, I>(stops: I, id: &StopId, direction: Direction) -> Result<Move, Error>
where
    I: IntoIterator<Item = &'a Stop>,
{
    let sorted = traversal_order(stops);
    let index = sorted
        .iter()
        .position(|stop| &stop.id == id)
        .ok_or_else(|| Error::UnknownStop(id.clone()))?;

    let neighbour = match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => Some(index + 1).filter(|next| *next < sorted.len()),
    };
    let Some(neighbour) = neighbour else {
        debug!("Stop {id} is already at the edge, not moving {direction:?}");
        return Ok(Move::NoOp);
    };

    let (stop, other) = (sorted[index], sorted[neighbour]);
    Ok(Move::Swap {
        a: OrderUpdate {
            id: stop.id.clone(),
            order: other.order,
        },
        b: OrderUpdate {
            id: other.id.clone(),
            order: stop.order,
        },
    })
}
