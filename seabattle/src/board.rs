//! Types that make up the game boards: the fleet grid a player places their ships on,
//! and the tracking grid where they record their shots at the opponent.

pub use self::{
    coordinate::Coordinate,
    dimensions::{Dimensions, MAX_ROWS},
    errors::{
        CannotPegReason, CannotPlaceReason, CannotShootReason, LabelError, LocationError,
        PegError, PlaceError, ShotError,
    },
    fleet::FleetGrid,
    tracking::TrackingGrid,
};

mod coordinate;
mod dimensions;
mod errors;
mod fleet;
mod grid;
mod placement;
mod render;
mod tracking;

/// Marker recording the outcome of a shot at a cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Peg {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship.
    Hit,
}

impl Peg {
    /// Numeric code of the peg used in text boards: `0` for a miss, `1` for a hit.
    pub fn code(self) -> u8 {
        match self {
            Peg::Miss => 0,
            Peg::Hit => 1,
        }
    }
}

impl From<bool> for Peg {
    /// Convert the outcome of a shot, `true` for a hit, into a peg.
    fn from(hit: bool) -> Self {
        if hit {
            Peg::Hit
        } else {
            Peg::Miss
        }
    }
}
