//! Errors used by the `FleetGrid` and `TrackingGrid`.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::HitError};

/// Reason why a ship could not be placed between two coordinates.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One of the ends of the run was not on the grid.
    #[error("ship would be placed off the grid")]
    OffBoard,
    /// The ends of the run share neither a row nor a column.
    #[error("ship must be placed along a single row or column")]
    Misaligned,
    /// The run between the ends is not as long as the ship.
    #[error("placement would be a different length than the ship")]
    LengthMismatch,
    /// A ship of the same class is already on the grid.
    #[error("a ship of that class was already placed")]
    AlreadyPlaced,
    /// One or more of the cells in the run was already occupied.
    #[error("another ship is in the way of the placement")]
    CellOccupied,
}

/// Error caused when attempting to place a ship in an invalid position. Carries back
/// whatever was being placed so the caller can try again.
#[derive(Error)]
#[error("could not place ship from {start} to {end}: {reason}")]
pub struct PlaceError<P> {
    #[source]
    reason: CannotPlaceReason,
    start: Coordinate,
    end: Coordinate,
    ship: P,
}

impl<P> Debug for PlaceError<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<P> PlaceError<P> {
    /// Construct a placement error from a reason, the requested ends, and the ship.
    pub(crate) fn new(reason: CannotPlaceReason, start: Coordinate, end: Coordinate, ship: P) -> Self {
        Self {
            reason,
            start,
            end,
            ship,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Start of the requested run.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// End of the requested run.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Get a reference to the ship that was not placed.
    pub fn ship(&self) -> &P {
        &self.ship
    }

    /// Extract the ship that was not placed from this error.
    pub fn into_ship(self) -> P {
        self.ship
    }
}

/// Reason why a particular cell of a fleet grid could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the grid.
    #[error("shot location is not a location on the grid")]
    OutOfBounds,
    /// The ship segment in the cell has already been hit.
    #[error("that part of the ship has already been hit")]
    AlreadyHit,
    /// The ship in the cell has already been destroyed.
    #[error("that ship is already destroyed")]
    AlreadyDestroyed,
}

impl From<HitError> for CannotShootReason {
    fn from(err: HitError) -> Self {
        match err {
            HitError::AlreadyHit => CannotShootReason::AlreadyHit,
            HitError::AlreadyDestroyed => CannotShootReason::AlreadyDestroyed,
        }
    }
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot cell {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(crate) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Reason why a peg could not be put on a tracking grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPegReason {
    /// The cell selected was out of bounds on the grid.
    #[error("peg location is not a location on the grid")]
    OutOfBounds,
    /// The cell already holds a peg.
    #[error("peg location already has a peg")]
    DuplicatePeg,
}

/// Error returned when a shot outcome cannot be recorded on a tracking grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not peg cell {coord}: {reason}")]
pub struct PegError {
    reason: CannotPegReason,
    coord: Coordinate,
}

impl PegError {
    pub(crate) fn new(reason: CannotPegReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the peg was refused.
    pub fn reason(&self) -> CannotPegReason {
        self.reason
    }

    /// Get the coordinate of the cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Error returned when looking up a coordinate that is not on the grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("{coord} is not a location on the grid")]
pub struct LocationError {
    coord: Coordinate,
}

impl LocationError {
    pub(crate) fn new(coord: Coordinate) -> Self {
        Self { coord }
    }

    /// The coordinate that was looked up.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Error returned when parsing a player-facing cell label.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum LabelError {
    /// The text is not a row letter followed by a column number.
    #[error("\"{0}\" is not a cell label, expected a letter and a number like A-1")]
    Malformed(String),
    /// The label is well formed but names a cell off the board.
    #[error("\"{0}\" is not on the board")]
    OutOfRange(String),
}
