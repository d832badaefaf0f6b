use thiserror::Error;

/// Reason a ship segment could not be hit.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum HitError {
    /// The segment has already been hit.
    #[error("part has already been hit")]
    AlreadyHit,
    /// Every segment of the ship has already been hit. [`Vessel::hit`] checks the segment
    /// first, and a destroyed ship has every segment hit, so a hit on a placed ship reports
    /// [`HitError::AlreadyHit`] instead.
    ///
    /// [`Vessel::hit`]: crate::ships::Vessel::hit
    #[error("ship is already destroyed")]
    AlreadyDestroyed,
}

/// Error returned when a ship is given a different number of locations than it has
/// segments.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("placement of {given} cells would be a different length than the ship ({expected})")]
pub struct LengthError {
    /// Length of the ship.
    pub expected: usize,
    /// Number of locations provided.
    pub given: usize,
}

/// Error returned when parsing an unknown ship class name.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown ship class \"{name}\", choose carrier, battleship, destroyer, submarine or patrol boat")]
pub struct UnknownClassError {
    name: String,
}

impl UnknownClassError {
    pub(super) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// The name that did not match any class.
    pub fn name(&self) -> &str {
        &self.name
    }
}
