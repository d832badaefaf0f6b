//! A single ship and the segments it is made of.
use crate::{
    board::Coordinate,
    ships::{HitError, LengthError, ShipClass},
};

/// One cell-sized part of a [`Vessel`]. Segments are hit independently of each other.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Segment {
    /// Whether this segment has been hit.
    hit: bool,
    /// Cell this segment occupies, if the ship is placed.
    location: Option<Coordinate>,
}

impl Segment {
    /// Whether this segment has been hit.
    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Cell this segment occupies, if the ship is placed.
    pub fn location(&self) -> Option<Coordinate> {
        self.location
    }
}

/// A ship of a given [`ShipClass`], tracking where it sits and which of its segments
/// have been hit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vessel {
    class: ShipClass,
    segments: Vec<Segment>,
    placed: bool,
    destroyed: bool,
}

impl Vessel {
    /// Build an unplaced, undamaged ship of the given class.
    pub fn new(class: ShipClass) -> Self {
        Self {
            class,
            segments: vec![Segment::default(); class.len()],
            placed: false,
            destroyed: false,
        }
    }

    /// Class of this ship.
    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Number of segments in this ship.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the ship has been bound to locations on a grid.
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Whether every segment of the ship has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// The segments of this ship, from its start to its end.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments that have been hit.
    pub fn hits(&self) -> usize {
        self.segments.iter().filter(|seg| seg.hit).count()
    }

    /// Location of the first segment. `None` if the ship is not placed.
    pub fn start(&self) -> Option<Coordinate> {
        self.segments.first().and_then(|seg| seg.location)
    }

    /// Location of the last segment. `None` if the ship is not placed.
    pub fn end(&self) -> Option<Coordinate> {
        self.segments.last().and_then(|seg| seg.location)
    }

    /// Bind each segment, in order, to the given locations. Does not check that the
    /// locations are distinct or contiguous; that is up to the grid.
    pub fn place(&mut self, locations: &[Coordinate]) -> Result<(), LengthError> {
        if locations.len() != self.len() {
            return Err(LengthError {
                expected: self.len(),
                given: locations.len(),
            });
        }
        for (seg, &loc) in self.segments.iter_mut().zip(locations) {
            seg.location = Some(loc);
        }
        self.placed = true;
        Ok(())
    }

    /// Clear the locations of all segments.
    pub fn unplace(&mut self) {
        for seg in self.segments.iter_mut() {
            seg.location = None;
        }
        self.placed = false;
    }

    /// Hit the segment with the given index. Returns `true` if this hit destroyed the
    /// ship. Panics if `index >= self.len()`.
    pub fn hit(&mut self, index: usize) -> Result<bool, HitError> {
        if self.segments[index].hit {
            return Err(HitError::AlreadyHit);
        }
        if self.destroyed {
            return Err(HitError::AlreadyDestroyed);
        }
        self.segments[index].hit = true;
        self.destroyed = self.segments.iter().all(|seg| seg.hit);
        Ok(self.destroyed)
    }
}
