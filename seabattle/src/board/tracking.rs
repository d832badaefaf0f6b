//! The tracking grid: a player's record of their own shots at the opponent.
use std::fmt;

use enumflags2::BitFlags;

use crate::{
    board::{
        grid::Grid,
        placement::{bind_run, plot_run},
        render::{render_grid, Token},
        CannotPegReason, Coordinate, Dimensions, Peg, PegError, PlaceError,
    },
    ships::{ShipClass, Vessel},
};

/// A player's view of the opponent's ocean. Records where they have fired, what each shot
/// did, and the outline of every enemy ship they have sunk.
#[derive(Debug, Clone)]
pub struct TrackingGrid {
    /// Outcome of each shot fired.
    pegs: Grid<Option<Peg>>,

    /// Class of the sunk enemy ship occupying each cell, once revealed.
    revealed: Grid<Option<ShipClass>>,

    /// Classes of the enemy ships revealed so far.
    sunk: BitFlags<ShipClass>,
}

impl TrackingGrid {
    /// Create an empty grid with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            pegs: Grid::new(dim),
            revealed: Grid::new(dim),
            sunk: BitFlags::empty(),
        }
    }

    /// Get the [`Dimensions`] of this grid.
    pub fn dimensions(&self) -> &Dimensions {
        &self.pegs.dim
    }

    /// Record a shot at the given cell that hit a ship.
    pub fn record_hit(&mut self, coord: Coordinate) -> Result<(), PegError> {
        self.place_peg(coord, Peg::Hit)
    }

    /// Record a shot at the given cell that hit nothing.
    pub fn record_miss(&mut self, coord: Coordinate) -> Result<(), PegError> {
        self.place_peg(coord, Peg::Miss)
    }

    fn place_peg(&mut self, coord: Coordinate, peg: Peg) -> Result<(), PegError> {
        match self.pegs.get_mut(coord) {
            None => Err(PegError::new(CannotPegReason::OutOfBounds, coord)),
            Some(Some(_)) => Err(PegError::new(CannotPegReason::DuplicatePeg, coord)),
            Some(cell) => {
                *cell = Some(peg);
                Ok(())
            }
        }
    }

    /// Mark the run of cells between `start` and `end` as occupied by the given sunk enemy
    /// ship. Fails like [`FleetGrid::place`][crate::board::FleetGrid::place] does if the
    /// run is not a valid placement of the ship or overlaps a ship already revealed.
    pub fn reveal_destroyed(
        &mut self,
        start: Coordinate,
        end: Coordinate,
        vessel: &Vessel,
    ) -> Result<(), PlaceError<ShipClass>> {
        let class = vessel.class();
        plot_run(self.dimensions(), start, end, vessel.len())
            .and_then(|run| bind_run(&mut self.revealed, &run, |_| class))
            .map_err(|reason| PlaceError::new(reason, start, end, class))?;
        self.sunk |= class;
        tracing::debug!("revealed sunk {} from {} to {}", class, start, end);
        Ok(())
    }

    /// Peg at the given cell, if a shot has been recorded there.
    pub fn peg(&self, coord: Coordinate) -> Option<Peg> {
        self.pegs.get(coord).copied().flatten()
    }

    /// Class of the sunk enemy ship revealed at the given cell, if any.
    pub fn revealed(&self, coord: Coordinate) -> Option<ShipClass> {
        self.revealed.get(coord).copied().flatten()
    }

    /// Classes of all enemy ships revealed so far.
    pub fn revealed_classes(&self) -> BitFlags<ShipClass> {
        self.sunk
    }

    /// Number of shots recorded.
    pub fn shots(&self) -> usize {
        self.pegs.iter().filter(|(_, peg)| peg.is_some()).count()
    }

    /// Returns true if no shot has been recorded and no ship revealed.
    pub fn is_empty(&self) -> bool {
        self.sunk.is_empty() && self.shots() == 0
    }
}

impl Default for TrackingGrid {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

impl fmt::Display for TrackingGrid {
    /// Text board: `H` for segments of revealed ships, `0`/`1` for miss/hit pegs and `..`
    /// for cells not yet fired at.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render_grid(f, self.dimensions(), |coord| {
            if self.revealed(coord).is_some() {
                Token::Segment { hit: true }
            } else {
                self.peg(coord).map_or(Token::Empty, Token::Peg)
            }
        })
    }
}
