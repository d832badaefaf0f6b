//! The fleet grid: a player's own side of the ocean.
use std::fmt;

#[cfg(feature = "rng_gen")]
use rand::{seq::SliceRandom, Rng};

use crate::{
    board::{
        grid::Grid,
        placement::{bind_run, plot_run},
        render::{render_grid, Token},
        CannotPlaceReason, CannotShootReason, Coordinate, Dimensions, LocationError, Peg,
        PlaceError, ShotError,
    },
    ships::{Fleet, Segment, ShipClass, Vessel},
};

/// Number of random starts tried before falling back to a search of every run.
#[cfg(feature = "rng_gen")]
const RANDOM_ATTEMPTS: usize = 100;

/// Reference from a cell to the ship segment occupying it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct SegmentRef {
    /// Slot of the ship in the fleet.
    class: ShipClass,
    /// Index of the segment within the ship.
    index: usize,
}

/// A player's own board. Holds their ships, which cells each ship occupies, and the
/// pegs left by the opponent's shots.
#[derive(Debug, Clone)]
pub struct FleetGrid {
    /// Ship segment occupying each cell.
    holes: Grid<Option<SegmentRef>>,

    /// Outcome of the first shot at each cell.
    pegs: Grid<Option<Peg>>,

    /// Ships placed on this grid.
    fleet: Fleet,
}

impl FleetGrid {
    /// Create an empty grid with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            holes: Grid::new(dim),
            pegs: Grid::new(dim),
            fleet: Fleet::new(),
        }
    }

    /// Get the [`Dimensions`] of this grid.
    pub fn dimensions(&self) -> &Dimensions {
        &self.holes.dim
    }

    /// The ships placed on this grid.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// The placed ship of the given class, if any.
    pub fn vessel(&self, class: ShipClass) -> Option<&Vessel> {
        self.fleet.get(class)
    }

    /// Peg left at the given cell, if it has been shot. `None` for out of bounds cells.
    pub fn peg(&self, coord: Coordinate) -> Option<Peg> {
        self.pegs.get(coord).copied().flatten()
    }

    /// Place a ship on the run of cells between `start` and `end`, in either order. On
    /// success the ship's segments are bound to the run from its lowest cell to its
    /// highest. On failure nothing on the grid changes and the ship is handed back in
    /// the error.
    pub fn place(
        &mut self,
        start: Coordinate,
        end: Coordinate,
        mut vessel: Vessel,
    ) -> Result<(), PlaceError<Vessel>> {
        let run = match plot_run(self.dimensions(), start, end, vessel.len()) {
            Ok(run) => run,
            Err(reason) => return Err(PlaceError::new(reason, start, end, vessel)),
        };
        let class = vessel.class();
        if self.fleet.get(class).is_some() {
            return Err(PlaceError::new(
                CannotPlaceReason::AlreadyPlaced,
                start,
                end,
                vessel,
            ));
        }
        if vessel.place(&run).is_err() {
            return Err(PlaceError::new(
                CannotPlaceReason::LengthMismatch,
                start,
                end,
                vessel,
            ));
        }
        if let Err(reason) = bind_run(&mut self.holes, &run, |index| SegmentRef { class, index }) {
            vessel.unplace();
            return Err(PlaceError::new(reason, start, end, vessel));
        }
        tracing::debug!("placed {} from {} to {}", class, run[0], run[run.len() - 1]);
        self.fleet.insert(vessel);
        Ok(())
    }

    /// Remove the ship of the given class from the grid, clearing the cells its segments
    /// occupied. Returns the ship, or `None` if no ship of that class was placed. Hits
    /// already taken by the ship are not checked.
    pub fn unplace(&mut self, class: ShipClass) -> Option<Vessel> {
        let mut vessel = self.fleet.take(class)?;
        for seg in vessel.segments() {
            if let Some(cell) = seg.location().and_then(|loc| self.holes.get_mut(loc)) {
                *cell = None;
            }
        }
        vessel.unplace();
        tracing::debug!("unplaced {}", class);
        Some(vessel)
    }

    /// Remove every ship from the grid, returning them in class order.
    pub fn clear(&mut self) -> Vec<Vessel> {
        ShipClass::ALL
            .iter()
            .filter_map(|&class| self.unplace(class))
            .collect()
    }

    /// Fire at the given cell. Returns `true` if a ship segment was hit.
    ///
    /// The first shot at a cell leaves a peg; later shots leave the peg as it is. A later
    /// shot at a segment fails with [`CannotShootReason::AlreadyHit`] coming from the
    /// segment, while a later shot at empty water is accepted again as a miss.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<bool, ShotError> {
        let hole = match self.holes.get(coord) {
            None => return Err(ShotError::new(CannotShootReason::OutOfBounds, coord)),
            Some(hole) => *hole,
        };
        let hit = match hole {
            Some(seg) => {
                // Holes are only bound to ships in the fleet, so unwrap is fine.
                let ship = self.fleet.get_mut(seg.class).unwrap();
                ship.hit(seg.index)
                    .map_err(|err| ShotError::new(err.into(), coord))?;
                true
            }
            None => false,
        };
        let peg = &mut self.pegs[coord];
        if peg.is_none() {
            *peg = Some(Peg::from(hit));
        }
        tracing::debug!("shot at {}: {}", coord, if hit { "hit" } else { "miss" });
        Ok(hit)
    }

    /// Get the ship occupying the given cell, if any.
    pub fn at(&self, coord: Coordinate) -> Result<Option<&Vessel>, LocationError> {
        match self.holes.get(coord) {
            None => Err(LocationError::new(coord)),
            Some(hole) => Ok(hole.and_then(|seg| self.fleet.get(seg.class))),
        }
    }

    /// Get the ship occupying the given cell. Returns `None` for empty or out of bounds
    /// cells.
    pub fn vessel_at(&self, coord: Coordinate) -> Option<&Vessel> {
        self.at(coord).ok().flatten()
    }

    /// Get the ship segment occupying the given cell, if any.
    pub fn segment_at(&self, coord: Coordinate) -> Option<&Segment> {
        let seg = (*self.holes.get(coord)?)?;
        self.fleet
            .get(seg.class)
            .and_then(|ship| ship.segments().get(seg.index))
    }

    /// Place the ship on a random free run of cells. Fails with
    /// [`CannotPlaceReason::AlreadyPlaced`] if its class is already on the grid and with
    /// [`CannotPlaceReason::CellOccupied`] if no free run is left.
    #[cfg(feature = "rng_gen")]
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        vessel: Vessel,
    ) -> Result<(), PlaceError<Vessel>> {
        let mut runs = super::placement::all_runs(self.dimensions(), vessel.len());
        let mut vessel = vessel;
        for _ in 0..RANDOM_ATTEMPTS.min(runs.len()) {
            let (start, end) = runs[rng.gen_range(0, runs.len())];
            match self.place(start, end, vessel) {
                Ok(()) => return Ok(()),
                Err(err) if err.reason() == CannotPlaceReason::CellOccupied => {
                    vessel = err.into_ship();
                }
                Err(err) => return Err(err),
            }
        }
        // The board is crowded; try every run once, in random order.
        runs.shuffle(rng);
        let (start, end) = match runs.first() {
            Some(&run) => run,
            None => {
                let origin = Coordinate::new(0, 0);
                return Err(PlaceError::new(
                    CannotPlaceReason::OffBoard,
                    origin,
                    origin,
                    vessel,
                ));
            }
        };
        for &(start, end) in &runs {
            match self.place(start, end, vessel) {
                Ok(()) => return Ok(()),
                Err(err) if err.reason() == CannotPlaceReason::CellOccupied => {
                    vessel = err.into_ship();
                }
                Err(err) => return Err(err),
            }
        }
        Err(PlaceError::new(
            CannotPlaceReason::CellOccupied,
            start,
            end,
            vessel,
        ))
    }
}

impl Default for FleetGrid {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

impl fmt::Display for FleetGrid {
    /// Text board: `S`/`H` for unhit/hit segments, `0`/`1` for miss/hit pegs on open
    /// water and `..` for untouched water.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render_grid(f, self.dimensions(), |coord| match self.segment_at(coord) {
            Some(seg) => Token::Segment { hit: seg.is_hit() },
            None => match self.peg(coord) {
                Some(peg) => Token::Peg(peg),
                None => Token::Empty,
            },
        })
    }
}
