//! A player: their fleet grid, their tracking grid, and their ships.
use enumflags2::BitFlags;

#[cfg(feature = "rng_gen")]
use rand::Rng;

use crate::{
    board::{Coordinate, Dimensions, FleetGrid, PlaceError, TrackingGrid},
    ships::{ShipClass, Vessel},
};

/// One of the two players in a match.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    fleet: FleetGrid,
    tracking: TrackingGrid,
}

impl Player {
    /// Create a player with empty grids of the default size.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::with_dimensions(name, Dimensions::default())
    }

    /// Create a player whose grids have the given [`Dimensions`].
    pub fn with_dimensions<S: Into<String>>(name: S, dim: Dimensions) -> Self {
        Self {
            name: name.into(),
            fleet: FleetGrid::new(dim),
            tracking: TrackingGrid::new(dim),
        }
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's own grid.
    pub fn fleet(&self) -> &FleetGrid {
        &self.fleet
    }

    /// Mutably get the player's own grid, to place or remove ships.
    pub fn fleet_mut(&mut self) -> &mut FleetGrid {
        &mut self.fleet
    }

    /// The player's record of their shots at the opponent.
    pub fn tracking(&self) -> &TrackingGrid {
        &self.tracking
    }

    pub(crate) fn tracking_mut(&mut self) -> &mut TrackingGrid {
        &mut self.tracking
    }

    /// Place a new ship of the given class between `start` and `end`.
    pub fn place(
        &mut self,
        class: ShipClass,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<(), PlaceError<Vessel>> {
        self.fleet.place(start, end, Vessel::new(class))
    }

    /// Remove the ship of the given class from the player's grid.
    pub fn unplace(&mut self, class: ShipClass) -> Option<Vessel> {
        self.fleet.unplace(class)
    }

    /// Classes the player has not placed yet.
    pub fn pending_ships(&self) -> BitFlags<ShipClass> {
        self.fleet.fleet().pending()
    }

    /// Returns true if the player has placed a ship of every class.
    pub fn ships_are_placed(&self) -> bool {
        self.fleet.fleet().is_complete()
    }

    /// Returns true if the player has a ship of every class and all of them are
    /// destroyed.
    pub fn ships_are_destroyed(&self) -> bool {
        self.fleet.fleet().all_destroyed()
    }

    /// Place every ship the player has not placed yet at random.
    #[cfg(feature = "rng_gen")]
    pub fn place_remaining_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), PlaceError<Vessel>> {
        for class in self.pending_ships().iter() {
            self.fleet.place_randomly(rng, Vessel::new(class))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    /// Place every class on its own row, starting at column 0.
    fn place_all(player: &mut Player) {
        for (row, &class) in ShipClass::ALL.iter().enumerate() {
            player
                .place(class, c(row, 0), c(row, class.len() - 1))
                .unwrap();
        }
    }

    #[test]
    fn new_player_has_nothing_placed() {
        let player = Player::new("Ann");
        assert_eq!(player.name(), "Ann");
        assert!(!player.ships_are_placed());
        assert!(!player.ships_are_destroyed());
        assert_eq!(player.pending_ships(), ShipClass::all());
        assert!(player.tracking().is_empty());
    }

    #[test]
    fn placed_once_every_class_is_placed() {
        let mut player = Player::new("Ann");
        place_all(&mut player);
        assert!(player.ships_are_placed());
        assert!(player.pending_ships().is_empty());

        player.unplace(ShipClass::Submarine).unwrap();
        assert!(!player.ships_are_placed());
        assert_eq!(player.pending_ships(), BitFlags::from(ShipClass::Submarine));
    }

    #[test]
    fn destroyed_once_every_ship_is_sunk() {
        let mut player = Player::new("Ann");
        place_all(&mut player);
        for (row, &class) in ShipClass::ALL.iter().enumerate() {
            assert!(!player.ships_are_destroyed());
            for col in 0..class.len() {
                player.fleet_mut().shoot(c(row, col)).unwrap();
            }
        }
        assert!(player.ships_are_destroyed());
    }

    #[test]
    fn partial_fleet_is_never_destroyed() {
        let mut player = Player::new("Ann");
        player.place(ShipClass::PatrolBoat, c(0, 0), c(0, 1)).unwrap();
        player.fleet_mut().shoot(c(0, 0)).unwrap();
        player.fleet_mut().shoot(c(0, 1)).unwrap();
        assert!(!player.ships_are_destroyed());
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn random_placement_completes_fleet() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(99);
        let mut player = Player::new("Ann");
        player.place(ShipClass::Carrier, c(9, 0), c(9, 4)).unwrap();
        player.place_remaining_randomly(&mut rng).unwrap();
        assert!(player.ships_are_placed());
        assert_eq!(
            player.fleet().vessel(ShipClass::Carrier).unwrap().start(),
            Some(c(9, 0))
        );
    }
}
