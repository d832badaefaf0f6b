//! Rules engine for the classic two player naval combat game.
//!
//! Each [`Player`] owns a [`FleetGrid`] holding their five ships and a [`TrackingGrid`]
//! recording their shots at the opponent. A [`Match`] takes two ready players and
//! alternates their shots until one fleet is destroyed.
//!
//! Enable the `rng_gen` feature for random ship placement.

pub mod board;
pub mod game;
pub mod ships;

pub use crate::{
    board::{Coordinate, Dimensions, FleetGrid, TrackingGrid},
    game::{Match, Player, PlayerId},
    ships::{ShipClass, Vessel},
};
