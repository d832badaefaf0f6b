//! Implementation of the game as a whole: the players and the match they play.
//!
//! Players set up their fleets through [`Player`], then hand both players to
//! [`Match::new`], which runs the turns until one fleet is sunk.

pub use self::{
    classic::{Match, PlayerId},
    errors::{CannotStartReason, StartError, TakeShotError},
    player::Player,
};

mod classic;
mod errors;
mod player;
