use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{
    board::{PegError, PlaceError, ShotError},
    game::{Player, PlayerId},
    ships::ShipClass,
};

/// Reason why a match could not be started with the given players.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotStartReason {
    /// The player has not placed every ship.
    #[error("{0} has not placed all of their ships")]
    ShipsNotPlaced(PlayerId),
    /// The player's tracking grid already has shots on it.
    #[error("{0} has already recorded shots")]
    TrackingNotEmpty(PlayerId),
    /// The player's tracking grid is not the same size as the opponent's fleet grid.
    #[error("{0} is tracking a grid of a different size than the opponent's")]
    MismatchedDimensions(PlayerId),
}

/// Error returned when the players are not ready for a match. Hands the players back.
#[derive(Error)]
#[error("could not start match: {reason}")]
pub struct StartError {
    #[source]
    reason: CannotStartReason,
    players: Box<[Player; 2]>,
}

impl StartError {
    pub(super) fn new(reason: CannotStartReason, players: [Player; 2]) -> Self {
        Self {
            reason,
            players: Box::new(players),
        }
    }

    /// Get the reason the match could not start.
    pub fn reason(&self) -> CannotStartReason {
        self.reason
    }

    /// Extract the two players from this error.
    pub fn into_players(self) -> (Player, Player) {
        let [p1, p2] = *self.players;
        (p1, p2)
    }
}

impl Debug for StartError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Error returned when a shot cannot be taken. The turn does not pass when a shot fails.
#[derive(Debug, Error)]
pub enum TakeShotError {
    /// The match is already over.
    #[error("game is already over, no more shots can be taken")]
    GameOver,
    /// The opponent's fleet grid rejected the shot.
    #[error(transparent)]
    Shot(#[from] ShotError),
    /// The shooter's tracking grid rejected the outcome.
    #[error(transparent)]
    Peg(#[from] PegError),
    /// The sunk ship could not be revealed on the shooter's tracking grid.
    #[error(transparent)]
    Reveal(#[from] PlaceError<ShipClass>),
}
