//! The classic two player match: players take turns firing at each other's fleet until one
//! fleet is sunk.
use std::fmt;

use crate::{
    board::Coordinate,
    game::{CannotStartReason, Player, StartError, TakeShotError},
    ships::Vessel,
};

/// Player ID for the classic game. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::P1 => 0,
            PlayerId::P2 => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerId::P1 => f.pad("Player 1"),
            PlayerId::P2 => f.pad("Player 2"),
        }
    }
}

/// A match in progress or finished. `P1` fires first.
#[derive(Debug, Clone)]
pub struct Match {
    players: [Player; 2],
    current: PlayerId,
    winner: Option<PlayerId>,
}

impl Match {
    /// Start a match between the two players. Both must have placed all of their ships on
    /// grids of the same size and neither may have fired a shot yet. On failure the
    /// players are handed back in the error.
    pub fn new(p1: Player, p2: Player) -> Result<Self, StartError> {
        let players = [p1, p2];
        if let Some(reason) = Self::check_ready(&players) {
            tracing::warn!("cannot start match: {}", reason);
            return Err(StartError::new(reason, players));
        }
        tracing::info!(
            "match started: {} vs {}",
            players[0].name(),
            players[1].name()
        );
        Ok(Self {
            players,
            current: PlayerId::P1,
            winner: None,
        })
    }

    fn check_ready(players: &[Player; 2]) -> Option<CannotStartReason> {
        for &id in &[PlayerId::P1, PlayerId::P2] {
            let player = &players[id.index()];
            if !player.ships_are_placed() {
                return Some(CannotStartReason::ShipsNotPlaced(id));
            }
            if !player.tracking().is_empty() {
                return Some(CannotStartReason::TrackingNotEmpty(id));
            }
            let opponent = &players[id.opponent().index()];
            if player.tracking().dimensions() != opponent.fleet().dimensions() {
                return Some(CannotStartReason::MismatchedDimensions(id));
            }
        }
        None
    }

    /// Fire the current player's shot at the given cell of the opponent's fleet grid.
    /// Returns the ship that was hit, if any. The turn passes to the opponent after every
    /// successful shot, including the one that ends the match. After an error the same
    /// player is still up.
    pub fn take_shot(&mut self, coord: Coordinate) -> Result<Option<&Vessel>, TakeShotError> {
        if self.winner.is_some() {
            return Err(TakeShotError::GameOver);
        }
        let shooter = self.current;
        let target = shooter.opponent();
        let (attacker, defender) = self.split_mut(shooter);

        let hit = if defender.fleet_mut().shoot(coord)? {
            // The grid just reported a hit, so there is a ship at coord.
            let vessel = defender.fleet().vessel_at(coord).unwrap();
            if vessel.is_destroyed() {
                // Destroyed ships are always placed.
                let (start, end) = (vessel.start().unwrap(), vessel.end().unwrap());
                attacker
                    .tracking_mut()
                    .reveal_destroyed(start, end, vessel)?;
                tracing::debug!("{} sank {}", attacker.name(), vessel.class());
            }
            attacker.tracking_mut().record_hit(coord)?;
            Some(vessel.class())
        } else {
            attacker.tracking_mut().record_miss(coord)?;
            None
        };

        if hit.is_some() && self.players[target.index()].ships_are_destroyed() {
            tracing::info!("match over: {} wins", self.players[shooter.index()].name());
            self.winner = Some(shooter);
        }
        self.current = target;

        let fleet = self.players[target.index()].fleet();
        Ok(hit.and_then(move |class| fleet.vessel(class)))
    }

    /// Borrow the given player and their opponent, in that order.
    fn split_mut(&mut self, id: PlayerId) -> (&mut Player, &mut Player) {
        let [p1, p2] = &mut self.players;
        match id {
            PlayerId::P1 => (p1, p2),
            PlayerId::P2 => (p2, p1),
        }
    }

    /// Returns true once a player has sunk the whole enemy fleet.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Get the winning player, if the match is over.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|id| self.player(id))
    }

    /// Get the ID of the winning player, if the match is over.
    pub fn winner_id(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Get the ID of the player whose turn it is.
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Get the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Get the player being fired at this turn.
    pub fn opponent_player(&self) -> &Player {
        self.player(self.current.opponent())
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// End the match, giving back both players as `(P1, P2)`.
    pub fn into_players(self) -> (Player, Player) {
        let [p1, p2] = self.players;
        (p1, p2)
    }
}
