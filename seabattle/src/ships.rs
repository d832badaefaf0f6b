//! Types used for defining ships and the fleet each player commands.
use std::{fmt, str::FromStr};

use enumflags2::BitFlags;

pub use self::{
    errors::{HitError, LengthError, UnknownClassError},
    fleet::Fleet,
    vessel::{Segment, Vessel},
};

mod errors;
mod fleet;
mod vessel;

/// Class of ship in the classic game. Every player has exactly one ship of each class.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ShipClass {
    /// Carrier: length 5.
    Carrier = 0b00001,
    /// Battleship: length 4.
    Battleship = 0b00010,
    /// Destroyer: length 3.
    Destroyer = 0b00100,
    /// Submarine: length 3.
    Submarine = 0b01000,
    /// Patrol boat: length 2.
    PatrolBoat = 0b10000,
}

impl ShipClass {
    /// All ship classes, in the order players place them.
    pub const ALL: &'static [ShipClass] = &[
        ShipClass::Carrier,
        ShipClass::Battleship,
        ShipClass::Destroyer,
        ShipClass::Submarine,
        ShipClass::PatrolBoat,
    ];

    /// Get the length of this ship class.
    pub fn len(self) -> usize {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Destroyer => 3,
            ShipClass::Submarine => 3,
            ShipClass::PatrolBoat => 2,
        }
    }

    /// Full name of the class.
    pub fn name(self) -> &'static str {
        match self {
            ShipClass::Carrier => "carrier",
            ShipClass::Battleship => "battleship",
            ShipClass::Destroyer => "destroyer",
            ShipClass::Submarine => "submarine",
            ShipClass::PatrolBoat => "patrol boat",
        }
    }

    /// Two letter abbreviation of the class.
    pub fn abbrev(self) -> &'static str {
        match self {
            ShipClass::Carrier => "cv",
            ShipClass::Battleship => "bb",
            ShipClass::Destroyer => "dd",
            ShipClass::Submarine => "ss",
            ShipClass::PatrolBoat => "pb",
        }
    }

    /// Position of this class in [`ShipClass::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            ShipClass::Carrier => 0,
            ShipClass::Battleship => 1,
            ShipClass::Destroyer => 2,
            ShipClass::Submarine => 3,
            ShipClass::PatrolBoat => 4,
        }
    }

    /// Every class as a set.
    pub fn all() -> BitFlags<ShipClass> {
        BitFlags::all()
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ShipClass {
    type Err = UnknownClassError;

    /// Parse a class from its name or abbreviation, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cv" | "carrier" => Ok(ShipClass::Carrier),
            "bb" | "battleship" => Ok(ShipClass::Battleship),
            "dd" | "destroyer" => Ok(ShipClass::Destroyer),
            "ss" | "sub" | "submarine" => Ok(ShipClass::Submarine),
            "pb" | "patrol" | "patrolboat" | "patrol boat" | "patrol-boat" => {
                Ok(ShipClass::PatrolBoat)
            }
            other => Err(UnknownClassError::new(other)),
        }
    }
}
