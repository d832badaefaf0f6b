use enumflags2::BitFlags;

use crate::ships::{ShipClass, Vessel};

/// One slot per [`ShipClass`], each holding the placed ship of that class, if any.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Fleet {
    slots: [Option<Vessel>; 5],
}

impl Fleet {
    /// Create a fleet with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the ship in the given slot.
    pub fn get(&self, class: ShipClass) -> Option<&Vessel> {
        self.slots[class.index()].as_ref()
    }

    /// Mutably get the ship in the given slot.
    pub(crate) fn get_mut(&mut self, class: ShipClass) -> Option<&mut Vessel> {
        self.slots[class.index()].as_mut()
    }

    /// Put a ship in the slot for its class, returning whatever was there before.
    pub(crate) fn insert(&mut self, vessel: Vessel) -> Option<Vessel> {
        self.slots[vessel.class().index()].replace(vessel)
    }

    /// Empty the given slot.
    pub(crate) fn take(&mut self, class: ShipClass) -> Option<Vessel> {
        self.slots[class.index()].take()
    }

    /// Iterate the ships in the filled slots.
    pub fn iter(&self) -> impl Iterator<Item = &Vessel> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Classes whose slot is still empty.
    pub fn pending(&self) -> BitFlags<ShipClass> {
        ShipClass::ALL
            .iter()
            .filter(|class| self.get(**class).is_none())
            .fold(BitFlags::empty(), |set, &class| set | class)
    }

    /// Classes whose ship has been destroyed.
    pub fn destroyed(&self) -> BitFlags<ShipClass> {
        self.iter()
            .filter(|ship| ship.is_destroyed())
            .fold(BitFlags::empty(), |set, ship| set | ship.class())
    }

    /// Returns true if every slot holds a ship.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Returns true if every slot holds a ship and all of them are destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.destroyed() == ShipClass::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fleet_has_everything_pending() {
        let fleet = Fleet::new();
        assert_eq!(fleet.pending(), ShipClass::all());
        assert!(!fleet.is_complete());
        assert!(!fleet.all_destroyed());
        assert_eq!(fleet.iter().count(), 0);
    }

    #[test]
    fn slots_are_keyed_by_class() {
        let mut fleet = Fleet::new();
        assert!(fleet.insert(Vessel::new(ShipClass::Submarine)).is_none());
        assert_eq!(
            fleet.get(ShipClass::Submarine).map(Vessel::class),
            Some(ShipClass::Submarine)
        );
        assert!(fleet.get(ShipClass::Destroyer).is_none());
        assert_eq!(fleet.pending(), ShipClass::all() & !BitFlags::from(ShipClass::Submarine));
        assert!(fleet.take(ShipClass::Submarine).is_some());
        assert_eq!(fleet.pending(), ShipClass::all());
    }

    #[test]
    fn all_destroyed_requires_every_slot() {
        let mut fleet = Fleet::new();
        let mut boat = Vessel::new(ShipClass::PatrolBoat);
        boat.hit(0).unwrap();
        boat.hit(1).unwrap();
        fleet.insert(boat);
        assert!(!fleet.all_destroyed());

        for &class in &ShipClass::ALL[..4] {
            let mut ship = Vessel::new(class);
            for i in 0..ship.len() {
                ship.hit(i).unwrap();
            }
            fleet.insert(ship);
        }
        assert!(fleet.is_complete());
        assert!(fleet.all_destroyed());
    }
}
