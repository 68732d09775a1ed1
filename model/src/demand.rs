use crate::base_types::{LocationIdx, UnitCount};

/// Per-location demand, split by kit type: vehicles that need one unit take
/// a 1-unit kit, vehicles that need two units take a 2-unit kit.
pub struct Demand {
    one_kit_vehicles: Vec<UnitCount>,
    two_kit_vehicles: Vec<UnitCount>,
}

impl Demand {
    pub fn new(one_kit_vehicles: Vec<UnitCount>, two_kit_vehicles: Vec<UnitCount>) -> Demand {
        Demand {
            one_kit_vehicles,
            two_kit_vehicles,
        }
    }

    pub fn one_kit_vehicles(&self, location: LocationIdx) -> UnitCount {
        self.one_kit_vehicles[location.as_usize()]
    }

    pub fn two_kit_vehicles(&self, location: LocationIdx) -> UnitCount {
        self.two_kit_vehicles[location.as_usize()]
    }

    /// total units to install at the location
    pub fn units(&self, location: LocationIdx) -> UnitCount {
        self.one_kit_vehicles[location.as_usize()] + 2 * self.two_kit_vehicles[location.as_usize()]
    }

    pub fn total_units(&self) -> UnitCount {
        (0..self.one_kit_vehicles.len())
            .map(|i| self.units(LocationIdx::of(i)))
            .sum()
    }
}
