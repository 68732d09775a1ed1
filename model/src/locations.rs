use std::collections::HashMap;

use crate::base_types::{Cost, HoursValue, LocationIdx};

/// All per-location reference data for one planning run: the name table and
/// the four square travel matrices (road distance, road tolls, flight time,
/// flight cost), the forced-externalization set and the flight-network hub.
///
/// Matrix indices equal the indices in the name vector equal the index stored
/// in each `LocationIdx`. A `None` flight entry means there is no commercial
/// route between the two locations.
pub struct Locations {
    names: Vec<String>,
    name_to_idx: HashMap<String, LocationIdx>,
    distances_km: Vec<Vec<f64>>,
    road_tolls: Vec<Vec<Cost>>,
    flight_hours: Vec<Vec<Option<HoursValue>>>,
    flight_costs: Vec<Vec<Option<Cost>>>,
    forced_external: Vec<bool>,
    hub: LocationIdx,
}

// static functions
impl Locations {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        names: Vec<String>,
        distances_km: Vec<Vec<f64>>,
        road_tolls: Vec<Vec<Cost>>,
        flight_hours: Vec<Vec<Option<HoursValue>>>,
        flight_costs: Vec<Vec<Option<Cost>>>,
        forced_external: Vec<bool>,
        hub: LocationIdx,
    ) -> Locations {
        let name_to_idx = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), LocationIdx::of(i)))
            .collect();
        Locations {
            names,
            name_to_idx,
            distances_km,
            road_tolls,
            flight_hours,
            flight_costs,
            forced_external,
            hub,
        }
    }
}

// methods
impl Locations {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = LocationIdx> {
        (0..self.names.len()).map(LocationIdx::of)
    }

    pub fn get(&self, name: &str) -> Result<LocationIdx, &'static str> {
        match self.name_to_idx.get(name) {
            Some(idx) => Ok(*idx),
            None => Err("Location name is unknown."),
        }
    }

    pub fn name(&self, location: LocationIdx) -> &str {
        &self.names[location.as_usize()]
    }

    pub fn hub(&self) -> LocationIdx {
        self.hub
    }

    pub fn is_forced_external(&self, location: LocationIdx) -> bool {
        self.forced_external[location.as_usize()]
    }

    pub fn distance_km(&self, a: LocationIdx, b: LocationIdx) -> f64 {
        if a == b {
            return 0.0;
        }
        self.distances_km[a.as_usize()][b.as_usize()]
    }

    pub fn road_toll(&self, a: LocationIdx, b: LocationIdx) -> Cost {
        if a == b {
            return 0.0;
        }
        self.road_tolls[a.as_usize()][b.as_usize()]
    }

    pub fn flight_hours(&self, a: LocationIdx, b: LocationIdx) -> Option<HoursValue> {
        if a == b {
            return Some(0.0);
        }
        self.flight_hours[a.as_usize()][b.as_usize()]
    }

    pub fn flight_cost(&self, a: LocationIdx, b: LocationIdx) -> Option<Cost> {
        if a == b {
            return Some(0.0);
        }
        self.flight_costs[a.as_usize()][b.as_usize()]
    }
}
