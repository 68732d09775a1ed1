use crate::base_types::{Cost, HoursValue, LocationIdx, TravelMode, UnitCount, PROHIBITIVE};
use crate::context::PlanningContext;
use crate::technicians::Technician;

/// outcome of the land/air mode selection for one travel leg
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeChoice {
    pub mode: TravelMode,
    pub cost: Cost,
    pub hours: HoursValue,
}

// unit-cost model; all methods are pure lookups and arithmetic
impl PlanningContext {
    /// travel time of a single leg in hours. Land legs are distance over the
    /// configured speed; air legs are the flight-time lookup plus a layover
    /// penalty when neither endpoint is the network hub. An impossible air
    /// leg is infinite.
    pub fn travel_time(&self, origin: LocationIdx, dest: LocationIdx, mode: TravelMode) -> HoursValue {
        if origin == dest {
            return 0.0;
        }
        match mode {
            TravelMode::Land => {
                let speed = self.config().travel.land_speed_kmh;
                if speed <= 0.0 {
                    return PROHIBITIVE;
                }
                self.locations().distance_km(origin, dest) / speed
            }
            TravelMode::Air => match self.locations().flight_hours(origin, dest) {
                Some(hours) => {
                    let hub = self.locations().hub();
                    if origin != hub && dest != hub {
                        hours + self.config().travel.layover_hours
                    } else {
                        hours
                    }
                }
                None => PROHIBITIVE,
            },
        }
    }

    /// travel cost of a single leg. Land legs pay fuel by distance, the toll
    /// lookup and the flat per-trip surcharge; air legs pay the flight-cost
    /// lookup plus the surcharge. An impossible air leg is infinite.
    pub fn travel_cost(&self, origin: LocationIdx, dest: LocationIdx, mode: TravelMode) -> Cost {
        if origin == dest {
            return 0.0;
        }
        let surcharge = self.config().rates.trip_surcharge;
        match mode {
            TravelMode::Land => {
                self.locations().distance_km(origin, dest) * self.config().rates.fuel_per_km
                    + self.locations().road_toll(origin, dest)
                    + surcharge
            }
            TravelMode::Air => match self.locations().flight_cost(origin, dest) {
                Some(cost) => cost + surcharge,
                None => PROHIBITIVE,
            },
        }
    }

    /// Selects land unless the land leg exceeds the single-leg threshold
    /// while the air leg stays within it, or the air leg is strictly cheaper.
    pub fn choose_mode(&self, origin: LocationIdx, dest: LocationIdx) -> ModeChoice {
        if origin == dest {
            return ModeChoice {
                mode: TravelMode::Land,
                cost: 0.0,
                hours: 0.0,
            };
        }
        let land = ModeChoice {
            mode: TravelMode::Land,
            cost: self.travel_cost(origin, dest, TravelMode::Land),
            hours: self.travel_time(origin, dest, TravelMode::Land),
        };
        let air = ModeChoice {
            mode: TravelMode::Air,
            cost: self.travel_cost(origin, dest, TravelMode::Air),
            hours: self.travel_time(origin, dest, TravelMode::Air),
        };
        let threshold = self.config().travel.leg_threshold_hours;
        if (land.hours > threshold && air.hours <= threshold) || air.cost < land.cost {
            air
        } else {
            land
        }
    }

    /// cheapest cost over both modes, used for transition pricing where only
    /// the money matters (impossible legs drop out through the infinity
    /// sentinel)
    pub fn cheapest_travel_cost(&self, origin: LocationIdx, dest: LocationIdx) -> Cost {
        self.travel_cost(origin, dest, TravelMode::Land)
            .min(self.travel_cost(origin, dest, TravelMode::Air))
    }

    /// Freight is charged when materials must be shipped to a destination
    /// outside the technician's base: always for air legs (kits cannot ride
    /// along), for land legs whenever the freight table lists a charge.
    pub fn freight_applies(&self, dest: LocationIdx, base: LocationIdx, mode: TravelMode) -> bool {
        if dest == base {
            return false;
        }
        match mode {
            TravelMode::Air => true,
            TravelMode::Land => self.vendor().freight_charge(dest) > 0.0,
        }
    }

    /// monthly salary prorated over the project horizon:
    /// salary * (weekly hours * project weeks) / monthly hours base
    pub fn salary_for_project(&self, technician: &Technician) -> Cost {
        let calendar = &self.config().calendar;
        let weekly_hours =
            technician.fte() * calendar.days_per_week as f64 * calendar.shift_hours;
        let base = self.config().rates.monthly_hours_base;
        if base <= 0.0 {
            return 0.0;
        }
        technician.monthly_salary() * (weekly_hours * calendar.project_weeks as f64) / base
    }

    /// vendor PxQ price for externalizing `quantity` units at a location,
    /// plus the flat freight charge when the vendor has to ship from the hub
    pub fn external_unit_cost(&self, location: LocationIdx, quantity: UnitCount) -> Cost {
        if quantity == 0 {
            return 0.0;
        }
        let service = self.vendor().unit_rate(location) * quantity as f64;
        let freight = if location != self.locations().hub() {
            self.vendor().freight_charge(location)
        } else {
            0.0
        };
        service + freight
    }

    /// kit purchase cost for the full demand mix at a location
    pub fn materials_cost(&self, location: LocationIdx) -> Cost {
        self.demand().one_kit_vehicles(location) as f64 * self.vendor().one_kit_price()
            + self.demand().two_kit_vehicles(location) as f64 * self.vendor().two_kit_price()
    }

    pub fn total_materials_cost(&self) -> Cost {
        self.locations().iter().map(|l| self.materials_cost(l)).sum()
    }
}

#[cfg(test)]
mod tests;
