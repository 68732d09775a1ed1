use crate::base_types::{Cost, HoursValue};

pub struct Config {
    pub calendar: ConfigCalendar,
    pub rates: ConfigRates,
    pub travel: ConfigTravel,
    pub solver: ConfigSolver,
}

pub struct ConfigCalendar {
    pub days_per_week: u32,
    pub project_weeks: u32,
    pub shift_hours: HoursValue,
    pub install_time_hours: HoursValue,
}

pub struct ConfigRates {
    pub incentive_per_unit: Cost,
    pub lodging_per_night: Cost,
    pub meal_per_day: Cost,
    pub fuel_per_km: Cost,
    pub trip_surcharge: Cost,
    pub monthly_hours_base: HoursValue,
}

pub struct ConfigTravel {
    pub land_speed_kmh: f64,
    pub layover_hours: HoursValue,
    /// hard cap on a single travel leg; also the land/air mode-switch threshold
    pub leg_threshold_hours: HoursValue,
    /// operating-radius ceiling: land travel cost from a technician's base
    /// above this value makes the destination unreachable for that technician
    pub max_base_travel_cost: Cost,
}

pub struct ConfigSolver {
    pub time_limit_secs: f64,
}

impl Config {
    pub fn total_project_days(&self) -> u32 {
        self.calendar.days_per_week * self.calendar.project_weeks
    }

    /// day 7, 14, 21, ... of the 1-based project calendar is a rest day
    pub fn is_rest_day(&self, day: u32) -> bool {
        day > 0 && day % 7 == 0
    }
}
