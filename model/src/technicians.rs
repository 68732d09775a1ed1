use crate::base_types::{Cost, HoursValue, LocationIdx, TechnicianIdx, UnitCount};
use crate::config::Config;

pub struct Technicians {
    technicians: Vec<Technician>,
}

impl Technicians {
    pub fn new(technicians: Vec<Technician>) -> Technicians {
        Technicians { technicians }
    }

    pub fn len(&self) -> usize {
        self.technicians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technicians.is_empty()
    }

    pub fn get(&self, idx: TechnicianIdx) -> &Technician {
        &self.technicians[idx.as_usize()]
    }

    /// roster order, which is also the deterministic tie-break order
    pub fn iter(&self) -> impl Iterator<Item = TechnicianIdx> {
        (0..self.technicians.len()).map(TechnicianIdx::of)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Technician {
    idx: TechnicianIdx,
    name: String,
    home_base: LocationIdx,
    monthly_salary: Cost,
    fte: f64,
}

impl Technician {
    pub fn new(
        idx: TechnicianIdx,
        name: String,
        home_base: LocationIdx,
        monthly_salary: Cost,
        fte: f64,
    ) -> Technician {
        Technician {
            idx,
            name,
            home_base,
            monthly_salary,
            fte,
        }
    }

    pub fn idx(&self) -> TechnicianIdx {
        self.idx
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn home_base(&self) -> LocationIdx {
        self.home_base
    }

    pub fn monthly_salary(&self) -> Cost {
        self.monthly_salary
    }

    pub fn fte(&self) -> f64 {
        self.fte
    }
}

// capacity model
impl Technician {
    pub fn daily_hours(&self, config: &Config) -> HoursValue {
        self.fte * config.calendar.shift_hours
    }

    pub fn installs_per_day(&self, config: &Config) -> UnitCount {
        let hours = self.daily_hours(config);
        if hours <= 0.0 || config.calendar.install_time_hours <= 0.0 {
            return 0;
        }
        (hours / config.calendar.install_time_hours).floor() as UnitCount
    }

    pub fn available_project_days(&self, config: &Config) -> u32 {
        (self.fte * config.total_project_days() as f64).floor() as u32
    }

    /// a technician with no effective capacity can never be assigned work
    pub fn has_capacity(&self, config: &Config) -> bool {
        self.daily_hours(config) > 0.0
            && self.installs_per_day(config) > 0
            && self.available_project_days(config) > 0
    }
}

#[cfg(test)]
mod tests;
