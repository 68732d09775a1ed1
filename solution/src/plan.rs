#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fmt;

use im::Vector;
use model::base_types::{DayIndex, LocationIdx, TechnicianIdx, UnitCount};

/// who serves a plan record: an internal technician or the external vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assignee {
    Technician(TechnicianIdx),
    External,
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Assignee::Technician(t) => write!(f, "tech{}", t),
            Assignee::External => write!(f, "external"),
        }
    }
}

/// The atomic output unit: on `day`, `assignee` is at `location` and installs
/// `quantity` units there. External records carry day 0 (no calendar
/// placement). Records are never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanRecord {
    pub assignee: Assignee,
    pub day: DayIndex,
    pub location: LocationIdx,
    pub quantity: UnitCount,
}

impl PlanRecord {
    pub fn internal(
        technician: TechnicianIdx,
        day: DayIndex,
        location: LocationIdx,
        quantity: UnitCount,
    ) -> PlanRecord {
        PlanRecord {
            assignee: Assignee::Technician(technician),
            day,
            location,
            quantity,
        }
    }

    pub fn external(location: LocationIdx, quantity: UnitCount) -> PlanRecord {
        PlanRecord {
            assignee: Assignee::External,
            day: 0,
            location,
            quantity,
        }
    }

    pub fn is_external(&self) -> bool {
        self.assignee == Assignee::External
    }
}

/// An immutable list of plan records. Modifications create a new plan via
/// structural sharing, the existing plan stays untouched.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    records: Vector<PlanRecord>,
}

// static functions
impl Plan {
    pub fn empty() -> Plan {
        Plan {
            records: Vector::new(),
        }
    }

    pub fn from_records(records: impl IntoIterator<Item = PlanRecord>) -> Plan {
        Plan {
            records: records.into_iter().collect(),
        }
    }
}

// methods
impl Plan {
    pub fn with_record(&self, record: PlanRecord) -> Plan {
        let mut records = self.records.clone();
        records.push_back(record);
        Plan { records }
    }

    pub fn with_records(&self, new_records: impl IntoIterator<Item = PlanRecord>) -> Plan {
        let mut records = self.records.clone();
        records.extend(new_records);
        Plan { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records_iter(&self) -> impl Iterator<Item = &PlanRecord> {
        self.records.iter()
    }

    pub fn records_of(&self, technician: TechnicianIdx) -> impl Iterator<Item = &PlanRecord> {
        self.records
            .iter()
            .filter(move |r| r.assignee == Assignee::Technician(technician))
    }

    pub fn internal_units(&self, location: LocationIdx) -> UnitCount {
        self.records
            .iter()
            .filter(|r| !r.is_external() && r.location == location)
            .map(|r| r.quantity)
            .sum()
    }

    pub fn external_units(&self, location: LocationIdx) -> UnitCount {
        self.records
            .iter()
            .filter(|r| r.is_external() && r.location == location)
            .map(|r| r.quantity)
            .sum()
    }

    pub fn total_internal_units(&self) -> UnitCount {
        self.records
            .iter()
            .filter(|r| !r.is_external())
            .map(|r| r.quantity)
            .sum()
    }

    pub fn total_external_units(&self) -> UnitCount {
        self.records
            .iter()
            .filter(|r| r.is_external())
            .map(|r| r.quantity)
            .sum()
    }

    /// a technician can be in at most one place per day
    pub fn max_one_location_per_day(&self) -> bool {
        let mut seen: HashSet<(TechnicianIdx, DayIndex)> = HashSet::new();
        let mut locations: HashSet<(TechnicianIdx, DayIndex, LocationIdx)> = HashSet::new();
        for record in self.records.iter() {
            if let Assignee::Technician(t) = record.assignee {
                if locations.insert((t, record.day, record.location))
                    && !seen.insert((t, record.day))
                {
                    return false;
                }
            }
        }
        true
    }
}
