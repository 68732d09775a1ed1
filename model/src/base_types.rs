use derive_more::Display;
use derive_more::From;

pub type Idx = u16;

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationIdx(pub Idx);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TechnicianIdx(pub Idx);

impl LocationIdx {
    pub fn of(idx: usize) -> LocationIdx {
        LocationIdx(idx as Idx)
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl TechnicianIdx {
    pub fn of(idx: usize) -> TechnicianIdx {
        TechnicianIdx(idx as Idx)
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

/// 1-based project calendar day. Day 0 is reserved for externalized demand,
/// which has no calendar placement.
pub type DayIndex = u32;

pub type UnitCount = u32;

/// all monetary values share the currency unit of the input tables
pub type Cost = f64;

pub type HoursValue = f64;

/// cost/time of a leg that cannot be travelled (no commercial flight)
pub const PROHIBITIVE: f64 = f64::INFINITY;

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelMode {
    #[display(fmt = "land")]
    Land,
    #[display(fmt = "air")]
    Air,
}
