pub mod base_types;
pub mod config;
pub mod context;
pub mod costs;
pub mod demand;
pub mod json_serialisation;
pub mod locations;
pub mod technicians;
pub mod test_utilities;
pub mod vendor;

pub use context::PlanningContext;
