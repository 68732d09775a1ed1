pub mod cost_ledger;
pub mod itinerary;
pub mod json_serialisation;
mod plan;

pub use cost_ledger::CostLedger;
pub use plan::{Assignee, Plan, PlanRecord};
