pub mod greedy;
pub mod milp;

use std::sync::Arc;

use model::base_types::Cost;
use model::PlanningContext;
use solution::{CostLedger, Plan};
use thiserror::Error;

pub use greedy::Greedy;
pub use milp::{MilpPlanner, ObjectiveMode};

/// A finished planning run: the plan records, the aggregate operational
/// ledger and the materials bill. Demand is fully covered by construction:
/// whatever could not be served internally appears as external records.
pub struct PlanningOutcome {
    pub plan: Plan,
    pub operational: CostLedger,
    pub materials_cost: Cost,
    /// false when internal capacity ran out and demand had to be pushed to
    /// the vendor beyond what the planner chose voluntarily
    pub fully_served_internally: bool,
}

impl PlanningOutcome {
    pub fn total_cost(&self) -> Cost {
        self.operational.total() + self.materials_cost
    }
}

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("solver finished with status {0}; no usable plan")]
    Status(String),
    #[error("solver produced no incumbent within the time limit")]
    NoIncumbent,
}

pub trait Solver {
    fn initialize(context: Arc<PlanningContext>) -> Self;

    fn solve(&self) -> Result<PlanningOutcome, SolveError>;
}
