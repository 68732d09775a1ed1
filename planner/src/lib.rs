#[cfg(test)]
mod tests;

use std::str::FromStr;
use std::sync::Arc;
use std::time as stdtime;

use model::json_serialisation::{load_planning_instance_from_json, LoadError};
use solution::json_serialisation::plan_to_json;
use solver::{Greedy, MilpPlanner, ObjectiveMode, SolveError, Solver};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlannerChoice {
    /// heuristic allocation, fast and always produces a plan
    Greedy,
    /// exact cost-minimizing assignment
    #[default]
    CostMinimisation,
    /// exact assignment that avoids externalization first, travel second
    PureRouting,
}

impl FromStr for PlannerChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<PlannerChoice, String> {
        match s {
            "greedy" => Ok(PlannerChoice::Greedy),
            "cost" => Ok(PlannerChoice::CostMinimisation),
            "routing" => Ok(PlannerChoice::PureRouting),
            other => Err(format!(
                "unknown planner '{}' (expected greedy, cost or routing)",
                other
            )),
        }
    }
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Loads the instance, runs the chosen planner and returns the plan
/// document. A solver failure (infeasible or no incumbent in time) is
/// returned as an error, never as a silent partial plan.
pub fn run(
    input_data: serde_json::Value,
    choice: PlannerChoice,
) -> Result<serde_json::Value, PlanError> {
    let context = Arc::new(load_planning_instance_from_json(input_data)?);
    let start_time = stdtime::Instant::now();

    info!(?choice, "starting planning run");
    let outcome = match choice {
        PlannerChoice::Greedy => Greedy::initialize(context.clone()).solve()?,
        PlannerChoice::CostMinimisation => {
            MilpPlanner::with_mode(context.clone(), ObjectiveMode::CostMinimisation).solve()?
        }
        PlannerChoice::PureRouting => {
            MilpPlanner::with_mode(context.clone(), ObjectiveMode::PureRouting).solve()?
        }
    };

    let runtime_duration = start_time.elapsed();

    println!("\nPlan summary:");
    println!("  internal units:   {}", outcome.plan.total_internal_units());
    println!("  external units:   {}", outcome.plan.total_external_units());
    println!("  fully internal:   {}", outcome.fully_served_internally);
    println!("  operational cost: {:.2}", outcome.operational.total());
    println!("    {}", outcome.operational);
    println!("  materials cost:   {:.2}", outcome.materials_cost);
    println!("  total cost:       {:.2}", outcome.total_cost());
    println!("Running time: {:0.2}sec", runtime_duration.as_secs_f32());

    Ok(plan_to_json(
        &context,
        &outcome.plan,
        &outcome.operational,
        outcome.materials_cost,
    ))
}
