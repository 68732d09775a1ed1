use itertools::Itertools;
use model::base_types::{Cost, DayIndex, UnitCount};
use model::PlanningContext;
use serde::{Deserialize, Serialize};

use crate::cost_ledger::CostLedger;
use crate::plan::{Assignee, Plan};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonPlanRecord {
    tech: String,
    day: DayIndex,
    city: String,
    quantity: UnitCount,
    #[serde(rename = "type")]
    record_type: JsonRecordType,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
enum JsonRecordType {
    #[serde(rename = "INTERNAL")]
    Internal,
    #[serde(rename = "EXTERNAL")]
    External,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonCostBreakdown {
    salary: Cost,
    travel: Cost,
    lodging: Cost,
    meals: Cost,
    incentive: Cost,
    external: Cost,
    freight: Cost,
}

/// Flattens a plan and its aggregate ledger into the output document
/// consumed by all downstream reporting. Internal records come first,
/// ordered by technician and day; external records follow, ordered by city.
pub fn plan_to_json(
    context: &PlanningContext,
    plan: &Plan,
    operational: &CostLedger,
    materials_cost: Cost,
) -> serde_json::Value {
    let records: Vec<JsonPlanRecord> = plan
        .records_iter()
        .sorted_by_key(|r| {
            let assignee_rank = match r.assignee {
                Assignee::Technician(t) => (0, t.as_usize()),
                Assignee::External => (1, 0),
            };
            (assignee_rank, r.day, r.location)
        })
        .map(|r| {
            let (tech, record_type) = match r.assignee {
                Assignee::Technician(t) => (
                    context.technicians().get(t).name().to_string(),
                    JsonRecordType::Internal,
                ),
                Assignee::External => (String::from("external"), JsonRecordType::External),
            };
            JsonPlanRecord {
                tech,
                day: r.day,
                city: context.locations().name(r.location).to_string(),
                quantity: r.quantity,
                record_type,
            }
        })
        .collect();

    let operational_total = operational.total();
    serde_json::json!({
        "plan": records,
        "costOperational": operational_total,
        "costMaterials": materials_cost,
        "costTotal": operational_total + materials_cost,
        "breakdown": JsonCostBreakdown {
            salary: operational.salary,
            travel: operational.travel,
            lodging: operational.lodging,
            meals: operational.meals,
            incentive: operational.incentive,
            external: operational.external,
            freight: operational.freight,
        },
    })
}

pub fn write_plan_to_json(
    context: &PlanningContext,
    plan: &Plan,
    operational: &CostLedger,
    materials_cost: Cost,
    path: &str,
) -> Result<(), std::io::Error> {
    let json_output = plan_to_json(context, plan, operational, materials_cost);
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &json_output)?;
    Ok(())
}

#[cfg(test)]
mod tests;
