use model::base_types::{LocationIdx, TechnicianIdx};
use model::test_utilities::default_context;

use crate::cost_ledger::CostLedger;
use crate::json_serialisation::plan_to_json;
use crate::plan::{Plan, PlanRecord};

const CENTRAL: LocationIdx = LocationIdx(0);
const NORTHPORT: LocationIdx = LocationIdx(1);
const FARWELL: LocationIdx = LocationIdx(4);

const ANA: TechnicianIdx = TechnicianIdx(0);

#[test]
fn plan_serialises_to_flat_records_and_totals() {
    let context = default_context();
    let plan = Plan::from_records([
        PlanRecord::internal(ANA, 2, NORTHPORT, 2),
        PlanRecord::internal(ANA, 1, CENTRAL, 3),
        PlanRecord::external(FARWELL, 2),
    ]);
    let ledger = CostLedger {
        salary: 10.0,
        travel: 3.0,
        lodging: 2.2,
        meals: 1.0,
        incentive: 4.35,
        external: 6.9,
        freight: 0.3,
    };

    let json = plan_to_json(&context, &plan, &ledger, 66.0);

    let records = json["plan"].as_array().unwrap();
    assert_eq!(records.len(), 3);
    // internal records first, ordered by day; externals last
    assert_eq!(records[0]["tech"], "Ana");
    assert_eq!(records[0]["day"], 1);
    assert_eq!(records[0]["city"], "Central");
    assert_eq!(records[0]["quantity"], 3);
    assert_eq!(records[0]["type"], "INTERNAL");
    assert_eq!(records[1]["day"], 2);
    assert_eq!(records[2]["tech"], "external");
    assert_eq!(records[2]["type"], "EXTERNAL");
    assert_eq!(records[2]["city"], "Farwell");

    let operational = 10.0 + 3.0 + 2.2 + 1.0 + 4.35 + 6.9 + 0.3;
    assert!((json["costOperational"].as_f64().unwrap() - operational).abs() < 1e-9);
    assert_eq!(json["costMaterials"].as_f64().unwrap(), 66.0);
    assert!((json["costTotal"].as_f64().unwrap() - (operational + 66.0)).abs() < 1e-9);
    assert_eq!(json["breakdown"]["lodging"].as_f64().unwrap(), 2.2);
}
