use model::test_utilities::{default_instance_json, instance_json};

use crate::{run, PlannerChoice};

#[test]
fn greedy_run_produces_the_full_output_document() {
    let output = run(default_instance_json(), PlannerChoice::Greedy).unwrap();

    let records = output["plan"].as_array().unwrap();
    assert!(!records.is_empty());
    let total_units: u64 = records
        .iter()
        .map(|r| r["quantity"].as_u64().unwrap())
        .sum();
    // 15 demanded units appear exactly once across internal and external rows
    assert_eq!(total_units, 15);

    assert!(output["costOperational"].as_f64().unwrap() > 0.0);
    assert_eq!(output["costMaterials"].as_f64().unwrap(), 66.0);
    assert!(
        (output["costTotal"].as_f64().unwrap()
            - output["costOperational"].as_f64().unwrap()
            - output["costMaterials"].as_f64().unwrap())
        .abs()
            < 1e-9
    );
    assert!(output["breakdown"]["salary"].as_f64().unwrap() > 0.0);
}

#[test]
fn milp_run_covers_demand_exactly() {
    let output = run(instance_json(1), PlannerChoice::CostMinimisation).unwrap();

    let records = output["plan"].as_array().unwrap();
    let total_units: u64 = records
        .iter()
        .map(|r| r["quantity"].as_u64().unwrap())
        .sum();
    assert_eq!(total_units, 15);
}

#[test]
fn bad_planner_name_is_rejected() {
    assert!("nearest".parse::<PlannerChoice>().is_err());
    assert_eq!("greedy".parse::<PlannerChoice>(), Ok(PlannerChoice::Greedy));
}
