use model::base_types::{LocationIdx, TechnicianIdx};

use crate::plan::{Plan, PlanRecord};

const CENTRAL: LocationIdx = LocationIdx(0);
const NORTHPORT: LocationIdx = LocationIdx(1);

const ANA: TechnicianIdx = TechnicianIdx(0);
const BRUNO: TechnicianIdx = TechnicianIdx(1);

#[test]
fn external_records_have_no_calendar_day() {
    let record = PlanRecord::external(NORTHPORT, 4);
    assert!(record.is_external());
    assert_eq!(record.day, 0);
}

#[test]
fn adding_records_leaves_the_original_untouched() {
    let plan = Plan::empty().with_record(PlanRecord::internal(ANA, 1, CENTRAL, 3));
    let extended = plan.with_record(PlanRecord::internal(ANA, 2, CENTRAL, 1));

    assert_eq!(plan.len(), 1);
    assert_eq!(extended.len(), 2);
    assert_eq!(plan.internal_units(CENTRAL), 3);
    assert_eq!(extended.internal_units(CENTRAL), 4);
}

#[test]
fn unit_sums_split_internal_and_external() {
    let plan = Plan::from_records([
        PlanRecord::internal(ANA, 1, CENTRAL, 3),
        PlanRecord::internal(BRUNO, 1, NORTHPORT, 2),
        PlanRecord::internal(BRUNO, 2, NORTHPORT, 1),
        PlanRecord::external(NORTHPORT, 5),
    ]);

    assert_eq!(plan.internal_units(NORTHPORT), 3);
    assert_eq!(plan.external_units(NORTHPORT), 5);
    assert_eq!(plan.total_internal_units(), 6);
    assert_eq!(plan.total_external_units(), 5);
}

#[test]
fn one_location_per_day_detects_a_split_technician() {
    let valid = Plan::from_records([
        PlanRecord::internal(ANA, 1, CENTRAL, 3),
        PlanRecord::internal(ANA, 2, NORTHPORT, 2),
        PlanRecord::internal(BRUNO, 1, NORTHPORT, 2),
    ]);
    assert!(valid.max_one_location_per_day());

    let invalid = valid.with_record(PlanRecord::internal(ANA, 1, NORTHPORT, 1));
    assert!(!invalid.max_one_location_per_day());

    // two records at the same place on the same day are fine
    let duplicated = valid.with_record(PlanRecord::internal(ANA, 1, CENTRAL, 1));
    assert!(duplicated.max_one_location_per_day());
}

#[test]
fn external_records_never_violate_daily_uniqueness() {
    let plan = Plan::from_records([
        PlanRecord::external(CENTRAL, 2),
        PlanRecord::external(NORTHPORT, 3),
    ]);
    assert!(plan.max_one_location_per_day());
}
