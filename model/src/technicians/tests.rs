use crate::base_types::{LocationIdx, TechnicianIdx};
use crate::technicians::Technician;
use crate::test_utilities::default_context;

#[test]
fn full_time_capacity() {
    let context = default_context();
    let ana = context.technicians().get(TechnicianIdx::of(0));

    assert_eq!(ana.daily_hours(context.config()), 8.0);
    assert_eq!(ana.installs_per_day(context.config()), 3);
    assert_eq!(ana.available_project_days(context.config()), 24);
}

#[test]
fn fractional_fte_rounds_days_down() {
    let context = default_context();
    let bruno = context.technicians().get(TechnicianIdx::of(1));

    // 0.75 FTE on a 24-day horizon
    assert_eq!(bruno.available_project_days(context.config()), 18);
    assert_eq!(bruno.daily_hours(context.config()), 6.0);
    assert_eq!(bruno.installs_per_day(context.config()), 2);
}

#[test]
fn zero_fte_has_no_capacity() {
    let context = default_context();
    let idle = Technician::new(
        TechnicianIdx::of(9),
        String::from("Idle"),
        LocationIdx::of(0),
        14.7,
        0.0,
    );

    assert_eq!(idle.daily_hours(context.config()), 0.0);
    assert_eq!(idle.installs_per_day(context.config()), 0);
    assert_eq!(idle.available_project_days(context.config()), 0);
    assert!(!idle.has_capacity(context.config()));
}
