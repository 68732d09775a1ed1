use crate::base_types::{LocationIdx, TechnicianIdx, TravelMode};
use crate::test_utilities::default_context;

const CENTRAL: LocationIdx = LocationIdx(0);
const NORTHPORT: LocationIdx = LocationIdx(1);
const EASTVALE: LocationIdx = LocationIdx(2);
const SOUTHBAY: LocationIdx = LocationIdx(3);
const FARWELL: LocationIdx = LocationIdx(4);

#[test]
fn land_travel_time_is_distance_over_speed() {
    let context = default_context();
    assert_eq!(context.travel_time(CENTRAL, EASTVALE, TravelMode::Land), 3.0);
    assert_eq!(context.travel_time(CENTRAL, SOUTHBAY, TravelMode::Land), 6.0);
}

#[test]
fn air_travel_time_adds_layover_off_hub() {
    let context = default_context();
    // hub endpoint: raw flight time
    assert_eq!(context.travel_time(CENTRAL, SOUTHBAY, TravelMode::Air), 1.0);
    // neither endpoint is the hub: connection through the hub
    assert_eq!(context.travel_time(EASTVALE, SOUTHBAY, TravelMode::Air), 3.0);
    // no commercial route
    assert!(context
        .travel_time(NORTHPORT, SOUTHBAY, TravelMode::Air)
        .is_infinite());
}

#[test]
fn same_location_travel_is_free() {
    let context = default_context();
    assert_eq!(context.travel_time(CENTRAL, CENTRAL, TravelMode::Land), 0.0);
    assert_eq!(context.travel_time(CENTRAL, CENTRAL, TravelMode::Air), 0.0);
    assert_eq!(context.travel_cost(CENTRAL, CENTRAL, TravelMode::Land), 0.0);
    assert_eq!(context.travel_cost(CENTRAL, CENTRAL, TravelMode::Air), 0.0);
}

#[test]
fn land_travel_cost_is_fuel_plus_toll_plus_surcharge() {
    let context = default_context();
    let cost = context.travel_cost(CENTRAL, EASTVALE, TravelMode::Land);
    let expected = 240.0 * 0.00342 + 0.4 + 0.13;
    assert!((cost - expected).abs() < 1e-9, "cost was {}", cost);
}

#[test]
fn mode_choice_prefers_land_within_threshold() {
    let context = default_context();
    let choice = context.choose_mode(CENTRAL, EASTVALE);
    assert_eq!(choice.mode, TravelMode::Land);
    assert_eq!(choice.hours, 3.0);
}

#[test]
fn mode_choice_switches_to_air_over_threshold() {
    let context = default_context();
    // 6h by land exceeds the 5.6h leg threshold; the 1h flight does not
    let choice = context.choose_mode(CENTRAL, SOUTHBAY);
    assert_eq!(choice.mode, TravelMode::Air);
    assert_eq!(choice.hours, 1.0);
}

#[test]
fn mode_choice_takes_strictly_cheaper_flight() {
    let context = default_context();
    // 300 km by land is well within the threshold, but the regional flight
    // is cheaper than fuel + toll
    let choice = context.choose_mode(EASTVALE, SOUTHBAY);
    assert_eq!(choice.mode, TravelMode::Air);
    assert!((choice.cost - 0.63).abs() < 1e-9);
}

#[test]
fn unreachable_air_leg_never_wins() {
    let context = default_context();
    let choice = context.choose_mode(CENTRAL, NORTHPORT);
    assert_eq!(choice.mode, TravelMode::Land);
    assert!(choice.cost.is_finite());
}

#[test]
fn freight_rule() {
    let context = default_context();
    // never at the technician's own base
    assert!(!context.freight_applies(CENTRAL, CENTRAL, TravelMode::Land));
    // air legs always ship the kits
    assert!(context.freight_applies(SOUTHBAY, CENTRAL, TravelMode::Air));
    // land legs ship only where the freight table lists a charge
    assert!(context.freight_applies(EASTVALE, CENTRAL, TravelMode::Land));
    assert!(!context.freight_applies(CENTRAL, SOUTHBAY, TravelMode::Land));
}

#[test]
fn salary_proration() {
    let context = default_context();
    let ana = context.technicians().get(TechnicianIdx::of(0));
    // 48 weekly hours * 4 weeks / 180 monthly hours * 14.7
    let expected = 14.7 * (48.0 * 4.0) / 180.0;
    assert!((context.salary_for_project(ana) - expected).abs() < 1e-9);

    let bruno = context.technicians().get(TechnicianIdx::of(1));
    let expected = 14.7 * (36.0 * 4.0) / 180.0;
    assert!((context.salary_for_project(bruno) - expected).abs() < 1e-9);
}

#[test]
fn external_cost_adds_freight_off_hub() {
    let context = default_context();
    assert_eq!(context.external_unit_cost(NORTHPORT, 4), 1.7 * 4.0 + 0.3);
    // the hub pays no vendor freight
    assert_eq!(context.external_unit_cost(CENTRAL, 2), 5.6);
    assert_eq!(context.external_unit_cost(FARWELL, 0), 0.0);
}

#[test]
fn materials_cost_prices_kit_mix() {
    let context = default_context();
    // 2 one-unit kits + 1 two-unit kit
    assert!((context.materials_cost(NORTHPORT) - (2.0 * 4.4 + 8.8)).abs() < 1e-9);
    assert!((context.total_materials_cost() - 66.0).abs() < 1e-9);
}
