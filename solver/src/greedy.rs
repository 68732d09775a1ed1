
use std::collections::HashMap;
use std::sync::Arc;

use model::base_types::{HoursValue, LocationIdx, TechnicianIdx, TravelMode, UnitCount};
use model::PlanningContext;
use solution::itinerary::simulate;
use solution::{CostLedger, Plan, PlanRecord};
use tracing::{debug, info};

use crate::{PlanningOutcome, SolveError, Solver};

/// Deterministic heuristic allocator: every technician first consumes demand
/// at their own base, then the least-loaded technician repeatedly takes the
/// nearest reachable city with open demand until budgets or reachability run
/// out. Whatever remains is externalized.
pub struct Greedy {
    context: Arc<PlanningContext>,
}

struct TechState {
    current_city: LocationIdx,
    days_used: f64,
    active: bool,
}

impl Solver for Greedy {
    fn initialize(context: Arc<PlanningContext>) -> Greedy {
        Greedy { context }
    }

    fn solve(&self) -> Result<PlanningOutcome, SolveError> {
        let context = &self.context;
        let config = context.config();
        let technicians = context.technicians();

        // open internal demand; forced-external cities go straight to the vendor
        let mut open: HashMap<LocationIdx, UnitCount> = HashMap::new();
        let mut external: HashMap<LocationIdx, UnitCount> = HashMap::new();
        for location in context.locations().iter() {
            let units = context.demand().units(location);
            if units == 0 {
                continue;
            }
            if context.locations().is_forced_external(location) {
                external.insert(location, units);
            } else {
                open.insert(location, units);
            }
        }

        let mut states: Vec<TechState> = Vec::with_capacity(technicians.len());
        let mut assigned: Vec<HashMap<LocationIdx, UnitCount>> =
            vec![HashMap::new(); technicians.len()];
        let mut visit_order: Vec<Vec<LocationIdx>> = vec![Vec::new(); technicians.len()];

        // anchor phase: every technician consumes demand at home first
        for t in technicians.iter() {
            let tech = technicians.get(t);
            let base = tech.home_base();
            let mut state = TechState {
                current_city: base,
                days_used: 0.0,
                active: tech.has_capacity(config),
            };
            if !state.active {
                debug!(technician = tech.name(), "no effective capacity, excluded");
                states.push(state);
                continue;
            }
            let installs_per_day = tech.installs_per_day(config);
            let budget = tech.available_project_days(config);
            if let Some(base_open) = open.get_mut(&base) {
                let take = (*base_open).min(budget * installs_per_day);
                if take > 0 {
                    *base_open -= take;
                    *assigned[t.as_usize()].entry(base).or_insert(0) += take;
                    visit_order[t.as_usize()].push(base);
                    state.days_used += take as f64 / installs_per_day as f64;
                    debug!(
                        technician = tech.name(),
                        base = context.locations().name(base),
                        take,
                        "anchored at home base"
                    );
                }
            }
            states.push(state);
        }

        // iterative phase: least-loaded technician takes the nearest
        // reachable open city
        loop {
            open.retain(|_, q| *q > 0);
            if open.is_empty() {
                break;
            }
            let Some(current) = least_loaded_active(technicians.iter(), &states) else {
                break;
            };
            let tech = technicians.get(current);
            let state = &states[current.as_usize()];

            let target = open
                .keys()
                .filter_map(|c| {
                    reachable_travel_hours(context, state.current_city, *c).map(|tv| (*c, tv))
                })
                .min_by(|(c1, tv1), (c2, tv2)| tv1.total_cmp(tv2).then(c1.cmp(c2)));

            let Some((city, travel_hours)) = target else {
                debug!(
                    technician = tech.name(),
                    at = context.locations().name(state.current_city),
                    "no reachable open city, deactivating"
                );
                states[current.as_usize()].active = false;
                continue;
            };

            let installs_per_day = tech.installs_per_day(config);
            let budget = tech.available_project_days(config) as f64;
            let travel_days = travel_hours / tech.daily_hours(config);
            let days_left = budget - state.days_used - travel_days;
            let max_quantity = (days_left * installs_per_day as f64).floor().max(0.0) as UnitCount;
            let take = open[&city].min(max_quantity);

            if take == 0 {
                debug!(technician = tech.name(), "day budget exhausted, deactivating");
                states[current.as_usize()].active = false;
                continue;
            }

            *open.get_mut(&city).unwrap() -= take;
            if assigned[current.as_usize()].get(&city).copied().unwrap_or(0) == 0 {
                visit_order[current.as_usize()].push(city);
            }
            *assigned[current.as_usize()].entry(city).or_insert(0) += take;
            let state = &mut states[current.as_usize()];
            state.days_used += take as f64 / installs_per_day as f64 + travel_days;
            state.current_city = city;
        }

        // unreachable or unfinished demand goes to the vendor
        let mut shortfall: UnitCount = 0;
        for (location, quantity) in open.into_iter().filter(|(_, q)| *q > 0) {
            shortfall += quantity;
            *external.entry(location).or_insert(0) += quantity;
        }

        // replay every technician through the day-by-day walk
        let mut plan = Plan::empty();
        let mut operational = CostLedger::default();
        for t in technicians.iter() {
            if assigned[t.as_usize()].is_empty() {
                continue;
            }
            let itinerary = simulate(context, t, &visit_order[t.as_usize()], &assigned[t.as_usize()]);
            if !itinerary.feasible() {
                for (location, quantity) in itinerary.leftover() {
                    shortfall += *quantity;
                    *external.entry(*location).or_insert(0) += *quantity;
                }
            }
            operational = operational + *itinerary.ledger();
            plan = plan.with_records(itinerary.to_plan_records());
        }

        let mut external_records: Vec<PlanRecord> = Vec::new();
        let mut sorted_external: Vec<(LocationIdx, UnitCount)> =
            external.into_iter().filter(|(_, q)| *q > 0).collect();
        sorted_external.sort();
        for (location, quantity) in sorted_external {
            operational.external += context.external_unit_cost(location, quantity);
            external_records.push(PlanRecord::external(location, quantity));
        }
        plan = plan.with_records(external_records);

        info!(
            internal_units = plan.total_internal_units(),
            external_units = plan.total_external_units(),
            shortfall,
            "greedy allocation finished"
        );

        Ok(PlanningOutcome {
            plan,
            operational,
            materials_cost: context.total_materials_cost(),
            fully_served_internally: shortfall == 0,
        })
    }
}

/// minimum cumulative load wins; ties go to the earlier roster position
fn least_loaded_active(
    roster: impl Iterator<Item = TechnicianIdx>,
    states: &[TechState],
) -> Option<TechnicianIdx> {
    let mut best: Option<TechnicianIdx> = None;
    for t in roster {
        if !states[t.as_usize()].active {
            continue;
        }
        match best {
            None => best = Some(t),
            Some(b) if states[t.as_usize()].days_used < states[b.as_usize()].days_used => {
                best = Some(t)
            }
            _ => {}
        }
    }
    best
}

/// A city is reachable when land or air travel time stays within the
/// single-leg threshold; returns the faster of the qualifying modes.
fn reachable_travel_hours(
    context: &PlanningContext,
    from: LocationIdx,
    to: LocationIdx,
) -> Option<HoursValue> {
    if from == to {
        return Some(0.0);
    }
    let threshold = context.config().travel.leg_threshold_hours;
    [TravelMode::Land, TravelMode::Air]
        .into_iter()
        .map(|mode| context.travel_time(from, to, mode))
        .filter(|hours| *hours <= threshold)
        .min_by(|a, b| a.total_cmp(b))
}
