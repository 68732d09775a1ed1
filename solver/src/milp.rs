#[cfg(test)]
mod tests;

use std::sync::Arc;

use highs::{Col, HighsModelStatus, RowProblem, Sense};
use itertools::iproduct;
use model::base_types::{Cost, LocationIdx, TechnicianIdx, TravelMode, UnitCount};
use model::PlanningContext;
use solution::{CostLedger, Plan, PlanRecord};
use tracing::{debug, info};

use crate::{PlanningOutcome, SolveError, Solver};

/// currency coefficients are scaled to whole numbers for the solver; real
/// totals are recovered by replaying the assignment through the cost model
const SCALE: f64 = 100.0;

/// per-unit penalty that makes externalization a last resort in the
/// pure-routing objective
const EXTERNAL_PENALTY: Cost = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectiveMode {
    /// minimize true operational money: salaries, meals, incentives,
    /// external service and per-transition travel + lodging
    #[default]
    CostMinimisation,
    /// cover everything internally if at all possible, then minimize travel
    /// friction; lodging and meals are settled in accounting afterwards
    PureRouting,
}

/// Exact formulation of the multi-technician assignment:
/// `x[t][d][c]` (technician t spends day d in city c), `work[t][d][c]`
/// (units installed there that day), `external[c]` (units left to the
/// vendor), plus transition booleans carrying day-to-day movement costs.
pub struct MilpPlanner {
    context: Arc<PlanningContext>,
    mode: ObjectiveMode,
}

impl MilpPlanner {
    pub fn with_mode(context: Arc<PlanningContext>, mode: ObjectiveMode) -> MilpPlanner {
        MilpPlanner { context, mode }
    }
}

impl Solver for MilpPlanner {
    fn initialize(context: Arc<PlanningContext>) -> MilpPlanner {
        MilpPlanner::with_mode(context, ObjectiveMode::default())
    }

    fn solve(&self) -> Result<PlanningOutcome, SolveError> {
        let context = &self.context;
        let config = context.config();
        let num_techs = context.technicians().len();
        let num_days = config.total_project_days() as usize;
        let num_cities = context.locations().len();

        let scaled = |cost: Cost| (cost * SCALE).round();

        let mut problem = RowProblem::new();

        // x[t][d][c]: one binary per technician-day-city triple. Cities whose
        // land trip from the technician's base exceeds the operating radius
        // are fixed to zero for all days.
        let mut x: Vec<Vec<Vec<Col>>> = Vec::with_capacity(num_techs);
        for t in 0..num_techs {
            let tech = context.technicians().get(TechnicianIdx::of(t));
            let base = tech.home_base();
            let mut per_day = Vec::with_capacity(num_days);
            for d in 0..num_days {
                let mut per_city = Vec::with_capacity(num_cities);
                for c in 0..num_cities {
                    let city = LocationIdx::of(c);
                    let in_range = self.within_operating_radius(base, city);
                    let objective = if d == 0 && in_range {
                        scaled(self.arrival_cost(base, city))
                    } else {
                        0.0
                    };
                    let upper = if in_range { 1.0 } else { 0.0 };
                    per_city.push(problem.add_integer_column(objective, 0.0..=upper));
                }
                per_day.push(per_city);
            }
            x.push(per_day);
        }

        // work[t][d][c]: installed units, zero on rest days and in
        // forced-external cities
        let incentive_coeff = match self.mode {
            ObjectiveMode::CostMinimisation => scaled(config.rates.incentive_per_unit),
            ObjectiveMode::PureRouting => 0.0,
        };
        let mut work: Vec<Vec<Vec<Col>>> = Vec::with_capacity(num_techs);
        for t in 0..num_techs {
            let tech = context.technicians().get(TechnicianIdx::of(t));
            let installs_per_day = tech.installs_per_day(config);
            let mut per_day = Vec::with_capacity(num_days);
            for d in 0..num_days {
                let rest_day = config.is_rest_day(d as u32 + 1);
                let mut per_city = Vec::with_capacity(num_cities);
                for c in 0..num_cities {
                    let city = LocationIdx::of(c);
                    let upper = if rest_day || context.locations().is_forced_external(city) {
                        0.0
                    } else {
                        installs_per_day as f64
                    };
                    per_city.push(problem.add_integer_column(incentive_coeff, 0.0..=upper));
                }
                per_day.push(per_city);
            }
            work.push(per_day);
        }

        // external[c]: units handed to the vendor
        let mut external: Vec<Col> = Vec::with_capacity(num_cities);
        for c in 0..num_cities {
            let city = LocationIdx::of(c);
            let demand = context.demand().units(city);
            let objective = match self.mode {
                ObjectiveMode::CostMinimisation => scaled(context.external_unit_cost(city, 1)),
                ObjectiveMode::PureRouting => scaled(EXTERNAL_PENALTY),
            };
            external.push(problem.add_integer_column(objective, 0.0..=demand as f64));
        }

        // transition booleans: one per technician, consecutive-day pair and
        // city pair with a positive step cost
        let mut transitions: Vec<(Col, usize, usize, usize, usize)> = Vec::new();
        for (t, d) in iproduct!(0..num_techs, 0..num_days.saturating_sub(1)) {
            let tech = context.technicians().get(TechnicianIdx::of(t));
            for (from, to) in iproduct!(0..num_cities, 0..num_cities) {
                let step = scaled(self.step_cost(
                    tech.home_base(),
                    LocationIdx::of(from),
                    LocationIdx::of(to),
                ));
                if step > 0.0 {
                    let col = problem.add_integer_column(step, 0.0..=1.0);
                    transitions.push((col, t, d, from, to));
                }
            }
        }

        // one city per technician per day
        for (t, d) in iproduct!(0..num_techs, 0..num_days) {
            let terms: Vec<(Col, f64)> = (0..num_cities).map(|c| (x[t][d][c], 1.0)).collect();
            problem.add_row(1.0..=1.0, terms);
        }

        // work only where present
        for (t, d, c) in iproduct!(0..num_techs, 0..num_days, 0..num_cities) {
            let tech = context.technicians().get(TechnicianIdx::of(t));
            let installs_per_day = tech.installs_per_day(config) as f64;
            problem.add_row(..=0.0, vec![(work[t][d][c], 1.0), (x[t][d][c], -installs_per_day)]);
        }

        // internal work plus externalization covers demand exactly
        for c in 0..num_cities {
            let city = LocationIdx::of(c);
            let demand = context.demand().units(city) as f64;
            let mut terms: Vec<(Col, f64)> = iproduct!(0..num_techs, 0..num_days)
                .map(|(t, d)| (work[t][d][c], 1.0))
                .collect();
            terms.push((external[c], 1.0));
            problem.add_row(demand..=demand, terms);
        }

        // x[t][d][from] AND x[t][d+1][to] implies the transition boolean:
        // (not x_from) or (not x_to) or trans, linearized
        for (col, t, d, from, to) in &transitions {
            problem.add_row(
                ..=1.0,
                vec![(x[*t][*d][*from], 1.0), (x[*t][*d + 1][*to], 1.0), (*col, -1.0)],
            );
        }

        debug!(
            mode = ?self.mode,
            technicians = num_techs,
            days = num_days,
            cities = num_cities,
            transition_vars = transitions.len(),
            "milp model built"
        );

        let mut model = problem.optimise(Sense::Minimise);
        model.set_option("output_flag", false);
        model.set_option("time_limit", config.solver.time_limit_secs);
        let solved = model.solve();

        let status = solved.status();
        match status {
            HighsModelStatus::Optimal | HighsModelStatus::ReachedTimeLimit => {}
            other => return Err(SolveError::Status(format!("{:?}", other))),
        }

        let sol = solved.get_solution();
        if sol.columns().is_empty() {
            return Err(SolveError::NoIncumbent);
        }

        // extract the assignment
        let mut itineraries: Vec<Vec<usize>> = Vec::with_capacity(num_techs);
        let mut records: Vec<PlanRecord> = Vec::new();
        let mut total_internal: UnitCount = 0;
        for t in 0..num_techs {
            let tech = context.technicians().get(TechnicianIdx::of(t));
            let mut sequence = Vec::with_capacity(num_days);
            for d in 0..num_days {
                let c = (0..num_cities)
                    .find(|c| sol[x[t][d][*c]] > 0.5)
                    .ok_or(SolveError::NoIncumbent)?;
                sequence.push(c);
                let quantity = sol[work[t][d][c]].round() as UnitCount;
                total_internal += quantity;
                if quantity > 0 || LocationIdx::of(c) != tech.home_base() {
                    records.push(PlanRecord::internal(
                        TechnicianIdx::of(t),
                        d as u32 + 1,
                        LocationIdx::of(c),
                        quantity,
                    ));
                }
            }
            itineraries.push(sequence);
        }

        let mut external_quantities: Vec<UnitCount> = Vec::with_capacity(num_cities);
        for c in 0..num_cities {
            let quantity = sol[external[c]].round() as UnitCount;
            external_quantities.push(quantity);
            if quantity > 0 {
                records.push(PlanRecord::external(LocationIdx::of(c), quantity));
            }
        }

        // a time-limited run without a real incumbent leaves demand uncovered
        let covered: UnitCount = total_internal + external_quantities.iter().sum::<UnitCount>();
        if covered != context.demand().total_units() {
            return Err(SolveError::NoIncumbent);
        }

        let operational = self.replay_assignment(&itineraries, total_internal, &external_quantities);

        info!(
            status = ?status,
            internal_units = total_internal,
            external_units = covered - total_internal,
            operational_total = operational.total(),
            "milp solve finished"
        );

        let voluntary_external = (0..num_cities).any(|c| {
            external_quantities[c] > 0
                && !context.locations().is_forced_external(LocationIdx::of(c))
        });

        Ok(PlanningOutcome {
            plan: Plan::from_records(records),
            operational,
            materials_cost: context.total_materials_cost(),
            fully_served_internally: !voluntary_external,
        })
    }
}

impl MilpPlanner {
    fn within_operating_radius(&self, base: LocationIdx, city: LocationIdx) -> bool {
        self.context.travel_cost(base, city, TravelMode::Land)
            <= self.context.config().travel.max_base_travel_cost
    }

    /// money attached to arriving in a city on day one
    fn arrival_cost(&self, base: LocationIdx, city: LocationIdx) -> Cost {
        match self.mode {
            ObjectiveMode::CostMinimisation => self.step_cost(base, base, city),
            ObjectiveMode::PureRouting => self.context.cheapest_travel_cost(base, city),
        }
    }

    /// money attached to waking up in `from` and sleeping in `to`
    fn step_cost(&self, base: LocationIdx, from: LocationIdx, to: LocationIdx) -> Cost {
        let travel = self.context.cheapest_travel_cost(from, to);
        match self.mode {
            ObjectiveMode::CostMinimisation => {
                let lodging = if to != base {
                    self.context.config().rates.lodging_per_night
                } else {
                    0.0
                };
                travel + lodging
            }
            ObjectiveMode::PureRouting => travel,
        }
    }

    /// Exact operational accounting of a solved assignment through the cost
    /// model; the scaled solver objective is never reported directly.
    fn replay_assignment(
        &self,
        itineraries: &[Vec<usize>],
        total_internal: UnitCount,
        external_quantities: &[UnitCount],
    ) -> CostLedger {
        let context = &self.context;
        let config = context.config();
        let num_days = config.total_project_days() as f64;

        let mut ledger = CostLedger::default();
        for t in context.technicians().iter() {
            ledger.salary += context.salary_for_project(context.technicians().get(t));
        }
        ledger.meals = context.technicians().len() as f64 * num_days * config.rates.meal_per_day;
        ledger.incentive = total_internal as f64 * config.rates.incentive_per_unit;

        for (c, quantity) in external_quantities.iter().enumerate() {
            ledger.external += context.external_unit_cost(LocationIdx::of(c), *quantity);
        }

        for (t, sequence) in itineraries.iter().enumerate() {
            let base = context.technicians().get(TechnicianIdx::of(t)).home_base();
            let mut previous = base;
            for c in sequence {
                let city = LocationIdx::of(*c);
                ledger.travel += context.cheapest_travel_cost(previous, city);
                if city != base {
                    ledger.lodging += config.rates.lodging_per_night;
                }
                previous = city;
            }
        }

        ledger
    }
}
