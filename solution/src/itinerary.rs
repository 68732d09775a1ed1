
use std::collections::HashMap;

use model::base_types::{DayIndex, HoursValue, LocationIdx, TechnicianIdx, UnitCount};
use model::costs::ModeChoice;
use model::PlanningContext;
use tracing::debug;

use crate::cost_ledger::CostLedger;
use crate::plan::PlanRecord;

/// slack beyond the technician's day budget before the walk gives up
const OVERRUN_DAYS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Work,
    TravelOnly,
    SundayRest,
    ReturnToBase,
}

/// one simulated calendar day of a technician's itinerary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItineraryDay {
    pub day: DayIndex,
    pub location: LocationIdx,
    pub installed: UnitCount,
    pub install_hours: HoursValue,
    pub travel: Option<ModeChoice>,
    pub sleeps_at: LocationIdx,
    pub kind: DayKind,
}

/// Result of walking a technician day-by-day through an ordered city list:
/// the per-day plan, the itemized cost breakdown and the feasibility flag.
/// An infeasible walk still carries the partial plan and its cost; the
/// leftover quantities are the caller's to externalize.
pub struct Itinerary {
    technician: TechnicianIdx,
    days: Vec<ItineraryDay>,
    ledger: CostLedger,
    leftover: HashMap<LocationIdx, UnitCount>,
    feasible: bool,
}

impl Itinerary {
    pub fn technician(&self) -> TechnicianIdx {
        self.technician
    }

    pub fn days(&self) -> &[ItineraryDay] {
        &self.days
    }

    pub fn ledger(&self) -> &CostLedger {
        &self.ledger
    }

    pub fn feasible(&self) -> bool {
        self.feasible
    }

    /// assigned quantities the walk could not install within the day budget
    pub fn leftover(&self) -> &HashMap<LocationIdx, UnitCount> {
        &self.leftover
    }

    pub fn to_plan_records(&self) -> Vec<PlanRecord> {
        self.days
            .iter()
            .map(|d| PlanRecord::internal(self.technician, d.day, d.location, d.installed))
            .collect()
    }
}

/// Walks one technician through `cities` (in order) with the assigned
/// quantities, simulating travel, installation, Sunday rest and the final
/// return to base.
pub fn simulate(
    context: &PlanningContext,
    technician: TechnicianIdx,
    cities: &[LocationIdx],
    assigned: &HashMap<LocationIdx, UnitCount>,
) -> Itinerary {
    let config = context.config();
    let tech = context.technicians().get(technician);
    let base = tech.home_base();
    let daily_hours = tech.daily_hours(config);
    let installs_per_day = tech.installs_per_day(config);
    let day_budget = tech.available_project_days(config);

    let mut pending: HashMap<LocationIdx, UnitCount> = cities
        .iter()
        .map(|c| (*c, assigned.get(c).copied().unwrap_or(0)))
        .collect();

    if daily_hours <= 1e-9 || installs_per_day == 0 || day_budget == 0 {
        debug!(%technician, "technician has no effective capacity, skipping walk");
        let feasible = pending.values().all(|q| *q == 0);
        pending.retain(|_, q| *q > 0);
        return Itinerary {
            technician,
            days: Vec::new(),
            ledger: CostLedger::default(),
            leftover: pending,
            feasible,
        };
    }

    let salary_per_day = context.salary_for_project(tech) / day_budget.max(1) as f64;
    let install_time = config.calendar.install_time_hours;
    let lodging = config.rates.lodging_per_night;
    let meal = config.rates.meal_per_day;
    let incentive = config.rates.incentive_per_unit;

    let mut days: Vec<ItineraryDay> = Vec::new();
    let mut ledger = CostLedger::default();
    let mut day: DayIndex = 1;
    let mut sleep_city = base;

    let mut city_pos = 0;
    while city_pos < cities.len() && day <= day_budget + OVERRUN_DAYS {
        let city = cities[city_pos];
        if pending.get(&city).copied().unwrap_or(0) == 0 {
            city_pos += 1;
            continue;
        }
        if day > day_budget {
            break;
        }

        if config.is_rest_day(day) {
            if sleep_city != base {
                ledger.lodging += lodging;
                ledger.meals += meal;
            }
            days.push(ItineraryDay {
                day,
                location: sleep_city,
                installed: 0,
                install_hours: 0.0,
                travel: None,
                sleeps_at: sleep_city,
                kind: DayKind::SundayRest,
            });
            day += 1;
            continue;
        }

        let mut travel: Option<ModeChoice> = None;
        if sleep_city != city {
            let choice = context.choose_mode(sleep_city, city);
            ledger.travel += choice.cost;
            if context.freight_applies(city, base, choice.mode) {
                ledger.freight += context.vendor().freight_charge(city);
            }

            if choice.hours > daily_hours {
                // the whole day goes into travelling; no installs today
                ledger.meals += meal;
                ledger.salary += salary_per_day;
                ledger.lodging += lodging;
                sleep_city = city;
                days.push(ItineraryDay {
                    day,
                    location: city,
                    installed: 0,
                    install_hours: 0.0,
                    travel: Some(choice),
                    sleeps_at: city,
                    kind: DayKind::TravelOnly,
                });
                day += 1;
                continue;
            }
            travel = Some(choice);
        }

        let travel_hours = travel.map_or(0.0, |t| t.hours);
        let hours_left = (daily_hours - travel_hours).max(0.0);
        let installable = (hours_left / install_time).floor() as UnitCount;
        let quantity = pending.get_mut(&city).unwrap();
        let installed = installable.min(*quantity);
        *quantity -= installed;

        ledger.incentive += incentive * installed as f64;
        ledger.meals += meal;
        ledger.salary += salary_per_day;
        sleep_city = city;
        if sleep_city != base {
            ledger.lodging += lodging;
        }

        days.push(ItineraryDay {
            day,
            location: city,
            installed,
            install_hours: installed as f64 * install_time,
            travel,
            sleeps_at: sleep_city,
            kind: DayKind::Work,
        });
        day += 1;
    }

    if sleep_city != base {
        let choice = context.choose_mode(sleep_city, base);
        ledger.travel += choice.cost;
        if choice.hours > daily_hours {
            ledger.lodging += lodging;
        }
        days.push(ItineraryDay {
            day,
            location: base,
            installed: 0,
            install_hours: 0.0,
            travel: Some(choice),
            sleeps_at: base,
            kind: DayKind::ReturnToBase,
        });
    }

    let feasible = pending.values().all(|q| *q == 0);
    pending.retain(|_, q| *q > 0);
    Itinerary {
        technician,
        days,
        ledger,
        leftover: pending,
        feasible,
    }
}
