use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::base_types::{Cost, HoursValue, LocationIdx, TechnicianIdx, UnitCount};
use crate::config::{Config, ConfigCalendar, ConfigRates, ConfigSolver, ConfigTravel};
use crate::context::PlanningContext;
use crate::demand::Demand;
use crate::locations::Locations;
use crate::technicians::{Technician, Technicians};
use crate::vendor::VendorPricing;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("invalid instance json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{context} refers to unknown location '{name}'")]
    UnknownLocation {
        context: &'static str,
        name: String,
    },
    #[error("matrix '{matrix}' must be {expected}x{expected}, found a row of length {found}")]
    MatrixShape {
        matrix: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("travel matrix indices must list every location exactly once ({0} listed, {1} locations)")]
    MatrixIndices(usize, usize),
    #[error("instance must contain at least one location")]
    NoLocations,
    #[error("field '{field}' is invalid: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonLocation {
    name: String,
    #[serde(default)]
    forced_external: bool,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonTravelMatrices {
    indices: Vec<String>,
    distances_in_km: Vec<Vec<f64>>,
    road_tolls: Vec<Vec<Cost>>,
    flight_hours: Vec<Vec<Option<HoursValue>>>,
    flight_costs: Vec<Vec<Option<Cost>>>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonTechnician {
    name: String,
    home_base: String,
    monthly_salary: Cost,
    weekly_fte: f64,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonDemandRow {
    location: String,
    #[serde(default)]
    one_kit_vehicles: UnitCount,
    #[serde(default)]
    two_kit_vehicles: UnitCount,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonLocationRate {
    location: String,
    rate: Cost,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonKitPrices {
    one_kit: Cost,
    two_kit: Cost,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonVendor {
    unit_rates: Vec<JsonLocationRate>,
    #[serde(default)]
    freight_charges: Vec<JsonLocationRate>,
    kit_prices: JsonKitPrices,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonParameters {
    days_per_week: u32,
    project_weeks: u32,
    shift_hours: HoursValue,
    install_time_hours: HoursValue,
    incentive_per_unit: Cost,
    lodging_per_night: Cost,
    meal_per_day: Cost,
    fuel_per_km: Cost,
    monthly_hours_base: HoursValue,
    max_base_travel_cost: Cost,
    hub: String,
    #[serde(default = "default_trip_surcharge")]
    trip_surcharge: Cost,
    #[serde(default = "default_land_speed")]
    land_speed_kmh: f64,
    #[serde(default = "default_layover_hours")]
    layover_hours: HoursValue,
    #[serde(default = "default_leg_threshold")]
    leg_threshold_hours: HoursValue,
    #[serde(default = "default_time_limit")]
    solver_time_limit_secs: f64,
}

fn default_trip_surcharge() -> Cost {
    0.13
}

fn default_land_speed() -> f64 {
    80.0
}

fn default_layover_hours() -> HoursValue {
    2.0
}

fn default_leg_threshold() -> HoursValue {
    5.6
}

fn default_time_limit() -> f64 {
    60.0
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    locations: Vec<JsonLocation>,
    travel_matrices: JsonTravelMatrices,
    technicians: Vec<JsonTechnician>,
    demand: Vec<JsonDemandRow>,
    vendor: JsonVendor,
    parameters: JsonParameters,
}

/// Loads a planning instance from its JSON document, normalizing every table
/// into the typed model up front. Any unknown location reference, malformed
/// matrix or missing field is an error here; nothing defaults silently deep
/// inside the planning logic.
pub fn load_planning_instance_from_json(
    input: serde_json::Value,
) -> Result<PlanningContext, LoadError> {
    let json_input: JsonInput = serde_json::from_value(input)?;

    let config = Arc::new(create_config(&json_input.parameters)?);
    let locations = Arc::new(create_locations(&json_input)?);
    let technicians = Arc::new(create_technicians(&json_input, &locations)?);
    let demand = Arc::new(create_demand(&json_input, &locations)?);
    let vendor = Arc::new(create_vendor(&json_input, &locations)?);

    debug!(
        locations = locations.len(),
        technicians = technicians.len(),
        total_units = demand.total_units(),
        "planning instance loaded"
    );

    Ok(PlanningContext::new(
        locations,
        technicians,
        demand,
        vendor,
        config,
    ))
}

fn create_config(parameters: &JsonParameters) -> Result<Config, LoadError> {
    if parameters.install_time_hours <= 0.0 {
        return Err(LoadError::InvalidField {
            field: "installTimeHours",
            reason: "must be positive",
        });
    }
    if parameters.land_speed_kmh <= 0.0 {
        return Err(LoadError::InvalidField {
            field: "landSpeedKmh",
            reason: "must be positive",
        });
    }
    Ok(Config {
        calendar: ConfigCalendar {
            days_per_week: parameters.days_per_week,
            project_weeks: parameters.project_weeks,
            shift_hours: parameters.shift_hours,
            install_time_hours: parameters.install_time_hours,
        },
        rates: ConfigRates {
            incentive_per_unit: parameters.incentive_per_unit,
            lodging_per_night: parameters.lodging_per_night,
            meal_per_day: parameters.meal_per_day,
            fuel_per_km: parameters.fuel_per_km,
            trip_surcharge: parameters.trip_surcharge,
            monthly_hours_base: parameters.monthly_hours_base,
        },
        travel: ConfigTravel {
            land_speed_kmh: parameters.land_speed_kmh,
            layover_hours: parameters.layover_hours,
            leg_threshold_hours: parameters.leg_threshold_hours,
            max_base_travel_cost: parameters.max_base_travel_cost,
        },
        solver: ConfigSolver {
            time_limit_secs: parameters.solver_time_limit_secs,
        },
    })
}

fn create_locations(json_input: &JsonInput) -> Result<Locations, LoadError> {
    let n = json_input.locations.len();
    if n == 0 {
        return Err(LoadError::NoLocations);
    }

    let names: Vec<String> = json_input
        .locations
        .iter()
        .map(|l| l.name.clone())
        .collect();
    let name_to_idx: HashMap<&str, usize> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let matrices = &json_input.travel_matrices;
    if matrices.indices.len() != n {
        return Err(LoadError::MatrixIndices(matrices.indices.len(), n));
    }
    // maps matrix row/column positions to location indices
    let mut permutation: Vec<usize> = Vec::with_capacity(n);
    for index_name in &matrices.indices {
        match name_to_idx.get(index_name.as_str()) {
            Some(i) => permutation.push(*i),
            None => {
                return Err(LoadError::UnknownLocation {
                    context: "travel matrix index",
                    name: index_name.clone(),
                })
            }
        }
    }

    let distances_km = permuted_matrix("distancesInKm", &matrices.distances_in_km, &permutation)?;
    let road_tolls = permuted_matrix("roadTolls", &matrices.road_tolls, &permutation)?;
    let flight_hours = permuted_matrix("flightHours", &matrices.flight_hours, &permutation)?;
    let flight_costs = permuted_matrix("flightCosts", &matrices.flight_costs, &permutation)?;

    let forced_external = json_input
        .locations
        .iter()
        .map(|l| l.forced_external)
        .collect();

    let hub = match name_to_idx.get(json_input.parameters.hub.as_str()) {
        Some(i) => LocationIdx::of(*i),
        None => {
            return Err(LoadError::UnknownLocation {
                context: "hub parameter",
                name: json_input.parameters.hub.clone(),
            })
        }
    };

    Ok(Locations::new(
        names,
        distances_km,
        road_tolls,
        flight_hours,
        flight_costs,
        forced_external,
        hub,
    ))
}

/// validates the matrix shape and reorders rows/columns from matrix-index
/// order into location order
fn permuted_matrix<T: Copy>(
    name: &'static str,
    matrix: &[Vec<T>],
    permutation: &[usize],
) -> Result<Vec<Vec<T>>, LoadError> {
    let n = permutation.len();
    if matrix.len() != n {
        return Err(LoadError::MatrixShape {
            matrix: name,
            expected: n,
            found: matrix.len(),
        });
    }
    for row in matrix {
        if row.len() != n {
            return Err(LoadError::MatrixShape {
                matrix: name,
                expected: n,
                found: row.len(),
            });
        }
    }
    let mut result = vec![Vec::with_capacity(n); n];
    for (row_pos, row) in matrix.iter().enumerate() {
        let target_row = permutation[row_pos];
        let mut permuted_row = vec![row[0]; n];
        for (col_pos, value) in row.iter().enumerate() {
            permuted_row[permutation[col_pos]] = *value;
        }
        result[target_row] = permuted_row;
    }
    Ok(result)
}

fn create_technicians(
    json_input: &JsonInput,
    locations: &Locations,
) -> Result<Technicians, LoadError> {
    let mut technicians = Vec::with_capacity(json_input.technicians.len());
    for (i, tech) in json_input.technicians.iter().enumerate() {
        let home_base =
            locations
                .get(&tech.home_base)
                .map_err(|_| LoadError::UnknownLocation {
                    context: "technician home base",
                    name: tech.home_base.clone(),
                })?;
        if !(0.0..=1.0).contains(&tech.weekly_fte) {
            return Err(LoadError::InvalidField {
                field: "weeklyFte",
                reason: "must be between 0.0 and 1.0",
            });
        }
        technicians.push(Technician::new(
            TechnicianIdx::of(i),
            tech.name.clone(),
            home_base,
            tech.monthly_salary,
            tech.weekly_fte,
        ));
    }
    Ok(Technicians::new(technicians))
}

fn create_demand(json_input: &JsonInput, locations: &Locations) -> Result<Demand, LoadError> {
    let n = locations.len();
    let mut one_kit = vec![0; n];
    let mut two_kit = vec![0; n];
    for row in &json_input.demand {
        let location = locations
            .get(&row.location)
            .map_err(|_| LoadError::UnknownLocation {
                context: "demand row",
                name: row.location.clone(),
            })?;
        one_kit[location.as_usize()] += row.one_kit_vehicles;
        two_kit[location.as_usize()] += row.two_kit_vehicles;
    }
    Ok(Demand::new(one_kit, two_kit))
}

fn create_vendor(
    json_input: &JsonInput,
    locations: &Locations,
) -> Result<VendorPricing, LoadError> {
    let n = locations.len();
    let mut unit_rates = vec![0.0; n];
    let mut freight_charges = vec![0.0; n];
    for row in &json_input.vendor.unit_rates {
        let location = locations
            .get(&row.location)
            .map_err(|_| LoadError::UnknownLocation {
                context: "vendor unit rate",
                name: row.location.clone(),
            })?;
        unit_rates[location.as_usize()] = row.rate;
    }
    for row in &json_input.vendor.freight_charges {
        let location = locations
            .get(&row.location)
            .map_err(|_| LoadError::UnknownLocation {
                context: "freight charge",
                name: row.location.clone(),
            })?;
        freight_charges[location.as_usize()] = row.rate;
    }
    Ok(VendorPricing::new(
        unit_rates,
        freight_charges,
        json_input.vendor.kit_prices.one_kit,
        json_input.vendor.kit_prices.two_kit,
    ))
}
