//! Shared fixture instance for the unit tests of this crate and the
//! downstream solution/solver crates.
//!
//! Five locations around the hub "Central"; "Farwell" is a remote
//! forced-external location with a flight connection but a prohibitive road
//! trip. Two technicians: a full-time one based at the hub and a 0.75-FTE
//! one based at "Southbay".

use serde_json::json;

use crate::context::PlanningContext;
use crate::json_serialisation::load_planning_instance_from_json;

pub fn default_instance_json() -> serde_json::Value {
    instance_json(4)
}

pub fn instance_json(project_weeks: u32) -> serde_json::Value {
    json!({
        "locations": [
            {"name": "Central"},
            {"name": "Northport"},
            {"name": "Eastvale"},
            {"name": "Southbay"},
            {"name": "Farwell", "forcedExternal": true}
        ],
        "travelMatrices": {
            "indices": ["Central", "Northport", "Eastvale", "Southbay", "Farwell"],
            "distancesInKm": [
                [0.0, 120.0, 240.0, 480.0, 2000.0],
                [120.0, 0.0, 150.0, 560.0, 2100.0],
                [240.0, 150.0, 0.0, 300.0, 2200.0],
                [480.0, 560.0, 300.0, 0.0, 2500.0],
                [2000.0, 2100.0, 2200.0, 2500.0, 0.0]
            ],
            "roadTolls": [
                [0.0, 0.2, 0.4, 0.8, 1.0],
                [0.2, 0.0, 0.3, 0.5, 1.0],
                [0.4, 0.3, 0.0, 0.5, 1.0],
                [0.8, 0.5, 0.5, 0.0, 1.0],
                [1.0, 1.0, 1.0, 1.0, 0.0]
            ],
            "flightHours": [
                [null, null, null, 1.0, 3.0],
                [null, null, null, null, null],
                [null, null, null, 1.0, null],
                [1.0, null, 1.0, null, 2.0],
                [3.0, null, null, 2.0, null]
            ],
            "flightCosts": [
                [null, null, null, 2.5, 6.0],
                [null, null, null, null, null],
                [null, null, null, 0.5, null],
                [2.5, null, 0.5, null, 5.0],
                [6.0, null, null, 5.0, null]
            ]
        },
        "technicians": [
            {"name": "Ana", "homeBase": "Central", "monthlySalary": 14.7, "weeklyFte": 1.0},
            {"name": "Bruno", "homeBase": "Southbay", "monthlySalary": 14.7, "weeklyFte": 0.75}
        ],
        "demand": [
            {"location": "Central", "oneKitVehicles": 4},
            {"location": "Northport", "oneKitVehicles": 2, "twoKitVehicles": 1},
            {"location": "Eastvale", "oneKitVehicles": 3},
            {"location": "Southbay", "oneKitVehicles": 2},
            {"location": "Farwell", "oneKitVehicles": 2}
        ],
        "vendor": {
            "unitRates": [
                {"location": "Central", "rate": 2.8},
                {"location": "Northport", "rate": 1.7},
                {"location": "Eastvale", "rate": 1.75},
                {"location": "Southbay", "rate": 2.6},
                {"location": "Farwell", "rate": 2.6}
            ],
            "freightCharges": [
                {"location": "Northport", "rate": 0.3},
                {"location": "Eastvale", "rate": 0.4},
                {"location": "Southbay", "rate": 0.4},
                {"location": "Farwell", "rate": 1.7}
            ],
            "kitPrices": {"oneKit": 4.4, "twoKit": 8.8}
        },
        "parameters": {
            "daysPerWeek": 6,
            "projectWeeks": project_weeks,
            "shiftHours": 8.0,
            "installTimeHours": 2.5,
            "incentivePerUnit": 0.87,
            "lodgingPerNight": 1.1,
            "mealPerDay": 0.5,
            "fuelPerKm": 0.00342,
            "monthlyHoursBase": 180.0,
            "maxBaseTravelCost": 2.052,
            "hub": "Central"
        }
    })
}

pub fn default_context() -> PlanningContext {
    load_planning_instance_from_json(default_instance_json())
        .expect("default test instance must load")
}

/// same instance compressed to a single project week (6 days), keeping the
/// optimizer tests small
pub fn short_context() -> PlanningContext {
    load_planning_instance_from_json(instance_json(1)).expect("short test instance must load")
}
