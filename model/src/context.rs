use std::sync::Arc;

use crate::config::Config;
use crate::demand::Demand;
use crate::locations::Locations;
use crate::technicians::Technicians;
use crate::vendor::VendorPricing;

/// All reference data for one planning run, loaded once and never mutated.
/// Every component receives the context by reference; what-if scenarios are
/// expressed by constructing a second context, not by mutating this one.
#[derive(Clone)]
pub struct PlanningContext {
    locations: Arc<Locations>,
    technicians: Arc<Technicians>,
    demand: Arc<Demand>,
    vendor: Arc<VendorPricing>,
    config: Arc<Config>,
}

// static functions
impl PlanningContext {
    pub fn new(
        locations: Arc<Locations>,
        technicians: Arc<Technicians>,
        demand: Arc<Demand>,
        vendor: Arc<VendorPricing>,
        config: Arc<Config>,
    ) -> PlanningContext {
        PlanningContext {
            locations,
            technicians,
            demand,
            vendor,
            config,
        }
    }
}

// methods
impl PlanningContext {
    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    pub fn technicians(&self) -> &Technicians {
        &self.technicians
    }

    pub fn demand(&self) -> &Demand {
        &self.demand
    }

    pub fn vendor(&self) -> &VendorPricing {
        &self.vendor
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
