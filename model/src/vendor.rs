use crate::base_types::{Cost, LocationIdx};

/// External-vendor pricing: the per-unit service rate (PxQ) per location,
/// the flat freight charge for shipping materials to a location, and the
/// kit purchase prices.
pub struct VendorPricing {
    unit_rates: Vec<Cost>,
    freight_charges: Vec<Cost>,
    one_kit_price: Cost,
    two_kit_price: Cost,
}

impl VendorPricing {
    pub fn new(
        unit_rates: Vec<Cost>,
        freight_charges: Vec<Cost>,
        one_kit_price: Cost,
        two_kit_price: Cost,
    ) -> VendorPricing {
        VendorPricing {
            unit_rates,
            freight_charges,
            one_kit_price,
            two_kit_price,
        }
    }

    pub fn unit_rate(&self, location: LocationIdx) -> Cost {
        self.unit_rates[location.as_usize()]
    }

    pub fn freight_charge(&self, location: LocationIdx) -> Cost {
        self.freight_charges[location.as_usize()]
    }

    pub fn one_kit_price(&self) -> Cost {
        self.one_kit_price
    }

    pub fn two_kit_price(&self) -> Cost {
        self.two_kit_price
    }
}
