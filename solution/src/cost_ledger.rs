use std::fmt;
use std::ops::Add;

use model::base_types::Cost;

/// Accumulator for the named operational cost buckets of a technician or of
/// the whole project. The total is always the sum of the buckets; there is
/// no hidden remainder field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostLedger {
    pub salary: Cost,
    pub travel: Cost,
    pub lodging: Cost,
    pub meals: Cost,
    pub incentive: Cost,
    pub external: Cost,
    pub freight: Cost,
}

impl CostLedger {
    pub fn total(&self) -> Cost {
        self.salary
            + self.travel
            + self.lodging
            + self.meals
            + self.incentive
            + self.external
            + self.freight
    }
}

impl Add for CostLedger {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        CostLedger {
            salary: self.salary + other.salary,
            travel: self.travel + other.travel,
            lodging: self.lodging + other.lodging,
            meals: self.meals + other.meals,
            incentive: self.incentive + other.incentive,
            external: self.external + other.external,
            freight: self.freight + other.freight,
        }
    }
}

impl std::iter::Sum<Self> for CostLedger {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(CostLedger::default(), |a, b| a + b)
    }
}

impl fmt::Display for CostLedger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "salary: {:.2}, travel: {:.2}, lodging: {:.2}, meals: {:.2}, incentive: {:.2}, external: {:.2}, freight: {:.2}, total: {:.2}",
            self.salary,
            self.travel,
            self.lodging,
            self.meals,
            self.incentive,
            self.external,
            self.freight,
            self.total()
        )
    }
}
