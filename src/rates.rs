use crate::types::MortgageRate;

/// Read-only access to the rate catalog.
///
/// A lookup miss is a valid empty result, never an error; catalogs are
/// maintained by an external rate-management process. `Send + Sync` so a
/// store can back concurrent request handlers without coordination.
pub trait RateStore: Send + Sync {
    /// find the rate for a given maturity period in years
    fn find_by_maturity_period(&self, maturity_period: i32) -> Option<MortgageRate>;

    /// all known rates, in storage order
    fn find_all(&self) -> Vec<MortgageRate>;
}

/// Vec-backed catalog preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateStore {
    rates: Vec<MortgageRate>,
}

impl InMemoryRateStore {
    /// empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// catalog seeded with the given rates, kept in the given order
    pub fn with_rates(rates: Vec<MortgageRate>) -> Self {
        Self { rates }
    }

    /// insert a rate, replacing any existing entry for the same maturity
    /// period in place (order of the remaining entries is unchanged)
    pub fn upsert(&mut self, rate: MortgageRate) {
        match self
            .rates
            .iter_mut()
            .find(|r| r.maturity_period == rate.maturity_period)
        {
            Some(existing) => *existing = rate,
            None => self.rates.push(rate),
        }
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl RateStore for InMemoryRateStore {
    fn find_by_maturity_period(&self, maturity_period: i32) -> Option<MortgageRate> {
        self.rates
            .iter()
            .find(|r| r.maturity_period == maturity_period)
            .cloned()
    }

    fn find_all(&self) -> Vec<MortgageRate> {
        self.rates.clone()
    }
}
