use crate::decimal::Money;
use crate::errors::{MortgageError, Result};
use crate::feasibility::FeasibilityCalculator;
use crate::rates::RateStore;
use crate::types::{FeasibilityResult, MortgageApplicant, MortgageRate};

/// Entry point wiring the rate store and the affordability calculator.
///
/// Holds no mutable state; one instance can serve concurrent requests.
#[derive(Debug)]
pub struct MortgageService<S: RateStore> {
    rate_store: S,
    calculator: FeasibilityCalculator,
}

impl<S: RateStore> MortgageService<S> {
    pub fn new(rate_store: S) -> Self {
        Self {
            rate_store,
            calculator: FeasibilityCalculator::new(),
        }
    }

    /// Check mortgage feasibility for a requested loan.
    ///
    /// The maturity period is rejected here before any catalog access;
    /// the monetary inputs are deliberately passed through unvalidated,
    /// the calculator owns that gate (and re-checks maturity as well).
    pub fn check_feasibility(
        &self,
        maturity_period: Option<i32>,
        income: Option<Money>,
        loan_value: Option<Money>,
        home_value: Option<Money>,
    ) -> Result<FeasibilityResult> {
        tracing::info!(
            maturity_period = ?maturity_period,
            income = ?income,
            loan_value = ?loan_value,
            home_value = ?home_value,
            "Checking mortgage feasibility"
        );

        let maturity_period = match maturity_period {
            Some(years) if years > 0 => years,
            other => {
                tracing::error!(
                    maturity_period = ?other,
                    "Invalid maturity period. It must be greater than zero."
                );
                return Err(MortgageError::InvalidMaturityPeriod);
            }
        };

        let rate = match self.rate_store.find_by_maturity_period(maturity_period) {
            Some(rate) => rate,
            None => {
                tracing::error!(
                    maturity_period,
                    "No mortgage rate found for maturity period. Cannot check mortgage feasibility."
                );
                return Err(MortgageError::RateNotFound { maturity_period });
            }
        };

        let applicant = MortgageApplicant::new(income, loan_value, home_value);

        self.calculator.check(&rate, &applicant)
    }

    /// All known rates, unfiltered, in storage order. An empty catalog
    /// yields an empty vec, never an error.
    pub fn all_rates(&self) -> Vec<MortgageRate> {
        tracing::info!("Finding all mortgage rates in the system");
        let rates = self.rate_store.find_all();
        tracing::info!(count = rates.len(), "Found mortgage rates");
        rates
    }
}
