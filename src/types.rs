use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// Interest terms offered for a given loan duration.
///
/// Rates are created and updated by an external rate-management process;
/// this crate only reads them, and a rate is immutable once it enters a
/// calculation. `maturity_period` is the unique key within the catalog.
/// It is signed so that out-of-range values coming from a boundary can be
/// represented and rejected by the validation gate rather than by a panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageRate {
    /// maturity period of the mortgage in years
    pub maturity_period: i32,
    /// nominal annual interest rate as a fraction (0.05 = 5%)
    pub interest_rate: Rate,
    /// timestamp of the last update by the rate-management process
    pub last_update: DateTime<Utc>,
}

impl MortgageRate {
    pub fn new(maturity_period: i32, interest_rate: Rate, last_update: DateTime<Utc>) -> Self {
        Self {
            maturity_period,
            interest_rate,
            last_update,
        }
    }
}

/// Value object bundling the three monetary inputs of one feasibility check.
///
/// Carries no identity, is constructed fresh per request, and is never
/// persisted. Fields are optional because a boundary request may omit them;
/// presence and positivity are enforced by the calculator, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageApplicant {
    /// annual income of the applicant
    pub income: Option<Money>,
    /// total amount the applicant is seeking to borrow
    pub loan_value: Option<Money>,
    /// value of the property the applicant is planning to buy
    pub home_value: Option<Money>,
}

impl MortgageApplicant {
    pub fn new(
        income: Option<Money>,
        loan_value: Option<Money>,
        home_value: Option<Money>,
    ) -> Self {
        Self {
            income,
            loan_value,
            home_value,
        }
    }
}

/// Result of one feasibility check.
///
/// An infeasible result always carries a zero monthly cost; the
/// constructors are the only way to build a value, so the pairing
/// cannot be violated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    feasible: bool,
    monthly_cost: Money,
}

impl FeasibilityResult {
    /// feasible result with the computed monthly payment
    pub fn feasible(monthly_cost: Money) -> Self {
        Self {
            feasible: true,
            monthly_cost,
        }
    }

    /// infeasible result, monthly cost fixed at zero
    pub fn not_feasible() -> Self {
        Self {
            feasible: false,
            monthly_cost: Money::ZERO,
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    pub fn monthly_cost(&self) -> Money {
        self.monthly_cost
    }
}
