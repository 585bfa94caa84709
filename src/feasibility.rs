use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::decimal::{Money, Rate};
use crate::errors::{ApplicantField, MortgageError, Result};
use crate::types::{FeasibilityResult, MortgageApplicant, MortgageRate};

/// Affordability calculator for fixed-rate mortgages.
///
/// Pure and stateless: the same rate and applicant always produce the
/// same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeasibilityCalculator;

impl FeasibilityCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Check if a mortgage is feasible.
    ///
    /// A mortgage is feasible when the loan exceeds neither four times
    /// the applicant's income nor the home value. A feasible result
    /// carries the monthly cost of the loan; an infeasible one carries
    /// zero and the payment formula is never evaluated.
    ///
    /// Inputs are validated here regardless of any upstream checks; this
    /// is the authoritative gate for income, loan value, home value, and
    /// maturity period.
    pub fn check(
        &self,
        rate: &MortgageRate,
        applicant: &MortgageApplicant,
    ) -> Result<FeasibilityResult> {
        let (income, loan_value, home_value) = validate_inputs(rate, applicant)?;

        tracing::info!(
            income = %income,
            home_value = %home_value,
            maturity_period = rate.maturity_period,
            loan_value = %loan_value,
            "Calculating mortgage feasibility"
        );

        let max_loan_by_income = income * dec!(4);
        let exceeds_income_cap = loan_value > max_loan_by_income;
        let exceeds_home_value = loan_value > home_value;

        if exceeds_income_cap {
            tracing::info!("Loan exceeds 4 times the income. Mortgage is not feasible.");
        }

        if exceeds_home_value {
            tracing::info!("Loan exceeds the home value. Mortgage is not feasible.");
        }

        if exceeds_income_cap || exceeds_home_value {
            return Ok(FeasibilityResult::not_feasible());
        }

        let monthly_cost =
            monthly_cost_fixed_rate(rate.maturity_period as u32, rate.interest_rate, loan_value);

        tracing::info!(monthly_cost = %monthly_cost, "Mortgage is feasible");

        Ok(FeasibilityResult::feasible(monthly_cost))
    }
}

/// Validation gate: each monetary input must be present and strictly
/// positive, and the maturity period strictly positive. First failure
/// wins, checked in order: income, loan value, home value, maturity
/// period.
fn validate_inputs(
    rate: &MortgageRate,
    applicant: &MortgageApplicant,
) -> Result<(Money, Money, Money)> {
    let income = require_positive(applicant.income, ApplicantField::Income)?;
    let loan_value = require_positive(applicant.loan_value, ApplicantField::LoanValue)?;
    let home_value = require_positive(applicant.home_value, ApplicantField::HomeValue)?;

    if rate.maturity_period <= 0 {
        tracing::error!(
            maturity_period = rate.maturity_period,
            "Invalid maturity period. It must be greater than zero."
        );
        return Err(MortgageError::Validation {
            field: ApplicantField::MaturityPeriod,
        });
    }

    Ok((income, loan_value, home_value))
}

fn require_positive(value: Option<Money>, field: ApplicantField) -> Result<Money> {
    match value {
        Some(v) if v.is_positive() => Ok(v),
        other => {
            tracing::error!(
                field = %field,
                value = ?other,
                "Invalid input. It must be greater than zero."
            );
            Err(MortgageError::Validation { field })
        }
    }
}

/// Monthly cost of a fixed-rate mortgage.
///
/// C = P * (i * (1 + i)^n) / ((1 + i)^n - 1)
///
/// where P is the loan value, i the monthly interest rate (annual rate
/// divided by 12) and n the number of monthly payments (years * 12).
/// Computed entirely in decimal arithmetic and rounded to 2 decimal
/// places, half-up, consistent with currency accounting.
///
/// A zero interest rate would make the denominator vanish; such loans
/// amortize straight-line instead (P / n).
fn monthly_cost_fixed_rate(maturity_years: u32, annual_rate: Rate, loan_value: Money) -> Money {
    let num_payments = maturity_years * 12;
    let monthly_rate = annual_rate.monthly_rate();

    if monthly_rate.is_zero() {
        return Money::from_decimal(loan_value.as_decimal() / Decimal::from(num_payments))
            .round_currency();
    }

    // (1 + i)^n by repeated multiplication, staying in decimal
    let base = Decimal::ONE + monthly_rate;
    let mut factor = Decimal::ONE;
    for _ in 0..num_payments {
        factor *= base;
    }

    let numerator = monthly_rate * factor;
    let denominator = factor - Decimal::ONE;

    Money::from_decimal(loan_value.as_decimal() * numerator / denominator).round_currency()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn rate(years: i32, annual: Decimal) -> MortgageRate {
        MortgageRate::new(years, Rate::from_decimal(annual), Utc::now())
    }

    fn applicant(income: i64, loan: i64, home: i64) -> MortgageApplicant {
        MortgageApplicant::new(
            Some(Money::from_major(income)),
            Some(Money::from_major(loan)),
            Some(Money::from_major(home)),
        )
    }

    #[test]
    fn test_loan_greater_than_four_times_income_is_not_feasible() {
        let calculator = FeasibilityCalculator::new();

        let result = calculator
            .check(&rate(10, dec!(0.05)), &applicant(5000, 90_000, 100_000))
            .unwrap();

        assert!(!result.is_feasible());
        assert_eq!(result.monthly_cost(), Money::ZERO);
    }

    #[test]
    fn test_loan_greater_than_home_value_is_not_feasible() {
        let calculator = FeasibilityCalculator::new();

        let result = calculator
            .check(&rate(10, dec!(0.05)), &applicant(100_000, 110_000, 100_000))
            .unwrap();

        assert!(!result.is_feasible());
        assert_eq!(result.monthly_cost(), Money::ZERO);
    }

    #[test]
    fn test_feasible_mortgage_monthly_cost() {
        let calculator = FeasibilityCalculator::new();

        let result = calculator
            .check(&rate(10, dec!(0.05)), &applicant(5000, 10_000, 100_000))
            .unwrap();

        assert!(result.is_feasible());
        assert_eq!(result.monthly_cost(), Money::from_decimal(dec!(106.07)));
    }

    #[test]
    fn test_rejection_independent_of_rate() {
        let calculator = FeasibilityCalculator::new();
        let applicant = applicant(5000, 90_000, 100_000);

        for annual in [dec!(0.01), dec!(0.05), dec!(0.2)] {
            let result = calculator.check(&rate(10, annual), &applicant).unwrap();
            assert!(!result.is_feasible());
            assert_eq!(result.monthly_cost(), Money::ZERO);
        }
    }

    #[test]
    fn test_missing_or_non_positive_income_is_rejected() {
        let calculator = FeasibilityCalculator::new();
        let rate = rate(10, dec!(0.05));

        for income in [None, Some(Money::ZERO), Some(Money::from_major(-1000))] {
            let applicant = MortgageApplicant::new(
                income,
                Some(Money::from_major(50_000)),
                Some(Money::from_major(100_000)),
            );
            let err = calculator.check(&rate, &applicant).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid income: It must be greater than zero."
            );
        }
    }

    #[test]
    fn test_missing_or_non_positive_loan_value_is_rejected() {
        let calculator = FeasibilityCalculator::new();
        let rate = rate(10, dec!(0.05));

        for loan in [None, Some(Money::ZERO), Some(Money::from_major(-10_000))] {
            let applicant = MortgageApplicant::new(
                Some(Money::from_major(5000)),
                loan,
                Some(Money::from_major(100_000)),
            );
            let err = calculator.check(&rate, &applicant).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid loan value: It must be greater than zero."
            );
        }
    }

    #[test]
    fn test_missing_or_non_positive_home_value_is_rejected() {
        let calculator = FeasibilityCalculator::new();
        let rate = rate(10, dec!(0.05));

        for home in [None, Some(Money::ZERO), Some(Money::from_major(-100_000))] {
            let applicant = MortgageApplicant::new(
                Some(Money::from_major(5000)),
                Some(Money::from_major(50_000)),
                home,
            );
            let err = calculator.check(&rate, &applicant).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid home value: It must be greater than zero."
            );
        }
    }

    #[test]
    fn test_non_positive_maturity_period_is_rejected() {
        let calculator = FeasibilityCalculator::new();
        let applicant = applicant(5000, 30_000, 100_000);

        for years in [0, -3] {
            let err = calculator
                .check(&rate(years, dec!(0.05)), &applicant)
                .unwrap_err();
            assert_eq!(
                err,
                MortgageError::Validation {
                    field: ApplicantField::MaturityPeriod
                }
            );
            assert_eq!(
                err.to_string(),
                "Invalid maturity period: It must be greater than zero."
            );
        }
    }

    #[test]
    fn test_zero_interest_rate_amortizes_straight_line() {
        let calculator = FeasibilityCalculator::new();

        let result = calculator
            .check(&rate(10, Decimal::ZERO), &applicant(5000, 12_000, 100_000))
            .unwrap();

        assert!(result.is_feasible());
        // 12000 over 120 monthly payments
        assert_eq!(result.monthly_cost(), Money::from_decimal(dec!(100.00)));
    }

    #[test]
    fn test_check_is_idempotent() {
        let calculator = FeasibilityCalculator::new();
        let rate = rate(10, dec!(0.05));
        let applicant = applicant(5000, 10_000, 100_000);

        let first = calculator.check(&rate, &applicant).unwrap();
        let second = calculator.check(&rate, &applicant).unwrap();

        assert_eq!(first, second);
    }
}
