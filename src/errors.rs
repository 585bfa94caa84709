use std::fmt;

use thiserror::Error;

/// input field checked by the affordability validation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicantField {
    Income,
    LoanValue,
    HomeValue,
    MaturityPeriod,
}

impl fmt::Display for ApplicantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApplicantField::Income => "income",
            ApplicantField::LoanValue => "loan value",
            ApplicantField::HomeValue => "home value",
            ApplicantField::MaturityPeriod => "maturity period",
        };
        write!(f, "{name}")
    }
}

/// Errors produced by feasibility checks and rate lookups.
///
/// Every error is terminal for the request: the first failing check
/// short-circuits the rest of the computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MortgageError {
    /// maturity period rejected at the service entry, before any lookup
    #[error("Invalid maturity period: It must be greater than zero.")]
    InvalidMaturityPeriod,

    /// applicant or rate data rejected by the calculator's validation gate
    #[error("Invalid {field}: It must be greater than zero.")]
    Validation { field: ApplicantField },

    /// no rate exists for the requested maturity period
    #[error("Could not find mortgage rate for maturity period of {maturity_period} years")]
    RateNotFound { maturity_period: i32 },
}

impl MortgageError {
    /// true for lookup misses; boundary adapters map these to a
    /// not-found status and everything else to a client error
    pub fn is_not_found(&self) -> bool {
        matches!(self, MortgageError::RateNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, MortgageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = MortgageError::Validation {
            field: ApplicantField::LoanValue,
        };
        assert_eq!(
            err.to_string(),
            "Invalid loan value: It must be greater than zero."
        );
    }

    #[test]
    fn test_not_found_message_includes_period() {
        let err = MortgageError::RateNotFound {
            maturity_period: 25,
        };
        assert_eq!(
            err.to_string(),
            "Could not find mortgage rate for maturity period of 25 years"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_maturity_period_message() {
        assert_eq!(
            MortgageError::InvalidMaturityPeriod.to_string(),
            "Invalid maturity period: It must be greater than zero."
        );
        assert!(!MortgageError::InvalidMaturityPeriod.is_not_found());
    }
}
