pub mod decimal;
pub mod errors;
pub mod feasibility;
pub mod rates;
pub mod service;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{ApplicantField, MortgageError, Result};
pub use feasibility::FeasibilityCalculator;
pub use rates::{InMemoryRateStore, RateStore};
pub use service::MortgageService;
pub use types::{FeasibilityResult, MortgageApplicant, MortgageRate};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
