/// quick start - check a mortgage against the rate catalog
use mortgage_feasibility_rs::{
    InMemoryRateStore, Money, MortgageRate, MortgageService, Rate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // seed a catalog with a 10-year rate at 5%
    let store = InMemoryRateStore::with_rates(vec![MortgageRate::new(
        10,
        Rate::from_percentage(5),
        mortgage_feasibility_rs::chrono::Utc::now(),
    )]);

    let service = MortgageService::new(store);

    // $10,000 loan, $5,000 income, $100,000 home
    let result = service.check_feasibility(
        Some(10),
        Some(Money::from_major(5_000)),
        Some(Money::from_major(10_000)),
        Some(Money::from_major(100_000)),
    )?;

    println!("feasible: {}", result.is_feasible());
    println!("monthly cost: {}", result.monthly_cost());

    Ok(())
}
