/// rate catalog - list rates and serialize them as JSON
use mortgage_feasibility_rs::chrono::Utc;
use mortgage_feasibility_rs::{InMemoryRateStore, MortgageRate, MortgageService, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = InMemoryRateStore::new();
    store.upsert(MortgageRate::new(10, Rate::from_percentage(5), Utc::now()));
    store.upsert(MortgageRate::new(20, Rate::from_bps(650), Utc::now()));
    store.upsert(MortgageRate::new(30, Rate::from_percentage(7), Utc::now()));

    // rate management updates an existing maturity in place
    store.upsert(MortgageRate::new(20, Rate::from_bps(600), Utc::now()));

    let service = MortgageService::new(store);

    for rate in service.all_rates() {
        println!(
            "{:>2} years at {} (updated {})",
            rate.maturity_period, rate.interest_rate, rate.last_update
        );
    }

    println!("{}", serde_json::to_string_pretty(&service.all_rates())?);

    Ok(())
}
