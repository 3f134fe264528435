//! Look up a single food and print its nutrition
//! Usage: cargo run --bin nutrition-lookup -- 100g of apples
//!        cargo run --bin nutrition-lookup -- --version [--json]

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use nutrition_tracker::build_info::BuildInfo;
use nutrition_tracker::config::Config;
use nutrition_tracker::input::{FoodQuery, INVALID_FORMAT};
use nutrition_tracker::lookup::{CalorieNinjasClient, NutritionLookup};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutrition_tracker=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        let info = BuildInfo::current();
        if args.iter().any(|a| a == "--json") {
            println!("{}", info.to_json()?);
        } else {
            println!("{}", info.version_line());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let line = args.join(" ");
    let query = match FoodQuery::parse(&line) {
        Some(q) => q,
        None => {
            eprintln!("{}", INVALID_FORMAT);
            return Ok(ExitCode::from(2));
        }
    };

    let config = Config::from_env()?;
    let client = CalorieNinjasClient::new(&config)?;

    match client.resolve(&query) {
        Ok(item) => {
            if let Some(amount) = query.quantity_summary() {
                println!("\nAmount: {}", amount);
            }
            println!("{}", item);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
