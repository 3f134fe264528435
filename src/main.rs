//! Nutrition Tracker
//!
//! Reads food descriptions from stdin until end of input, then prints the
//! combined calories, protein, fat and carbs.

use tracing_subscriber::EnvFilter;

use nutrition_tracker::build_info;
use nutrition_tracker::config::Config;
use nutrition_tracker::input::Console;
use nutrition_tracker::lookup::CalorieNinjasClient;
use nutrition_tracker::session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never mix with the console on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutrition_tracker=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let client = CalorieNinjasClient::new(&config)?;
    let mut console = Console::stdio();

    session::run_session(&mut console, &client);

    Ok(())
}
