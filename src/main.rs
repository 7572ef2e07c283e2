use std::sync::Arc;

use chrono::Local;

use team_capacity::capacity::{CapacityCalculator, CapacityService};
use team_capacity::config::AppConfig;
use team_capacity::infrastructure::repositories::{InMemoryRosterRepository, RosterSnapshot};
use team_capacity::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Install logging first so configuration fallbacks are reported
    logging::init(AppConfig::log_format_from_env());
    let config = AppConfig::from_env()?;
    tracing::info!(
        log_format = %config.log_format,
        horizon_weeks = config.capacity.horizon_weeks,
        alert_threshold = %config.capacity.alert_threshold,
        "Configuration loaded"
    );

    tracing::info!(path = %config.roster_path.display(), "Loading roster...");
    let snapshot = RosterSnapshot::from_path(&config.roster_path)?;

    let repository = Arc::new(InMemoryRosterRepository::new());
    snapshot.load_into(&*repository).await?;

    let reference_date = config
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());

    let service = CapacityService::new(repository, CapacityCalculator::new(config.capacity));
    let report = service.weekly_capacity(reference_date).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
