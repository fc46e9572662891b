//! Fetches and prints the doctor's weekly schedule.
//!
//! Expects `SCHEDULE_API_URL` and `SCHEDULE_API_TOKEN` in the environment
//! (or a `.env` file).

use color_eyre::eyre::{Result, eyre};
use dotenv::dotenv;
use medsched_client::ScheduleService;
use medsched_client::api::http::HttpScheduleApi;
use medsched_client::config::ClientConfig;
use medsched_core::models::schedule::day_name;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration and session token
    let config = ClientConfig::from_env()?;
    let token = std::env::var("SCHEDULE_API_TOKEN")
        .map_err(|_| eyre!("SCHEDULE_API_TOKEN environment variable not set"))?;

    tracing_subscriber::fmt::init();

    let api = HttpScheduleApi::new(&config, token);
    let mut service = ScheduleService::new(api);

    service.refresh().await?;

    for entry in service.entries() {
        let day = day_name(entry.day_of_week).unwrap_or("?");
        let hours = match (entry.start_time, entry.end_time) {
            (Some(start), Some(end)) => format!("{} to {}", start, end),
            _ => "-".to_string(),
        };
        println!(
            "{:<10} working: {:<5} hours: {:<20} slot: {} min",
            day, entry.is_working_day, hours, entry.appointment_duration
        );
    }

    Ok(())
}
