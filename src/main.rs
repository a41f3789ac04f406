//! Posts the day's Scholar Inbox paper recommendations to a Slack channel.
//!
//! Runs the job once and exits; schedule it with whatever runs your cron.
//! Configuration is read from the environment, or a `.env` file, at startup.
//! See [config::Config::from_vars] for the variables.

use chrono::Local;
use config::Config;
use dotenvy::dotenv;
use error::Failure;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod de;
mod error;
mod job;
mod scholar;
mod slack;

/// Application entrypoint. Initialises tracing, checks for environment
/// variables, and runs the job.
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let has_dotenv = dotenv().is_ok();
    if !has_dotenv {
        warn!("No .env found");
    }

    match run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<usize, Failure> {
    let config = Config::from_env()?;

    job::run(&config, Local::now().date_naive()).await
}
