//! Classdeck
//!
//! A terminal admin dashboard for a course-management backend.

mod api;
mod consts;
mod environment;
mod events;
mod logging;
mod runtime;
mod ui;
mod workers;

use crate::api::{ApiClient, DashboardApi};
use crate::api::types::HealthStatus;
use crate::environment::Environment;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::error::Error;
use std::io;
use std::sync::Arc;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Start the dashboard
    Start {
        /// Override the backend base URL
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },

    /// Probe the backend health endpoint and exit
    Check {
        /// Override the backend base URL
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
}

/// Pick the backend environment. An explicit `--base-url` wins over the
/// `CLASSDECK_ENVIRONMENT` variable, which falls back to local.
fn resolve_environment(base_url: Option<String>) -> Environment {
    if let Some(url) = base_url {
        return Environment::Custom { api_base_url: url };
    }
    std::env::var("CLASSDECK_ENVIRONMENT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

async fn check(environment: Environment) {
    let client = ApiClient::new(environment);
    match client.health().await {
        Ok(HealthStatus::Healthy) => {
            println!(
                "Backend at {} is healthy.",
                client.environment().api_base_url()
            );
        }
        Ok(HealthStatus::Unhealthy(status)) => {
            println!("Backend reported status: {}", status);
        }
        Err(e) => {
            println!("Connection error: {}", e);
        }
    }
}

async fn start(environment: Environment) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let api: Arc<dyn DashboardApi> = Arc::new(ApiClient::new(environment.clone()));
    let (dispatcher, event_receiver) = runtime::start(api);
    let app = ui::App::new(environment, dispatcher, event_receiver);

    let res = ui::run(&mut terminal, app).await;

    // Restore the terminal even when the loop errored
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start { base_url } => start(resolve_environment(base_url)).await,
        Command::Check { base_url } => {
            check(resolve_environment(base_url)).await;
            Ok(())
        }
    }
}
