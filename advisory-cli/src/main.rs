use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

mod client;
mod config;
mod controller;
mod dashboard;
mod doctor;
mod factors;
mod info;
mod pretty;
mod watch;
use advisory_common::Carousel;
use client::AdvisoryClient;
use config::Config;
use controller::{DashboardLoader, PageController, PageState};

#[derive(clap::Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Base URL of the advisory API (the part before /public-advisory)
    #[clap(long)]
    url: Option<String>,

    /// Path to a TOML config file
    #[clap(long)]
    config: Option<PathBuf>,

    /// Number of forecast days to request
    #[clap(long)]
    days: Option<u32>,

    /// Disable colorized output
    #[clap(long)]
    no_color: bool,

    /// Print raw JSON instead of rendered output
    #[clap(long)]
    json: bool,

    /// Write output to a file
    #[clap(long)]
    output: Option<PathBuf>,

    /// Subcommands
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Fetch and render the full dashboard once (default)
    Dashboard,
    /// Interactive dashboard with refresh and specialist browsing
    Watch,
    /// Show the patient-load forecast
    Forecast,
    /// Show current environmental factors
    Factors,
    /// Show the health-risk breakdown
    Risks,
    /// Show prediction model metadata
    ModelInfo,
    /// Browse the specialist directory
    Specialists {
        /// Position to select (1-based)
        #[clap(long)]
        select: Option<usize>,
    },
    /// Check connectivity to every advisory endpoint
    Doctor,
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .init();
}

fn emit(output: Option<&PathBuf>, text: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref()).context("failed to load configuration")?;
    init_logging(&config.logging.level);

    let base_url = args.url.clone().unwrap_or(config.api.base_url.clone());
    let days = args.days.unwrap_or(config.display.forecast_days);
    let color = config.display.color && !args.no_color && args.output.is_none();
    let timeout = config.api.timeout_ms.map(Duration::from_millis);
    let client = AdvisoryClient::new(&base_url, timeout)?;
    let output = args.output.as_ref();

    match args.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => {
            let mut controller = PageController::new(DashboardLoader::new(client, days));
            controller.refresh().await;
            let text = match (args.json, controller.state()) {
                (true, PageState::Success(data)) => serde_json::to_string_pretty(&serde_json::json!({
                    "current": data.advisory,
                    "forecast": data.forecast,
                }))?,
                (true, PageState::Error(message)) => {
                    serde_json::to_string_pretty(&serde_json::json!({ "error": message }))?
                }
                (_, state) => {
                    dashboard::render_page(state, controller.carousel(), chrono::Utc::now(), color)
                }
            };
            emit(output, &text)?;
            if let PageState::Error(message) = controller.state() {
                anyhow::bail!("{message}");
            }
        }
        Command::Watch => {
            let controller = PageController::new(DashboardLoader::new(client, days));
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            watch::run_watch(controller, stdin, &mut stdout, color).await?;
        }
        Command::Forecast => {
            let forecast = client.forecast(days).await?;
            let text = if args.json {
                serde_json::to_string_pretty(&serde_json::json!({ "forecast": forecast }))?
            } else {
                dashboard::render_forecast(forecast.as_deref(), color)
            };
            emit(output, &text)?;
        }
        Command::Factors => {
            let text = factors::run_factors(&client, args.json, color).await?;
            emit(output, &text)?;
        }
        Command::Risks => {
            let risks = client.health_risks().await?;
            emit(output, &info::render_payload("Health Risks", &risks, args.json, color))?;
        }
        Command::ModelInfo => {
            let model = client.model_info().await?;
            emit(output, &info::render_payload("Model Info", &model, args.json, color))?;
        }
        Command::Specialists { select } => {
            let mut carousel = Carousel::default();
            if let Some(position) = select
                && !position.checked_sub(1).is_some_and(|idx| carousel.select(idx))
            {
                anyhow::bail!(
                    "specialist position must be between 1 and {}",
                    carousel.len()
                );
            }
            let text = if args.json {
                serde_json::to_string_pretty(&carousel.current(advisory_common::SPECIALISTS))?
            } else {
                dashboard::render_directory(&carousel, color)
            };
            emit(output, &text)?;
        }
        Command::Doctor => {
            let report = doctor::run_doctor(&client, days, color).await;
            emit(output, &report)?;
        }
    }

    Ok(())
}
