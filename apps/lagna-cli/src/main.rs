use anyhow::Context;
use clap::{Parser, Subcommand};
use lagna::api::ChatRequest;
use lagna::{open_ephemeris, AstrologyService, BirthChartRequest, Chart, ChartService, StaticGeocoder};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sidereal birth charts and chart readings")]
struct Args {
    /// Config file (default: probe configs/lagna.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Swiss Ephemeris data directory; overrides config and environment.
    #[arg(long, global = true)]
    ephemeris_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a birth chart and print it as JSON.
    Chart {
        /// ISO-8601 birth date-time, e.g. 1990-05-15T10:30:00Z.
        #[arg(long)]
        date: String,
        /// HH:MM, informational; the date's time is used.
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        location: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Answer a question about a chart read from a JSON file.
    Chat {
        #[arg(long)]
        message: String,
        #[arg(long)]
        chart: PathBuf,
    },
    /// Dispatch a JSON request body from stdin to an endpoint path.
    Request { path: String },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut settings = lagna_config::load_settings(args.config.as_deref())?;
    if let Some(path) = args.ephemeris_path {
        settings.ephemeris.ephemeris_path = Some(path);
    }
    match &settings.source {
        Some(path) => log::info!("Loaded settings from {}", path.display()),
        None => log::debug!("No lagna.toml found, using defaults"),
    }

    let charts = ChartService::new(open_ephemeris(&settings.ephemeris), settings.fallback);
    log::info!("Ephemeris failures answered with {}", charts.fallback_policy());
    let service = AstrologyService::new(charts, Box::new(StaticGeocoder::new()));

    match args.command {
        Command::Chart {
            date,
            time,
            location,
            name,
        } => {
            let request = BirthChartRequest {
                name,
                date,
                time,
                location,
            };
            let chart = service.generate_birth_chart(&request)?;
            println!("{}", serde_json::to_string_pretty(&chart)?);
        }
        Command::Chat { message, chart } => {
            let text = std::fs::read_to_string(&chart)
                .with_context(|| format!("Failed to read chart {}", chart.display()))?;
            let birth_chart: Chart = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse chart {}", chart.display()))?;
            let request = ChatRequest {
                message,
                birth_details: None,
                birth_chart,
            };
            println!("{}", serde_json::to_string_pretty(&service.chat(&request))?);
        }
        Command::Request { path } => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read request body from stdin")?;
            let response = service.handle(&path, &body);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
