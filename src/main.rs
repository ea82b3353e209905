use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apubot::config::Config;
use apubot::storage::ExportFormat;

mod commands;

#[derive(Parser)]
#[command(
    name = "apubot",
    version,
    about = "Academic calendar and course timetable scraper for the APU academic office",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); defaults to the configured format
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// TOML configuration file; environment variables are used otherwise
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the academic calendar
    Calendar {
        /// Also write the events to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file format (delimited, json)
        #[arg(short, long, default_value = "delimited", value_parser = parse_format)]
        format: ExportFormat,

        /// Only events dated today or later
        #[arg(long, default_value = "false")]
        upcoming: bool,
    },

    /// Print every lecture of the course timetables
    Timetable {
        /// Also write the lectures to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file format (delimited, json)
        #[arg(short, long, default_value = "delimited", value_parser = parse_format)]
        format: ExportFormat,
    },

    /// Search lectures by subject name, subject id or instructor
    Search {
        /// Search query; starts an interactive prompt when omitted
        query: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    // Initialize tracing/logging; command-line flags override the config
    let format = cli.log_format.as_deref().unwrap_or(&config.logging.format);
    setup_tracing(format, &config.logging.filter_directives(cli.verbose))?;

    tracing::info!(base_url = %config.site.base_url, "apubot starting");

    match cli.command {
        Commands::Calendar {
            output,
            format,
            upcoming,
        } => {
            tracing::info!(output = ?output, upcoming = %upcoming, "Starting calendar command");
            commands::calendar(config, output, format, upcoming).await?;
        }

        Commands::Timetable { output, format } => {
            tracing::info!(output = ?output, "Starting timetable command");
            commands::timetable(config, output, format).await?;
        }

        Commands::Search { query } => {
            tracing::info!(query = ?query, "Starting search command");
            commands::search(config, query).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn parse_format(value: &str) -> Result<ExportFormat, String> {
    value.parse().map_err(|e: apubot::error::Error| e.to_string())
}

fn setup_tracing(format: &str, directives: &str) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter: {directives}"))?;

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
