//! Pulseboard
//!
//! Serves the transaction dashboard, or prints what it would show.
//!
//! Run with: cargo run -- serve --port 8050

use anyhow::Context;
use clap::{Parser, Subcommand};
use pulseboard::config::{generate_default_config, Config};
use pulseboard::{AppState, Dataset, ViewController};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "pulseboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Transaction dashboard: amount by state for a selected brand")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// CSV export to load instead of the built-in sample table
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard over HTTP (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List the brands offered by the selector
    Brands,

    /// Print the summary line for a brand
    Summary {
        /// Brand to summarize (default: the dashboard's initial brand)
        #[arg(short, long)]
        brand: Option<String>,
        /// Print only the figures
        #[arg(long)]
        compact: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, origin) = Config::resolve(cli.config.as_deref())?;

    if let Err(e) = pulseboard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    origin.log();

    if let Some(data) = cli.data {
        config.dashboard.data_file = Some(data);
    }

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            tracing::info!("Starting Pulseboard v{}", env!("CARGO_PKG_VERSION"));

            let dataset = load_dataset(config.dashboard.data_file.as_deref())?;
            tracing::info!(
                records = dataset.len(),
                brands = ?dataset.brands(),
                "Dataset ready"
            );

            let state = AppState::new(
                dataset,
                config.dashboard.default_brand.as_deref(),
                config.dashboard.page_settings(),
            );
            pulseboard::serve(state, &config.server.addr()).await?;
        }

        Commands::Brands => {
            let dataset = load_dataset(config.dashboard.data_file.as_deref())?;
            for brand in dataset.brands() {
                println!("{}", brand);
            }
        }

        Commands::Summary { brand, compact } => {
            let dataset = load_dataset(config.dashboard.data_file.as_deref())?;
            let controller =
                ViewController::new(dataset, config.dashboard.default_brand.as_deref());
            let view = controller.view_for(brand.as_deref());

            if compact {
                println!("{}", view.summary.compact());
            } else {
                println!("{}", view.chart.title);
                for bar in &view.chart.bars {
                    println!("  {:<20} {:>8}", bar.category, bar.text);
                }
                println!("{}", view.summary);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Load the CSV export when configured, otherwise the built-in sample
fn load_dataset(data_file: Option<&Path>) -> anyhow::Result<Arc<Dataset>> {
    let dataset = match data_file {
        Some(path) => Dataset::from_csv_path(path)
            .with_context(|| format!("Failed to load dataset from {:?}", path))?,
        None => Dataset::sample(),
    };
    Ok(Arc::new(dataset))
}
