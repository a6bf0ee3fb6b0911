use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_model::Model;
use tincture::models::{AppConfig, OutputFormat, CONFIG_ENV};
use tincture::services::Converter;

#[derive(Parser)]
#[command(name = "tincture")]
#[command(about = "Convert, render and inspect colors in RGB, HSL, hex, CMYK and grayscale")]
struct Cli {
    /// YAML config file (falls back to $TINCTURE_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color to another model
    Convert {
        /// Color string, e.g. "#f0b43c", "rgb(240, 180, 60)" or "60 20 30 50"
        color: String,

        /// Target model: rgb, hsl, hex, cmyk or gray
        #[arg(short, long)]
        to: Model,

        /// Render format: plain, comma, css or percent
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render a color in every configured model
    Inspect {
        /// Color string
        color: String,

        /// Render format: plain, comma, css or percent
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Read a color field, or write it with --set
    Field {
        /// Color string
        color: String,

        /// Field key, e.g. r, s, hex, k or gray
        key: String,

        /// New value, validated by the model's setter
        #[arg(long)]
        set: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
    let loaded = AppConfig::try_load(config_path.as_deref());

    let log_filter = match &loaded {
        Ok(config) => config.log_filter.clone(),
        Err(_) => AppConfig::default().log_filter,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let converter = Converter::new(AppConfig::from_loaded(loaded));

    match cli.command {
        Commands::Convert {
            color,
            to,
            format,
            json,
        } => {
            let render = converter.convert(&color, to, format)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&render)?);
            } else {
                println!("{}", render.value);
            }
        }
        Commands::Inspect {
            color,
            format,
            json,
        } => {
            let report = converter.inspect(&color, format)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{} ({})", report.input, report.detected);
                for render in &report.renders {
                    println!("  {:<10} {}", render.model, render.value);
                }
            }
        }
        Commands::Field { color, key, set } => {
            let report = converter.field(&color, &key, set.as_deref())?;
            if set.is_some() {
                println!("{}", report.color);
            } else {
                println!("{}", report.value);
            }
        }
    }

    Ok(())
}
