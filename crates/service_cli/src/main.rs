//! grants CLI - equity grant value projection
//!
//! # Commands
//!
//! - `grants project` - Print projection tables for 2025-2035
//! - `grants export --output <file>` - Write the ledger as CSV
//! - `grants rates --rates 0,3,5` - Compare redemption-rate scenarios
//! - `grants growth --rates 10,15,20,25` - Compare growth rates
//! - `grants check` - Validate configuration and vesting schedule
//!
//! Rates on the command line are whole percentages.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use grant_core::types::Year;
use service_cli::commands::{
    self, percent_to_rate,
    project::{OutputFormat, View},
    rates::RatesArgs,
    Context, RateOverrides,
};
use service_cli::config::GrantsConfig;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Equity grant value projection
#[derive(Parser)]
#[command(name = "grants")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (default: grants.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Fill missing vesting years from the nearest earlier year
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Rate overrides shared by the projection commands, in whole percent.
#[derive(clap::Args)]
struct RateFlags {
    /// Share-price growth rate (%)
    #[arg(short, long)]
    growth_rate: Option<f64>,

    /// Common-share redemption rate (%)
    #[arg(long)]
    common_rate: Option<f64>,

    /// Option redemption rate (%); disables same-rate mode
    #[arg(long)]
    option_rate: Option<f64>,
}

impl RateFlags {
    fn overrides(&self) -> RateOverrides {
        RateOverrides {
            growth_rate: self.growth_rate.map(percent_to_rate),
            common_rate: self.common_rate.map(percent_to_rate),
            option_rate: self.option_rate.map(percent_to_rate),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print projection tables
    Project {
        /// Tables to print
        #[arg(long, value_enum, default_value_t = View::All)]
        view: View,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        #[command(flatten)]
        rates: RateFlags,
    },

    /// Write the 2025-2035 ledger as CSV
    Export {
        /// Output file (default: named after the rates)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        rates: RateFlags,
    },

    /// Compare redemption-rate scenarios
    Rates {
        /// Redemption rates (%), shared or common-only
        #[arg(short, long, value_delimiter = ',', default_value = "0,3,5,8,10")]
        rates: Vec<f64>,

        /// Separate option redemption rates (%), crossed with --rates
        #[arg(long, value_delimiter = ',')]
        option_rates: Option<Vec<f64>>,

        /// Snapshot year
        #[arg(short, long, default_value_t = 2030)]
        year: u16,

        /// Share-price growth rate (%)
        #[arg(short, long)]
        growth_rate: Option<f64>,

        /// Write the snapshot as CSV (default name: grants_<year>.csv)
        #[arg(short, long)]
        output: Option<Option<PathBuf>>,
    },

    /// Compare share-price growth rates
    Growth {
        /// Growth rates (%)
        #[arg(short, long, value_delimiter = ',', default_value = "10,15,20,25")]
        rates: Vec<f64>,

        /// Pin both redemption rates to zero
        #[arg(long)]
        no_redemption: bool,
    },

    /// Validate configuration and vesting schedule
    Check,
}

fn init_tracing(verbose: bool, log_level: &str) {
    let level = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| {
            EnvFilter::try_new(format!(
                "grants={0},service_cli={0},grant_engine={0}",
                level.to_lowercase()
            ))
            .ok()
        })
        .unwrap_or_else(|| EnvFilter::new("grants=info,service_cli=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GrantsConfig::load_or_default(cli.config.as_deref())?.with_env_override()?;
    init_tracing(cli.verbose, &config.log_level);
    debug!(?config, "Configuration loaded");

    if let Commands::Check = cli.command {
        commands::check::run(&config, cli.lenient)?;
        return Ok(());
    }

    let ctx = Context::new(config, cli.lenient)?;

    match cli.command {
        Commands::Project {
            view,
            format,
            rates,
        } => commands::project::run(&ctx, rates.overrides(), view, format)?,
        Commands::Export { output, rates } => {
            let path = commands::export::run(&ctx, rates.overrides(), output.as_deref())?;
            info!("Wrote {}", path.display());
        }
        Commands::Rates {
            rates,
            option_rates,
            year,
            growth_rate,
            output,
        } => {
            let args = RatesArgs {
                rates: rates.into_iter().map(percent_to_rate).collect(),
                option_rates: option_rates
                    .map(|rates| rates.into_iter().map(percent_to_rate).collect()),
                year: Year::new(year),
                growth_rate: growth_rate.map(percent_to_rate),
            };
            commands::rates::run(&ctx, &args, output.as_ref().map(|o| o.as_deref()))?;
        }
        Commands::Growth {
            rates,
            no_redemption,
        } => {
            let rates: Vec<f64> = rates.into_iter().map(percent_to_rate).collect();
            commands::growth::run(&ctx, &rates, no_redemption)?;
        }
        Commands::Check => {}
    }

    Ok(())
}
