use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use monaco_sdk::config::{self, Config};
use monaco_sdk::domain::abi::Contract;
use monaco_sdk::domain::Market;
use monaco_sdk::infrastructure::{AbiScanner, ContractAbis};
use monaco_sdk::modules::toolkit::{self, convert::PriceDirection};

#[derive(Debug, Parser)]
#[command(
    name = "monaco",
    version,
    about = "Monaco SDK: universal decimal conversion and contract ABIs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a human-readable amount into native and universal integers
    ToUniversal {
        /// Amount such as 1.5
        value: String,
        #[command(flatten)]
        precision: Precision,
    },

    /// Convert a universal integer back to native precision
    FromUniversal {
        /// Raw 18-decimal integer (decimal or 0x hex)
        raw: String,
        #[command(flatten)]
        precision: Precision,
    },

    /// Rescale a quote-per-base price
    Price {
        /// Raw price integer
        raw: String,
        /// Base token symbol/address or decimal count
        #[arg(long)]
        base: String,
        /// Quote token symbol/address or decimal count
        #[arg(long)]
        quote: String,
        /// Treat RAW as a universal price and convert it back
        #[arg(long)]
        from_universal: bool,
    },

    /// Inspect the exchange contract ABIs
    Abi {
        /// Artifact directory (defaults to config abi_dir, then cwd)
        #[arg(long)]
        dir: Option<PathBuf>,
        #[command(subcommand)]
        action: AbiAction,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct Precision {
    /// Native decimals of the token
    #[arg(long)]
    decimals: Option<u8>,
    /// Configured token symbol or address
    #[arg(long)]
    token: Option<String>,
}

#[derive(Debug, Subcommand)]
enum AbiAction {
    /// Show which contract ABIs were found
    List,
    /// Print a contract's ABI as JSON
    Show { contract: Contract },
    /// Resolve a 4-byte function selector
    Selector { selector: String },
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("MONACO_LOG"))
        .init();

    let cli = Cli::parse();
    let config = config::load();

    if let Err(err) = run(cli, &config) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Command::ToUniversal { value, precision } => {
            let decimals = resolve_precision(&precision, config)?;
            print!("{}", toolkit::convert::to_universal(&value, decimals)?);
        }
        Command::FromUniversal { raw, precision } => {
            let decimals = resolve_precision(&precision, config)?;
            print!("{}", toolkit::convert::from_universal(&raw, decimals)?);
        }
        Command::Price {
            raw,
            base,
            quote,
            from_universal,
        } => {
            let market = Market::new(
                resolve_decimals(&base, config)?,
                resolve_decimals(&quote, config)?,
            );
            let direction = if from_universal {
                PriceDirection::FromUniversal
            } else {
                PriceDirection::ToUniversal
            };
            print!("{}", toolkit::convert::price(&raw, market, direction)?);
        }
        Command::Abi { dir, action } => {
            let abis = load_abis(dir, config);
            match action {
                AbiAction::List => print!("{}", toolkit::abi::list(&abis)),
                AbiAction::Show { contract } => println!("{}", toolkit::abi::show(&abis, contract)?),
                AbiAction::Selector { selector } => {
                    print!("{}", toolkit::abi::selector(&abis, &selector)?)
                }
            }
        }
    }
    Ok(())
}

fn resolve_precision(precision: &Precision, config: &Config) -> Result<u8> {
    match (precision.decimals, precision.token.as_deref()) {
        (Some(decimals), _) => Ok(decimals),
        (None, Some(token)) => config.token_decimals(token),
        (None, None) => bail!("either --decimals or --token is required"),
    }
}

/// A bare number is a decimal count, anything else a configured token
fn resolve_decimals(value: &str, config: &Config) -> Result<u8> {
    match value.trim().parse::<u8>() {
        Ok(decimals) => Ok(decimals),
        Err(_) => config.token_decimals(value),
    }
}

fn load_abis(dir: Option<PathBuf>, config: &Config) -> ContractAbis {
    let root = dir
        .or_else(|| config.abi_dir.clone())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    debug!(root = %root.display(), "scanning for contract ABIs");
    AbiScanner::scan(root)
}
