//! Order code tool entry point
//!
//! Issues sequence-type codes, multi-seller order and return-order codes, and
//! trade numbers from the command line, using the same creators and the same
//! layered configuration as library callers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codes_config::{GeneratorConfig, LoggingConfig};
use codes_types::{BuyerId, SellerId, TradeId};
use order_codes::{
    create_trade_no, parse_trade_no, MultiSellerOrderCodeCreator, SequenceTypeOrderCodeCreator,
    SystemClock,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sequence-type order code for today
    Sequence {
        /// Positive sequence number
        #[arg(short, long, allow_hyphen_values = true)]
        sequence: i64,

        /// Minimum pad width of the sequence; defaults to the configured width
        #[arg(short, long, allow_hyphen_values = true)]
        width: Option<i64>,
    },
    /// Multi-seller order codes
    MultiSeller {
        /// Seller id
        #[arg(short, long)]
        seller: u64,

        /// Buyer id
        #[arg(short, long)]
        buyer: u64,

        /// Number of codes to issue
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Label the codes as return-order codes
        #[arg(long)]
        return_order: bool,
    },
    /// Trade number for a trade and its count of existing trade numbers
    TradeNo {
        /// Trade id
        #[arg(short, long)]
        trade_id: u64,

        /// Trade numbers already issued for this trade
        #[arg(long, default_value_t = 0)]
        count: u32,
    },
    /// Split a trade number back into trade id and count
    ParseTradeNo {
        /// 12-digit trade number
        trade_no: String,
    },
    /// Print the effective configuration
    ShowConfig,
}

/// One line of output per issued value
#[derive(Debug, Serialize)]
struct Issued {
    kind: &'static str,
    values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ParsedTradeNo {
    trade_no: String,
    trade_id: u64,
    count_trade_no: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GeneratorConfig::load(cli.config.as_deref())?;
    init_tracing(&config.logging);

    info!("Order code tool {}", env!("CARGO_PKG_VERSION"));
    debug!("Configuration loaded: {:?}", config);

    match cli.command {
        Commands::Sequence { sequence, width } => {
            let creator =
                SequenceTypeOrderCodeCreator::from_config(&config.sequence, SystemClock)?;
            let code = match width {
                Some(width) => creator.create(sequence, width)?,
                None => creator.create_with_default_width(sequence)?,
            };
            print_issued(cli.json, "order_code", vec![code])?;
        }
        Commands::MultiSeller {
            seller,
            buyer,
            count,
            return_order,
        } => {
            let (seller_id, buyer_id) = order_parties(seller, buyer)?;
            let creator = MultiSellerOrderCodeCreator::new(config.multi_seller.clone())?;
            let codes = (0..count)
                .map(|_| creator.create(seller_id, buyer_id))
                .collect::<codes_types::Result<Vec<_>>>()?;
            let kind = if return_order {
                "return_order_code"
            } else {
                "order_code"
            };
            info!(seller, buyer, count, kind, "Issued multi-seller codes");
            print_issued(cli.json, kind, codes)?;
        }
        Commands::TradeNo { trade_id, count } => {
            let trade_no = create_trade_no(TradeId::new(trade_id), count)?;
            print_issued(cli.json, "trade_no", vec![trade_no])?;
        }
        Commands::ParseTradeNo { trade_no } => {
            let (trade_id, count_trade_no) = parse_trade_no(&trade_no)?;
            let parsed = ParsedTradeNo {
                trade_no,
                trade_id: trade_id.inner(),
                count_trade_no,
            };
            if cli.json {
                println!("{}", serde_json::to_string(&parsed)?);
            } else {
                println!("trade_id={} count={}", parsed.trade_id, parsed.count_trade_no);
            }
        }
        Commands::ShowConfig => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", config.to_toml_string()?);
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only issued values
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Seller and buyer ids are database keys; zero means a missing row
fn order_parties(seller: u64, buyer: u64) -> Result<(SellerId, BuyerId)> {
    let seller_id = SellerId::new_validated(seller).context("Invalid seller id")?;
    let buyer_id = BuyerId::new_validated(buyer).context("Invalid buyer id")?;
    Ok((seller_id, buyer_id))
}

fn print_issued(json: bool, kind: &'static str, values: Vec<String>) -> Result<()> {
    if json {
        let issued = Issued { kind, values };
        let line = serde_json::to_string(&issued).context("Failed to encode output")?;
        println!("{}", line);
    } else {
        for value in values {
            println!("{}", value);
        }
    }
    Ok(())
}
