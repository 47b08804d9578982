//! Command-line front end for the multi-leg order endpoints.
//!
//! The working order lives in a JSON file. Shaping commands print the updated
//! order (and write it back with `--write`); API commands print the gateway's
//! response.
//!
//! # Usage
//!
//! ```sh
//! export SAXO_ACCESS_TOKEN="your-access-token"
//! export SAXO_ACCOUNT_KEY="your-account-key"
//! cargo run --bin multileg --features cli -- shape --order order.json --order-type StopLimit
//! cargo run --bin multileg --features cli -- strategy --order order.json --root 19 --strategy Straddle --write
//! cargo run --bin multileg --features cli -- precheck --order order.json
//! cargo run --bin multileg --features cli -- place --order order.json
//! cargo run --bin multileg --features cli -- cancel --order-id 76289286
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use saxo_multileg::config::Config;
use saxo_multileg::constants::{DEFAULT_REFERENCE_PRICE, SIM_BASE_URL};
use saxo_multileg::error::{Result, SaxoError};
use saxo_multileg::shaper::{self, ShapingRules};
use saxo_multileg::types::order::Order;
use saxo_multileg::types::precheck::PrecheckOutcome;
use saxo_multileg::{OrderSession, SaxoClient};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "multileg", version, about = "Multi-leg option orders on the Saxo OpenAPI")]
struct Cli {
    /// OpenAPI bearer token.
    #[arg(long, env = "SAXO_ACCESS_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Account the orders are placed on.
    #[arg(long, env = "SAXO_ACCOUNT_KEY", global = true)]
    account_key: Option<String>,

    /// Gateway base URL.
    #[arg(long, env = "SAXO_BASE_URL", default_value = SIM_BASE_URL, global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct OrderFile {
    /// JSON file holding the working order.
    #[arg(long)]
    order: PathBuf,
}

#[derive(Args)]
struct Selection {
    /// Order type to shape the order for (e.g. `Limit`, `StopLimit`).
    #[arg(long)]
    order_type: Option<String>,

    /// Order duration to shape the order for (e.g. `GoodTillDate`).
    #[arg(long)]
    duration: Option<String>,

    /// Price written to `OrderPrice`.
    #[arg(long, default_value_t = DEFAULT_REFERENCE_PRICE)]
    price: f64,

    /// Write the shaped order back to the order file.
    #[arg(long)]
    write: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Shape an order for a type and/or duration without calling the API.
    Shape {
        #[command(flatten)]
        file: OrderFile,
        #[command(flatten)]
        selection: Selection,
    },
    /// Replace the order's legs with a prefilled option strategy.
    Strategy {
        #[command(flatten)]
        file: OrderFile,
        #[command(flatten)]
        selection: Selection,
        /// Option root id.
        #[arg(long)]
        root: String,
        /// Strategy type (e.g. `Straddle`, `Vertical`).
        #[arg(long)]
        strategy: String,
    },
    /// Fetch an option series and reshape the order for its supported types.
    Series {
        #[command(flatten)]
        file: OrderFile,
        #[command(flatten)]
        selection: Selection,
        /// Option root id.
        #[arg(long)]
        root: String,
    },
    /// Validate the order without placing it.
    Precheck {
        #[command(flatten)]
        file: OrderFile,
    },
    /// Place the order.
    Place {
        #[command(flatten)]
        file: OrderFile,
        /// Send the order's `ExternalReference` as `X-Request-ID`.
        #[arg(long)]
        request_id_from_reference: bool,
    },
    /// Modify a placed order with the contents of the order file.
    Modify {
        #[command(flatten)]
        file: OrderFile,
        /// Multi-leg order id returned by `place`.
        #[arg(long)]
        order_id: String,
        /// Send the order's `ExternalReference` as `X-Request-ID`.
        #[arg(long)]
        request_id_from_reference: bool,
    },
    /// Cancel a placed order.
    Cancel {
        /// Multi-leg order id returned by `place`.
        #[arg(long)]
        order_id: String,
    },
    /// Load a strategy, precheck, place, modify and cancel in one session.
    Demo {
        #[command(flatten)]
        file: OrderFile,
        #[command(flatten)]
        selection: Selection,
        #[arg(long)]
        root: String,
        #[arg(long)]
        strategy: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Shape { ref file, ref selection } => shape(&file.order, selection),
        Command::Strategy {
            ref file,
            ref selection,
            ref root,
            ref strategy,
        } => {
            let mut session = session(&cli, &file.order, selection)?;
            session.load_strategy(root, strategy).await?;
            apply_selection(&mut session, selection)?;
            finish(session.order(), &file.order, selection.write)
        }
        Command::Series {
            ref file,
            ref selection,
            ref root,
        } => {
            let mut session = session(&cli, &file.order, selection)?;
            let space = session.load_series(root).await?;
            print_json(&space)?;
            apply_selection(&mut session, selection)?;
            finish(session.order(), &file.order, selection.write)
        }
        Command::Precheck { ref file } => {
            let mut session = OrderSession::new(client(&cli)?, read_order(&file.order)?)?;
            let (_, response) = session.precheck().await?;
            print_json(&response)
        }
        Command::Place {
            ref file,
            request_id_from_reference,
        } => {
            let mut session = OrderSession::new(client(&cli)?, read_order(&file.order)?)?
                .with_reference_as_request_id(request_id_from_reference);
            let submission = session.place().await?;
            print_json(&submission.body)?;
            if let Some(id) = submission.request_id {
                println!("X-Request-ID response header: {id}");
            }
            Ok(())
        }
        Command::Modify {
            ref file,
            ref order_id,
            request_id_from_reference,
        } => {
            let mut session = OrderSession::new(client(&cli)?, read_order(&file.order)?)?
                .with_reference_as_request_id(request_id_from_reference)
                .with_last_order_id(order_id.as_str());
            let submission = session.modify().await?;
            print_json(&submission.body)?;
            if let Some(id) = submission.request_id {
                println!("X-Request-ID response header: {id}");
            }
            Ok(())
        }
        Command::Cancel { ref order_id } => {
            let mut session = OrderSession::new(client(&cli)?, Order::new())?
                .with_last_order_id(order_id.as_str());
            let ack = session.cancel().await?;
            print_json(&ack)
        }
        Command::Demo {
            ref file,
            ref selection,
            ref root,
            ref strategy,
        } => {
            let mut session = session(&cli, &file.order, selection)?;
            demo(&mut session, selection, root, strategy).await
        }
    }
}

async fn demo(
    session: &mut OrderSession,
    selection: &Selection,
    root: &str,
    strategy: &str,
) -> Result<()> {
    session.load_strategy(root, strategy).await?;
    apply_selection(session, selection)?;
    println!("{}", session.order().to_json_pretty()?);

    let (outcome, response) = session.precheck().await?;
    print_json(&response)?;
    if !outcome.is_placeable() {
        if let PrecheckOutcome::FunctionalError(info) = &outcome {
            eprintln!("Order not placed: {info}");
        } else {
            eprintln!("Order not placed: precheck rejected it");
        }
        return Ok(());
    }

    let placed = session.place().await?;
    print_json(&placed.body)?;
    let modified = session.modify().await?;
    print_json(&modified.body)?;
    let cancelled = session.cancel().await?;
    print_json(&cancelled)
}

/// Offline shaping; needs no credentials.
fn shape(path: &Path, selection: &Selection) -> Result<()> {
    let mut order = read_order(path)?;
    let rules = ShapingRules::with_reference_price(selection.price);
    if let Some(name) = &selection.order_type {
        shaper::apply_order_type_name(&mut order, name, &rules)?;
    }
    if let Some(name) = &selection.duration {
        shaper::apply_order_duration_name(&mut order, name, Local::now().naive_local(), &rules)?;
    }
    finish(&order, path, selection.write)
}

fn apply_selection(session: &mut OrderSession, selection: &Selection) -> Result<()> {
    if let Some(name) = &selection.order_type {
        session.select_order_type_name(name)?;
    }
    if let Some(name) = &selection.duration {
        session.select_duration_name(name)?;
    }
    Ok(())
}

fn client(cli: &Cli) -> Result<SaxoClient> {
    let token = cli
        .token
        .clone()
        .ok_or_else(|| SaxoError::Config("--token / SAXO_ACCESS_TOKEN is required".into()))?;
    let account_key = cli
        .account_key
        .clone()
        .ok_or_else(|| SaxoError::Config("--account-key / SAXO_ACCOUNT_KEY is required".into()))?;
    SaxoClient::from_config(&Config::new(token, account_key).with_base_url(cli.base_url.as_str()))
}

fn session(cli: &Cli, path: &Path, selection: &Selection) -> Result<OrderSession> {
    Ok(OrderSession::new(client(cli)?, read_order(path)?)?
        .with_rules(ShapingRules::with_reference_price(selection.price)))
}

fn read_order(path: &Path) -> Result<Order> {
    let text = fs::read_to_string(path)?;
    Order::from_json(&text).inspect_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "order file is not a valid order");
    })
}

/// Print the order and optionally write it back.
fn finish(order: &Order, path: &Path, write: bool) -> Result<()> {
    let text = order.to_json_pretty()?;
    if write {
        fs::write(path, format!("{text}\n"))?;
        tracing::info!(path = %path.display(), "order file updated");
    }
    println!("{text}");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
