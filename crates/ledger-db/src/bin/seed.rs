//! # Seed Data Generator
//!
//! Populates the database with demo shipments for development.
//!
//! ## Usage
//! ```bash
//! # Generate 5 shipments (default)
//! cargo run -p ledger-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p ledger-db --bin seed -- --count 20
//!
//! # Specify database path
//! cargo run -p ledger-db --bin seed -- --db ./data/ledger.db
//! ```
//!
//! ## Generated Data
//! Per shipment:
//! - 1-3 calculations, one of them loss-making
//! - 1-2 Income rows (freight charge, surcharge)
//! - 1-3 Cost rows (carrier, fuel, handling)
//!
//! Income/Cost rows have no HTTP write path; this binary is how they get
//! into a database.

use anyhow::{bail, Context};
use ledger_core::{validation, NewCalculation};
use ledger_db::{Database, DbConfig};
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_COUNT: usize = 5;
const DEFAULT_DB: &str = "./ledger.db";

/// Base freight charges, cycled per shipment.
const FREIGHT: &[f64] = &[1_250.0, 980.0, 2_400.0, 615.5, 1_800.0, 3_150.0];

/// Cost lines as a fraction of the freight charge.
const COST_SHARES: &[(&str, f64)] = &[("carrier", 0.55), ("fuel", 0.12), ("handling", 0.08)];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(SeedArgs { count, db_path }) = parse_args(&args)? else {
        print_help();
        return Ok(());
    };

    info!(db = %db_path, shipments = count, "Seeding database");

    let db = Database::new(DbConfig::new(&db_path))
        .await
        .with_context(|| format!("failed to open {db_path}"))?;

    let existing = db.shipments().count().await?;
    if existing > 0 {
        warn!(
            existing,
            "Database already has shipments; skipping seed. Delete the file to regenerate."
        );
        return Ok(());
    }

    let start = std::time::Instant::now();

    for n in 0..count {
        seed_shipment(&db, n).await?;
    }

    info!(
        shipments = db.shipments().count().await?,
        calculations = db.calculations().count().await?,
        incomes = db.ledger().count_incomes().await?,
        costs = db.ledger().count_costs().await?,
        elapsed = ?start.elapsed(),
        "Seed complete"
    );

    db.close().await;
    Ok(())
}

#[derive(Debug, PartialEq)]
struct SeedArgs {
    count: usize,
    db_path: String,
}

/// Parses `args` (program name first). `None` means `--help` was asked for.
fn parse_args(args: &[String]) -> anyhow::Result<Option<SeedArgs>> {
    let mut parsed = SeedArgs {
        count: DEFAULT_COUNT,
        db_path: String::from(DEFAULT_DB),
    };

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--count" | "-c" => {
                let Some(value) = rest.next() else {
                    bail!("{arg} requires a value");
                };
                parsed.count = value
                    .parse()
                    .with_context(|| format!("invalid --count value '{value}'"))?;
            }
            "--db" | "-d" => {
                let Some(value) = rest.next() else {
                    bail!("{arg} requires a value");
                };
                parsed.db_path = value.clone();
            }
            "--help" | "-h" => return Ok(None),
            other => warn!(arg = other, "Ignoring unknown argument"),
        }
    }

    Ok(Some(parsed))
}

fn print_help() {
    println!("Profit Ledger Seed Data Generator");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --count <N>    Number of shipments to generate (default: {DEFAULT_COUNT})");
    println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB})");
    println!("  -h, --help         Show this help message");
}

/// Creates one shipment with its calculations and Income/Cost bookings.
async fn seed_shipment(db: &Database, n: usize) -> anyhow::Result<()> {
    let shipment = db.shipments().insert().await?;
    let freight = FREIGHT[n % FREIGHT.len()];

    // Calculations: a profitable one, then alternately a loss or a cost-only entry.
    let mut pairs = vec![(Some(freight), Some(freight * 0.7))];
    if n % 2 == 0 {
        pairs.push((Some(freight * 0.4), Some(freight * 0.5)));
    }
    if n % 3 == 0 {
        pairs.push((None, Some(75.0)));
    }

    for (income, cost) in pairs {
        let profit_or_loss = validation::evaluate(income, cost)?;
        db.calculations()
            .insert(&NewCalculation {
                shipment_id: shipment.id,
                income,
                cost,
                profit_or_loss,
            })
            .await?;
    }

    let ledger = db.ledger();
    ledger.insert_income(shipment.id, freight).await?;
    if n % 2 == 1 {
        ledger.insert_income(shipment.id, 150.0).await?;
    }

    let cost_lines = 1 + n % COST_SHARES.len();
    for (_, share) in COST_SHARES.iter().take(cost_lines) {
        ledger.insert_cost(shipment.id, freight * share).await?;
    }

    Ok(())
}
