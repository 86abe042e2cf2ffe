//! # Profit Ledger API
//!
//! REST server for shipments, their calculations, and Income/Cost profit
//! summaries.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Ledger API                                      │
//! │                                                                         │
//! │  HTTP ──► routes (axum) ──► AppState services ──► ledger-db ──► SQLite │
//! │   ▲                                │                                    │
//! │   └──── JSON / ErrorBody ◄─────────┘                                    │
//! │                                                                         │
//! │  ┌────────────────┐  ┌───────────────────┐  ┌────────────────────────┐ │
//! │  │ShipmentService │  │CalculationService │  │ ProfitService          │ │
//! │  │ • list         │  │ • list by shipment│  │ • calculate_profit     │ │
//! │  │ • create / get │  │ • create          │  │   (Income − Cost)      │ │
//! │  │ • delete       │  │ • delete          │  │                        │ │
//! │  └────────────────┘  └───────────────────┘  └────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! See [`config`]. Environment variables:
//! - `LEDGER_API_HOST` - bind interface (default: 0.0.0.0)
//! - `LEDGER_API_PORT` - HTTP port (default: 8080)
//! - `LEDGER_API_DATABASE_PATH` - SQLite file (default: ./ledger.db)
//! - `LEDGER_API_MAX_CONNECTIONS` - pool size (default: 5)
//! - `LEDGER_API_RUN_MIGRATIONS` - migrate on startup (default: true)
//! - `LEDGER_API_CONFIG` - extra TOML config file
//! - `RUST_LOG` - log filter

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

use std::sync::Arc;

use ledger_core::{CalculationService, ProfitService, ShipmentService};
use ledger_db::Database;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorBody};
pub use routes::router;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub shipments: ShipmentService,
    pub calculations: CalculationService,
    pub profit: ProfitService,
    pub db: Database,
}

impl AppState {
    /// Wires the workflows to the SQLite repositories of `db`.
    pub fn new(db: Database) -> Self {
        let shipments = ShipmentService::new(Arc::new(db.shipments()));
        let calculations = CalculationService::new(Arc::new(db.calculations()), shipments.clone());
        let profit = ProfitService::new(Arc::new(db.ledger()));

        AppState {
            shipments,
            calculations,
            profit,
            db,
        }
    }
}
