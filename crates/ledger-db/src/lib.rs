//! # ledger-db: Database Layer for the Profit Ledger
//!
//! SQLite storage behind the `ledger-core` store traits, using sqlx for
//! async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Profit Ledger Data Flow                          │
//! │                                                                         │
//! │  HTTP handler (ledger-api)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ShipmentService / CalculationService / ProfitService (ledger-core)    │
//! │       │  Arc<dyn ...Store>                                              │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    ledger-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐   ┌──────────────┐ │   │
//! │  │   │   Database    │    │  Repositories    │   │  Migrations  │ │   │
//! │  │   │   (pool.rs)   │    │                  │   │  (embedded)  │ │   │
//! │  │   │               │    │ ShipmentRepo     │   │              │ │   │
//! │  │   │ SqlitePool    │◄───│ CalculationRepo  │   │ 001_initial_ │ │   │
//! │  │   │               │    │ LedgerRepo       │   │   schema.sql │ │   │
//! │  │   └───────────────┘    └──────────────────┘   └──────────────┘ │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (./ledger.db by default)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Store trait implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ledger_core::ShipmentService;
//! use ledger_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./ledger.db")).await?;
//! let shipments = ShipmentService::new(Arc::new(db.shipments()));
//! let created = shipments.create().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::calculation::CalculationRepository;
pub use repository::ledger::LedgerRepository;
pub use repository::shipment::ShipmentRepository;
