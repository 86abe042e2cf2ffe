//! # ledger-core: Pure Domain Logic for the Profit Ledger
//!
//! This crate holds the rules of the ledger as pure functions and
//! workflows over storage traits. Nothing here touches a database or socket.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Profit Ledger Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 ledger-api (axum REST boundary)                 │   │
//! │  │     /api/profit/shipments/...      /api/profit/profit/{id}      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ledger-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │validation │  │  service  │  │   store   │  │   │
//! │  │   │ Shipment  │  │ both-zero │  │ Shipment  │  │  traits   │  │   │
//! │  │   │Calculation│  │ profit or │  │Calculation│  │           │  │   │
//! │  │   │  Summary  │  │   loss    │  │  Profit   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ledger-db (SQLite repositories)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Shipment, Calculation, Income, Cost, ProfitSummary)
//! - [`error`] - Domain error types
//! - [`validation`] - The calculation rule: income and cost cannot both be zero
//! - [`profit`] - Income/cost aggregation math
//! - [`store`] - Storage traits implemented by ledger-db
//! - [`service`] - Shipment, calculation and profit workflows
//!
//! ## Two Accounting Models
//! A [`Calculation`] carries its own `profit_or_loss`, fixed at creation.
//! A [`ProfitSummary`] is summed from independent [`Income`] and [`Cost`]
//! rows. The two paths never read each other.
//!
//! ## Example Usage
//!
//! ```rust
//! use ledger_core::validation::evaluate;
//!
//! let profit = evaluate(Some(100.0), Some(50.0)).unwrap();
//! assert_eq!(profit, 50.0);
//!
//! assert!(evaluate(None, Some(0.0)).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod profit;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use service::{CalculationService, ProfitService, ShipmentService};
pub use store::{CalculationStore, LedgerStore, ShipmentStore};
pub use types::*;
