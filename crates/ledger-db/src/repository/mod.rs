//! # Repository Module
//!
//! SQLite implementations of the `ledger-core` store traits.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ShipmentService / CalculationService / ProfitService (ledger-core)    │
//! │       │                                                                 │
//! │       │  Arc<dyn ShipmentStore> ...                                    │
//! │       ▼                                                                 │
//! │  ShipmentRepository     ── shipments (+ cascade to calculations)       │
//! │  CalculationRepository  ── calculations                                │
//! │  LedgerRepository       ── incomes, costs                              │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each repository has inherent methods returning [`DbResult`](crate::error::DbResult);
//! the trait impls delegate to them and convert into `CoreError`.
//!
//! ## Available Repositories
//!
//! - [`ShipmentRepository`](shipment::ShipmentRepository) - Shipment CRUD and cascade delete
//! - [`CalculationRepository`](calculation::CalculationRepository) - Calculation CRUD
//! - [`LedgerRepository`](ledger::LedgerRepository) - Income and Cost bookings

pub mod calculation;
pub mod ledger;
pub mod shipment;
