//! # Workflows
//!
//! The three request workflows of the ledger.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Workflow Layer                                  │
//! │                                                                         │
//! │  ShipmentService ◄──────── CalculationService                          │
//! │   list_all / create         list_by_shipment / create / delete          │
//! │   get_by_id / delete        (asks ShipmentService if the parent exists) │
//! │        │                            │                                   │
//! │        ▼                            ▼                                   │
//! │   ShipmentStore               CalculationStore                          │
//! │                                                                         │
//! │  ProfitService  (independent; never consults shipments)                │
//! │   calculate_profit ──────► LedgerStore                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Services are cheap to clone (they hold `Arc`s) and carry no state of
//! their own between calls.

pub mod calculation;
pub mod profit;
pub mod shipment;

pub use calculation::CalculationService;
pub use profit::ProfitService;
pub use shipment::ShipmentService;
