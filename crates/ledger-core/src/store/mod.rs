//! # Storage Traits
//!
//! What the workflows need from storage, and nothing more.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storage Collaborator                               │
//! │                                                                         │
//! │  ShipmentService ───► ShipmentStore     find_all, find_by_id,           │
//! │                                          exists_by_id, save,            │
//! │                                          delete_by_id (cascades)        │
//! │                                                                         │
//! │  CalculationService ► CalculationStore  find_by_id, find_by_shipment,   │
//! │                                          save, delete_by_id             │
//! │                                                                         │
//! │  ProfitService ─────► LedgerStore       incomes_for_shipment,           │
//! │                                          costs_for_shipment             │
//! │                                                                         │
//! │  Implementations: ledger-db (SQLite), memory (unit tests)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees Expected From Implementations
//! - Each single-record write is atomic.
//! - `ShipmentStore::delete_by_id` removes the shipment's calculations too.
//!   The workflow never deletes children itself.
//! - Iteration order is unspecified.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{
    Calculation, CalculationId, Cost, Income, NewCalculation, Shipment, ShipmentId,
};

#[cfg(test)]
pub(crate) mod memory;

/// Persistence for [`Shipment`] records.
#[async_trait]
pub trait ShipmentStore: Send + Sync {
    /// Every shipment, storage order.
    async fn find_all(&self) -> CoreResult<Vec<Shipment>>;

    /// The shipment with `id`, if any.
    async fn find_by_id(&self, id: ShipmentId) -> CoreResult<Option<Shipment>>;

    /// Whether a shipment with `id` exists.
    async fn exists_by_id(&self, id: ShipmentId) -> CoreResult<bool>;

    /// Persists a new shipment and returns it with its assigned id.
    async fn save(&self) -> CoreResult<Shipment>;

    /// Deletes the shipment and every calculation it owns.
    ///
    /// Returns `false` when no shipment had that id.
    async fn delete_by_id(&self, id: ShipmentId) -> CoreResult<bool>;
}

/// Persistence for [`Calculation`] records.
#[async_trait]
pub trait CalculationStore: Send + Sync {
    /// The calculation with `id`, if any.
    async fn find_by_id(&self, id: CalculationId) -> CoreResult<Option<Calculation>>;

    /// Every calculation owned by `shipment_id`.
    async fn find_by_shipment(&self, shipment_id: ShipmentId) -> CoreResult<Vec<Calculation>>;

    /// Persists a validated calculation and returns it with its id.
    async fn save(&self, calculation: NewCalculation) -> CoreResult<Calculation>;

    /// Deletes one calculation. Returns `false` when none had that id.
    async fn delete_by_id(&self, id: CalculationId) -> CoreResult<bool>;
}

/// Read access to the income and cost bookings.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Income rows whose shipment id equals `shipment_id`.
    async fn incomes_for_shipment(&self, shipment_id: ShipmentId) -> CoreResult<Vec<Income>>;

    /// Cost rows whose shipment id equals `shipment_id`.
    async fn costs_for_shipment(&self, shipment_id: ShipmentId) -> CoreResult<Vec<Cost>>;
}
