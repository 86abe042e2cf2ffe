//! Calculation workflow.
//!
//! ## Create Order
//! ```text
//! create(shipment_id, {income, cost})
//!      │
//!      ▼
//! validation::evaluate ──── both ≤ 0? ──► BadRequest (storage untouched)
//!      │
//!      ▼
//! ShipmentService::get_by_id ── absent? ──► NotFound
//!      │
//!      ▼
//! CalculationStore::save(NewCalculation { profit_or_loss, .. })
//! ```
//! Validation runs first, so a both-zero request against a missing
//! shipment reports the validation error.

use std::sync::Arc;

use tracing::debug;

use super::shipment::ShipmentService;
use crate::error::{CoreError, CoreResult};
use crate::store::CalculationStore;
use crate::types::{Calculation, CalculationId, CalculationInput, NewCalculation, ShipmentId};
use crate::validation;

/// Resource name used in NotFound messages.
pub const CALCULATION: &str = "Calculation";

/// List, create and delete the calculations of a shipment.
#[derive(Clone)]
pub struct CalculationService {
    calculations: Arc<dyn CalculationStore>,
    shipments: ShipmentService,
}

impl CalculationService {
    /// Creates a service; `shipments` answers the parent-exists question.
    pub fn new(calculations: Arc<dyn CalculationStore>, shipments: ShipmentService) -> Self {
        CalculationService {
            calculations,
            shipments,
        }
    }

    /// Every calculation of a shipment.
    ///
    /// ## Errors
    /// * `CoreError::NotFound` - the shipment does not exist
    pub async fn list_by_shipment(&self, shipment_id: ShipmentId) -> CoreResult<Vec<Calculation>> {
        let shipment = self.shipments.get_by_id(shipment_id).await?;
        self.calculations.find_by_shipment(shipment.id).await
    }

    /// Validates the amounts, checks the shipment, stores the calculation.
    ///
    /// ## Errors
    /// * `CoreError::Validation` - income and cost both ≤ 0
    /// * `CoreError::NotFound` - the shipment does not exist
    pub async fn create(
        &self,
        shipment_id: ShipmentId,
        input: CalculationInput,
    ) -> CoreResult<Calculation> {
        let profit_or_loss = validation::evaluate(input.income, input.cost)?;

        let shipment = self.shipments.get_by_id(shipment_id).await?;

        let saved = self
            .calculations
            .save(NewCalculation {
                shipment_id: shipment.id,
                income: input.income,
                cost: input.cost,
                profit_or_loss,
            })
            .await?;

        debug!(
            id = saved.id,
            shipment_id = saved.shipment_id,
            profit_or_loss = saved.profit_or_loss,
            "Created calculation"
        );
        Ok(saved)
    }

    /// Deletes a calculation by id alone; the owning shipment is not checked.
    ///
    /// ## Errors
    /// * `CoreError::NotFound` - `Calculation not found with id : '<id>'`
    pub async fn delete(&self, id: CalculationId) -> CoreResult<()> {
        let Some(existing) = self.calculations.find_by_id(id).await? else {
            return Err(CoreError::not_found(CALCULATION, id));
        };

        if !self.calculations.delete_by_id(id).await? {
            return Err(CoreError::not_found(CALCULATION, id));
        }

        debug!(id, shipment_id = existing.shipment_id, "Deleted calculation");
        Ok(())
    }
}
