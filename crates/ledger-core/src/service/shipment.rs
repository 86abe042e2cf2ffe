//! Shipment workflow.

use std::sync::Arc;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::store::ShipmentStore;
use crate::types::{Shipment, ShipmentId};

/// Resource name used in NotFound messages.
pub const SHIPMENT: &str = "Shipment";

/// List, create, fetch and delete shipments.
#[derive(Clone)]
pub struct ShipmentService {
    store: Arc<dyn ShipmentStore>,
}

impl ShipmentService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<dyn ShipmentStore>) -> Self {
        ShipmentService { store }
    }

    /// Every shipment, in storage order.
    pub async fn list_all(&self) -> CoreResult<Vec<Shipment>> {
        self.store.find_all().await
    }

    /// Creates a shipment. There is nothing to supply; storage assigns the id.
    pub async fn create(&self) -> CoreResult<Shipment> {
        let shipment = self.store.save().await?;
        debug!(id = shipment.id, "Created shipment");
        Ok(shipment)
    }

    /// Fetches a shipment.
    ///
    /// ## Errors
    /// * `CoreError::NotFound` - `Shipment not found with id : '<id>'`
    pub async fn get_by_id(&self, id: ShipmentId) -> CoreResult<Shipment> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(SHIPMENT, id))
    }

    /// Deletes a shipment and, through storage, all of its calculations.
    ///
    /// ## Errors
    /// * `CoreError::NotFound` - no shipment with that id
    pub async fn delete(&self, id: ShipmentId) -> CoreResult<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(CoreError::not_found(SHIPMENT, id));
        }

        // A concurrent delete can win between the two calls.
        if !self.store.delete_by_id(id).await? {
            return Err(CoreError::not_found(SHIPMENT, id));
        }

        debug!(id, "Deleted shipment");
        Ok(())
    }
}
