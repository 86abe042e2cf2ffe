//! # Shipment Repository
//!
//! Database operations for shipments.
//!
//! ## Cascade Delete
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  delete_with_calculations(id)                                          │
//! │                                                                         │
//! │  BEGIN                                                                 │
//! │    DELETE FROM calculations WHERE shipment_id = ?   (children first)   │
//! │    DELETE FROM shipments    WHERE id = ?                               │
//! │  COMMIT                                                                │
//! │                                                                         │
//! │  Either both statements land or neither does. The schema's             │
//! │  ON DELETE CASCADE would cover the first statement too, but only       │
//! │  while foreign keys are enabled on the connection.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use ledger_core::{CoreResult, Shipment, ShipmentId, ShipmentStore};

/// Repository for shipment database operations.
#[derive(Debug, Clone)]
pub struct ShipmentRepository {
    pool: SqlitePool,
}

impl ShipmentRepository {
    /// Creates a new ShipmentRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ShipmentRepository { pool }
    }

    /// Lists every shipment in id order.
    pub async fn list_all(&self) -> DbResult<Vec<Shipment>> {
        let shipments = sqlx::query_as::<_, Shipment>("SELECT id FROM shipments ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(shipments)
    }

    /// Gets a shipment by its ID.
    pub async fn get_by_id(&self, id: ShipmentId) -> DbResult<Option<Shipment>> {
        let shipment = sqlx::query_as::<_, Shipment>("SELECT id FROM shipments WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(shipment)
    }

    /// Checks whether a shipment exists.
    pub async fn exists(&self, id: ShipmentId) -> DbResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM shipments WHERE id = ?1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Inserts a new shipment; SQLite assigns the id.
    pub async fn insert(&self) -> DbResult<Shipment> {
        let shipment =
            sqlx::query_as::<_, Shipment>("INSERT INTO shipments DEFAULT VALUES RETURNING id")
                .fetch_one(&self.pool)
                .await?;

        debug!(id = shipment.id, "Inserted shipment");
        Ok(shipment)
    }

    /// Deletes a shipment and its calculations in one transaction.
    ///
    /// ## Returns
    /// * `Ok(true)` - the shipment row was removed
    /// * `Ok(false)` - no shipment with that id (nothing changed)
    pub async fn delete_with_calculations(&self, id: ShipmentId) -> DbResult<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let children = sqlx::query("DELETE FROM calculations WHERE shipment_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let parent = sqlx::query("DELETE FROM shipments WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        debug!(
            id,
            calculations = children.rows_affected(),
            deleted = parent.rows_affected() > 0,
            "Deleted shipment"
        );
        Ok(parent.rows_affected() > 0)
    }

    /// Counts shipments.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shipments")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ShipmentStore for ShipmentRepository {
    async fn find_all(&self) -> CoreResult<Vec<Shipment>> {
        Ok(self.list_all().await?)
    }

    async fn find_by_id(&self, id: ShipmentId) -> CoreResult<Option<Shipment>> {
        Ok(self.get_by_id(id).await?)
    }

    async fn exists_by_id(&self, id: ShipmentId) -> CoreResult<bool> {
        Ok(self.exists(id).await?)
    }

    async fn save(&self) -> CoreResult<Shipment> {
        Ok(self.insert().await?)
    }

    async fn delete_by_id(&self, id: ShipmentId) -> CoreResult<bool> {
        Ok(self.delete_with_calculations(id).await?)
    }
}
