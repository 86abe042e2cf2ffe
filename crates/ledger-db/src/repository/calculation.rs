//! # Calculation Repository
//!
//! Database operations for calculations. `income` and `cost` are nullable
//! columns; an absent amount stays NULL and reads back as `None`.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use ledger_core::{
    Calculation, CalculationId, CalculationStore, CoreResult, NewCalculation, ShipmentId,
};

/// Repository for calculation database operations.
#[derive(Debug, Clone)]
pub struct CalculationRepository {
    pool: SqlitePool,
}

impl CalculationRepository {
    /// Creates a new CalculationRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CalculationRepository { pool }
    }

    /// Gets a calculation by its ID.
    pub async fn get_by_id(&self, id: CalculationId) -> DbResult<Option<Calculation>> {
        let calculation = sqlx::query_as::<_, Calculation>(
            r#"
            SELECT id, shipment_id, income, cost, profit_or_loss
            FROM calculations
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(calculation)
    }

    /// Lists the calculations of a shipment in id order.
    pub async fn list_by_shipment(&self, shipment_id: ShipmentId) -> DbResult<Vec<Calculation>> {
        let calculations = sqlx::query_as::<_, Calculation>(
            r#"
            SELECT id, shipment_id, income, cost, profit_or_loss
            FROM calculations
            WHERE shipment_id = ?1
            ORDER BY id
            "#,
        )
        .bind(shipment_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(calculations)
    }

    /// Inserts a calculation and returns it with its assigned id.
    ///
    /// ## Errors
    /// * `DbError::ForeignKeyViolation` - `shipment_id` names no shipment
    pub async fn insert(&self, calculation: &NewCalculation) -> DbResult<Calculation> {
        let saved = sqlx::query_as::<_, Calculation>(
            r#"
            INSERT INTO calculations (shipment_id, income, cost, profit_or_loss)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, shipment_id, income, cost, profit_or_loss
            "#,
        )
        .bind(calculation.shipment_id)
        .bind(calculation.income)
        .bind(calculation.cost)
        .bind(calculation.profit_or_loss)
        .fetch_one(&self.pool)
        .await?;

        debug!(
            id = saved.id,
            shipment_id = saved.shipment_id,
            "Inserted calculation"
        );
        Ok(saved)
    }

    /// Deletes a calculation. Returns whether a row was removed.
    pub async fn delete(&self, id: CalculationId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM calculations WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts all calculations.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM calculations")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl CalculationStore for CalculationRepository {
    async fn find_by_id(&self, id: CalculationId) -> CoreResult<Option<Calculation>> {
        Ok(self.get_by_id(id).await?)
    }

    async fn find_by_shipment(&self, shipment_id: ShipmentId) -> CoreResult<Vec<Calculation>> {
        Ok(self.list_by_shipment(shipment_id).await?)
    }

    async fn save(&self, calculation: NewCalculation) -> CoreResult<Calculation> {
        Ok(self.insert(&calculation).await?)
    }

    async fn delete_by_id(&self, id: CalculationId) -> CoreResult<bool> {
        Ok(self.delete(id).await?)
    }
}
