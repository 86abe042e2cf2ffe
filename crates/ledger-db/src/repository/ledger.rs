//! # Ledger Repository
//!
//! Income and Cost bookings, the second accounting model next to
//! calculations. Rows are keyed by `shipment_id` without a foreign key, so
//! they survive their shipment and can exist for ids that never had one.
//! Nothing over HTTP writes them; the seed binary does.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use ledger_core::{Cost, CoreResult, Income, LedgerStore, ShipmentId};

/// Repository for Income and Cost rows.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    pool: SqlitePool,
}

impl LedgerRepository {
    /// Creates a new LedgerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LedgerRepository { pool }
    }

    /// Income rows booked against a shipment id.
    pub async fn list_incomes(&self, shipment_id: ShipmentId) -> DbResult<Vec<Income>> {
        let incomes = sqlx::query_as::<_, Income>(
            "SELECT id, shipment_id, amount FROM incomes WHERE shipment_id = ?1 ORDER BY id",
        )
        .bind(shipment_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(incomes)
    }

    /// Cost rows booked against a shipment id.
    pub async fn list_costs(&self, shipment_id: ShipmentId) -> DbResult<Vec<Cost>> {
        let costs = sqlx::query_as::<_, Cost>(
            "SELECT id, shipment_id, amount FROM costs WHERE shipment_id = ?1 ORDER BY id",
        )
        .bind(shipment_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(costs)
    }

    /// Books an income.
    pub async fn insert_income(&self, shipment_id: ShipmentId, amount: f64) -> DbResult<Income> {
        let income = sqlx::query_as::<_, Income>(
            "INSERT INTO incomes (shipment_id, amount) VALUES (?1, ?2) RETURNING id, shipment_id, amount",
        )
        .bind(shipment_id)
        .bind(amount)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = income.id, shipment_id, amount, "Inserted income");
        Ok(income)
    }

    /// Books a cost.
    pub async fn insert_cost(&self, shipment_id: ShipmentId, amount: f64) -> DbResult<Cost> {
        let cost = sqlx::query_as::<_, Cost>(
            "INSERT INTO costs (shipment_id, amount) VALUES (?1, ?2) RETURNING id, shipment_id, amount",
        )
        .bind(shipment_id)
        .bind(amount)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = cost.id, shipment_id, amount, "Inserted cost");
        Ok(cost)
    }

    /// Counts all income rows.
    pub async fn count_incomes(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM incomes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Counts all cost rows.
    pub async fn count_costs(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM costs")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl LedgerStore for LedgerRepository {
    async fn incomes_for_shipment(&self, shipment_id: ShipmentId) -> CoreResult<Vec<Income>> {
        Ok(self.list_incomes(shipment_id).await?)
    }

    async fn costs_for_shipment(&self, shipment_id: ShipmentId) -> CoreResult<Vec<Cost>> {
        Ok(self.list_costs(shipment_id).await?)
    }
}
