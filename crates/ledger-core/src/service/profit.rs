//! Profit aggregation workflow.

use std::sync::Arc;

use tracing::debug;

use crate::error::CoreResult;
use crate::profit::summarize;
use crate::store::LedgerStore;
use crate::types::{ProfitSummary, ShipmentId};

/// Totals the income and cost bookings of a shipment id.
///
/// Does not check that the shipment exists: an unknown id and a shipment
/// without bookings both produce a zero summary.
#[derive(Clone)]
pub struct ProfitService {
    ledger: Arc<dyn LedgerStore>,
}

impl ProfitService {
    /// Creates a service over the given ledger store.
    pub fn new(ledger: Arc<dyn LedgerStore>) -> Self {
        ProfitService { ledger }
    }

    /// `total_income - total_costs` for `shipment_id`. Never NotFound.
    pub async fn calculate_profit(&self, shipment_id: ShipmentId) -> CoreResult<ProfitSummary> {
        let incomes = self.ledger.incomes_for_shipment(shipment_id).await?;
        let costs = self.ledger.costs_for_shipment(shipment_id).await?;

        let summary = summarize(shipment_id, &incomes, &costs);
        debug!(
            shipment_id,
            incomes = incomes.len(),
            costs = costs.len(),
            profit = summary.profit,
            "Calculated profit"
        );
        Ok(summary)
    }
}
