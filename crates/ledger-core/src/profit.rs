//! # Profit Aggregation
//!
//! Sums independent income and cost bookings into a [`ProfitSummary`].
//!
//! ```text
//! incomes_for(42) ──► [120.0, 30.0] ──► total_income = 150.0 ─┐
//!                                                              ├─► profit = 110.0
//! costs_for(42)   ──► [40.0]        ──► total_costs  =  40.0 ─┘
//! ```
//!
//! Empty inputs give zeros. Nothing here knows whether shipment 42 exists.

use crate::types::{Cost, Income, ProfitSummary, ShipmentId};

/// Sum of income amounts (0 for none).
pub fn total_income(incomes: &[Income]) -> f64 {
    incomes.iter().map(|i| i.amount).sum()
}

/// Sum of cost amounts (0 for none).
pub fn total_costs(costs: &[Cost]) -> f64 {
    costs.iter().map(|c| c.amount).sum()
}

/// Builds the summary for `shipment_id` from its bookings.
pub fn summarize(shipment_id: ShipmentId, incomes: &[Income], costs: &[Cost]) -> ProfitSummary {
    let total_income = total_income(incomes);
    let total_costs = total_costs(costs);

    ProfitSummary {
        shipment_id,
        total_income,
        total_costs,
        profit: total_income - total_costs,
    }
}
