//! Profit summary handler.

use axum::extract::State;
use axum::Json;
use ledger_core::{ProfitSummary, ShipmentId};

use crate::error::ApiResult;
use crate::extract::AppPath;
use crate::AppState;

/// Sums Income and Cost rows. An unknown shipment id yields zeros, not 404.
pub async fn calculate_profit(
    State(state): State<AppState>,
    AppPath(shipment_id): AppPath<ShipmentId>,
) -> ApiResult<Json<ProfitSummary>> {
    Ok(Json(state.profit.calculate_profit(shipment_id).await?))
}
