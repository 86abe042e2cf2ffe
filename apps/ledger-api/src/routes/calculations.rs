//! Calculation handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ledger_core::{Calculation, CalculationId, CalculationInput, ShipmentId};

use crate::error::ApiResult;
use crate::extract::{AppJson, AppPath};
use crate::AppState;

pub async fn list_calculations(
    State(state): State<AppState>,
    AppPath(shipment_id): AppPath<ShipmentId>,
) -> ApiResult<Json<Vec<Calculation>>> {
    Ok(Json(state.calculations.list_by_shipment(shipment_id).await?))
}

pub async fn create_calculation(
    State(state): State<AppState>,
    AppPath(shipment_id): AppPath<ShipmentId>,
    AppJson(input): AppJson<CalculationInput>,
) -> ApiResult<Json<Calculation>> {
    Ok(Json(state.calculations.create(shipment_id, input).await?))
}

/// The shipment segment must parse but is not checked against the
/// calculation's owner.
pub async fn delete_calculation(
    State(state): State<AppState>,
    AppPath((_shipment_id, calculation_id)): AppPath<(ShipmentId, CalculationId)>,
) -> ApiResult<StatusCode> {
    state.calculations.delete(calculation_id).await?;
    Ok(StatusCode::OK)
}
