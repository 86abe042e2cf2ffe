//! Shipment handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ledger_core::{Shipment, ShipmentId};

use crate::error::ApiResult;
use crate::extract::AppPath;
use crate::AppState;

pub async fn list_shipments(State(state): State<AppState>) -> ApiResult<Json<Vec<Shipment>>> {
    Ok(Json(state.shipments.list_all().await?))
}

/// Takes no body; the id is assigned by storage.
pub async fn create_shipment(State(state): State<AppState>) -> ApiResult<Json<Shipment>> {
    Ok(Json(state.shipments.create().await?))
}

pub async fn get_shipment(
    State(state): State<AppState>,
    AppPath(id): AppPath<ShipmentId>,
) -> ApiResult<Json<Shipment>> {
    Ok(Json(state.shipments.get_by_id(id).await?))
}

/// Empty 200; the shipment's calculations go with it.
pub async fn delete_shipment(
    State(state): State<AppState>,
    AppPath(id): AppPath<ShipmentId>,
) -> ApiResult<StatusCode> {
    state.shipments.delete(id).await?;
    Ok(StatusCode::OK)
}
