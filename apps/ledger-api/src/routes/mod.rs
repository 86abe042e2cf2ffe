//! HTTP routing.
//!
//! ## Route Table
//! ```text
//! /api/profit
//! ├── GET    /shipments                                 list shipments
//! ├── POST   /shipments                                 create shipment
//! ├── GET    /shipments/{id}                            get shipment
//! ├── DELETE /shipments/{id}                            delete shipment + calculations
//! ├── GET    /shipments/{id}/calculations               list calculations
//! ├── POST   /shipments/{id}/calculations               create calculation
//! ├── DELETE /shipments/{sid}/calculations/{cid}        delete calculation
//! └── GET    /profit/{shipmentId}                       Income/Cost summary
//! /health                                               database liveness
//! *                                                     404 fallback
//! known path, other method                              405 fallback
//! ```
//!
//! Layers, outermost first: CORS, request tracing, error path stamping.

pub mod calculations;
pub mod health;
pub mod profit;
pub mod shipments;

#[cfg(test)]
mod tests;

use axum::http::Method;
use axum::routing::{delete, get};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{attach_request_path, ApiError, GENERIC_NOT_FOUND};
use crate::AppState;

/// Mount point of the ledger routes.
pub const API_PREFIX: &str = "/api/profit";

/// Build the axum router (separated for testing).
pub fn router(state: AppState) -> Router {
    // The Angular front-end is served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .nest(API_PREFIX, api_routes())
        .route("/health", get(health::health))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(fallback)
        .with_state(state)
        .layer(middleware::from_fn(attach_request_path))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shipments",
            get(shipments::list_shipments).post(shipments::create_shipment),
        )
        .route(
            "/shipments/{id}",
            get(shipments::get_shipment).delete(shipments::delete_shipment),
        )
        .route(
            "/shipments/{id}/calculations",
            get(calculations::list_calculations).post(calculations::create_calculation),
        )
        .route(
            "/shipments/{id}/calculations/{calculation_id}",
            delete(calculations::delete_calculation),
        )
        .route("/profit/{shipment_id}", get(profit::calculate_profit))
}

async fn fallback() -> ApiError {
    ApiError::NotFound(GENERIC_NOT_FOUND.to_string())
}

async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(format!("Request method '{method}' is not supported"))
}
