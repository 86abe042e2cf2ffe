//! # Domain Types
//!
//! Core domain types used throughout the ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐  owns   ┌─────────────────────┐                   │
//! │  │    Shipment     │────────►│    Calculation      │                   │
//! │  │  ─────────────  │  1 : N  │  ─────────────────  │                   │
//! │  │  id             │ cascade │  id                 │                   │
//! │  └─────────────────┘ delete  │  shipment_id (FK)   │                   │
//! │                              │  income?  cost?     │                   │
//! │                              │  profit_or_loss     │                   │
//! │                              └─────────────────────┘                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │     Income      │   │      Cost       │   │   ProfitSummary     │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  (never stored)     │   │
//! │  │  id             │   │  id             │   │  shipment_id        │   │
//! │  │  shipment_id    │   │  shipment_id    │──►│  total_income       │   │
//! │  │  amount         │   │  amount         │   │  total_costs        │   │
//! │  └─────────────────┘   └─────────────────┘   │  profit             │   │
//! │   weak key, no FK       weak key, no FK      └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! All types serialize with camelCase field names (`shipmentId`,
//! `profitOrLoss`, `totalIncome`) and export TypeScript definitions for the
//! front-end through `ts-rs`. Ids are exported as `number`.
//!
//! ## Amounts
//! Amounts are `f64`, the same numbers the JSON API carries, so
//! `profit_or_loss == income - cost` holds bit for bit.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifier of a [`Shipment`], assigned by storage.
pub type ShipmentId = i64;

/// Identifier of a [`Calculation`], assigned by storage.
pub type CalculationId = i64;

// =============================================================================
// Shipment
// =============================================================================

/// A shipment. Carries nothing but its identity; calculations hang off it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Shipment {
    #[ts(type = "number")]
    pub id: ShipmentId,
}

// =============================================================================
// Calculation
// =============================================================================

/// A stored income/cost pair for one shipment.
///
/// `income` and `cost` are kept exactly as submitted, including `None`.
/// `profit_or_loss` was computed once at creation with absent values
/// counted as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Calculation {
    #[ts(type = "number")]
    pub id: CalculationId,
    #[ts(type = "number")]
    pub shipment_id: ShipmentId,
    pub income: Option<f64>,
    pub cost: Option<f64>,
    pub profit_or_loss: f64,
}

/// A validated calculation waiting for an id.
///
/// Only [`crate::service::CalculationService::create`] builds these, after
/// the amounts passed validation and the shipment was found.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalculation {
    pub shipment_id: ShipmentId,
    pub income: Option<f64>,
    pub cost: Option<f64>,
    pub profit_or_loss: f64,
}

/// Request body for creating a calculation.
///
/// Unknown fields are ignored, so a client may post back a whole
/// `Calculation` object; only `income` and `cost` are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculationInput {
    #[serde(default)]
    pub income: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
}

impl CalculationInput {
    /// Creates an input from optional amounts.
    pub fn new(income: Option<f64>, cost: Option<f64>) -> Self {
        CalculationInput { income, cost }
    }
}

// =============================================================================
// Income / Cost
// =============================================================================

/// A single income booking against a shipment id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Income {
    #[ts(type = "number")]
    pub id: i64,
    #[ts(type = "number")]
    pub shipment_id: ShipmentId,
    pub amount: f64,
}

/// A single cost booking against a shipment id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cost {
    #[ts(type = "number")]
    pub id: i64,
    #[ts(type = "number")]
    pub shipment_id: ShipmentId,
    pub amount: f64,
}

// =============================================================================
// Profit Summary
// =============================================================================

/// Aggregated income and cost for a shipment id. Built per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProfitSummary {
    #[ts(type = "number")]
    pub shipment_id: ShipmentId,
    pub total_income: f64,
    pub total_costs: f64,
    pub profit: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
