//! Request types for the Per-Diem Engine API.
//!
//! This module defines the JSON request structures for the computation
//! endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Trip;

/// Request body for the `/per-diem` endpoint.
///
/// The daily rate is taken from `daily_rate` when given, otherwise it is
/// resolved from `country` and `variant`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerDiemRequest {
    /// The start of the trip.
    pub start: String,
    /// The end of the trip.
    pub end: String,
    /// Explicit daily rate.
    #[serde(default)]
    pub daily_rate: Option<Decimal>,
    /// Destination country code used to resolve the rate.
    #[serde(default)]
    pub country: Option<String>,
    /// Destination variant used to resolve the rate.
    #[serde(default)]
    pub variant: Option<String>,
}

/// Trip information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Unique identifier for the trip.
    #[serde(default)]
    pub id: String,
    /// The user who owns the trip.
    #[serde(default)]
    pub user_id: String,
    /// The start of the trip.
    pub start: String,
    /// The end of the trip.
    pub end: String,
    /// The destination country code.
    pub country: String,
    /// Optional named sub-location.
    #[serde(default)]
    pub variant: Option<String>,
    /// Free-text purpose of the trip.
    #[serde(default)]
    pub purpose: String,
    /// Actual lodging invoice amount.
    #[serde(default)]
    pub lodging_amount: Decimal,
    /// Whether to apply the differential allowance.
    #[serde(default)]
    pub apply_diff: bool,
    /// Whether the trip is confirmed for settlement.
    #[serde(default)]
    pub is_ok: bool,
    /// When the trip record was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for the `/settlement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// The user to settle.
    pub user_id: String,
    /// All trips known for the user; unconfirmed trips are skipped.
    pub trips: Vec<TripRequest>,
}

/// Query parameters for the `/countries/:code/rates` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatesQuery {
    /// Optional variant to resolve.
    #[serde(default)]
    pub variant: Option<String>,
}

impl From<TripRequest> for Trip {
    fn from(req: TripRequest) -> Self {
        Trip {
            id: req.id,
            user_id: req.user_id,
            start: req.start,
            end: req.end,
            country: req.country,
            variant: req.variant,
            purpose: req.purpose,
            lodging_amount: req.lodging_amount,
            apply_diff: req.apply_diff,
            is_ok: req.is_ok,
            created_at: req.created_at.unwrap_or_else(Utc::now),
        }
    }
}
