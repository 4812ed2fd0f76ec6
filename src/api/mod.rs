//! HTTP API module for the Per-Diem Engine.
//!
//! This module provides REST endpoints for rate lookups, per-diem
//! breakdowns, trip totals and settlements.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PerDiemRequest, RatesQuery, SettlementRequest, TripRequest};
pub use response::{ApiError, ApiErrorResponse, RateLookupResponse};
pub use state::{AppState, DEFAULT_MAX_TRIP_DAYS};
