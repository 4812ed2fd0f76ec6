//! Application state for the Per-Diem Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RateTable;

/// Longest trip, in days, the computation endpoints accept by default.
pub const DEFAULT_MAX_TRIP_DAYS: i64 = 366;

/// Shared application state.
///
/// Holds the read-only rate table shared across all request handlers and the
/// longest trip span a request may ask the engine to compute.
#[derive(Clone)]
pub struct AppState {
    rates: Arc<RateTable>,
    max_trip_days: i64,
}

impl AppState {
    /// Creates a new application state with the given rate table.
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates: Arc::new(rates),
            max_trip_days: DEFAULT_MAX_TRIP_DAYS,
        }
    }

    /// Overrides the maximum trip span in days.
    pub fn with_max_trip_days(mut self, max_trip_days: i64) -> Self {
        self.max_trip_days = max_trip_days;
        self
    }

    /// Returns a reference to the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns the maximum trip span in days.
    pub fn max_trip_days(&self) -> i64 {
        self.max_trip_days
    }
}
