//! Settlement report over confirmed trips.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{Settlement, SettlementRow, Trip};

use super::aliquot::round2;
use super::trip_total::compute_trip_total;

/// Settles all confirmed trips of a user.
///
/// Only trips owned by `user_id` with `is_ok` set are included, in input
/// order. The settlement total is the rounded sum of the per-trip grand totals.
///
/// # Errors
///
/// Propagates `InvalidInterval` or `UnknownCountry` from the first confirmed
/// trip that cannot be computed. A failing trip is never settled as zero.
pub fn settle_confirmed_trips(
    trips: &[Trip],
    user_id: &str,
    rates: &RateTable,
) -> EngineResult<Settlement> {
    let mut rows = Vec::new();

    for trip in trips.iter().filter(|t| t.user_id == user_id && t.is_ok) {
        let total = compute_trip_total(trip, rates).inspect_err(|err| {
            warn!(trip_id = %trip.id, %user_id, error = %err, "Confirmed trip cannot be settled");
        })?;

        rows.push(SettlementRow {
            trip_id: trip.id.clone(),
            label: trip.label(),
            start: trip.start.clone(),
            end: trip.end.clone(),
            purpose: trip.purpose.clone(),
            per_diem: total.per_diem,
            lodging: total.lodging,
            differential: total.differential,
            sum: total.grand_total,
        });
    }

    let total = round2(rows.iter().map(|r| r.sum).sum::<Decimal>());

    info!(%user_id, trips = rows.len(), %total, "Settled confirmed trips");

    Ok(Settlement {
        user_id: user_id.to_string(),
        rows,
        total,
    })
}
