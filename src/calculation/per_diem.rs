//! Per-diem computation over a full trip interval.
//!
//! This module combines [`split_into_chunks`] and [`calculate_chunk_aliquot`]
//! into a [`TripBreakdown`] for one interval and one daily rate.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AuditStep, Chunk, TripBreakdown};

use super::aliquot::{calculate_chunk_aliquot, round2};
use super::chunk_splitter::split_into_chunks;

/// Computes the per-diem breakdown of an interval.
///
/// Splits the interval into 24-hour chunks, computes each chunk's aliquot
/// amount and sums them. Both totals are rounded to 2 decimal places, half
/// away from zero.
///
/// # Arguments
///
/// * `start` - The start of the trip
/// * `end` - The end of the trip
/// * `daily_rate` - The resolved daily rate of the destination
///
/// # Errors
///
/// Returns `InvalidInterval` if `end <= start`. No partial breakdown is returned.
///
/// # Example
///
/// ```
/// use per_diem_engine::calculation::compute_per_diem;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let start = NaiveDateTime::parse_from_str("2026-03-02 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-03-03 14:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// // 24h chunk capped at 30, 6h chunk earns 6 * 30 / 12 = 15
/// let breakdown = compute_per_diem(start, end, Decimal::new(30, 0)).unwrap();
/// assert_eq!(breakdown.chunks.len(), 2);
/// assert_eq!(breakdown.total_per_diem, Decimal::from_str("45.00").unwrap());
/// assert_eq!(breakdown.total_hours, Decimal::from_str("30.00").unwrap());
/// ```
pub fn compute_per_diem(
    start: NaiveDateTime,
    end: NaiveDateTime,
    daily_rate: Decimal,
) -> EngineResult<TripBreakdown> {
    let windows = split_into_chunks(start, end)?;

    let mut chunks = Vec::with_capacity(windows.len());
    let mut audit_steps: Vec<AuditStep> = Vec::with_capacity(windows.len());

    for (index, window) in windows.into_iter().enumerate() {
        let result = calculate_chunk_aliquot(window.hours, daily_rate, index as u32 + 1);
        chunks.push(Chunk {
            start: window.start,
            end: window.end,
            hours: window.hours,
            amount: result.amount,
        });
        audit_steps.push(result.audit_step);
    }

    let total_per_diem = round2(chunks.iter().map(|c| c.amount).sum());
    let total_hours = round2(chunks.iter().map(|c| c.hours).sum());

    debug!(
        %start,
        %end,
        %daily_rate,
        chunks = chunks.len(),
        %total_per_diem,
        %total_hours,
        "Computed per-diem breakdown"
    );

    Ok(TripBreakdown {
        daily_rate,
        chunks,
        total_per_diem,
        total_hours,
        audit_steps,
    })
}
