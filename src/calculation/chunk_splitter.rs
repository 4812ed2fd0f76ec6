//! Trip interval chunking.
//!
//! This module splits a trip interval into consecutive 24-hour chunks
//! anchored at the trip start. Aliquot amounts are computed per chunk.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{TimeInterval, millis_to_hours};

use super::aliquot::round2;

/// A chunk time window before its amount is computed.
///
/// # Example
///
/// ```
/// use per_diem_engine::calculation::ChunkWindow;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let window = ChunkWindow {
///     start: NaiveDateTime::parse_from_str("2026-03-02 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2026-03-03 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     hours: Decimal::new(2400, 2), // 24.00 hours
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkWindow {
    /// The start of this chunk.
    pub start: NaiveDateTime,
    /// The end of this chunk.
    pub end: NaiveDateTime,
    /// Elapsed hours, rounded to 2 decimal places.
    pub hours: Decimal,
}

/// Splits an interval into 24-hour chunks.
///
/// Starting at `start`, a cursor advances by exactly 24 hours, capped at `end`,
/// until it reaches `end`. Each step yields one chunk `[cursor, next)`.
///
/// # Returns
///
/// A vector of `ceil(duration / 24h)` [`ChunkWindow`]s, ordered chronologically.
/// Chunks are contiguous and cover the interval exactly; an interval that is an
/// exact multiple of 24 hours produces only full chunks and no empty trailing
/// chunk.
///
/// # Errors
///
/// Returns `InvalidInterval` if `end <= start`.
///
/// # Example
///
/// ```
/// use per_diem_engine::calculation::split_into_chunks;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-03-02 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-03-03 14:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let chunks = split_into_chunks(start, end).unwrap();
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].hours, Decimal::new(24, 0));
/// assert_eq!(chunks[1].hours, Decimal::new(6, 0));
/// ```
pub fn split_into_chunks(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Vec<ChunkWindow>> {
    let interval = TimeInterval::new(start, end)?;
    Ok(split_interval(&interval))
}

/// Splits an already validated interval into 24-hour chunks.
pub fn split_interval(interval: &TimeInterval) -> Vec<ChunkWindow> {
    let day = Duration::hours(24);
    let end = interval.end();

    let mut chunks = Vec::new();
    let mut cursor = interval.start();

    while cursor < end {
        // Past the representable range the trip ends first.
        let next = cursor
            .checked_add_signed(day)
            .map_or(end, |next| next.min(end));
        chunks.push(ChunkWindow {
            start: cursor,
            end: next,
            hours: round2(millis_to_hours((next - cursor).num_milliseconds())),
        });
        cursor = next;
    }

    chunks
}
