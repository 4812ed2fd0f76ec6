//! Trip model and time interval types.
//!
//! This module defines the [`Trip`] record as persisted by the external store
//! and the validated [`TimeInterval`] the engine computes over.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Wall-clock formats accepted for trip bounds, tried in order.
const INSTANT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Parses a trip bound into an instant.
///
/// Accepts the `datetime-local` style `YYYY-MM-DDTHH:MM[:SS[.fff]]` (also with a
/// space separator) and RFC 3339 with an offset, which is normalised to UTC.
/// Wall-clock values carry no offset and are taken as they are, so the two
/// forms are only comparable within themselves; [`TimeInterval::parse`]
/// rejects intervals that mix them.
///
/// # Errors
///
/// Returns `InvalidInterval` if the value matches none of the accepted formats.
///
/// # Example
///
/// ```
/// use per_diem_engine::models::parse_instant;
///
/// let instant = parse_instant("2026-03-02T08:30").unwrap();
/// assert_eq!(instant.to_string(), "2026-03-02 08:30:00");
/// assert!(parse_instant("next tuesday").is_err());
/// ```
pub fn parse_instant(value: &str) -> EngineResult<NaiveDateTime> {
    let value = value.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.naive_utc());
    }

    INSTANT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| EngineError::InvalidInterval {
            message: format!("'{}' is not a valid date/time", value),
        })
}

/// A validated time interval with `end` strictly after `start`.
///
/// # Example
///
/// ```
/// use per_diem_engine::models::TimeInterval;
///
/// let interval = TimeInterval::parse("2026-03-02T08:00", "2026-03-02T13:00").unwrap();
/// assert_eq!(interval.duration_millis(), 5 * 3_600_000);
///
/// assert!(TimeInterval::parse("2026-03-02T08:00", "2026-03-02T08:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeInterval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeInterval {
    /// Creates an interval, rejecting `end <= start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self> {
        if end <= start {
            return Err(EngineError::InvalidInterval {
                message: format!("end {} must be after start {}", end, start),
            });
        }
        Ok(Self { start, end })
    }

    /// Parses both bounds and creates an interval.
    ///
    /// Both bounds must use the same form: either both carry an RFC 3339
    /// offset or both are wall-clock values.
    pub fn parse(start: &str, end: &str) -> EngineResult<Self> {
        let start_instant = parse_instant(start)?;
        let end_instant = parse_instant(end)?;

        if has_offset(start) != has_offset(end) {
            return Err(EngineError::InvalidInterval {
                message: format!(
                    "'{}' and '{}' mix offset and wall-clock forms",
                    start.trim(),
                    end.trim()
                ),
            });
        }

        Self::new(start_instant, end_instant)
    }

    /// Returns the start of the interval.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the end of the interval.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the elapsed duration in milliseconds.
    pub fn duration_millis(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }

    /// Returns the exact elapsed duration in hours.
    pub fn duration_hours(&self) -> Decimal {
        millis_to_hours(self.duration_millis())
    }
}

fn has_offset(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value.trim()).is_ok()
}

/// Converts milliseconds to an exact (unrounded) number of hours.
pub(crate) fn millis_to_hours(millis: i64) -> Decimal {
    Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR)
}

fn now() -> DateTime<Utc> {
    Utc::now()
}

/// A business trip as persisted by the external trip store.
///
/// The engine only reads the fields it needs; bounds are kept as the raw
/// stored strings so malformed records surface as `InvalidInterval` when
/// computed rather than failing the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier for the trip.
    pub id: String,
    /// The user who owns the trip.
    pub user_id: String,
    /// The start of the trip as entered.
    pub start: String,
    /// The end of the trip as entered.
    pub end: String,
    /// The destination country code.
    pub country: String,
    /// Optional named sub-location overriding the country rate.
    #[serde(default)]
    pub variant: Option<String>,
    /// Free-text purpose of the trip.
    #[serde(default)]
    pub purpose: String,
    /// Actual lodging invoice amount.
    #[serde(default)]
    pub lodging_amount: Decimal,
    /// Whether the differential allowance should be applied.
    #[serde(default)]
    pub apply_diff: bool,
    /// Whether the trip is confirmed for settlement.
    #[serde(default)]
    pub is_ok: bool,
    /// When the trip record was created.
    #[serde(default = "now")]
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Returns the validated interval of the trip.
    pub fn interval(&self) -> EngineResult<TimeInterval> {
        TimeInterval::parse(&self.start, &self.end)
    }

    /// Returns the variant, treating an empty string as no variant.
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref().filter(|v| !v.is_empty())
    }

    /// Returns the display label, e.g. `"SK – Bratislava"`.
    pub fn label(&self) -> String {
        match self.variant() {
            Some(variant) => format!("{} – {}", self.country, variant),
            None => self.country.clone(),
        }
    }
}
