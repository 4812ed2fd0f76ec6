//! Breakdown models for per-diem computations.
//!
//! This module contains the [`TripBreakdown`] type and its associated structures
//! that capture all outputs from a per-diem computation, including chunks,
//! totals, and the audit trail.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One 24-hour-aligned sub-interval of a trip with its computed amount.
///
/// # Example
///
/// ```
/// use per_diem_engine::models::Chunk;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let chunk = Chunk {
///     start: NaiveDateTime::parse_from_str("2026-03-02 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2026-03-02 13:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     hours: Decimal::from_str("5.00").unwrap(),
///     amount: Decimal::from_str("12.50").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The start of the chunk.
    pub start: NaiveDateTime,
    /// The end of the chunk.
    pub end: NaiveDateTime,
    /// Elapsed hours, rounded to 2 decimal places.
    pub hours: Decimal,
    /// The aliquot amount for this chunk.
    pub amount: Decimal,
}

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete per-diem breakdown of one trip interval.
///
/// Derived and immutable; it is recomputed on demand from its source trip and
/// never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripBreakdown {
    /// The daily rate the breakdown was computed with.
    pub daily_rate: Decimal,
    /// Contiguous chunks covering the interval exactly.
    pub chunks: Vec<Chunk>,
    /// Sum of chunk amounts, rounded to 2 decimal places.
    pub total_per_diem: Decimal,
    /// Sum of chunk hours, rounded to 2 decimal places.
    pub total_hours: Decimal,
    /// One audit step per chunk.
    pub audit_steps: Vec<AuditStep>,
}

/// The settlement total of a single trip.
///
/// # Example
///
/// ```
/// use per_diem_engine::models::TripTotal;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let total = TripTotal {
///     per_diem: Decimal::from_str("45.00").unwrap(),
///     lodging: Decimal::from_str("20.00").unwrap(),
///     differential: Decimal::from_str("10.00").unwrap(),
///     grand_total: Decimal::from_str("75.00").unwrap(),
/// };
/// assert_eq!(total.per_diem + total.lodging + total.differential, total.grand_total);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripTotal {
    /// The per-diem subtotal.
    pub per_diem: Decimal,
    /// The lodging invoice amount.
    pub lodging: Decimal,
    /// The applied differential allowance, zero when not applied.
    pub differential: Decimal,
    /// The rounded sum of all components.
    pub grand_total: Decimal,
}
