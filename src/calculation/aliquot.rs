//! Aliquot per-diem calculation functionality.
//!
//! This module converts the duration of a single chunk and a daily rate into
//! a monetary amount: nothing up to the threshold, then one twelfth of the
//! daily rate per started hour, capped at the full daily rate.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Chunks of this many hours or fewer earn no allowance.
pub const ALIQUOT_THRESHOLD_HOURS: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Each started hour earns one twelfth of the daily rate.
pub const ALIQUOT_DIVISOR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Rounds a monetary value to 2 decimal places, half away from zero.
///
/// `Decimal::round_dp` rounds half to even, which would turn 0.125 into 0.12;
/// settlement amounts must round it to 0.13.
///
/// # Example
///
/// ```
/// use per_diem_engine::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round2(Decimal::from_str("0.005").unwrap()), Decimal::from_str("0.01").unwrap());
/// assert_eq!(round2(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// assert_eq!(round2(Decimal::from_str("-0.005").unwrap()), Decimal::from_str("-0.01").unwrap());
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The rule that determined a chunk's amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliquotRule {
    /// The chunk did not exceed the threshold; nothing is owed.
    BelowThreshold,
    /// One twelfth of the daily rate per started hour.
    Aliquot,
    /// The aliquot amount reached the daily rate and was capped.
    AliquotCapped,
}

impl AliquotRule {
    fn rule_id(self) -> &'static str {
        match self {
            AliquotRule::BelowThreshold => "below_threshold",
            AliquotRule::Aliquot => "aliquot",
            AliquotRule::AliquotCapped => "aliquot_capped",
        }
    }
}

impl std::fmt::Display for AliquotRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AliquotRule::BelowThreshold => write!(f, "Below Threshold"),
            AliquotRule::Aliquot => write!(f, "Aliquot Per Diem"),
            AliquotRule::AliquotCapped => write!(f, "Aliquot Per Diem (Capped)"),
        }
    }
}

/// The result of an aliquot calculation, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct AliquotResult {
    /// The rounded amount owed for the chunk.
    pub amount: Decimal,
    /// The rule that determined the amount.
    pub rule: AliquotRule,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the amount owed for one chunk.
///
/// Rules, applied in order:
/// 1. `hours <= 3` earns `0`
/// 2. every started hour counts in full (`ceil(hours)`)
/// 3. each started hour earns `daily_rate / 12`
/// 4. the amount never exceeds `daily_rate`
/// 5. the result is rounded to 2 decimals, half away from zero
///
/// # Examples
///
/// ```
/// use per_diem_engine::calculation::compute_chunk_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = Decimal::from_str("30").unwrap();
///
/// assert_eq!(compute_chunk_amount(Decimal::from_str("2.5").unwrap(), rate), Decimal::ZERO);
/// assert_eq!(compute_chunk_amount(Decimal::from_str("5").unwrap(), rate), Decimal::from_str("12.50").unwrap());
/// assert_eq!(compute_chunk_amount(Decimal::from_str("24").unwrap(), rate), Decimal::from_str("30").unwrap());
/// ```
pub fn compute_chunk_amount(hours: Decimal, daily_rate: Decimal) -> Decimal {
    apply_rules(hours, daily_rate).0
}

/// Computes the amount owed for one chunk and records an audit step.
///
/// # Arguments
///
/// * `hours` - The chunk duration in hours
/// * `daily_rate` - The resolved daily rate of the destination
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_chunk_aliquot(hours: Decimal, daily_rate: Decimal, step_number: u32) -> AliquotResult {
    let (amount, rule, started_hours) = apply_rules(hours, daily_rate);

    let reasoning = match rule {
        AliquotRule::BelowThreshold => format!(
            "{} hours does not exceed the {} hour threshold - no allowance",
            hours.normalize(),
            ALIQUOT_THRESHOLD_HOURS
        ),
        AliquotRule::Aliquot => format!(
            "{} started hours × {} / {} = {} EUR",
            started_hours,
            daily_rate.normalize(),
            ALIQUOT_DIVISOR,
            amount
        ),
        AliquotRule::AliquotCapped => format!(
            "{} started hours × {} / {} capped at daily rate {} EUR",
            started_hours,
            daily_rate.normalize(),
            ALIQUOT_DIVISOR,
            amount
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: rule.rule_id().to_string(),
        rule_name: rule.to_string(),
        input: serde_json::json!({
            "hours": hours.to_string(),
            "daily_rate": daily_rate.to_string()
        }),
        output: serde_json::json!({
            "started_hours": started_hours.to_string(),
            "amount": amount.to_string()
        }),
        reasoning,
    };

    AliquotResult {
        amount,
        rule,
        audit_step,
    }
}

/// Returns the rounded amount, the rule applied and the started hours counted.
fn apply_rules(hours: Decimal, daily_rate: Decimal) -> (Decimal, AliquotRule, Decimal) {
    if hours <= ALIQUOT_THRESHOLD_HOURS {
        return (Decimal::ZERO, AliquotRule::BelowThreshold, Decimal::ZERO);
    }

    let started_hours = hours.ceil();
    let raw_amount = started_hours * daily_rate / ALIQUOT_DIVISOR;

    let (amount, rule) = if raw_amount > daily_rate {
        (daily_rate, AliquotRule::AliquotCapped)
    } else {
        (raw_amount, AliquotRule::Aliquot)
    };

    (round2(amount), rule, started_hours)
}
