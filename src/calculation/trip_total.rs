//! Trip total calculation functionality.
//!
//! This module combines the per-diem subtotal of a trip with its lodging
//! invoice and the optional differential allowance.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{Trip, TripTotal};

use super::aliquot::round2;
use super::per_diem::compute_per_diem;

/// Computes the settlement total of a trip.
///
/// - `per_diem`: the rounded per-diem total for the trip interval at the
///   destination's daily rate
/// - `lodging`: the trip's lodging invoice amount, used verbatim
/// - `differential`: the resolved differential allowance if the trip requests
///   it and the destination defines one, otherwise zero (always zero for the
///   home country)
/// - `grand_total`: the sum of the three, rounded to 2 decimal places
///
/// # Errors
///
/// - `InvalidInterval` if the trip bounds are malformed or not increasing
/// - `UnknownCountry` if the destination is not in the rate table
pub fn compute_trip_total(trip: &Trip, rates: &RateTable) -> EngineResult<TripTotal> {
    let interval = trip.interval().inspect_err(|err| {
        warn!(trip_id = %trip.id, error = %err, "Rejected trip interval");
    })?;
    let daily_rate = rates.resolve_daily_rate(&trip.country, trip.variant())?;

    let per_diem = compute_per_diem(interval.start(), interval.end(), daily_rate)?.total_per_diem;
    let lodging = trip.lodging_amount;
    let differential = if trip.apply_diff {
        rates
            .resolve_differential_allowance(&trip.country, trip.variant())
            .unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    let grand_total = round2(per_diem + lodging + differential);

    debug!(
        trip_id = %trip.id,
        country = %trip.country,
        %per_diem,
        %lodging,
        %differential,
        %grand_total,
        "Computed trip total"
    );

    Ok(TripTotal {
        per_diem,
        lodging,
        differential,
        grand_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AbroadConfig, CountryConfig, HomeCountry, InlandConfig, RateTriple};
    use crate::error::EngineError;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_table() -> RateTable {
        let inland = InlandConfig {
            home_country: HomeCountry {
                code: "AT".to_string(),
                label: "Austria".to_string(),
            },
            daily_rate: dec("30"),
        };

        let mut countries = BTreeMap::new();
        countries.insert(
            "SK".to_string(),
            CountryConfig {
                label: "Slovakia".to_string(),
                default: RateTriple {
                    day: dec("30"),
                    night: Some(dec("15.90")),
                    diff: Some(dec("10.00")),
                },
                variants: BTreeMap::new(),
            },
        );
        countries.insert(
            "CZ".to_string(),
            CountryConfig {
                label: "Czechia".to_string(),
                default: RateTriple {
                    day: dec("31.00"),
                    night: Some(dec("24.40")),
                    diff: None,
                },
                variants: BTreeMap::new(),
            },
        );

        RateTable::new(inland, AbroadConfig { countries }).unwrap()
    }

    fn create_test_trip(country: &str, end: &str, lodging: &str, apply_diff: bool) -> Trip {
        Trip {
            id: "trip_001".to_string(),
            user_id: "user_001".to_string(),
            start: "2026-03-02T08:00".to_string(),
            end: end.to_string(),
            country: country.to_string(),
            variant: None,
            purpose: String::new(),
            lodging_amount: dec(lodging),
            apply_diff,
            is_ok: false,
            created_at: Utc::now(),
        }
    }

    /// TT-001: per diem, lodging and differential are summed
    #[test]
    fn test_aggregates_all_components() {
        let table = create_test_table();
        // 30 hours at 30 -> 45.00
        let trip = create_test_trip("SK", "2026-03-03T14:00", "20.00", true);

        let total = compute_trip_total(&trip, &table).unwrap();

        assert_eq!(total.per_diem, dec("45.00"));
        assert_eq!(total.lodging, dec("20.00"));
        assert_eq!(total.differential, dec("10.00"));
        assert_eq!(total.grand_total, dec("75.00"));
    }

    /// TT-002: differential is not applied unless flagged
    #[test]
    fn test_differential_requires_flag() {
        let table = create_test_table();
        let trip = create_test_trip("SK", "2026-03-03T14:00", "20.00", false);

        let total = compute_trip_total(&trip, &table).unwrap();

        assert_eq!(total.differential, Decimal::ZERO);
        assert_eq!(total.grand_total, dec("65.00"));
    }

    /// TT-003: home country never gets a differential
    #[test]
    fn test_home_country_differential_is_zero() {
        let table = create_test_table();
        let trip = create_test_trip("AT", "2026-03-02T13:00", "0", true);

        let total = compute_trip_total(&trip, &table).unwrap();

        assert_eq!(total.per_diem, dec("12.50"));
        assert_eq!(total.differential, Decimal::ZERO);
        assert_eq!(total.grand_total, dec("12.50"));
    }

    #[test]
    fn test_flag_without_defined_allowance_is_zero() {
        let table = create_test_table();
        let trip = create_test_trip("CZ", "2026-03-02T13:00", "0", true);

        let total = compute_trip_total(&trip, &table).unwrap();

        assert_eq!(total.differential, Decimal::ZERO);
    }

    #[test]
    fn test_lodging_used_verbatim() {
        let table = create_test_table();
        let trip = create_test_trip("CZ", "2026-03-02T10:00", "89.99", false);

        let total = compute_trip_total(&trip, &table).unwrap();

        assert_eq!(total.per_diem, Decimal::ZERO);
        assert_eq!(total.lodging, dec("89.99"));
        assert_eq!(total.grand_total, dec("89.99"));
    }

    #[test]
    fn test_unknown_country_propagates() {
        let table = create_test_table();
        let trip = create_test_trip("XX", "2026-03-02T13:00", "0", false);

        match compute_trip_total(&trip, &table) {
            Err(EngineError::UnknownCountry { code }) => assert_eq!(code, "XX"),
            other => panic!("Expected UnknownCountry, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_interval_propagates() {
        let table = create_test_table();
        let trip = create_test_trip("SK", "2026-03-02T08:00", "0", false);

        assert!(matches!(
            compute_trip_total(&trip, &table),
            Err(EngineError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_malformed_bound_propagates() {
        let table = create_test_table();
        let trip = create_test_trip("SK", "not a date", "0", false);

        assert!(matches!(
            compute_trip_total(&trip, &table),
            Err(EngineError::InvalidInterval { .. })
        ));
    }
}
