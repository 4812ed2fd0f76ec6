//! Configuration types for per-diem rate data.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the rate data files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifies the traveller's home country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeCountry {
    /// The country code (e.g., "AT").
    pub code: String,
    /// The display name of the country.
    pub label: String,
}

/// Inland rate configuration from inland.yaml.
///
/// The home country uses a single fixed daily rate and never uses variants.
#[derive(Debug, Clone, Deserialize)]
pub struct InlandConfig {
    /// The home country.
    pub home_country: HomeCountry,
    /// The fixed inland daily rate.
    #[serde(alias = "dailyRate")]
    pub daily_rate: Decimal,
}

/// A day/night/differential rate triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTriple {
    /// The daily per-diem rate.
    pub day: Decimal,
    /// The nightly lodging rate, if the country defines one.
    #[serde(default)]
    pub night: Option<Decimal>,
    /// The optional differential allowance.
    #[serde(default)]
    pub diff: Option<Decimal>,
}

/// Rate configuration for a single abroad country.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryConfig {
    /// The display name of the country.
    pub label: String,
    /// The rates used when no variant applies.
    pub default: RateTriple,
    /// Named sub-locations overriding the default rates.
    #[serde(default)]
    pub variants: BTreeMap<String, RateTriple>,
}

/// Abroad rate configuration from abroad.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct AbroadConfig {
    /// Map of country code to country rates.
    pub countries: BTreeMap<String, CountryConfig>,
}

/// A country entry as presented to selection lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    /// The country code.
    pub code: String,
    /// The display name of the country.
    pub label: String,
}
