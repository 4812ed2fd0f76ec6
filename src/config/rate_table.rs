//! Read-only rate lookups by country and variant.
//!
//! The [`RateTable`] is built once from the inland and abroad configuration
//! and passed by reference into every computation that needs a rate.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};

use super::types::{AbroadConfig, CountryConfig, CountrySummary, HomeCountry, InlandConfig, RateTriple};

/// Daily rate, differential allowance and lodging rate lookup.
///
/// The home country always resolves to the single inland rate and never has a
/// differential allowance or a lodging rate. Every other country resolves a
/// named variant first and falls back to the country default.
///
/// # Example
///
/// ```
/// use per_diem_engine::config::{AbroadConfig, HomeCountry, InlandConfig, RateTable};
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let inland = InlandConfig {
///     home_country: HomeCountry { code: "AT".to_string(), label: "Austria".to_string() },
///     daily_rate: Decimal::new(30, 0),
/// };
/// let abroad = AbroadConfig { countries: BTreeMap::new() };
/// let table = RateTable::new(inland, abroad).unwrap();
///
/// assert_eq!(table.resolve_daily_rate("AT", None).unwrap(), Decimal::new(30, 0));
/// assert!(table.resolve_daily_rate("XX", None).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RateTable {
    home: HomeCountry,
    inland_daily_rate: Decimal,
    countries: BTreeMap<String, CountryConfig>,
}

impl RateTable {
    /// Creates a rate table from inland and abroad configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRateTable` if:
    /// - the inland daily rate is not positive
    /// - the home country code also appears in the abroad table
    /// - any country or variant has a day rate that is not positive
    /// - any night or diff value is negative
    pub fn new(inland: InlandConfig, abroad: AbroadConfig) -> EngineResult<Self> {
        if inland.daily_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidRateTable {
                message: format!(
                    "inland daily rate must be positive, got {}",
                    inland.daily_rate
                ),
            });
        }

        if abroad.countries.contains_key(&inland.home_country.code) {
            return Err(EngineError::InvalidRateTable {
                message: format!(
                    "home country '{}' must not appear in the abroad table",
                    inland.home_country.code
                ),
            });
        }

        for (code, country) in &abroad.countries {
            validate_triple(&country.default, code, None)?;
            for (name, triple) in &country.variants {
                validate_triple(triple, code, Some(name))?;
            }
        }

        Ok(Self {
            home: inland.home_country,
            inland_daily_rate: inland.daily_rate,
            countries: abroad.countries,
        })
    }

    /// Returns the home country.
    pub fn home_country(&self) -> &HomeCountry {
        &self.home
    }

    /// Returns true if `code` is the home country.
    pub fn is_home(&self, code: &str) -> bool {
        self.home.code == code
    }

    /// Resolves the daily rate for a destination.
    ///
    /// For the home country the fixed inland rate is returned regardless of
    /// `variant`. For other countries the variant's day rate is used when the
    /// variant is defined, otherwise the country default.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCountry` if the code is not the home country and not in
    /// the abroad table. A missing variant never fails.
    pub fn resolve_daily_rate(&self, code: &str, variant: Option<&str>) -> EngineResult<Decimal> {
        if self.is_home(code) {
            return Ok(self.inland_daily_rate);
        }

        let country = self
            .countries
            .get(code)
            .ok_or_else(|| EngineError::UnknownCountry {
                code: code.to_string(),
            })?;

        Ok(variant_override(country, variant)
            .map(|triple| triple.day)
            .unwrap_or(country.default.day))
    }

    /// Resolves the optional cross-border differential allowance.
    ///
    /// Always `None` for the home country and for unknown countries.
    pub fn resolve_differential_allowance(
        &self,
        code: &str,
        variant: Option<&str>,
    ) -> Option<Decimal> {
        self.resolve_optional(code, variant, |triple| triple.diff)
    }

    /// Resolves the lodging rate.
    ///
    /// Always `None` for the home country, where lodging is settled by invoice.
    pub fn resolve_lodging_rate(&self, code: &str, variant: Option<&str>) -> Option<Decimal> {
        self.resolve_optional(code, variant, |triple| triple.night)
    }

    /// Lists all selectable countries, home country first.
    pub fn list_countries(&self) -> Vec<CountrySummary> {
        std::iter::once(CountrySummary {
            code: self.home.code.clone(),
            label: self.home.label.clone(),
        })
        .chain(self.countries.iter().map(|(code, country)| CountrySummary {
            code: code.clone(),
            label: country.label.clone(),
        }))
        .collect()
    }

    /// Lists the variant names of a country.
    ///
    /// Returns an empty list for the home country, unknown countries and
    /// countries without variants.
    pub fn list_variants(&self, code: &str) -> Vec<String> {
        self.countries
            .get(code)
            .map(|country| country.variants.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn resolve_optional(
        &self,
        code: &str,
        variant: Option<&str>,
        field: impl Fn(&RateTriple) -> Option<Decimal>,
    ) -> Option<Decimal> {
        if self.is_home(code) {
            return None;
        }

        let country = self.countries.get(code)?;
        variant_override(country, variant)
            .and_then(&field)
            .or_else(|| field(&country.default))
    }
}

fn variant_override<'a>(country: &'a CountryConfig, variant: Option<&str>) -> Option<&'a RateTriple> {
    variant
        .filter(|name| !name.is_empty())
        .and_then(|name| country.variants.get(name))
}

fn validate_triple(triple: &RateTriple, code: &str, variant: Option<&str>) -> EngineResult<()> {
    let location = match variant {
        Some(name) => format!("{} ({})", code, name),
        None => code.to_string(),
    };

    if triple.day <= Decimal::ZERO {
        return Err(EngineError::InvalidRateTable {
            message: format!("day rate for '{}' must be positive, got {}", location, triple.day),
        });
    }

    let negative = [triple.night, triple.diff]
        .into_iter()
        .flatten()
        .any(|value| value < Decimal::ZERO);
    if negative {
        return Err(EngineError::InvalidRateTable {
            message: format!("night and diff rates for '{}' must not be negative", location),
        });
    }

    Ok(())
}
