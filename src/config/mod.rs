//! Rate data configuration for the Per-Diem Engine.
//!
//! This module provides functionality to load the inland and abroad rate
//! tables from YAML files and to resolve daily rates, differential
//! allowances and lodging rates from them.
//!
//! # Example
//!
//! ```no_run
//! use per_diem_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/rates").unwrap();
//! println!("Home country: {}", config.rate_table().home_country().label);
//! ```

mod loader;
mod rate_table;
mod types;

pub use loader::ConfigLoader;
pub use rate_table::RateTable;
pub use types::{AbroadConfig, CountryConfig, CountrySummary, HomeCountry, InlandConfig, RateTriple};
