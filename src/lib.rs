//! Per-Diem Engine for business trip settlements
//!
//! This crate computes statutory daily travel allowances from trip intervals,
//! destination rates, lodging invoices and optional differential allowances,
//! and exposes the computation over an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
