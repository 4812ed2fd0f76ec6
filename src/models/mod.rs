//! Core data models for the Per-Diem Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod settlement;
mod trip;

pub use breakdown::{AuditStep, Chunk, TripBreakdown, TripTotal};
pub use settlement::{Settlement, SettlementRow};
pub use trip::{TimeInterval, Trip, parse_instant};

pub(crate) use trip::millis_to_hours;
