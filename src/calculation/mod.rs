//! Calculation logic for the Per-Diem Engine.
//!
//! This module contains all the calculation functions for travel allowances:
//! splitting a trip into 24-hour chunks, computing the aliquot amount of each
//! chunk, aggregating a trip's per diem, combining it with lodging and the
//! differential allowance, and settling a user's confirmed trips.

mod aliquot;
mod chunk_splitter;
mod per_diem;
mod settlement;
mod trip_total;

pub use aliquot::{
    ALIQUOT_DIVISOR, ALIQUOT_THRESHOLD_HOURS, AliquotResult, AliquotRule, calculate_chunk_aliquot,
    compute_chunk_amount, round2,
};
pub use chunk_splitter::{ChunkWindow, split_interval, split_into_chunks};
pub use per_diem::compute_per_diem;
pub use settlement::settle_confirmed_trips;
pub use trip_total::compute_trip_total;
