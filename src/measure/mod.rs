//! Measurement module
//!
//! Handles unit conversion between canonical metric storage and display units.

pub mod converter;
pub mod units;

pub use converter::{addition_time, batch_volume, grain_weight, hop_weight, temperature};
pub use units::{round_to, TimeUnit};
