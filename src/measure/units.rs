//! Unit types and conversion constants
//!
//! Canonical storage is metric (kilograms, liters, Celsius); these constants
//! take a canonical value to its U.S. display unit.

// ============================================================================
// Conversion Constants (from canonical metric)
// ============================================================================

/// US gallons per liter
pub const GALLONS_PER_LITER: f64 = 0.264172;
/// Pounds per kilogram
pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;
/// Grams per kilogram
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;
/// Ounces per kilogram
pub const OUNCES_PER_KILOGRAM: f64 = 35.274;
/// Minutes per day
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Display unit chosen for an addition time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Minutes,
    Days,
}

/// Round to the given number of decimal places, halves away from zero
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
