//! Unit conversion functions
//!
//! Pure functions from a canonical metric value and a metric/U.S. flag to the
//! display value. Canonical model values are never written back; callers keep
//! the original and convert again on each render.

use super::units::{
    round_to, TimeUnit, GALLONS_PER_LITER, GRAMS_PER_KILOGRAM, MINUTES_PER_DAY,
    OUNCES_PER_KILOGRAM, POUNDS_PER_KILOGRAM,
};

/// Batch/boil volume: liters, or US gallons, rounded to 1 decimal
pub fn batch_volume(liters: f64, metric: bool) -> f64 {
    if metric {
        round_to(liters, 1)
    } else {
        round_to(liters * GALLONS_PER_LITER, 1)
    }
}

/// Fermentable weight: kilograms to 3 decimals, or pounds to 3 decimals
pub fn grain_weight(kilograms: f64, metric: bool) -> f64 {
    if metric {
        round_to(kilograms, 3)
    } else {
        round_to(kilograms * POUNDS_PER_KILOGRAM, 3)
    }
}

/// Hop or misc weight: grams to 1 decimal, or ounces to 2 decimals
pub fn hop_weight(kilograms: f64, metric: bool) -> f64 {
    if metric {
        round_to(kilograms * GRAMS_PER_KILOGRAM, 1)
    } else {
        round_to(kilograms * OUNCES_PER_KILOGRAM, 2)
    }
}

/// Temperature: Celsius to 2 decimals, or Fahrenheit to 1 decimal
pub fn temperature(celsius: f64, metric: bool) -> f64 {
    if metric {
        round_to(celsius, 2)
    } else {
        round_to(celsius * 9.0 / 5.0 + 32.0, 1)
    }
}

/// Addition time: whole minutes below a day, days to 1 decimal from there up
pub fn addition_time(minutes: f64) -> (f64, TimeUnit) {
    if minutes >= MINUTES_PER_DAY {
        (round_to(minutes / MINUTES_PER_DAY, 1), TimeUnit::Days)
    } else {
        (round_to(minutes, 0), TimeUnit::Minutes)
    }
}
