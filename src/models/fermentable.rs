//! Fermentable model
//!
//! Grains, extracts, and sugars, plus the grist-percentage calculation.

use serde::{Deserialize, Serialize};

/// A fermentable ingredient
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fermentable {
    pub name: String,
    /// Amount in kilograms
    pub amount: f64,
}

impl Fermentable {
    /// Share of the total grist as a percentage
    ///
    /// A zero total yields 0.0 for every item rather than dividing by zero.
    pub fn percentage(&self, total: f64) -> f64 {
        if total == 0.0 {
            0.0
        } else {
            self.amount / total * 100.0
        }
    }
}

/// Total fermentable weight in kilograms
pub fn total_weight(fermentables: &[Fermentable]) -> f64 {
    fermentables.iter().map(|f| f.amount).sum()
}
