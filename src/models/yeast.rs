//! Yeast model

use serde::{Deserialize, Serialize};

/// A yeast strain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Yeast {
    pub name: String,
    /// Lab product code (e.g. "WLP001")
    pub product_id: String,
    pub laboratory: String,
    /// Apparent attenuation percentage
    pub attenuation: f64,
    /// Low end of the fermentation range in Celsius
    pub min_temperature: f64,
    /// High end of the fermentation range in Celsius
    pub max_temperature: f64,
}
