//! Hop model

use serde::{Deserialize, Serialize};

/// A hop addition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hop {
    pub name: String,
    /// Amount in kilograms
    pub amount: f64,
    /// Addition time in minutes
    pub time: f64,
    /// How the hop is used (Boil, Dry Hop, Mash, First Wort, Aroma, ...);
    /// opaque pass-through text
    pub usage: String,
    /// Hop form (Pellet, Leaf, Plug); opaque pass-through text
    pub form: String,
    /// Alpha acid percentage
    pub alpha: f64,
}
