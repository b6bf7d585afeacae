//! Misc model
//!
//! Miscellaneous additions: finings, spices, water agents, and the like.

use serde::{Deserialize, Serialize};

/// A miscellaneous addition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Misc {
    pub name: String,
    /// Amount in kilograms; ignored for display when `display_amount` is set
    pub amount: f64,
    /// Pre-formatted amount text from the document (e.g. "1 tsp"); shown
    /// verbatim when present, with no unit conversion
    pub display_amount: Option<String>,
    /// Addition time in minutes
    pub time: f64,
    /// How the addition is used (Boil, Primary, ...); opaque pass-through text
    pub usage: String,
    /// Addition type (Fining, Spice, Water Agent, ...); opaque pass-through
    pub misc_type: String,
}
