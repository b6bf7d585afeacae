//! Style model

use serde::{Deserialize, Serialize};

/// Beer style guideline ranges
///
/// Ranges come straight from the document; min ≤ max is not re-checked at
/// render time, a malformed range displays as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Style {
    pub name: String,
    /// Category number as written in the document (e.g. "10")
    pub category_number: String,
    /// Style letter within the category (e.g. "A")
    pub style_letter: String,
    pub og_min: f64,
    pub og_max: f64,
    pub fg_min: f64,
    pub fg_max: f64,
    pub ibu_min: f64,
    pub ibu_max: f64,
    pub color_min: f64,
    pub color_max: f64,
    pub carb_min: f64,
    pub carb_max: f64,
    pub abv_min: f64,
    pub abv_max: f64,
}
