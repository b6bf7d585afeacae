//! Recipe model
//!
//! The top-level parsed entity: header fields plus ingredient lists in
//! document order.

use serde::{Deserialize, Serialize};

use super::{Fermentable, Hop, Misc, Style, Yeast};

/// A brewing recipe as parsed from a BeerXML document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Batch size in liters
    pub batch_size: f64,
    /// Boil time in minutes
    pub boil_time: f64,
    pub ibu: f64,
    /// Estimated color in SRM
    pub est_color: f64,
    pub est_og: f64,
    pub est_fg: f64,
    pub est_abv: f64,
    pub notes: Option<String>,
    pub style: Option<Style>,
    pub fermentables: Vec<Fermentable>,
    pub hops: Vec<Hop>,
    pub miscs: Vec<Misc>,
    pub yeasts: Vec<Yeast>,
}
