//! Data models
//!
//! Rust structs representing a parsed BeerXML recipe. All amounts, volumes,
//! and temperatures are stored canonically in metric units; display
//! conversion happens in the render layer and never writes back.

mod fermentable;
mod hop;
mod misc;
mod recipe;
mod style;
mod yeast;

pub use fermentable::{total_weight, Fermentable};
pub use hop::Hop;
pub use misc::Misc;
pub use recipe::Recipe;
pub use style::Style;
pub use yeast::Yeast;
