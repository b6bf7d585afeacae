//! Brewsheet Library
//!
//! Renders human-readable summaries of BeerXML brewing recipes: parsing,
//! derived quantities, unit conversion, and display-row formatting.

pub mod build_info;
pub mod measure;
pub mod models;
pub mod parser;
pub mod render;

pub use parser::{parse_document, DocumentError};
pub use render::{
    render, render_with_taxonomy, RenderConfig, RenderOutcome, RenderedRecipe, Section,
    SectionKind, StyleTaxonomy,
};
