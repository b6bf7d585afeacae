//! Render module
//!
//! Turns a BeerXML document into grouped display tables: configuration and
//! labels, per-entity row formatting, and section assembly.

pub mod config;
pub mod format;
pub mod renderer;
pub mod section;
pub mod taxonomy;

pub use config::{Labels, Plural, RenderConfig};
pub use renderer::{render, render_with_taxonomy};
pub use section::{RenderOutcome, RenderedRecipe, Row, Section, SectionKind};
pub use taxonomy::StyleTaxonomy;
