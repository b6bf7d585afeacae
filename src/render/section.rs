//! Rendered output model
//!
//! A render produces ordered sections, each a heading plus rows of
//! column/value pairs. Rows keep insertion order so tables serialize the
//! way they display.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One display row: ordered column name to formatted string pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell; columns display in insertion order
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.push((column.into(), value.into()));
    }

    /// Value for a column, if present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// Serialized by hand so JSON objects keep column order
impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// The fixed set of output sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Details,
    Style,
    Fermentables,
    Hops,
    Miscs,
    Yeasts,
    Notes,
    Download,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Details => "details",
            SectionKind::Style => "style",
            SectionKind::Fermentables => "fermentables",
            SectionKind::Hops => "hops",
            SectionKind::Miscs => "miscs",
            SectionKind::Yeasts => "yeasts",
            SectionKind::Notes => "notes",
            SectionKind::Download => "download",
        }
    }
}

/// One table of the rendered output
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: String,
    /// Column names in display order; empty for headerless sections
    /// (notes, download)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    /// Attached URL: the style term link or the download target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Section {
    pub fn new(kind: SectionKind, heading: impl Into<String>) -> Self {
        Self {
            kind,
            heading: heading.into(),
            columns: Vec::new(),
            rows: Vec::new(),
            link: None,
        }
    }
}

/// A fully rendered recipe: ordered sections ready for display
#[derive(Debug, Clone, Serialize)]
pub struct RenderedRecipe {
    pub sections: Vec<Section>,
}

impl RenderedRecipe {
    /// Look up a section by kind
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

/// Result of a render call on a readable document
#[derive(Debug, Clone)]
pub enum RenderOutcome {
    Rendered(RenderedRecipe),
    /// The document parsed but held no usable recipe; a normal outcome,
    /// not an error
    NoRecipeFound,
}

impl RenderOutcome {
    pub fn recipe(&self) -> Option<&RenderedRecipe> {
        match self {
            RenderOutcome::Rendered(r) => Some(r),
            RenderOutcome::NoRecipeFound => None,
        }
    }
}
