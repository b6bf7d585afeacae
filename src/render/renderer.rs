//! Recipe renderer
//!
//! Orchestrates parse, derived-quantity computation, and row formatting into
//! the final ordered section list. Sections for absent ingredient groups are
//! omitted wholesale; the fermentables table alone always renders, even
//! empty.

use tracing::{debug, warn};

use crate::models::{total_weight, Recipe};
use crate::parser::{parse_document, DocumentError};

use super::config::RenderConfig;
use super::format;
use super::section::{RenderOutcome, RenderedRecipe, Row, Section, SectionKind};
use super::taxonomy::StyleTaxonomy;

/// Render a BeerXML document into display sections
///
/// Only the first recipe in the document is rendered; a recipe-less document
/// yields [`RenderOutcome::NoRecipeFound`]. Fails only when the input is not
/// readable as XML.
pub fn render(text: &str, config: &RenderConfig) -> Result<RenderOutcome, DocumentError> {
    render_inner(text, config, None)
}

/// Like [`render`], registering the recipe's style with a host taxonomy
///
/// The link the taxonomy returns is attached to the style section.
pub fn render_with_taxonomy(
    text: &str,
    config: &RenderConfig,
    taxonomy: &mut dyn StyleTaxonomy,
) -> Result<RenderOutcome, DocumentError> {
    render_inner(text, config, Some(taxonomy))
}

fn render_inner(
    text: &str,
    config: &RenderConfig,
    mut taxonomy: Option<&mut dyn StyleTaxonomy>,
) -> Result<RenderOutcome, DocumentError> {
    let recipes = parse_document(text)?;
    let Some(recipe) = recipes.first() else {
        warn!("document contained no recipes");
        return Ok(RenderOutcome::NoRecipeFound);
    };

    debug!(name = %recipe.name, metric = config.use_metric, "rendering recipe");
    let labels = &config.labels;
    let mut sections = Vec::new();

    sections.push(details_section(recipe, config));

    if config.include_style {
        if let Some(style) = &recipe.style {
            let mut section = Section::new(SectionKind::Style, labels.style.clone());
            section.columns = vec![
                labels.name.clone(),
                labels.category.clone(),
                labels.og_range.clone(),
                labels.fg_range.clone(),
                labels.ibu.clone(),
                labels.srm.clone(),
                labels.carb.clone(),
                labels.abv.clone(),
            ];
            section.rows.push(format::style_row(style, config));
            if let Some(taxonomy) = taxonomy.as_deref_mut() {
                section.link = taxonomy.lookup_or_register(&style.name);
            }
            sections.push(section);
        }
    }

    sections.push(fermentables_section(recipe, config));

    if !recipe.hops.is_empty() {
        let mut section = Section::new(SectionKind::Hops, labels.hops.clone());
        section.columns = vec![
            labels.name.clone(),
            labels.amount.clone(),
            labels.time.clone(),
            labels.usage.clone(),
            labels.form.clone(),
            labels.alpha.clone(),
        ];
        for hop in &recipe.hops {
            section.rows.push(format::hop_row(hop, config));
        }
        sections.push(section);
    }

    if !recipe.miscs.is_empty() {
        let mut section = Section::new(SectionKind::Miscs, labels.miscs.clone());
        section.columns = vec![
            labels.name.clone(),
            labels.amount.clone(),
            labels.time.clone(),
            labels.usage.clone(),
            labels.misc_type.clone(),
        ];
        for misc in &recipe.miscs {
            section.rows.push(format::misc_row(misc, config));
        }
        sections.push(section);
    }

    if !recipe.yeasts.is_empty() {
        let mut section = Section::new(SectionKind::Yeasts, labels.yeasts.clone());
        section.columns = vec![
            labels.name.clone(),
            labels.lab.clone(),
            labels.attenuation.clone(),
            labels.temperature.clone(),
        ];
        for yeast in &recipe.yeasts {
            section.rows.push(format::yeast_row(yeast, config));
        }
        sections.push(section);
    }

    if let Some(notes) = &recipe.notes {
        let mut section = Section::new(SectionKind::Notes, labels.notes.clone());
        let mut row = Row::new();
        row.push("text", notes.clone());
        section.rows.push(row);
        sections.push(section);
    }

    if config.include_download_link {
        if let Some(url) = &config.source_url {
            let mut section = Section::new(SectionKind::Download, labels.download.clone());
            let mut row = Row::new();
            row.push("text", labels.download_link_text.clone());
            section.rows.push(row);
            section.link = Some(url.clone());
            sections.push(section);
        }
    }

    Ok(RenderOutcome::Rendered(RenderedRecipe { sections }))
}

fn details_section(recipe: &Recipe, config: &RenderConfig) -> Section {
    let labels = &config.labels;
    let mut section = Section::new(SectionKind::Details, labels.details.clone());
    section.columns = vec![
        labels.batch_size.clone(),
        labels.boil_time.clone(),
        labels.ibu.clone(),
        labels.srm.clone(),
        labels.est_og.clone(),
        labels.est_fg.clone(),
        labels.abv.clone(),
    ];
    section.rows.push(format::details_row(recipe, config));
    section
}

fn fermentables_section(recipe: &Recipe, config: &RenderConfig) -> Section {
    let labels = &config.labels;
    let mut section = Section::new(SectionKind::Fermentables, labels.fermentables.clone());
    section.columns = vec![
        labels.name.clone(),
        labels.amount.clone(),
        labels.percent.clone(),
    ];
    let total = total_weight(&recipe.fermentables);
    for fermentable in &recipe.fermentables {
        section
            .rows
            .push(format::fermentable_row(fermentable, total, config));
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "<RECIPES><RECIPE>\
        <NAME>Test Brew</NAME>\
        <BATCH_SIZE>20</BATCH_SIZE>\
        <BOIL_TIME>60</BOIL_TIME>\
        <STYLE><NAME>Pale Ale</NAME></STYLE>\
        <FERMENTABLES>\
        <FERMENTABLE><NAME>Pale Malt</NAME><AMOUNT>4.5</AMOUNT></FERMENTABLE>\
        <FERMENTABLE><NAME>Crystal 60</NAME><AMOUNT>0.5</AMOUNT></FERMENTABLE>\
        </FERMENTABLES>\
        <HOPS><HOP><NAME>Cascade</NAME><AMOUNT>0.0283</AMOUNT>\
        <TIME>60</TIME><USE>Boil</USE><FORM>Pellet</FORM><ALPHA>5.5</ALPHA>\
        </HOP></HOPS>\
        <NOTES>Ferment cool.</NOTES>\
        </RECIPE></RECIPES>";

    fn kinds(rendered: &RenderedRecipe) -> Vec<SectionKind> {
        rendered.sections.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_section_composition() {
        let config = RenderConfig::default();
        let outcome = render(DOC, &config).unwrap();
        let rendered = outcome.recipe().unwrap();

        // No miscs or yeasts in the document, so no sections for them;
        // no source URL, so no download section either
        assert_eq!(
            kinds(rendered),
            vec![
                SectionKind::Details,
                SectionKind::Style,
                SectionKind::Fermentables,
                SectionKind::Hops,
                SectionKind::Notes,
            ]
        );
    }

    #[test]
    fn test_missing_hops_block_drops_section() {
        let without_hops = DOC.replace(
            "<HOPS><HOP><NAME>Cascade</NAME><AMOUNT>0.0283</AMOUNT>\
             <TIME>60</TIME><USE>Boil</USE><FORM>Pellet</FORM><ALPHA>5.5</ALPHA>\
             </HOP></HOPS>",
            "",
        );
        let config = RenderConfig::default();

        let with = render(DOC, &config).unwrap();
        let without = render(&without_hops, &config).unwrap();
        let with = with.recipe().unwrap();
        let without = without.recipe().unwrap();

        assert_eq!(with.sections.len(), without.sections.len() + 1);
        assert!(without.section(SectionKind::Hops).is_none());
    }

    #[test]
    fn test_fermentables_section_always_present() {
        let doc = "<RECIPES><RECIPE><NAME>Empty</NAME></RECIPE></RECIPES>";
        let outcome = render(doc, &RenderConfig::default()).unwrap();
        let rendered = outcome.recipe().unwrap();
        let fermentables = rendered.section(SectionKind::Fermentables).unwrap();
        assert!(fermentables.rows.is_empty());
    }

    #[test]
    fn test_style_flag() {
        let config = RenderConfig {
            include_style: false,
            ..RenderConfig::default()
        };
        let outcome = render(DOC, &config).unwrap();
        assert!(outcome
            .recipe()
            .unwrap()
            .section(SectionKind::Style)
            .is_none());
    }

    #[test]
    fn test_download_section_needs_url_and_flag() {
        let mut config = RenderConfig::default();
        let outcome = render(DOC, &config).unwrap();
        assert!(outcome
            .recipe()
            .unwrap()
            .section(SectionKind::Download)
            .is_none());

        config.source_url = Some("https://example.com/brew.xml".to_string());
        let outcome = render(DOC, &config).unwrap();
        let rendered = outcome.recipe().unwrap();
        let download = rendered.section(SectionKind::Download).unwrap();
        assert_eq!(
            download.link.as_deref(),
            Some("https://example.com/brew.xml")
        );
        assert_eq!(
            download.rows[0].get("text"),
            Some("Download this recipe's BeerXML file")
        );

        config.include_download_link = false;
        let outcome = render(DOC, &config).unwrap();
        assert!(outcome
            .recipe()
            .unwrap()
            .section(SectionKind::Download)
            .is_none());
    }

    #[test]
    fn test_no_recipe_found() {
        let outcome = render("<RECIPES></RECIPES>", &RenderConfig::default()).unwrap();
        assert!(outcome.recipe().is_none());
        assert!(matches!(outcome, RenderOutcome::NoRecipeFound));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = RenderConfig::default();
        let a = render(DOC, &config).unwrap();
        let b = render(DOC, &config).unwrap();
        let a = serde_json::to_string(a.recipe().unwrap()).unwrap();
        let b = serde_json::to_string(b.recipe().unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_configs_do_not_interfere() {
        // Two renders of the same text under different unit systems each
        // convert from canonical values, never from each other's output
        let imperial = RenderConfig::default();
        let metric = RenderConfig {
            use_metric: true,
            ..RenderConfig::default()
        };

        let first = render(DOC, &imperial).unwrap();
        let second = render(DOC, &metric).unwrap();
        let third = render(DOC, &imperial).unwrap();

        let amount = |outcome: &RenderOutcome| {
            outcome
                .recipe()
                .unwrap()
                .section(SectionKind::Hops)
                .unwrap()
                .rows[0]
                .get("Amount")
                .map(str::to_string)
        };
        assert_eq!(amount(&first), Some("1 oz".to_string()));
        assert_eq!(amount(&second), Some("28.3 g".to_string()));
        assert_eq!(amount(&third), amount(&first));
    }

    #[test]
    fn test_taxonomy_link_attached() {
        struct FakeTaxonomy {
            registered: Vec<String>,
        }
        impl StyleTaxonomy for FakeTaxonomy {
            fn lookup_or_register(&mut self, style_name: &str) -> Option<String> {
                self.registered.push(style_name.to_string());
                Some(format!("/beer-style/{}", style_name.to_lowercase()))
            }
        }

        let mut taxonomy = FakeTaxonomy {
            registered: Vec::new(),
        };
        let config = RenderConfig::default();
        let outcome = render_with_taxonomy(DOC, &config, &mut taxonomy).unwrap();
        let rendered = outcome.recipe().unwrap();
        let style = rendered.section(SectionKind::Style).unwrap();
        assert_eq!(style.link.as_deref(), Some("/beer-style/pale ale"));
        assert_eq!(taxonomy.registered, vec!["Pale Ale".to_string()]);
    }
}
