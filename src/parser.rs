//! BeerXML document parser
//!
//! Turns raw BeerXML text into [`Recipe`](crate::models::Recipe) models.
//! `<RECIPE>` elements that are direct children of the document root become
//! recipes, in document order. Tag matching is exact uppercase, per the
//! BeerXML standard; unknown elements are skipped wherever they appear.
//!
//! Numeric fields parse leniently: the longest numeric prefix of the text
//! wins ("1.056 SG" reads as 1.056) and anything unusable reads as 0. Only
//! input that cannot be read as XML at all is an error.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;
use tracing::debug;

use crate::models::{Fermentable, Hop, Misc, Recipe, Style, Yeast};

/// Errors for input that is not readable as a document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document is not well-formed XML: {0}")]
    Syntax(String),

    #[error("document ended inside <{0}>")]
    Truncated(String),
}

/// Result type for parse operations
pub type ParseResult<T> = Result<T, DocumentError>;

/// Parse a BeerXML document into its recipes, in document order
///
/// A well-formed document without any `<RECIPE>` children yields an empty
/// vector, not an error; the caller observes "no recipes".
pub fn parse_document(text: &str) -> ParseResult<Vec<Recipe>> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut recipes = Vec::new();
    let mut root_seen = false;

    loop {
        match reader.read_event().map_err(syntax)? {
            Event::Start(e) => {
                if !root_seen {
                    // Descend into the root element; recipes are its direct
                    // children, so a bare <RECIPE> root holds none.
                    root_seen = true;
                } else if e.name().as_ref() == b"RECIPE" {
                    recipes.push(parse_recipe(&mut reader)?);
                } else {
                    skip(&mut reader, &e)?;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !root_seen {
        return Err(DocumentError::Syntax("no root element".to_string()));
    }

    debug!(recipes = recipes.len(), "parsed BeerXML document");
    Ok(recipes)
}

fn parse_recipe(reader: &mut Reader<&[u8]>) -> ParseResult<Recipe> {
    let mut recipe = Recipe::default();

    loop {
        match reader.read_event().map_err(syntax)? {
            Event::Start(e) => match e.name().as_ref() {
                b"NAME" => recipe.name = read_text(reader, &e)?,
                b"BATCH_SIZE" => recipe.batch_size = read_number(reader, &e)?,
                b"BOIL_TIME" => recipe.boil_time = read_number(reader, &e)?,
                b"IBU" => recipe.ibu = read_number(reader, &e)?,
                b"EST_COLOR" => recipe.est_color = read_number(reader, &e)?,
                b"EST_OG" => recipe.est_og = read_number(reader, &e)?,
                b"EST_FG" => recipe.est_fg = read_number(reader, &e)?,
                b"EST_ABV" => recipe.est_abv = read_number(reader, &e)?,
                b"NOTES" => recipe.notes = read_opt_text(reader, &e)?,
                b"STYLE" => recipe.style = Some(parse_style(reader)?),
                b"FERMENTABLES" => {
                    recipe.fermentables =
                        parse_list(reader, b"FERMENTABLE", parse_fermentable)?;
                }
                b"HOPS" => recipe.hops = parse_list(reader, b"HOP", parse_hop)?,
                b"MISCS" => recipe.miscs = parse_list(reader, b"MISC", parse_misc)?,
                b"YEASTS" => recipe.yeasts = parse_list(reader, b"YEAST", parse_yeast)?,
                _ => skip(reader, &e)?,
            },
            Event::End(_) => break,
            Event::Eof => return Err(truncated("RECIPE")),
            _ => {}
        }
    }

    Ok(recipe)
}

fn parse_style(reader: &mut Reader<&[u8]>) -> ParseResult<Style> {
    let mut style = Style::default();

    loop {
        match reader.read_event().map_err(syntax)? {
            Event::Start(e) => match e.name().as_ref() {
                b"NAME" => style.name = read_text(reader, &e)?,
                b"CATEGORY_NUMBER" => style.category_number = read_text(reader, &e)?,
                b"STYLE_LETTER" => style.style_letter = read_text(reader, &e)?,
                b"OG_MIN" => style.og_min = read_number(reader, &e)?,
                b"OG_MAX" => style.og_max = read_number(reader, &e)?,
                b"FG_MIN" => style.fg_min = read_number(reader, &e)?,
                b"FG_MAX" => style.fg_max = read_number(reader, &e)?,
                b"IBU_MIN" => style.ibu_min = read_number(reader, &e)?,
                b"IBU_MAX" => style.ibu_max = read_number(reader, &e)?,
                b"COLOR_MIN" => style.color_min = read_number(reader, &e)?,
                b"COLOR_MAX" => style.color_max = read_number(reader, &e)?,
                b"CARB_MIN" => style.carb_min = read_number(reader, &e)?,
                b"CARB_MAX" => style.carb_max = read_number(reader, &e)?,
                b"ABV_MIN" => style.abv_min = read_number(reader, &e)?,
                b"ABV_MAX" => style.abv_max = read_number(reader, &e)?,
                _ => skip(reader, &e)?,
            },
            Event::End(_) => break,
            Event::Eof => return Err(truncated("STYLE")),
            _ => {}
        }
    }

    Ok(style)
}

fn parse_fermentable(reader: &mut Reader<&[u8]>) -> ParseResult<Fermentable> {
    let mut fermentable = Fermentable::default();

    loop {
        match reader.read_event().map_err(syntax)? {
            Event::Start(e) => match e.name().as_ref() {
                b"NAME" => fermentable.name = read_text(reader, &e)?,
                b"AMOUNT" => fermentable.amount = read_number(reader, &e)?,
                _ => skip(reader, &e)?,
            },
            Event::End(_) => break,
            Event::Eof => return Err(truncated("FERMENTABLE")),
            _ => {}
        }
    }

    Ok(fermentable)
}

fn parse_hop(reader: &mut Reader<&[u8]>) -> ParseResult<Hop> {
    let mut hop = Hop::default();

    loop {
        match reader.read_event().map_err(syntax)? {
            Event::Start(e) => match e.name().as_ref() {
                b"NAME" => hop.name = read_text(reader, &e)?,
                b"AMOUNT" => hop.amount = read_number(reader, &e)?,
                b"TIME" => hop.time = read_number(reader, &e)?,
                b"USE" => hop.usage = read_text(reader, &e)?,
                b"FORM" => hop.form = read_text(reader, &e)?,
                b"ALPHA" => hop.alpha = read_number(reader, &e)?,
                _ => skip(reader, &e)?,
            },
            Event::End(_) => break,
            Event::Eof => return Err(truncated("HOP")),
            _ => {}
        }
    }

    Ok(hop)
}

fn parse_misc(reader: &mut Reader<&[u8]>) -> ParseResult<Misc> {
    let mut misc = Misc::default();

    loop {
        match reader.read_event().map_err(syntax)? {
            Event::Start(e) => match e.name().as_ref() {
                b"NAME" => misc.name = read_text(reader, &e)?,
                b"AMOUNT" => misc.amount = read_number(reader, &e)?,
                b"DISPLAY_AMOUNT" => misc.display_amount = read_opt_text(reader, &e)?,
                b"TIME" => misc.time = read_number(reader, &e)?,
                b"USE" => misc.usage = read_text(reader, &e)?,
                b"TYPE" => misc.misc_type = read_text(reader, &e)?,
                _ => skip(reader, &e)?,
            },
            Event::End(_) => break,
            Event::Eof => return Err(truncated("MISC")),
            _ => {}
        }
    }

    Ok(misc)
}

fn parse_yeast(reader: &mut Reader<&[u8]>) -> ParseResult<Yeast> {
    let mut yeast = Yeast::default();

    loop {
        match reader.read_event().map_err(syntax)? {
            Event::Start(e) => match e.name().as_ref() {
                b"NAME" => yeast.name = read_text(reader, &e)?,
                b"PRODUCT_ID" => yeast.product_id = read_text(reader, &e)?,
                b"LABORATORY" => yeast.laboratory = read_text(reader, &e)?,
                b"ATTENUATION" => yeast.attenuation = read_number(reader, &e)?,
                b"MIN_TEMPERATURE" => yeast.min_temperature = read_number(reader, &e)?,
                b"MAX_TEMPERATURE" => yeast.max_temperature = read_number(reader, &e)?,
                _ => skip(reader, &e)?,
            },
            Event::End(_) => break,
            Event::Eof => return Err(truncated("YEAST")),
            _ => {}
        }
    }

    Ok(yeast)
}

/// Parse repeated `item` children of a container element, preserving order
fn parse_list<T>(
    reader: &mut Reader<&[u8]>,
    item: &[u8],
    parse_item: fn(&mut Reader<&[u8]>) -> ParseResult<T>,
) -> ParseResult<Vec<T>> {
    let mut items = Vec::new();

    loop {
        match reader.read_event().map_err(syntax)? {
            Event::Start(e) => {
                if e.name().as_ref() == item {
                    items.push(parse_item(reader)?);
                } else {
                    skip(reader, &e)?;
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(truncated(&String::from_utf8_lossy(item)));
            }
            _ => {}
        }
    }

    Ok(items)
}

/// Read the text content of the current element, unescaped and trimmed
///
/// Entity references are resolved and CDATA content is taken verbatim;
/// nested markup inside a text field is skipped.
fn read_text(reader: &mut Reader<&[u8]>, e: &BytesStart) -> ParseResult<String> {
    let mut text = String::new();

    loop {
        match reader.read_event().map_err(syntax)? {
            Event::Text(t) => text.push_str(&t.unescape().map_err(syntax)?),
            Event::CData(t) => text.push_str(&String::from_utf8_lossy(&t.into_inner())),
            Event::Start(child) => skip(reader, &child)?,
            Event::End(_) => break,
            Event::Eof => {
                return Err(truncated(&String::from_utf8_lossy(e.name().as_ref())));
            }
            _ => {}
        }
    }

    Ok(text.trim().to_string())
}

/// Like [`read_text`], mapping whitespace-only content to `None`
fn read_opt_text(reader: &mut Reader<&[u8]>, e: &BytesStart) -> ParseResult<Option<String>> {
    let text = read_text(reader, e)?;
    Ok(if text.is_empty() { None } else { Some(text) })
}

/// Read the text content of the current element as a lenient number
fn read_number(reader: &mut Reader<&[u8]>, e: &BytesStart) -> ParseResult<f64> {
    Ok(leading_float(&read_text(reader, e)?))
}

/// Skip the current element and everything inside it
fn skip(reader: &mut Reader<&[u8]>, e: &BytesStart) -> ParseResult<()> {
    reader.read_to_end(e.name()).map_err(syntax)?;
    Ok(())
}

/// Longest numeric prefix of the trimmed text, or 0.0
///
/// Mirrors how permissive BeerXML writers are read in practice: "1.056 SG"
/// is 1.056, "90 min" is 90, and junk is 0.
fn leading_float(text: &str) -> f64 {
    let t = text.trim();
    let b = t.as_bytes();
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let digits_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > digits_start {
            i = j;
        }
    }

    t[..i].parse().unwrap_or(0.0)
}

fn syntax(e: quick_xml::Error) -> DocumentError {
    DocumentError::Syntax(e.to_string())
}

fn truncated(element: &str) -> DocumentError {
    DocumentError::Truncated(element.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<RECIPES>
 <RECIPE>
  <NAME>Bowie Brown</NAME>
  <VERSION>1</VERSION>
  <BATCH_SIZE>20.0</BATCH_SIZE>
  <BOIL_TIME>60.0</BOIL_TIME>
  <IBU>38.3</IBU>
  <EST_COLOR>21.5</EST_COLOR>
  <EST_OG>1.056 SG</EST_OG>
  <EST_FG>1.014 SG</EST_FG>
  <EST_ABV>5.5</EST_ABV>
  <NOTES>Let it sit a month.</NOTES>
  <STYLE>
   <NAME>American Brown Ale</NAME>
   <CATEGORY_NUMBER>10</CATEGORY_NUMBER>
   <STYLE_LETTER>C</STYLE_LETTER>
   <OG_MIN>1.045</OG_MIN>
   <OG_MAX>1.06</OG_MAX>
   <FG_MIN>1.01</FG_MIN>
   <FG_MAX>1.016</FG_MAX>
   <IBU_MIN>20</IBU_MIN>
   <IBU_MAX>40</IBU_MAX>
   <COLOR_MIN>18</COLOR_MIN>
   <COLOR_MAX>35</COLOR_MAX>
   <CARB_MIN>1.5</CARB_MIN>
   <CARB_MAX>2.5</CARB_MAX>
   <ABV_MIN>4.3</ABV_MIN>
   <ABV_MAX>6.2</ABV_MAX>
  </STYLE>
  <FERMENTABLES>
   <FERMENTABLE><NAME>Maris Otter</NAME><AMOUNT>4.1</AMOUNT></FERMENTABLE>
   <FERMENTABLE><NAME>Crystal 60</NAME><AMOUNT>0.45</AMOUNT></FERMENTABLE>
  </FERMENTABLES>
  <HOPS>
   <HOP>
    <NAME>Magnum</NAME>
    <AMOUNT>0.0283</AMOUNT>
    <TIME>60</TIME>
    <USE>Boil</USE>
    <FORM>Pellet</FORM>
    <ALPHA>12.5</ALPHA>
   </HOP>
  </HOPS>
  <MISCS>
   <MISC>
    <NAME>Irish Moss</NAME>
    <AMOUNT>0.002</AMOUNT>
    <DISPLAY_AMOUNT>1 tsp</DISPLAY_AMOUNT>
    <TIME>15</TIME>
    <USE>Boil</USE>
    <TYPE>Fining</TYPE>
   </MISC>
  </MISCS>
  <YEASTS>
   <YEAST>
    <NAME>California Ale</NAME>
    <PRODUCT_ID>WLP001</PRODUCT_ID>
    <LABORATORY>White Labs</LABORATORY>
    <ATTENUATION>76.5</ATTENUATION>
    <MIN_TEMPERATURE>20.0</MIN_TEMPERATURE>
    <MAX_TEMPERATURE>23.3</MAX_TEMPERATURE>
   </YEAST>
  </YEASTS>
 </RECIPE>
</RECIPES>"#;

    #[test]
    fn test_parse_sample() {
        let recipes = parse_document(SAMPLE).unwrap();
        assert_eq!(recipes.len(), 1);

        let r = &recipes[0];
        assert_eq!(r.name, "Bowie Brown");
        assert_eq!(r.batch_size, 20.0);
        assert_eq!(r.boil_time, 60.0);
        assert_eq!(r.ibu, 38.3);
        assert_eq!(r.est_og, 1.056);
        assert_eq!(r.notes.as_deref(), Some("Let it sit a month."));

        let style = r.style.as_ref().unwrap();
        assert_eq!(style.name, "American Brown Ale");
        assert_eq!(style.category_number, "10");
        assert_eq!(style.style_letter, "C");
        assert_eq!(style.og_max, 1.06);

        assert_eq!(r.fermentables.len(), 2);
        assert_eq!(r.fermentables[0].name, "Maris Otter");
        assert_eq!(r.fermentables[1].amount, 0.45);

        assert_eq!(r.hops.len(), 1);
        assert_eq!(r.hops[0].usage, "Boil");
        assert_eq!(r.hops[0].form, "Pellet");
        assert_eq!(r.hops[0].alpha, 12.5);

        assert_eq!(r.miscs.len(), 1);
        assert_eq!(r.miscs[0].display_amount.as_deref(), Some("1 tsp"));
        assert_eq!(r.miscs[0].misc_type, "Fining");

        assert_eq!(r.yeasts.len(), 1);
        assert_eq!(r.yeasts[0].product_id, "WLP001");
        assert_eq!(r.yeasts[0].max_temperature, 23.3);
    }

    #[test]
    fn test_sibling_recipes_in_order() {
        let doc = "<RECIPES>\
                   <RECIPE><NAME>First</NAME></RECIPE>\
                   <RECIPE><NAME>Second</NAME></RECIPE>\
                   </RECIPES>";
        let recipes = parse_document(doc).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].name, "First");
        assert_eq!(recipes[1].name, "Second");
    }

    #[test]
    fn test_no_recipes() {
        let recipes = parse_document("<RECIPES></RECIPES>").unwrap();
        assert!(recipes.is_empty());

        // Non-recipe XML parses to zero recipes rather than failing
        let recipes = parse_document("<INVENTORY><ITEM>x</ITEM></INVENTORY>").unwrap();
        assert!(recipes.is_empty());
    }

    #[test]
    fn test_recipe_as_root_yields_none() {
        // Recipes must be children of the root, matching how the documents
        // are written in the wild
        let recipes = parse_document("<RECIPE><NAME>Orphan</NAME></RECIPE>").unwrap();
        assert!(recipes.is_empty());
    }

    #[test]
    fn test_lenient_numbers() {
        let doc = "<RECIPES><RECIPE>\
                   <BATCH_SIZE>20.5 L</BATCH_SIZE>\
                   <IBU>approximately 40</IBU>\
                   <BOIL_TIME></BOIL_TIME>\
                   </RECIPE></RECIPES>";
        let recipes = parse_document(doc).unwrap();
        assert_eq!(recipes[0].batch_size, 20.5);
        assert_eq!(recipes[0].ibu, 0.0);
        assert_eq!(recipes[0].boil_time, 0.0);
    }

    #[test]
    fn test_missing_fields_default() {
        let doc = "<RECIPES><RECIPE><NAME>Bare</NAME></RECIPE></RECIPES>";
        let recipes = parse_document(doc).unwrap();
        let r = &recipes[0];
        assert_eq!(r.batch_size, 0.0);
        assert!(r.notes.is_none());
        assert!(r.style.is_none());
        assert!(r.fermentables.is_empty());
        assert!(r.hops.is_empty());
    }

    #[test]
    fn test_whitespace_notes_are_none() {
        let doc = "<RECIPES><RECIPE><NOTES>   </NOTES></RECIPE></RECIPES>";
        let recipes = parse_document(doc).unwrap();
        assert!(recipes[0].notes.is_none());
    }

    #[test]
    fn test_entities_unescaped() {
        let doc = "<RECIPES><RECIPE>\
                   <NAME>Porter &amp; Stout</NAME>\
                   <NOTES>hold at &lt;20&gt;</NOTES>\
                   </RECIPE></RECIPES>";
        let recipes = parse_document(doc).unwrap();
        assert_eq!(recipes[0].name, "Porter & Stout");
        assert_eq!(recipes[0].notes.as_deref(), Some("hold at <20>"));
    }

    #[test]
    fn test_cdata_taken_verbatim() {
        let doc = "<RECIPES><RECIPE>\
                   <NOTES><![CDATA[keep <cold> & dark]]></NOTES>\
                   </RECIPE></RECIPES>";
        let recipes = parse_document(doc).unwrap();
        assert_eq!(recipes[0].notes.as_deref(), Some("keep <cold> & dark"));
    }

    #[test]
    fn test_unknown_elements_skipped() {
        let doc = "<RECIPES><RECIPE>\
                   <EQUIPMENT><NAME>Kettle</NAME><VOLUME>30</VOLUME></EQUIPMENT>\
                   <NAME>With Gear</NAME>\
                   </RECIPE></RECIPES>";
        let recipes = parse_document(doc).unwrap();
        assert_eq!(recipes[0].name, "With Gear");
    }

    #[test]
    fn test_unreadable_input_fails() {
        assert!(parse_document("").is_err());
        assert!(parse_document("not xml at all").is_err());
        assert!(parse_document("<RECIPES><RECIPE></RECIPES>").is_err());
    }

    #[test]
    fn test_leading_float() {
        assert_eq!(leading_float("1.056"), 1.056);
        assert_eq!(leading_float("1.056 SG"), 1.056);
        assert_eq!(leading_float("-3.5"), -3.5);
        assert_eq!(leading_float("1e3"), 1000.0);
        assert_eq!(leading_float(""), 0.0);
        assert_eq!(leading_float("n/a"), 0.0);
        assert_eq!(leading_float("60 min"), 60.0);
    }
}
