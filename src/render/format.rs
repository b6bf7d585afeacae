//! Row formatters
//!
//! Pure functions from a model entity plus a [`RenderConfig`] to a display
//! [`Row`]. Each call re-derives its values from the canonical model, so the
//! same parsed recipe can be formatted under different configs without
//! interference.
//!
//! Numbers display in their shortest form after rounding (1.0 shows as "1",
//! 5.30 as "5.3").

use crate::measure::{self, TimeUnit};
use crate::models::{Fermentable, Hop, Misc, Recipe, Style, Yeast};

use super::config::{Labels, RenderConfig};
use super::section::Row;

/// Shortest display form of a rounded number
fn num(value: f64) -> String {
    format!("{}", value)
}

/// "min - max" with both ends rounded to the same precision
fn range(min: f64, max: f64, places: u32) -> String {
    format!(
        "{} - {}",
        num(measure::round_to(min, places)),
        num(measure::round_to(max, places))
    )
}

/// Addition time cell: whole minutes, or days with a pluralized label
fn time_cell(minutes: f64, labels: &Labels) -> String {
    let (value, unit) = measure::addition_time(minutes);
    match unit {
        TimeUnit::Minutes => format!("{} {}", num(value), labels.minutes),
        TimeUnit::Days => format!("{} {}", num(value), labels.day_unit(value)),
    }
}

/// Recipe details row: batch size, boil time, and the document's estimates
pub fn details_row(recipe: &Recipe, config: &RenderConfig) -> Row {
    let labels = &config.labels;
    let metric = config.use_metric;

    let volume = measure::batch_volume(recipe.batch_size, metric);
    let boil = measure::round_to(recipe.boil_time, 0);

    let mut row = Row::new();
    row.push(
        labels.batch_size.clone(),
        format!("{} {}", num(volume), labels.volume_unit(metric)),
    );
    row.push(
        labels.boil_time.clone(),
        format!("{} {}", num(boil), labels.minutes),
    );
    row.push(labels.ibu.clone(), num(recipe.ibu));
    row.push(labels.srm.clone(), num(recipe.est_color));
    row.push(labels.est_og.clone(), num(recipe.est_og));
    row.push(labels.est_fg.clone(), num(recipe.est_fg));
    row.push(labels.abv.clone(), num(recipe.est_abv));
    row
}

/// Style row: category code and the guideline ranges
pub fn style_row(style: &Style, config: &RenderConfig) -> Row {
    let labels = &config.labels;

    let mut row = Row::new();
    row.push(labels.name.clone(), style.name.clone());
    row.push(
        labels.category.clone(),
        format!("{} {}", style.category_number, style.style_letter),
    );
    row.push(labels.og_range.clone(), range(style.og_min, style.og_max, 3));
    row.push(labels.fg_range.clone(), range(style.fg_min, style.fg_max, 3));
    row.push(labels.ibu.clone(), range(style.ibu_min, style.ibu_max, 1));
    row.push(labels.srm.clone(), range(style.color_min, style.color_max, 1));
    row.push(labels.carb.clone(), range(style.carb_min, style.carb_max, 1));
    row.push(
        labels.abv.clone(),
        format!("{} %", range(style.abv_min, style.abv_max, 1)),
    );
    row
}

/// Fermentable row: converted weight and share of the grist
pub fn fermentable_row(fermentable: &Fermentable, total: f64, config: &RenderConfig) -> Row {
    let labels = &config.labels;
    let metric = config.use_metric;

    let weight = measure::grain_weight(fermentable.amount, metric);
    let percentage = measure::round_to(fermentable.percentage(total), 2);

    let mut row = Row::new();
    row.push(labels.name.clone(), fermentable.name.clone());
    row.push(
        labels.amount.clone(),
        format!("{} {}", num(weight), labels.grain_unit(metric)),
    );
    row.push(labels.percent.clone(), num(percentage));
    row
}

/// Hop row: converted weight, addition time, and pass-through use/form
pub fn hop_row(hop: &Hop, config: &RenderConfig) -> Row {
    let labels = &config.labels;
    let metric = config.use_metric;

    let weight = measure::hop_weight(hop.amount, metric);

    let mut row = Row::new();
    row.push(labels.name.clone(), hop.name.clone());
    row.push(
        labels.amount.clone(),
        format!("{} {}", num(weight), labels.hop_unit(metric)),
    );
    row.push(labels.time.clone(), time_cell(hop.time, labels));
    row.push(labels.usage.clone(), hop.usage.clone());
    row.push(labels.form.clone(), hop.form.clone());
    row.push(labels.alpha.clone(), num(measure::round_to(hop.alpha, 1)));
    row
}

/// Misc row: the document's display amount verbatim when present, otherwise
/// a converted weight
pub fn misc_row(misc: &Misc, config: &RenderConfig) -> Row {
    let labels = &config.labels;
    let metric = config.use_metric;

    let amount = match &misc.display_amount {
        Some(text) => text.clone(),
        None => {
            let weight = measure::hop_weight(misc.amount, metric);
            format!("{} {}", num(weight), labels.hop_unit(metric))
        }
    };

    let mut row = Row::new();
    row.push(labels.name.clone(), misc.name.clone());
    row.push(labels.amount.clone(), amount);
    row.push(labels.time.clone(), time_cell(misc.time, labels));
    row.push(labels.usage.clone(), misc.usage.clone());
    row.push(labels.misc_type.clone(), misc.misc_type.clone());
    row
}

/// Yeast row: name with product code, attenuation, and the converted
/// fermentation range
pub fn yeast_row(yeast: &Yeast, config: &RenderConfig) -> Row {
    let labels = &config.labels;
    let metric = config.use_metric;

    let min = measure::temperature(yeast.min_temperature, metric);
    let max = measure::temperature(yeast.max_temperature, metric);
    let unit = labels.temperature_unit(metric);
    let attenuation = measure::round_to(yeast.attenuation, 0);

    let mut row = Row::new();
    row.push(
        labels.name.clone(),
        format!("{} ({})", yeast.name, yeast.product_id),
    );
    row.push(labels.lab.clone(), yeast.laboratory.clone());
    row.push(labels.attenuation.clone(), format!("{}%", num(attenuation)));
    row.push(
        labels.temperature.clone(),
        format!("{}{} - {}{}", num(min), unit, num(max), unit),
    );
    row
}
