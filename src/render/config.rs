//! Render configuration and display labels
//!
//! The core emits canonical English labels by default; a hosting layer
//! with its own localization substitutes every string here, including the
//! plural rule used for day counts.

/// Grammatical number selected by a plural rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plural {
    One,
    Other,
}

/// English plural rule: singular only for exactly one
pub fn english_plural(value: f64) -> Plural {
    if value == 1.0 {
        Plural::One
    } else {
        Plural::Other
    }
}

/// Options for one render request
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Display metric values instead of U.S. values
    pub use_metric: bool,
    /// Append the download-link section (needs `source_url`)
    pub include_download_link: bool,
    /// Include the style table when the recipe carries one
    pub include_style: bool,
    /// Where the document came from; feeds the download link
    pub source_url: Option<String>,
    pub labels: Labels,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            use_metric: false,
            include_download_link: true,
            include_style: true,
            source_url: None,
            labels: Labels::default(),
        }
    }
}

/// Every heading, column name, and unit label used in the output
#[derive(Debug, Clone)]
pub struct Labels {
    // ========================================================================
    // Section headings
    // ========================================================================
    pub details: String,
    pub style: String,
    pub fermentables: String,
    pub hops: String,
    pub miscs: String,
    pub yeasts: String,
    pub notes: String,
    pub download: String,

    // ========================================================================
    // Column names
    // ========================================================================
    pub name: String,
    pub amount: String,
    pub time: String,
    pub usage: String,
    pub form: String,
    pub alpha: String,
    pub misc_type: String,
    pub lab: String,
    pub attenuation: String,
    pub temperature: String,
    pub batch_size: String,
    pub boil_time: String,
    pub ibu: String,
    pub srm: String,
    pub est_og: String,
    pub est_fg: String,
    pub abv: String,
    pub category: String,
    pub og_range: String,
    pub fg_range: String,
    pub carb: String,
    pub percent: String,

    // ========================================================================
    // Unit labels
    // ========================================================================
    pub liters: String,
    pub gallons: String,
    pub kilograms: String,
    pub pounds: String,
    pub grams: String,
    pub ounces: String,
    pub minutes: String,
    pub day: String,
    pub days: String,
    pub celsius: String,
    pub fahrenheit: String,

    pub download_link_text: String,

    /// Chooses between `day` and `days` for a rounded day count
    pub plural_rule: fn(f64) -> Plural,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            details: "Recipe Details".to_string(),
            style: "Style Details".to_string(),
            fermentables: "Fermentables".to_string(),
            hops: "Hops".to_string(),
            miscs: "Miscs".to_string(),
            yeasts: "Yeast".to_string(),
            notes: "Notes".to_string(),
            download: "Download".to_string(),

            name: "Name".to_string(),
            amount: "Amount".to_string(),
            time: "Time".to_string(),
            usage: "Use".to_string(),
            form: "Form".to_string(),
            alpha: "Alpha %".to_string(),
            misc_type: "Type".to_string(),
            lab: "Lab".to_string(),
            attenuation: "Attenuation".to_string(),
            temperature: "Temperature".to_string(),
            batch_size: "Batch Size".to_string(),
            boil_time: "Boil Time".to_string(),
            ibu: "IBU".to_string(),
            srm: "SRM".to_string(),
            est_og: "Est. OG".to_string(),
            est_fg: "Est. FG".to_string(),
            abv: "ABV".to_string(),
            category: "Cat.".to_string(),
            og_range: "OG Range".to_string(),
            fg_range: "FG Range".to_string(),
            carb: "Carb".to_string(),
            percent: "%".to_string(),

            liters: "L".to_string(),
            gallons: "gal".to_string(),
            kilograms: "kg".to_string(),
            pounds: "lbs".to_string(),
            grams: "g".to_string(),
            ounces: "oz".to_string(),
            minutes: "min".to_string(),
            day: "day".to_string(),
            days: "days".to_string(),
            celsius: "°C".to_string(),
            fahrenheit: "°F".to_string(),

            download_link_text: "Download this recipe's BeerXML file".to_string(),

            plural_rule: english_plural,
        }
    }
}

impl Labels {
    /// Volume unit label for the configured unit system
    pub fn volume_unit(&self, metric: bool) -> &str {
        if metric {
            &self.liters
        } else {
            &self.gallons
        }
    }

    /// Grain weight unit label for the configured unit system
    pub fn grain_unit(&self, metric: bool) -> &str {
        if metric {
            &self.kilograms
        } else {
            &self.pounds
        }
    }

    /// Hop/misc weight unit label for the configured unit system
    pub fn hop_unit(&self, metric: bool) -> &str {
        if metric {
            &self.grams
        } else {
            &self.ounces
        }
    }

    /// Temperature unit label for the configured unit system
    pub fn temperature_unit(&self, metric: bool) -> &str {
        if metric {
            &self.celsius
        } else {
            &self.fahrenheit
        }
    }

    /// Day label pluralized for the given rounded count
    pub fn day_unit(&self, count: f64) -> &str {
        match (self.plural_rule)(count) {
            Plural::One => &self.day,
            Plural::Other => &self.days,
        }
    }
}
