//! Localization collaborator: date formats and country display names.
//!
//! Injected into the assembler explicitly instead of being read from
//! ambient global state, so tests and batch jobs can pin a locale.

use std::collections::BTreeMap;

use serde::Deserialize;

pub trait Localizer {
    /// chrono format string used for every date printed on the sheet.
    fn date_format(&self) -> &str;

    /// Localized display name for an ISO country code.
    fn country_name(&self, code: &str) -> String;
}

/// A value-level locale, deserializable from a configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct Locale {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub countries: BTreeMap<String, String>,
}

/// Day/month/year without leading zeros, the documented sample locale.
fn default_date_format() -> String {
    "%-d/%-m/%Y".to_string()
}

impl Default for Locale {
    fn default() -> Self {
        let countries = [
            ("BE", "Belgium"),
            ("DE", "Germany"),
            ("FR", "France"),
            ("LU", "Luxembourg"),
            ("NL", "Netherlands"),
        ]
        .into_iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect();
        Self {
            date_format: default_date_format(),
            countries,
        }
    }
}

impl Localizer for Locale {
    fn date_format(&self) -> &str {
        &self.date_format
    }

    fn country_name(&self, code: &str) -> String {
        // Unknown codes fall back to the code itself rather than failing.
        self.countries
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }
}
