//! Editorial rules applied by the merge stages.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// What to do with records left without a primary country.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ambiguity {
    /// Log each record and leave the primary country blank.
    #[default]
    Report,
    /// Fail the merge when any record is ambiguous.
    Fail,
}

/// The placeholder row appended to the Ethnologue table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlistedLanguage {
    pub code: String,
    pub name: String,
}

impl Default for UnlistedLanguage {
    fn default() -> Self {
        Self {
            code: "qaa".to_string(),
            name: "Unlisted Language".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergePolicy {
    /// Codes that never appear in the index.
    pub excluded_codes: Vec<String>,
    /// Countries whose alternate names are dropped.
    pub excluded_regions: Vec<String>,
    /// Codes that keep only their primary Ethnologue name.
    pub alternate_name_suppressed_codes: Vec<String>,
    pub unlisted_language: UnlistedLanguage,
    /// English name -> self-name.
    pub localized_names: IndexMap<String, String>,
    /// Three-letter code -> primary country.
    pub primary_country_overrides: IndexMap<String, String>,
    pub ambiguity: Ambiguity,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            excluded_codes: vec!["gax".into(), "gaz".into(), "hae".into()],
            excluded_regions: vec!["Ethiopia".into()],
            alternate_name_suppressed_codes: vec!["gax".into(), "om".into()],
            unlisted_language: UnlistedLanguage::default(),
            localized_names: pairs(&[
                ("French", "français"),
                ("Spanish", "español"),
                ("Chinese", "中文"),
                ("Hindi", "हिन्दी"),
                ("Bengali", "বাংলা"),
                ("Telugu", "తెలుగు"),
                ("Tamil", "தமிழ்"),
                ("Urdu", "اُردُو"),
                ("Arabic", "العربية/عربي"),
                ("Thai", "ภาษาไทย"),
                ("Indonesian", "Bahasa Indonesia"),
            ]),
            primary_country_overrides: pairs(&[("itd", "Indonesia"), ("xak", "Venezuela")]),
            ambiguity: Ambiguity::Report,
        }
    }
}

fn pairs(items: &[(&str, &str)]) -> IndexMap<String, String> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl MergePolicy {
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self, PolicyError> {
        toml::from_str(contents).map_err(|e| PolicyError::Toml {
            path: origin.to_path_buf(),
            source: e,
        })
    }

    pub fn load(path: &Path) -> Result<Self, PolicyError> {
        let contents = std::fs::read_to_string(path).map_err(|e| PolicyError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&contents, path)
    }

    pub fn is_excluded(&self, code: &str) -> bool {
        self.excluded_codes.iter().any(|c| c == code)
    }

    pub fn is_excluded_region(&self, country: &str) -> bool {
        self.excluded_regions.iter().any(|r| r == country)
    }

    pub fn suppresses_alternates(&self, code: &str) -> bool {
        self.alternate_name_suppressed_codes.iter().any(|c| c == code)
    }

    pub fn localized_name(&self, english: &str) -> Option<&str> {
        self.localized_names.get(english).map(String::as_str)
    }

    pub fn primary_country_override(&self, three_letter_tag: &str) -> Option<&str> {
        self.primary_country_overrides
            .get(three_letter_tag)
            .map(String::as_str)
    }
}
