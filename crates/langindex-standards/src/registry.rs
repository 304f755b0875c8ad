//! IANA language subtag registry (`ianaSubtagRegistry.txt`).
//!
//! The registry is a record-jar file: records are separated by `%%` lines,
//! each field is `Name: value`, and a line starting with whitespace continues
//! the previous field.

use indexmap::IndexMap;
use serde::Serialize;

use crate::crosswalk::Crosswalk;

/// Code of the placeholder language appended to every registry.
pub const UNLISTED_LANGUAGE_CODE: &str = "qaa";
pub const UNLISTED_LANGUAGE_NAME: &str = "Language Not Listed";

/// A registered language subtag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredLanguage {
    pub code: String,
    /// ISO 639-3 code; empty for the private-use placeholder.
    pub iso3_code: String,
    /// First description.
    pub name: String,
    /// All descriptions in registry order, `name` first.
    pub descriptions: Vec<String>,
    pub is_macro_language: bool,
    pub is_deprecated: bool,
    pub is_private_use: bool,
    pub suppress_script: Option<String>,
}

impl RegisteredLanguage {
    pub fn new(code: &str, iso3_code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            iso3_code: iso3_code.to_string(),
            name: name.to_string(),
            descriptions: vec![name.to_string()],
            is_macro_language: false,
            is_deprecated: false,
            is_private_use: false,
            suppress_script: None,
        }
    }

    pub fn with_descriptions<I, S>(mut self, descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptions = descriptions.into_iter().map(Into::into).collect();
        if let Some(first) = self.descriptions.first() {
            self.name = first.clone();
        }
        self
    }

    pub fn macro_language(mut self) -> Self {
        self.is_macro_language = true;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.is_deprecated = true;
        self
    }

    pub fn with_suppress_script(mut self, script: &str) -> Self {
        self.suppress_script = Some(script.to_string());
        self
    }
}

/// A registered script, region or variant subtag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subtag {
    pub code: String,
    pub name: String,
}

impl Subtag {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

/// Registered subtags, keyed case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct SubtagRegistry {
    file_date: Option<String>,
    languages: IndexMap<String, RegisteredLanguage>,
    scripts: IndexMap<String, Subtag>,
    regions: IndexMap<String, Subtag>,
    variants: IndexMap<String, Subtag>,
}

#[derive(Default)]
struct RawRecord {
    kind: Option<String>,
    subtag: Option<String>,
    descriptions: Vec<String>,
    suppress_script: Option<String>,
    deprecated: bool,
    macro_language: bool,
    collection: bool,
}

impl SubtagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the registry text. Language subtags get their ISO 639-3 code
    /// from `crosswalk`, falling back to the subtag itself.
    pub fn parse(text: &str, crosswalk: &Crosswalk) -> Self {
        let text = text.trim_start_matches('\u{feff}');
        let mut registry = Self::new();
        let mut languages = Vec::new();

        for chunk in split_records(text) {
            if let Some(date) = field_value(&chunk, "File-Date") {
                registry.file_date = Some(date.to_string());
                continue;
            }
            let record = read_record(&chunk);
            let (Some(kind), Some(subtag)) = (record.kind.as_deref(), record.subtag.as_deref())
            else {
                continue;
            };
            let Some(name) = record.descriptions.first().cloned() else {
                continue;
            };
            if subtag.contains("..") || record.collection {
                continue;
            }
            match kind {
                "language" => {
                    let iso3 = crosswalk.three_letter(subtag).unwrap_or(subtag);
                    languages.push(RegisteredLanguage {
                        code: subtag.to_string(),
                        iso3_code: iso3.to_string(),
                        name,
                        descriptions: record.descriptions,
                        is_macro_language: record.macro_language,
                        is_deprecated: record.deprecated,
                        is_private_use: false,
                        suppress_script: record.suppress_script,
                    });
                }
                "script" | "region" | "variant" => {
                    let entry = Subtag {
                        code: subtag.to_string(),
                        name,
                    };
                    match kind {
                        "script" => registry.add_script(entry),
                        "region" => registry.add_region(entry),
                        _ => registry.add_variant(entry),
                    }
                }
                _ => {}
            }
        }

        languages.sort_by_cached_key(|l| sort_key(&l.name));
        for language in languages {
            registry.add_language(language);
        }
        if !registry.languages.contains_key(UNLISTED_LANGUAGE_CODE) {
            let mut unlisted =
                RegisteredLanguage::new(UNLISTED_LANGUAGE_CODE, "", UNLISTED_LANGUAGE_NAME);
            unlisted.is_private_use = true;
            registry.add_language(unlisted);
        }

        tracing::debug!(
            languages = registry.languages.len(),
            scripts = registry.scripts.len(),
            regions = registry.regions.len(),
            variants = registry.variants.len(),
            "parsed subtag registry"
        );
        registry
    }

    pub fn file_date(&self) -> Option<&str> {
        self.file_date.as_deref()
    }

    pub fn add_language(&mut self, language: RegisteredLanguage) {
        self.languages
            .insert(language.code.to_ascii_lowercase(), language);
    }

    pub fn add_script(&mut self, script: Subtag) {
        self.scripts.insert(script.code.to_ascii_lowercase(), script);
    }

    pub fn add_region(&mut self, region: Subtag) {
        self.regions.insert(region.code.to_ascii_lowercase(), region);
    }

    pub fn add_variant(&mut self, variant: Subtag) {
        self.variants
            .insert(variant.code.to_ascii_lowercase(), variant);
    }

    pub fn language(&self, code: &str) -> Option<&RegisteredLanguage> {
        self.languages.get(&code.to_ascii_lowercase())
    }

    pub fn script(&self, code: &str) -> Option<&Subtag> {
        self.scripts.get(&code.to_ascii_lowercase())
    }

    pub fn region(&self, code: &str) -> Option<&Subtag> {
        self.regions.get(&code.to_ascii_lowercase())
    }

    pub fn variant(&self, code: &str) -> Option<&Subtag> {
        self.variants.get(&code.to_ascii_lowercase())
    }

    /// Display name of a region code, e.g. `"France"` for `FR`.
    pub fn region_name(&self, code: &str) -> Option<&str> {
        self.region(code).map(|r| r.name.as_str())
    }

    pub fn languages(&self) -> impl Iterator<Item = &RegisteredLanguage> {
        self.languages.values()
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }
}

/// `qaa`..`qtz`.
pub fn is_private_use_language(code: &str) -> bool {
    let code = code.to_ascii_lowercase();
    code.len() == 3 && code.as_str() >= "qaa" && code.as_str() <= "qtz"
}

/// `Qaaa`..`Qabx`.
pub fn is_private_use_script(code: &str) -> bool {
    let code = code.to_ascii_lowercase();
    code.len() == 4 && code.as_str() >= "qaaa" && code.as_str() <= "qabx"
}

/// `AA`, `QM`..`QZ`, `XA`..`XZ` and `ZZ`.
pub fn is_private_use_region(code: &str) -> bool {
    let code = code.to_ascii_uppercase();
    let code = code.as_str();
    code.len() == 2
        && (code == "AA"
            || code == "ZZ"
            || ("QM"..="QZ").contains(&code)
            || ("XA"..="XZ").contains(&code))
}

fn split_records(text: &str) -> Vec<Vec<&str>> {
    let mut records = Vec::new();
    let mut current = Vec::new();
    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim() == "%%" {
            if !current.is_empty() {
                records.push(std::mem::take(&mut current));
            }
        } else if !line.trim().is_empty() {
            current.push(line);
        }
    }
    if !current.is_empty() {
        records.push(current);
    }
    records
}

fn field_value<'a>(lines: &[&'a str], name: &str) -> Option<&'a str> {
    lines.iter().find_map(|line| {
        let (field, value) = line.split_once(':')?;
        (field == name).then(|| value.trim())
    })
}

fn read_record(lines: &[&str]) -> RawRecord {
    let mut record = RawRecord::default();
    // Field the next continuation line belongs to.
    let mut last_field = "";
    for line in lines {
        if line.starts_with(char::is_whitespace) {
            if last_field == "Description"
                && let Some(description) = record.descriptions.last_mut()
            {
                description.push(' ');
                description.push_str(line.trim());
            }
            continue;
        }
        let Some((field, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        last_field = field;
        match field {
            "Type" => record.kind = Some(value.to_string()),
            "Subtag" | "Tag" => record.subtag = Some(value.to_string()),
            "Description" => record.descriptions.push(clean_description(value)),
            "Deprecated" => record.deprecated = true,
            "Suppress-Script" => record.suppress_script = Some(value.to_string()),
            "Scope" => match value {
                "macrolanguage" => record.macro_language = true,
                "collection" => record.collection = true,
                _ => {}
            },
            // Comments run to the end of the record.
            "Comments" => break,
            _ => {}
        }
    }
    record
}

/// Normalizes a registry description for display.
///
/// `(alias for X)` becomes `(X)`, the ` (individual language)` qualifier is
/// dropped, a description that starts with `(` loses its parentheses and `/`
/// becomes `|`.
fn clean_description(value: &str) -> String {
    let mut description = value
        .replace("(alias for ", "(")
        .replace(" (individual language)", "");
    if description.starts_with('(') {
        description.retain(|c| c != '(' && c != ')');
    }
    description.replace('/', "|")
}

fn sort_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
