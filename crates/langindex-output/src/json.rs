//! JSON index (`LanguageDataIndex.json`) for web consumers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use langindex_model::{LanguageIndex, LanguageRecord};
use serde::Serialize;

use crate::common::ensure_parent_dir;
use crate::error::OutputError;

pub const JSON_FILE_NAME: &str = "LanguageDataIndex.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonCode<'a> {
    /// Only present when the tag differs from the three-letter code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two: Option<&'a str>,
    pub three: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonLanguage<'a> {
    pub name: &'a str,
    pub code: JsonCode<'a>,
    #[serde(rename = "macro")]
    pub is_macro: bool,
    pub countries: Vec<&'a str>,
    #[serde(rename = "altNames")]
    pub alt_names: Vec<&'a str>,
    pub country: &'a str,
}

impl<'a> JsonLanguage<'a> {
    pub fn from_record(record: &'a LanguageRecord) -> Self {
        Self {
            name: &record.desired_name,
            code: JsonCode {
                two: (record.tag != record.three_letter_tag).then_some(record.tag.as_str()),
                three: &record.three_letter_tag,
            },
            is_macro: record.is_macro_language,
            countries: record.countries.iter().map(String::as_str).collect(),
            alt_names: record.alternate_names().collect(),
            country: &record.primary_country,
        }
    }
}

/// Records with a three-letter identifier, in index order. Derived
/// records (whose identifier is a full tag) are left out.
pub fn json_languages(index: &LanguageIndex) -> Vec<JsonLanguage<'_>> {
    index
        .iter()
        .filter(|record| record.three_letter_tag.chars().count() == 3)
        .map(JsonLanguage::from_record)
        .collect()
}

pub fn render_index_json(index: &LanguageIndex) -> Result<String, OutputError> {
    Ok(serde_json::to_string(&json_languages(index))?)
}

pub fn write_index_json(path: &Path, index: &LanguageIndex) -> Result<(), OutputError> {
    ensure_parent_dir(path)?;
    let languages = json_languages(index);
    let file = File::create(path).map_err(|e| OutputError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &languages)?;
    writer.flush().map_err(|e| OutputError::io(path, e))?;
    tracing::info!(path = %path.display(), languages = languages.len(), "wrote JSON index");
    Ok(())
}
