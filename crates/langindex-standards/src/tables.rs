//! Tab-separated source tables.
//!
//! The Ethnologue exports and the crosswalk are plain tab-separated text with
//! no quoting. Field counts vary from row to row, so every row is kept as a
//! raw list of fields and the consumers decide what a well-formed row is.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::StandardsError;

/// Origin label used when a table is parsed from an in-memory string.
pub const INLINE_SOURCE: &str = "<inline>";

/// One row of a tab-separated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRow {
    /// 1-based line number in the source.
    pub line: usize,
    pub fields: Vec<String>,
}

impl TabRow {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(String::is_empty)
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

/// Parses tab-separated bytes into raw rows, skipping blank lines.
pub fn parse_tab_rows(bytes: &[u8], origin: &Path) -> Result<Vec<TabRow>, StandardsError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .flexible(true)
        .quoting(false)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| StandardsError::csv(origin, &e))?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 1);
        let row = TabRow {
            line,
            fields: record
                .iter()
                .map(|f| f.trim_start_matches('\u{feff}').to_string())
                .collect(),
        };
        if row.is_empty() {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

pub(crate) fn inline_origin() -> PathBuf {
    PathBuf::from(INLINE_SOURCE)
}

/// A row of the Ethnologue alternate-name table:
/// `code \t regionCode \t nameType \t name`.
///
/// Rows are kept verbatim; the name aggregator decides which are usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthnologueRow {
    pub line: usize,
    pub fields: Vec<String>,
}

impl EthnologueRow {
    pub fn new(fields: &[&str]) -> Self {
        Self {
            line: 0,
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Parses `LanguageIndex.txt`. The first line is a header and is dropped.
pub fn parse_ethnologue_table(text: &str) -> Result<Vec<EthnologueRow>, StandardsError> {
    let rows = parse_tab_rows(text.as_bytes(), &inline_origin())?;
    Ok(ethnologue_rows(rows))
}

pub(crate) fn ethnologue_rows(rows: Vec<TabRow>) -> Vec<EthnologueRow> {
    rows.into_iter()
        .skip(1)
        .map(|row| EthnologueRow {
            line: row.line,
            fields: row.fields,
        })
        .collect()
}

/// A row of the country-per-code table (`LanguageCodes.txt`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    pub line: usize,
    pub code: String,
    pub country_code: String,
}

impl CountryRow {
    pub fn new(code: &str, country_code: &str) -> Self {
        Self {
            line: 0,
            code: code.to_string(),
            country_code: country_code.to_string(),
        }
    }
}

/// Parses `LanguageCodes.txt`. Empty fields are dropped and rows left with
/// fewer than two fields are skipped.
pub fn parse_country_table(text: &str) -> Result<Vec<CountryRow>, StandardsError> {
    let rows = parse_tab_rows(text.as_bytes(), &inline_origin())?;
    Ok(country_rows(rows))
}

pub(crate) fn country_rows(rows: Vec<TabRow>) -> Vec<CountryRow> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let fields: Vec<&String> = row.fields.iter().filter(|f| !f.is_empty()).collect();
        if fields.len() < 2 {
            tracing::debug!(line = row.line, "skipping short country row");
            continue;
        }
        out.push(CountryRow {
            line: row.line,
            code: fields[0].clone(),
            country_code: fields[1].clone(),
        });
    }
    out
}
