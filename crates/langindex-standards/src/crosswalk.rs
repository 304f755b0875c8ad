//! ISO 639-1 / ISO 639-3 code crosswalk (`TwoToThreeCodes.txt`).

use std::collections::HashMap;
use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::error::StandardsError;
use crate::tables::{TabRow, inline_origin, parse_tab_rows};

/// Bidirectional mapping between two-letter and three-letter codes.
///
/// Each row of the source is `twoLetter \t threeLetter`; a later row for the
/// same key replaces an earlier one.
#[derive(Debug, Clone, Default)]
pub struct Crosswalk {
    two_to_three: IndexMap<String, String>,
    three_to_two: HashMap<String, String>,
}

impl Crosswalk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> Result<Self, StandardsError> {
        Self::from_rows(parse_tab_rows(text.as_bytes(), &inline_origin())?)
    }

    pub(crate) fn from_rows(rows: Vec<TabRow>) -> Result<Self, StandardsError> {
        let mut crosswalk = Self::new();
        for row in rows {
            let (Some(two), Some(three)) = (row.field(0), row.field(1)) else {
                return Err(StandardsError::MalformedCrosswalk {
                    line: row.line,
                    content: row.fields.join("\t"),
                });
            };
            crosswalk.insert(two.trim(), three.trim());
        }
        Ok(crosswalk)
    }

    /// Builds the crosswalk from the SIL `iso-639-3.tab` code table.
    ///
    /// Columns are `Id, Part2B, Part2T, Part1, ...`; only rows whose `Part1`
    /// is exactly two characters contribute. Short rows are ignored.
    pub fn from_iso639_table(text: &str) -> Result<Self, StandardsError> {
        let rows = parse_tab_rows(text.as_bytes(), &inline_origin())?;
        let mut crosswalk = Self::new();
        for row in rows {
            if row.len() < 4 {
                continue;
            }
            let three = row.fields[0].trim();
            let two = row.fields[3].trim();
            if two.chars().count() == 2 {
                crosswalk.insert(two, three);
            }
        }
        Ok(crosswalk)
    }

    pub fn insert(&mut self, two_letter: &str, three_letter: &str) {
        self.two_to_three
            .insert(two_letter.to_string(), three_letter.to_string());
        self.three_to_two
            .insert(three_letter.to_string(), two_letter.to_string());
    }

    pub fn two_letter(&self, three_letter: &str) -> Option<&str> {
        self.three_to_two.get(three_letter).map(String::as_str)
    }

    pub fn three_letter(&self, two_letter: &str) -> Option<&str> {
        self.two_to_three.get(two_letter).map(String::as_str)
    }

    /// Maps a three-letter code to its two-letter form when one exists,
    /// otherwise returns the code unchanged.
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.two_letter(code).unwrap_or(code)
    }

    pub fn len(&self) -> usize {
        self.two_to_three.len()
    }

    pub fn is_empty(&self) -> bool {
        self.two_to_three.is_empty()
    }

    /// Renders the crosswalk in `TwoToThreeCodes.txt` form.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (two, three) in &self.two_to_three {
            let _ = writeln!(out, "{two}\t{three}");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_both_directions() {
        let crosswalk = Crosswalk::parse("fr\tfra\nde\tdeu\n").unwrap();
        assert_eq!(crosswalk.two_letter("fra"), Some("fr"));
        assert_eq!(crosswalk.three_letter("de"), Some("deu"));
        assert_eq!(crosswalk.resolve("fra"), "fr");
        assert_eq!(crosswalk.resolve("xyz"), "xyz");
    }

    #[test]
    fn later_rows_win() {
        let crosswalk = Crosswalk::parse("iw\theb\nhe\theb\n").unwrap();
        assert_eq!(crosswalk.two_letter("heb"), Some("he"));
    }

    #[test]
    fn short_row_is_an_error() {
        let err = Crosswalk::parse("fr\tfra\nde\n").unwrap_err();
        assert!(matches!(
            err,
            StandardsError::MalformedCrosswalk { line: 2, .. }
        ));
    }

    #[test]
    fn builds_from_iso639_table() {
        let table = "Id\tPart2B\tPart2T\tPart1\tScope\tLanguage_Type\tRef_Name\tComment\n\
                     aaa\t\t\t\tI\tL\tGhotuo\t\n\
                     aar\taar\taar\taa\tI\tL\tAfar\t\n\
                     fra\tfre\tfra\tfr\tI\tL\tFrench\t\n\
                     junk\n";
        let crosswalk = Crosswalk::from_iso639_table(table).unwrap();
        assert_eq!(crosswalk.len(), 2);
        assert_eq!(crosswalk.to_text(), "aa\taar\nfr\tfra\n");
    }
}
