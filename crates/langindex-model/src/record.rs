//! The single entity of the language index.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// One language (or region/script-qualified language) in the index.
///
/// `names` is ordered: index 0 is the most preferred display name. It never
/// holds two identical strings. A record whose `names` is empty is
/// suppressed; it stays in the index so later lookups remain stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    /// Key of the record in the index: a bare ISO 639 code or a full IETF tag.
    pub tag: String,
    /// ISO 639-3 identifier (or the full tag for derived records).
    pub three_letter_tag: String,
    pub desired_name: String,
    pub is_macro_language: bool,
    pub names: Vec<String>,
    /// Country display names in first-seen order.
    pub countries: IndexSet<String>,
    /// Empty when no single country could be determined.
    pub primary_country: String,
}

impl LanguageRecord {
    pub fn new(tag: impl Into<String>, three_letter_tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            three_letter_tag: three_letter_tag.into(),
            ..Self::default()
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Appends `name` unless an identical string is already present.
    ///
    /// Returns true when the name was added.
    pub fn push_name(&mut self, name: &str) -> bool {
        if self.has_name(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Moves `name` to the front, removing every other occurrence.
    pub fn promote_name(&mut self, name: &str) {
        self.names.retain(|n| n != name);
        self.names.insert(0, name.to_string());
    }

    /// Returns true when the country was not yet present.
    pub fn add_country(&mut self, country: &str) -> bool {
        if country.is_empty() {
            return false;
        }
        self.countries.insert(country.to_string())
    }

    /// Set equality on countries, ignoring insertion order.
    pub fn same_countries(&self, other: &LanguageRecord) -> bool {
        self.countries.len() == other.countries.len()
            && self.countries.iter().all(|c| other.countries.contains(c))
    }

    /// Display names other than the desired name, in preference order.
    pub fn alternate_names(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(move |name| *name != self.desired_name)
    }

    pub fn primary_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_name_rejects_exact_duplicates() {
        let mut record = LanguageRecord::new("de", "deu");
        assert!(record.push_name("German"));
        assert!(!record.push_name("German"));
        assert!(record.push_name("german"));
        assert_eq!(record.names, vec!["German", "german"]);
    }

    #[test]
    fn promote_name_moves_to_front_once() {
        let mut record = LanguageRecord::new("es", "spa");
        record.names = vec![
            "Castilian".to_string(),
            "Spanish".to_string(),
            "Español".to_string(),
        ];
        record.promote_name("Spanish");
        assert_eq!(record.names, vec!["Spanish", "Castilian", "Español"]);
        record.promote_name("Catalan");
        assert_eq!(record.names[0], "Catalan");
        assert_eq!(record.names.len(), 4);
    }

    #[test]
    fn same_countries_ignores_order() {
        let mut a = LanguageRecord::new("a", "a");
        a.add_country("Peru");
        a.add_country("Chile");
        let mut b = LanguageRecord::new("b", "b");
        b.add_country("Chile");
        b.add_country("Peru");
        assert!(a.same_countries(&b));
        b.add_country("Bolivia");
        assert!(!a.same_countries(&b));
    }

    #[test]
    fn empty_country_is_ignored() {
        let mut record = LanguageRecord::new("qaa", "qaa");
        assert!(!record.add_country(""));
        assert!(record.countries.is_empty());
    }

    #[test]
    fn alternate_names_skip_desired_name() {
        let mut record = LanguageRecord::new("fr", "fra");
        record.names = vec!["français".to_string(), "French".to_string()];
        record.desired_name = "français".to_string();
        let alternates: Vec<&str> = record.alternate_names().collect();
        assert_eq!(alternates, vec!["French"]);
    }
}
