//! SLDR tag catalogue (`alltags.txt`).
//!
//! Each line lists tags for one language. `|` and `>` separate chains, `=`
//! joins equivalent tags inside a chain, and a `*` prefix marks a tag for
//! which the SLDR has data ("available").

use std::collections::HashMap;

use indexmap::IndexSet;

use crate::tag::LanguageTag;

#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    available: IndexSet<String>,
    /// Lowercased tag -> implicit script.
    implicit_scripts: HashMap<String, String>,
    tag_count: usize,
}

impl TagCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> Self {
        let mut catalog = Self::new();
        for line in text.lines() {
            let line = line.trim_start_matches('\u{feff}').trim();
            if line.is_empty() {
                continue;
            }
            for chain in line.split(['|', '>']) {
                catalog.add_chain(chain);
            }
        }
        tracing::debug!(
            tags = catalog.tag_count,
            available = catalog.available.len(),
            "parsed SLDR tag catalogue"
        );
        catalog
    }

    fn add_chain(&mut self, chain: &str) {
        let mut members = Vec::new();
        for raw in chain.split('=') {
            let available = raw.contains('*');
            let tag: String = raw.chars().filter(|c| *c != '*' && *c != ' ').collect();
            let tag = tag.trim().to_string();
            if tag.is_empty() {
                continue;
            }
            members.push((tag, available));
        }

        let script = members.iter().find_map(|(tag, _)| {
            tag.parse::<LanguageTag>()
                .ok()
                .and_then(|t| t.script().map(str::to_string))
        });
        for (tag, available) in members {
            self.tag_count += 1;
            if let Some(script) = &script {
                self.implicit_scripts
                    .entry(tag.to_ascii_lowercase())
                    .or_insert_with(|| script.clone());
            }
            if available {
                self.available.insert(tag);
            }
        }
    }

    /// Available tags in file order, as written.
    pub fn available_tags(&self) -> impl Iterator<Item = &str> {
        self.available.iter().map(String::as_str)
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// The script a tag is written in when none is given.
    pub fn implicit_script(&self, tag: &str) -> Option<&str> {
        self.implicit_scripts
            .get(&tag.to_ascii_lowercase())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "*aa = *aa-ET = aa-Latn = aa-Latn-ET\n\
*zh = *zh-CN = zh-Hans = *zh-Hans-CN | *zh-TW = zh-Hant = zh-Hant-TW\n\
sr = sr-Cyrl = *sr-Cyrl-RS > *sr-Latn = sr-Latn-RS\n";

    #[test]
    fn collects_available_tags_in_order() {
        let catalog = TagCatalog::parse(SAMPLE);
        let tags: Vec<&str> = catalog.available_tags().collect();
        assert_eq!(tags, vec![
            "aa",
            "aa-ET",
            "zh",
            "zh-CN",
            "zh-Hans-CN",
            "zh-TW",
            "sr-Cyrl-RS",
            "sr-Latn"
        ]);
        assert!(!tags.contains(&"aa-Latn"));
    }

    #[test]
    fn implicit_script_follows_the_chain() {
        let catalog = TagCatalog::parse(SAMPLE);
        assert_eq!(catalog.implicit_script("aa-et"), Some("Latn"));
        assert_eq!(catalog.implicit_script("zh-CN"), Some("Hans"));
        assert_eq!(catalog.implicit_script("zh-TW"), Some("Hant"));
        assert_eq!(catalog.implicit_script("sr"), Some("Cyrl"));
        assert_eq!(catalog.implicit_script("xx"), None);
    }
}
