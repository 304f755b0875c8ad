//! Canonical-tag expansion from the SLDR catalogue.
//!
//! Available tags are grouped by language. A language with a single tag is
//! re-keyed to that tag. A language with several tags gets one derived
//! record per qualified tag.

use indexmap::{IndexMap, IndexSet};
use langindex_model::{LanguageIndex, LanguageRecord};
use langindex_standards::{ResolvedTag, TagCatalog, TagResolver};

use crate::error::MergeError;
use crate::report::{Stage, StageStats};

/// Canonical available tags grouped by language subtag, in catalogue order.
pub fn group_tags(
    catalog: &TagCatalog,
    resolver: &TagResolver<'_>,
    stats: &mut StageStats,
) -> IndexMap<String, IndexSet<String>> {
    let mut groups: IndexMap<String, IndexSet<String>> = IndexMap::new();
    for tag in catalog.available_tags() {
        stats.seen += 1;
        let Some(resolved) = resolver.decompose(tag) else {
            tracing::debug!(tag, "skipping invalid catalogue tag");
            stats.skip("invalid_tag");
            continue;
        };
        groups
            .entry(resolved.tag.language().to_string())
            .or_default()
            .insert(resolved.tag.to_string());
    }
    groups
}

pub fn apply(
    index: &mut LanguageIndex,
    catalog: &TagCatalog,
    resolver: &TagResolver<'_>,
) -> Result<StageStats, MergeError> {
    let mut stats = StageStats::new(Stage::Expansion);
    let groups = group_tags(catalog, resolver, &mut stats);

    for (key, tags) in &groups {
        if tags.len() == 1 {
            let tag = &tags[0];
            if tag != key && index.rename(key, tag) {
                tracing::debug!(from = %key, to = %tag, "renamed record");
                stats.renamed += 1;
            }
            continue;
        }

        for tag in tags {
            let Some(resolved) = resolver.decompose(tag) else {
                stats.skip("invalid_tag");
                continue;
            };
            if *tag == resolved.language.code {
                continue;
            }
            if index.contains(tag) {
                return Err(MergeError::DuplicateTag { tag: tag.clone() });
            }
            let (record, synthesized) = derive_record(index, key, tag, &resolved, resolver);
            index.push_back(record);
            stats.created += 1;
            if synthesized {
                stats.synthesized += 1;
            }
        }
    }
    Ok(stats)
}

/// Builds the record for a qualified tag.
///
/// When the script need not be shown and the bare language record covers the
/// same countries, the derived record reuses its names. Otherwise it gets a
/// single name built from the language (and script) names; the returned
/// flag says whether that happened.
fn derive_record(
    index: &LanguageIndex,
    key: &str,
    tag: &str,
    resolved: &ResolvedTag,
    resolver: &TagResolver<'_>,
) -> (LanguageRecord, bool) {
    let mut record = LanguageRecord::new(tag, tag);
    if let Some(country) = resolved.region.as_ref().and_then(|r| r.name.as_deref()) {
        record.add_country(country);
    }

    let display_script = resolved
        .script
        .as_ref()
        .filter(|_| !resolver.is_script_implied(resolved));
    let sibling = index
        .get(&resolved.language.code)
        .filter(|sibling| display_script.is_none() && record.same_countries(sibling));
    let synthesized = match sibling {
        Some(sibling) => {
            for name in &sibling.names {
                record.push_name(name);
            }
            false
        }
        None => {
            let language_name = resolved.language.display_name();
            let name = match display_script {
                Some(script) => format!("{language_name} ({})", script.display_name()),
                None => language_name.to_string(),
            };
            record.push_name(&name);
            true
        }
    };

    if let Some(base) = index.get(key) {
        record.is_macro_language = base.is_macro_language;
    }
    (record, synthesized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use langindex_standards::{RegisteredLanguage, Subtag, SubtagRegistry};

    fn registry() -> SubtagRegistry {
        let mut registry = SubtagRegistry::new();
        registry.add_language(RegisteredLanguage::new("zh", "zho", "Chinese").macro_language());
        registry.add_language(RegisteredLanguage::new("aa", "aar", "Afar"));
        registry.add_script(Subtag::new("Latn", "Latin"));
        registry.add_script(Subtag::new("Hans", "Han (Simplified variant)"));
        registry.add_script(Subtag::new("Hant", "Han (Traditional variant)"));
        registry.add_region(Subtag::new("CN", "China"));
        registry.add_region(Subtag::new("TW", "Taiwan"));
        registry
    }

    fn base_index() -> LanguageIndex {
        let mut index = LanguageIndex::new();
        let zh = index.get_or_create("zh", "zho");
        zh.push_name("Chinese");
        zh.push_name("Mandarin");
        zh.add_country("China");
        zh.is_macro_language = true;
        index.get_or_create("aa", "aar").push_name("Afar");
        index
    }

    #[test]
    fn singleton_group_renames_record() {
        let registry = registry();
        let catalog = TagCatalog::parse("*aa-Latn = aa\n");
        let resolver = TagResolver::new(&registry, &catalog);
        let mut index = base_index();

        let stats = apply(&mut index, &catalog, &resolver).unwrap();

        assert!(!index.contains("aa"));
        let renamed = index.get("aa-Latn").unwrap();
        assert_eq!(renamed.three_letter_tag, "aar");
        assert_eq!(index.tags().last(), Some("aa-Latn"));
        assert_eq!(stats.renamed, 1);
    }

    #[test]
    fn multi_tag_group_derives_records() {
        let registry = registry();
        let catalog =
            TagCatalog::parse("*zh = *zh-CN = zh-Hans-CN | *zh-TW = zh-Hant-TW | *zh-Hant\n");
        let resolver = TagResolver::new(&registry, &catalog);
        let mut index = base_index();

        let stats = apply(&mut index, &catalog, &resolver).unwrap();

        let tags: Vec<&str> = index.tags().collect();
        assert_eq!(tags, vec!["zh", "aa", "zh-CN", "zh-TW", "zh-Hant"]);
        assert_eq!(stats.created, 3);
        assert_eq!(stats.synthesized, 2);

        let cn = index.get("zh-CN").unwrap();
        assert_eq!(cn.names, vec!["Chinese", "Mandarin"]);
        assert_eq!(cn.three_letter_tag, "zh-CN");
        assert!(cn.is_macro_language);

        let tw = index.get("zh-TW").unwrap();
        assert_eq!(tw.names, vec!["Chinese"]);
        assert_eq!(tw.countries.len(), 1);

        let hant = index.get("zh-Hant").unwrap();
        assert_eq!(hant.names, vec!["Chinese (Han (Traditional variant))"]);
        assert!(hant.countries.is_empty());
    }

    #[test]
    fn existing_key_is_a_duplicate() {
        let registry = registry();
        let catalog = TagCatalog::parse("*zh-CN | *zh-TW\n");
        let resolver = TagResolver::new(&registry, &catalog);
        let mut index = base_index();
        index.get_or_create("zh-TW", "zh-TW");

        let err = apply(&mut index, &catalog, &resolver).unwrap_err();

        assert!(matches!(err, MergeError::DuplicateTag { ref tag } if tag == "zh-TW"));
    }
}
