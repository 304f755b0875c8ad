//! Registry merge: desired names, macrolanguage flags and registry names.

use langindex_model::LanguageIndex;
use langindex_standards::{RegisteredLanguage, SubtagRegistry};

use super::normalize_apostrophes;
use crate::policy::MergePolicy;
use crate::report::{Stage, StageStats};

/// Merges every registered language into `index`, in ascending ISO 639-3
/// order. Each merged record is moved to the end of the index, so the
/// registry languages end up after the Ethnologue-only ones.
pub fn apply(
    index: &mut LanguageIndex,
    registry: &SubtagRegistry,
    policy: &MergePolicy,
) -> StageStats {
    let mut stats = StageStats::new(Stage::Registry);

    let mut languages: Vec<&RegisteredLanguage> = registry.languages().collect();
    languages.sort_by(|a, b| a.iso3_code.cmp(&b.iso3_code));

    for language in languages {
        stats.seen += 1;
        if language.is_deprecated {
            stats.skip("deprecated");
            continue;
        }
        if policy.is_excluded(&language.code) {
            stats.skip("excluded_code");
            continue;
        }

        if index.contains(&language.code) {
            stats.updated += 1;
        } else {
            stats.created += 1;
        }
        let record = index.get_or_create(&language.code, &language.iso3_code);
        record.desired_name = normalize_apostrophes(&language.name);
        record.is_macro_language = language.is_macro_language;

        // Languages spoken in an excluded region keep a single name.
        let single_name = record
            .countries
            .iter()
            .any(|country| policy.is_excluded_region(country));
        for description in &language.descriptions {
            let name = normalize_apostrophes(description);
            if !record.has_name(&name) {
                if single_name && record.names.len() == 1 {
                    break;
                }
                record.names.push(name);
            }
            if single_name {
                break;
            }
        }

        index.move_to_back(&language.code);
    }
    stats
}
