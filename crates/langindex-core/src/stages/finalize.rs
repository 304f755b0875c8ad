//! Localized names and primary countries.

use langindex_model::LanguageIndex;

use crate::error::MergeError;
use crate::policy::{Ambiguity, MergePolicy};
use crate::report::{AmbiguousCountry, Stage, StageStats};

/// Promotes self-names for the major languages, then settles each record's
/// primary country. Records left in several countries with no primary
/// country are returned as diagnostics.
pub fn apply(
    index: &mut LanguageIndex,
    policy: &MergePolicy,
) -> Result<(StageStats, Vec<AmbiguousCountry>), MergeError> {
    let mut stats = StageStats::new(Stage::Finalize);

    for record in index.iter_mut() {
        stats.seen += 1;
        let mut changed = false;

        if let Some(local) = record
            .primary_name()
            .and_then(|name| policy.localized_name(name))
        {
            record.promote_name(local);
            record.desired_name = local.to_string();
            changed = true;
        }

        if let Some(country) = policy.primary_country_override(&record.three_letter_tag) {
            record.primary_country = country.to_string();
            changed = true;
        } else if record.primary_country.is_empty() && record.countries.len() == 1 {
            if let Some(only) = record.countries.first() {
                record.primary_country = only.clone();
                changed = true;
            }
        }

        if changed {
            stats.updated += 1;
        }
    }

    let ambiguous = ambiguous_countries(index);
    for entry in &ambiguous {
        tracing::warn!(
            tag = %entry.tag,
            name = %entry.desired_name,
            countries = entry.countries.len(),
            "language has no primary country but is found in multiple countries"
        );
    }
    if policy.ambiguity == Ambiguity::Fail && !ambiguous.is_empty() {
        return Err(MergeError::AmbiguousPrimaryCountry {
            count: ambiguous.len(),
        });
    }
    Ok((stats, ambiguous))
}

/// Records with no primary country and more than one country.
pub fn ambiguous_countries(index: &LanguageIndex) -> Vec<AmbiguousCountry> {
    index
        .iter()
        .filter(|record| record.primary_country.is_empty() && record.countries.len() > 1)
        .map(|record| AmbiguousCountry {
            tag: record.tag.clone(),
            desired_name: record.desired_name.clone(),
            countries: record.countries.iter().cloned().collect(),
        })
        .collect()
}
