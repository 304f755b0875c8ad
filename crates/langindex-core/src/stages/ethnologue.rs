//! Ethnologue name and country aggregation.

use langindex_model::LanguageIndex;
use langindex_standards::{Crosswalk, EthnologueRow, SubtagRegistry};

use super::country_name;
use crate::error::MergeError;
use crate::policy::MergePolicy;
use crate::report::{Stage, StageStats};

/// Name type of a primary (language) name.
const PRIMARY_NAME: &str = "L";

/// Folds the Ethnologue rows, followed by the unlisted-language row, into
/// `index`.
///
/// A primary name moves to the front of its record; alternate names are
/// appended unless the policy drops them.
pub fn apply(
    index: &mut LanguageIndex,
    rows: &[EthnologueRow],
    crosswalk: &Crosswalk,
    registry: &SubtagRegistry,
    policy: &MergePolicy,
) -> Result<StageStats, MergeError> {
    let mut stats = StageStats::new(Stage::Ethnologue);
    let unlisted = EthnologueRow::new(&[
        policy.unlisted_language.code.as_str(),
        super::NO_REGION,
        PRIMARY_NAME,
        policy.unlisted_language.name.as_str(),
    ]);

    for row in rows.iter().chain(std::iter::once(&unlisted)) {
        stats.seen += 1;
        let [code, region, name_type, name] = row.fields.as_slice() else {
            tracing::debug!(line = row.line, fields = row.fields.len(), "skipping malformed row");
            stats.skip("field_count");
            continue;
        };
        if name_type.starts_with('!') {
            stats.skip("suppressed");
            continue;
        }

        let three_letter = code.trim();
        let code = crosswalk.resolve(three_letter);
        if policy.is_excluded(code) {
            stats.skip("excluded_code");
            continue;
        }
        let country = country_name(registry, region.trim(), Stage::Ethnologue)?;

        if !index.contains(code) {
            stats.created += 1;
        }
        let record = index.get_or_create(code, three_letter);
        if let Some(country) = country {
            record.add_country(country);
        }

        let name = name.trim();
        if name.is_empty() {
            stats.skip("empty_name");
        } else if name_type.trim() == PRIMARY_NAME {
            record.promote_name(name);
        } else if name_type.contains('P') {
            stats.skip("pejorative");
        } else if country.is_some_and(|c| policy.is_excluded_region(c)) {
            stats.skip("excluded_region");
        } else if policy.suppresses_alternates(code) {
            stats.skip("alternates_suppressed");
        } else {
            record.push_name(name);
        }
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use langindex_standards::Subtag;

    fn registry() -> SubtagRegistry {
        let mut registry = SubtagRegistry::new();
        registry.add_region(Subtag::new("FR", "France"));
        registry.add_region(Subtag::new("BE", "Belgium"));
        registry.add_region(Subtag::new("ET", "Ethiopia"));
        registry
    }

    fn run(rows: &[&[&str]]) -> Result<LanguageIndex, MergeError> {
        let rows: Vec<EthnologueRow> = rows.iter().map(|r| EthnologueRow::new(r)).collect();
        let crosswalk = Crosswalk::parse("fr\tfra\nom\torm\n").unwrap();
        let mut index = LanguageIndex::new();
        apply(&mut index, &rows, &crosswalk, &registry(), &MergePolicy::default())?;
        Ok(index)
    }

    #[test]
    fn primary_name_goes_first() {
        let index = run(&[
            &["fra", "BE", "LA", "Francais"],
            &["fra", "FR", "L", "French"],
            &["fra", "BE", "LA", "French"],
        ])
        .unwrap();
        let fr = index.get("fr").unwrap();
        assert_eq!(fr.three_letter_tag, "fra");
        assert_eq!(fr.names, vec!["French", "Francais"]);
        assert_eq!(fr.countries.len(), 2);
    }

    #[test]
    fn drops_filtered_alternates() {
        let index = run(&[
            &["abc", "FR", "L", "Abc"],
            &["abc", "FR", "LP", "Slur"],
            &["abc", "ET", "LA", "Ethiopian alternate"],
            &["abc", "FR", "!LA", "Pending"],
            &["orm", "ET", "L", "Oromo"],
            &["orm", "FR", "LA", "Galla"],
            &["gaz", "ET", "L", "West Central Oromo"],
            &["abc", "FR", "LA"],
        ])
        .unwrap();
        assert_eq!(index.get("abc").unwrap().names, vec!["Abc"]);
        assert_eq!(index.get("om").unwrap().names, vec!["Oromo"]);
        assert!(!index.contains("gaz"));
    }

    #[test]
    fn empty_name_still_adds_country() {
        let index = run(&[
            &["abc", "FR", "L", "Abc"],
            &["abc", "BE", "LA", ""],
            &["xyz", "FR", "L", "  "],
        ])
        .unwrap();
        let abc = index.get("abc").unwrap();
        assert_eq!(abc.names, vec!["Abc"]);
        assert!(abc.countries.contains("Belgium"));
        assert_eq!(abc.countries.len(), 2);
        let xyz = index.get("xyz").unwrap();
        assert!(xyz.names.is_empty());
        assert!(xyz.countries.contains("France"));
    }

    #[test]
    fn empty_name_row_with_unknown_region_is_fatal() {
        let err = run(&[&["abc", "YY", "LA", ""]]).unwrap_err();
        assert!(matches!(err, MergeError::UnknownRegion { ref code, .. } if code == "YY"));
    }

    #[test]
    fn appends_unlisted_language() {
        let index = run(&[]).unwrap();
        let qaa = index.get("qaa").unwrap();
        assert_eq!(qaa.names, vec!["Unlisted Language"]);
        assert!(qaa.countries.is_empty());
    }

    #[test]
    fn unknown_region_is_fatal() {
        let err = run(&[&["fra", "YY", "L", "French"]]).unwrap_err();
        assert!(matches!(err, MergeError::UnknownRegion { ref code, .. } if code == "YY"));
    }
}
