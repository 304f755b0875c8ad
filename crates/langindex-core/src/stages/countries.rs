//! Primary-country hints from `LanguageCodes.txt`.

use langindex_model::LanguageIndex;
use langindex_standards::{CountryRow, Crosswalk, SubtagRegistry};

use super::country_name;
use crate::error::MergeError;
use crate::report::{Stage, StageStats};

/// Sets the primary country of every record named in `rows`. Rows for codes
/// with no record are ignored; the last row for a code wins.
pub fn apply(
    index: &mut LanguageIndex,
    rows: &[CountryRow],
    crosswalk: &Crosswalk,
    registry: &SubtagRegistry,
) -> Result<StageStats, MergeError> {
    let mut stats = StageStats::new(Stage::Countries);
    for row in rows {
        stats.seen += 1;
        let code = crosswalk.resolve(row.code.trim());
        let Some(record) = index.get_mut(code) else {
            stats.skip("unknown_code");
            continue;
        };
        match country_name(registry, row.country_code.trim(), Stage::Countries)? {
            Some(country) => {
                record.primary_country = country.to_string();
                stats.updated += 1;
            }
            None => stats.skip("no_country"),
        }
    }
    Ok(stats)
}
