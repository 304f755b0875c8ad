//! End-to-end merge scenarios.

use langindex_core::{Ambiguity, MergeError, MergeInputs, MergePipeline, MergePolicy, Stage};
use langindex_model::LanguageIndex;
use langindex_standards::tables::{parse_country_table, parse_ethnologue_table};
use langindex_standards::{Crosswalk, SubtagRegistry, TagCatalog};

const HEADER: &str = "LangID\tCountryID\tNameType\tName\n";

const REGISTRY: &str = "File-Date: 2024-03-07\n\
%%\n\
Type: language\n\
Subtag: fr\n\
Description: French\n\
Added: 2005-10-16\n\
Suppress-Script: Latn\n\
%%\n\
Type: language\n\
Subtag: zh\n\
Description: Chinese\n\
Added: 2005-10-16\n\
Scope: macrolanguage\n\
%%\n\
Type: language\n\
Subtag: gaz\n\
Description: West Central Oromo\n\
Added: 2009-07-29\n\
%%\n\
Type: language\n\
Subtag: aa\n\
Description: Afar\n\
Added: 2005-10-16\n\
%%\n\
Type: script\n\
Subtag: Latn\n\
Description: Latin\n\
Added: 2005-10-16\n\
%%\n\
Type: script\n\
Subtag: Hans\n\
Description: Han (Simplified variant)\n\
Added: 2005-10-16\n\
%%\n\
Type: script\n\
Subtag: Hant\n\
Description: Han (Traditional variant)\n\
Added: 2005-10-16\n\
%%\n\
Type: region\n\
Subtag: FR\n\
Description: France\n\
Added: 2005-10-16\n\
%%\n\
Type: region\n\
Subtag: CA\n\
Description: Canada\n\
Added: 2005-10-16\n\
%%\n\
Type: region\n\
Subtag: CN\n\
Description: China\n\
Added: 2005-10-16\n\
%%\n\
Type: region\n\
Subtag: TW\n\
Description: Taiwan, Province of China\n\
Added: 2005-10-16\n\
%%\n\
Type: region\n\
Subtag: DJ\n\
Description: Djibouti\n\
Added: 2005-10-16\n\
%%\n\
Type: region\n\
Subtag: ER\n\
Description: Eritrea\n\
Added: 2005-10-16\n";

struct Fixture {
    crosswalk: Crosswalk,
    ethnologue: String,
    countries: String,
    registry: String,
    catalog: String,
}

impl Fixture {
    fn new(ethnologue_rows: &str) -> Self {
        Self {
            crosswalk: Crosswalk::parse("fr\tfra\nzh\tzho\naa\taar\n").unwrap(),
            ethnologue: format!("{HEADER}{ethnologue_rows}"),
            countries: String::new(),
            registry: REGISTRY.to_string(),
            catalog: String::new(),
        }
    }

    fn run(&self, policy: MergePolicy) -> Result<LanguageIndex, MergeError> {
        let ethnologue = parse_ethnologue_table(&self.ethnologue).unwrap();
        let countries = parse_country_table(&self.countries).unwrap();
        let registry = SubtagRegistry::parse(&self.registry, &self.crosswalk);
        let catalog = TagCatalog::parse(&self.catalog);
        let inputs = MergeInputs {
            crosswalk: &self.crosswalk,
            ethnologue: &ethnologue,
            countries: &countries,
            registry: &registry,
            catalog: &catalog,
        };
        MergePipeline::new(policy).run(&inputs).map(|outcome| outcome.index)
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn french_end_to_end() {
    let index = Fixture::new("fra\tFR\tL\tFrench\n")
        .run(MergePolicy::default())
        .unwrap();

    let fr = index.get("fr").unwrap();
    assert_eq!(fr.tag, "fr");
    assert_eq!(fr.three_letter_tag, "fra");
    assert_eq!(fr.names, vec!["français", "French"]);
    assert_eq!(fr.countries.iter().collect::<Vec<_>>(), vec!["France"]);
    assert_eq!(fr.primary_country, "France");
    assert_eq!(fr.desired_name, "français");
    assert!(!fr.is_macro_language);
}

#[test]
fn unlisted_language_is_always_present() {
    let index = Fixture::new("").run(MergePolicy::default()).unwrap();

    let qaa = index.get("qaa").unwrap();
    assert!(qaa.names.iter().any(|n| n == "Unlisted Language"));
    assert_eq!(qaa.desired_name, "Language Not Listed");
}

#[test]
fn excluded_codes_never_become_keys() {
    let index = Fixture::new("gaz\tET\tL\tOromo\n")
        .run(MergePolicy::default())
        .unwrap();

    assert!(!index.contains("gaz"));
}

#[test]
fn output_order_follows_stage_order() {
    let mut fixture = Fixture::new("zzz\tFR\tL\tEthnologue Only\nfra\tFR\tL\tFrench\n");
    fixture.catalog = "*zh = *zh-CN = zh-Hans-CN | *zh-TW = zh-Hant-TW\n".to_string();

    let index = fixture.run(MergePolicy::default()).unwrap();

    let tags: Vec<&str> = index.tags().collect();
    // Ethnologue-only codes, then the registry by ISO 639-3 (""=qaa, aar,
    // fra, zho), then derived tags.
    assert_eq!(tags, vec!["zzz", "qaa", "aa", "fr", "zh", "zh-CN", "zh-TW"]);
    assert_eq!(index.get("zh-TW").unwrap().names, vec!["中文", "Chinese"]);
    assert_eq!(index.get("zh-TW").unwrap().primary_country, "Taiwan, Province of China");
    assert!(index.get("zh-CN").unwrap().is_macro_language);
}

#[test]
fn singleton_tag_group_renames_the_record() {
    let mut fixture = Fixture::new("aar\tDJ\tL\tAfar\n");
    fixture.catalog = "*aa-Latn-DJ = aa\n".to_string();

    let index = fixture.run(MergePolicy::default()).unwrap();

    assert!(!index.contains("aa"));
    let afar = index.get("aa-Latn-DJ").unwrap();
    assert_eq!(afar.three_letter_tag, "aar");
    assert_eq!(afar.names, vec!["Afar"]);
}

#[test]
fn country_table_sets_primary_country() {
    let mut fixture = Fixture::new("fra\tFR\tL\tFrench\nfra\tCA\tLA\tCanadian French\n");
    fixture.countries = "fra\tCA\n".to_string();

    let index = fixture.run(MergePolicy::default()).unwrap();

    let fr = index.get("fr").unwrap();
    assert_eq!(fr.countries.len(), 2);
    assert_eq!(fr.primary_country, "Canada");
}

#[test]
fn ambiguous_records_fail_in_strict_mode() {
    let fixture = Fixture::new("aar\tDJ\tL\tAfar\naar\tER\tLA\tQafar\n");

    let index = fixture.run(MergePolicy::default()).unwrap();
    assert_eq!(index.get("aa").unwrap().primary_country, "");

    let strict = MergePolicy {
        ambiguity: Ambiguity::Fail,
        ..MergePolicy::default()
    };
    let err = fixture.run(strict).unwrap_err();
    assert!(matches!(err, MergeError::AmbiguousPrimaryCountry { count: 1 }));
}

#[test]
fn unknown_region_aborts_the_merge() {
    let err = Fixture::new("fra\tXY\tL\tFrench\n")
        .run(MergePolicy::default())
        .unwrap_err();

    assert!(matches!(
        err,
        MergeError::UnknownRegion { ref code, stage: Stage::Ethnologue } if code == "XY"
    ));
}

#[test]
fn report_counts_every_stage() {
    let fixture = Fixture::new("fra\tFR\tL\tFrench\nshort\trow\n");
    let ethnologue = parse_ethnologue_table(&fixture.ethnologue).unwrap();
    let registry = SubtagRegistry::parse(&fixture.registry, &fixture.crosswalk);
    let catalog = TagCatalog::new();
    let inputs = MergeInputs {
        crosswalk: &fixture.crosswalk,
        ethnologue: &ethnologue,
        countries: &[],
        registry: &registry,
        catalog: &catalog,
    };

    let outcome = MergePipeline::default().run(&inputs).unwrap();

    let stages: Vec<Stage> = outcome.report.stages.iter().map(|s| s.stage).collect();
    assert_eq!(stages, Stage::ALL.to_vec());
    let ethnologue = outcome.report.stage(Stage::Ethnologue).unwrap();
    assert_eq!(ethnologue.seen, 3);
    assert_eq!(ethnologue.skipped.get("field_count"), Some(&1));
    let registry = outcome.report.stage(Stage::Registry).unwrap();
    assert_eq!(registry.skipped.get("excluded_code"), Some(&1));
    assert_eq!(outcome.report.record_count, outcome.index.len());
}
