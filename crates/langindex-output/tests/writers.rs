//! Index writers.

use langindex_model::LanguageIndex;
use langindex_output::{
    index_digest, json_languages, render_index_json, render_index_tsv, write_index_json,
    write_index_tsv,
};

fn sample_index() -> LanguageIndex {
    let mut index = LanguageIndex::new();

    let fr = index.get_or_create("fr", "fra");
    fr.desired_name = "français".to_string();
    fr.names = vec!["français".to_string(), "French".to_string()];
    fr.add_country("France");
    fr.primary_country = "France".to_string();

    let zh = index.get_or_create("zh", "zho");
    zh.desired_name = "中文".to_string();
    zh.is_macro_language = true;
    zh.names = vec!["中文".to_string(), "Chinese".to_string()];
    zh.add_country("China");
    zh.add_country("Taiwan, Province of China");

    let derived = index.get_or_create("zh-TW", "zh-TW");
    derived.names = vec!["Chinese".to_string()];
    derived.add_country("Taiwan, Province of China");
    derived.primary_country = "Taiwan, Province of China".to_string();

    let abc = index.get_or_create("abc", "abc");
    abc.desired_name = "Ambala Ayta".to_string();
    abc.names = vec!["Ambala Ayta".to_string()];

    index
}

// ============================================================================
// TSV
// ============================================================================

#[test]
fn tsv_lines_follow_index_order() {
    let tsv = render_index_tsv(&sample_index());
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines, vec![
        "fr\tfra\tfrançais\t.\tfrançais;French\tFrance\tFrance",
        "zh\tzho\t中文\tM\t中文;Chinese\tChina;Taiwan, Province of China\t",
        "zh-TW\tzh-TW\t\t.\tChinese\tTaiwan, Province of China\tTaiwan, Province of China",
        "abc\tabc\tAmbala Ayta\t.\tAmbala Ayta\t\t",
    ]);
    assert!(tsv.ends_with('\n'));
}

#[test]
fn tsv_file_matches_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("LanguageDataIndex.txt");
    let index = sample_index();

    write_index_tsv(&path, &index).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), render_index_tsv(&index));
}

#[test]
fn digest_is_stable_and_order_sensitive() {
    let index = sample_index();
    assert_eq!(index_digest(&index), index_digest(&sample_index()));

    let mut reordered = sample_index();
    reordered.move_to_back("fr");
    assert_ne!(index_digest(&index), index_digest(&reordered));
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn json_skips_derived_records() {
    let index = sample_index();
    let tags: Vec<&str> = json_languages(&index).iter().map(|l| l.code.three).collect();
    assert_eq!(tags, vec!["fra", "zho", "abc"]);
}

#[test]
fn json_rendering() {
    let json = render_index_json(&sample_index()).unwrap();
    insta::assert_snapshot!(json, @r#"[{"name":"français","code":{"two":"fr","three":"fra"},"macro":false,"countries":["France"],"altNames":["French"],"country":"France"},{"name":"中文","code":{"two":"zh","three":"zho"},"macro":true,"countries":["China","Taiwan, Province of China"],"altNames":["Chinese"],"country":""},{"name":"Ambala Ayta","code":{"three":"abc"},"macro":false,"countries":[],"altNames":[],"country":""}]"#);
}

#[test]
fn json_file_is_compact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("LanguageDataIndex.json");
    let index = sample_index();

    write_index_json(&path, &index).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_index_json(&index).unwrap());
    assert!(!written.contains('\n'));
}
