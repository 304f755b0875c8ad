//! Language index output.
//!
//! - **TSV** (`LanguageDataIndex.txt`): one line per record, every record
//! - **JSON** (`LanguageDataIndex.json`): compact array of ISO 639-3 languages

mod common;
mod error;
mod json;
mod tsv;

pub use common::ensure_parent_dir;
pub use error::OutputError;
pub use json::{
    JSON_FILE_NAME, JsonCode, JsonLanguage, json_languages, render_index_json, write_index_json,
};
pub use tsv::{
    TSV_FILE_NAME, format_index_line, index_digest, render_index_tsv, write_index_tsv,
};
