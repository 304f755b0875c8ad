//! Tab-separated index (`LanguageDataIndex.txt`).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use langindex_model::{LanguageIndex, LanguageRecord};
use langindex_standards::hash::sha256_hex;

use crate::common::ensure_parent_dir;
use crate::error::OutputError;

pub const TSV_FILE_NAME: &str = "LanguageDataIndex.txt";

/// One index line, without the line terminator:
/// `tag, three-letter tag, desired name, M|., names, countries, primary country`.
pub fn format_index_line(record: &LanguageRecord) -> String {
    let countries: Vec<&str> = record.countries.iter().map(String::as_str).collect();
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        record.tag,
        record.three_letter_tag,
        record.desired_name,
        if record.is_macro_language { "M" } else { "." },
        record.names.join(";"),
        countries.join(";"),
        record.primary_country,
    )
}

/// The whole index in index order, `\n`-terminated lines.
pub fn render_index_tsv(index: &LanguageIndex) -> String {
    let mut out = String::new();
    for record in index {
        out.push_str(&format_index_line(record));
        out.push('\n');
    }
    out
}

pub fn write_index_tsv(path: &Path, index: &LanguageIndex) -> Result<(), OutputError> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| OutputError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for record in index {
        writeln!(writer, "{}", format_index_line(record)).map_err(|e| OutputError::io(path, e))?;
    }
    writer.flush().map_err(|e| OutputError::io(path, e))?;
    tracing::info!(path = %path.display(), records = index.len(), "wrote index");
    Ok(())
}

/// SHA-256 of the TSV rendering. Identical inputs give identical digests.
pub fn index_digest(index: &LanguageIndex) -> String {
    sha256_hex(render_index_tsv(index).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suppressed_record_line() {
        let record = LanguageRecord::new("xx", "xxx");
        assert_eq!(format_index_line(&record), "xx\txxx\t\t.\t\t\t");
    }
}
