pub mod index;
pub mod record;

pub use index::LanguageIndex;
pub use record::LanguageRecord;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes() {
        let mut record = LanguageRecord::new("fr", "fra");
        record.desired_name = "French".to_string();
        record.push_name("French");
        record.add_country("France");
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["tag"], "fr");
        assert_eq!(json["three_letter_tag"], "fra");
        assert_eq!(json["countries"][0], "France");
    }
}
