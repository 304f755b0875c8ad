//! Ordered map from tag to [`LanguageRecord`].
//!
//! Iteration order is part of the output contract: it is the order in which
//! records were (re)inserted, and serialized indexes are compared
//! byte-for-byte.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::record::LanguageRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageIndex {
    records: IndexMap<String, LanguageRecord>,
}

impl LanguageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.records.contains_key(tag)
    }

    pub fn get(&self, tag: &str) -> Option<&LanguageRecord> {
        self.records.get(tag)
    }

    pub fn get_mut(&mut self, tag: &str) -> Option<&mut LanguageRecord> {
        self.records.get_mut(tag)
    }

    /// Returns the record for `tag`, creating it at the end of the index if
    /// it does not exist yet. An existing record keeps its three-letter tag.
    pub fn get_or_create(&mut self, tag: &str, three_letter_tag: &str) -> &mut LanguageRecord {
        match self.records.entry(tag.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(LanguageRecord::new(tag, three_letter_tag)),
        }
    }

    /// Inserts `record` under its own tag at the end of the index, replacing
    /// (and repositioning) any record already stored under that tag.
    pub fn push_back(&mut self, record: LanguageRecord) -> Option<LanguageRecord> {
        let previous = self.records.shift_remove(&record.tag);
        self.records.insert(record.tag.clone(), record);
        previous
    }

    /// Moves an existing record to the end of the index.
    ///
    /// Returns false when no record is stored under `tag`.
    pub fn move_to_back(&mut self, tag: &str) -> bool {
        match self.records.get_index_of(tag) {
            Some(position) => {
                let last = self.records.len() - 1;
                self.records.move_index(position, last);
                true
            }
            None => false,
        }
    }

    /// Re-keys a record: removes it from `old_tag`, sets its tag to `new_tag`
    /// and appends it at the end. Returns false when `old_tag` is absent.
    pub fn rename(&mut self, old_tag: &str, new_tag: &str) -> bool {
        let Some(mut record) = self.records.shift_remove(old_tag) else {
            return false;
        };
        record.tag = new_tag.to_string();
        self.push_back(record);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageRecord> {
        self.records.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut LanguageRecord> {
        self.records.values_mut()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// All records sharing an ISO 639-3 identifier, in index order.
    pub fn find_by_three_letter<'a>(
        &'a self,
        three_letter_tag: &'a str,
    ) -> impl Iterator<Item = &'a LanguageRecord> + 'a {
        self.records
            .values()
            .filter(move |record| record.three_letter_tag == three_letter_tag)
    }
}

impl<'a> IntoIterator for &'a LanguageIndex {
    type Item = &'a LanguageRecord;
    type IntoIter = indexmap::map::Values<'a, String, LanguageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
