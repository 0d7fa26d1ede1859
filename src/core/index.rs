use crate::domain::model::{AccentGroup, ReadingEntry};
use crate::utils::error::Result;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Vocabulary term to readings, in file order.
///
/// A term listed on several lines keeps one [`ReadingEntry`] per line; nothing
/// is merged or deduplicated.
#[derive(Debug, Clone, Default)]
pub struct AccentIndex {
    entries: HashMap<String, Vec<ReadingEntry>>,
}

impl AccentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, vocab: String, reading: String, accents: Vec<AccentGroup>) {
        self.entries
            .entry(vocab)
            .or_default()
            .push(ReadingEntry { reading, accents });
    }

    pub fn get(&self, vocab: &str) -> Option<&[ReadingEntry]> {
        self.entries.get(vocab).map(Vec::as_slice)
    }

    /// Number of distinct vocabulary terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of reading entries across all terms.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Flattens every reading entry to `reading:tags;accents|...`.
    ///
    /// This is the map the `Serialize` impl writes out.
    pub fn to_wire_map(&self) -> BTreeMap<String, Vec<String>> {
        self.entries
            .iter()
            .map(|(vocab, readings)| {
                (
                    vocab.clone(),
                    readings.iter().map(ReadingEntry::to_string).collect(),
                )
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for AccentIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_wire_map().serialize(serializer)
    }
}
