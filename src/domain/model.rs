use crate::core::index::AccentIndex;
use std::fmt;

/// Accent positions that apply to a set of parts of speech.
///
/// A single empty tag means the accents are not qualified by part of speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentGroup {
    pub parts_of_speech: Vec<String>,
    pub accents: Vec<u32>,
}

impl AccentGroup {
    pub fn new(parts_of_speech: Vec<String>, accents: Vec<u32>) -> Self {
        Self {
            parts_of_speech,
            accents,
        }
    }
}

impl fmt::Display for AccentGroup {
    // tag1,tag2;accent1,accent2
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accents: Vec<String> = self.accents.iter().map(|a| a.to_string()).collect();
        write!(f, "{};{}", self.parts_of_speech.join(","), accents.join(","))
    }
}

/// One reading of a vocabulary term together with its accent groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingEntry {
    pub reading: String,
    pub accents: Vec<AccentGroup>,
}

impl fmt::Display for ReadingEntry {
    // reading:group1|group2
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self.accents.iter().map(|g| g.to_string()).collect();
        write!(f, "{}:{}", self.reading, groups.join("|"))
    }
}

/// A parsed dictionary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub line_number: usize,
    pub vocab: String,
    pub reading: String,
    pub accents: Vec<AccentGroup>,
}

/// Parsed entries plus the line counts needed for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractResult {
    pub entries: Vec<Entry>,
    pub lines_read: usize,
    pub lines_skipped: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub entries_indexed: usize,
    pub vocab_count: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub index: AccentIndex,
    pub stats: RunStats,
}
