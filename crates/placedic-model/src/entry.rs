//! Candidate (reading, surface) pairs and the deduplicating set that holds them.

use std::collections::HashSet;
use std::collections::hash_set;

/// A reading paired with the written form it should convert to.
///
/// Ordering is lexicographic on the reading first and the surface second,
/// which is also the order of the emitted dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateEntry {
    /// Kana reading. Not yet folded to hiragana when produced by an extractor.
    pub reading: String,
    /// Written (kanji or mixed-script) form.
    pub surface: String,
}

impl CandidateEntry {
    pub fn new(reading: impl Into<String>, surface: impl Into<String>) -> Self {
        Self {
            reading: reading.into(),
            surface: surface.into(),
        }
    }

    /// Returns true when either side is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.reading.is_empty() || self.surface.is_empty()
    }
}

/// Deduplicated collection of candidates gathered from every source.
///
/// Insertion order carries no meaning; the set only grows until assembly.
#[derive(Debug, Clone, Default)]
pub struct EntrySet {
    entries: HashSet<CandidateEntry>,
}

impl EntrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, returning `true` if it was not present yet.
    pub fn insert(&mut self, entry: CandidateEntry) -> bool {
        self.entries.insert(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &CandidateEntry) -> bool {
        self.entries.contains(entry)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, CandidateEntry> {
        self.entries.iter()
    }
}

impl Extend<CandidateEntry> for EntrySet {
    fn extend<T: IntoIterator<Item = CandidateEntry>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl FromIterator<CandidateEntry> for EntrySet {
    fn from_iter<T: IntoIterator<Item = CandidateEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EntrySet {
    type Item = CandidateEntry;
    type IntoIter = hash_set::IntoIter<CandidateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntrySet {
    type Item = &'a CandidateEntry;
    type IntoIter = hash_set::Iter<'a, CandidateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
