//! Ordinal-indexed view over the embedded word dictionary.

use std::str;

/// Word records packed as ASCII, one zero byte after each record, an
/// empty record (two consecutive zero bytes) closing the list.
static EMBEDDED: &[u8] = include_bytes!("words.bin");

/// Read-only dictionary over a static record blob.
///
/// Both queries walk the blob from the start, so lookup is O(n) in the
/// ordinal. The dictionary is small and each run draws only a handful of
/// words; a secondary index would buy nothing and change the edge-case
/// behavior around the terminating record.
#[derive(Debug, Clone, Copy)]
pub struct WordDictionary {
    blob: &'static [u8],
}

impl WordDictionary {
    pub const fn new(blob: &'static [u8]) -> Self {
        WordDictionary { blob }
    }

    /// The dictionary compiled into the binary.
    pub fn embedded() -> Self {
        WordDictionary::new(EMBEDDED)
    }

    /// The `ordinal`-th record, or `None` when the list ends first.
    pub fn word_at(&self, ordinal: usize) -> Option<&'static str> {
        self.records().nth(ordinal).and_then(|r| str::from_utf8(r).ok())
    }

    /// Total record count, found by scanning to the empty record.
    pub fn word_count(&self) -> usize {
        self.records().count()
    }

    fn records(&self) -> Records {
        Records { rest: self.blob }
    }
}

struct Records {
    rest: &'static [u8],
}

impl Iterator for Records {
    type Item = &'static [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let end = self
            .rest
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.rest.len());
        let record = &self.rest[..end];
        if record.is_empty() {
            // Empty record: end of list. Also covers an exhausted blob.
            return None;
        }
        self.rest = if end < self.rest.len() {
            &self.rest[end + 1..]
        } else {
            &[]
        };
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TINY: &[u8] = b"cat\0dog\0elephant\0\0";

    #[test]
    fn word_at_walks_records_in_order() {
        let dict = WordDictionary::new(TINY);
        assert_eq!(dict.word_at(0), Some("cat"));
        assert_eq!(dict.word_at(1), Some("dog"));
        assert_eq!(dict.word_at(2), Some("elephant"));
    }

    #[test]
    fn word_at_past_the_end_is_none() {
        let dict = WordDictionary::new(TINY);
        assert_eq!(dict.word_count(), 3);
        assert_eq!(dict.word_at(3), None);
        assert_eq!(dict.word_at(1000), None);
    }

    #[test]
    fn empty_blob_has_no_words() {
        let dict = WordDictionary::new(b"\0");
        assert_eq!(dict.word_count(), 0);
        assert_eq!(dict.word_at(0), None);
    }

    #[test]
    fn embedded_dictionary_is_well_formed() {
        let dict = WordDictionary::embedded();
        let count = dict.word_count();
        assert!(count > 500);
        assert_eq!(dict.word_at(0), Some("able"));
        assert_eq!(dict.word_at(count - 1), Some("zone"));
        assert_eq!(dict.word_at(count), None);
    }

    #[test]
    fn embedded_words_are_printable_ascii_lowercase() {
        let dict = WordDictionary::embedded();
        for ordinal in 0..dict.word_count() {
            let word = dict.word_at(ordinal).unwrap();
            assert!(!word.is_empty());
            assert!(word.bytes().all(|b| b.is_ascii_lowercase()), "{word}");
        }
    }
}
