//! # adapter_lexicon: Word and Domain Tables
//!
//! ## Layer A (Adapter) Role
//!
//! The decoder kernel only returns integer indices; this crate holds the
//! fixed-order tables those indices address. Tables are loaded once from
//! disk, are immutable afterwards, and can be shared across threads as
//! process-wide read-only data.
//!
//! Lookups fail explicitly on out-of-range indices or empty tables; a
//! default word or record is never substituted.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use thiserror::Error;
use tracing::info;

/// Errors from table loading and lookup.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// Index past the end of the table.
    #[error("Index {index} out of range for table of {len} entries")]
    IndexOutOfRange {
        /// The requested index.
        index: u64,
        /// Number of entries in the table.
        len: usize,
    },

    /// Lookup against a table with no entries.
    #[error("Table is empty")]
    EmptyTable,

    /// A domain line did not have the expected `host<TAB>url` shape.
    #[error("Malformed record on line {line}: {content:?}")]
    MalformedRecord {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// Underlying I/O failure while loading.
    #[error("Failed to load table: {0}")]
    Io(#[from] std::io::Error),
}

/// Fixed-order word list, one word per line.
///
/// # Examples
/// ```
/// use adapter_lexicon::WordTable;
///
/// let table = WordTable::from_reader("alpha\nbeta\ngamma\n".as_bytes()).unwrap();
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.word_at(1).unwrap(), "beta");
/// assert!(table.word_at(3).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct WordTable {
    words: Vec<String>,
}

impl WordTable {
    /// Load a word list from any reader; blank lines are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LexiconError> {
        let mut words = Vec::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        Ok(Self { words })
    }

    /// Load a word list from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let table = Self::from_reader(File::open(path)?)?;
        info!(path = %path.display(), words = table.len(), "loaded word table");
        Ok(table)
    }

    /// Number of words in the table.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`, in table order.
    ///
    /// # Errors
    /// [`LexiconError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn word_at(&self, index: u64) -> Result<&str, LexiconError> {
        self.words
            .get(usize::try_from(index).unwrap_or(usize::MAX))
            .map(String::as_str)
            .ok_or(LexiconError::IndexOutOfRange {
                index,
                len: self.words.len(),
            })
    }
}

/// One row of an ordered domain table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRecord {
    /// Host name of the record.
    pub host: String,
    /// Full URL of the record.
    pub url: String,
}

/// Ordered domain/URL list, one `host<TAB>url` record per line.
///
/// Decoder indices are drawn against an arbitrary resolution, which may
/// exceed the number of rows; [`DomainTable::record_near`] therefore clamps
/// to the final row rather than failing on a large index. An empty table is
/// still an error.
#[derive(Debug, Clone)]
pub struct DomainTable {
    records: Vec<DomainRecord>,
}

impl DomainTable {
    /// Load a domain table from any reader; blank lines are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LexiconError> {
        let mut records = Vec::new();
        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let (host, url) =
                trimmed
                    .split_once('\t')
                    .ok_or_else(|| LexiconError::MalformedRecord {
                        line: i + 1,
                        content: trimmed.to_string(),
                    })?;
            records.push(DomainRecord {
                host: host.to_string(),
                url: url.to_string(),
            });
        }
        Ok(Self { records })
    }

    /// Load a domain table from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let table = Self::from_reader(File::open(path)?)?;
        info!(path = %path.display(), records = table.len(), "loaded domain table");
        Ok(table)
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record nearest to `index`: the row at `index`, or the final row when
    /// the index points past the table.
    ///
    /// # Errors
    /// [`LexiconError::EmptyTable`] if the table has no rows.
    pub fn record_near(&self, index: u64) -> Result<&DomainRecord, LexiconError> {
        if self.records.is_empty() {
            return Err(LexiconError::EmptyTable);
        }
        let clamped = usize::try_from(index)
            .unwrap_or(usize::MAX)
            .min(self.records.len() - 1);
        Ok(&self.records[clamped])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_table_order_preserved() {
        let table = WordTable::from_reader("zebra\napple\nmango\n".as_bytes()).unwrap();
        assert_eq!(table.word_at(0).unwrap(), "zebra");
        assert_eq!(table.word_at(1).unwrap(), "apple");
        assert_eq!(table.word_at(2).unwrap(), "mango");
    }

    #[test]
    fn test_word_table_skips_blank_lines() {
        let table = WordTable::from_reader("alpha\n\n  \nbeta\n".as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_word_table_out_of_range() {
        let table = WordTable::from_reader("only\n".as_bytes()).unwrap();
        let err = table.word_at(1).unwrap_err();
        assert!(matches!(
            err,
            LexiconError::IndexOutOfRange { index: 1, len: 1 }
        ));
    }

    #[test]
    fn test_domain_table_parses_records() {
        let data = "example.com\thttps://example.com/a\nrust-lang.org\thttps://rust-lang.org\n";
        let table = DomainTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.record_near(0).unwrap().host, "example.com");
        assert_eq!(table.record_near(1).unwrap().url, "https://rust-lang.org");
    }

    #[test]
    fn test_domain_table_clamps_large_index() {
        let data = "a.org\thttps://a.org\nb.org\thttps://b.org\n";
        let table = DomainTable::from_reader(data.as_bytes()).unwrap();
        let record = table.record_near(3_401_286_407).unwrap();
        assert_eq!(record.host, "b.org");
    }

    #[test]
    fn test_domain_table_rejects_malformed_line() {
        let err = DomainTable::from_reader("no-tab-here\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LexiconError::MalformedRecord { line: 1, .. }
        ));
    }

    #[test]
    fn test_empty_domain_table_is_an_error() {
        let table = DomainTable::from_reader("".as_bytes()).unwrap();
        assert!(matches!(
            table.record_near(0).unwrap_err(),
            LexiconError::EmptyTable
        ));
    }
}
