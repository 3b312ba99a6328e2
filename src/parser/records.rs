//! Parser for whitespace-delimited dependency records.
//!
//! Each non-blank line of a source is one record: the first token names the
//! class whose dependents follow, left to right.
//!
//! ```text
//! ClassA ClassB ClassE
//! ClassE ClassC
//! ```

use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Errors that can occur while reading a dependency source.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the source (missing file, permissions, invalid UTF-8).
    #[error("Failed to read source: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// One line of a dependency source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// First token on the line; the edge source.
    pub source: String,
    /// Remaining tokens in file order; the direct dependents of `source`.
    pub targets: Vec<String>,
}

impl Record {
    /// Creates a record from a source label and its targets.
    pub fn new<S, I, T>(source: S, targets: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            source: source.into(),
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a single line. Returns `None` for blank lines.
    ///
    /// # Example
    ///
    /// ```
    /// use depsort::parser::Record;
    ///
    /// let record = Record::parse_line("ClassA ClassB  ClassE\r").unwrap();
    /// assert_eq!(record.source, "ClassA");
    /// assert_eq!(record.targets, vec!["ClassB", "ClassE"]);
    ///
    /// assert!(Record::parse_line("   ").is_none());
    /// ```
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let source = tokens.next()?;
        Some(Self::new(source, tokens))
    }

    /// Iterates every label on the line, source first.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.source.as_str()).chain(self.targets.iter().map(String::as_str))
    }
}

/// Parses dependency records from a string.
///
/// # Example
///
/// ```
/// use depsort::parser::parse_str;
///
/// let records = parse_str("ClassA ClassB\n\nClassB ClassG\n");
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].source, "ClassB");
/// ```
pub fn parse_str(content: &str) -> Vec<Record> {
    content.lines().filter_map(Record::parse_line).collect()
}

/// Parses dependency records from a file path.
///
/// The whole file is read before any record is produced, so a failure
/// never yields a partial result.
pub fn parse_file(path: &Path) -> ParseResult<Vec<Record>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_str(&content))
}

/// Parses dependency records from a buffered reader such as stdin.
pub fn parse_reader<R: BufRead>(reader: R) -> ParseResult<Vec<Record>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        if let Some(record) = Record::parse_line(&line?) {
            records.push(record);
        }
    }
    Ok(records)
}
