//! Parser module for dependency sources.
//!
//! A dependency source is line-oriented text where every line lists a
//! class followed by the classes that depend on it:
//!
//! ```text
//! ClassA ClassB
//! ClassE ClassC
//! ClassB ClassG
//! ```
//!
//! # Example
//!
//! ```
//! use depsort::parser::parse_str;
//!
//! let records = parse_str("ClassA ClassB\nClassB ClassG\n");
//! assert_eq!(records[0].source, "ClassA");
//! assert_eq!(records[0].targets, vec!["ClassB"]);
//! ```

pub mod records;

pub use records::{parse_file, parse_reader, parse_str, ParseError, ParseResult, Record};
