//! Plain text export.
//!
//! Writes the order as one line: every label followed by a single space.

use super::{Exporter, OrderReport};
use std::io::{self, Write};

/// Plain text exporter implementation.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export<W: Write>(&self, data: &OrderReport, writer: &mut W) -> io::Result<()> {
        for label in &data.order {
            write!(writer, "{} ", label)?;
        }
        writeln!(writer)
    }
}
