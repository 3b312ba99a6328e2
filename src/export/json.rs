//! JSON export implementation.
//!
//! Exports an order result in JSON format for machine-readable output.

use super::{Exporter, OrderReport};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    source: &'a str,
    start: &'a str,
    summary: JsonSummary,
    order: &'a [String],
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    vertex_count: usize,
    visited: usize,
    unreached: usize,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &OrderReport, writer: &mut W) -> io::Result<()> {
        let export = JsonExport {
            source: &data.source,
            start: &data.start,
            summary: JsonSummary {
                vertex_count: data.vertex_count,
                visited: data.visited(),
                unreached: data.vertex_count.saturating_sub(data.visited()),
            },
            order: &data.order,
        };

        serde_json::to_writer_pretty(&mut *writer, &export)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_data() -> OrderReport {
        OrderReport {
            source: "data/test2.txt".to_string(),
            start: "ClassA".to_string(),
            order: ["ClassA", "ClassE", "ClassC", "ClassH", "ClassB", "ClassG"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            vertex_count: 6,
        }
    }

    fn export_value(data: &OrderReport) -> serde_json::Value {
        let mut output = Vec::new();
        JsonExporter.export(data, &mut output).unwrap();
        let json_str = String::from_utf8(output).unwrap();
        serde_json::from_str(&json_str).unwrap()
    }

    #[test]
    fn test_json_export_structure() {
        let parsed = export_value(&create_test_data());

        assert_eq!(parsed["source"], "data/test2.txt");
        assert_eq!(parsed["start"], "ClassA");
        assert!(parsed["summary"].is_object());
        assert!(parsed["order"].is_array());
    }

    #[test]
    fn test_json_export_order_list() {
        let parsed = export_value(&create_test_data());

        let order = parsed["order"].as_array().unwrap();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], "ClassA");
        assert_eq!(order[5], "ClassG");
    }

    #[test]
    fn test_json_export_summary() {
        let mut data = create_test_data();
        data.vertex_count = 9;
        let parsed = export_value(&data);

        assert_eq!(parsed["summary"]["vertex_count"], 9);
        assert_eq!(parsed["summary"]["visited"], 6);
        assert_eq!(parsed["summary"]["unreached"], 3);
    }

    #[test]
    fn test_json_ends_with_newline() {
        let mut output = Vec::new();
        JsonExporter.export(&create_test_data(), &mut output).unwrap();
        assert_eq!(output.last(), Some(&b'\n'));
    }
}
