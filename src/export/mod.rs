//! Export functionality for topological order results.
//!
//! This module provides exporters that write an order either as the plain
//! space-terminated line or as JSON.

pub mod json;
pub mod text;

use crate::graph::{DependencyGraph, TopologicalOrder};
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Plain text - the order line exactly as a front end displays it
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Data container for export operations.
#[derive(Debug, Clone)]
pub struct OrderReport {
    /// Where the graph was loaded from
    pub source: String,
    /// The class the traversal started at
    pub start: String,
    /// Labels in topological order
    pub order: Vec<String>,
    /// Number of vertices in the whole graph
    pub vertex_count: usize,
}

impl OrderReport {
    /// Create a report from a computed order.
    pub fn new(
        source: impl Into<String>,
        start: impl Into<String>,
        order: TopologicalOrder<String>,
        graph: &DependencyGraph<String>,
    ) -> Self {
        Self {
            source: source.into(),
            start: start.into(),
            order: order.into_vec(),
            vertex_count: graph.vertex_count(),
        }
    }

    /// Number of vertices reached from the start class
    pub fn visited(&self) -> usize {
        self.order.len()
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &OrderReport, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &OrderReport,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Text => text::TextExporter.export(data, writer),
        ExportFormat::Json => json::JsonExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &OrderReport) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
