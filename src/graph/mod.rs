//! Graph module for class dependency modeling.
//!
//! This module provides the [`DependencyGraph`] struct: a label to id map
//! plus an adjacency list, with a depth-first topological order from any
//! start label.
//!
//! # Example
//!
//! ```rust
//! use depsort::graph::{DependencyGraph, GraphError};
//! use depsort::parser::parse_str;
//!
//! let mut graph: DependencyGraph = DependencyGraph::new();
//! graph.load_records(&parse_str("ClassA ClassB\nClassE ClassC\nClassB ClassG\nClassF ClassH"));
//!
//! assert_eq!(graph.vertex_count(), 7);
//! assert_eq!(graph.topological_order_from("ClassA").unwrap().to_string(), "ClassA ClassB ClassG ");
//! assert!(matches!(
//!     graph.topological_order_from("ClassZ"),
//!     Err(GraphError::InvalidLabel { .. })
//! ));
//! ```

mod dependency_graph;
mod error;
mod order;

pub use dependency_graph::{CycleInfo, DependencyGraph, VertexId};
pub use error::{GraphError, GraphResult};
pub use order::{TopologicalOrder, TraversalMode};
