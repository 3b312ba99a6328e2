//! The two operations a front end needs: build a graph from a source, then
//! ask for the recompilation order of a class.
//!
//! Every failure comes back as a [`GraphError`] whose `Display` text is
//! ready to show to the user.

use std::io::BufRead;
use std::path::Path;

use tracing::info;

use crate::graph::{DependencyGraph, GraphResult, TopologicalOrder, TraversalMode};

/// Message returned by a successful [`Session::build`].
pub const BUILT_SUCCESS: &str = "Graph Built Successfully";

/// Owns one dependency graph on behalf of a front end.
///
/// # Example
///
/// ```no_run
/// use depsort::session::{Session, BUILT_SUCCESS};
///
/// let mut session = Session::new();
/// assert_eq!(session.build("data/test1.txt").unwrap(), BUILT_SUCCESS);
/// assert_eq!(session.order("ClassA").unwrap(), "ClassA ClassB ClassG ");
/// ```
#[derive(Debug, Default)]
pub struct Session {
    graph: DependencyGraph<String>,
}

impl Session {
    /// Creates a session with an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the dependency source at `path` into the graph.
    pub fn build(&mut self, path: impl AsRef<Path>) -> GraphResult<&'static str> {
        let path = path.as_ref();
        self.graph.load(path)?;
        info!(
            source = %path.display(),
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "graph built"
        );
        Ok(BUILT_SUCCESS)
    }

    /// Loads a dependency source from a reader. `name` is used in errors.
    pub fn build_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        name: &str,
    ) -> GraphResult<&'static str> {
        self.graph.load_reader(reader, name)?;
        info!(
            source = name,
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "graph built"
        );
        Ok(BUILT_SUCCESS)
    }

    /// Recompilation order starting at `label`, formatted as
    /// space-terminated labels.
    pub fn order(&self, label: &str) -> GraphResult<String> {
        self.order_with(label, TraversalMode::Strict)
            .map(|order| order.to_string())
    }

    /// Recompilation order starting at `label` under the given mode.
    pub fn order_with(
        &self,
        label: &str,
        mode: TraversalMode,
    ) -> GraphResult<TopologicalOrder<String>> {
        self.graph.topological_order_with(label, mode)
    }

    /// The graph built so far.
    pub fn graph(&self) -> &DependencyGraph<String> {
        &self.graph
    }
}
