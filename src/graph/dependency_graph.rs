//! Dependency graph stored as an adjacency list over dense vertex ids.
//!
//! Labels get ids in the order they are first seen. Each id owns one
//! adjacency slot listing its successors in insertion order. The slot order
//! decides the traversal order, so it also decides the exact output of
//! [`DependencyGraph::topological_order_from`].

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::io::BufRead;
use std::path::Path;

use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use super::error::{GraphError, GraphResult};
use super::order::{TopologicalOrder, TraversalMode};
use crate::parser::{self, ParseError, Record};

/// Dense integer identity of a vertex, assigned from 0 in first-seen order.
pub type VertexId = usize;

/// Per-vertex state during one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InStack,
    Done,
}

/// A cycle found by [`DependencyGraph::detect_cycles`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleInfo<L> {
    /// Labels of the strongly connected component, in vertex id order
    pub labels: Vec<L>,
    /// A closed path through the component that starts at its smallest id.
    /// Every consecutive pair is an edge, and the last label has an edge
    /// back to the first.
    pub path: Vec<L>,
}

impl<L: fmt::Display> CycleInfo<L> {
    /// Renders the closed path as `a -> b -> a`.
    pub fn cycle_path(&self) -> String {
        let mut parts: Vec<String> = self.path.iter().map(ToString::to_string).collect();
        if let Some(first) = parts.first().cloned() {
            parts.push(first);
        }
        parts.join(" -> ")
    }
}

/// A directed graph of labelled vertices.
///
/// An edge `u -> v` means `v` depends on `u`, so `u` has to be processed
/// before `v`.
///
/// # Example
///
/// ```rust
/// use depsort::graph::DependencyGraph;
/// use depsort::parser::parse_str;
///
/// let mut graph: DependencyGraph = DependencyGraph::new();
/// graph.load_records(&parse_str("ClassA ClassB ClassE\nClassE ClassC\nClassB ClassG\nClassC ClassH"));
///
/// assert_eq!(graph.vertex_count(), 6);
/// let order = graph.topological_order_from("ClassA").unwrap();
/// assert_eq!(order.to_string(), "ClassA ClassE ClassC ClassH ClassB ClassG ");
/// ```
#[derive(Debug, Clone)]
pub struct DependencyGraph<L = String> {
    /// Label to id
    indices: HashMap<L, VertexId>,
    /// Id to label
    labels: Vec<L>,
    /// Successor lists indexed by id
    adjacency: Vec<Vec<VertexId>>,
}

impl<L> Default for DependencyGraph<L> {
    fn default() -> Self {
        Self {
            indices: HashMap::new(),
            labels: Vec::new(),
            adjacency: Vec::new(),
        }
    }
}

impl<L: Eq + Hash + Clone> DependencyGraph<L> {
    /// Creates a new empty graph.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depsort::graph::DependencyGraph;
    ///
    /// let graph: DependencyGraph = DependencyGraph::new();
    /// assert_eq!(graph.vertex_count(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with room for `vertices` labels.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            indices: HashMap::with_capacity(vertices),
            labels: Vec::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
        }
    }

    /// Assigns the next id to `label` without touching the adjacency list.
    fn intern(&mut self, label: L) -> VertexId {
        if let Some(&id) = self.indices.get(&label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.clone());
        self.indices.insert(label, id);
        id
    }

    /// Adds a vertex with an empty successor list.
    ///
    /// Adding a label that already exists changes nothing and returns its
    /// existing id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depsort::graph::DependencyGraph;
    ///
    /// let mut graph = DependencyGraph::new();
    /// assert_eq!(graph.add_vertex("ClassA"), 0);
    /// assert_eq!(graph.add_vertex("ClassB"), 1);
    /// assert_eq!(graph.add_vertex("ClassA"), 0);
    /// assert_eq!(graph.vertex_count(), 2);
    /// ```
    pub fn add_vertex(&mut self, label: L) -> VertexId {
        let id = self.intern(label);
        if id == self.adjacency.len() {
            self.adjacency.push(Vec::new());
        }
        id
    }

    /// Appends `v` to the successor list of `u`.
    ///
    /// Duplicate edges are kept. Fails with [`GraphError::InvalidVertex`]
    /// if either id is out of range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depsort::graph::{DependencyGraph, GraphError};
    ///
    /// let mut graph = DependencyGraph::new();
    /// let a = graph.add_vertex("ClassA");
    /// let b = graph.add_vertex("ClassB");
    ///
    /// graph.add_edge(a, b).unwrap();
    /// assert!(matches!(graph.add_edge(a, 7), Err(GraphError::InvalidVertex { id: 7, .. })));
    /// assert_eq!(graph.successors(a), Some(&[b][..]));
    /// ```
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        let count = self.vertex_count();
        if v >= count {
            return Err(GraphError::InvalidVertex { id: v, count });
        }
        let successors = self
            .adjacency
            .get_mut(u)
            .ok_or(GraphError::InvalidVertex { id: u, count })?;
        successors.push(v);
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns true if no vertex has been loaded or added.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns true if `label` has an id.
    pub fn contains<Q>(&self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.indices.contains_key(label)
    }

    /// Looks up the id of a label.
    pub fn vertex_id<Q>(&self, label: &Q) -> Option<VertexId>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.indices.get(label).copied()
    }

    /// Looks up the label of an id.
    pub fn label(&self, id: VertexId) -> Option<&L> {
        self.labels.get(id)
    }

    /// All labels, indexed by id.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Successors of `id` in insertion order.
    pub fn successors(&self, id: VertexId) -> Option<&[VertexId]> {
        self.adjacency.get(id).map(Vec::as_slice)
    }

    /// The full adjacency list, one slot per vertex.
    pub fn adjacency(&self) -> &[Vec<VertexId>] {
        &self.adjacency
    }

    /// Builds a petgraph view where node weights are vertex ids.
    fn to_petgraph(&self) -> DiGraph<VertexId, ()> {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edge_count());
        let nodes: Vec<NodeIndex> = (0..self.vertex_count())
            .map(|id| graph.add_node(id))
            .collect();
        for (u, successors) in self.adjacency.iter().enumerate() {
            for &v in successors {
                graph.add_edge(nodes[u], nodes[v], ());
            }
        }
        graph
    }

    /// Shortest closed walk from the first id of `members` back to itself,
    /// using only edges inside `members`. `members` must be a strongly
    /// connected component sorted by id.
    fn closed_path(&self, members: &[VertexId]) -> Vec<VertexId> {
        let Some(&start) = members.first() else {
            return Vec::new();
        };
        let inside: HashSet<VertexId> = members.iter().copied().collect();
        let mut parents: HashMap<VertexId, VertexId> = HashMap::new();
        let mut queue = VecDeque::from([start]);

        while let Some(vertex) = queue.pop_front() {
            for &successor in &self.adjacency[vertex] {
                if successor == start {
                    let mut path = vec![vertex];
                    let mut current = vertex;
                    while let Some(&parent) = parents.get(&current) {
                        path.push(parent);
                        current = parent;
                    }
                    path.reverse();
                    return path;
                }
                if inside.contains(&successor) && !parents.contains_key(&successor) {
                    parents.insert(successor, vertex);
                    queue.push_back(successor);
                }
            }
        }

        vec![start]
    }

    /// Checks if the graph contains a true cycle anywhere.
    ///
    /// Unlike a strict traversal this ignores shared dependencies; only a
    /// path leading back to its own start counts.
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.to_petgraph())
    }

    /// Detects and returns every cycle in the graph.
    ///
    /// A strongly connected component is a cycle if it has more than one
    /// vertex, or if its single vertex has a self-loop.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depsort::graph::DependencyGraph;
    /// use depsort::parser::parse_str;
    ///
    /// let mut graph: DependencyGraph = DependencyGraph::new();
    /// graph.load_records(&parse_str("A B\nE A\nB E\nC H"));
    ///
    /// let cycles = graph.detect_cycles();
    /// assert_eq!(cycles.len(), 1);
    /// assert_eq!(cycles[0].cycle_path(), "A -> B -> E -> A");
    /// ```
    pub fn detect_cycles(&self) -> Vec<CycleInfo<L>> {
        let graph = self.to_petgraph();
        let mut cycles: Vec<Vec<VertexId>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let mut ids: Vec<VertexId> = scc.iter().map(|&idx| graph[idx]).collect();
                ids.sort_unstable();
                ids
            })
            .collect();
        cycles.sort();

        cycles
            .into_iter()
            .map(|ids| {
                let path = self.closed_path(&ids);
                CycleInfo {
                    labels: ids.iter().map(|&id| self.labels[id].clone()).collect(),
                    path: path.into_iter().map(|id| self.labels[id].clone()).collect(),
                }
            })
            .collect()
    }
}

impl<L> DependencyGraph<L>
where
    L: Eq + Hash + Clone + for<'a> From<&'a str>,
{
    /// Applies parsed records to the graph.
    ///
    /// Every token gets an id in first-seen order across all records. After
    /// all records are interned, each record's targets replace the slot of
    /// its source vertex. A source defined on several lines keeps only the
    /// last line, and a label that only appears as a target keeps an empty
    /// slot.
    ///
    /// Loading onto a non-empty graph extends it: known labels keep their
    /// ids and new labels continue from the current vertex count.
    pub fn load_records(&mut self, records: &[Record]) {
        let known = self.vertex_count();
        let lines: Vec<Vec<VertexId>> = records
            .iter()
            .map(|record| {
                record
                    .tokens()
                    .map(|token| self.intern(L::from(token)))
                    .collect()
            })
            .collect();

        self.adjacency.resize_with(self.labels.len(), Vec::new);
        for ids in lines {
            if let Some((&source, targets)) = ids.split_first() {
                self.adjacency[source] = targets.to_vec();
            }
        }

        debug!(
            lines = records.len(),
            new_vertices = self.vertex_count() - known,
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            "loaded dependency records"
        );
    }

    /// Reads a dependency source from a file and loads it.
    ///
    /// The file is read completely before the graph is touched, so a
    /// failure leaves the graph as it was.
    pub fn load(&mut self, path: &Path) -> GraphResult<()> {
        let records = parser::parse_file(path)
            .map_err(|err| unavailable(path.display().to_string(), err))?;
        self.load_records(&records);
        Ok(())
    }

    /// Reads a dependency source from a reader and loads it.
    ///
    /// `name` identifies the source in error messages.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, name: &str) -> GraphResult<()> {
        let records = parser::parse_reader(reader).map_err(|err| unavailable(name, err))?;
        self.load_records(&records);
        Ok(())
    }
}

fn unavailable(name: impl Into<String>, err: ParseError) -> GraphError {
    match err {
        ParseError::Io(source) => GraphError::source_unavailable(name, source),
    }
}

impl<L> DependencyGraph<L>
where
    L: Eq + Hash + Clone + fmt::Display,
{
    /// Topological order of everything reachable from `label`, using
    /// [`TraversalMode::Strict`].
    ///
    /// # Errors
    ///
    /// - [`GraphError::GraphNotBuilt`] if the graph has no vertices
    /// - [`GraphError::InvalidLabel`] if `label` is unknown
    /// - [`GraphError::CycleDetected`] if the traversal reaches any vertex
    ///   twice, which includes shared dependencies finished by an earlier
    ///   branch
    pub fn topological_order_from<Q>(&self, label: &Q) -> GraphResult<TopologicalOrder<L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        self.topological_order_with(label, TraversalMode::Strict)
    }

    /// Topological order of everything reachable from `label`.
    ///
    /// Runs a depth-first traversal with an explicit frame stack. A vertex
    /// is recorded after all of its successors are finished; the recorded
    /// sequence reversed is the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use depsort::graph::{DependencyGraph, GraphError, TraversalMode};
    /// use depsort::parser::parse_str;
    ///
    /// // ClassD is shared by ClassB and ClassC.
    /// let mut graph: DependencyGraph = DependencyGraph::new();
    /// graph.load_records(&parse_str("ClassA ClassB ClassC\nClassB ClassD\nClassC ClassD"));
    ///
    /// let strict = graph.topological_order_with("ClassA", TraversalMode::Strict);
    /// assert!(matches!(strict, Err(GraphError::CycleDetected { .. })));
    ///
    /// let relaxed = graph.topological_order_with("ClassA", TraversalMode::BackEdgesOnly).unwrap();
    /// assert_eq!(relaxed.to_string(), "ClassA ClassC ClassB ClassD ");
    /// ```
    pub fn topological_order_with<Q>(
        &self,
        label: &Q,
        mode: TraversalMode,
    ) -> GraphResult<TopologicalOrder<L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        if self.is_empty() {
            return Err(GraphError::GraphNotBuilt);
        }
        let start = self
            .vertex_id(label)
            .ok_or_else(|| GraphError::invalid_label(label.to_string()))?;

        let mut marks = vec![Mark::Unvisited; self.vertex_count()];
        let mut finished = Vec::new();
        // (vertex, index of the next successor to visit)
        let mut frames: Vec<(VertexId, usize)> = vec![(start, 0)];
        marks[start] = Mark::InStack;

        while let Some(frame) = frames.last_mut() {
            let (vertex, next) = *frame;
            match self.adjacency[vertex].get(next) {
                Some(&successor) => {
                    frame.1 += 1;
                    match (marks[successor], mode) {
                        (Mark::Unvisited, _) => {
                            marks[successor] = Mark::InStack;
                            frames.push((successor, 0));
                        }
                        (Mark::Done, TraversalMode::BackEdgesOnly) => {}
                        _ => {
                            let revisited = &self.labels[successor];
                            debug!(start = %label, vertex = successor, label = %revisited, %mode, "cycle detected");
                            return Err(GraphError::cycle(successor, revisited.to_string()));
                        }
                    }
                }
                None => {
                    frames.pop();
                    marks[vertex] = Mark::Done;
                    finished.push(vertex);
                }
            }
        }

        debug!(start = %label, visited = finished.len(), %mode, "computed topological order");
        let labels = finished
            .into_iter()
            .rev()
            .map(|id| self.labels[id].clone())
            .collect();
        Ok(TopologicalOrder::new(labels))
    }
}
