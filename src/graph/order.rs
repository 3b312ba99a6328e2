//! Traversal results and traversal options.

use std::fmt;
use std::str::FromStr;

/// Controls which revisits abort a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalMode {
    /// Any edge into an already visited vertex fails with a cycle, even
    /// when that vertex was finished by an earlier sibling branch.
    #[default]
    Strict,
    /// Only edges back into a vertex still on the traversal stack fail.
    /// Finished vertices are skipped, so shared dependencies are allowed.
    BackEdgesOnly,
}

impl FromStr for TraversalMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(TraversalMode::Strict),
            "back-edges" | "backedges" => Ok(TraversalMode::BackEdgesOnly),
            _ => Err(format!(
                "Unknown traversal mode: '{}'. Valid modes: strict, back-edges",
                s
            )),
        }
    }
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalMode::Strict => write!(f, "strict"),
            TraversalMode::BackEdgesOnly => write!(f, "back-edges"),
        }
    }
}

/// A topological order of the vertices reachable from a start label.
///
/// Labels are stored in pop order: the start label comes first and every
/// vertex precedes the vertices it points to.
///
/// # Example
///
/// ```
/// use depsort::graph::DependencyGraph;
///
/// let mut graph: DependencyGraph = DependencyGraph::new();
/// let a = graph.add_vertex("ClassA".to_string());
/// let b = graph.add_vertex("ClassB".to_string());
/// graph.add_edge(a, b).unwrap();
///
/// let order = graph.topological_order_from("ClassA").unwrap();
/// assert_eq!(order.to_string(), "ClassA ClassB ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder<L> {
    labels: Vec<L>,
}

impl<L> TopologicalOrder<L> {
    pub(crate) fn new(labels: Vec<L>) -> Self {
        Self { labels }
    }

    /// The label the traversal started from.
    pub fn start(&self) -> Option<&L> {
        self.labels.first()
    }

    /// Labels in order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, L> {
        self.labels.iter()
    }

    pub fn into_vec(self) -> Vec<L> {
        self.labels
    }
}

impl<'a, L> IntoIterator for &'a TopologicalOrder<L> {
    type Item = &'a L;
    type IntoIter = std::slice::Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

/// Space-separated labels, each followed by a single space.
impl<L: fmt::Display> fmt::Display for TopologicalOrder<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.labels {
            write!(f, "{} ", label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_trailing_space() {
        let order = TopologicalOrder::new(vec!["ClassA", "ClassB", "ClassG"]);
        assert_eq!(order.to_string(), "ClassA ClassB ClassG ");
    }

    #[test]
    fn test_display_empty() {
        let order: TopologicalOrder<&str> = TopologicalOrder::new(Vec::new());
        assert_eq!(order.to_string(), "");
        assert!(order.start().is_none());
    }

    #[test]
    fn test_accessors() {
        let order = TopologicalOrder::new(vec![3, 1, 2]);
        assert_eq!(order.start(), Some(&3));
        assert_eq!(order.len(), 3);
        assert_eq!(order.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(order.into_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn test_traversal_mode_from_str() {
        assert_eq!("strict".parse::<TraversalMode>().unwrap(), TraversalMode::Strict);
        assert_eq!(
            "Back-Edges".parse::<TraversalMode>().unwrap(),
            TraversalMode::BackEdgesOnly
        );
        assert!("loose".parse::<TraversalMode>().is_err());
    }

    #[test]
    fn test_traversal_mode_default_and_display() {
        assert_eq!(TraversalMode::default(), TraversalMode::Strict);
        assert_eq!(TraversalMode::BackEdgesOnly.to_string(), "back-edges");
    }
}
