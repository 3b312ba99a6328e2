//! Integration tests over the sample sources in `data/`.

use std::path::PathBuf;

use depsort::graph::{DependencyGraph, GraphError};
use depsort::session::{Session, BUILT_SUCCESS};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn session(name: &str) -> Session {
    let mut session = Session::new();
    assert_eq!(session.build(data(name)).unwrap(), BUILT_SUCCESS);
    session
}

#[test]
fn test_load_missing_source() {
    let mut session = Session::new();
    let err = session.build(data("filenotfound")).unwrap_err();
    assert!(matches!(err, GraphError::SourceUnavailable { .. }));
    assert!(session.graph().is_empty());
}

#[test]
fn test_load_test1_adjacency() {
    let session = session("test1.txt");
    let expected: Vec<Vec<usize>> = vec![vec![1], vec![4], vec![3], vec![], vec![], vec![6], vec![]];
    assert_eq!(session.graph().adjacency().to_vec(), expected);
}

#[test]
fn test_load_test2_adjacency() {
    let session = session("test2.txt");
    let expected: Vec<Vec<usize>> = vec![vec![1, 2], vec![4], vec![3], vec![5], vec![], vec![]];
    assert_eq!(session.graph().adjacency().to_vec(), expected);
}

#[test]
fn test_order_test1() {
    assert_eq!(session("test1.txt").order("ClassA").unwrap(), "ClassA ClassB ClassG ");
}

#[test]
fn test_order_test2() {
    assert_eq!(
        session("test2.txt").order("ClassA").unwrap(),
        "ClassA ClassE ClassC ClassH ClassB ClassG "
    );
}

#[test]
fn test_order_test3_cycle() {
    let err = session("test3.txt").order("ClassA").unwrap_err();
    assert!(matches!(err, GraphError::CycleDetected { .. }));
}

#[test]
fn test_order_test3_unaffected_branch() {
    assert_eq!(session("test3.txt").order("ClassC").unwrap(), "ClassC ClassH ");
}

#[test]
fn test_order_invalid_class() {
    let err = session("test3.txt").order("InvalidClassName").unwrap_err();
    assert!(matches!(err, GraphError::InvalidLabel { .. }));
}

#[test]
fn test_order_not_built() {
    let err = Session::new().order("ClassA").unwrap_err();
    assert!(matches!(err, GraphError::GraphNotBuilt));
}

#[test]
fn test_graph_load_matches_session() {
    let mut graph: DependencyGraph = DependencyGraph::new();
    graph.load(&data("test2.txt")).unwrap();
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.adjacency(), session("test2.txt").graph().adjacency());
}

#[test]
fn test_cycles_in_test3() {
    let session = session("test3.txt");
    let cycles = session.graph().detect_cycles();
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].cycle_path(), "ClassA -> ClassB -> ClassE -> ClassA");
}
