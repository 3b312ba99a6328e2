//! depsort - class dependency graph with recompilation order
//!
//! This crate loads whitespace-delimited dependency records into a
//! directed graph and computes, for a chosen class, the order in which it
//! and everything depending on it must be recompiled.

pub mod export;
pub mod graph;
pub mod parser;
pub mod session;
