//! Graph storage and traversal.
//!
//! - [`UndirectedGraph`]: fixed vertex count, per-vertex neighbor lists in
//!   most-recent-first order, symmetric edge insertion and removal.
//! - [`UndirectedGraph::dfs`] / [`UndirectedGraph::bfs`]: path search returning
//!   a [`SearchOutcome`] with the visitation trace.
//!
//! Traversal scratch state lives in the crate-private `access` module.

pub(crate) mod access;
pub mod basic;

pub use basic::{
    Algorithm, GraphSnapshot, Neighbors, Reach, SearchOutcome, UndirectedGraph, STANDARD_EDGES,
    STANDARD_VERTEX_COUNT,
};
