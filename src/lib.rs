//! # `undigraph` - Undirected Adjacency-List Graph
//!
//! A small, fixed-size undirected graph with edge mutation and two path
//! searches, depth-first and breadth-first.
//!
//! ## Model
//!
//! - Vertices are the ids `0..vertex_count`, fixed at construction.
//! - Each vertex owns an ordered neighbor list. New edges go to the front, so
//!   lists read most-recent-first and traversal order follows mutation history.
//! - Edges are symmetric: adding or removing `a`-`b` touches both lists.
//! - Duplicate edges are stored as duplicate entries.
//!
//! ## Errors
//!
//! Invalid construction and out-of-range ids fail with [`GraphError`] before
//! anything is modified. An unreachable search target is a regular
//! [`Reach::NotFound`] outcome.
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, mutations and search results emit
//! `tracing` events at `trace` and `debug` level.
//!
//! ## Example
//!
//! ```rust
//! use undigraph::{Reach, UndirectedGraph};
//!
//! let mut graph = UndirectedGraph::new(4);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//!
//! let outcome = graph.bfs(0, 2)?;
//! assert_eq!(outcome.trace, vec![0, 1, 2]);
//! assert_eq!(outcome.reach, Reach::Found { steps: 1 });
//!
//! assert_eq!(graph.dfs(0, 3)?.reach, Reach::NotFound);
//! # Ok::<(), undigraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    Algorithm, GraphSnapshot, Reach, SearchOutcome, UndirectedGraph, STANDARD_EDGES,
    STANDARD_VERTEX_COUNT,
};
