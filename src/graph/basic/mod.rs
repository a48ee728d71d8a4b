//! The adjacency-list graph and its searches.

pub mod adjacency_graph;
pub mod algorithms;

pub use adjacency_graph::{
    GraphSnapshot, Neighbors, UndirectedGraph, STANDARD_EDGES, STANDARD_VERTEX_COUNT,
};
pub use algorithms::{Algorithm, Reach, SearchOutcome};
