//! Error types for graph construction and vertex addressing.

/// Errors raised at the graph API boundary.
///
/// A call that returns an error leaves the graph exactly as it was.
/// An unreachable search target is not an error; it is reported through
/// [`Reach::NotFound`](crate::graph::Reach::NotFound).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A graph was requested with no vertices.
    #[error("a graph needs at least one vertex, got {vertex_count}")]
    InvalidArgument {
        /// The rejected vertex count.
        vertex_count: usize,
    },

    /// A vertex id outside `[0, vertex_count)` was supplied.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;
