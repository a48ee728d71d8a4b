//! A fixed-size undirected adjacency-list graph.
//!
//! Every vertex owns an ordered list of neighbor ids. New edges are placed at
//! the front of both endpoint lists, so each list reads most-recent-first.
//! That order is what the searches in [`super::algorithms`] walk, which makes
//! traversal order a deterministic function of the mutation history.
//!
//! Duplicate edges are kept as duplicate entries; removing one instance
//! leaves the others in place.

use std::collections::vec_deque;
use std::collections::VecDeque;
use std::fmt;
use std::iter::Copied;

use serde::Serialize;

use crate::error::{GraphError, Result};

/// Vertex count of the demonstration graph.
pub const STANDARD_VERTEX_COUNT: usize = 5;

/// The demonstration edge set, applied in this order.
pub const STANDARD_EDGES: [(usize, usize); 7] =
    [(0, 1), (0, 4), (1, 2), (1, 3), (1, 4), (2, 3), (3, 4)];

/// Iterator over a vertex's neighbors in stored (most-recent-first) order.
pub type Neighbors<'a> = Copied<vec_deque::Iter<'a, usize>>;

/// An undirected graph over the vertices `0..vertex_count`.
///
/// The vertex count is fixed at construction. For every entry `b` in the
/// list of `a` there is a matching entry `a` in the list of `b`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) | Front insertion on both lists |
/// | `remove_edge` | \(O(\deg a + \deg b)\) | Scan and splice one entry per side |
/// | `degree` | \(O(1)\) | |
/// | `has_edge` | \(O(\deg a)\) | |
/// | `dfs` / `bfs` | \(O(n + m)\) | Each vertex is processed at most once |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph {
    adjacency: Vec<VecDeque<usize>>,
}

/// A serializable copy of a graph's adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Neighbor lists indexed by vertex id, in stored order.
    pub adjacency: Vec<Vec<usize>>,
}

impl UndirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Panics
    /// Panics if `vertex_count` is zero. Use [`try_new`](Self::try_new) to
    /// handle that case as an error.
    pub fn new(vertex_count: usize) -> Self {
        assert!(vertex_count > 0, "a graph needs at least one vertex");
        Self {
            adjacency: vec![VecDeque::new(); vertex_count],
        }
    }

    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidArgument`] if `vertex_count` is zero.
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidArgument { vertex_count });
        }
        Ok(Self::new(vertex_count))
    }

    /// Creates the 5-vertex demonstration graph with [`STANDARD_EDGES`] applied.
    pub fn with_standard_edges() -> Self {
        let mut graph = Self::new(STANDARD_VERTEX_COUNT);
        for (a, b) in STANDARD_EDGES {
            graph.link(a, b);
        }
        graph
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges, counting duplicates separately.
    pub fn edge_count(&self) -> usize {
        // A self-loop stores two entries in one list, so halving still counts it once.
        self.adjacency.iter().map(VecDeque::len).sum::<usize>() / 2
    }

    /// Fails with [`GraphError::OutOfRange`] unless `vertex` is a valid id.
    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Adds the undirected edge `a`-`b`.
    ///
    /// `b` is inserted at the front of `a`'s list and `a` at the front of
    /// `b`'s list. An existing `a`-`b` edge is not merged; the new entries
    /// sit alongside the old ones.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if either id is invalid. The graph
    /// is not modified in that case.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        self.link(a, b);
        trace_event!(a, b, "edge added");
        Ok(())
    }

    fn link(&mut self, a: usize, b: usize) {
        self.adjacency[a].push_front(b);
        self.adjacency[b].push_front(a);
    }

    /// Removes one instance of the undirected edge `a`-`b`.
    ///
    /// The first occurrence of `b` in `a`'s list and the first occurrence of
    /// `a` in `b`'s list are spliced out; remaining entries keep their
    /// relative order. Returns `false` if there was nothing to remove.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if either id is invalid. The graph
    /// is not modified in that case.
    pub fn remove_edge(&mut self, a: usize, b: usize) -> Result<bool> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        let removed_ab = unlink_first(&mut self.adjacency[a], b);
        let removed_ba = unlink_first(&mut self.adjacency[b], a);
        trace_event!(a, b, removed = removed_ab || removed_ba, "edge removal");
        Ok(removed_ab || removed_ba)
    }

    /// Applies [`STANDARD_EDGES`] in order.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if the graph has fewer than
    /// [`STANDARD_VERTEX_COUNT`] vertices. No edge is added in that case.
    pub fn add_standard_edges(&mut self) -> Result<()> {
        self.check_vertex(STANDARD_VERTEX_COUNT - 1)?;
        for (a, b) in STANDARD_EDGES {
            self.link(a, b);
        }
        debug_event!(edges = STANDARD_EDGES.len(), "standard edge set added");
        Ok(())
    }

    /// Returns the neighbors of `vertex` in stored order.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `vertex` is invalid.
    pub fn neighbors(&self, vertex: usize) -> Result<Neighbors<'_>> {
        self.check_vertex(vertex)?;
        Ok(self.neighbors_of(vertex))
    }

    /// Neighbor iteration for ids already validated by the caller.
    #[inline]
    pub(crate) fn neighbors_of(&self, vertex: usize) -> Neighbors<'_> {
        self.adjacency[vertex].iter().copied()
    }

    /// Returns the number of entries in `vertex`'s neighbor list.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if `vertex` is invalid.
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].len())
    }

    /// Checks whether at least one `a`-`b` edge exists.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] if either id is invalid.
    pub fn has_edge(&self, a: usize, b: usize) -> Result<bool> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        Ok(self.adjacency[a].contains(&b))
    }

    /// Enumerates every vertex in ascending id order with its neighbors.
    pub fn adjacency(&self) -> impl ExactSizeIterator<Item = (usize, Neighbors<'_>)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(vertex, list)| (vertex, list.iter().copied()))
    }

    /// Copies the adjacency lists into a serializable snapshot.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            vertex_count: self.vertex_count(),
            adjacency: self
                .adjacency
                .iter()
                .map(|list| list.iter().copied().collect())
                .collect(),
        }
    }
}

fn unlink_first(list: &mut VecDeque<usize>, id: usize) -> bool {
    match list.iter().position(|&v| v == id) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}

fn write_lists<'a, I, N>(f: &mut fmt::Formatter<'_>, lists: I) -> fmt::Result
where
    I: Iterator<Item = (usize, N)>,
    N: Iterator<Item = &'a usize>,
{
    for (vertex, neighbors) in lists {
        write!(f, "{vertex}: ")?;
        for n in neighbors {
            write!(f, "--{n} ")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

/// Renders one line per vertex: `"v: --n1 --n2 "`.
impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lists(f, self.adjacency.iter().map(VecDeque::iter).enumerate())
    }
}

/// Same layout as the graph it was taken from.
impl fmt::Display for GraphSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lists(f, self.adjacency.iter().map(|list| list.iter()).enumerate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(graph: &UndirectedGraph) -> Vec<Vec<usize>> {
        graph.snapshot().adjacency
    }

    #[test]
    fn construction() {
        let graph = UndirectedGraph::new(3);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(lists(&graph), vec![Vec::<usize>::new(); 3]);

        assert_eq!(
            UndirectedGraph::try_new(0),
            Err(GraphError::InvalidArgument { vertex_count: 0 })
        );
    }

    #[test]
    #[should_panic(expected = "at least one vertex")]
    fn new_rejects_empty_graph() {
        let _ = UndirectedGraph::new(0);
    }

    #[test]
    fn edges_are_prepended_on_both_sides() {
        let mut graph = UndirectedGraph::new(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(3, 0).unwrap();

        assert_eq!(graph.neighbors(0).unwrap().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(graph.neighbors(1).unwrap().collect::<Vec<_>>(), vec![0]);
        assert_eq!(graph.neighbors(3).unwrap().collect::<Vec<_>>(), vec![0]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.degree(0), Ok(3));
        assert_eq!(graph.has_edge(2, 0), Ok(true));
        assert_eq!(graph.has_edge(1, 2), Ok(false));
    }

    #[test]
    fn duplicate_edges_are_removed_one_at_a_time() {
        let mut graph = UndirectedGraph::new(2);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 1).unwrap();
        assert_eq!(lists(&graph), vec![vec![1, 1], vec![0, 0]]);

        assert_eq!(graph.remove_edge(1, 0), Ok(true));
        assert_eq!(lists(&graph), vec![vec![1], vec![0]]);
        assert_eq!(graph.remove_edge(0, 1), Ok(true));
        assert_eq!(lists(&graph), vec![Vec::<usize>::new(), Vec::new()]);
        assert_eq!(graph.remove_edge(0, 1), Ok(false));
    }

    #[test]
    fn removal_splices_first_match_and_keeps_order() {
        let mut graph = UndirectedGraph::new(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(0, 3).unwrap();
        assert_eq!(lists(&graph)[0], vec![3, 2, 1]);

        assert_eq!(graph.remove_edge(0, 2), Ok(true));
        assert_eq!(lists(&graph)[0], vec![3, 1]);
        assert!(lists(&graph)[2].is_empty());
    }

    #[test]
    fn self_loop_stores_two_entries() {
        let mut graph = UndirectedGraph::new(2);
        graph.add_edge(1, 1).unwrap();
        assert_eq!(lists(&graph)[1], vec![1, 1]);
        assert_eq!(graph.edge_count(), 1);

        assert_eq!(graph.remove_edge(1, 1), Ok(true));
        assert!(lists(&graph)[1].is_empty());
    }

    #[test]
    fn out_of_range_ids_leave_graph_untouched() {
        let mut graph = UndirectedGraph::new(3);
        graph.add_edge(0, 1).unwrap();
        let before = graph.clone();

        let err = GraphError::OutOfRange { vertex: 3, vertex_count: 3 };
        assert_eq!(graph.add_edge(0, 3), Err(err));
        assert_eq!(graph.add_edge(3, 0), Err(err));
        assert_eq!(graph.remove_edge(1, 3), Err(err));
        assert_eq!(graph.degree(3), Err(err));
        assert_eq!(graph.has_edge(3, 0), Err(err));
        assert!(graph.neighbors(3).is_err());
        assert_eq!(graph, before);
    }

    #[test]
    fn standard_edges_produce_known_lists() {
        let graph = UndirectedGraph::with_standard_edges();
        assert_eq!(
            lists(&graph),
            vec![
                vec![4, 1],
                vec![4, 3, 2, 0],
                vec![3, 1],
                vec![4, 2, 1],
                vec![3, 1, 0],
            ]
        );
        assert_eq!(graph.edge_count(), STANDARD_EDGES.len());

        let mut applied = UndirectedGraph::new(STANDARD_VERTEX_COUNT);
        applied.add_standard_edges().unwrap();
        assert_eq!(applied, graph);
    }

    #[test]
    fn standard_edges_need_five_vertices() {
        let mut graph = UndirectedGraph::new(4);
        assert_eq!(
            graph.add_standard_edges(),
            Err(GraphError::OutOfRange { vertex: 4, vertex_count: 4 })
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn display_lists_neighbors_in_stored_order() {
        let mut graph = UndirectedGraph::new(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();

        let rendered = graph.to_string();
        assert_eq!(rendered, "0: --2 --1 \n1: --0 \n2: --0 \n");
        assert_eq!(graph.to_string(), rendered);
        assert_eq!(graph.snapshot().to_string(), rendered);
    }
}
