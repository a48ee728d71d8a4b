//! Depth-first and breadth-first path search over [`UndirectedGraph`].
//!
//! Both searches walk neighbor lists in stored order and return a
//! [`SearchOutcome`] carrying the visitation trace. Failing to reach the
//! target is a normal outcome, not an error.
//!
//! The two algorithms count steps differently:
//! - DFS counts vertices visited before the target (edge transitions along
//!   the walk, including backtracked branches).
//! - BFS counts vertices *discovered* before the target is dequeued, minus
//!   one. This is a coarse measure of search effort, not the shortest-path
//!   distance to the target.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::graph::access::visited::VisitedSet;
use crate::graph::basic::adjacency_graph::UndirectedGraph;

/// Which search produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Depth-first search.
    Dfs,
    /// Breadth-first search.
    Bfs,
}

/// Whether the target was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Reach {
    /// The target was reached; `steps` follows the per-algorithm rule above.
    Found {
        /// Step count at the moment the target was reached.
        steps: usize,
    },
    /// Every vertex reachable from the start was processed without meeting the target.
    NotFound,
}

/// The result of a single DFS or BFS call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Algorithm that produced this outcome.
    pub algorithm: Algorithm,
    /// Start vertex.
    pub start: usize,
    /// Target vertex.
    pub target: usize,
    /// Vertices in the order they were visited. Never contains duplicates.
    pub trace: Vec<usize>,
    /// Whether the target was reached.
    pub reach: Reach,
}

impl SearchOutcome {
    /// Returns `true` if the target was reached.
    pub fn is_found(&self) -> bool {
        matches!(self.reach, Reach::Found { .. })
    }

    /// Returns the step count if the target was reached.
    pub fn steps(&self) -> Option<usize> {
        match self.reach {
            Reach::Found { steps } => Some(steps),
            Reach::NotFound => None,
        }
    }
}

/// Renders the trace on one line followed by the result message.
impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.trace.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{vertex}")?;
        }
        writeln!(f)?;
        match (self.reach, self.algorithm) {
            (Reach::Found { steps }, _) => write!(
                f,
                "Reached the destination vertex {} in {steps} steps.",
                self.target
            ),
            (Reach::NotFound, Algorithm::Dfs) => {
                write!(f, "Vertex {} is not reachable.", self.target)
            }
            (Reach::NotFound, Algorithm::Bfs) => {
                write!(f, "The destination vertex {} is not reachable.", self.target)
            }
        }
    }
}

/// Recursive walk state for one DFS call.
struct DepthFirst<'g> {
    graph: &'g UndirectedGraph,
    target: usize,
    visited: VisitedSet,
    trace: Vec<usize>,
}

impl DepthFirst<'_> {
    fn descend(&mut self, vertex: usize) -> Reach {
        self.visited.try_visit(vertex);
        self.trace.push(vertex);

        if vertex == self.target {
            return Reach::Found {
                steps: self.trace.len() - 1,
            };
        }

        let graph = self.graph;
        for next in graph.neighbors_of(vertex) {
            if self.visited.is_visited(next) {
                continue;
            }
            if let found @ Reach::Found { .. } = self.descend(next) {
                return found;
            }
        }
        Reach::NotFound
    }
}

impl UndirectedGraph {
    /// Depth-first search from `start` towards `target`.
    ///
    /// Neighbors are explored in stored order. The search stops as soon as the
    /// target is visited; otherwise it exhausts the component containing
    /// `start`, which is then exactly the trace.
    ///
    /// Recursion depth is bounded by the vertex count.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`](crate::GraphError::OutOfRange) if
    /// either id is invalid.
    pub fn dfs(&self, start: usize, target: usize) -> Result<SearchOutcome> {
        self.check_vertex(start)?;
        self.check_vertex(target)?;

        let mut walk = DepthFirst {
            graph: self,
            target,
            visited: VisitedSet::new(self.vertex_count()),
            trace: Vec::with_capacity(self.vertex_count()),
        };
        let reach = walk.descend(start);
        debug_assert!(walk.trace.len() <= walk.visited.len());
        debug_event!(start, target, ?reach, visited = walk.trace.len(), "dfs finished");

        Ok(SearchOutcome {
            algorithm: Algorithm::Dfs,
            start,
            target,
            trace: walk.trace,
            reach,
        })
    }

    /// Breadth-first search from `start` towards `target`.
    ///
    /// Vertices are marked visited when discovered and the step counter
    /// advances on each discovery. The search stops when the target is
    /// dequeued, leaving the rest of the queue undrained. A search that
    /// starts at its target reports zero steps.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`](crate::GraphError::OutOfRange) if
    /// either id is invalid.
    pub fn bfs(&self, start: usize, target: usize) -> Result<SearchOutcome> {
        self.check_vertex(start)?;
        self.check_vertex(target)?;

        let n = self.vertex_count();
        let mut visited = VisitedSet::new(n);
        // Each vertex is enqueued at most once, so `n` slots always suffice.
        let mut queue = VecDeque::with_capacity(n);
        let mut trace = Vec::with_capacity(n);
        let mut discovered = 0usize;

        visited.try_visit(start);
        queue.push_back(start);

        let mut reach = Reach::NotFound;
        while let Some(vertex) = queue.pop_front() {
            trace.push(vertex);
            if vertex == target {
                reach = Reach::Found {
                    steps: discovered.saturating_sub(1),
                };
                break;
            }
            for next in self.neighbors_of(vertex) {
                if visited.try_visit(next) {
                    queue.push_back(next);
                    discovered += 1;
                }
            }
        }
        debug_event!(start, target, ?reach, discovered, "bfs finished");

        Ok(SearchOutcome {
            algorithm: Algorithm::Bfs,
            start,
            target,
            trace,
            reach,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphError;

    #[test]
    fn dfs_follows_most_recent_edges_first() {
        let graph = UndirectedGraph::with_standard_edges();
        let outcome = graph.dfs(0, 3).unwrap();
        assert_eq!(outcome.trace, vec![0, 4, 3]);
        assert_eq!(outcome.reach, Reach::Found { steps: 2 });

        let outcome = graph.dfs(0, 2).unwrap();
        assert_eq!(outcome.trace, vec![0, 4, 3, 2]);
        assert_eq!(outcome.steps(), Some(3));
    }

    #[test]
    fn dfs_counts_backtracked_vertices() {
        // 0 -> 1 (dead end) is tried before 0 -> 2 because 1 was added last.
        let mut graph = UndirectedGraph::new(3);
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(0, 1).unwrap();

        let outcome = graph.dfs(0, 2).unwrap();
        assert_eq!(outcome.trace, vec![0, 1, 2]);
        assert_eq!(outcome.steps(), Some(2));
    }

    #[test]
    fn bfs_counts_discoveries() {
        let graph = UndirectedGraph::with_standard_edges();
        let outcome = graph.bfs(0, 3).unwrap();
        assert_eq!(outcome.trace, vec![0, 4, 1, 3]);
        // Discovered 4, 1, 3, 2 before 3 was dequeued.
        assert_eq!(outcome.reach, Reach::Found { steps: 3 });
    }

    #[test]
    fn search_from_target_reports_zero_steps() {
        let graph = UndirectedGraph::with_standard_edges();
        for outcome in [graph.dfs(2, 2).unwrap(), graph.bfs(2, 2).unwrap()] {
            assert_eq!(outcome.trace, vec![2]);
            assert_eq!(outcome.steps(), Some(0));
        }
    }

    #[test]
    fn unreachable_target_exhausts_component() {
        let mut graph = UndirectedGraph::new(5);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();

        let dfs = graph.dfs(0, 4).unwrap();
        assert_eq!(dfs.reach, Reach::NotFound);
        assert_eq!(dfs.trace, vec![0, 1, 2]);

        let bfs = graph.bfs(0, 4).unwrap();
        assert!(!bfs.is_found());
        assert_eq!(bfs.trace, vec![0, 1, 2]);
    }

    #[test]
    fn searches_reject_out_of_range_ids() {
        let graph = UndirectedGraph::new(2);
        let err = GraphError::OutOfRange { vertex: 2, vertex_count: 2 };
        assert_eq!(graph.dfs(2, 0), Err(err));
        assert_eq!(graph.dfs(0, 2), Err(err));
        assert_eq!(graph.bfs(2, 0), Err(err));
        assert_eq!(graph.bfs(0, 2), Err(err));
    }

    #[test]
    fn display_matches_console_messages() {
        let graph = UndirectedGraph::with_standard_edges();
        assert_eq!(
            graph.dfs(0, 3).unwrap().to_string(),
            "0 4 3\nReached the destination vertex 3 in 2 steps."
        );

        let isolated = UndirectedGraph::new(5);
        assert_eq!(
            isolated.dfs(0, 4).unwrap().to_string(),
            "0\nVertex 4 is not reachable."
        );
        assert_eq!(
            isolated.bfs(0, 4).unwrap().to_string(),
            "0\nThe destination vertex 4 is not reachable."
        );
    }
}
