//! graph-walk-core: dual-representation graph traversal engine.
//!
//! A pure Rust library that holds one graph in two forms — a square 0/1
//! adjacency matrix and the adjacency list derived from it — and runs
//! breadth-first and depth-first traversals over each. BFS yields a
//! visit order; DFS yields an all-pairs hop-distance matrix via
//! exhaustive backtracking exploration.
//!
//! No I/O and no rendering — callers hand in validated graphs and get
//! structured results back. The console front end lives in the
//! graph-walk-cli crate.

mod graph;
mod traversal;

pub use graph::{AdjList, AdjMatrix, GraphError, VertexId, MAX_VERTICES};
pub use traversal::{bfs_list, bfs_matrix, dfs_list, dfs_matrix, DistanceMatrix};
