use std::collections::VecDeque;

use log::trace;

use crate::graph::{AdjList, AdjMatrix, GraphError, VertexId};

/// All-pairs hop distances discovered by the DFS exploration.
///
/// `get(s, v)` is the smallest path length recorded while exploring from
/// `s`; [`DistanceMatrix::UNREACHED`] (-1) means the exploration never
/// touched `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<i32>,
}

impl DistanceMatrix {
    /// Sentinel for "no path found by the exploration".
    pub const UNREACHED: i32 = -1;

    fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![Self::UNREACHED; n * n],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn get(&self, start: VertexId, v: VertexId) -> i32 {
        self.cells[start * self.n + v]
    }

    /// Distances from one start vertex, indexed by target vertex.
    pub fn row(&self, start: VertexId) -> &[i32] {
        &self.cells[start * self.n..(start + 1) * self.n]
    }

    fn record_if_smaller(&mut self, start: VertexId, v: VertexId, dist: i32) {
        let cell = &mut self.cells[start * self.n + v];
        if *cell == Self::UNREACHED || dist < *cell {
            *cell = dist;
        }
    }
}

/// Breadth-first order over the matrix form, scanning row `v` for
/// 1-cells in ascending column order.
pub fn bfs_matrix(matrix: &AdjMatrix, start: VertexId) -> Result<Vec<VertexId>, GraphError> {
    bfs_engine(matrix.vertex_count(), start, |v| matrix.neighbors(v))
}

/// Breadth-first order over the list form. Neighbor lists are ascending
/// by construction, so the order matches [`bfs_matrix`] exactly.
pub fn bfs_list(list: &AdjList, start: VertexId) -> Result<Vec<VertexId>, GraphError> {
    bfs_engine(list.vertex_count(), start, |v| {
        list.neighbors(v).iter().copied()
    })
}

/// All-starts DFS distance matrix over the matrix form.
pub fn dfs_matrix(matrix: &AdjMatrix) -> DistanceMatrix {
    dfs_engine(matrix.vertex_count(), |v| matrix.neighbors(v))
}

/// All-starts DFS distance matrix over the list form. Produces the same
/// matrix as [`dfs_matrix`] for the same underlying graph.
pub fn dfs_list(list: &AdjList) -> DistanceMatrix {
    dfs_engine(list.vertex_count(), |v| list.neighbors(v).iter().copied())
}

/// Classic FIFO breadth-first search. One engine behind both public
/// variants; the representation only contributes neighbor enumeration.
///
/// Unreachable vertices are absent from the returned order.
fn bfs_engine<I, F>(n: usize, start: VertexId, neighbors: F) -> Result<Vec<VertexId>, GraphError>
where
    F: Fn(VertexId) -> I,
    I: Iterator<Item = VertexId>,
{
    if start >= n {
        return Err(GraphError::StartOutOfRange { start, vertices: n });
    }

    let mut visited = vec![false; n];
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    let mut order = Vec::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        for neighbor in neighbors(v) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    trace!("bfs from {}: reached {} of {} vertices", start, order.len(), n);
    Ok(order)
}

/// Backtracking DFS exploration, one pass per start vertex.
///
/// The visited set marks only the vertices on the current recursion
/// stack — each vertex is unmarked when its call returns — so the
/// exploration walks every simple path from the start and keeps the
/// smallest length seen per target. Not a shortest-path search: no
/// memoization across branches, exponential in the worst case, bounded
/// by the vertex cap.
fn dfs_engine<I, F>(n: usize, neighbors: F) -> DistanceMatrix
where
    F: Fn(VertexId) -> I,
    I: Iterator<Item = VertexId>,
{
    let mut distances = DistanceMatrix::new(n);
    for start in 0..n {
        // Fresh scratch state per start; nothing carries over.
        let mut visited = vec![false; n];
        dfs_walk(&neighbors, start, start, 0, &mut visited, &mut distances);
    }
    distances
}

fn dfs_walk<I, F>(
    neighbors: &F,
    start: VertexId,
    cur: VertexId,
    dist: i32,
    visited: &mut [bool],
    distances: &mut DistanceMatrix,
) where
    F: Fn(VertexId) -> I,
    I: Iterator<Item = VertexId>,
{
    visited[cur] = true;
    distances.record_if_smaller(start, cur, dist);
    for neighbor in neighbors(cur) {
        if !visited[neighbor] {
            dfs_walk(neighbors, start, neighbor, dist + 1, visited, distances);
        }
    }
    visited[cur] = false;
}
