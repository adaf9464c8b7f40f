use log::debug;
use rand::Rng;
use thiserror::Error;

/// Vertex index in `0..n`.
pub type VertexId = usize;

/// Policy cap on vertex count. Keeps the n×n matrix small and bounds
/// the recursion depth of the DFS exploration.
pub const MAX_VERTICES: usize = 100;

/// Contract violations surfaced by constructors and traversals.
///
/// The traversal engine trusts any graph that was successfully
/// constructed; nothing downstream re-validates.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("vertex count must be between 1 and {MAX_VERTICES}, got {got}")]
    VertexCountOutOfRange { got: usize },

    #[error("row {row} has {got} cells, expected {expected} (matrix must be square)")]
    NotSquare {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("cell [{row}][{col}] must be 0 or 1, got {got}")]
    CellNotBinary { row: usize, col: usize, got: u8 },

    #[error("edge density must be within [0.0, 1.0], got {got}")]
    DensityOutOfRange { got: f64 },

    #[error("start vertex {start} out of range for a graph on {vertices} vertices")]
    StartOutOfRange { start: VertexId, vertices: usize },
}

/// Square 0/1 adjacency matrix on `n` vertices, row-major.
///
/// `matrix[i][j] == 1` means the edge i→j exists. A symmetric matrix is
/// an undirected graph; an asymmetric one is treated as directed.
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjMatrix {
    n: usize,
    cells: Vec<u8>,
}

impl AdjMatrix {
    fn check_vertex_count(n: usize) -> Result<(), GraphError> {
        if n == 0 || n > MAX_VERTICES {
            return Err(GraphError::VertexCountOutOfRange { got: n });
        }
        Ok(())
    }

    /// Build a matrix from explicit rows, validating shape and cell values.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GraphError> {
        let n = rows.len();
        Self::check_vertex_count(n)?;

        let mut cells = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::NotSquare {
                    row: i,
                    expected: n,
                    got: row.len(),
                });
            }
            for (j, &cell) in row.iter().enumerate() {
                if cell > 1 {
                    return Err(GraphError::CellNotBinary {
                        row: i,
                        col: j,
                        got: cell,
                    });
                }
                cells.push(cell);
            }
        }

        Ok(Self { n, cells })
    }

    /// Generate a random undirected graph: one independent Bernoulli
    /// trial per unordered pair {i, j}, i < j, included with probability
    /// `density`. Symmetric by construction, zero diagonal.
    ///
    /// Reproducible when `rng` is seeded (e.g. `StdRng::seed_from_u64`).
    pub fn generate<R: Rng + ?Sized>(
        n: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, GraphError> {
        Self::check_vertex_count(n)?;
        if !(0.0..=1.0).contains(&density) {
            return Err(GraphError::DensityOutOfRange { got: density });
        }

        let mut cells = vec![0u8; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen::<f64>() < density {
                    cells[i * n + j] = 1;
                    cells[j * n + i] = 1;
                }
            }
        }

        let matrix = Self { n, cells };
        debug!(
            "generated {}-vertex graph at density {}: {} directed edges",
            n,
            density,
            matrix.edge_count()
        );
        Ok(matrix)
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn has_edge(&self, i: VertexId, j: VertexId) -> bool {
        self.cells[i * self.n + j] == 1
    }

    /// Number of 1-cells. For a symmetric matrix this counts each
    /// undirected edge twice.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.has_edge(i, j) == self.has_edge(j, i)))
    }

    /// Neighbors of `v` in ascending index order, by scanning row `v`.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.cells[v * self.n..(v + 1) * self.n]
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 1)
            .map(|(j, _)| j)
    }

    /// Derive the adjacency-list form. Pure and total: `lists[i]` holds
    /// every j with `matrix[i][j] == 1`, in ascending j order.
    pub fn to_list(&self) -> AdjList {
        AdjList {
            lists: (0..self.n).map(|v| self.neighbors(v).collect()).collect(),
        }
    }
}

/// Adjacency-list form of the same graph: per-vertex neighbor sequences
/// in strictly ascending index order.
///
/// Only constructed via [`AdjMatrix::to_list`], which guarantees the
/// ordering invariant and in-range indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList {
    lists: Vec<Vec<VertexId>>,
}

impl AdjList {
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.lists[v]
    }

    /// Reconstruct the matrix form. Inverse of [`AdjMatrix::to_list`].
    pub fn to_matrix(&self) -> AdjMatrix {
        let n = self.lists.len();
        let mut cells = vec![0u8; n * n];
        for (i, neighbors) in self.lists.iter().enumerate() {
            for &j in neighbors {
                cells[i * n + j] = 1;
            }
        }
        AdjMatrix { n, cells }
    }
}
