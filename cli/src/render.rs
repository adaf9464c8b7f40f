//! Table rendering for matrices, traversal orders, and distance tables.
//!
//! Pure string building so the layouts are testable; only `main` prints.

use std::fmt::Write;

use graph_walk_core::{AdjMatrix, DistanceMatrix, VertexId};

/// Adjacency matrix with indexed header row and column, width-2 cells.
pub fn matrix_table(matrix: &AdjMatrix) -> String {
    let n = matrix.vertex_count();
    let mut out = String::new();

    out.push_str("   ");
    for j in 0..n {
        let _ = write!(out, "{j:2} ");
    }
    out.push('\n');

    for i in 0..n {
        let _ = write!(out, "{i:2} ");
        for j in 0..n {
            let _ = write!(out, "{:2} ", u8::from(matrix.has_edge(i, j)));
        }
        out.push('\n');
    }

    out
}

/// One-line BFS visit order, e.g. `BFS (matrix) from 0: 0 1 2`.
pub fn order_line(label: &str, start: VertexId, order: &[VertexId]) -> String {
    let visits: Vec<String> = order.iter().map(|v| v.to_string()).collect();
    format!("{label} from {start}: {}", visits.join(" "))
}

/// Distance table with a from\to header; `-` marks the unreached
/// sentinel. Width-3 cells.
pub fn distance_table(label: &str, distances: &DistanceMatrix) -> String {
    let n = distances.vertex_count();
    let mut out = String::new();

    let _ = writeln!(out, "Distance matrix ({label}):");
    out.push_str("from\\to ");
    for j in 0..n {
        let _ = write!(out, "{j:3} ");
    }
    out.push('\n');

    for s in 0..n {
        let _ = write!(out, "{s:5} |");
        for &dist in distances.row(s) {
            if dist == DistanceMatrix::UNREACHED {
                let _ = write!(out, "{:>3} ", "-");
            } else {
                let _ = write!(out, "{dist:3} ");
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_walk_core::{bfs_matrix, dfs_matrix};

    fn sample() -> AdjMatrix {
        AdjMatrix::from_rows(&[
            vec![0, 1, 0, 0],
            vec![1, 0, 0, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 1, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_matrix_table_layout() {
        let m = AdjMatrix::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        let expected = "    0  1 \n 0  0  1 \n 1  1  0 \n";
        assert_eq!(matrix_table(&m), expected);
    }

    #[test]
    fn test_order_line() {
        let m = sample();
        let order = bfs_matrix(&m, 0).unwrap();
        assert_eq!(order_line("BFS (matrix)", 0, &order), "BFS (matrix) from 0: 0 1");
    }

    #[test]
    fn test_distance_table_sentinels() {
        let m = sample();
        let table = distance_table("DFS (matrix)", &dfs_matrix(&m));
        let expected = "Distance matrix (DFS (matrix)):\n\
                        from\\to   0   1   2   3 \n\
                        \u{20}   0 |  0   1   -   - \n\
                        \u{20}   1 |  1   0   -   - \n\
                        \u{20}   2 |  -   -   0   1 \n\
                        \u{20}   3 |  -   -   1   0 \n";
        assert_eq!(table, expected);
    }
}
