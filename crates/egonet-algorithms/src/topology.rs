//! Graph topology analysis algorithms

use super::common::GraphView;

/// Triangle Counting
///
/// Returns total number of triangles in the graph; each triangle is counted once
/// by only considering index triples u < v < w.
pub fn count_triangles(view: &GraphView) -> usize {
    let mut triangle_count = 0;

    for u in 0..view.node_count {
        for &v in view.neighbors(u) {
            if v <= u {
                continue;
            }

            for &w in view.neighbors(v) {
                if w <= v {
                    continue;
                }

                // Rows are sorted, so adjacency is a binary search
                if view.has_edge(u, w) {
                    triangle_count += 1;
                }
            }
        }
    }

    triangle_count
}

/// Edge density `2m / (n (n - 1))`; 0.0 for graphs with fewer than two nodes.
pub fn density(view: &GraphView) -> f64 {
    let n = view.node_count as f64;
    if view.node_count < 2 {
        return 0.0;
    }
    2.0 * view.edge_count() as f64 / (n * (n - 1.0))
}

/// Mean node degree; 0.0 for an empty graph.
pub fn average_degree(view: &GraphView) -> f64 {
    if view.node_count == 0 {
        return 0.0;
    }
    view.targets.len() as f64 / view.node_count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_graph(n: u64) -> GraphView {
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push((i, j));
            }
        }
        GraphView::from_edges(&edges)
    }

    #[test]
    fn test_triangle_counting() {
        // Complete graph K4: (0,1,2), (0,1,3), (0,2,3), (1,2,3) -> 4 triangles.
        assert_eq!(count_triangles(&complete_graph(4)), 4);

        let path = GraphView::from_edges(&[(1, 2), (2, 3), (3, 4)]);
        assert_eq!(count_triangles(&path), 0);
    }

    #[test]
    fn test_density_and_average_degree() {
        let k4 = complete_graph(4);
        assert!((density(&k4) - 1.0).abs() < 1e-12);
        assert!((average_degree(&k4) - 3.0).abs() < 1e-12);

        let path = GraphView::from_edges(&[(1, 2), (2, 3)]);
        assert!((density(&path) - 2.0 / 3.0).abs() < 1e-12);

        let empty = GraphView::from_edges(&[]);
        assert_eq!(density(&empty), 0.0);
        assert_eq!(average_degree(&empty), 0.0);
    }
}
