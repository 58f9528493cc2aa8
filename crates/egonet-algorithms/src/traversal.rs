//! Breadth-first traversal over graph views

use super::common::GraphView;
use std::collections::VecDeque;

/// Hop distances from `source_idx` to every node index; `None` when unreachable.
pub fn bfs_distances(view: &GraphView, source_idx: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; view.node_count];
    let mut queue = VecDeque::new();

    dist[source_idx] = Some(0);
    queue.push_back(source_idx);

    while let Some(current_idx) = queue.pop_front() {
        let next_dist = dist[current_idx].map(|d| d + 1);
        for &next_idx in view.neighbors(current_idx) {
            if dist[next_idx].is_none() {
                dist[next_idx] = next_dist;
                queue.push_back(next_idx);
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bfs_distances() {
        // 1-2-3, 4 isolated
        let view = GraphView::from_nodes_and_edges(1..=4, &[(1, 2), (2, 3)]);
        let dist = bfs_distances(&view, view.node_to_index[&1]);

        assert_eq!(dist, vec![Some(0), Some(1), Some(2), None]);

        let from_middle = bfs_distances(&view, view.node_to_index[&2]);
        assert_eq!(from_middle, vec![Some(1), Some(0), Some(1), None]);
    }
}
