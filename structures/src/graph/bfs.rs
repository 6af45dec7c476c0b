use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use super::adj_list::Graph;

/// Breadth-first visitation order from `start`. Empty if `start` is unknown.
pub fn bfs<V: Eq + Hash + Clone>(graph: &Graph<V>, start: &V) -> Vec<V> {
    let mut order = Vec::new();
    let Some(start) = graph.vertex_key(start) else {
        return order;
    };
    let mut visited: HashSet<&V> = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        order.push(node.clone());
        for (n, _) in graph.neighbors(node) {
            if visited.insert(n) {
                queue.push_back(n);
            }
        }
    }
    order
}
