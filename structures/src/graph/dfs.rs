use std::collections::HashSet;
use std::hash::Hash;

use super::adj_list::Graph;

/// Depth-first visitation order from `start`. Empty if `start` is unknown.
///
/// Uses an explicit stack; neighbours are pushed in reverse adjacency order
/// so the pre-order matches the recursive walk.
pub fn dfs<V: Eq + Hash + Clone>(graph: &Graph<V>, start: &V) -> Vec<V> {
    let mut order = Vec::new();
    let Some(start) = graph.vertex_key(start) else {
        return order;
    };
    let mut visited: HashSet<&V> = HashSet::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node.clone());
        for (n, _) in graph.neighbors(node).iter().rev() {
            if !visited.contains(n) {
                stack.push(n);
            }
        }
    }
    order
}
