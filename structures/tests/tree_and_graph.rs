use std::collections::HashSet;

use structures::data_structures::BinaryTree;
use structures::graph::Graph;

fn values(v: Vec<&i32>) -> Vec<i32> {
    v.into_iter().copied().collect()
}

#[test]
fn tree_of_one_to_ten_has_expected_levels() {
    let tree: BinaryTree<i32> = (1..=10).collect();
    let levels: Vec<Vec<i32>> = tree.level_order().into_iter().map(values).collect();
    assert_eq!(levels, vec![vec![1], vec![2, 3], vec![4, 5, 6, 7], vec![8, 9, 10]]);
    assert_eq!(tree.size(), 10);
    assert_eq!(tree.height(), 4);
    for order in [tree.preorder(), tree.inorder(), tree.postorder()] {
        assert_eq!(order.len(), tree.size());
        let distinct: HashSet<i32> = values(order).into_iter().collect();
        assert_eq!(distinct.len(), 10);
    }
}

#[test]
fn tree_traversal_orders_for_one_to_ten() {
    let tree: BinaryTree<i32> = (1..=10).collect();
    assert_eq!(values(tree.preorder()), vec![1, 2, 4, 8, 9, 5, 10, 3, 6, 7]);
    assert_eq!(values(tree.inorder()), vec![8, 4, 9, 2, 10, 5, 1, 6, 3, 7]);
    assert_eq!(values(tree.postorder()), vec![8, 9, 4, 10, 5, 2, 6, 7, 3, 1]);
    assert!(tree.contains(&10));
    assert!(!tree.contains(&11));
    assert_eq!(tree.root().map(|n| n.value), Some(1));
}

fn six_vertex_graph() -> Graph<&'static str> {
    let mut g = Graph::undirected();
    g.add_edge("A", "B");
    g.add_edge("A", "C");
    g.add_edge("B", "D");
    g.add_edge("C", "E");
    g.add_edge("D", "E");
    g.add_edge("E", "F");
    g
}

#[test]
fn connected_graph_traversals_are_complete() {
    let g = six_vertex_graph();
    let dfs = g.dfs(&"A");
    let bfs = g.bfs(&"A");
    assert_eq!(dfs.len(), 6);
    assert_eq!(bfs.len(), 6);
    let all: HashSet<&str> = g.vertices().iter().copied().collect();
    assert_eq!(dfs.iter().copied().collect::<HashSet<_>>(), all);
    assert_eq!(bfs.iter().copied().collect::<HashSet<_>>(), all);
}

#[test]
fn traversal_orders_follow_adjacency_order() {
    let g = six_vertex_graph();
    assert_eq!(g.dfs(&"A"), vec!["A", "B", "D", "E", "C", "F"]);
    assert_eq!(g.bfs(&"A"), vec!["A", "B", "C", "D", "E", "F"]);
    assert_eq!(g.edge_count(), 6);
}

#[test]
fn traversal_does_not_mutate_graph() {
    let g = six_vertex_graph();
    let before = g.to_string();
    let _ = g.dfs(&"C");
    let _ = g.bfs(&"F");
    assert_eq!(g.to_string(), before);
}

#[test]
fn dfs_handles_long_paths_without_recursion() {
    let mut g = Graph::directed();
    for v in 0u32..100_000 {
        g.add_edge(v, v + 1);
    }
    let order = g.dfs(&0);
    assert_eq!(order.len(), 100_001);
    assert_eq!(order.first(), Some(&0));
    assert_eq!(order.last(), Some(&100_000));
    assert_eq!(g.bfs(&0).len(), 100_001);
}
