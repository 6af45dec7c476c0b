/// Mapping of every public operation in structures/src to the kind of
/// computation it performs and its time complexity
pub const STRUCTURES_COMPUTATION_MAP: &[(&str, &str, &str)] = &[
    // Linked lists
    ("data_structures/linked_list.rs::prepend", "Head insertion", "O(1)"),
    ("data_structures/linked_list.rs::append", "Tail walk + link", "O(N)"),
    ("data_structures/linked_list.rs::insert", "Positional splice (clamped)", "O(N)"),
    ("data_structures/linked_list.rs::remove", "Linear scan + unlink", "O(N)"),
    ("data_structures/linked_list.rs::reverse", "Pointer reversal", "O(N)"),
    ("data_structures/doubly_linked_list.rs::append", "Tail insertion", "O(1)"),
    ("data_structures/doubly_linked_list.rs::prepend", "Head insertion", "O(1)"),
    ("data_structures/doubly_linked_list.rs::insert", "Positional splice (clamped)", "O(N)"),
    ("data_structures/doubly_linked_list.rs::remove_node", "Neighbour relink", "O(1)"),
    ("data_structures/doubly_linked_list.rs::remove", "Linear scan + relink", "O(N)"),
    ("data_structures/circular_linked_list.rs::append", "Ring insertion", "O(1)"),
    ("data_structures/circular_linked_list.rs::prepend", "Ring insertion", "O(1)"),
    ("data_structures/circular_linked_list.rs::remove", "Ring scan + unlink", "O(N)"),
    ("data_structures/circular_linked_list.rs::rotate", "Head advance", "O(1)"),
    // Stack / queue
    ("data_structures/stack.rs::push", "LIFO insertion", "O(1)"),
    ("data_structures/stack.rs::pop", "LIFO removal", "O(1)"),
    ("data_structures/queue.rs::enqueue", "FIFO tail insertion", "O(1)"),
    ("data_structures/queue.rs::dequeue", "FIFO head removal", "O(1)"),
    // Binary tree
    ("data_structures/binary_tree.rs::insert", "Level-order fill", "O(N)"),
    ("data_structures/binary_tree.rs::preorder", "Tree traversal", "O(N)"),
    ("data_structures/binary_tree.rs::inorder", "Tree traversal", "O(N)"),
    ("data_structures/binary_tree.rs::postorder", "Tree traversal", "O(N)"),
    ("data_structures/binary_tree.rs::level_order", "Tree traversal", "O(N)"),
    ("data_structures/binary_tree.rs::height", "Tree measure", "O(N)"),
    // Hash table
    ("data_structures/hash_table.rs::put", "Chained insert/replace", "O(1 + N/C)"),
    ("data_structures/hash_table.rs::get", "Chained lookup", "O(1 + N/C)"),
    ("data_structures/hash_table.rs::remove", "Chained delete", "O(1 + N/C)"),
    // Graph
    ("graph/adj_list.rs::add_edge", "Adjacency append", "O(1)"),
    ("graph/dfs.rs", "Graph traversal", "O(V + E)"),
    ("graph/bfs.rs", "Graph traversal", "O(V + E)"),
    // Expression evaluation
    ("parsing_compilation/calculator.rs::evaluate", "Two-stack infix evaluation", "O(L)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_unique() {
        let mut names: Vec<&str> = STRUCTURES_COMPUTATION_MAP.iter().map(|(p, _, _)| *p).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), STRUCTURES_COMPUTATION_MAP.len());
    }
}
