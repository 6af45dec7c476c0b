pub mod binary_tree;
pub mod circular_linked_list;
pub mod doubly_linked_list;
pub mod hash_table;
pub mod linked_list;
pub mod node;
pub mod queue;
pub mod stack;

pub use binary_tree::{BinaryTree, TreeNode};
pub use circular_linked_list::CircularLinkedList;
pub use doubly_linked_list::DoublyLinkedList;
pub use hash_table::{std_bucket_index, HashTable, TableKey};
pub use linked_list::SinglyLinkedList;
pub use node::NodeId;
pub use queue::Queue;
pub use stack::Stack;
