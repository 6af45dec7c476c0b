//! # Structures Crate
//!
//! Linked data structures and the algorithms that walk them.
//!
//! ## Modules
//!
//! - `data_structures` – Node primitives, singly/doubly/circular lists, stack, queue,
//!   binary tree, chained hash table
//! - `graph` – Adjacency-list graph with DFS and BFS
//! - `parsing_compilation` – Two-stack infix expression calculator
//! - `computation_map` – Operation/complexity table
//! - `error` – Container and evaluation errors
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use structures::data_structures::Stack;
//! use structures::parsing_compilation::evaluate;
//!
//! let mut s = Stack::new();
//! s.push(1);
//! assert_eq!(s.pop(), Ok(1));
//! assert_eq!(evaluate("(3 + 4) * 2"), Ok(14.0));
//! ```

pub mod computation_map;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod graph;
pub mod parsing_compilation;

pub use error::{EvalError, StructureError};
