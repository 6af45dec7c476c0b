pub mod adj_list;
pub mod bfs;
pub mod dfs;

pub use adj_list::{Graph, Weight, DEFAULT_WEIGHT};
