//! Adjacency list graph representation.
//!
//! Variables:
//!   V       = set of vertices, kept in insertion order
//!   adj[u]  = Vec<(v, w)> of out-edges of vertex u, in insertion order
//!   directed: bool
//!
//! Equations:
//!   add_vertex(u):        adj[u] = [] if u not in V               (idempotent)
//!   add_edge(u, v, w):    V += {u, v},  adj[u].push((v, w))
//!                         undirected  =>  adj[v].push((u, w))
//!   parallel edges are kept:  add_edge(u,v) twice => |adj[u]| grows by 2
//!   edge_count = sum |adj[u]|      (directed)
//!              = sum |adj[u]| / 2  (undirected)

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::trace;

pub type Weight = i64;

pub const DEFAULT_WEIGHT: Weight = 1;

#[derive(Debug, Clone)]
pub struct Graph<V> {
    adj: HashMap<V, Vec<(V, Weight)>>,
    order: Vec<V>,
    directed: bool,
}

impl<V: Eq + Hash + Clone> Graph<V> {
    pub fn new(directed: bool) -> Self {
        Self { adj: HashMap::new(), order: Vec::new(), directed }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn add_vertex(&mut self, v: V) {
        if !self.adj.contains_key(&v) {
            self.order.push(v.clone());
            self.adj.insert(v, Vec::new());
        }
    }

    /// Add an edge of weight 1.
    pub fn add_edge(&mut self, a: V, b: V) {
        self.add_weighted_edge(a, b, DEFAULT_WEIGHT);
    }

    pub fn add_weighted_edge(&mut self, a: V, b: V, weight: Weight) {
        self.add_vertex(a.clone());
        self.add_vertex(b.clone());
        trace!(weight, directed = self.directed, "adding edge");
        if !self.directed {
            self.adj.entry(b.clone()).or_default().push((a.clone(), weight));
        }
        self.adj.entry(a).or_default().push((b, weight));
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adj.contains_key(v)
    }

    /// The graph-owned copy of `v`, borrowed for the graph's lifetime.
    pub(crate) fn vertex_key(&self, v: &V) -> Option<&V> {
        self.adj.get_key_value(v).map(|(k, _)| k)
    }

    /// Out-edges of `v`; empty for unknown vertices.
    pub fn neighbors(&self, v: &V) -> &[(V, Weight)] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Vertices in the order they were first seen.
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adj.values().map(Vec::len).sum();
        if self.directed {
            entries
        } else {
            // Self-loops are stored twice in the same list, so halving stays exact.
            entries / 2
        }
    }

    pub fn dfs(&self, start: &V) -> Vec<V> {
        super::dfs::dfs(self, start)
    }

    pub fn bfs(&self, start: &V) -> Vec<V> {
        super::bfs::bfs(self, start)
    }
}

impl<V: Eq + Hash + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V: Eq + Hash + Clone + fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.order {
            write!(f, "{v} -> [")?;
            for (i, (n, w)) in self.neighbors(v).iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{n}({w})")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
