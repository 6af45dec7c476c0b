//! Queue — FIFO over a singly-linked slot chain with a tracked tail.
//!
//! Variables:
//!   nodes : Slab<SlotNode<T>>  — node storage, `next` links are slot ids
//!   head  : Option<NodeId>     — next node to dequeue
//!   tail  : Option<NodeId>     — last node of the chain
//!   len   : usize
//!
//! Equations:
//!   enqueue(x): tail.next = new,  tail = new,  len += 1     O(1)
//!   dequeue():  head = head.next, len -= 1                  O(1)
//!   empty iff head = None iff tail = None

use crate::error::StructureError;

use super::node::{NodeId, Slab, SlotNode};

const NAME: &str = "queue";

pub struct Queue<T> {
    nodes: Slab<SlotNode<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { nodes: Slab::new(), head: None, tail: None, len: 0 }
    }

    pub fn enqueue(&mut self, value: T) {
        let id = self.nodes.insert(SlotNode { value, next: None });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    pub fn dequeue(&mut self) -> Result<T, StructureError> {
        let empty = StructureError::EmptyContainer { container: NAME };
        let head = self.head.ok_or(empty.clone())?;
        let node = self.nodes.remove(head).ok_or(empty)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.value)
    }

    pub fn peek(&self) -> Result<&T, StructureError> {
        self.head
            .and_then(|id| self.nodes.get(id))
            .map(|n| &n.value)
            .ok_or(StructureError::EmptyContainer { container: NAME })
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.head.and_then(|id| self.nodes.get(id)), |n| {
            n.next.and_then(|id| self.nodes.get(id))
        })
        .map(|n| &n.value)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
