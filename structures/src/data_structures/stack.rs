//! Stack — LIFO structure backed by a singly-linked node chain.
//!
//! Variables:
//!   top : Option<Box<Node<T>>>  — most recently pushed node
//!   N   : usize                 — current number of elements
//!
//! Equations:
//!   push(x): new.next = top,  top = new,  N' = N + 1   O(1)
//!   pop():   top' = top.next, N' = N - 1               O(1)
//!   peek():  returns &top.value                        O(1)
//!   N == 0  =>  pop/peek fail with EmptyContainer

use crate::error::StructureError;

use super::node::{Link, Node};

const NAME: &str = "stack";

pub struct Stack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn push(&mut self, value: T) {
        self.top = Some(Node::boxed(value, self.top.take()));
        self.len += 1;
    }

    pub fn pop(&mut self) -> Result<T, StructureError> {
        let node = self.top.take().ok_or(StructureError::EmptyContainer { container: NAME })?;
        self.top = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    pub fn peek(&self) -> Result<&T, StructureError> {
        self.top
            .as_ref()
            .map(|n| &n.value)
            .ok_or(StructureError::EmptyContainer { container: NAME })
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn clear(&mut self) {
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }

    /// Top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.top.as_deref(), |n| n.next.as_deref()).map(|n| &n.value)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
