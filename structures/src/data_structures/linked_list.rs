//! Singly-linked list with owned nodes.
//!
//! Variables:
//!   head : Option<Box<Node<T>>>  — pointer to first node, None if empty
//!   N    : usize                 — number of nodes
//!
//! Equations:
//!   prepend(x):   new_node.next = head,  head = new_node,  N' = N+1   O(1)
//!   append(x):    walk to tail, tail.next = new_node                O(N)
//!   insert(i,x):  i <= 0 => prepend,  i >= N => append,  else splice after node i-1
//!   remove(x):    unlink first node with value x,  N' = N-1          O(N)
//!
//! Invariant: N == |nodes reachable from head|

use std::fmt;

use tracing::trace;

use super::node::{Link, Node};

pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn prepend(&mut self, value: T) {
        self.head = Some(Node::boxed(value, self.head.take()));
        self.len += 1;
    }

    pub fn append(&mut self, value: T) {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Insert so that `value` ends up at position `index`.
    /// Out-of-range indices are clamped to the nearest end.
    pub fn insert(&mut self, index: isize, value: T) {
        if index <= 0 {
            trace!(index, "insert clamped to front");
            return self.prepend(value);
        }
        let index = index as usize;
        if index >= self.len {
            trace!(index, len = self.len, "insert clamped to back");
            return self.append(value);
        }
        let mut cur = &mut self.head;
        for _ in 0..index {
            match cur {
                Some(node) => cur = &mut node.next,
                None => break,
            }
        }
        *cur = Some(Node::boxed(value, cur.take()));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_ref().map(|n| &n.value)
    }

    /// Reverse the chain in place by flipping every `next` link.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref() }
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Unlink the first node holding `value`. Returns false when absent.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut cur = &mut self.head;
        loop {
            match cur {
                None => return false,
                Some(node) if node.value == *value => break,
                Some(node) => cur = &mut node.next,
            }
        }
        match cur.take() {
            Some(node) => {
                *cur = node.next;
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn find(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T: Clone> SinglyLinkedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        for value in iter {
            let node = cur.insert(Box::new(Node::new(value)));
            cur = &mut node.next;
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("empty");
        }
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
