//! Doubly-linked list over an index arena.
//!
//! Variables:
//!   nodes : Slab<DNode<T>>   — node storage, links are slot ids
//!   head  : Option<NodeId>   — first node
//!   tail  : Option<NodeId>   — last node
//!   N     : usize            — number of linked nodes
//!
//! Equations:
//!   head.prev = None,  tail.next = None
//!   a.next = b  <=>  b.prev = a                      (mutual inverses)
//!   append/prepend                                   O(1)
//!   remove_node(id): prev.next = next, next.prev = prev   O(1)
//!   remove(x):       find_node(x) then remove_node        O(N)

use std::fmt;

use tracing::trace;

use super::node::{DNode, NodeId, Slab};

pub struct DoublyLinkedList<T> {
    nodes: Slab<DNode<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self { nodes: Slab::new(), head: None, tail: None, len: 0 }
    }

    pub fn append(&mut self, value: T) -> NodeId {
        let id = self.nodes.insert(DNode { value, prev: self.tail, next: None });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    pub fn prepend(&mut self, value: T) -> NodeId {
        let id = self.nodes.insert(DNode { value, prev: None, next: self.head });
        match self.head {
            Some(head) => self.nodes[head].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    /// Insert so that `value` ends up at position `index`.
    /// Out-of-range indices are clamped to the nearest end.
    pub fn insert(&mut self, index: isize, value: T) -> NodeId {
        if index <= 0 {
            trace!(index, "insert clamped to front");
            return self.prepend(value);
        }
        if index as usize >= self.len {
            trace!(index, len = self.len, "insert clamped to back");
            return self.append(value);
        }
        // 0 < index < len, so the node currently at `index` has a predecessor.
        let Some(after) = self.node_at(index as usize) else {
            return self.append(value);
        };
        let before = self.nodes[after].prev;
        let id = self.nodes.insert(DNode { value, prev: before, next: Some(after) });
        self.nodes[after].prev = Some(id);
        match before {
            Some(b) => self.nodes[b].next = Some(id),
            None => self.head = Some(id),
        }
        self.len += 1;
        id
    }

    /// Unlink the node behind `id` in O(1). Returns None for stale ids.
    pub fn remove_node(&mut self, id: NodeId) -> Option<T> {
        let node = self.nodes.remove(id)?;
        match node.prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.nodes[n].prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        Some(node.value)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.and_then(|id| self.remove_node(id))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.and_then(|id| self.remove_node(id))
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[id].value)
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[id].value)
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|n| &n.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { list: self, front: self.head, back: self.tail, remaining: self.len }
    }

    fn node_at(&self, index: usize) -> Option<NodeId> {
        // Walk from whichever end is closer.
        if index < self.len / 2 {
            let mut cur = self.head;
            for _ in 0..index {
                cur = cur.and_then(|id| self.nodes[id].next);
            }
            cur
        } else {
            let mut cur = self.tail;
            for _ in index + 1..self.len {
                cur = cur.and_then(|id| self.nodes[id].prev);
            }
            cur
        }
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn find_node(&self, value: &T) -> Option<NodeId> {
        let mut cur = self.head;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            if node.value == *value {
                return Some(id);
            }
            cur = node.next;
        }
        None
    }

    pub fn find(&self, value: &T) -> bool {
        self.find_node(value).is_some()
    }

    /// Unlink the first node holding `value`. Returns false when absent.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.find_node(value) {
            Some(id) => self.remove_node(id).is_some(),
            None => false,
        }
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("empty");
        }
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" <-> ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
