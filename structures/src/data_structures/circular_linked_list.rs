//! Circular singly-linked list.
//!
//! Variables:
//!   nodes : Slab<CircularNode<T>>
//!   tail  : Option<NodeId>   — last node; head = tail.next
//!   N     : usize
//!
//! Equations:
//!   non-empty  =>  tail.next == head                 (ring closed)
//!   next^N(head) == head
//!   append(x):  new.next = head, tail.next = new, tail = new       O(1)
//!   prepend(x): new.next = head, tail.next = new                   O(1)
//!   rotate():   tail = head                                        O(1)

use std::fmt;

use tracing::trace;

use super::node::{CircularNode, NodeId, Slab};

pub struct CircularLinkedList<T> {
    nodes: Slab<CircularNode<T>>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> CircularLinkedList<T> {
    pub fn new() -> Self {
        Self { nodes: Slab::new(), tail: None, len: 0 }
    }

    fn head(&self) -> Option<NodeId> {
        self.tail.map(|t| self.nodes[t].next)
    }

    /// Link a new node right after `tail` (i.e. in front of the head).
    fn link_after_tail(&mut self, value: T) -> NodeId {
        let id = match self.tail {
            Some(tail) => {
                let head = self.nodes[tail].next;
                let id = self.nodes.insert(CircularNode { value, next: head });
                self.nodes[tail].next = id;
                id
            }
            None => {
                // A lone node is its own successor.
                let id = self.nodes.insert(CircularNode { value, next: NodeId(0) });
                self.nodes[id].next = id;
                self.tail = Some(id);
                id
            }
        };
        self.len += 1;
        id
    }

    pub fn append(&mut self, value: T) {
        let id = self.link_after_tail(value);
        self.tail = Some(id);
    }

    pub fn prepend(&mut self, value: T) {
        self.link_after_tail(value);
    }

    /// Insert so that `value` ends up at position `index`.
    /// Out-of-range indices are clamped to the nearest end.
    pub fn insert(&mut self, index: isize, value: T) {
        if index <= 0 {
            trace!(index, "insert clamped to front");
            return self.prepend(value);
        }
        if index as usize >= self.len {
            trace!(index, len = self.len, "insert clamped to back");
            return self.append(value);
        }
        let Some(mut prev) = self.head() else {
            return self.append(value);
        };
        for _ in 1..index {
            prev = self.nodes[prev].next;
        }
        let next = self.nodes[prev].next;
        let id = self.nodes.insert(CircularNode { value, next });
        self.nodes[prev].next = id;
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let tail = self.tail?;
        let head = self.nodes[tail].next;
        self.unlink(tail, head)
    }

    /// Remove `cur`, whose predecessor on the ring is `prev`.
    fn unlink(&mut self, prev: NodeId, cur: NodeId) -> Option<T> {
        let node = self.nodes.remove(cur)?;
        if self.len == 1 {
            self.tail = None;
        } else {
            self.nodes[prev].next = node.next;
            if self.tail == Some(cur) {
                self.tail = Some(prev);
            }
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Advance the head by one position.
    pub fn rotate(&mut self) {
        self.tail = self.head();
    }

    /// Walk `next` from head exactly `len` times and check we land on head.
    pub fn walk_closes(&self) -> bool {
        let Some(head) = self.head() else {
            return self.len == 0;
        };
        let mut cur = head;
        for _ in 0..self.len {
            cur = self.nodes[cur].next;
        }
        cur == head
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head().map(|id| &self.nodes[id].value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { list: self, cur: self.head(), remaining: self.len }
    }
}

impl<T: PartialEq> CircularLinkedList<T> {
    pub fn find(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Unlink the first node holding `value`. Returns false when absent.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(mut prev) = self.tail else {
            return false;
        };
        for _ in 0..self.len {
            let cur = self.nodes[prev].next;
            if self.nodes[cur].value == *value {
                return self.unlink(prev, cur).is_some();
            }
            prev = cur;
        }
        false
    }
}

impl<T: Clone> CircularLinkedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for CircularLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One lap around the ring, starting at head.
pub struct Iter<'a, T> {
    list: &'a CircularLinkedList<T>,
    cur: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.cur?];
        self.cur = Some(node.next);
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a CircularLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for CircularLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for CircularLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CircularLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("empty");
        }
        for v in self.iter() {
            write!(f, "{v} -> ")?;
        }
        f.write_str("(head)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_stays_closed_through_mutations() {
        let mut list = CircularLinkedList::new();
        assert!(list.walk_closes());
        list.append(2);
        assert!(list.walk_closes());
        list.prepend(1);
        list.append(4);
        list.insert(2, 3);
        assert!(list.walk_closes());
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);

        assert!(list.remove(&4));
        assert!(list.walk_closes());
        assert!(list.remove(&1));
        assert!(list.walk_closes());
        assert_eq!(list.to_vec(), vec![2, 3]);
        assert!(list.remove(&2));
        assert!(list.remove(&3));
        assert!(list.is_empty());
        assert!(!list.remove(&3));
        assert!(list.walk_closes());
    }

    #[test]
    fn removing_tail_moves_tail_back() {
        let mut list: CircularLinkedList<i32> = (1..=3).collect();
        assert!(list.remove(&3));
        list.append(9);
        assert_eq!(list.to_vec(), vec![1, 2, 9]);
    }

    #[test]
    fn rotate_advances_head() {
        let mut list: CircularLinkedList<i32> = (1..=3).collect();
        list.rotate();
        assert_eq!(list.to_vec(), vec![2, 3, 1]);
        assert_eq!(list.to_string(), "2 -> 3 -> 1 -> (head)");
        assert!(list.walk_closes());
    }

    #[test]
    fn pop_front_drains_in_order() {
        let mut list: CircularLinkedList<i32> = (1..=3).collect();
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), None);
    }
}
