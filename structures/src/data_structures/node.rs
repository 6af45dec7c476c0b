//! Link primitives shared by the lists, the stack and the queue.
//!
//! Variables:
//!   Node<T>         : value + owned `next` box          (singly chains)
//!   DNode<T>        : value + `prev`/`next` slot index  (doubly list)
//!   CircularNode<T> : value + `next` slot index         (ring)
//!   SlotNode<T>     : value + optional `next` slot index (queue chain)
//!   Slab<N>         : Vec<Option<N>> + free list
//!
//! Equations:
//!   Slab::insert(n): reuse free.pop() if any, else push   O(1)
//!   Slab::remove(i): slots[i] = None, free.push(i)        O(1)
//!   live(slab)     = |{ i | slots[i] is Some }|

/// Owning link of a singly chain.
pub type Link<T> = Option<Box<Node<T>>>;

/// Singly linked node.
#[derive(Debug)]
pub struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    pub fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

/// Stable handle to a node stored in a [`Slab`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Doubly linked node. `prev`/`next` are slot indices into the owning slab.
#[derive(Debug)]
pub struct DNode<T> {
    pub value: T,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
}

/// Ring node. `next` always points somewhere while the node is linked.
#[derive(Debug)]
pub struct CircularNode<T> {
    pub value: T,
    pub next: NodeId,
}

/// Singly linked node addressed by slot, for chains that also need a
/// handle on their last node.
#[derive(Debug)]
pub struct SlotNode<T> {
    pub value: T,
    pub next: Option<NodeId>,
}

/// Index arena with slot reuse.
#[derive(Debug)]
pub struct Slab<N> {
    slots: Vec<Option<N>>,
    free: Vec<usize>,
}

impl<N> Default for Slab<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Slab<N> {
    pub fn new() -> Self {
        Self { slots: Vec::new(), free: Vec::new() }
    }

    pub fn insert(&mut self, node: N) -> NodeId {
        match self.free.pop() {
            Some(i) => {
                self.slots[i] = Some(node);
                NodeId(i)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    pub fn remove(&mut self, id: NodeId) -> Option<N> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        Some(node)
    }

    pub fn get(&self, id: NodeId) -> Option<&N> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl<N> std::ops::Index<NodeId> for Slab<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        match self.get(id) {
            Some(node) => node,
            None => panic!("dangling node id {}", id.0),
        }
    }
}

impl<N> std::ops::IndexMut<NodeId> for Slab<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("dangling node id {}", id.0),
        }
    }
}
