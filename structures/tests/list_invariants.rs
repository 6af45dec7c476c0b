use structures::data_structures::{CircularLinkedList, DoublyLinkedList, SinglyLinkedList};

/// A fixed but irregular script of list mutations.
#[derive(Clone, Copy)]
enum Op {
    Append(i32),
    Prepend(i32),
    Insert(isize, i32),
    Remove(i32),
}

fn script() -> Vec<Op> {
    use Op::*;
    vec![
        Append(1),
        Append(2),
        Prepend(0),
        Insert(1, 10),
        Insert(-3, -1),
        Insert(42, 99),
        Remove(10),
        Remove(7),
        Append(2),
        Remove(2),
        Insert(2, 5),
        Remove(-1),
        Remove(99),
        Prepend(8),
        Remove(8),
    ]
}

/// Reference model on a Vec, with the same clamping policy.
fn model(ops: &[Op]) -> Vec<i32> {
    let mut v = Vec::new();
    for op in ops {
        match *op {
            Op::Append(x) => v.push(x),
            Op::Prepend(x) => v.insert(0, x),
            Op::Insert(i, x) => {
                let i = i.clamp(0, v.len() as isize) as usize;
                v.insert(i, x);
            }
            Op::Remove(x) => {
                if let Some(pos) = v.iter().position(|y| *y == x) {
                    v.remove(pos);
                }
            }
        }
    }
    v
}

#[test]
fn singly_size_matches_reachable_nodes() {
    let mut list = SinglyLinkedList::new();
    for op in script() {
        match op {
            Op::Append(x) => list.append(x),
            Op::Prepend(x) => list.prepend(x),
            Op::Insert(i, x) => list.insert(i, x),
            Op::Remove(x) => {
                list.remove(&x);
            }
        }
        assert_eq!(list.len(), list.iter().count());
    }
    assert_eq!(list.to_vec(), model(&script()));
}

#[test]
fn doubly_size_matches_reachable_nodes_both_ways() {
    let mut list = DoublyLinkedList::new();
    for op in script() {
        match op {
            Op::Append(x) => {
                list.append(x);
            }
            Op::Prepend(x) => {
                list.prepend(x);
            }
            Op::Insert(i, x) => {
                list.insert(i, x);
            }
            Op::Remove(x) => {
                list.remove(&x);
            }
        }
        assert_eq!(list.len(), list.iter().count());
        assert_eq!(list.len(), list.iter().rev().count());
    }
    assert_eq!(list.to_vec(), model(&script()));
}

#[test]
fn circular_ring_closes_after_every_mutation() {
    let mut list = CircularLinkedList::new();
    for op in script() {
        match op {
            Op::Append(x) => list.append(x),
            Op::Prepend(x) => list.prepend(x),
            Op::Insert(i, x) => list.insert(i, x),
            Op::Remove(x) => {
                list.remove(&x);
            }
        }
        assert_eq!(list.len(), list.iter().count());
        assert!(list.walk_closes());
    }
    assert_eq!(list.to_vec(), model(&script()));
}

#[test]
fn find_and_remove_absent_values_are_no_ops() {
    let mut s: SinglyLinkedList<i32> = (1..=3).collect();
    let mut d: DoublyLinkedList<i32> = (1..=3).collect();
    let mut c: CircularLinkedList<i32> = (1..=3).collect();
    assert!(!s.remove(&4) && !d.remove(&4) && !c.remove(&4));
    assert!(s.find(&2) && d.find(&2) && c.find(&2));
    assert_eq!((s.len(), d.len(), c.len()), (3, 3, 3));
}
