use std::hash::Hash;

use structures::data_structures::{std_bucket_index, HashTable, TableKey};

#[test]
fn round_trip_until_removed() {
    let keys = ["alpha", "beta", "gamma", "delta", "ahpla", "epsilon", "zeta"];
    let pairs: Vec<(String, usize)> = keys
        .iter()
        .enumerate()
        .map(|(i, k)| (k.to_string(), i))
        .collect();

    let mut table = HashTable::with_buckets(5).unwrap();
    for (k, v) in &pairs {
        table.put(k.clone(), *v);
    }
    assert_eq!(table.len(), pairs.len());
    for (k, v) in &pairs {
        assert_eq!(table.get(k), Some(v));
    }

    for (k, _) in pairs.iter().step_by(2) {
        assert!(table.remove(k));
        assert!(!table.contains(k));
        assert!(!table.remove(k));
    }
    for (k, v) in pairs.iter().skip(1).step_by(2) {
        assert_eq!(table.get(k), Some(v));
    }
    assert_eq!(table.len(), pairs.len() / 2);
}

#[test]
fn anagrams_collide_and_chain() {
    let mut table = HashTable::new();
    table.put("listen".to_string(), 1);
    table.put("silent".to_string(), 2);
    table.put("enlist".to_string(), 3);
    let bucket = table.bucket_of(&"listen".to_string());
    assert_eq!(table.chain_lengths()[bucket], 3);
    assert_eq!(table.get(&"silent".to_string()), Some(&2));
    assert_eq!(table.get(&"tinsel".to_string()), None);
}

#[test]
fn get_mut_updates_in_place() {
    let mut table = HashTable::new();
    table.put('x', vec![1]);
    if let Some(v) = table.get_mut(&'x') {
        v.push(2);
    }
    assert_eq!(table.get(&'x'), Some(&vec![1, 2]));
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct Point {
    x: i32,
    y: i32,
}

impl TableKey for Point {
    fn bucket_index(&self, buckets: usize) -> usize {
        std_bucket_index(self, buckets)
    }
}

#[test]
fn custom_keys_use_the_standard_hasher() {
    let mut table = HashTable::with_buckets(3).unwrap();
    table.put(Point { x: 1, y: 2 }, "a");
    table.put(Point { x: 2, y: 1 }, "b");
    assert_eq!(table.get(&Point { x: 1, y: 2 }), Some(&"a"));
    assert!(table.bucket_of(&Point { x: 5, y: 5 }) < 3);
    assert_eq!(table.keys().count(), 2);
}

#[test]
fn display_renders_entries_in_bucket_order() {
    let mut table = HashTable::with_buckets(4).unwrap();
    table.put(5u8, "five");
    table.put(0u8, "zero");
    table.put(4u8, "four");
    assert_eq!(table.to_string(), "{0: zero, 4: four, 5: five}");
}

fn assert_hash_is_stable<K: Hash + ?Sized>(key: &K) {
    assert_eq!(std_bucket_index(key, 17), std_bucket_index(key, 17));
}

#[test]
fn std_bucket_index_is_deterministic_within_a_process() {
    assert_hash_is_stable("text");
    assert_hash_is_stable(&(1u8, 2u16));
}
