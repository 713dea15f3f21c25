//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::HashMap;
use std::hash::Hash;

// == List Node ==
#[derive(Debug)]
struct Node<K> {
    key: K,
    /// Neighbour closer to the most recently used end
    prev: Option<usize>,
    /// Neighbour closer to the least recently used end
    next: Option<usize>,
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys live in a doubly-linked list threaded through a slab of nodes:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// An index from key to slot makes `touch` and `evict_oldest` O(1).
/// Freed slots are recycled so the slab never outgrows the peak key count.
#[derive(Debug)]
pub struct LruTracker<K> {
    nodes: Vec<Option<Node<K>>>,
    free: Vec<usize>,
    index: HashMap<K, usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<K> Default for LruTracker<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            head: None,
            tail: None,
        }
    }
}

impl<K: Hash + Eq + Clone> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as recently used (moves to head).
    ///
    /// Unknown keys are inserted at the head.
    pub fn touch(&mut self, key: &K) {
        if let Some(&slot) = self.index.get(key) {
            if self.head != Some(slot) {
                self.unlink(slot);
                self.push_front(slot);
            }
            return;
        }

        let node = Node {
            key: key.clone(),
            prev: None,
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };
        self.index.insert(key.clone(), slot);
        self.push_front(slot);
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        let slot = self.tail?;
        self.unlink(slot);
        let node = self.release(slot)?;
        self.index.remove(&node.key);
        Some(node.key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.tail.and_then(|slot| self.node(slot)).map(|node| &node.key)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Iterate ==
    /// Iterates keys from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            tracker: self,
            cursor: self.head,
        }
    }

    fn node(&self, slot: usize) -> Option<&Node<K>> {
        self.nodes.get(slot).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<K>> {
        self.nodes.get_mut(slot).and_then(Option::as_mut)
    }

    /// Detaches a slot from the list, patching its neighbours and the ends.
    fn unlink(&mut self, slot: usize) {
        let (prev, next) = match self.node(slot) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(slot) {
            node.prev = None;
            node.next = None;
        }
    }

    fn push_front(&mut self, slot: usize) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(slot) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(h) => {
                if let Some(node) = self.node_mut(h) {
                    node.prev = Some(slot);
                }
            }
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
    }

    fn release(&mut self, slot: usize) -> Option<Node<K>> {
        let node = self.nodes.get_mut(slot)?.take();
        if node.is_some() {
            self.free.push(slot);
        }
        node
    }
}

// == Recency Iterator ==
/// Iterator over tracked keys, most recently used first.
pub struct Iter<'a, K> {
    tracker: &'a LruTracker<K>,
    cursor: Option<usize>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let tracker = self.tracker;
        let slot = self.cursor?;
        let node = tracker.nodes.get(slot)?.as_ref()?;
        self.cursor = node.next;
        Some(&node.key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn order(lru: &LruTracker<&'static str>) -> Vec<&'static str> {
        lru.iter().copied().collect()
    }

    #[test]
    fn test_lru_new() {
        let lru: LruTracker<String> = LruTracker::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.peek_oldest(), None);
    }

    #[test]
    fn test_lru_touch_new_key() {
        let mut lru = LruTracker::new();

        lru.touch(&"key1");
        lru.touch(&"key2");
        lru.touch(&"key3");

        assert_eq!(lru.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(lru.peek_oldest(), Some(&"key1"));
        assert_eq!(order(&lru), vec!["key3", "key2", "key1"]);
    }

    #[test]
    fn test_lru_touch_existing_key() {
        let mut lru = LruTracker::new();

        lru.touch(&"key1");
        lru.touch(&"key2");
        lru.touch(&"key3");

        // Touch key1 again - should move to head
        lru.touch(&"key1");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some(&"key2"));
        assert_eq!(order(&lru), vec!["key1", "key3", "key2"]);
    }

    #[test]
    fn test_lru_touch_middle_key() {
        let mut lru = LruTracker::new();

        lru.touch(&"a");
        lru.touch(&"b");
        lru.touch(&"c");
        lru.touch(&"b");

        assert_eq!(order(&lru), vec!["b", "c", "a"]);
        assert_eq!(lru.peek_oldest(), Some(&"a"));
    }

    #[test]
    fn test_lru_evict_oldest() {
        let mut lru = LruTracker::new();

        lru.touch(&"key1");
        lru.touch(&"key2");
        lru.touch(&"key3");

        assert_eq!(lru.evict_oldest(), Some("key1"));
        assert_eq!(lru.len(), 2);
        assert_eq!(order(&lru), vec!["key3", "key2"]);

        assert_eq!(lru.evict_oldest(), Some("key2"));
        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_lru_evict_empty() {
        let mut lru: LruTracker<u32> = LruTracker::new();
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_lru_order_after_multiple_touches() {
        let mut lru = LruTracker::new();

        lru.touch(&"a");
        lru.touch(&"b");
        lru.touch(&"c");

        lru.touch(&"a");
        lru.touch(&"c");
        lru.touch(&"b");

        // head=[b, c, a]=tail
        assert_eq!(lru.evict_oldest(), Some("a"));
        assert_eq!(lru.evict_oldest(), Some("c"));
        assert_eq!(lru.evict_oldest(), Some("b"));
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_touch_same_key_multiple_times() {
        let mut lru = LruTracker::new();

        lru.touch(&"key1");
        lru.touch(&"key1");
        lru.touch(&"key1");

        assert_eq!(lru.len(), 1);
        assert_eq!(lru.evict_oldest(), Some("key1"));
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_slots_are_reused() {
        let mut lru = LruTracker::new();

        for i in 0..4u32 {
            lru.touch(&i);
        }
        for round in 0..10u32 {
            lru.evict_oldest();
            lru.touch(&(100 + round));
        }

        assert_eq!(lru.len(), 4);
        assert_eq!(lru.nodes.len(), 4);
        assert_eq!(
            lru.iter().copied().collect::<Vec<_>>(),
            vec![109, 108, 107, 106]
        );
    }
}
