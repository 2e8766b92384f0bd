//! Indexed binary heap: [`IndexedHeap`].
//!
//! A heap of distinct values with mutable priorities. Alongside the usual
//! insert/peek/pop it supports [`IndexedHeap::change_priority`], which
//! relocates a value in place in O(log n) — the operation Dijkstra's
//! decrease-key step needs.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

/// Whether the root holds the smallest or the largest priority.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The root is the entry with minimal priority.
    Min,
    /// The root is the entry with maximal priority.
    Max,
}

/// Caller-recoverable heap errors. A failed operation leaves the heap
/// exactly as it was before the call.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum HeapError {
    /// Inserting a value that is already present.
    #[error("value is already in the heap")]
    Duplicate,
    /// Changing the priority of a value that is not present.
    #[error("value is not in the heap")]
    NotFound,
    /// Peeking or popping an empty heap.
    #[error("heap is empty")]
    Empty,
}

#[derive(Clone, Debug)]
struct Entry<V, P> {
    value: V,
    priority: P,
}

/// A binary heap of distinct values, each carrying a mutable priority.
///
/// Invariant: `entries` is a complete binary tree in array form (parent of
/// `k` is `(k - 1) / 2`), no entry's priority ranks strictly above its
/// parent's, all values are distinct, and `index` maps every stored value
/// to its current position in `entries` — nothing else is in `index`.
/// Both structures are owned exclusively by the heap and only ever move
/// entries through [`Self::swap`], so they cannot drift apart.
///
/// `V` needs value equality and hashing (it doubles as the index-map key);
/// `P` is any partially ordered copyable priority — integer or float.
/// Incomparable priorities (e.g. NaN) rank as equal.
pub struct IndexedHeap<V, P> {
    mode: Mode,
    entries: Vec<Entry<V, P>>,
    index: HashMap<V, usize>,
}

impl<V, P> IndexedHeap<V, P>
where
    V: Clone + Eq + Hash,
    P: PartialOrd + Copy,
{
    /// Create an empty heap with the given ordering mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create an empty min-ordered heap.
    pub fn min() -> Self {
        Self::new(Mode::Min)
    }

    /// Create an empty max-ordered heap.
    pub fn max() -> Self {
        Self::new(Mode::Max)
    }

    /// Create an empty heap with room for `capacity` entries.
    pub fn with_capacity(mode: Mode, capacity: usize) -> Self {
        Self {
            mode,
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// The ordering mode of this heap.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `value` is in the heap. O(1).
    #[inline]
    pub fn contains(&self, value: &V) -> bool {
        self.index.contains_key(value)
    }

    /// The current priority of `value`, if present. O(1).
    pub fn priority_of(&self, value: &V) -> Option<P> {
        self.index.get(value).map(|&h| self.entries[h].priority)
    }

    /// Add `value` with the given priority.
    ///
    /// Fails with [`HeapError::Duplicate`] if the value is already present;
    /// callers rely on this to tell an already-discovered value apart from
    /// a fresh one. Expected O(log n); amortized O(1) growth.
    pub fn insert(&mut self, value: V, priority: P) -> Result<(), HeapError> {
        if self.index.contains_key(&value) {
            return Err(HeapError::Duplicate);
        }
        let h = self.entries.len();
        self.index.insert(value.clone(), h);
        self.entries.push(Entry { value, priority });
        self.bubble_up(h);
        Ok(())
    }

    /// The best-ranked value (minimal priority in min mode, maximal in max
    /// mode), without removing it. O(1).
    ///
    /// Fails with [`HeapError::Empty`] if the heap has no entries.
    pub fn peek(&self) -> Result<&V, HeapError> {
        self.entries
            .first()
            .map(|e| &e.value)
            .ok_or(HeapError::Empty)
    }

    /// Remove and return the best-ranked value. Expected O(log n).
    ///
    /// Fails with [`HeapError::Empty`] if the heap has no entries.
    pub fn pop(&mut self) -> Result<V, HeapError> {
        let last = match self.entries.len() {
            0 => return Err(HeapError::Empty),
            n => n - 1,
        };
        self.swap(0, last);
        let entry = self.entries.pop().ok_or(HeapError::Empty)?;
        self.index.remove(&entry.value);
        self.bubble_down(0);
        Ok(entry.value)
    }

    /// Change the priority of `value` in place. Expected O(log n).
    ///
    /// The entry bubbles up if the new priority ranks strictly better than
    /// the old one, down if strictly worse, and stays put on a tie.
    /// Fails with [`HeapError::NotFound`] if the value is absent.
    pub fn change_priority(&mut self, value: &V, priority: P) -> Result<(), HeapError> {
        let &h = self.index.get(value).ok_or(HeapError::NotFound)?;
        let old = std::mem::replace(&mut self.entries[h].priority, priority);
        match self.rank(priority, old) {
            Ordering::Greater => self.bubble_up(h),
            Ordering::Less => self.bubble_down(h),
            Ordering::Equal => {}
        }
        Ok(())
    }

    /// Empty the heap, keeping its allocations for reuse.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Iterator over `(value, priority)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, P)> {
        self.entries.iter().map(|e| (&e.value, e.priority))
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Three-way rank of priority `a` against `b` under the heap's mode:
    /// `Greater` means `a` belongs closer to the root than `b`.
    fn rank(&self, a: P, b: P) -> Ordering {
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self.mode {
            Mode::Min => ord.reverse(),
            Mode::Max => ord,
        }
    }

    /// [`Self::rank`] applied to the entries at indices `h` and `k`.
    #[inline]
    fn rank_at(&self, h: usize, k: usize) -> Ordering {
        self.rank(self.entries[h].priority, self.entries[k].priority)
    }

    /// Swap the entries at `h` and `k` and rewrite both index-map slots.
    ///
    /// Every structural move in the heap goes through here; the array and
    /// the index map are never mutated independently.
    fn swap(&mut self, h: usize, k: usize) {
        if h == k {
            return;
        }
        self.entries.swap(h, k);
        self.index.insert(self.entries[h].value.clone(), h);
        self.index.insert(self.entries[k].value.clone(), k);
    }

    /// Bubble the entry at `h` toward the root until its parent ranks at
    /// least as well. Ties stop the climb. Iterative: heap depth may exceed
    /// comfortable stack depth.
    fn bubble_up(&mut self, mut h: usize) {
        while h > 0 {
            let parent = (h - 1) / 2;
            if self.rank_at(h, parent) != Ordering::Greater {
                return;
            }
            self.swap(h, parent);
            h = parent;
        }
    }

    /// Bubble the entry at `h` away from the root until no child ranks
    /// strictly better. When both children rank equal, the left child wins.
    fn bubble_down(&mut self, mut h: usize) {
        loop {
            let left = 2 * h + 1;
            if left >= self.entries.len() {
                return;
            }
            let right = left + 1;
            let child = if right == self.entries.len() || self.rank_at(left, right) != Ordering::Less
            {
                left
            } else {
                right
            };
            if self.rank_at(h, child) != Ordering::Less {
                return;
            }
            self.swap(h, child);
            h = child;
        }
    }
}
