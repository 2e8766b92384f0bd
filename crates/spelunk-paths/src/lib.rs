//! Shortest-path search over weighted undirected graphs.
//!
//! This crate provides the two pieces of the *spelunk* search core:
//!
//! - [`IndexedHeap`] — a binary heap of distinct values with mutable
//!   priorities: O(log n) insert, pop and in-place priority change, O(1)
//!   peek and membership. Min- or max-ordered.
//! - [`PathFinder`] — single-pair Dijkstra search driven by an
//!   [`IndexedHeap`] frontier ([`PathFinder::shortest_path`]), plus the
//!   [`path_weight`] helper for summing a path's edge weights.
//!
//! Graphs are consumed through the [`WeightedGraph`] trait, so any node
//! representation with value identity works; `spelunk_graph::Graph`
//! implements it out of the box.
//!
//! Edge weights are `u32` and distances accumulate in `u64`, so all
//! comparisons are exact. Non-negative weights are a precondition of the
//! search (encoded by the unsigned weight type): Dijkstra's optimality
//! argument does not hold for negative edges.

mod dijkstra;
mod heap;
mod path;
mod traits;

pub use dijkstra::PathFinder;
pub use heap::{HeapError, IndexedHeap, Mode};
pub use path::path_weight;
pub use traits::WeightedGraph;
