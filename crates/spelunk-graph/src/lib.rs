//! **spelunk-graph** — weighted undirected graph model (core types).
//!
//! This crate provides the graph types consumed by the *spelunk* search
//! crates: [`NodeId`] handles and an adjacency-list [`Graph`] of undirected
//! edges with non-negative integer weights.

pub mod graph;

pub use graph::{Graph, NodeId};
