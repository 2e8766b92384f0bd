//! Single-pair shortest-path search: [`PathFinder`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use crate::heap::IndexedHeap;
use crate::traits::WeightedGraph;

/// Per-node search record: best known distance from the source, and the
/// predecessor on that path (`None` for the source itself). Created on
/// first discovery, tightened on relaxation, never removed mid-search.
#[derive(Clone, Copy, Debug)]
struct Visit<N> {
    dist: u64,
    parent: Option<N>,
}

/// Dijkstra shortest-path driver over a [`WeightedGraph`].
///
/// `PathFinder` owns its internal search state (the min-ordered
/// [`IndexedHeap`] frontier, the visit table and the edge scratch buffer)
/// and reuses it, so repeated searches incur no allocations after warm-up.
/// An instance runs one search at a time; concurrent searches need
/// independent instances.
pub struct PathFinder<N> {
    frontier: IndexedHeap<N, u64>,
    visits: HashMap<N, Visit<N>>,
    ebuf: Vec<(u32, N)>,
}

impl<N: Copy + Eq + Hash> PathFinder<N> {
    /// Create a new `PathFinder`.
    pub fn new() -> Self {
        Self {
            frontier: IndexedHeap::min(),
            visits: HashMap::new(),
            ebuf: Vec::with_capacity(8),
        }
    }

    /// Compute a minimal-total-weight path from `from` to `to`.
    ///
    /// Returns the full path including both endpoints (`vec![from]` when
    /// `from == to`), or `None` if `to` cannot be reached — including when
    /// it is not a node of the graph at all. `None` is never conflated
    /// with a valid path: every returned path has at least one node.
    ///
    /// Weights are non-negative by type, which Dijkstra's optimality
    /// argument requires.
    pub fn shortest_path<G>(&mut self, graph: &G, from: N, to: N) -> Option<Vec<N>>
    where
        G: WeightedGraph<Node = N>,
    {
        self.frontier.clear();
        self.visits.clear();

        // Seed the source at distance 0.
        let _ = self.frontier.insert(from, 0);
        self.visits.insert(
            from,
            Visit {
                dist: 0,
                parent: None,
            },
        );

        let mut ebuf = std::mem::take(&mut self.ebuf);

        let found = 'search: loop {
            let Ok(f) = self.frontier.pop() else {
                break 'search false;
            };
            if f == to {
                break 'search true;
            }
            let Some(fv) = self.visits.get(&f) else {
                continue;
            };
            let f_dist = fv.dist;

            ebuf.clear();
            graph.edges(f, &mut ebuf);

            for &(weight, w) in ebuf.iter() {
                let candidate = f_dist + u64::from(weight);
                match self.visits.entry(w) {
                    Entry::Vacant(slot) => {
                        // First discovery: a vacant visit slot means w was
                        // never queued.
                        slot.insert(Visit {
                            dist: candidate,
                            parent: Some(f),
                        });
                        let _ = self.frontier.insert(w, candidate);
                    }
                    Entry::Occupied(mut slot) => {
                        let wv = slot.get_mut();
                        if candidate < wv.dist {
                            // Strictly shorter route: w is still queued,
                            // since settled distances are final under
                            // non-negative weights.
                            wv.dist = candidate;
                            wv.parent = Some(f);
                            let _ = self.frontier.change_priority(&w, candidate);
                        }
                    }
                }
            }
        };
        self.ebuf = ebuf;

        if !found {
            log::debug!(
                "destination unreachable, frontier exhausted after {} nodes",
                self.visits.len()
            );
            return None;
        }
        let path = self.reconstruct(to);
        log::debug!("path found with {} nodes", path.len());
        Some(path)
    }

    /// The distance recorded for `n` by the most recent search, or `None`
    /// if the search never reached `n`.
    pub fn distance_to(&self, n: N) -> Option<u64> {
        self.visits.get(&n).map(|v| v.dist)
    }

    /// Walk backpointers from `to` back to the source, then reverse.
    fn reconstruct(&self, to: N) -> Vec<N> {
        let mut path = Vec::new();
        let mut cur = Some(to);
        while let Some(n) = cur {
            path.push(n);
            cur = self.visits.get(&n).and_then(|v| v.parent);
        }
        path.reverse();
        path
    }
}

impl<N: Copy + Eq + Hash> Default for PathFinder<N> {
    fn default() -> Self {
        Self::new()
    }
}
