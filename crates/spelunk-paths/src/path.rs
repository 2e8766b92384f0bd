use crate::traits::WeightedGraph;

/// Sum the edge weights along the consecutive node pairs of `path`.
///
/// A one-node path has no edges and weighs 0. Returns `None` for an empty
/// slice, or when some consecutive pair is not connected by an edge.
/// Parallel edges contribute their smallest weight.
pub fn path_weight<G: WeightedGraph>(graph: &G, path: &[G::Node]) -> Option<u64> {
    if path.is_empty() {
        return None;
    }
    let mut ebuf = Vec::new();
    let mut total = 0u64;
    for pair in path.windows(2) {
        ebuf.clear();
        graph.edges(pair[0], &mut ebuf);
        let weight = ebuf
            .iter()
            .filter(|&&(_, other)| other == pair[1])
            .map(|&(w, _)| w)
            .min()?;
        total += u64::from(weight);
    }
    Some(total)
}
