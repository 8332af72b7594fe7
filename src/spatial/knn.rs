//! Brute-force nearest neighbor search over embeddings.
//!
//! No index structure — the candidate set is small and rebuilt per query,
//! so O(n) distance evaluations plus an O(n log n) sort is acceptable.

use serde::Serialize;

use super::cosine_distance;

/// Anything with a name and an embedding can be ranked.
pub trait Candidate {
    fn name(&self) -> &str;
    fn embedding(&self) -> &[f32];
}

/// One ranked neighbor.
#[derive(Debug, Clone, Serialize)]
pub struct Neighbor {
    pub name: String,
    pub distance: f32,
}

/// Rank `candidates` by ascending cosine distance to `target` and keep the
/// nearest `k`.
///
/// The sort is stable, so ties keep input order. `k` larger than the
/// candidate count returns everything. The target itself is not excluded if
/// present among the candidates — that is the caller's call.
pub fn find_neighbors<C: Candidate>(target: &[f32], candidates: &[C], k: usize) -> Vec<Neighbor> {
    let mut neighbors: Vec<Neighbor> = candidates
        .iter()
        .map(|candidate| Neighbor {
            name: candidate.name().to_string(),
            distance: cosine_distance(target, candidate.embedding()),
        })
        .collect();

    neighbors.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    neighbors.truncate(k);
    neighbors
}
