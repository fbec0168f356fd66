//! The multi-source wave search seeded from the leaves.

use crate::{
    tree::Tree,
    types::{VId, NIL},
};
use log::{debug, info};

/// Compute the length of the shortest cycle obtainable by adding one edge
/// between two leaves of `tree`.
///
/// Every leaf seeds a wave; the waves expand level by level, and each vertex
/// is owned by the wave that reaches it first. When the waves of two distinct
/// leaves meet across an edge `(u, v)`, the path from `owner(u)` to `owner(v)`
/// through that edge has `dist(u) + dist(v) + 1` edges, and the minimum over
/// all meeting edges is the shortest leaf-to-leaf path in the tree. Returns
/// `None` when no two distinct waves ever meet, which only happens for trees
/// with fewer than two leaves.
pub fn shortest_leaf_cycle(tree: &Tree) -> Option<usize> {
    let n = tree.order();
    let mut owner = vec![NIL; n + 1];
    let mut dist = vec![0usize; n + 1];
    let mut queue: Vec<VId> = Vec::with_capacity(n);
    for v in tree.leaves() {
        owner[v] = v;
        queue.push(v);
    }
    info!("{} leaves seed the search", queue.len());
    let mut best: Option<usize> = None;
    let mut head = 0;
    while head < queue.len() {
        let u = queue[head];
        head += 1;
        for &v in tree.neighbors(u).unwrap() {
            if owner[v] == NIL {
                owner[v] = owner[u];
                dist[v] = dist[u] + 1;
                queue.push(v);
            } else if owner[v] != owner[u] {
                let candidate = dist[u] + dist[v] + 1;
                debug!(
                    "waves {} and {} meet across edge ({}, {}): candidate {}",
                    owner[u], owner[v], u, v, candidate
                );
                best = Some(best.map_or(candidate, |best| best.min(candidate)));
            }
        }
    }
    best
}
