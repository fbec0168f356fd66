//! Various types related to tree searching.

/// The vertex id type.
///
/// Vertices are numbered `1..=n`, so `0` can serve as the "no vertex" marker.
pub type VId = usize;

/// The "no vertex" marker used by owner arrays.
pub const NIL: VId = 0;
