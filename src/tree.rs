//! The tree structure.

use crate::{
    error::{Err, Result},
    reader::TokenReader,
    types::VId,
};
use itertools::Itertools;
use std::io::BufRead;

/// An unweighted tree over vertices `1..=n`.
///
/// Stored as plain adjacency lists indexed by vertex id (slot 0 unused),
/// with degrees tracked alongside so the leaves can be enumerated without
/// touching the adjacency data.
pub struct Tree {
    adj: Vec<Vec<VId>>,
    deg: Vec<usize>,
    num_edges: usize,
}

impl Tree {
    /// Create a tree with `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n + 1],
            deg: vec![0; n + 1],
            num_edges: 0,
        }
    }

    /// Insert the undirected edge `(a, b)`.
    ///
    /// Returns `false` and leaves the tree untouched if either endpoint is
    /// outside `1..=n`.
    pub fn add_edge(&mut self, a: VId, b: VId) -> bool {
        if self.contains(a) && self.contains(b) {
            self.adj[a].push(b);
            self.adj[b].push(a);
            self.deg[a] += 1;
            self.deg[b] += 1;
            self.num_edges += 1;
            true
        } else {
            false
        }
    }

    /// The number of vertices.
    pub fn order(&self) -> usize {
        self.adj.len() - 1
    }

    /// The number of edges inserted so far.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn degree(&self, v: VId) -> Option<usize> {
        if self.contains(v) {
            Some(self.deg[v])
        } else {
            None
        }
    }

    pub fn neighbors(&self, v: VId) -> Option<&[VId]> {
        if self.contains(v) {
            Some(&self.adj[v])
        } else {
            None
        }
    }

    /// An iterator over the leaves (degree-1 vertices) in increasing id order.
    pub fn leaves(&self) -> Leaves {
        Leaves {
            deg: &self.deg,
            v: 0,
        }
    }

    fn contains(&self, v: VId) -> bool {
        1 <= v && v <= self.order()
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tree {{ order: {}, edges: {}, leaves: [{}] }}",
            self.order(),
            self.num_edges(),
            self.leaves().format(", ")
        )
    }
}

/// An iterator over the leaves of a tree.
pub struct Leaves<'a> {
    deg: &'a [usize],
    v: VId,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = VId;

    fn next(&mut self) -> Option<Self::Item> {
        while self.v + 1 < self.deg.len() {
            self.v += 1;
            if self.deg[self.v] == 1 {
                return Some(self.v);
            }
        }
        None
    }
}

/// Read `n - 1` edges from `tokens` and build the tree.
pub fn read_tree<R: BufRead>(tokens: &mut TokenReader<R>, n: usize) -> Result<Tree> {
    let mut tree = Tree::new(n);
    for _ in 1..n {
        let a = tokens.value()?;
        let b = tokens.value()?;
        if !tree.add_edge(a, b) {
            let vertex = if a == 0 || a > n { a } else { b };
            return Err(Err::EdgeOutOfRange { vertex, order: n });
        }
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::TokenReader;
    use std::io::Cursor;

    fn create_caterpillar() -> Tree {
        let mut tree = Tree::new(5);
        for (a, b) in vec![(1, 2), (2, 3), (3, 4), (3, 5)] {
            assert!(tree.add_edge(a, b));
        }
        tree
    }

    #[test]
    fn test_add_edge() {
        let mut tree = Tree::new(3);
        assert_eq!(tree.add_edge(1, 2), true);
        assert_eq!(tree.add_edge(2, 4), false);
        assert_eq!(tree.add_edge(0, 1), false);
        assert_eq!(tree.num_edges(), 1);
        assert_eq!(tree.degree(2), Some(1));
    }

    #[test]
    fn test_degrees() {
        let tree = create_caterpillar();
        assert_eq!(tree.degree(1), Some(1));
        assert_eq!(tree.degree(2), Some(2));
        assert_eq!(tree.degree(3), Some(3));
        assert_eq!(tree.degree(6), None);
    }

    #[test]
    fn test_neighbors() {
        let tree = create_caterpillar();
        assert_eq!(tree.neighbors(3), Some(&[2, 4, 5][..]));
        assert_eq!(tree.neighbors(0), None);
        assert_eq!(tree.neighbors(6), None);
    }

    #[test]
    fn test_leaves() {
        let tree = create_caterpillar();
        assert_eq!(tree.leaves().collect::<Vec<_>>(), vec![1, 4, 5]);
    }

    #[test]
    fn test_single_vertex_has_no_leaves() {
        let tree = Tree::new(1);
        assert_eq!(tree.leaves().count(), 0);
    }

    #[test]
    fn test_display() {
        let tree = create_caterpillar();
        assert_eq!(
            tree.to_string(),
            "Tree { order: 5, edges: 4, leaves: [1, 4, 5] }"
        );
    }

    #[test]
    fn test_read_tree() {
        let mut tokens = TokenReader::new(Cursor::new("1 2\n2 3\n3 4\n3 5\n"));
        let tree = read_tree(&mut tokens, 5).unwrap();
        assert_eq!(tree.num_edges(), 4);
        assert_eq!(tree.leaves().collect::<Vec<_>>(), vec![1, 4, 5]);
    }

    #[test]
    fn test_read_tree_truncated() {
        let mut tokens = TokenReader::new(Cursor::new("1 2\n2"));
        assert!(matches!(
            read_tree(&mut tokens, 4),
            Err(Err::UnexpectedEof)
        ));
    }

    #[test]
    fn test_read_tree_out_of_range() {
        let mut tokens = TokenReader::new(Cursor::new("1 7\n"));
        match read_tree(&mut tokens, 3) {
            Err(Err::EdgeOutOfRange { vertex, order }) => {
                assert_eq!(vertex, 7);
                assert_eq!(order, 3);
            }
            _ => panic!("expected EdgeOutOfRange"),
        }
    }
}
