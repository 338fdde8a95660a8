//! Face adjacency.

use std::collections::{BTreeSet, HashMap};

use pc::geom::{Edge, Tri};
use tracing::{debug, warn};

/// Undirected graph connecting faces that share an edge.
///
/// Two faces are adjacent if they have two vertex indices in common. In a
/// closed manifold mesh every edge borders exactly two faces, so each
/// triangle has at most three neighbors. If an edge borders k > 2 faces, all
/// of them are pairwise adjacent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighbors: Vec<BTreeSet<usize>>,
}

impl AdjacencyGraph {
    /// Builds the adjacency graph of `faces`.
    ///
    /// # Examples
    /// ```
    /// use pc::geom::tri;
    /// use polychrome_geom::AdjacencyGraph;
    ///
    /// // A quad split into two triangles
    /// let g = AdjacencyGraph::new(&[tri(0, 1, 2), tri(0, 2, 3)]);
    /// assert!(g.are_adjacent(0, 1));
    /// assert_eq!(g.degree(0), 1);
    /// ```
    pub fn new(faces: &[Tri<usize>]) -> Self {
        let mut by_edge: HashMap<Edge<usize>, Vec<usize>> =
            HashMap::with_capacity(3 * faces.len() / 2);
        for (i, f) in faces.iter().enumerate() {
            for e in f.edges() {
                let fs = by_edge.entry(e).or_default();
                // A degenerate face may list the same edge twice
                if fs.last() != Some(&i) {
                    fs.push(i);
                }
            }
        }

        let mut neighbors = vec![BTreeSet::new(); faces.len()];
        let mut non_manifold = 0;
        for (e, fs) in &by_edge {
            if fs.len() > 2 {
                non_manifold += 1;
                warn!(
                    edge = ?(e.lo(), e.hi()),
                    faces = ?fs,
                    "edge shared by more than two faces"
                );
            }
            for (k, &a) in fs.iter().enumerate() {
                for &b in &fs[k + 1..] {
                    neighbors[a].insert(b);
                    neighbors[b].insert(a);
                }
            }
        }
        debug!(
            faces = faces.len(),
            edges = by_edge.len(),
            non_manifold,
            "built face adjacency"
        );
        Self { neighbors }
    }

    /// Returns the number of faces (nodes) in `self`.
    pub fn face_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns the faces adjacent to `face`, in ascending order.
    ///
    /// # Panics
    /// If `face` ≥ `self.face_count()`.
    pub fn neighbors(&self, face: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors[face].iter().copied()
    }

    /// Returns the number of faces adjacent to `face`.
    ///
    /// # Panics
    /// If `face` ≥ `self.face_count()`.
    pub fn degree(&self, face: usize) -> usize {
        self.neighbors[face].len()
    }

    /// Returns the largest degree of any face, or 0 if there are no faces.
    pub fn max_degree(&self) -> usize {
        self.neighbors.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Returns whether faces `a` and `b` share an edge.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors.get(a).is_some_and(|ns| ns.contains(&b))
    }

    /// Returns the number of adjacent face pairs.
    pub fn pair_count(&self) -> usize {
        self.neighbors.iter().map(BTreeSet::len).sum::<usize>() / 2
    }
}
