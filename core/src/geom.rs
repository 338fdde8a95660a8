//! Basic geometric primitives.

pub use blueprint::{Blueprint, Builder};

pub mod blueprint;

/// Triangle, defined by three vertices.
///
/// In a [`Blueprint`] the vertices are indices into the vertex list, and
/// their order defines the winding of the face.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Tri<V>(pub [V; 3]);

/// An undirected edge between two vertices.
///
/// The endpoints are stored in ascending order, so `edge(a, b)` and
/// `edge(b, a)` compare and hash equal. This makes `Edge` directly usable as
/// a map key when grouping faces by shared edge.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Edge<T>(T, T);

/// A closed polygon given as a list of vertices, with each pair of
/// consecutive vertices, as well as the first and last vertex, sharing an edge.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Polygon<T>(pub Vec<T>);

/// Creates a `Tri` with the given vertices.
pub const fn tri<V>(a: V, b: V, c: V) -> Tri<V> {
    Tri([a, b, c])
}

/// Creates the canonical undirected `Edge` between `a` and `b`.
pub fn edge<T: Ord>(a: T, b: T) -> Edge<T> {
    if a <= b { Edge(a, b) } else { Edge(b, a) }
}

impl<T: Copy> Edge<T> {
    /// Returns the smaller endpoint of `self`.
    pub fn lo(&self) -> T {
        self.0
    }
    /// Returns the larger endpoint of `self`.
    pub fn hi(&self) -> T {
        self.1
    }
}

impl<V: Copy + Ord> Tri<V> {
    /// Returns the undirected edges [AB, BC, CA] of `self`.
    pub fn edges(&self) -> [Edge<V>; 3] {
        let [a, b, c] = self.0;
        [edge(a, b), edge(b, c), edge(c, a)]
    }
}

impl<V: Copy> Polygon<V> {
    /// Splits `self` into triangles sharing the first vertex.
    ///
    /// A polygon (v0, v1, …, vn) becomes (v0, v1, v2), (v0, v2, v3), …,
    /// (v0, vn-1, vn), preserving the winding. For a quad this is the split
    /// along the v0–v2 diagonal. Polygons with fewer than three vertices
    /// yield nothing.
    ///
    /// # Examples
    /// ```
    /// use polychrome_core::geom::{Polygon, tri};
    ///
    /// let quad = Polygon(vec![4, 5, 6, 7]);
    /// let tris: Vec<_> = quad.triangulate_fan().collect();
    /// assert_eq!(tris, [tri(4, 5, 6), tri(4, 6, 7)]);
    /// ```
    pub fn triangulate_fan(&self) -> impl Iterator<Item = Tri<V>> + '_ {
        let vs = &self.0;
        (2..vs.len()).map(move |i| tri(vs[0], vs[i - 1], vs[i]))
    }
}
