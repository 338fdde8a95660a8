//! Indexed triangle meshes.

use crate::error::{Error, Result};
use crate::math::Point3;

use super::{Edge, Tri};

/// An indexed triangle mesh describing the surface of a solid.
///
/// A flat list of vertex positions plus a list of faces, each face a triplet
/// of indices into `verts`. Faces sharing an edge share the two vertex
/// indices of that edge, which is what lets the adjacency between faces be
/// recovered from the indices alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Blueprint {
    /// The vertex positions.
    pub verts: Vec<Point3>,
    /// The faces, with each face a triplet of indices to `verts`.
    /// The order of the indices defines the winding of the face.
    pub faces: Vec<Tri<usize>>,
}

/// Incrementally assembles a [`Blueprint`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    bp: Blueprint,
}

impl Blueprint {
    /// Creates a new blueprint with the given vertices and faces.
    ///
    /// # Examples
    /// ```
    /// use polychrome_core::geom::{Blueprint, tri};
    /// use polychrome_core::math::pt3;
    ///
    /// let verts = [
    ///     pt3(0.0, 0.0, 0.0),
    ///     pt3(1.0, 0.0, 0.0),
    ///     pt3(0.0, 1.0, 0.0),
    ///     pt3(0.0, 0.0, 1.0),
    /// ];
    /// let faces = [tri(0, 2, 1), tri(0, 1, 3), tri(0, 3, 2), tri(1, 2, 3)];
    ///
    /// let tetra = Blueprint::new(verts, faces).unwrap();
    /// assert_eq!(tetra.edge_count(), 6);
    /// ```
    /// # Errors
    /// If any vertex index in `faces` is ≥ the number of vertices, returns
    /// [`Error::IndexOutOfRange`].
    pub fn new<V, F>(verts: V, faces: F) -> Result<Self>
    where
        V: IntoIterator<Item = Point3>,
        F: IntoIterator<Item = Tri<usize>>,
    {
        let bp = Self {
            verts: verts.into_iter().collect(),
            faces: faces.into_iter().collect(),
        };
        bp.validate()?;
        Ok(bp)
    }

    /// Returns a new blueprint builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Checks that every face refers only to existing vertices.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] for the first offending index.
    pub fn validate(&self) -> Result<()> {
        check_indices(&self.faces, self.verts.len())
    }

    /// Returns the number of distinct undirected edges of `self`.
    pub fn edge_count(&self) -> usize {
        let mut es: Vec<Edge<usize>> =
            self.faces.iter().flat_map(Tri::edges).collect();
        es.sort_unstable();
        es.dedup();
        es.len()
    }

    /// Returns the Euler characteristic V − E + F of `self`.
    ///
    /// Equal to 2 for any closed surface topologically equivalent to a sphere.
    pub fn euler_characteristic(&self) -> i64 {
        let v = self.verts.len() as i64;
        let e = self.edge_count() as i64;
        let f = self.faces.len() as i64;
        v - e + f
    }

    /// Returns the three vertex positions of the face at index `i`.
    ///
    /// # Panics
    /// If `i` is out of range, or if `self` has not been validated.
    pub fn face_verts(&self, i: usize) -> [Point3; 3] {
        self.faces[i].0.map(|j| self.verts[j])
    }
}

/// Checks that every vertex index in `faces` is less than `len`.
///
/// # Errors
/// Returns [`Error::IndexOutOfRange`] for the first offending index.
pub fn check_indices(faces: &[Tri<usize>], len: usize) -> Result<()> {
    for (face, Tri(vs)) in faces.iter().enumerate() {
        if let Some(&index) = vs.iter().find(|&&i| i >= len) {
            return Err(Error::IndexOutOfRange { face, index, len });
        }
    }
    Ok(())
}

impl Builder {
    /// Appends a face with the given vertex indices.
    pub fn push_face(&mut self, a: usize, b: usize, c: usize) {
        self.bp.faces.push(Tri([a, b, c]));
    }

    /// Appends all the faces yielded by the given iterator.
    pub fn push_faces<Fs>(&mut self, faces: Fs)
    where
        Fs: IntoIterator<Item = [usize; 3]>,
    {
        self.bp.faces.extend(faces.into_iter().map(Tri));
    }

    /// Appends a vertex and returns its index.
    pub fn push_vert(&mut self, pos: Point3) -> usize {
        self.bp.verts.push(pos);
        self.bp.verts.len() - 1
    }

    /// Appends all the vertices yielded by the given iterator.
    pub fn push_verts<Vs>(&mut self, verts: Vs)
    where
        Vs: IntoIterator<Item = Point3>,
    {
        self.bp.verts.extend(verts);
    }

    /// Returns the number of vertices added so far.
    pub fn vert_count(&self) -> usize {
        self.bp.verts.len()
    }

    /// Returns the finished blueprint containing all the added faces and
    /// vertices.
    ///
    /// # Errors
    /// If any vertex index in the faces is out of range.
    pub fn build(self) -> Result<Blueprint> {
        self.bp.validate()?;
        Ok(self.bp)
    }
}
