//! Subdivision surfaces.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use pc::geom::{Blueprint, Edge, Tri, edge, tri};
use pc::math::Lerp;
use pc::{Error, Result};
use tracing::{debug, trace};

use super::{Icosahedron, MAX_SUBDIVISION};

/// Unit sphere approximated by recursively subdividing an icosahedron.
///
/// Each level of subdivision quadruples the number of faces: a sphere of
/// depth n has 20·4ⁿ faces and 10·4ⁿ + 2 vertices.
#[derive(Copy, Clone, Debug, Default)]
pub struct Icosphere {
    pub depth: u32,
}

impl Icosphere {
    /// Builds the icosphere blueprint.
    ///
    /// # Examples
    /// ```
    /// use polychrome_geom::solids::Icosphere;
    ///
    /// let bp = Icosphere { depth: 2 }.build().unwrap();
    /// assert_eq!(bp.faces.len(), 320);
    /// assert_eq!(bp.verts.len(), 162);
    /// ```
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `depth` exceeds
    /// [`MAX_SUBDIVISION`].
    pub fn build(self) -> Result<Blueprint> {
        if self.depth > MAX_SUBDIVISION {
            return Err(Error::invalid_arg(format!(
                "subdivision level {} exceeds maximum of {MAX_SUBDIVISION}",
                self.depth
            )));
        }
        let mut bp = Icosahedron.build();
        for level in 1..=self.depth {
            bp = subdivide(&bp);
            debug!(
                level,
                verts = bp.verts.len(),
                faces = bp.faces.len(),
                "subdivided sphere"
            );
        }
        Ok(bp)
    }
}

/// Performs one subdivision pass over a blueprint whose vertices lie on the
/// unit sphere.
///
/// Splits each triangle into four smaller triangles by creating a new vertex
/// at the midpoint of each edge and pushing it out onto the unit sphere.
///
/// ```text
///             v1
///             /\
///           /   \
///      m3 /______\ m1
///       / \      /\
///     /    \   /   \
///   /_______\/______\
/// v3        m2       v2
/// ```
/// Midpoints are cached by edge for the duration of the pass, so that the two
/// faces sharing an edge also share its midpoint vertex.
///
/// Every face of `bp` must refer to existing vertices.
fn subdivide(bp: &Blueprint) -> Blueprint {
    let mut verts = bp.verts.clone();
    let mut faces = Vec::with_capacity(4 * bp.faces.len());
    let mut cache: HashMap<Edge<usize>, usize> =
        HashMap::with_capacity(3 * bp.faces.len() / 2);
    let mut hits = 0usize;

    let mut midpoint = |i: usize, j: usize| match cache.entry(edge(i, j)) {
        Entry::Occupied(e) => {
            hits += 1;
            *e.get()
        }
        Entry::Vacant(e) => {
            let m = verts[i].midpoint(&verts[j]).project_to_unit_sphere();
            verts.push(m);
            *e.insert(verts.len() - 1)
        }
    };
    for &Tri([v1, v2, v3]) in &bp.faces {
        let [m1, m2, m3] = [midpoint(v1, v2), midpoint(v2, v3), midpoint(v3, v1)];
        faces.extend([
            tri(v1, m1, m3),
            tri(m1, v2, m2),
            tri(m3, m2, v3),
            tri(m1, m2, m3),
        ]);
    }
    trace!(hits, misses = cache.len(), "midpoint cache");

    Blueprint { verts, faces }
}

#[cfg(test)]
mod tests {
    use pc::assert_approx_eq;

    use super::*;

    #[test]
    fn depth_zero_is_icosahedron() {
        assert_eq!(Icosphere { depth: 0 }.build(), Ok(Icosahedron.build()));
    }

    #[test]
    fn counts_per_level() {
        for depth in 0..4 {
            let bp = Icosphere { depth }.build().unwrap();
            let n = 4usize.pow(depth);
            assert_eq!(bp.faces.len(), 20 * n);
            assert_eq!(bp.verts.len(), 10 * n + 2);
            assert_eq!(bp.euler_characteristic(), 2);
        }
    }

    #[test]
    fn subdivided_vertices_are_on_unit_sphere() {
        let bp = Icosphere { depth: 2 }.build().unwrap();
        for v in &bp.verts {
            assert_approx_eq!(v.norm(), 1.0);
        }
    }

    #[test]
    fn one_pass_splits_face_into_four() {
        let ico = Icosahedron.build();
        let bp = subdivide(&ico);
        let Tri([v1, v2, v3]) = ico.faces[0];
        let [a, b, c, d] = [bp.faces[0], bp.faces[1], bp.faces[2], bp.faces[3]];
        let (m1, m2, m3) = (a.0[1], b.0[2], a.0[2]);

        assert_eq!(a, tri(v1, m1, m3));
        assert_eq!(b, tri(m1, v2, m2));
        assert_eq!(c, tri(m3, m2, v3));
        assert_eq!(d, tri(m1, m2, m3));
        // The first face creates the first three new vertices
        assert_eq!([m1, m2, m3], [12, 13, 14]);
    }

    #[test]
    fn shared_edge_shares_midpoint() {
        let ico = Icosahedron.build();
        let bp = subdivide(&ico);
        // 12 original vertices plus one per edge
        assert_eq!(bp.verts.len(), 12 + 30);
    }

    #[test]
    fn too_deep_is_rejected() {
        let res = Icosphere { depth: MAX_SUBDIVISION + 1 }.build();
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }
}
