//! The five Platonic solids: tetrahedron, cube, octahedron, dodecahedron,
//! and icosahedron.

use core::array::from_fn;

use pc::geom::{Blueprint, Polygon, Tri};
use pc::math::{Lerp, PHI, Point3, R_PHI, Vec3, pt3, vec3};

/// A regular tetrahedron.
///
/// A Platonic solid with four vertices and four equilateral triangle faces.
/// The tetrahedron is its own dual.
///
/// `Tetrahedron`'s vertices are the alternate corners
/// (1, 1, 1), (-1, -1, 1), (-1, 1, -1), and (1, -1, -1) of the cube [-1, 1]³.
#[derive(Copy, Clone, Debug, Default)]
pub struct Tetrahedron;

/// A rectangular cuboid.
///
/// Defined by the left-bottom-near and right-top-far vertices of the box.
///
/// Assuming the two defining vertices are (l, b, n) and (r, t, f),
/// the vertices of a `Cuboid` are, in order,
/// * (l, b, f), (r, b, f), (r, t, f), (l, t, f), and
/// * (l, b, n), (r, b, n), (r, t, n), (l, t, n).
///
/// Each of the six quads (v0, v1, v2, v3) is split along the v0–v2 diagonal
/// into the triangles (v0, v1, v2) and (v0, v2, v3).
#[derive(Copy, Clone, Debug)]
pub struct Cuboid {
    /// The left bottom near corner of the box.
    pub left_bot_near: Point3,
    /// The right top far corner of the box.
    pub right_top_far: Point3,
}

/// A Platonic solid with eight vertices and six square faces.
///
/// The dual of the cube is the [octahedron][Octahedron].
#[derive(Copy, Clone, Debug)]
pub struct Cube {
    pub side_len: f64,
}

/// Regular octahedron.
///
/// A Platonic solid with six vertices and eight equilateral triangle faces.
/// The dual of the octahedron is the [cube][Cube].
///
/// `Octahedron`'s vertices are at (0, ±1, 0), (±1, 0, 0), and (0, 0, ±1).
#[derive(Copy, Clone, Debug, Default)]
pub struct Octahedron;

/// Regular dodecahedron.
///
/// A Platonic solid with twenty vertices and twelve regular pentagonal faces.
/// Three edges meet at every vertex. The dual of the dodecahedron is the
/// [icosahedron][Icosahedron].
///
/// `Dodecahedron`'s vertices are at:
/// * (±1, ±1, ±1)
/// * (±φ, ±1/φ, 0)
/// * (0, ±φ, ±1/φ)
/// * (±1/φ, 0, ±φ)
///
/// where φ ≈ 1.618 is the golden ratio constant. Each pentagon is fanned
/// into three triangles from its first vertex.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dodecahedron;

/// Regular icosahedron.
///
/// A Platonic solid with twelve vertices and twenty equilateral triangle
/// faces. Five edges meet at every vertex. The dual of the icosahedron is
/// the [dodecahedron][Dodecahedron].
///
/// `Icosahedron`'s vertices are at:
/// * (±1, 0, ±φ)
/// * (±φ, ±1, 0)
/// * (0, ±φ, ±1),
///
/// where φ ≈ 1.618 is the golden ratio constant, scaled to unit length.
#[derive(Copy, Clone, Debug, Default)]
pub struct Icosahedron;

/// Copies constant tables into a fresh blueprint.
fn from_tables(coords: &[Point3], faces: &[[usize; 3]]) -> Blueprint {
    Blueprint {
        verts: coords.to_vec(),
        faces: faces.iter().copied().map(Tri).collect(),
    }
}

/// Fans each polygon in `faces` into triangles.
fn from_polygons<const N: usize>(
    verts: Vec<Point3>,
    faces: &[[usize; N]],
) -> Blueprint {
    let faces = faces
        .iter()
        .flat_map(|vs| Polygon(vs.to_vec()).triangulate_fan().collect::<Vec<_>>())
        .collect();
    Blueprint { verts, faces }
}

impl Tetrahedron {
    const COORDS: [Point3; 4] = [
        pt3(1.0, 1.0, 1.0),
        pt3(-1.0, -1.0, 1.0),
        pt3(-1.0, 1.0, -1.0),
        pt3(1.0, -1.0, -1.0),
    ];
    const FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]];

    /// Builds the tetrahedral blueprint.
    pub fn build(self) -> Blueprint {
        from_tables(&Self::COORDS, &Self::FACES)
    }
}

impl Cuboid {
    const COORDS: [Vec3; 8] = [
        // far
        vec3(0.0, 0.0, 1.0),
        vec3(1.0, 0.0, 1.0),
        vec3(1.0, 1.0, 1.0),
        vec3(0.0, 1.0, 1.0),
        // near
        vec3(0.0, 0.0, 0.0),
        vec3(1.0, 0.0, 0.0),
        vec3(1.0, 1.0, 0.0),
        vec3(0.0, 1.0, 0.0),
    ];
    #[rustfmt::skip]
    const QUADS: [[usize; 4]; 6] = [
        [0, 1, 2, 3], // far
        [4, 5, 6, 7], // near
        [3, 2, 6, 7], // top
        [0, 1, 5, 4], // bottom
        [0, 4, 7, 3], // left
        [1, 5, 6, 2], // right
    ];

    /// Returns a new `Cuboid` with the given opposite vertices.
    pub fn new(left_bot_near: Point3, right_top_far: Point3) -> Self {
        Self { left_bot_near, right_top_far }
    }

    /// Builds the cuboid blueprint.
    pub fn build(self) -> Blueprint {
        let verts = Self::COORDS
            .iter()
            .map(|c| {
                let [l, r] = [self.left_bot_near, self.right_top_far];
                Point3::from(from_fn(|i| l.0[i].lerp(&r.0[i], c.0[i])))
            })
            .collect();
        from_polygons(verts, &Self::QUADS)
    }
}

impl Default for Cube {
    /// Returns the cube [-1, 1]³.
    fn default() -> Self {
        Self { side_len: 2.0 }
    }
}

impl Cube {
    /// Builds the cube blueprint, centered at the origin.
    pub fn build(self) -> Blueprint {
        let dim = self.side_len / 2.0;
        Cuboid::new(pt3(-dim, -dim, -dim), pt3(dim, dim, dim)).build()
    }
}

impl Octahedron {
    const COORDS: [Point3; 6] = [
        pt3(0.0, 1.0, 0.0),
        pt3(0.0, -1.0, 0.0),
        pt3(1.0, 0.0, 0.0),
        pt3(-1.0, 0.0, 0.0),
        pt3(0.0, 0.0, 1.0),
        pt3(0.0, 0.0, -1.0),
    ];
    #[rustfmt::skip]
    const FACES: [[usize; 3]; 8] = [
        // top
        [0, 2, 4], [0, 4, 3], [0, 3, 5], [0, 5, 2],
        // bottom
        [1, 4, 2], [1, 3, 4], [1, 5, 3], [1, 2, 5],
    ];

    /// Builds the octahedral blueprint.
    pub fn build(self) -> Blueprint {
        from_tables(&Self::COORDS, &Self::FACES)
    }
}

impl Dodecahedron {
    #[rustfmt::skip]
    const COORDS: [Point3; 20] = [
        // -X
        pt3(-PHI, -R_PHI, 0.0), pt3(-PHI,  R_PHI, 0.0),
        // +X
        pt3( PHI, -R_PHI, 0.0), pt3( PHI,  R_PHI, 0.0),
        // -Y
        pt3(0.0, -PHI, -R_PHI), pt3(0.0, -PHI,  R_PHI),
        // +Y
        pt3(0.0,  PHI, -R_PHI), pt3(0.0,  PHI,  R_PHI),
        // -Z
        pt3(-R_PHI, 0.0, -PHI), pt3( R_PHI, 0.0, -PHI),
        // +Z
        pt3(-R_PHI, 0.0,  PHI), pt3( R_PHI, 0.0,  PHI),

        // Corner verts, one per octant
        pt3(-1.0, -1.0, -1.0),
        pt3(-1.0, -1.0,  1.0),
        pt3(-1.0,  1.0, -1.0),
        pt3(-1.0,  1.0,  1.0),
        pt3( 1.0, -1.0, -1.0),
        pt3( 1.0, -1.0,  1.0),
        pt3( 1.0,  1.0, -1.0),
        pt3( 1.0,  1.0,  1.0),
    ];
    #[rustfmt::skip]
    const FACES: [[usize; 5]; 12] = [
        [ 0,  1, 14, 8, 12], [ 1, 0, 13, 10, 15],
        [ 3,  2, 16, 9, 18], [ 2, 3, 19, 11, 17],
        [ 4,  5, 13, 0, 12], [ 5, 4, 16,  2, 17],
        [ 7,  6, 14, 1, 15], [ 6, 7, 19,  3, 18],
        [ 8,  9, 16, 4, 12], [ 9, 8, 14,  6, 18],
        [11, 10, 13, 5, 17], [10, 11, 19, 7, 15],
    ];

    /// Builds the dodecahedral blueprint.
    pub fn build(self) -> Blueprint {
        from_polygons(Self::COORDS.to_vec(), &Self::FACES)
    }
}

impl Icosahedron {
    #[rustfmt::skip]
    const COORDS: [Vec3; 12] = [
        vec3(-PHI, 0.0, -1.0), vec3(-PHI, 0.0, 1.0), // -X
        vec3( PHI, 0.0, -1.0), vec3( PHI, 0.0, 1.0), // +X

        vec3(-1.0, -PHI, 0.0), vec3(1.0, -PHI, 0.0), // -Y
        vec3(-1.0,  PHI, 0.0), vec3(1.0,  PHI, 0.0), // +Y

        vec3(0.0, -1.0, -PHI), vec3(0.0, 1.0, -PHI), // -Z
        vec3(0.0, -1.0,  PHI), vec3(0.0, 1.0,  PHI), // +Z
    ];
    #[rustfmt::skip]
    const FACES: [[usize; 3]; 20] = [
        [0,  4,  1], [0,  1,  6], // -X
        [2,  3,  5], [2,  7,  3], // +X
        [4,  8,  5], [4,  5, 10], // -Y
        [6,  7,  9], [6,  11, 7], // +Y
        [8,  0,  9], [8,  9,  2], // -Z
        [10, 11, 1], [10, 3, 11], // +Z

        // Corner faces, one per octant
        [0, 8, 4], [1,  4, 10], // -X-Y -Z,+Z
        [0, 6, 9], [1, 11,  6], // -X+Y   "
        [2, 5, 8], [3, 10,  5], // +X-Y   "
        [2, 9, 7], [3,  7, 11], // +X+Y   "
    ];

    /// Builds the icosahedral blueprint.
    pub fn build(self) -> Blueprint {
        let verts = Self::COORDS.map(|c| c.normalize().to_pt());
        from_tables(&verts, &Self::FACES)
    }
}

#[cfg(test)]
mod tests {
    use pc::assert_approx_eq;
    use pc::geom::tri;

    use super::*;

    #[test]
    fn tetrahedron_tables() {
        let bp = Tetrahedron.build();
        assert_eq!(bp.verts.len(), 4);
        assert_eq!(
            bp.faces,
            [tri(0, 1, 2), tri(0, 2, 3), tri(0, 3, 1), tri(1, 3, 2)]
        );
    }

    #[test]
    fn cube_quads_split_along_first_diagonal() {
        let bp = Cube::default().build();
        assert_eq!(bp.verts.len(), 8);
        assert_eq!(bp.faces.len(), 12);
        assert_eq!(bp.faces[0..2], [tri(0, 1, 2), tri(0, 2, 3)]);
        assert_eq!(bp.faces[10..12], [tri(1, 5, 6), tri(1, 6, 2)]);
        assert_eq!(bp.verts[0], pt3(-1.0, -1.0, 1.0));
        assert_eq!(bp.verts[6], pt3(1.0, 1.0, -1.0));
    }

    #[test]
    fn cuboid_spans_corners() {
        let bp = Cuboid::new(pt3(-1.0, -0.5, 0.0), pt3(1.0, 0.5, 3.0)).build();
        assert_eq!(bp.verts[4], pt3(-1.0, -0.5, 0.0));
        assert_eq!(bp.verts[2], pt3(1.0, 0.5, 3.0));
        assert_eq!(bp.edge_count(), 18);
    }

    #[test]
    fn octahedron_vertices_are_unit_axes() {
        let bp = Octahedron.build();
        assert_eq!(bp.faces.len(), 8);
        for v in &bp.verts {
            assert_eq!(v.norm(), 1.0);
        }
    }

    #[test]
    fn dodecahedron_has_36_faces_on_common_sphere() {
        let bp = Dodecahedron.build();
        assert_eq!(bp.verts.len(), 20);
        assert_eq!(bp.faces.len(), 36);
        for v in &bp.verts {
            assert_approx_eq!(v.norm(), 3.0_f64.sqrt());
        }
    }

    #[test]
    fn icosahedron_vertices_are_unit_length() {
        let bp = Icosahedron.build();
        assert_eq!(bp.verts.len(), 12);
        assert_eq!(bp.faces.len(), 20);
        for v in &bp.verts {
            assert_approx_eq!(v.norm(), 1.0);
        }
    }

    #[test]
    fn builds_are_independent() {
        let a = Icosahedron.build();
        let mut b = Icosahedron.build();
        assert_eq!(a, b);
        b.verts[0] = pt3(9.0, 9.0, 9.0);
        b.faces.clear();
        assert_ne!(a, b);
        assert_eq!(a, Icosahedron.build());
    }
}
