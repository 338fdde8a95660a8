//! Dual polyhedra.

use pc::geom::{Blueprint, Polygon, Tri};
use pc::math::point::centroid;

use super::Icosahedron;

/// Regular dodecahedron constructed as the dual of the [icosahedron].
///
/// Each face of the icosahedron becomes a vertex, placed at the face's
/// centroid and pushed out onto the unit sphere. Each icosahedron vertex
/// becomes a pentagon joining the centroids of its five incident faces,
/// ordered counterclockwise as seen from outside and fanned into three
/// triangles. The result has 20 vertices and 36 faces, like
/// [`Dodecahedron`][super::Dodecahedron], but in a different order.
///
/// [icosahedron]: Icosahedron
#[derive(Copy, Clone, Debug, Default)]
pub struct DualDodecahedron;

impl DualDodecahedron {
    /// Builds the dodecahedral blueprint.
    pub fn build(self) -> Blueprint {
        let ico = Icosahedron.build();

        let verts: Vec<_> = ico
            .faces
            .iter()
            .filter_map(|&Tri(vs)| centroid(vs.map(|i| ico.verts[i])))
            .map(|c| c.project_to_unit_sphere())
            .collect();

        let mut rings = vec![Vec::with_capacity(5); ico.verts.len()];
        for (f, Tri(vs)) in ico.faces.iter().enumerate() {
            for &v in vs {
                rings[v].push(f);
            }
        }

        let mut faces = Vec::with_capacity(3 * rings.len());
        for (v, mut ring) in rings.into_iter().enumerate() {
            // Local frame on the tangent plane at the icosahedron vertex
            let n = ico.verts[v].to_vec();
            let u = n.any_perpendicular();
            let w = n.cross(&u);

            let angle = |f: &usize| {
                let d = verts[*f].to_vec();
                d.dot(&w).atan2(d.dot(&u))
            };
            ring.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
            faces.extend(Polygon(ring).triangulate_fan());
        }
        Blueprint { verts, faces }
    }
}
