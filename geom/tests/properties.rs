use std::collections::{HashMap, HashSet};

use pc::assert_approx_eq;
use pc::geom::{Blueprint, Edge, tri};
use polychrome_geom::paint::greedy_coloring;
use polychrome_geom::solids::*;
use polychrome_geom::{AdjacencyGraph, color_faces, io};

fn all_blueprints() -> Vec<(&'static str, Blueprint)> {
    let mut bps = vec![
        ("tetrahedron", tetrahedron()),
        ("octahedron", octahedron()),
        ("cube", cube()),
        ("dodecahedron", dodecahedron()),
        ("dodecahedron_dual", dodecahedron_dual()),
        ("icosahedron", icosahedron()),
    ];
    for level in 0..4 {
        bps.push(("sphere", sphere(level).unwrap()));
    }
    bps
}

/// Returns how many faces border each edge.
fn edge_valences(bp: &Blueprint) -> HashMap<Edge<usize>, usize> {
    let mut res = HashMap::new();
    for f in &bp.faces {
        for e in f.edges() {
            *res.entry(e).or_default() += 1;
        }
    }
    res
}

#[test]
fn face_indices_are_in_range() {
    for (name, bp) in all_blueprints() {
        let n = bp.verts.len();
        for f in &bp.faces {
            assert!(f.0.iter().all(|&i| i < n), "{name}: {f:?}");
        }
    }
}

#[test]
fn every_solid_is_closed_manifold() {
    for (name, bp) in all_blueprints() {
        for (e, k) in edge_valences(&bp) {
            assert_eq!(k, 2, "{name}: edge {e:?} borders {k} faces");
        }
        assert_eq!(bp.euler_characteristic(), 2, "{name}");
    }
}

#[test]
fn faces_are_consistently_wound() {
    // Each directed edge appears once; its reverse belongs to the neighbor.
    // The cube keeps the quad order of the classic table, which mixes
    // windings, so it is left out.
    for (name, bp) in all_blueprints().into_iter().filter(|(n, _)| *n != "cube") {
        let mut directed = HashSet::new();
        for f in &bp.faces {
            let [a, b, c] = f.0;
            for de in [(a, b), (b, c), (c, a)] {
                assert!(directed.insert(de), "{name}: {de:?} twice");
            }
        }
    }
}

#[test]
fn tetrahedron_example() {
    let bp = tetrahedron();
    assert_eq!(bp.verts.len(), 4);
    assert_eq!(
        bp.faces,
        [tri(0, 1, 2), tri(0, 2, 3), tri(0, 3, 1), tri(1, 3, 2)]
    );
    let colors = color_faces(&bp.verts, &bp.faces).unwrap();
    assert_eq!(colors.assignment().class_of(0), Some(0));
    assert_eq!(colors.class_count(), 4);
}

#[test]
fn icosahedron_is_on_unit_sphere() {
    for v in icosahedron().verts {
        assert_approx_eq!(v.norm(), 1.0);
    }
}

#[test]
fn sphere_face_counts() {
    for n in 0..5 {
        let bp = sphere(n).unwrap();
        assert_eq!(bp.faces.len(), 20 * 4usize.pow(n as u32));
    }
}

#[test]
fn sphere_zero_is_icosahedron() {
    let s = sphere(0).unwrap();
    let ico = icosahedron();
    assert_eq!(s.faces, ico.faces);
    assert_eq!(s.verts, ico.verts);
}

#[test]
fn subdivided_sphere_has_unique_unit_vertices() {
    for n in 1..4 {
        let bp = sphere(n).unwrap();
        let mut seen = HashSet::new();
        for v in &bp.verts {
            assert_approx_eq!(v.norm(), 1.0);
            assert!(seen.insert(v.0.map(f64::to_bits)), "duplicate {v:?}");
        }
    }
}

#[test]
fn coloring_is_proper_for_every_solid() {
    for (name, bp) in all_blueprints() {
        let colors = color_faces(&bp.verts, &bp.faces).unwrap();
        let graph = AdjacencyGraph::new(&bp.faces);
        assert!(colors.assignment().is_proper(&graph), "{name}");

        let classes = colors.assignment().classes();
        for f in 0..bp.faces.len() {
            for nb in graph.neighbors(f) {
                assert_ne!(classes[f], classes[nb], "{name}: {f} and {nb}");
            }
        }
        assert!(colors.class_count() <= graph.max_degree() + 1, "{name}");
    }
}

#[test]
fn known_color_counts() {
    let count = |bp: Blueprint| greedy_coloring(&AdjacencyGraph::new(&bp.faces)).class_count();
    assert_eq!(count(tetrahedron()), 4);
    assert!(count(cube()) <= 4);
    assert_eq!(count(octahedron()), 2);
}

#[test]
fn distinct_classes_get_distinct_colors() {
    let bp = tetrahedron();
    let colors = color_faces(&bp.verts, &bp.faces).unwrap();
    let rgb: HashSet<_> = colors
        .per_face()
        .iter()
        .map(|c| c.to_color3().to_rgb_u32())
        .collect();
    assert_eq!(rgb.len(), 4);
}

#[test]
fn blueprints_are_independently_owned() {
    let a = icosahedron();
    let mut b = icosahedron();
    assert_eq!(a, b);
    b.verts.truncate(1);
    b.faces[0] = tri(0, 0, 0);
    assert_eq!(a, icosahedron());
    assert_eq!(sphere(1).unwrap(), sphere(1).unwrap());
}

#[test]
fn both_dodecahedra_have_pentagon_sides_of_degree_three() {
    for bp in [dodecahedron(), dodecahedron_dual()] {
        let mut lens: Vec<(Edge<usize>, f64)> = edge_valences(&bp)
            .into_keys()
            .map(|e| (e, bp.verts[e.lo()].distance(&bp.verts[e.hi()])))
            .collect();
        assert_eq!(lens.len(), 54);

        // Fan diagonals are φ times longer than the pentagon sides
        let side = lens.iter().map(|&(_, l)| l).fold(f64::INFINITY, f64::min);
        lens.retain(|&(_, l)| l < 1.1 * side);
        assert_eq!(lens.len(), 30);

        let mut degree = vec![0; bp.verts.len()];
        for (e, _) in lens {
            degree[e.lo()] += 1;
            degree[e.hi()] += 1;
        }
        assert!(degree.iter().all(|&d| d == 3), "{degree:?}");
    }
}

#[test]
fn obj_round_trip_preserves_topology() {
    for (name, bp) in all_blueprints() {
        let mut buf = vec![];
        io::write_obj(&mut buf, &bp, None).unwrap();
        let read = io::read_obj(&buf).unwrap();
        assert_eq!(read.faces, bp.faces, "{name}");
        assert_eq!(read.verts.len(), bp.verts.len(), "{name}");
    }
}
