//! Prints a table of vertex, edge, and face counts and the number of face
//! colors needed for each solid.

use tracing_subscriber::EnvFilter;

use pc::geom::Blueprint;
use pc_geom::color_faces;
use pc_geom::solids::{Shape, dodecahedron_dual, generate_blueprint, sphere};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut rows: Vec<(String, Blueprint)> = vec![];
    for shape in Shape::ALL.into_iter().filter(|s| !s.is_subdivisible()) {
        rows.push((shape.to_string(), generate_blueprint(shape, None)?));
    }
    rows.push(("dodecahedron (dual)".into(), dodecahedron_dual()));
    for level in 0..=3 {
        rows.push((format!("sphere({level})"), sphere(level)?));
    }

    println!(
        "{:<20} {:>6} {:>6} {:>6} {:>6} {:>7}",
        "shape", "V", "E", "F", "V-E+F", "colors"
    );
    for (name, bp) in &rows {
        let colors = color_faces(&bp.verts, &bp.faces)?;
        println!(
            "{:<20} {:>6} {:>6} {:>6} {:>6} {:>7}",
            name,
            bp.verts.len(),
            bp.edge_count(),
            bp.faces.len(),
            bp.euler_characteristic(),
            colors.class_count()
        );
    }
    Ok(())
}
