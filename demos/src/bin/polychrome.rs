//! Generates a polyhedron, colors its faces so that no two neighboring faces
//! match, and writes the result as OBJ, JSON, or a one-line summary.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pc::geom::{Blueprint, Tri};
use pc::math::{Color3f, rgb};
use pc_geom::paint::color_faces_with;
use pc_geom::{Palette, Shape, generate_blueprint, io::write_obj};

/// Generate a polyhedron and color its faces
#[derive(Parser, Debug)]
#[command(name = "polychrome", version)]
#[command(about = "Generate a polyhedron and color its faces", long_about = None)]
struct Cli {
    /// Shape to generate: tetra, octa, cube, dodeca, icosa, or sphere
    shape: Shape,

    /// Subdivision level; only spheres accept a positive level
    #[arg(short, long, allow_negative_numbers = true)]
    subdivision: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Summary)]
    format: Format,

    /// Output file; standard output if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Saturation of the face colors, in [0, 1]
    #[arg(long, default_value_t = Palette::default().saturation)]
    saturation: f64,

    /// Value (brightness) of the face colors, in [0, 1]
    #[arg(long, default_value_t = Palette::default().value)]
    value: f64,

    /// Paint every face with this R,G,B color instead, components in [0, 1]
    #[arg(long, value_parser = parse_rgb)]
    solid: Option<Color3f>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    /// Wavefront OBJ with per-vertex colors
    Obj,
    /// JSON with vertices, faces, and colors
    Json,
    /// Vertex, edge, face, and color counts
    Summary,
}

/// Face colors plus the class each came from.
struct Painted {
    per_face: Vec<Color3f>,
    classes: Vec<usize>,
    class_count: usize,
}

#[derive(Serialize)]
struct JsonBlueprint {
    vertices: Vec<[f64; 3]>,
    faces: Vec<[usize; 3]>,
    face_colors: Vec<[f64; 3]>,
    color_classes: Vec<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let bp = generate_blueprint(cli.shape, cli.subdivision)
        .with_context(|| format!("failed to generate {}", cli.shape))?;
    let painted = paint(&bp, &cli)?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let f = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        Format::Obj => {
            let (corners, colors) = split_corners(&bp, &painted.per_face);
            write_obj(&mut out, &corners, Some(colors.as_slice()))?;
        }
        Format::Json => {
            let json = JsonBlueprint {
                vertices: bp.verts.iter().map(|v| v.0).collect(),
                faces: bp.faces.iter().map(|f| f.0).collect(),
                face_colors: painted.per_face.iter().map(|c| c.0).collect(),
                color_classes: painted.classes,
            };
            serde_json::to_writer_pretty(&mut out, &json)?;
            writeln!(out)?;
        }
        Format::Summary => writeln!(
            out,
            "{}: {} vertices, {} edges, {} faces, {} colors",
            cli.shape,
            bp.verts.len(),
            bp.edge_count(),
            bp.faces.len(),
            painted.class_count
        )?,
    }
    out.flush()?;

    if let Some(path) = &cli.output {
        info!(path = %path.display(), format = ?cli.format, "wrote output");
    }
    Ok(())
}

fn paint(bp: &Blueprint, cli: &Cli) -> anyhow::Result<Painted> {
    if let Some(color) = cli.solid {
        let n = bp.faces.len();
        return Ok(Painted {
            per_face: vec![color; n],
            classes: vec![0; n],
            class_count: usize::from(n > 0),
        });
    }
    let palette = Palette::new(cli.saturation, cli.value)?;
    let colors = color_faces_with(&bp.verts, &bp.faces, &palette)?;
    Ok(Painted {
        per_face: colors.per_face().to_vec(),
        classes: colors.assignment().classes().to_vec(),
        class_count: colors.class_count(),
    })
}

/// Gives every face corner its own vertex so that each face can carry its
/// own color in formats that only support per-vertex colors.
fn split_corners(bp: &Blueprint, per_face: &[Color3f]) -> (Blueprint, Vec<Color3f>) {
    let verts = bp
        .faces
        .iter()
        .flat_map(|&Tri(vs)| vs.map(|i| bp.verts[i]))
        .collect();
    let faces = (0..bp.faces.len())
        .map(|i| Tri([3 * i, 3 * i + 1, 3 * i + 2]))
        .collect();
    let colors = per_face.iter().flat_map(|&c| [c; 3]).collect();
    (Blueprint { verts, faces }, colors)
}

fn parse_rgb(s: &str) -> Result<Color3f, String> {
    let cs: Vec<f64> = s
        .split(',')
        .map(|c| c.trim().parse::<f64>().map_err(|e| format!("'{c}': {e}")))
        .collect::<Result<_, _>>()?;
    match cs[..] {
        [r, g, b] if cs.iter().all(|c| (0.0..=1.0).contains(c)) => Ok(rgb(r, g, b)),
        [_, _, _] => Err("components must be in [0, 1]".into()),
        _ => Err(format!("expected R,G,B, got {} components", cs.len())),
    }
}
