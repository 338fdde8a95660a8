//! Reading and writing Wavefront OBJ files.
//!
//! Only the geometry subset relevant to blueprints is supported: vertex
//! positions (`v`) and faces (`f`). Faces with more than three vertices are
//! fanned into triangles. Normals, texture coordinates, groups, and
//! materials are skipped on input and never written.

use core::str::from_utf8;
use std::io::{self, Write};

use pc::geom::{Blueprint, Polygon, Tri};
use pc::math::{Color3f, Point3, pt3};
use pc::{Error, Result};
use tracing::debug;

/// Statements that are recognized but carry nothing a blueprint needs.
const IGNORED: [&str; 9] =
    ["vn", "vt", "vp", "o", "g", "s", "l", "usemtl", "mtllib"];

/// Parses a blueprint from OBJ source.
///
/// Face indices are 1-based; negative indices count backwards from the most
/// recently defined vertex. In the `v/vt/vn` index forms only the position
/// index is used.
///
/// # Examples
/// ```
/// use pc::geom::tri;
/// use polychrome_geom::io::read_obj;
///
/// let bp = read_obj(b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 -1\n").unwrap();
/// assert_eq!(bp.faces, [tri(0, 1, 2)]);
/// ```
/// # Errors
/// Returns [`Error::Parse`] on malformed input, and
/// [`Error::IndexOutOfRange`] if a face refers to a nonexistent vertex.
pub fn read_obj(input: &[u8]) -> Result<Blueprint> {
    let mut verts = vec![];
    let mut faces = vec![];

    for (i, line) in input.split(|&c| c == b'\n').enumerate() {
        let line_no = i + 1;
        let err = |msg: String| Error::Parse { line: line_no, msg };

        let line = from_utf8(line).map_err(|e| err(e.to_string()))?;
        let line = line.split('#').next().unwrap_or_default();
        let mut tokens = line.split_ascii_whitespace();

        let Some(kw) = tokens.next() else {
            continue;
        };
        let args: Vec<&str> = tokens.collect();
        match kw {
            "v" => verts.push(parse_vertex(&args).map_err(err)?),
            "f" => {
                let vs = args
                    .iter()
                    .map(|a| parse_index(a, verts.len()))
                    .collect::<core::result::Result<Vec<_>, _>>()
                    .map_err(err)?;
                if vs.len() < 3 {
                    return Err(err(format!(
                        "face needs at least 3 vertices, got {}",
                        vs.len()
                    )));
                }
                faces.extend(Polygon(vs).triangulate_fan());
            }
            kw if IGNORED.contains(&kw) => {}
            kw => return Err(err(format!("unsupported statement '{kw}'"))),
        }
    }
    debug!(verts = verts.len(), faces = faces.len(), "read OBJ");
    Blueprint::new(verts, faces)
}

/// Writes `bp` as OBJ source.
///
/// If `vert_colors` is given, each vertex line is extended with the r, g,
/// and b components of the corresponding color, a common OBJ extension.
///
/// # Errors
/// Returns an error of kind [`InvalidInput`][io::ErrorKind::InvalidInput]
/// if the number of colors does not match the number of vertices, or any
/// error returned by `out`.
pub fn write_obj(
    out: &mut impl Write,
    bp: &Blueprint,
    vert_colors: Option<&[Color3f]>,
) -> io::Result<()> {
    if let Some(cs) = vert_colors.filter(|cs| cs.len() != bp.verts.len()) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} colors for {} vertices", cs.len(), bp.verts.len()),
        ));
    }
    writeln!(out, "# {} vertices, {} faces", bp.verts.len(), bp.faces.len())?;

    for (i, v) in bp.verts.iter().enumerate() {
        let [x, y, z] = v.0;
        write!(out, "v {x} {y} {z}")?;
        if let Some(c) = vert_colors.and_then(|cs| cs.get(i)) {
            let [r, g, b] = c.0;
            write!(out, " {r} {g} {b}")?;
        }
        writeln!(out)?;
    }
    for Tri([a, b, c]) in &bp.faces {
        writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    Ok(())
}

fn parse_vertex(args: &[&str]) -> core::result::Result<Point3, String> {
    // Anything past x, y, z is either a w coordinate or a vertex color
    let [x, y, z] = match args {
        [x, y, z, ..] => [x, y, z].map(|s| parse_float(s)),
        _ => return Err(format!("vertex needs 3 coordinates, got {}", args.len())),
    };
    Ok(pt3(x?, y?, z?))
}

fn parse_float(s: &str) -> core::result::Result<f64, String> {
    s.parse().map_err(|_| format!("invalid number '{s}'"))
}

/// Resolves a 1-based or negative relative OBJ index to a 0-based index.
fn parse_index(s: &str, vert_count: usize) -> core::result::Result<usize, String> {
    let pos = s.split('/').next().unwrap_or_default();
    let i: i64 = pos.parse().map_err(|_| format!("invalid index '{s}'"))?;
    let resolved = match i {
        1.. => Some(i - 1),
        ..0 => i64::try_from(vert_count).ok().map(|n| n + i),
        0 => None,
    };
    resolved
        .and_then(|r| usize::try_from(r).ok())
        .ok_or_else(|| format!("index {i} does not refer to a vertex"))
}

#[cfg(test)]
mod tests {
    use pc::geom::tri;
    use pc::math::rgb;

    use super::*;
    use crate::solids::{cube, icosahedron};

    #[test]
    fn read_skips_comments_and_blank_lines() {
        let input = br"
# comment
  v 0.0 0.0 0.0
v 1.0 0.0 0.0 # trailing

v 0.0 1.0 0.0
v 1.0 1.0 0.0
#anothercomment
o quad
f 1 2 4
  f 1 4 3
";
        let bp = read_obj(input).unwrap();
        assert_eq!(bp.verts.len(), 4);
        assert_eq!(bp.verts[3], pt3(1.0, 1.0, 0.0));
        assert_eq!(bp.faces, [tri(0, 1, 3), tri(0, 3, 2)]);
    }

    #[test]
    fn read_slash_forms_and_relative_indices() {
        let input = b"v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nf 1/1 2/1/1 -1//1\n";
        let bp = read_obj(input).unwrap();
        assert_eq!(bp.faces, [tri(0, 1, 2)]);
    }

    #[test]
    fn read_fans_polygons() {
        let input = b"v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\r\n";
        let bp = read_obj(input).unwrap();
        assert_eq!(bp.faces, [tri(0, 1, 2), tri(0, 2, 3)]);
    }

    #[test]
    fn read_malformed_number() {
        let res = read_obj(b"v 0 0 0\nv 1 x 0\n");
        assert_eq!(
            res,
            Err(Error::Parse { line: 2, msg: "invalid number 'x'".into() })
        );
    }

    #[test]
    fn read_short_vertex_and_face() {
        assert!(matches!(
            read_obj(b"v 1 2\n"),
            Err(Error::Parse { line: 1, .. })
        ));
        assert!(matches!(
            read_obj(b"v 0 0 0\nv 1 0 0\nf 1 2\n"),
            Err(Error::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn read_zero_index_is_error() {
        let res = read_obj(b"v 0 0 0\nf 0 1 1\n");
        assert!(matches!(res, Err(Error::Parse { line: 2, .. })));
    }

    #[test]
    fn read_index_out_of_range() {
        let res = read_obj(b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 7\n");
        assert_eq!(
            res,
            Err(Error::IndexOutOfRange { face: 0, index: 6, len: 3 })
        );
    }

    #[test]
    fn read_unknown_statement() {
        let res = read_obj(b"curv 0 1\n");
        assert!(matches!(res, Err(Error::Parse { line: 1, .. })));
    }

    #[test]
    fn write_then_read_preserves_blueprint() {
        for bp in [cube(), icosahedron()] {
            let mut buf = vec![];
            write_obj(&mut buf, &bp, None).unwrap();
            assert_eq!(read_obj(&buf), Ok(bp));
        }
    }

    #[test]
    fn write_with_vertex_colors() {
        let bp = Blueprint::new(
            [pt3(0.0, 0.0, 0.0), pt3(1.0, 0.0, 0.0), pt3(0.0, 1.0, 0.0)],
            [tri(0, 1, 2)],
        )
        .unwrap();
        let cols = [rgb(1.0, 0.0, 0.0), rgb(0.0, 1.0, 0.0), rgb(0.0, 0.0, 1.0)];

        let mut buf = vec![];
        write_obj(&mut buf, &bp, Some(&cols[..])).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(
            s,
            "# 3 vertices, 1 faces\n\
             v 0 0 0 1 0 0\n\
             v 1 0 0 0 1 0\n\
             v 0 1 0 0 0 1\n\
             f 1 2 3\n"
        );
        // Colors are ignored on input
        assert_eq!(read_obj(s.as_bytes()), Ok(bp));
    }

    #[test]
    fn write_rejects_color_count_mismatch() {
        let mut buf = vec![];
        let res = write_obj(&mut buf, &cube(), Some(&[rgb(1.0, 1.0, 1.0)][..]));
        assert_eq!(res.unwrap_err().kind(), io::ErrorKind::InvalidInput);
    }
}
