//! Blueprints of various polyhedra.
//!
//! Every builder returns a freshly allocated [`Blueprint`]. The constant
//! coordinate tables are copied on each call, so callers are free to mutate
//! what they get back.

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use pc::{Error, Result, geom::Blueprint};
use tracing::debug;

mod dual;
mod platonic;
mod subdiv;

pub use dual::DualDodecahedron;
pub use platonic::*;
pub use subdiv::Icosphere;

/// The highest accepted sphere subdivision level.
///
/// Level 8 already yields 1 310 720 faces.
pub const MAX_SUBDIVISION: u32 = 8;

/// The subdivision level used for [`Shape::Sphere`] when none is given.
pub const DEFAULT_SPHERE_SUBDIVISION: u32 = 2;

/// The shapes known to [`generate_blueprint`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Shape {
    Tetrahedron,
    Octahedron,
    Cube,
    Dodecahedron,
    Icosahedron,
    /// Unit sphere approximated by a subdivided icosahedron.
    Sphere,
}

impl Shape {
    /// All shapes, in order of increasing face count.
    pub const ALL: [Shape; 6] = [
        Shape::Tetrahedron,
        Shape::Octahedron,
        Shape::Cube,
        Shape::Dodecahedron,
        Shape::Icosahedron,
        Shape::Sphere,
    ];

    /// Returns the full lowercase name of `self`.
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Tetrahedron => "tetrahedron",
            Shape::Octahedron => "octahedron",
            Shape::Cube => "cube",
            Shape::Dodecahedron => "dodecahedron",
            Shape::Icosahedron => "icosahedron",
            Shape::Sphere => "sphere",
        }
    }

    /// Returns whether `self` accepts a positive subdivision level.
    pub const fn is_subdivisible(self) -> bool {
        matches!(self, Shape::Sphere)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = Error;

    /// Parses a shape name, either abbreviated (`tetra`, `octa`, `cube`,
    /// `dodeca`, `icosa`, `sphere`) or in full. Case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "tetra" | "tetrahedron" => Shape::Tetrahedron,
            "octa" | "octahedron" => Shape::Octahedron,
            "cube" | "hexahedron" => Shape::Cube,
            "dodeca" | "dodecahedron" => Shape::Dodecahedron,
            "icosa" | "icosahedron" => Shape::Icosahedron,
            "sphere" | "icosphere" => Shape::Sphere,
            _ => return Err(Error::invalid_arg(format!("unknown shape '{s}'"))),
        })
    }
}

/// Returns the blueprint of `shape`.
///
/// `subdivision` only applies to [`Shape::Sphere`], where it defaults to
/// [`DEFAULT_SPHERE_SUBDIVISION`]. The flat solids accept `None` or
/// `Some(0)`.
///
/// # Examples
/// ```
/// use polychrome_geom::solids::{Shape, generate_blueprint};
///
/// let bp = generate_blueprint(Shape::Sphere, Some(1)).unwrap();
/// assert_eq!(bp.faces.len(), 80);
///
/// assert!(generate_blueprint(Shape::Cube, Some(2)).is_err());
/// ```
/// # Errors
/// Returns [`Error::InvalidArgument`] if `subdivision` is negative, exceeds
/// [`MAX_SUBDIVISION`], or is positive for a shape other than the sphere.
pub fn generate_blueprint(
    shape: Shape,
    subdivision: Option<i64>,
) -> Result<Blueprint> {
    let bp = match (shape, subdivision) {
        (_, Some(n)) if n < 0 => return Err(negative_level(n)),
        (Shape::Sphere, level) => {
            sphere(level.unwrap_or(DEFAULT_SPHERE_SUBDIVISION.into()))?
        }
        (flat, Some(n)) if n > 0 => {
            return Err(Error::invalid_arg(format!(
                "{flat} cannot be subdivided (got level {n})"
            )));
        }
        (Shape::Tetrahedron, _) => tetrahedron(),
        (Shape::Octahedron, _) => octahedron(),
        (Shape::Cube, _) => cube(),
        (Shape::Dodecahedron, _) => dodecahedron(),
        (Shape::Icosahedron, _) => icosahedron(),
    };
    debug!(
        %shape,
        verts = bp.verts.len(),
        faces = bp.faces.len(),
        "generated blueprint"
    );
    Ok(bp)
}

/// Returns a regular tetrahedron inscribed in the cube [-1, 1]³.
pub fn tetrahedron() -> Blueprint {
    Tetrahedron.build()
}

/// Returns a regular octahedron with vertices on the unit axes.
pub fn octahedron() -> Blueprint {
    Octahedron.build()
}

/// Returns the cube [-1, 1]³, each square face split into two triangles.
pub fn cube() -> Blueprint {
    Cube::default().build()
}

/// Returns a regular dodecahedron, each pentagon split into three triangles.
pub fn dodecahedron() -> Blueprint {
    Dodecahedron.build()
}

/// Returns a regular dodecahedron built as the dual of [`icosahedron`].
pub fn dodecahedron_dual() -> Blueprint {
    DualDodecahedron.build()
}

/// Returns a regular icosahedron inscribed in the unit sphere.
pub fn icosahedron() -> Blueprint {
    Icosahedron.build()
}

/// Returns an icosahedron subdivided `level` times and projected onto the
/// unit sphere.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `level` is negative or greater than
/// [`MAX_SUBDIVISION`].
pub fn sphere(level: i64) -> Result<Blueprint> {
    if level < 0 {
        return Err(negative_level(level));
    }
    let depth = u32::try_from(level).unwrap_or(u32::MAX);
    Icosphere { depth }.build()
}

fn negative_level(level: i64) -> Error {
    Error::invalid_arg(format!(
        "subdivision level must be non-negative, got {level}"
    ))
}
