//! Face coloring.
//!
//! Assigns each face of a blueprint a color such that no two faces sharing an
//! edge have the same color. Faces are first partitioned into color classes
//! by [`greedy_coloring`], then each class is mapped to an RGB color by a
//! [`Palette`] that spaces the hues of the classes evenly around the color
//! wheel.

use pc::geom::blueprint::check_indices;
use pc::geom::{Blueprint, Tri};
use pc::math::{Color3f, Point3, hsv};
use pc::{Error, Result};
use tracing::debug;

use crate::adjacency::AdjacencyGraph;

/// Maps each face to a color class.
///
/// Classes are numbered from zero, and every class below
/// [`class_count`][Self::class_count] is used by at least one face.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorAssignment {
    classes: Vec<usize>,
    count: usize,
}

/// Saturation and value of the colors assigned to faces.
///
/// The hue is determined by the color class of each face.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    pub saturation: f64,
    pub value: f64,
}

/// The result of coloring the faces of a blueprint.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceColors {
    assignment: ColorAssignment,
    per_face: Vec<Color3f>,
}

/// Flattened per-corner vertex attributes, ready to upload to a GPU.
///
/// Every face corner gets its own entry, so adjacent faces can have
/// different colors at shared vertices. Both buffers hold three `f32`s per
/// corner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexBuffers {
    /// Positions as consecutive x, y, z triplets.
    pub positions: Vec<f32>,
    /// Colors as consecutive r, g, b triplets.
    pub colors: Vec<f32>,
}

/// Colors the faces of `graph` greedily, in index order.
///
/// Each face gets the smallest class not already taken by one of its
/// lower-indexed neighbors. This uses at most d + 1 classes, where d is the
/// maximum degree of the graph. Face 0 always gets class 0.
pub fn greedy_coloring(graph: &AdjacencyGraph) -> ColorAssignment {
    let n = graph.face_count();
    let mut classes = Vec::with_capacity(n);
    let mut taken = Vec::new();
    let mut count = 0;

    for f in 0..n {
        // A face with d neighbors always finds a free class in 0..=d
        taken.clear();
        taken.resize(graph.degree(f) + 1, false);
        for nb in graph.neighbors(f).filter(|&nb| nb < f) {
            if let Some(t) = taken.get_mut(classes[nb]) {
                *t = true;
            }
        }
        let c = taken.iter().position(|&t| !t).unwrap_or(taken.len());
        count = count.max(c + 1);
        classes.push(c);
    }
    debug!(faces = n, classes = count, "colored faces");
    ColorAssignment { classes, count }
}

/// Colors the faces of the mesh with the default [`Palette`].
///
/// # Examples
/// ```
/// use polychrome_geom::{color_faces, solids::tetrahedron};
///
/// let bp = tetrahedron();
/// let colors = color_faces(&bp.verts, &bp.faces).unwrap();
///
/// // Every face of a tetrahedron touches the other three
/// assert_eq!(colors.assignment().classes(), [0, 1, 2, 3]);
/// ```
/// # Errors
/// Returns [`Error::IndexOutOfRange`] if a face refers to a nonexistent
/// vertex.
pub fn color_faces(verts: &[Point3], faces: &[Tri<usize>]) -> Result<FaceColors> {
    color_faces_with(verts, faces, &Palette::default())
}

/// Colors the faces of the mesh with the given palette.
///
/// # Errors
/// Returns [`Error::IndexOutOfRange`] if a face refers to a nonexistent
/// vertex.
pub fn color_faces_with(
    verts: &[Point3],
    faces: &[Tri<usize>],
    palette: &Palette,
) -> Result<FaceColors> {
    check_indices(faces, verts.len())?;
    let graph = AdjacencyGraph::new(faces);
    let assignment = greedy_coloring(&graph);
    let per_face = palette.colors(&assignment);
    Ok(FaceColors { assignment, per_face })
}

impl ColorAssignment {
    /// Returns the class of `face`, or `None` if out of range.
    pub fn class_of(&self, face: usize) -> Option<usize> {
        self.classes.get(face).copied()
    }

    /// Returns the classes of all faces, indexed by face.
    pub fn classes(&self) -> &[usize] {
        &self.classes
    }

    /// Returns the number of distinct classes used.
    pub fn class_count(&self) -> usize {
        self.count
    }

    /// Returns the number of faces colored.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns whether there are no faces.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Returns whether no two adjacent faces in `graph` share a class.
    pub fn is_proper(&self, graph: &AdjacencyGraph) -> bool {
        self.len() == graph.face_count()
            && (0..self.len()).all(|f| {
                graph.neighbors(f).all(|nb| self.classes[nb] != self.classes[f])
            })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { saturation: 0.65, value: 0.95 }
    }
}

impl Palette {
    /// Creates a palette with the given saturation and value.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if either parameter is outside
    /// [0, 1].
    pub fn new(saturation: f64, value: f64) -> Result<Self> {
        for (name, x) in [("saturation", saturation), ("value", value)] {
            if !(0.0..=1.0).contains(&x) {
                return Err(Error::invalid_arg(format!(
                    "{name} must be in [0, 1], got {x}"
                )));
            }
        }
        Ok(Self { saturation, value })
    }

    /// Returns the color of class `class` out of `class_count` classes.
    ///
    /// The hue is `class / max(1, class_count)`, so the classes are spread
    /// evenly over the hue circle starting from red.
    ///
    /// # Examples
    /// ```
    /// use pc::{assert_approx_eq, math::rgb};
    /// use polychrome_geom::Palette;
    ///
    /// let pal = Palette { saturation: 1.0, value: 1.0 };
    /// assert_approx_eq!(pal.color(0, 3), rgb(1.0, 0.0, 0.0));
    /// assert_approx_eq!(pal.color(1, 3), rgb(0.0, 1.0, 0.0));
    /// assert_approx_eq!(pal.color(2, 3), rgb(0.0, 0.0, 1.0));
    /// ```
    pub fn color(&self, class: usize, class_count: usize) -> Color3f {
        let h = class as f64 / class_count.max(1) as f64;
        hsv(h, self.saturation, self.value).to_rgb()
    }

    /// Returns the color of each face in `assignment`.
    pub fn colors(&self, assignment: &ColorAssignment) -> Vec<Color3f> {
        let k = assignment.class_count();
        assignment
            .classes()
            .iter()
            .map(|&c| self.color(c, k))
            .collect()
    }
}

impl FaceColors {
    /// Returns the color class assignment.
    pub fn assignment(&self) -> &ColorAssignment {
        &self.assignment
    }

    /// Returns the color of each face, indexed by face.
    pub fn per_face(&self) -> &[Color3f] {
        &self.per_face
    }

    /// Returns the number of distinct colors used.
    pub fn class_count(&self) -> usize {
        self.assignment.class_count()
    }

    /// Returns the color of each face corner: the color of face i repeated
    /// at indices 3i, 3i + 1, and 3i + 2.
    pub fn per_vertex(&self) -> Vec<Color3f> {
        self.per_face.iter().flat_map(|&c| [c; 3]).collect()
    }
}

impl VertexBuffers {
    /// Flattens `bp` into per-corner buffers, each corner colored with the
    /// color of its face.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `bp` is not valid, or
    /// [`Error::InvalidArgument`] if `colors` was computed for a different
    /// number of faces.
    pub fn flat_shaded(bp: &Blueprint, colors: &FaceColors) -> Result<Self> {
        let per_face = colors.per_face();
        if per_face.len() != bp.faces.len() {
            return Err(Error::invalid_arg(format!(
                "{} face colors given for {} faces",
                per_face.len(),
                bp.faces.len()
            )));
        }
        Self::build(bp, |i| per_face[i])
    }

    /// Flattens `bp` into per-corner buffers, with every corner the same
    /// color.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `bp` is not valid.
    pub fn solid(bp: &Blueprint, color: Color3f) -> Result<Self> {
        Self::build(bp, |_| color)
    }

    /// Returns the number of vertices to draw.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    fn build(bp: &Blueprint, face_color: impl Fn(usize) -> Color3f) -> Result<Self> {
        bp.validate()?;
        let n = 9 * bp.faces.len();
        let mut res = Self {
            positions: Vec::with_capacity(n),
            colors: Vec::with_capacity(n),
        };
        for (i, Tri(vs)) in bp.faces.iter().enumerate() {
            let col = face_color(i).to_f32();
            for &v in vs {
                res.positions.extend(bp.verts[v].0.map(|c| c as f32));
                res.colors.extend(col);
            }
        }
        Ok(res)
    }
}
