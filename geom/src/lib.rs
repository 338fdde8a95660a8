//! Polyhedron generation and face coloring.
//!
//! [`solids`] builds [`Blueprint`]s for the Platonic solids and for
//! subdivided spheres. [`adjacency`] and [`paint`] assign colors to the faces
//! of a blueprint so that no two faces sharing an edge get the same color.
//! [`io`] reads and writes blueprints in the Wavefront OBJ format.
//!
//! [`Blueprint`]: pc::geom::Blueprint

pub mod adjacency;
pub mod io;
pub mod paint;
pub mod solids;

pub use adjacency::AdjacencyGraph;
pub use paint::{ColorAssignment, FaceColors, Palette, VertexBuffers, color_faces};
pub use solids::{Shape, generate_blueprint};
