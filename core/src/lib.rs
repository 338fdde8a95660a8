//! Core functionality of the `polychrome` project.
//!
//! Includes a small math library with vectors, points, and colors; the
//! [`Blueprint`][geom::Blueprint] type describing an indexed triangle mesh;
//! and the [`Error`] type shared by every polychrome crate.
//!
//! Shape generation and face coloring live in `polychrome-geom`.

pub mod error;
pub mod geom;
pub mod math;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geom::{Blueprint, Edge, Tri, edge, tri};
    pub use crate::math::{
        Affine, ApproxEq, Color3, Color3f, Hsv, Lerp, Linear, Point3, Rgb,
        Vec3, hsv, pt3, rgb, vec3,
    };
}
