//! Linear algebra and color math.
//!
//! Includes [vectors][self::vec], [points][point], and [colors][color], as
//! well as utilities such as [approximate equality][approx] comparisons.
//!
//! Vectors and points are distinct types: a point is a location, a vector a
//! displacement. Subtracting two points yields a vector, and a vector can be
//! added to a point, but two points cannot be added together. Colors carry a
//! tag type naming their color space, so an HSV triple cannot be mistaken
//! for an RGB one.

pub use {
    approx::ApproxEq,
    color::{Color, Color3, Color3f, Hsv, Rgb, hsv, rgb},
    point::{Point, Point3, pt3},
    space::{Affine, Linear, Real},
    vec::{Vec3, Vector, splat, vec3},
};

pub mod approx;
pub mod color;
pub mod point;
pub mod space;
pub mod vec;

/// The golden ratio constant φ = (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Reciprocal of φ, equal to φ − 1.
pub const R_PHI: f64 = PHI - 1.0;

/// Trait for linear interpolation between two values.
pub trait Lerp: Sized {
    /// Linearly interpolates between `self` and `other`.
    ///
    /// if `t` = 0, returns `self`; if `t` = 1, returns `other`.
    /// For 0 < `t` < 1, returns the weighted average of `self` and `other`
    /// ```text
    /// (1 - t) * self + t * other
    /// ```
    fn lerp(&self, other: &Self, t: f64) -> Self;

    /// Returns the (unweighted) average of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use polychrome_core::math::{Lerp, pt3, Point3};
    ///
    /// let a: Point3 = pt3(-1.0, 2.0, 0.0);
    /// let b = pt3(3.0, -2.0, 4.0);
    /// assert_eq!(a.midpoint(&b), pt3(1.0, 0.0, 2.0));
    /// ```
    fn midpoint(&self, other: &Self) -> Self {
        self.lerp(other, 0.5)
    }
}

impl<T> Lerp for T
where
    T: Affine<Diff: Linear<Scalar = f64>>,
{
    /// Linearly interpolates between `self` and `other`, computed as
    /// ```text
    /// self + t * (other - self)
    /// ```
    ///
    /// If `t < 0.0` or `t > 1.0`, returns the appropriate extrapolated value.
    ///
    /// # Examples
    /// ```
    /// use polychrome_core::math::*;
    ///
    /// assert_eq!(2.0_f64.lerp(&5.0, 0.25), 2.75);
    ///
    /// let v0: Vec3 = vec3(-2.0, 1.0, 0.0);
    /// let v1 = vec3(3.0, -1.0, 0.0);
    /// assert_eq!(v0.lerp(&v1, 0.5), vec3(0.5, 0.0, 0.0));
    /// ```
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self.add(&other.sub(self).mul(t))
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn golden_ratio_identities() {
        assert_approx_eq!(PHI * PHI, PHI + 1.0);
        assert_approx_eq!(R_PHI, 1.0 / PHI);
        assert_approx_eq!(PHI, (1.0 + 5.0_f64.sqrt()) / 2.0);
    }

    #[test]
    fn lerp_scalar() {
        assert_eq!(1.0_f64.lerp(&5.0, 0.0), 1.0);
        assert_eq!(1.0_f64.lerp(&5.0, 1.0), 5.0);
        assert_eq!(1.0_f64.lerp(&5.0, 0.5), 3.0);
    }
}
