//! Real vectors.

use core::array;
use core::fmt::{Debug, Formatter};
use core::marker::PhantomData as Pd;
use core::ops::{Add, Index, Mul, Neg, Sub};

use super::space::{Affine, Linear, Real};
use super::ApproxEq;

/// A generic vector type.
///
/// # Type parameters
/// * `Repr`: the representation of the components of `Self`.
/// * `Space`: the space that `Self` is an element of.
#[repr(transparent)]
pub struct Vector<Repr, Space = ()>(pub Repr, Pd<Space>);

/// A 3-vector with `f64` components.
pub type Vec3<Basis = ()> = Vector<[f64; 3], Real<3, Basis>>;

/// Returns a real 3-vector with `x`, `y`, and `z` components.
pub const fn vec3<B>(x: f64, y: f64, z: f64) -> Vec3<B> {
    Vector([x, y, z], Pd)
}

/// Returns a vector with all components equal to `s`.
pub fn splat<B>(s: f64) -> Vec3<B> {
    vec3(s, s, s)
}

impl<R, Sp> Vector<R, Sp> {
    /// Returns a new vector with representation `repr`.
    #[inline]
    pub const fn new(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<B, const N: usize> Vector<[f64; N], Real<N, B>> {
    /// Returns the Euclidean length of `self`.
    #[inline]
    pub fn len(&self) -> f64 {
        self.len_sqr().sqrt()
    }
    /// Returns the squared Euclidean length of `self`.
    #[inline]
    pub fn len_sqr(&self) -> f64 {
        self.dot(self)
    }
    /// Returns `self` scaled to unit length.
    ///
    /// The result is non-finite if `self` is the zero vector.
    #[inline]
    pub fn normalize(&self) -> Self {
        Linear::mul(self, self.len().recip())
    }
    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        (0..N).map(|i| self.0[i] * other.0[i]).sum()
    }
}

impl<B> Vec3<B> {
    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> f64 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> f64 {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub fn z(&self) -> f64 {
        self.0[2]
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs, oriented by the
    /// right-hand rule.
    pub fn cross(&self, other: &Self) -> Self {
        let [a, b, c] = self.0;
        let [d, e, f] = other.0;
        vec3(b * f - c * e, c * d - a * f, a * e - b * d)
    }

    /// Returns a unit vector perpendicular to `self`.
    ///
    /// The choice is deterministic: the axis least aligned with `self` is
    /// crossed with it.
    pub fn any_perpendicular(&self) -> Self {
        let [x, y, z] = self.0.map(f64::abs);
        let axis = if x <= y && x <= z {
            vec3(1.0, 0.0, 0.0)
        } else if y <= z {
            vec3(0.0, 1.0, 0.0)
        } else {
            vec3(0.0, 0.0, 1.0)
        };
        self.cross(&axis).normalize()
    }
}

//
// Local trait impls
//

impl<B, const N: usize> Affine for Vector<[f64; N], Real<N, B>> {
    type Space = Real<N, B>;
    type Diff = Self;
    const DIM: usize = N;

    #[inline]
    fn add(&self, other: &Self) -> Self {
        Self::new(array::from_fn(|i| self.0[i] + other.0[i]))
    }
    #[inline]
    fn sub(&self, other: &Self) -> Self {
        Self::new(array::from_fn(|i| self.0[i] - other.0[i]))
    }
}

impl<B, const N: usize> Linear for Vector<[f64; N], Real<N, B>> {
    type Scalar = f64;

    #[inline]
    fn zero() -> Self {
        Self::new([0.0; N])
    }
    #[inline]
    fn neg(&self) -> Self {
        Self::new(self.0.map(|c| -c))
    }
    #[inline]
    fn mul(&self, scalar: f64) -> Self {
        Self::new(self.0.map(|c| c * scalar))
    }
}

impl<B, const N: usize> ApproxEq<Self, f64> for Vector<[f64; N], Real<N, B>> {
    fn approx_eq_eps(&self, other: &Self, eps: &f64) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f64 {
        f64::relative_epsilon()
    }
}

//
// Foreign trait impls
//

// Manual impls of Copy, Clone, Eq, and PartialEq to avoid
// superfluous where Sp: Trait bound

impl<R: Copy, Sp> Copy for Vector<R, Sp> {}

impl<R: Clone, Sp> Clone for Vector<R, Sp> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), Pd)
    }
}

impl<R: Default, Sp> Default for Vector<R, Sp> {
    fn default() -> Self {
        Self(R::default(), Pd)
    }
}

impl<R: PartialEq, Sp> PartialEq for Vector<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: Debug, Sp> Debug for Vector<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Vec")?;
        Debug::fmt(&self.0, f)
    }
}

impl<R, Sp> From<R> for Vector<R, Sp> {
    #[inline]
    fn from(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sc, Sp, const N: usize> Index<usize> for Vector<[Sc; N], Sp> {
    type Output = Sc;
    #[inline]
    fn index(&self, i: usize) -> &Sc {
        &self.0[i]
    }
}

impl<B, const N: usize> Add for Vector<[f64; N], Real<N, B>> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Affine::add(&self, &rhs)
    }
}

impl<B, const N: usize> Sub for Vector<[f64; N], Real<N, B>> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Affine::sub(&self, &rhs)
    }
}

impl<B, const N: usize> Mul<f64> for Vector<[f64; N], Real<N, B>> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Linear::mul(&self, rhs)
    }
}

impl<B, const N: usize> Neg for Vector<[f64; N], Real<N, B>> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Linear::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn length() {
        assert_eq!(vec3::<()>(3.0, 4.0, 0.0).len(), 5.0);
        assert_eq!(vec3::<()>(1.0, 2.0, 2.0).len_sqr(), 9.0);
    }

    #[test]
    fn normalize() {
        let v: Vec3 = vec3(1.0, -2.0, 3.0).normalize();
        assert_approx_eq!(v.len(), 1.0);
    }

    #[test]
    fn vector_arithmetic() {
        let v: Vec3 = vec3(1.0, 2.0, 0.0);
        let w = vec3(-2.0, 1.0, -1.0);
        assert_eq!(v + w, vec3(-1.0, 3.0, -1.0));
        assert_eq!(v - w, vec3(3.0, 1.0, 1.0));
        assert_eq!(v * 3.0, vec3(3.0, 6.0, 0.0));
        assert_eq!(-v, vec3(-1.0, -2.0, 0.0));
    }

    #[test]
    fn dot_product() {
        let v: Vec3 = vec3(0.5, 0.5, 0.0);
        assert_eq!(v.dot(&vec3(-2.0, 2.0, 1.0)), 0.0);
        assert_eq!(v.dot(&vec3(-4.0, -4.0, 0.0)), -4.0);
    }

    #[test]
    fn cross_product() {
        let x: Vec3 = vec3(1.0, 0.0, 0.0);
        assert_eq!(x.cross(&vec3(0.0, 1.0, 0.0)), vec3(0.0, 0.0, 1.0));
        let z: Vec3 = vec3(0.0, 0.0, 1.0);
        assert_eq!(z.cross(&vec3(0.0, 1.0, 0.0)), vec3(-1.0, 0.0, 0.0));
    }

    #[test]
    fn any_perpendicular_is_unit_and_orthogonal() {
        for v in [
            vec3::<()>(1.0, 0.0, 0.0),
            vec3(0.0, -3.0, 0.0),
            vec3(1.0, 2.0, 3.0),
            vec3(-0.3, 0.1, 5.0),
        ] {
            let p = v.any_perpendicular();
            assert_approx_eq!(p.len(), 1.0);
            assert_approx_eq!(p.dot(&v), 0.0);
        }
    }

    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", vec3::<()>(1.0, -2.0, 3.0)),
            "Vec[1.0, -2.0, 3.0]"
        );
    }
}
