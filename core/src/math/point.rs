use core::{
    array,
    fmt::{Debug, Formatter},
    marker::PhantomData as Pd,
    ops::{Add, Index, Sub},
};

use crate::math::{
    ApproxEq,
    space::{Affine, Real},
    vec::{Vec3, Vector},
};

/// A point, or position, in an affine space.
#[repr(transparent)]
pub struct Point<Repr, Space = ()>(pub Repr, Pd<Space>);

/// A 3-point with `f64` components.
pub type Point3<Basis = ()> = Point<[f64; 3], Real<3, Basis>>;

/// Returns a real 3-point with `x`, `y`, and `z` components.
pub const fn pt3<B>(x: f64, y: f64, z: f64) -> Point3<B> {
    Point([x, y, z], Pd)
}

impl<R, Sp> Point<R, Sp> {
    #[inline]
    pub const fn new(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<B> Point3<B> {
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

    /// Returns the vector from the origin to `self`.
    #[inline]
    pub fn to_vec(self) -> Vec3<B> {
        Vector::new(self.0)
    }

    /// Returns the distance of `self` from the origin.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.to_vec().len()
    }

    /// Returns the point where the ray from the origin through `self`
    /// meets the unit sphere.
    ///
    /// The result is non-finite if `self` is the origin.
    #[inline]
    pub fn project_to_unit_sphere(&self) -> Self {
        self.to_vec().normalize().to_pt()
    }

    /// Returns the Euclidean distance between `self` and `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        Affine::sub(self, other).len()
    }
}

impl<B> Vec3<B> {
    /// Returns the point at the tip of `self` when placed at the origin.
    #[inline]
    pub fn to_pt(self) -> Point3<B> {
        Point::new(self.0)
    }
}

/// Returns the centroid (arithmetic mean) of the given points,
/// or `None` if there are no points.
pub fn centroid<B>(pts: impl IntoIterator<Item = Point3<B>>) -> Option<Point3<B>> {
    let (sum, n) = pts
        .into_iter()
        .fold(([0.0; 3], 0usize), |(acc, n), p| {
            (array::from_fn(|i| acc[i] + p.0[i]), n + 1)
        });
    (n > 0).then(|| Point::new(sum.map(|c| c / n as f64)))
}

impl<B, const N: usize> Affine for Point<[f64; N], Real<N, B>> {
    type Space = Real<N, B>;
    type Diff = Vector<[f64; N], Real<N, B>>;
    const DIM: usize = N;

    #[inline]
    fn add(&self, other: &Self::Diff) -> Self {
        Self(array::from_fn(|i| self.0[i] + other.0[i]), Pd)
    }
    #[inline]
    fn sub(&self, other: &Self) -> Self::Diff {
        Vector::new(array::from_fn(|i| self.0[i] - other.0[i]))
    }
}

impl<B, const N: usize> ApproxEq<Self, f64> for Point<[f64; N], Real<N, B>> {
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
// superfluous where S: Trait bound

impl<R: Copy, S> Copy for Point<R, S> {}

impl<R: Clone, S> Clone for Point<R, S> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), Pd)
    }
}

impl<R: Default, S> Default for Point<R, S> {
    fn default() -> Self {
        Self(R::default(), Pd)
    }
}

impl<R: Debug, Sp> Debug for Point<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Point")?;
        Debug::fmt(&self.0, f)
    }
}

impl<R: PartialEq, S> PartialEq for Point<R, S> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R, Sp> From<R> for Point<R, Sp> {
    #[inline]
    fn from(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sc, Sp, const N: usize> Index<usize> for Point<[Sc; N], Sp> {
    type Output = Sc;
    #[inline]
    fn index(&self, i: usize) -> &Sc {
        &self.0[i]
    }
}

impl<R, Sp> Add<<Self as Affine>::Diff> for Point<R, Sp>
where
    Self: Affine,
{
    type Output = Self;

    fn add(self, other: <Self as Affine>::Diff) -> Self {
        Affine::add(&self, &other)
    }
}

impl<R, Sp> Sub for Point<R, Sp>
where
    Self: Affine,
{
    type Output = <Self as Affine>::Diff;

    fn sub(self, other: Self) -> Self::Output {
        Affine::sub(&self, &other)
    }
}
