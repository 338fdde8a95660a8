//! Colors and color spaces.

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::Index;

use crate::math::ApproxEq;
use crate::math::space::{Affine, Linear};

//
// Types
//

/// A generic color type, similar to [`Vector`][crate::math::Vector].
///
/// # Type parameters
/// * `Repr`: the representation of the components of `Self`.
///   Color components are also called *channels*.
/// * `Space`: the color space that `Self` is an element of.
#[repr(transparent)]
pub struct Color<Repr, Space>(pub Repr, PhantomData<Space>);

/// The (S)RGB color space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rgb;

/// The HSV color space (hue, saturation, value).
///
/// All three channels are in the range [0, 1]. A hue of 0 is red, 1/3 green,
/// and 2/3 blue; the hue wraps around, so 1 is red again.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Hsv;

/// An RGB color with `u8` components.
pub type Color3<Space = Rgb> = Color<[u8; 3], Space>;

/// An RGB color with `f64` components in the range [0, 1].
pub type Color3f<Space = Rgb> = Color<[f64; 3], Space>;

/// Returns a new RGB color with `r`, `g`, and `b` components.
pub const fn rgb<Ch>(r: Ch, g: Ch, b: Ch) -> Color<[Ch; 3], Rgb> {
    Color([r, g, b], PhantomData)
}

/// Returns a new HSV color with `h`, `s`, and `v` components.
pub const fn hsv<Ch>(h: Ch, s: Ch, v: Ch) -> Color<[Ch; 3], Hsv> {
    Color([h, s, v], PhantomData)
}

//
// Inherent impls
//

impl Color3 {
    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0x00_RR_GG_BB`.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }
}

impl Color3f {
    /// Returns a `Color3` with the components of `self` mapped to `u8`
    /// with `(c.clamp(0.0, 1.0) * 255.0).round() as u8`.
    #[inline]
    pub fn to_color3(self) -> Color3 {
        self.0
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
            .into()
    }

    /// Returns `self` with `f32` channels, as consumed by GPU vertex buffers.
    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        self.0.map(|c| c as f32)
    }
}

impl<R, Sc> Color<R, Rgb>
where
    R: Index<usize, Output = Sc>,
    Sc: Copy,
{
    /// Returns the red component of `self`.
    pub fn r(&self) -> Sc {
        self.0[0]
    }
    /// Returns the green component of `self`.
    pub fn g(&self) -> Sc {
        self.0[1]
    }
    /// Returns the blue component of `self`.
    pub fn b(&self) -> Sc {
        self.0[2]
    }
}

impl<R, Sc> Color<R, Hsv>
where
    R: Index<usize, Output = Sc>,
    Sc: Copy,
{
    /// Returns the hue component of `self`.
    pub fn h(&self) -> Sc {
        self.0[0]
    }
    /// Returns the saturation component of `self`.
    pub fn s(&self) -> Sc {
        self.0[1]
    }
    /// Returns the value (brightness) component of `self`.
    pub fn v(&self) -> Sc {
        self.0[2]
    }
}

impl Color3f<Hsv> {
    /// Converts `self` to RGB.
    ///
    /// The hue circle is split into six sextants; within each, one RGB
    /// channel is at `v`, one at `v·(1 − s)`, and the third ramps linearly
    /// between them. Hues outside [0, 1) wrap around.
    ///
    /// # Examples
    /// ```
    /// use polychrome_core::math::{hsv, rgb};
    ///
    /// assert_eq!(hsv(0.0, 1.0, 1.0).to_rgb(), rgb(1.0, 0.0, 0.0));
    /// assert_eq!(hsv(0.5, 0.0, 0.5).to_rgb(), rgb(0.5, 0.5, 0.5));
    /// ```
    pub fn to_rgb(&self) -> Color3f {
        let [h, s, v] = self.0;
        let h6 = h.rem_euclid(1.0) * 6.0;
        // rem_euclid may round up to exactly 1.0 for tiny negative hues
        let sextant = h6.floor() % 6.0;
        let f = h6 - h6.floor();

        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        match sextant as u8 {
            0 => rgb(v, t, p),
            1 => rgb(q, v, p),
            2 => rgb(p, v, t),
            3 => rgb(p, q, v),
            4 => rgb(t, p, v),
            _ => rgb(v, p, q),
        }
    }
}

//
// Local trait impls
//

impl<Sp, const DIM: usize> Affine for Color<[f64; DIM], Sp> {
    type Space = Sp;
    type Diff = Self;

    const DIM: usize = DIM;

    #[inline]
    fn add(&self, other: &Self::Diff) -> Self {
        array::from_fn(|i| self.0[i] + other.0[i]).into()
    }
    #[inline]
    fn sub(&self, other: &Self) -> Self::Diff {
        array::from_fn(|i| self.0[i] - other.0[i]).into()
    }
}

impl<Sp, const DIM: usize> Linear for Color<[f64; DIM], Sp> {
    type Scalar = f64;

    /// Returns the all-zeroes color (black).
    fn zero() -> Self {
        [0.0; DIM].into()
    }
    #[inline]
    fn neg(&self) -> Self {
        self.0.map(|c| -c).into()
    }
    #[inline]
    fn mul(&self, scalar: Self::Scalar) -> Self {
        self.0.map(|c| c * scalar).into()
    }
}

impl<Sp, const DIM: usize> ApproxEq<Self, f64> for Color<[f64; DIM], Sp> {
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

impl<R: Copy, Sp> Copy for Color<R, Sp> {}

impl<R: Clone, Sp> Clone for Color<R, Sp> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<R: Default, Sp> Default for Color<R, Sp> {
    fn default() -> Self {
        Self(R::default(), PhantomData)
    }
}

impl<R: PartialEq, Sp> PartialEq for Color<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: Eq, Sp> Eq for Color<R, Sp> {}

impl<R: Debug, Space: Debug + Default> Debug for Color<R, Space> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Color<{:?}>{:?}", Space::default(), self.0)
    }
}

impl<R, Sp> From<R> for Color<R, Sp> {
    #[inline]
    fn from(els: R) -> Self {
        Self(els, PhantomData)
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::math::Lerp;

    use super::*;

    #[test]
    fn color_components() {
        assert_eq!(rgb(0xFF, 0, 0).r(), 0xFF);
        assert_eq!(rgb(0, 0xFF, 0).g(), 0xFF);
        assert_eq!(rgb(0, 0, 0xFF).b(), 0xFF);

        let c = hsv(0.25, 0.5, 0.75);
        assert_eq!((c.h(), c.s(), c.v()), (0.25, 0.5, 0.75));
    }

    #[test]
    fn rgb_to_u32() {
        assert_eq!(rgb(0x11, 0x22, 0x33).to_rgb_u32(), 0x00_11_22_33);
    }

    #[test]
    fn rgbf_to_u8() {
        assert_eq!(rgb(1.0, 0.5, -1.0).to_color3(), rgb(0xFF, 0x80, 0x00));
        assert_eq!(rgb(2.0, 0.0, 0.2).to_color3(), rgb(0xFF, 0x00, 0x33));
    }

    #[test]
    fn hsv_primaries_to_rgb() {
        assert_approx_eq!(hsv(0.0, 1.0, 1.0).to_rgb(), rgb(1.0, 0.0, 0.0));
        assert_approx_eq!(hsv(1.0 / 3.0, 1.0, 1.0).to_rgb(), rgb(0.0, 1.0, 0.0));
        assert_approx_eq!(hsv(2.0 / 3.0, 1.0, 1.0).to_rgb(), rgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn hsv_secondaries_to_rgb() {
        assert_approx_eq!(hsv(1.0 / 6.0, 1.0, 1.0).to_rgb(), rgb(1.0, 1.0, 0.0));
        assert_approx_eq!(hsv(0.5, 1.0, 1.0).to_rgb(), rgb(0.0, 1.0, 1.0));
        assert_approx_eq!(hsv(5.0 / 6.0, 1.0, 1.0).to_rgb(), rgb(1.0, 0.0, 1.0));
    }

    #[test]
    fn hsv_hue_wraps_around() {
        assert_approx_eq!(hsv(1.0, 1.0, 1.0).to_rgb(), rgb(1.0, 0.0, 0.0));
        assert_approx_eq!(hsv(-0.5, 1.0, 1.0).to_rgb(), rgb(0.0, 1.0, 1.0));
    }

    #[test]
    fn hsv_zero_saturation_is_gray() {
        let c = hsv(0.7, 0.0, 0.4).to_rgb();
        assert_eq!(c, rgb(0.4, 0.4, 0.4));
    }

    #[test]
    fn hsv_palette_channel_bounds() {
        // Channels of the default face palette stay within [v(1-s), v]
        for i in 0..12 {
            let c = hsv(i as f64 / 12.0, 0.65, 0.95).to_rgb();
            for ch in c.0 {
                assert!((0.95 * 0.35 - 1e-12..=0.95 + 1e-12).contains(&ch));
            }
        }
    }

    #[test]
    fn color_lerp() {
        let a: Color3f = rgb(0.0, 0.2, 1.0);
        let b = rgb(1.0, 0.4, 0.0);
        assert_approx_eq!(a.midpoint(&b), rgb(0.5, 0.3, 0.5));
    }

    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", rgb(1u8, 2, 3)),
            "Color<Rgb>[1, 2, 3]"
        );
    }
}
