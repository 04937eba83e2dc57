//! The [`Scalar`] element trait implemented by every grid value type.

use std::fmt::Debug;

/// A numeric value that can be stored in a field cell.
///
/// The stencil only needs three things from an element type: an additive
/// identity for fresh cells and out-of-bounds reads, a four-way mean for the
/// neighbour-average update, and a lossy round trip through `f64` for the
/// explicit diffusion update.
///
/// # Integer means
///
/// Integer implementations widen to `i128` before summing, so
/// `mean4(i32::MAX, i32::MAX, i32::MAX, i32::MAX)` is `i32::MAX` rather than
/// an overflow. The division truncates toward zero.
///
/// ```
/// use plume_core::Scalar;
///
/// assert_eq!(f32::mean4(100.0, 0.0, 0.0, 0.0), 25.0);
/// assert_eq!(i32::mean4(-1, -1, -1, 0), 0);
/// assert_eq!(<u8 as Scalar>::ZERO, 0);
/// ```
pub trait Scalar: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// The additive identity.
    const ZERO: Self;

    /// Arithmetic mean of four values.
    fn mean4(a: Self, b: Self, c: Self, d: Self) -> Self;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`. Integer types saturate and truncate toward zero.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0.0;

            #[inline]
            fn mean4(a: Self, b: Self, c: Self, d: Self) -> Self {
                (a + b + c + d) / 4.0
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0;

            #[inline]
            fn mean4(a: Self, b: Self, c: Self, d: Self) -> Self {
                let sum = a as i128 + b as i128 + c as i128 + d as i128;
                // |sum / 4| never exceeds the largest operand, so the
                // narrowing cast is lossless.
                (sum / 4) as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i16, i32, i64, u8, u16, u32, u64);
