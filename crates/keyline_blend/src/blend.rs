//! Linear blending
//!
//! Provides the `Blend` trait and its implementations for plain numeric
//! types. Every implementation computes `a + (b - a) * t` per component.

use crate::error::{BlendError, Result};
use crate::value::Shape;

/// Trait for values that can be linearly blended
///
/// `t` is the interpolation factor: `0.0` yields `self`, `1.0` yields
/// `other`. Values outside `[0, 1]` extrapolate; callers that need clamping
/// clamp before blending.
pub trait Blend: Clone {
    /// Blend between self and other by factor t into a fresh value
    fn blend(&self, other: &Self, t: f64) -> Result<Self>;

    /// Blend between self and other by factor t, writing into `out`
    ///
    /// Implementations backed by heap storage reuse the storage of `out`
    /// instead of reallocating.
    fn blend_into(&self, other: &Self, t: f64, out: &mut Self) -> Result<()> {
        *out = self.blend(other, t)?;
        Ok(())
    }

    /// Copy self into `out` without blending
    ///
    /// Applies the same shape checks as `blend_into` and reuses the storage
    /// of `out`.
    fn copy_into(&self, out: &mut Self) -> Result<()> {
        out.clone_from(self);
        Ok(())
    }
}

/// Linearly interpolate between two numbers
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Blend two equal-length slices component-wise into `out`
pub(crate) fn blend_slices(a: &[f64], b: &[f64], t: f64, out: &mut [f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(BlendError::ShapeMismatch {
            start: Shape::Vector(a.len()),
            end: Shape::Vector(b.len()),
        });
    }
    if out.len() != a.len() {
        return Err(BlendError::OutputLength {
            expected: a.len(),
            found: out.len(),
        });
    }

    for ((dst, &start), &end) in out.iter_mut().zip(a).zip(b) {
        *dst = lerp(start, end, t);
    }
    Ok(())
}

/// Copy a slice into an output buffer of the same length
pub(crate) fn copy_slice(src: &[f64], out: &mut [f64]) -> Result<()> {
    if out.len() != src.len() {
        return Err(BlendError::OutputLength {
            expected: src.len(),
            found: out.len(),
        });
    }
    out.copy_from_slice(src);
    Ok(())
}

// ============================================================================
// Scalar Implementations
// ============================================================================

impl Blend for f64 {
    fn blend(&self, other: &Self, t: f64) -> Result<Self> {
        Ok(lerp(*self, *other, t))
    }
}

impl Blend for f32 {
    fn blend(&self, other: &Self, t: f64) -> Result<Self> {
        Ok(self + (other - self) * t as f32)
    }
}

// ============================================================================
// Vector Implementations
// ============================================================================

impl<const N: usize> Blend for [f64; N] {
    fn blend(&self, other: &Self, t: f64) -> Result<Self> {
        let mut out = [0.0; N];
        self.blend_into(other, t, &mut out)?;
        Ok(out)
    }

    fn blend_into(&self, other: &Self, t: f64, out: &mut Self) -> Result<()> {
        for ((dst, &start), &end) in out.iter_mut().zip(self).zip(other) {
            *dst = lerp(start, end, t);
        }
        Ok(())
    }
}

impl Blend for Vec<f64> {
    fn blend(&self, other: &Self, t: f64) -> Result<Self> {
        let mut out = vec![0.0; self.len()];
        blend_slices(self, other, t, &mut out)?;
        Ok(out)
    }

    fn blend_into(&self, other: &Self, t: f64, out: &mut Self) -> Result<()> {
        blend_slices(self, other, t, out)
    }

    fn copy_into(&self, out: &mut Self) -> Result<()> {
        copy_slice(self, out)
    }
}
