//! Interpolation parameters and interpolator strategies

use keyline_blend::{Blend, Result};

use crate::frame::Frame;

/// The frames bracketing a query time and the blend factor between them
///
/// Outside the timeline's range both indices point at the first or last
/// frame and `t` is `0.0`, meaning "use this frame's value as is".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolation {
    /// Index of the frame at or before the query time
    pub start: usize,
    /// Index of the frame after the query time
    pub end: usize,
    /// Normalized position between `start` and `end` (0.0 to 1.0)
    pub t: f64,
}

impl Interpolation {
    /// An interpolation that resolves to a single frame
    pub fn exact(index: usize) -> Self {
        Self {
            start: index,
            end: index,
            t: 0.0,
        }
    }

    /// Check if this resolves to a single frame without blending
    pub fn is_exact(&self) -> bool {
        self.start == self.end
    }
}

/// Strategy for turning two bracketing frames and a factor into a value
///
/// Passed per call to `Timeline::value_using`; the timeline imposes no
/// policy on the output. An interpolator that writes into a reusable buffer
/// owns that buffer as part of its own state.
pub trait Interpolator<T> {
    type Output;

    fn interpolate(&mut self, start: &Frame<T>, end: &Frame<T>, t: f64) -> Self::Output;
}

/// The default component-wise linear blend
#[derive(Clone, Copy, Debug, Default)]
pub struct Linear;

impl<T: Blend> Interpolator<T> for Linear {
    type Output = Result<T>;

    fn interpolate(&mut self, start: &Frame<T>, end: &Frame<T>, t: f64) -> Self::Output {
        start.value.blend(&end.value, t)
    }
}
