//! Dynamic frame values
//!
//! `Value` is the closed set of shapes a frame value may take: a single
//! number or a fixed-length numeric vector. All frames of one timeline are
//! expected to share a shape; mixing shapes surfaces as a `BlendError`
//! when blending rather than a panic.

use std::fmt;

use smallvec::SmallVec;

use crate::blend::{blend_slices, copy_slice, lerp, Blend};
use crate::error::{BlendError, Result};

/// Component storage for vector values (2/3/4-D vectors stay inline)
pub type Components = SmallVec<[f64; 4]>;

/// The shape of a value, used for error reporting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// A single number
    Scalar,
    /// A vector with the given number of components
    Vector(usize),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => write!(f, "scalar"),
            Shape::Vector(len) => write!(f, "vec{}", len),
        }
    }
}

/// A frame value: either a scalar or a fixed-length vector
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(f64),
    Vector(Components),
}

impl Value {
    /// Create a vector value from any sequence of components
    pub fn vector(components: impl IntoIterator<Item = f64>) -> Self {
        Value::Vector(components.into_iter().collect())
    }

    /// The shape of this value
    pub fn shape(&self) -> Shape {
        match self {
            Value::Scalar(_) => Shape::Scalar,
            Value::Vector(components) => Shape::Vector(components.len()),
        }
    }

    /// Number of components (1 for scalars)
    pub fn len(&self) -> usize {
        match self {
            Value::Scalar(_) => 1,
            Value::Vector(components) => components.len(),
        }
    }

    /// True for an empty vector
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Get the scalar, if this is one
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            Value::Vector(_) => None,
        }
    }

    /// View the components as a slice (a scalar is a one-element slice)
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Value::Scalar(v) => std::slice::from_ref(v),
            Value::Vector(components) => components,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Scalar(0.0)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Scalar(v as f64)
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(v: [f64; N]) -> Self {
        Value::vector(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::Vector(Components::from_vec(v))
    }
}

impl From<&[f64]> for Value {
    fn from(v: &[f64]) -> Self {
        Value::Vector(Components::from_slice(v))
    }
}

impl Blend for Value {
    fn blend(&self, other: &Self, t: f64) -> Result<Self> {
        match (self, other) {
            (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(lerp(*a, *b, t))),
            (Value::Vector(a), Value::Vector(b)) => {
                let mut out: Components = SmallVec::from_elem(0.0, a.len());
                blend_slices(a, b, t, &mut out)?;
                Ok(Value::Vector(out))
            }
            _ => Err(BlendError::ShapeMismatch {
                start: self.shape(),
                end: other.shape(),
            }),
        }
    }

    fn blend_into(&self, other: &Self, t: f64, out: &mut Self) -> Result<()> {
        match (self, other, out) {
            (Value::Scalar(a), Value::Scalar(b), Value::Scalar(dst)) => {
                *dst = lerp(*a, *b, t);
                Ok(())
            }
            (Value::Vector(a), Value::Vector(b), Value::Vector(dst)) => {
                blend_slices(a, b, t, dst)
            }
            (a, b, _) if a.shape() != b.shape() && (a.is_scalar() || b.is_scalar()) => {
                Err(BlendError::ShapeMismatch {
                    start: a.shape(),
                    end: b.shape(),
                })
            }
            (a, _, dst) => Err(BlendError::OutputShape {
                expected: a.shape(),
                found: dst.shape(),
            }),
        }
    }

    fn copy_into(&self, out: &mut Self) -> Result<()> {
        match (self, out) {
            (Value::Scalar(v), Value::Scalar(dst)) => {
                *dst = *v;
                Ok(())
            }
            (Value::Vector(src), Value::Vector(dst)) => copy_slice(src, dst),
            (src, dst) => Err(BlendError::OutputShape {
                expected: src.shape(),
                found: dst.shape(),
            }),
        }
    }
}
