//! Blend error types

use thiserror::Error;

use crate::value::Shape;

/// Errors raised when two values (or an output buffer) cannot be blended
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendError {
    /// Start and end values have different shapes
    #[error("Cannot blend a {start} value with a {end} value")]
    ShapeMismatch { start: Shape, end: Shape },

    /// Output buffer is a different kind of value than the operands
    #[error("Output buffer is a {found} value, expected {expected}")]
    OutputShape { expected: Shape, found: Shape },

    /// Output buffer has the wrong number of components
    #[error("Output buffer has {found} components, expected {expected}")]
    OutputLength { expected: usize, found: usize },
}

/// Result type for blend operations
pub type Result<T> = std::result::Result<T, BlendError>;
