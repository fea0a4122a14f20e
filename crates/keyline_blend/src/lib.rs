//! Keyline Blend
//!
//! The linear-blend primitive used by keyline timelines.
//!
//! # Features
//!
//! - **Blend trait**: component-wise `a + (b - a) * t` with allocating and
//!   buffer-reusing forms
//! - **Dynamic values**: `Value` holds either a scalar or a fixed-length
//!   vector, decided at runtime
//! - **Plain types**: `f32`, `f64`, `[f64; N]` and `Vec<f64>` blend directly

pub mod blend;
pub mod error;
pub mod value;

pub use blend::{lerp, Blend};
pub use error::{BlendError, Result};
pub use value::{Components, Shape, Value};
