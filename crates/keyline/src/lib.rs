//! Keyline
//!
//! Keyframe timelines: an ordered collection of time-stamped frames with
//! nearest/next/previous lookup and linear interpolation at arbitrary
//! query times.
//!
//! # Features
//!
//! - **Sorted storage**: frames are kept in ascending time order with a
//!   stable sort, so frames sharing a time keep their insertion order
//! - **Lookup**: nearest frame (optionally within a radius), exact-time
//!   match, and strict next/previous neighbours
//! - **Interpolation**: bracketing frames plus a normalized factor, clamped
//!   to the first/last frame outside the timeline's range
//! - **Typed values**: timelines are generic over any `Blend` value, with
//!   the dynamic `Value` (scalar or vector) as the default
//! - **Custom interpolators**: per-call closures or `Interpolator` strategy
//!   objects that can read a frame's extra fields
//!
//! # Example
//!
//! ```
//! use keyline::{Frame, Timeline};
//!
//! let timeline = Timeline::new(vec![
//!     Frame::new(2.0, 1.0),
//!     Frame::new(4.0, 2.0),
//!     Frame::new(0.0, 3.0),
//! ]);
//!
//! assert_eq!(timeline.value(3.0).unwrap(), Some(1.5));
//! assert_eq!(timeline.next(0.5).map(|f| f.time), Some(2.0));
//! ```

pub mod builder;
pub mod frame;
pub mod interpolation;
pub mod timeline;

pub use builder::TimelineBuilder;
pub use frame::{Extras, Frame};
pub use interpolation::{Interpolation, Interpolator, Linear};
pub use timeline::Timeline;

pub use keyline_blend::{lerp, Blend, BlendError, Components, Result, Shape, Value};
