//! Timeline frames
//!
//! A frame is a plain time-stamped value. Extra named fields ride along in
//! an insertion-ordered side channel that custom interpolators can consult
//! (easing hints, tangents, labels).

use indexmap::IndexMap;
use keyline_blend::Value;

/// Extra named fields attached to a frame
pub type Extras = IndexMap<String, serde_json::Value>;

/// A single time-stamped value record
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<T = Value> {
    /// Time position of this frame
    pub time: f64,
    /// Value at this frame
    pub value: T,
    /// Extra fields carried along unchanged
    pub extras: Extras,
}

impl<T> Frame<T> {
    /// Create a new frame with no extra fields
    pub fn new(time: f64, value: T) -> Self {
        Self {
            time,
            value,
            extras: Extras::new(),
        }
    }

    /// Attach an extra field (builder pattern)
    pub fn with_extra(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Look up an extra field by name
    pub fn extra(&self, key: &str) -> Option<&serde_json::Value> {
        self.extras.get(key)
    }
}

impl<T> From<(f64, T)> for Frame<T> {
    fn from((time, value): (f64, T)) -> Self {
        Self::new(time, value)
    }
}
