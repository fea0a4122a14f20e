//! Timeline builder
//!
//! Builder-pattern construction for timelines, including the option to
//! skip the initial sort for input that is already ordered.

use keyline_blend::Value;

use crate::frame::Frame;
use crate::timeline::Timeline;

/// Builder for creating timelines
///
/// # Example
///
/// ```
/// use keyline::TimelineBuilder;
///
/// let timeline = TimelineBuilder::new()
///     .frame(1.0, 10.0)
///     .frame(0.0, 0.0)
///     .build();
///
/// assert_eq!(timeline.value(0.5).unwrap(), Some(5.0));
/// ```
#[derive(Clone, Debug)]
pub struct TimelineBuilder<T = Value> {
    frames: Vec<Frame<T>>,
    presorted: bool,
}

impl<T> Default for TimelineBuilder<T> {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            presorted: false,
        }
    }
}

impl<T> TimelineBuilder<T> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame at the given time
    pub fn frame(mut self, time: f64, value: T) -> Self {
        self.frames.push(Frame::new(time, value));
        self
    }

    /// Add a fully constructed frame (e.g. one carrying extras)
    pub fn push(mut self, frame: Frame<T>) -> Self {
        self.frames.push(frame);
        self
    }

    /// Add several frames
    pub fn frames(mut self, frames: impl IntoIterator<Item = Frame<T>>) -> Self {
        self.frames.extend(frames);
        self
    }

    /// Declare the frames already sorted, skipping the sort on build
    pub fn presorted(mut self, presorted: bool) -> Self {
        self.presorted = presorted;
        self
    }

    /// Build the timeline
    pub fn build(self) -> Timeline<T> {
        tracing::debug!(
            "Building timeline with {} frames (presorted: {})",
            self.frames.len(),
            self.presorted
        );
        if self.presorted {
            Timeline::presorted(self.frames)
        } else {
            Timeline::new(self.frames)
        }
    }
}
