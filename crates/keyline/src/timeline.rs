//! Keyframe timeline
//!
//! An ordered sequence of frames queried by time. Frames are kept sorted
//! ascending by time; frames that share a time keep their relative order.
//!
//! # Lookup rules
//!
//! - `nearest` scans from the first frame and keeps the first strict
//!   minimum distance, so among equidistant frames the lowest index wins
//! - `next` and `previous` are strict: a frame exactly at the query time
//!   is never returned
//! - `interpolation` clamps to the first/last frame outside the range

use std::cmp::Ordering;
use std::ops::Index;

use keyline_blend::{Blend, Result, Value};

use crate::builder::TimelineBuilder;
use crate::frame::Frame;
use crate::interpolation::{Interpolation, Interpolator};

/// Order two frame times
///
/// `-0.0` and `0.0` compare equal, NaN follows `f64::total_cmp`, so the
/// ordering is total and sorting never panics.
fn compare_time(a: f64, b: f64) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// An ordered collection of time-stamped frames
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<T = Value> {
    /// Frames sorted by time
    frames: Vec<Frame<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self { frames: Vec::new() }
    }
}

impl<T> Timeline<T> {
    /// Create a timeline, sorting the frames by time
    pub fn new(frames: Vec<Frame<T>>) -> Self {
        let mut timeline = Self { frames };
        timeline.sort();
        timeline
    }

    /// Create a timeline from frames the caller guarantees are sorted
    ///
    /// No sort is performed. Out-of-order input is reported in debug builds
    /// but otherwise left as is.
    pub fn presorted(frames: Vec<Frame<T>>) -> Self {
        let timeline = Self { frames };
        if cfg!(debug_assertions) && !timeline.is_sorted() {
            tracing::warn!(
                "Timeline of {} frames constructed as presorted but frames are out of order",
                timeline.frames.len()
            );
        }
        timeline
    }

    /// Start building a timeline
    pub fn builder() -> TimelineBuilder<T> {
        TimelineBuilder::new()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Stable-sort the frames ascending by time
    ///
    /// Needed after editing frame times through `frames_mut` or the other
    /// `*_mut` accessors.
    pub fn sort(&mut self) {
        self.frames.sort_by(|a, b| compare_time(a.time, b.time));
        tracing::trace!("Timeline sorted: {} frames", self.frames.len());
    }

    /// Check if the frames are currently in ascending time order
    pub fn is_sorted(&self) -> bool {
        self.frames
            .windows(2)
            .all(|pair| compare_time(pair[0].time, pair[1].time) != Ordering::Greater)
    }

    /// Append a frame and re-sort
    pub fn add(&mut self, frame: Frame<T>) {
        self.frames.push(frame);
        self.sort();
    }

    /// Remove `remove_count` frames at `index` and insert `inserted` there
    ///
    /// Follows array splice clamping: a negative `index` counts from the
    /// end, an out-of-range `index` clamps to the bounds, and `remove_count`
    /// clamps to the frames available. The timeline is re-sorted only if at
    /// least one frame was inserted. Returns the removed frames in their
    /// previous order.
    pub fn splice<I>(&mut self, index: isize, remove_count: isize, inserted: I) -> Vec<Frame<T>>
    where
        I: IntoIterator<Item = Frame<T>>,
    {
        let len = self.frames.len() as isize;
        let start = if index < 0 {
            (len + index).max(0)
        } else {
            index.min(len)
        };
        let remove = remove_count.clamp(0, len - start);
        let range = start as usize..(start + remove) as usize;

        let mut inserted = inserted.into_iter().peekable();
        let resort = inserted.peek().is_some();

        let removed: Vec<_> = self.frames.splice(range, inserted).collect();
        tracing::trace!(
            "Timeline splice at {}: removed {} frames, now {}",
            start,
            removed.len(),
            self.frames.len()
        );

        if resort {
            self.sort();
        }
        removed
    }

    /// Remove all frames
    pub fn clear(&mut self) {
        self.frames.clear();
        tracing::trace!("Timeline cleared");
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Number of frames
    pub fn count(&self) -> usize {
        self.frames.len()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The frames in time order
    pub fn frames(&self) -> &[Frame<T>] {
        &self.frames
    }

    /// Mutable access to the frames
    ///
    /// Changing a frame's time may break the ordering; call `sort` after.
    pub fn frames_mut(&mut self) -> &mut [Frame<T>] {
        &mut self.frames
    }

    /// Consume the timeline, returning its frames
    pub fn into_frames(self) -> Vec<Frame<T>> {
        self.frames
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame<T>> {
        self.frames.iter()
    }

    pub fn first(&self) -> Option<&Frame<T>> {
        self.frames.first()
    }

    pub fn last(&self) -> Option<&Frame<T>> {
        self.frames.last()
    }

    /// Times of the first and last frames
    pub fn span(&self) -> Option<(f64, f64)> {
        Some((self.first()?.time, self.last()?.time))
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Index of the frame closest to `time`
    ///
    /// With a `radius`, only frames within that distance qualify (`None`
    /// means unbounded). Among equidistant frames the lowest index wins.
    pub fn nearest_index(&self, time: f64, radius: Option<f64>) -> Option<usize> {
        let radius = radius.unwrap_or(f64::MAX);
        let mut min_dist = f64::MAX;
        let mut nearest = None;

        for (i, frame) in self.frames.iter().enumerate() {
            let dist = (frame.time - time).abs();
            if dist < min_dist && dist <= radius {
                min_dist = dist;
                nearest = Some(i);
            }
        }
        nearest
    }

    /// The frame closest to `time`, optionally within `radius`
    pub fn nearest(&self, time: f64, radius: Option<f64>) -> Option<&Frame<T>> {
        self.nearest_index(time, radius).map(|i| &self.frames[i])
    }

    /// Mutable form of `nearest`
    pub fn nearest_mut(&mut self, time: f64, radius: Option<f64>) -> Option<&mut Frame<T>> {
        let index = self.nearest_index(time, radius)?;
        Some(&mut self.frames[index])
    }

    /// Index of the first frame at exactly `time`
    pub fn get_index(&self, time: f64) -> Option<usize> {
        self.nearest_index(time, Some(0.0))
    }

    /// The first frame at exactly `time`
    pub fn get(&self, time: f64) -> Option<&Frame<T>> {
        self.nearest(time, Some(0.0))
    }

    /// Mutable form of `get`
    pub fn get_mut(&mut self, time: f64) -> Option<&mut Frame<T>> {
        self.nearest_mut(time, Some(0.0))
    }

    /// The earliest frame strictly after `time`
    pub fn next(&self, time: f64) -> Option<&Frame<T>> {
        self.frames.iter().find(|frame| time < frame.time)
    }

    /// The latest frame strictly before `time`
    pub fn previous(&self, time: f64) -> Option<&Frame<T>> {
        self.frames.iter().rev().find(|frame| time > frame.time)
    }

    /// Find the frames bracketing `time` and the factor between them
    ///
    /// Returns `None` for an empty timeline. Before the first frame this is
    /// the first frame with `t = 0`; at or after the last frame, the last
    /// frame with `t = 0`.
    pub fn interpolation(&self, time: f64) -> Option<Interpolation> {
        let last = self.frames.len().checked_sub(1)?;

        // Last frame at or before the query time
        let prev = match self.frames.iter().rposition(|frame| time >= frame.time) {
            None => return Some(Interpolation::exact(0)),
            Some(prev) if prev == last => return Some(Interpolation::exact(last)),
            Some(prev) => prev,
        };

        let start = &self.frames[prev];
        let end = &self.frames[prev + 1];

        let time = start.time.max(time.min(end.time));
        let span = end.time - start.time;
        // Only non-finite frame times can produce a degenerate span here;
        // hold the start frame rather than emit NaN
        let t = if span > 0.0 && span.is_finite() {
            (time - start.time) / span
        } else {
            0.0
        };

        Some(Interpolation {
            start: prev,
            end: prev + 1,
            t,
        })
    }

    /// Resolve the bracketing frames of an interpolation
    fn bracket(&self, lerp: &Interpolation) -> (&Frame<T>, &Frame<T>) {
        (&self.frames[lerp.start], &self.frames[lerp.end])
    }

    // ========================================================================
    // Values
    // ========================================================================

    /// Evaluate `time` with a custom interpolation function
    ///
    /// The function receives the start frame, the end frame and the factor;
    /// its result is returned untouched. Outside the timeline's range start
    /// and end are the same frame with `t = 0`. Returns `None` when empty.
    pub fn value_with<F, R>(&self, time: f64, interpolate: F) -> Option<R>
    where
        F: FnOnce(&Frame<T>, &Frame<T>, f64) -> R,
    {
        let lerp = self.interpolation(time)?;
        let (start, end) = self.bracket(&lerp);
        Some(interpolate(start, end, lerp.t))
    }

    /// Evaluate `time` with an interpolator strategy
    pub fn value_using<I>(&self, time: f64, interpolator: &mut I) -> Option<I::Output>
    where
        I: Interpolator<T> + ?Sized,
    {
        self.value_with(time, |start, end, t| interpolator.interpolate(start, end, t))
    }
}

impl<T: Blend> Timeline<T> {
    /// Linearly blended value at `time`
    ///
    /// Outside the timeline's range this is exactly the first or last
    /// frame's value. Returns `Ok(None)` for an empty timeline.
    pub fn value(&self, time: f64) -> Result<Option<T>> {
        let Some(lerp) = self.interpolation(time) else {
            return Ok(None);
        };
        let (start, end) = self.bracket(&lerp);

        if lerp.is_exact() {
            return Ok(Some(start.value.clone()));
        }
        start.value.blend(&end.value, lerp.t).map(Some)
    }

    /// Linearly blended value at `time`, written into `out`
    ///
    /// Reuses the storage of `out`, which must have the same shape as the
    /// frame values. Outside the timeline's range the first or last frame's
    /// value is copied in exactly. Returns `Ok(false)` and leaves `out`
    /// untouched for an empty timeline.
    pub fn value_into(&self, time: f64, out: &mut T) -> Result<bool> {
        let Some(lerp) = self.interpolation(time) else {
            return Ok(false);
        };
        let (start, end) = self.bracket(&lerp);

        if lerp.is_exact() {
            start.value.copy_into(out)?;
        } else {
            start.value.blend_into(&end.value, lerp.t, out)?;
        }
        Ok(true)
    }
}

// ============================================================================
// Collection Traits
// ============================================================================

impl<T> From<Vec<Frame<T>>> for Timeline<T> {
    fn from(frames: Vec<Frame<T>>) -> Self {
        Self::new(frames)
    }
}

impl<T> FromIterator<Frame<T>> for Timeline<T> {
    fn from_iter<I: IntoIterator<Item = Frame<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Extend<Frame<T>> for Timeline<T> {
    /// Append frames, then sort once
    fn extend<I: IntoIterator<Item = Frame<T>>>(&mut self, iter: I) {
        self.frames.extend(iter);
        self.sort();
    }
}

impl<T> Index<usize> for Timeline<T> {
    type Output = Frame<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.frames[index]
    }
}

impl<'a, T> IntoIterator for &'a Timeline<T> {
    type Item = &'a Frame<T>;
    type IntoIter = std::slice::Iter<'a, Frame<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::Linear;

    fn scalar_frames() -> Vec<Frame<f64>> {
        vec![
            Frame::new(2.0, 1.0),
            Frame::new(4.0, 2.0),
            Frame::new(0.0, 3.0),
        ]
    }

    fn times<T>(timeline: &Timeline<T>) -> Vec<f64> {
        timeline.iter().map(|frame| frame.time).collect()
    }

    #[test]
    fn test_new_sorts_frames() {
        let timeline = Timeline::new(scalar_frames());
        assert_eq!(timeline.count(), 3);
        assert_eq!(
            timeline.frames(),
            &[
                Frame::new(0.0, 3.0),
                Frame::new(2.0, 1.0),
                Frame::new(4.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_presorted_skips_sort() {
        let timeline = Timeline::presorted(scalar_frames());
        assert_eq!(times(&timeline), [2.0, 4.0, 0.0]);
        assert!(!timeline.is_sorted());
    }

    #[test]
    fn test_default_is_empty() {
        let timeline: Timeline = Timeline::default();
        assert!(timeline.is_empty());
        assert_eq!(timeline.count(), 0);
        assert_eq!(timeline.span(), None);
    }

    #[test]
    fn test_sort_is_stable() {
        let timeline = Timeline::new(vec![
            Frame::new(1.0, 10.0),
            Frame::new(0.0, 0.0),
            Frame::new(1.0, 20.0),
            Frame::new(1.0, 30.0),
        ]);
        let values: Vec<_> = timeline.iter().map(|frame| frame.value).collect();
        assert_eq!(values, [0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_sort_treats_signed_zero_as_tie() {
        let timeline = Timeline::new(vec![Frame::new(0.0, 1.0), Frame::new(-0.0, 2.0)]);
        assert_eq!(timeline[0].value, 1.0);
        assert_eq!(timeline[1].value, 2.0);
    }

    #[test]
    fn test_sort_with_nan_does_not_panic() {
        let mut timeline = Timeline::new(vec![
            Frame::new(f64::NAN, 0.0),
            Frame::new(1.0, 1.0),
            Frame::new(0.0, 2.0),
        ]);
        timeline.sort();
        assert_eq!(timeline[0].time, 0.0);
        assert_eq!(timeline[1].time, 1.0);
        assert!(timeline[2].time.is_nan());
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut timeline = Timeline::new(scalar_frames());
        let once = timeline.clone();
        timeline.sort();
        assert_eq!(timeline, once);
    }

    #[test]
    fn test_add_resorts() {
        let mut timeline = Timeline::new(scalar_frames());
        timeline.add(Frame::new(1.0, 9.0));
        assert_eq!(times(&timeline), [0.0, 1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_splice_pure_removal() {
        let mut timeline = Timeline::new(scalar_frames());
        let removed = timeline.splice(1, 1, []);
        assert_eq!(removed, [Frame::new(2.0, 1.0)]);
        assert_eq!(times(&timeline), [0.0, 4.0]);
    }

    #[test]
    fn test_splice_insert_resorts() {
        let mut timeline = Timeline::new(scalar_frames());
        let removed = timeline.splice(0, 0, [Frame::new(3.0, 7.0)]);
        assert!(removed.is_empty());
        assert_eq!(times(&timeline), [0.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_splice_replace() {
        let mut timeline = Timeline::new(scalar_frames());
        let removed = timeline.splice(0, 2, [Frame::new(5.0, 0.0)]);
        assert_eq!(removed, [Frame::new(0.0, 3.0), Frame::new(2.0, 1.0)]);
        assert_eq!(times(&timeline), [4.0, 5.0]);
    }

    #[test]
    fn test_splice_clamps_bounds() {
        let mut timeline = Timeline::new(scalar_frames());

        // Negative index counts from the end
        let removed = timeline.splice(-1, 5, []);
        assert_eq!(removed, [Frame::new(4.0, 2.0)]);

        // Far negative index clamps to 0, negative count removes nothing
        let removed = timeline.splice(-10, -3, []);
        assert!(removed.is_empty());
        assert_eq!(timeline.count(), 2);

        // Index past the end appends
        timeline.splice(100, 1, [Frame::new(-1.0, 0.0)]);
        assert_eq!(times(&timeline), [-1.0, 0.0, 2.0]);
    }

    #[test]
    fn test_clear() {
        let mut timeline = Timeline::new(scalar_frames());
        timeline.clear();
        assert_eq!(timeline.count(), 0);
        assert_eq!(timeline.value(1.0).unwrap(), None);
    }

    #[test]
    fn test_nearest() {
        let timeline = Timeline::new(scalar_frames());
        assert_eq!(timeline.nearest(3.5, Some(0.4)), None);
        assert_eq!(timeline.nearest(3.5, None), Some(&Frame::new(4.0, 2.0)));
        assert_eq!(timeline.nearest_index(-100.0, None), Some(0));
        assert_eq!(timeline.nearest_index(2.5, Some(0.5)), Some(1));
    }

    #[test]
    fn test_nearest_tie_prefers_lowest_index() {
        let timeline = Timeline::new(scalar_frames());
        // 1.0 is equidistant from 0.0 and 2.0
        assert_eq!(timeline.nearest_index(1.0, None), Some(0));

        let timeline = Timeline::new(vec![Frame::new(1.0, 1.0), Frame::new(1.0, 2.0)]);
        assert_eq!(timeline.nearest(1.0, None).map(|f| f.value), Some(1.0));
    }

    #[test]
    fn test_nearest_empty() {
        let timeline: Timeline<f64> = Timeline::default();
        assert_eq!(timeline.nearest_index(0.0, None), None);
        assert_eq!(timeline.nearest(0.0, None), None);
    }

    #[test]
    fn test_get_exact() {
        let timeline = Timeline::new(scalar_frames());
        assert_eq!(timeline.get(1.0), None);
        assert_eq!(timeline.get(2.0), Some(&Frame::new(2.0, 1.0)));
        assert_eq!(timeline.get_index(4.0), Some(2));
        assert_eq!(timeline.get_index(4.1), None);
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut timeline = Timeline::new(scalar_frames());
        if let Some(frame) = timeline.get_mut(2.0) {
            frame.value = 100.0;
        }
        assert_eq!(timeline.get(2.0).map(|f| f.value), Some(100.0));
    }

    #[test]
    fn test_next() {
        let timeline = Timeline::new(scalar_frames());
        assert_eq!(timeline.next(-1.0).map(|f| f.time), Some(0.0));
        assert_eq!(timeline.next(0.5).map(|f| f.time), Some(2.0));
        assert_eq!(timeline.next(2.0).map(|f| f.time), Some(4.0));
        assert_eq!(timeline.next(4.0), None);
        assert_eq!(timeline.next(4.5), None);
    }

    #[test]
    fn test_previous() {
        let timeline = Timeline::new(scalar_frames());
        assert_eq!(timeline.previous(-1.0), None);
        assert_eq!(timeline.previous(0.5).map(|f| f.time), Some(0.0));
        assert_eq!(timeline.previous(2.0).map(|f| f.time), Some(0.0));
        assert_eq!(timeline.previous(4.0).map(|f| f.time), Some(2.0));
        assert_eq!(timeline.previous(4.5).map(|f| f.time), Some(4.0));
    }

    #[test]
    fn test_single_frame_neighbours() {
        let timeline = Timeline::new(vec![Frame::new(0.0, 50.0)]);
        assert_eq!(timeline.previous(100.0).map(|f| f.value), Some(50.0));
        assert_eq!(timeline.next(100.0), None);
    }

    #[test]
    fn test_interpolation() {
        let timeline = Timeline::new(scalar_frames());

        assert_eq!(timeline.interpolation(-1.0), Some(Interpolation::exact(0)));
        assert_eq!(
            timeline.interpolation(0.0),
            Some(Interpolation {
                start: 0,
                end: 1,
                t: 0.0
            })
        );
        assert_eq!(
            timeline.interpolation(3.0),
            Some(Interpolation {
                start: 1,
                end: 2,
                t: 0.5
            })
        );
        assert_eq!(timeline.interpolation(4.0), Some(Interpolation::exact(2)));
        assert_eq!(timeline.interpolation(5.0), Some(Interpolation::exact(2)));

        let empty: Timeline<f64> = Timeline::default();
        assert_eq!(empty.interpolation(0.0), None);
    }

    #[test]
    fn test_interpolation_duplicate_times() {
        // The later duplicate is the bracket start, so the span is never zero
        let timeline = Timeline::new(vec![
            Frame::new(0.0, 0.0),
            Frame::new(1.0, 10.0),
            Frame::new(1.0, 20.0),
            Frame::new(2.0, 30.0),
        ]);
        assert_eq!(
            timeline.interpolation(1.0),
            Some(Interpolation {
                start: 2,
                end: 3,
                t: 0.0
            })
        );
        assert_eq!(timeline.value(1.0).unwrap(), Some(20.0));
        assert_eq!(timeline.value(0.5).unwrap(), Some(5.0));
    }

    #[test]
    fn test_interpolation_infinite_span_holds_start() {
        let timeline = Timeline::new(vec![
            Frame::new(f64::NEG_INFINITY, 1.0),
            Frame::new(0.0, 2.0),
        ]);
        let lerp = timeline.interpolation(-5.0).unwrap();
        assert_eq!(
            lerp,
            Interpolation {
                start: 0,
                end: 1,
                t: 0.0
            }
        );
        assert_eq!(timeline.value(-5.0).unwrap(), Some(1.0));
    }

    #[test]
    fn test_scalar_values() {
        let timeline = Timeline::new(scalar_frames());
        assert_eq!(timeline.value(0.0).unwrap(), Some(3.0));
        assert_eq!(timeline.value(1.0).unwrap(), Some(2.0));
        assert_eq!(timeline.value(-1.0).unwrap(), Some(3.0));
        assert_eq!(timeline.value(4.0).unwrap(), Some(2.0));
        assert_eq!(timeline.value(3.0).unwrap(), Some(1.5));
        assert_eq!(timeline.value(5.0).unwrap(), Some(2.0));
    }

    #[test]
    fn test_value_into_reuses_buffer() {
        let timeline = Timeline::new(vec![
            Frame::new(0.0, vec![0.0, 0.0]),
            Frame::new(1.0, vec![10.0, 5.0]),
        ]);
        let mut out = vec![0.0, 0.0];
        let ptr = out.as_ptr();

        assert!(timeline.value_into(0.5, &mut out).unwrap());
        assert_eq!(out, [5.0, 2.5]);
        assert_eq!(out.as_ptr(), ptr);
    }

    #[test]
    fn test_value_into_boundaries_copy_exact_values() {
        let timeline = Timeline::new(vec![
            Frame::new(0.0, Value::from([f64::INFINITY, 1.0])),
            Frame::new(1.0, Value::from([2.0, f64::NEG_INFINITY])),
        ]);
        let mut out = Value::from([0.0, 0.0]);

        assert!(timeline.value_into(-1.0, &mut out).unwrap());
        assert_eq!(out, timeline[0].value);
        assert_eq!(Some(out.clone()), timeline.value(-1.0).unwrap());

        assert!(timeline.value_into(5.0, &mut out).unwrap());
        assert_eq!(out, timeline[1].value);
        assert_eq!(Some(out.clone()), timeline.value(5.0).unwrap());

        let mut scalar = Value::default();
        assert!(timeline.value_into(-1.0, &mut scalar).is_err());
    }

    #[test]
    fn test_value_into_empty_leaves_buffer() {
        let timeline: Timeline<[f64; 2]> = Timeline::default();
        let mut out = [7.0, 7.0];
        assert!(!timeline.value_into(0.5, &mut out).unwrap());
        assert_eq!(out, [7.0, 7.0]);
    }

    #[test]
    fn test_value_mixed_shapes_is_error() {
        let timeline = Timeline::new(vec![
            Frame::new(0.0, Value::from(1.0)),
            Frame::new(1.0, Value::from([1.0, 2.0])),
        ]);
        assert!(timeline.value(0.5).is_err());
        // Boundaries never blend, so they still resolve
        assert_eq!(timeline.value(2.0).unwrap(), Some(Value::from([1.0, 2.0])));
    }

    #[test]
    fn test_value_with_custom_function() {
        let timeline = Timeline::new(vec![
            Frame::new(0.0, [0.0, 0.0]),
            Frame::new(1.0, [10.0, 5.0]),
        ]);
        let mut out = [0.0, 0.0];

        let seen = timeline.value_with(0.5, |start, end, t| {
            out[0] = 50.0;
            out[1] = 25.0;
            (start.time, end.time, t)
        });

        assert_eq!(seen, Some((0.0, 1.0, 0.5)));
        assert_eq!(out, [50.0, 25.0]);
    }

    #[test]
    fn test_value_with_at_boundary_passes_same_frame() {
        let timeline = Timeline::new(scalar_frames());
        let seen = timeline.value_with(10.0, |start, end, t| (start.time, end.time, t));
        assert_eq!(seen, Some((4.0, 4.0, 0.0)));

        let empty: Timeline<f64> = Timeline::default();
        assert_eq!(empty.value_with(0.0, |_, _, t| t), None);
    }

    #[test]
    fn test_value_using_linear() {
        let timeline = Timeline::new(scalar_frames());
        let value = timeline.value_using(1.0, &mut Linear);
        assert_eq!(value.map(|v| v.unwrap()), Some(2.0));
    }

    #[test]
    fn test_collection_traits() {
        let mut timeline: Timeline<f64> = scalar_frames().into_iter().collect();
        assert!(timeline.is_sorted());

        timeline.extend([Frame::new(3.0, 0.0), Frame::new(-2.0, 0.0)]);
        assert_eq!(times(&timeline), [-2.0, 0.0, 2.0, 3.0, 4.0]);
        assert_eq!(timeline.span(), Some((-2.0, 4.0)));

        let sum: f64 = (&timeline).into_iter().map(|frame| frame.value).sum();
        assert_eq!(sum, 6.0);
        assert_eq!(timeline.into_frames().len(), 5);
    }
}
