//! Trail model: decaying annotation points and the bounded buffer that owns them.
//!
//! The buffer is single-writer at any instant (either the local capture path
//! or the sync subscriber, never both for one instance) and single-reader
//! (the renderer). `replace_all` swaps the whole point set in one step, so a
//! reader always sees either the old or the new complete trail.

#[cfg(test)]
#[path = "trail_test.rs"]
mod trail_test;

use crate::consts::{DECAY_EPSILON, FADE_RATE, MAX_TRAIL_LEN};

/// A single point of the laser trail.
///
/// Immutable after creation except `intensity`, which the decay step mutates
/// in place. Owned exclusively by the buffer that holds it; a remote surface
/// holds its own independently scaled copies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    /// Horizontal position in container pixels.
    pub x: f64,
    /// Vertical position in container pixels.
    pub y: f64,
    /// Display intensity in `[0, 1]`.
    pub intensity: f64,
    /// Creation time in milliseconds since the epoch.
    pub created_at_ms: f64,
    /// Stroke width in pixels assigned at capture time.
    pub stroke_width: f64,
}

impl TrailPoint {
    /// Build a point, clamping intensity into `[0, 1]`.
    ///
    /// Non-finite intensity is treated as zero so the buffer never holds a
    /// NaN that would survive every decay comparison.
    #[must_use]
    pub fn new(x: f64, y: f64, intensity: f64, created_at_ms: f64, stroke_width: f64) -> Self {
        let intensity = if intensity.is_finite() { intensity.clamp(0.0, 1.0) } else { 0.0 };
        Self { x, y, intensity, created_at_ms, stroke_width }
    }
}

/// Ordered, capacity-bounded sequence of decaying points.
///
/// Insertion order is drawing order. Once `max_len` is exceeded the oldest
/// point is evicted first — recency, not strength, bounds memory.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: Vec<TrailPoint>,
    max_len: usize,
}

impl TrailBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_len(MAX_TRAIL_LEN)
    }

    #[must_use]
    pub fn with_max_len(max_len: usize) -> Self {
        Self { points: Vec::new(), max_len }
    }

    /// Append a point, evicting the oldest entry if the buffer is full.
    ///
    /// Points with non-finite coordinates are dropped; a corrupt coordinate
    /// must not poison the polyline.
    pub fn push(&mut self, point: TrailPoint) {
        if !point.x.is_finite() || !point.y.is_finite() {
            return;
        }
        self.points.push(point);
        if self.points.len() > self.max_len {
            self.points.remove(0);
        }
    }

    /// Apply one tick of geometric decay and evict points at or below the
    /// decay floor. The render loop is the decay clock: fade progress is a
    /// function of frames elapsed, not wall-clock time.
    pub fn decay_step(&mut self) {
        for point in &mut self.points {
            point.intensity *= FADE_RATE;
        }
        self.points.retain(|p| p.intensity > DECAY_EPSILON);
    }

    /// Atomically replace the entire contents. Used by the sync subscriber:
    /// the producer re-sends the whole live stroke each cycle, so a full swap
    /// avoids ghost points and self-heals after a dropped fetch.
    pub fn replace_all(&mut self, points: Vec<TrailPoint>) {
        self.points = points;
        if self.points.len() > self.max_len {
            let excess = self.points.len() - self.max_len;
            self.points.drain(..excess);
        }
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Read-only view of the points in insertion (drawing) order.
    #[must_use]
    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new()
    }
}
