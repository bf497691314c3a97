//! Wire schema: the normalized point that crosses the process boundary.
//!
//! A producer publishes points in its own container's pixel space, tagged
//! with that container's dimensions. Any consumer can then rescale to its own
//! viewport, so a small control panel and a full-screen display annotate the
//! geometrically corresponding location. The channel holds the current
//! unfinished-stroke snapshot, not a history log.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::consts::{AGE_FADE_HORIZON_MS, BASE_STROKE_WIDTH_PX, DECAY_EPSILON};
use crate::trail::TrailPoint;

/// A trail point in producer-container pixel space, plus the producer's
/// container dimensions and capture timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    /// Horizontal position in producer-container pixels.
    pub x: f64,
    /// Vertical position in producer-container pixels.
    pub y: f64,
    /// Capture intensity in `[0, 1]`.
    pub intensity: f64,
    /// Producer container width in pixels at capture time.
    pub container_width: f64,
    /// Producer container height in pixels at capture time.
    pub container_height: f64,
    /// Capture time in milliseconds since the epoch.
    pub timestamp: f64,
}

impl NormalizedPoint {
    /// Serialize a local trail point against the producer container's
    /// *current* bounding box.
    #[must_use]
    pub fn from_local(point: &TrailPoint, container_width: f64, container_height: f64) -> Self {
        Self {
            x: point.x,
            y: point.y,
            intensity: point.intensity,
            container_width,
            container_height,
            timestamp: point.created_at_ms,
        }
    }

    /// Whether the payload is usable: finite fields and positive container
    /// dimensions. A malformed point is dropped, never the whole batch.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.intensity.is_finite()
            && self.timestamp.is_finite()
            && self.container_width.is_finite()
            && self.container_height.is_finite()
            && self.container_width > 0.0
            && self.container_height > 0.0
    }

    /// Age of this point at `now_ms`, clamped to non-negative. Clock skew can
    /// make a remote timestamp sit slightly in the future.
    #[must_use]
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.timestamp).max(0.0)
    }

    /// Multiplier in `[0, 1]` fading a point by network age over the fixed
    /// horizon. Independent of, and compounding with, the per-tick decay
    /// applied once the point is in a local buffer.
    #[must_use]
    pub fn age_fade(&self, now_ms: f64) -> f64 {
        (1.0 - self.age_ms(now_ms) / AGE_FADE_HORIZON_MS).max(0.0)
    }

    /// Rescale into a consumer container of the given dimensions, applying
    /// the age fade. A point already faded by network age arrives dimmer.
    #[must_use]
    pub fn rescale(&self, target_width: f64, target_height: f64, now_ms: f64) -> TrailPoint {
        let sx = target_width / self.container_width;
        let sy = target_height / self.container_height;
        TrailPoint::new(
            self.x * sx,
            self.y * sy,
            self.intensity * self.age_fade(now_ms),
            self.timestamp,
            BASE_STROKE_WIDTH_PX,
        )
    }
}

/// Rescale a fetched snapshot for a consumer surface.
///
/// Malformed points are dropped individually, and points whose age-faded
/// intensity already sits at the decay floor are skipped rather than parked
/// in the buffer for one tick.
#[must_use]
pub fn rescale_batch(
    points: &[NormalizedPoint],
    target_width: f64,
    target_height: f64,
    now_ms: f64,
) -> Vec<TrailPoint> {
    points
        .iter()
        .filter(|p| p.is_well_formed())
        .map(|p| p.rescale(target_width, target_height, now_ms))
        .filter(|p| p.intensity > DECAY_EPSILON)
        .collect()
}
