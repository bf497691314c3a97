//! Pointer capture: unified input events and the session state machine.
//!
//! Mouse (`down/move/up/leave`) and touch (`start/move/end/cancel`) collapse
//! into one abstract [`CaptureEvent`] at the DOM boundary; everything below
//! that adapter is input-source agnostic. The capture machine tracks the
//! active pointer session and decides which events become trail points.
//! It never touches the buffer itself — handlers return a [`CaptureAction`]
//! for the engine to apply, so the host can also forward appended points to
//! the sync publisher.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use crate::consts::{BASE_STROKE_WIDTH_PX, MIN_POINT_SPACING_PX, STROKE_WIDTH_JITTER_PX};

/// A position in container-relative pixels.
///
/// Computed against the host container's bounding box at event time, never
/// cached — the container may scroll or resize between events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Abstract pointer event, produced by the host's mouse/touch adapters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureEvent {
    /// Pointer-down / touch-start at a container-relative position.
    Start(Point),
    /// Pointer-move / touch-move while the session may be active.
    Move(Point),
    /// Pointer-up, pointer-leave, touch-end, or touch-cancel.
    End,
}

/// What the capture machine decided for one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureAction {
    /// Nothing to do (no session, or the move was below the spacing threshold).
    None,
    /// Append a point to the trail buffer (and publish it, if the laser is live).
    Append {
        x: f64,
        y: f64,
        intensity: f64,
        stroke_width: f64,
    },
}

/// Per-surface pointer session state.
///
/// A session starts on pointer-down, persists through moves, and ends on
/// pointer-up/leave/cancel. Ending the session does not clear the trail:
/// existing points keep decaying, producing the fade-out after release.
#[derive(Debug, Clone)]
pub struct PointerCapture {
    down: bool,
    last_appended: Option<Point>,
    min_spacing: f64,
    width_seed: u32,
}

impl PointerCapture {
    #[must_use]
    pub fn new() -> Self {
        Self {
            down: false,
            last_appended: None,
            min_spacing: MIN_POINT_SPACING_PX,
            width_seed: 0x9e37_79b9,
        }
    }

    /// Whether a pointer session is currently active.
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Feed one abstract event through the state machine.
    ///
    /// `Start` always appends a full-intensity point so a tap with no drag
    /// still leaves a visible mark. `Move` appends only when the pointer has
    /// travelled past the minimum spacing from the last appended position.
    pub fn handle(&mut self, event: CaptureEvent) -> CaptureAction {
        match event {
            CaptureEvent::Start(pos) => {
                self.down = true;
                self.last_appended = Some(pos);
                self.append_at(pos)
            }
            CaptureEvent::Move(pos) => {
                if !self.down {
                    return CaptureAction::None;
                }
                let far_enough = self
                    .last_appended
                    .is_none_or(|last| last.distance_to(pos) > self.min_spacing);
                if !far_enough {
                    return CaptureAction::None;
                }
                self.last_appended = Some(pos);
                self.append_at(pos)
            }
            CaptureEvent::End => {
                self.down = false;
                CaptureAction::None
            }
        }
    }

    fn append_at(&mut self, pos: Point) -> CaptureAction {
        CaptureAction::Append {
            x: pos.x,
            y: pos.y,
            intensity: 1.0,
            stroke_width: BASE_STROKE_WIDTH_PX + self.next_jitter(),
        }
    }

    /// Deterministic width jitter in `[0, STROKE_WIDTH_JITTER_PX)`.
    ///
    /// A xorshift sequence stands in for `Math.random()`: the variation only
    /// has to look organic, and a pure generator keeps capture testable.
    fn next_jitter(&mut self) -> f64 {
        let mut s = self.width_seed;
        s ^= s << 13;
        s ^= s >> 17;
        s ^= s << 5;
        self.width_seed = s;
        f64::from(s) / f64::from(u32::MAX) * STROKE_WIDTH_JITTER_PX
    }
}

impl Default for PointerCapture {
    fn default() -> Self {
        Self::new()
    }
}
