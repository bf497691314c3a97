//! The overlay engine: ties capture, trail, and rendering to one canvas.
//!
//! [`OverlayCore`] holds all logic that does not depend on the canvas element
//! so it can be tested without WASM or a browser. [`Overlay`] wraps it with
//! the actual `HtmlCanvasElement`, managing the pixel-ratio-aware backing
//! store and the per-frame draw. The host drives the loop: one `frame()` per
//! animation tick, pointer events forwarded as they arrive, and remote
//! snapshots applied whenever the subscriber fetches.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::capture::{CaptureAction, CaptureEvent, PointerCapture};
use crate::render::{self, LaserStyle};
use crate::trail::{TrailBuffer, TrailPoint};

/// What the engine did with a pointer event, for the host to forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayAction {
    /// Event consumed without a new point.
    None,
    /// A point was appended locally; a producer surface publishes it.
    PointAppended(TrailPoint),
}

/// Engine state independent of the canvas element.
pub struct OverlayCore {
    pub trail: TrailBuffer,
    pub capture: PointerCapture,
    pub style: LaserStyle,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl OverlayCore {
    #[must_use]
    pub fn new(style: LaserStyle) -> Self {
        Self {
            trail: TrailBuffer::new(),
            capture: PointerCapture::new(),
            style,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    /// Route one abstract pointer event through the capture machine and
    /// append the resulting point, if any, to the local trail.
    pub fn on_pointer(&mut self, event: CaptureEvent, now_ms: f64) -> OverlayAction {
        match self.capture.handle(event) {
            CaptureAction::None => OverlayAction::None,
            CaptureAction::Append { x, y, intensity, stroke_width } => {
                let point = TrailPoint::new(x, y, intensity, now_ms, stroke_width);
                self.trail.push(point);
                OverlayAction::PointAppended(point)
            }
        }
    }

    /// One tick of the decay clock. Called once per rendered frame.
    pub fn tick(&mut self) {
        self.trail.decay_step();
    }

    /// Full-replace the trail with a rescaled remote snapshot. An empty
    /// snapshot is a positive "no live stroke" report and clears the trail.
    pub fn apply_remote(&mut self, points: Vec<TrailPoint>) {
        self.trail.replace_all(points);
    }

    /// Drop all points immediately (local laser deactivated).
    pub fn clear(&mut self) {
        self.trail.clear();
    }

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr.max(1.0);
    }

    /// Whether nothing is live: no pointer session and an empty trail.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.capture.is_down() && self.trail.is_empty()
    }
}

/// The full overlay bound to a browser canvas element.
pub struct Overlay {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: OverlayCore,
}

impl Overlay {
    /// Bind an overlay engine to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D rendering context.
    pub fn new(canvas: HtmlCanvasElement, style: LaserStyle) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: OverlayCore::new(style) })
    }

    /// Resize the backing store to match the container's CSS size at the
    /// device pixel ratio. Called from the host's resize observer.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * self.core.dpr).max(1.0) as u32);
        self.canvas.set_height((height_css * self.core.dpr).max(1.0) as u32);
    }

    /// One animation tick: advance decay, then repaint the trail.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.core.tick();
        render::draw(
            &self.ctx,
            self.core.trail.points(),
            &self.core.style,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }

    // --- Delegated engine operations ---

    pub fn on_pointer(&mut self, event: CaptureEvent, now_ms: f64) -> OverlayAction {
        self.core.on_pointer(event, now_ms)
    }

    pub fn apply_remote(&mut self, points: Vec<TrailPoint>) {
        self.core.apply_remote(points);
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }
}
