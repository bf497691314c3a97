//! Rendering: strokes the glowing laser trail onto a 2D canvas context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only trail snapshot and produces pixels — it does not
//! mutate any engine state. Overlapping segments use additive "lighter"
//! compositing so they brighten rather than occlude, approximating a glow.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! the host handles (logs) the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{GLOW_BLUR_PX, GLOW_INTENSITY, STROKE_WIDTH_SCALE};
use crate::trail::TrailPoint;

/// Alpha applied on top of segment alpha for the connecting line, keeping the
/// core stroke dimmer than the additive halo would otherwise make it.
const SEGMENT_ALPHA_SCALE: f64 = 0.6;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba(...)` string with the given alpha, clamped to `[0, 1]`.
    #[must_use]
    pub fn rgba(&self, alpha: f64) -> String {
        let alpha = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 0.0 };
        format!("rgba({}, {}, {}, {alpha:.4})", self.r, self.g, self.b)
    }
}

/// Visual parameters for one overlay surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaserStyle {
    /// Stroke color.
    pub color: Rgb,
    /// Halo color for the shadow-blur glow.
    pub glow: Rgb,
    /// Global multiplier on per-point intensity when computing segment alpha.
    pub glow_intensity: f64,
}

impl LaserStyle {
    /// Producer (control panel) style: red, so the presenter can tell their
    /// own preview stroke from the mirrored green one.
    #[must_use]
    pub fn producer() -> Self {
        Self {
            color: Rgb::new(0xff, 0x44, 0x44),
            glow: Rgb::new(0xff, 0x66, 0x66),
            glow_intensity: GLOW_INTENSITY,
        }
    }
}

impl Default for LaserStyle {
    fn default() -> Self {
        Self {
            color: Rgb::new(0x00, 0xff, 0x88),
            glow: Rgb::new(0x00, 0xff, 0x88),
            glow_intensity: GLOW_INTENSITY,
        }
    }
}

/// Display alpha for a segment ending at a point of the given intensity.
#[must_use]
pub fn segment_alpha(intensity: f64, style: &LaserStyle) -> f64 {
    (intensity * style.glow_intensity * SEGMENT_ALPHA_SCALE).clamp(0.0, 1.0)
}

/// Display width for a segment ending at a point of the given stroke width.
#[must_use]
pub fn segment_width(stroke_width: f64) -> f64 {
    stroke_width * STROKE_WIDTH_SCALE
}

/// Draw the trail as a connected polyline in insertion order.
///
/// `viewport_w` / `viewport_h` are CSS pixels; `dpr` is the device pixel
/// ratio the backing store was scaled by.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    points: &[TrailPoint],
    style: &LaserStyle,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    if points.len() < 2 {
        if let Some(only) = points.first() {
            draw_dot(ctx, only, style)?;
        }
        return Ok(());
    }

    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.set_shadow_color(&style.glow.rgba(1.0));
    ctx.set_shadow_blur(GLOW_BLUR_PX);
    ctx.set_global_composite_operation("lighter")?;

    // Each segment gets its own alpha and width from its endpoint, so the
    // stroke dims and thins along the decayed tail.
    for pair in points.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let alpha = segment_alpha(to.intensity, style);
        if alpha <= 0.0 {
            continue;
        }
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.set_stroke_style_str(&style.color.rgba(alpha));
        ctx.set_line_width(segment_width(to.stroke_width));
        ctx.stroke();
    }

    ctx.set_shadow_blur(0.0);
    ctx.set_global_composite_operation("source-over")?;
    Ok(())
}

/// A single captured point with no segment yet (a tap): a short round-capped
/// stroke reads as a dot and still gets the glow treatment.
fn draw_dot(ctx: &CanvasRenderingContext2d, point: &TrailPoint, style: &LaserStyle) -> Result<(), JsValue> {
    let alpha = segment_alpha(point.intensity, style);
    if alpha <= 0.0 {
        return Ok(());
    }
    ctx.set_line_cap("round");
    ctx.set_shadow_color(&style.glow.rgba(1.0));
    ctx.set_shadow_blur(GLOW_BLUR_PX);
    ctx.set_global_composite_operation("lighter")?;
    ctx.begin_path();
    ctx.move_to(point.x, point.y);
    ctx.line_to(point.x + 0.01, point.y);
    ctx.set_stroke_style_str(&style.color.rgba(alpha));
    ctx.set_line_width(segment_width(point.stroke_width));
    ctx.stroke();
    ctx.set_shadow_blur(0.0);
    ctx.set_global_composite_operation("source-over")?;
    Ok(())
}
