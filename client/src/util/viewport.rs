//! Viewport, timing, and pointer-coordinate helpers for the overlay host.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use overlay::capture::Point;
#[cfg(feature = "hydrate")]
use overlay::overlay::Overlay;

/// Wall-clock milliseconds since the epoch, from the browser clock.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Sync the overlay's viewport and backing store with the canvas element's
/// current CSS size and the window's device pixel ratio.
#[cfg(feature = "hydrate")]
pub fn sync_viewport(overlay: &mut Overlay, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    overlay.set_viewport(width, height, dpr);
}

/// Pointer position relative to the event target, i.e. the overlay canvas.
/// Read at event time so scrolls and resizes between events cannot skew it.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// The canvas element's current CSS size, floored to 1×1 so normalized
/// points never carry a zero container dimension.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn container_size(canvas_ref: &NodeRef<leptos::html::Canvas>) -> Option<(f64, f64)> {
    let canvas = canvas_ref.get_untracked()?;
    Some((
        f64::from(canvas.client_width()).max(1.0),
        f64::from(canvas.client_height()).max(1.0),
    ))
}
