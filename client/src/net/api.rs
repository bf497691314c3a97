//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper degrades instead of panicking. Reads return `Option` — `None`
//! means "this cycle produced nothing, try again next poll", which is distinct
//! from an empty payload. Writes are fire-and-forget: failures are logged and
//! skipped, because the next sync cycle re-sends a fresh full snapshot anyway.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{PointsResponse, Slide, SlideListResponse};
use overlay::wire::NormalizedPoint;

#[cfg(any(test, feature = "hydrate"))]
fn goto_slide_endpoint(index: usize) -> String {
    format!("/api/goto-slide/{index}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = gloo_net::http::Request::get(url).send().await.ok()?;
    if !resp.ok() {
        log::warn!("GET {url} failed: {}", resp.status());
        return None;
    }
    resp.json::<T>().await.ok()
}

/// Fetch the slide every surface should currently display.
pub async fn fetch_current_slide() -> Option<Slide> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/current-slide").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the full deck listing with the shared cursor.
pub async fn fetch_slides() -> Option<SlideListResponse> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/slides").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Advance the shared cursor to the next slide.
pub async fn next_slide() -> Option<Slide> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/next-slide").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Step the shared cursor back to the previous slide.
pub async fn previous_slide() -> Option<Slide> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/previous-slide").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Jump the shared cursor to a slide by index.
pub async fn goto_slide(index: usize) -> Option<Slide> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&goto_slide_endpoint(index)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = index;
        None
    }
}

/// Push one normalized point to the shared channel. Fire-and-forget:
/// losing a point degrades trail fidelity, not correctness.
pub async fn publish_point(point: &NormalizedPoint) {
    #[cfg(feature = "hydrate")]
    {
        let request = match gloo_net::http::Request::post("/api/laser/point").json(point) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("laser point serialization failed: {err}");
                return;
            }
        };
        match request.send().await {
            Ok(resp) if !resp.ok() => {
                log::warn!("laser point push failed: {}", resp.status());
            }
            Ok(_) => {}
            Err(err) => log::warn!("laser point push failed: {err}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = point;
    }
}

/// Fetch the current live-stroke snapshot. `None` means the fetch failed and
/// this poll cycle should be skipped; an empty `points` list inside `Some`
/// is a positive "no live stroke" report.
pub async fn fetch_points() -> Option<PointsResponse> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/laser/points").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Set the session-visible laser activation flag on the channel.
pub async fn set_laser_active(active: bool) {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "active": active });
        let request = match gloo_net::http::Request::post("/api/laser/active").json(&payload) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("laser active serialization failed: {err}");
                return;
            }
        };
        if let Err(err) = request.send().await {
            log::warn!("laser active notify failed: {err}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = active;
    }
}

/// Clear the server-side point set immediately.
pub async fn clear_laser_points() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = gloo_net::http::Request::post("/api/laser/clear").send().await {
            log::warn!("laser clear failed: {err}");
        }
    }
}
