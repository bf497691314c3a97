//! Laser pointer channel routes.
//!
//! The channel is the shared producer/consumer mailbox for the live stroke:
//! the control page pushes normalized points, viewer pages poll the snapshot,
//! and the activation flag lets consumers distinguish "no session" from
//! "stroke fully decayed". Everything is best-effort: a dropped push costs
//! trail fidelity, never correctness, because each poll is a full snapshot.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use overlay::wire::NormalizedPoint;
use serde::{Deserialize, Serialize};

use crate::state::{AppState, now_epoch_ms};

#[derive(Serialize)]
pub struct PointsResponse {
    pub points: Vec<NormalizedPoint>,
    pub active: bool,
}

#[derive(Deserialize)]
pub struct ActiveBody {
    pub active: bool,
}

/// `POST /api/laser/point` — append one point to the live stroke.
///
/// Malformed payloads (non-finite fields, non-positive container dimensions)
/// are rejected; accepting them would poison every consumer's rescale.
pub async fn push_point(
    State(state): State<AppState>,
    Json(point): Json<NormalizedPoint>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if !point.is_well_formed() {
        tracing::warn!("rejected malformed laser point");
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let mut channel = state.channel.write().await;
    channel.push(point, now_epoch_ms());
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `GET /api/laser/points` — the current live snapshot plus activation flag.
pub async fn get_points(State(state): State<AppState>) -> Json<PointsResponse> {
    let mut channel = state.channel.write().await;
    Json(PointsResponse {
        points: channel.points(now_epoch_ms()),
        active: channel.is_active(),
    })
}

/// `POST /api/laser/active` — set the session-visible activation flag.
pub async fn set_active(
    State(state): State<AppState>,
    Json(body): Json<ActiveBody>,
) -> Json<serde_json::Value> {
    let mut channel = state.channel.write().await;
    channel.set_active(body.active);
    Json(serde_json::json!({ "ok": true }))
}

/// `POST /api/laser/clear` — drop the server-side point set immediately.
pub async fn clear(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut channel = state.channel.write().await;
    channel.clear();
    Json(serde_json::json!({ "ok": true }))
}
