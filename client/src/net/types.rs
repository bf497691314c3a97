//! Wire types shared with the backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use overlay::wire::NormalizedPoint;
use serde::{Deserialize, Serialize};

/// A slide descriptor as returned by the deck endpoints. `data` stays opaque:
/// it is handed to the chart renderer as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub title: String,
    pub chart_type: String,
    pub data: serde_json::Value,
}

/// Response of `GET /api/slides`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideListResponse {
    pub slides: Vec<Slide>,
    pub current_index: usize,
    pub total: usize,
}

/// Response of `GET /api/laser/points`: the full live-stroke snapshot plus
/// the producer's activation flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Vec<NormalizedPoint>,
    pub active: bool,
}

impl SlideListResponse {
    /// Human-readable counter label, e.g. `"Slide 2 of 4"`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("Slide {} of {}", self.current_index + 1, self.total)
    }
}
