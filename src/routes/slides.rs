//! Slide-deck navigation routes.
//!
//! The deck is a shared cursor over a fixed slide list: the control page
//! drives it, every surface polls it. Navigation wraps at both ends; only
//! `goto` can fail, on an out-of-range index.

#[cfg(test)]
#[path = "slides_test.rs"]
mod slides_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::state::{AppState, DeckError, Slide};

#[derive(Serialize)]
pub struct SlideListResponse {
    pub slides: Vec<Slide>,
    pub current_index: usize,
    pub total: usize,
}

fn deck_error_to_status(err: &DeckError) -> StatusCode {
    match err {
        DeckError::IndexOutOfRange(_) => StatusCode::NOT_FOUND,
        DeckError::EmptyDeck => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/current-slide` — the slide every surface should display.
pub async fn current_slide(State(state): State<AppState>) -> Json<Slide> {
    let deck = state.deck.read().await;
    Json(deck.current().clone())
}

/// `GET /api/slides` — full deck listing with the shared cursor.
pub async fn list_slides(State(state): State<AppState>) -> Json<SlideListResponse> {
    let deck = state.deck.read().await;
    Json(SlideListResponse {
        slides: deck.slides().to_vec(),
        current_index: deck.current_index(),
        total: deck.len(),
    })
}

/// `GET /api/next-slide` — advance, wrapping at the end.
pub async fn next_slide(State(state): State<AppState>) -> Json<Slide> {
    let mut deck = state.deck.write().await;
    Json(deck.next().clone())
}

/// `GET /api/previous-slide` — step back, wrapping at the start.
pub async fn previous_slide(State(state): State<AppState>) -> Json<Slide> {
    let mut deck = state.deck.write().await;
    Json(deck.previous().clone())
}

/// `GET /api/goto-slide/:index` — jump to a slide by index.
pub async fn goto_slide(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Slide>, StatusCode> {
    let mut deck = state.deck.write().await;
    match deck.goto(index) {
        Ok(slide) => Ok(Json(slide.clone())),
        Err(err) => {
            tracing::warn!(%err, "goto-slide rejected");
            Err(deck_error_to_status(&err))
        }
    }
}
