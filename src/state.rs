//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the slide deck and the transient pointer channel, both purely
//! in memory: the deck is a fixed demo presentation, and the channel is a
//! short-lived point buffer with no persistence by design — losing it on
//! restart costs at most one fading stroke.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use overlay::consts::{AGE_FADE_HORIZON_MS, MAX_TRAIL_LEN};
use overlay::wire::NormalizedPoint;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Milliseconds since the Unix epoch, as the wire format carries timestamps.
#[must_use]
pub fn now_epoch_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
}

// =============================================================================
// SLIDE DECK
// =============================================================================

/// A slide descriptor as served to both the presentation and control pages.
/// `data` is an open-ended payload interpreted by the chart renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub title: String,
    pub chart_type: String,
    pub data: serde_json::Value,
}

/// Deck navigation errors.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("slide index {0} out of range")]
    IndexOutOfRange(usize),
    #[error("deck must contain at least one slide")]
    EmptyDeck,
}

/// The slide deck and the shared "current slide" cursor.
pub struct SlideDeck {
    slides: Vec<Slide>,
    current: usize,
}

impl SlideDeck {
    /// Build a deck from the given slides.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::EmptyDeck` for an empty slide list; every
    /// navigation operation returns a slide, so the deck can never be empty.
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self { slides, current: 0 })
    }

    /// The built-in demo presentation: one slide per chart type.
    #[must_use]
    pub fn demo() -> Self {
        let slides = vec![
            Slide {
                id: "line_chart".into(),
                title: "Line Chart".into(),
                chart_type: "line".into(),
                data: serde_json::json!({
                    "xAxis": ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
                    "series": [820, 932, 901, 934, 1290, 1330, 1320],
                }),
            },
            Slide {
                id: "bar_chart".into(),
                title: "Bar Chart".into(),
                chart_type: "bar".into(),
                data: serde_json::json!({
                    "xAxis": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
                    "series": [120, 200, 150, 80, 70, 110],
                }),
            },
            Slide {
                id: "pie_chart".into(),
                title: "Pie Chart".into(),
                chart_type: "pie".into(),
                data: serde_json::json!([
                    {"value": 1048, "name": "Search Engine"},
                    {"value": 735, "name": "Direct"},
                    {"value": 580, "name": "Email"},
                    {"value": 484, "name": "Union Ads"},
                    {"value": 300, "name": "Video Ads"},
                ]),
            },
            Slide {
                id: "scatter_chart".into(),
                title: "Scatter Plot".into(),
                chart_type: "scatter".into(),
                data: serde_json::json!([
                    [10.0, 8.04], [8.0, 6.95], [13.0, 7.58], [9.0, 8.81],
                    [11.0, 8.33], [14.0, 9.96], [6.0, 7.24], [4.0, 4.26],
                ]),
            },
        ];
        Self { slides, current: 0 }
    }

    #[must_use]
    pub fn current(&self) -> &Slide {
        &self.slides[self.current]
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Advance to the next slide, wrapping at the end.
    pub fn next(&mut self) -> &Slide {
        self.current = (self.current + 1) % self.slides.len();
        self.current()
    }

    /// Step to the previous slide, wrapping at the start.
    pub fn previous(&mut self) -> &Slide {
        self.current = if self.current == 0 { self.slides.len() - 1 } else { self.current - 1 };
        self.current()
    }

    /// Jump to a slide by index.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::IndexOutOfRange` for indexes past the deck end.
    pub fn goto(&mut self, index: usize) -> Result<&Slide, DeckError> {
        if index >= self.slides.len() {
            return Err(DeckError::IndexOutOfRange(index));
        }
        self.current = index;
        Ok(self.current())
    }
}

// =============================================================================
// POINTER CHANNEL
// =============================================================================

/// The transient point store backing the laser sync protocol.
///
/// Holds the current unfinished-stroke snapshot, not a history log. Capped at
/// the trail length bound and pruned of points past the age-fade horizon on
/// every access, so the server never accumulates state a consumer would
/// render at zero intensity anyway.
pub struct PointerChannel {
    points: Vec<NormalizedPoint>,
    active: bool,
}

impl PointerChannel {
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new(), active: false }
    }

    /// Append a point, evicting the oldest once the cap is reached.
    pub fn push(&mut self, point: NormalizedPoint, now_ms: f64) {
        self.prune(now_ms);
        self.points.push(point);
        if self.points.len() > MAX_TRAIL_LEN {
            self.points.remove(0);
        }
    }

    /// The current live snapshot, with stale points pruned.
    pub fn points(&mut self, now_ms: f64) -> Vec<NormalizedPoint> {
        self.prune(now_ms);
        self.points.clone()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    fn prune(&mut self, now_ms: f64) {
        self.points.retain(|p| now_ms - p.timestamp < AGE_FADE_HORIZON_MS);
    }
}

impl Default for PointerChannel {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub deck: Arc<RwLock<SlideDeck>>,
    pub channel: Arc<RwLock<PointerChannel>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            deck: Arc::new(RwLock::new(SlideDeck::demo())),
            channel: Arc::new(RwLock::new(PointerChannel::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// An `AppState` seeded with the demo deck and an empty channel.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new()
    }

    /// A well-formed wire point captured `age_ms` before `now_ms`.
    #[must_use]
    pub fn point_aged(now_ms: f64, age_ms: f64) -> NormalizedPoint {
        NormalizedPoint {
            x: 200.0,
            y: 150.0,
            intensity: 1.0,
            container_width: 400.0,
            container_height: 300.0,
            timestamp: now_ms - age_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_deck_starts_at_first_slide() {
        let deck = SlideDeck::demo();
        assert_eq!(deck.current_index(), 0);
        assert_eq!(deck.current().id, "line_chart");
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn next_wraps_past_last_slide() {
        let mut deck = SlideDeck::demo();
        for _ in 0..deck.len() {
            deck.next();
        }
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn previous_wraps_before_first_slide() {
        let mut deck = SlideDeck::demo();
        deck.previous();
        assert_eq!(deck.current_index(), deck.len() - 1);
        assert_eq!(deck.current().id, "scatter_chart");
    }

    #[test]
    fn goto_valid_index_moves_cursor() {
        let mut deck = SlideDeck::demo();
        let slide = deck.goto(2).unwrap();
        assert_eq!(slide.id, "pie_chart");
        assert_eq!(deck.current_index(), 2);
    }

    #[test]
    fn goto_out_of_range_is_error_and_keeps_cursor() {
        let mut deck = SlideDeck::demo();
        deck.goto(1).unwrap();
        assert!(matches!(deck.goto(99), Err(DeckError::IndexOutOfRange(99))));
        assert_eq!(deck.current_index(), 1);
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert!(matches!(SlideDeck::new(Vec::new()), Err(DeckError::EmptyDeck)));
    }

    #[test]
    fn channel_push_and_fetch_round_trip() {
        let mut channel = PointerChannel::new();
        channel.push(test_helpers::point_aged(1000.0, 0.0), 1000.0);
        let points = channel.points(1000.0);
        assert_eq!(points.len(), 1);
        assert!((points[0].x - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn channel_caps_at_trail_length_bound() {
        let mut channel = PointerChannel::new();
        for _ in 0..(MAX_TRAIL_LEN + 10) {
            channel.push(test_helpers::point_aged(1000.0, 0.0), 1000.0);
        }
        assert_eq!(channel.points(1000.0).len(), MAX_TRAIL_LEN);
    }

    #[test]
    fn channel_prunes_points_past_age_horizon() {
        let mut channel = PointerChannel::new();
        channel.push(test_helpers::point_aged(1000.0, 0.0), 1000.0);
        let later = 1000.0 + AGE_FADE_HORIZON_MS + 1.0;
        assert!(channel.points(later).is_empty());
    }

    #[test]
    fn channel_clear_and_active_flag() {
        let mut channel = PointerChannel::new();
        channel.push(test_helpers::point_aged(1000.0, 0.0), 1000.0);
        channel.set_active(true);
        channel.clear();
        assert!(channel.points(1000.0).is_empty());
        assert!(channel.is_active());
        channel.set_active(false);
        assert!(!channel.is_active());
    }

    #[test]
    fn slide_serde_round_trip() {
        let slide = SlideDeck::demo().current().clone();
        let json = serde_json::to_string(&slide).unwrap();
        let restored: Slide = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.id, slide.id);
        assert_eq!(restored.chart_type, "line");
    }
}
