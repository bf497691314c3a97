//! Shared numeric constants for the overlay crate.

// ── Trail ───────────────────────────────────────────────────────

/// Maximum number of points kept in a trail buffer. Bounds render cost;
/// the oldest point is evicted first once exceeded.
pub const MAX_TRAIL_LEN: usize = 50;

/// Per-tick intensity multiplier. The animation loop is the decay clock:
/// a point's intensity after `n` frames is `initial * FADE_RATE^n`.
pub const FADE_RATE: f64 = 0.8;

/// Decay floor. Points at or below this intensity are evicted.
pub const DECAY_EPSILON: f64 = 0.01;

// ── Capture ─────────────────────────────────────────────────────

/// Minimum Euclidean distance in container pixels between consecutive
/// appended points. Keeps high-frequency pointer events from flooding the
/// bounded buffer during slow motion.
pub const MIN_POINT_SPACING_PX: f64 = 2.0;

/// Base stroke width in pixels for a newly captured point.
pub const BASE_STROKE_WIDTH_PX: f64 = 3.0;

/// Upper bound on the per-point width jitter added to the base width.
pub const STROKE_WIDTH_JITTER_PX: f64 = 2.0;

// ── Rendering ───────────────────────────────────────────────────

/// Global multiplier applied to per-point intensity when computing
/// segment alpha.
pub const GLOW_INTENSITY: f64 = 0.8;

/// Scale applied to a point's stroke width when drawing its segment.
pub const STROKE_WIDTH_SCALE: f64 = 0.8;

/// Shadow blur radius in pixels for the glow halo.
pub const GLOW_BLUR_PX: f64 = 15.0;

// ── Sync ────────────────────────────────────────────────────────

/// Horizon in milliseconds over which a remote point fades by age,
/// independently of (and compounding with) per-tick decay.
pub const AGE_FADE_HORIZON_MS: f64 = 5000.0;

/// Consumer poll interval for the shared point channel.
pub const POINT_POLL_MS: u32 = 100;

/// Poll interval for slide-deck content. Much slower than the point poll;
/// slide changes do not need sub-second latency.
pub const SLIDE_POLL_MS: u32 = 2000;
