//! Laser-pointer annotation engine for the presentation overlay.
//!
//! This crate is compiled to WebAssembly and runs in the browser, once per
//! overlay surface (the control-panel preview that draws and publishes, and
//! each presentation view that fetches and renders). It owns the full life of
//! a laser trail: turning raw pointer events into trail points, fading the
//! trail every animation frame, rescaling remote points across mismatched
//! container sizes, and painting the glowing stroke to a transparent canvas.
//! The host layer is responsible only for wiring DOM events to the engine and
//! moving [`wire::NormalizedPoint`]s through the shared channel.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`overlay`] | Top-level overlay engine and testable [`overlay::OverlayCore`] |
//! | [`trail`] | Trail buffer and the per-tick decay model |
//! | [`capture`] | Unified pointer events and the capture state machine |
//! | [`wire`] | Normalized-point wire schema and cross-size rescaling |
//! | [`render`] | Glowing polyline rendering to the 2D canvas context |
//! | [`consts`] | Shared numeric defaults (trail length, fade rate, etc.) |

pub mod capture;
pub mod consts;
pub mod overlay;
pub mod render;
pub mod trail;
pub mod wire;
