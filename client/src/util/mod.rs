//! Browser-side helpers bridging Leptos and the overlay engine.

pub mod raf;
pub mod viewport;
