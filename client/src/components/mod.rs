//! Reusable UI components.

pub mod overlay_host;
