//! Top-level page components, one per route.

pub mod control;
pub mod present;
