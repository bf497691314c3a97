//! Client-side application state.

pub mod laser;
