//! Networking: REST helpers and the shared wire schema.
//!
//! `api` wraps every backend call; `types` defines the slide and channel
//! response shapes. The normalized-point wire type itself lives in
//! `overlay::wire` so the engine and the channel agree on one schema.

pub mod api;
pub mod types;
