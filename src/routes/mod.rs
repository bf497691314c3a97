//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the deck-navigation and laser-channel API endpoints and
//! stitches them with Leptos SSR rendering under a single Axum router. Both
//! the presentation page and the control page talk to the same API; the only
//! write paths are deck navigation and the pointer channel.

pub mod pointer;
pub mod slides;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Deck and laser-channel API routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/current-slide", get(slides::current_slide))
        .route("/api/slides", get(slides::list_slides))
        .route("/api/next-slide", get(slides::next_slide))
        .route("/api/previous-slide", get(slides::previous_slide))
        .route("/api/goto-slide/{index}", get(slides::goto_slide))
        .route("/api/laser/point", post(pointer::push_point))
        .route("/api/laser/points", get(pointer::get_points))
        .route("/api/laser/active", post(pointer::set_active))
        .route("/api/laser/clear", post(pointer::clear))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Full application router: API routes plus Leptos SSR for the presentation
/// and control pages.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
