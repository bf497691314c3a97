//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{control::ControlPage, present::PresentPage};
use crate::state::laser::LaserSession;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the laser session context and sets up client-side routing:
/// the presentation view at `/` and the presenter controls at `/control`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let laser = RwSignal::new(LaserSession::default());
    provide_context(laser);

    view! {
        <Stylesheet id="leptos" href="/pkg/beamdeck.css"/>
        <Title text="Beamdeck"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PresentPage/>
                <Route path=StaticSegment("control") view=ControlPage/>
            </Routes>
        </Router>
    }
}
