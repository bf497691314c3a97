//! Presentation page: the audience-facing slide display at `/`.
//!
//! Polls the deck for the shared cursor and mirrors the presenter's laser
//! stroke through a consumer overlay. Chart rendering itself is delegated to
//! the embedding chart library; this page only hosts the stage the overlay
//! draws over.

use leptos::prelude::*;

use crate::components::overlay_host::{LaserOverlayHost, OverlayRole};
use crate::net::types::Slide;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::spawn_local;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use overlay::consts::SLIDE_POLL_MS;

/// One poll cycle: pick up the shared cursor and the deck counter.
///
/// The slide signal is only written when the slide actually changed, so a
/// quiet deck does not re-render the stage every two seconds.
#[cfg(feature = "hydrate")]
fn refresh(slide: RwSignal<Option<Slide>>, counter: RwSignal<String>) {
    spawn_local(async move {
        if let Some(current) = api::fetch_current_slide().await {
            let changed =
                slide.with_untracked(|s| s.as_ref().is_none_or(|prior| prior.id != current.id));
            if changed {
                slide.set(Some(current));
            }
        }
        if let Some(listing) = api::fetch_slides().await {
            let label = listing.counter_label();
            if counter.get_untracked() != label {
                counter.set(label);
            }
        }
    });
}

/// Presentation page component.
#[component]
pub fn PresentPage() -> impl IntoView {
    let slide = RwSignal::new(None::<Slide>);
    let counter = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let poll = Rc::new(RefCell::new(None::<Interval>));
        refresh(slide, counter);
        *poll.borrow_mut() = Some(Interval::new(SLIDE_POLL_MS, move || {
            refresh(slide, counter);
        }));
        let poll = Rc::clone(&poll);
        on_cleanup(move || {
            poll.borrow_mut().take();
        });
    }

    let title = move || {
        slide
            .get()
            .map_or_else(|| "Loading deck...".to_string(), |s| s.title)
    };
    let chart_label = move || {
        slide
            .get()
            .map_or_else(String::new, |s| format!("{} chart", s.chart_type))
    };

    view! {
        <main class="present-page">
            <header class="present-header">
                <h1>{title}</h1>
                <span class="slide-counter">{counter}</span>
            </header>
            <section class="chart-stage">
                <div class="chart-host" data-chart=move || slide.get().map(|s| s.chart_type)>
                    {chart_label}
                </div>
                <LaserOverlayHost role=OverlayRole::Consumer/>
            </section>
        </main>
    }
}
