//! Control page: the presenter console at `/control`.
//!
//! Navigates the shared deck cursor, lists the deck for direct jumps, and
//! owns the laser toggle. While the laser is live, the producer overlay over
//! the preview captures pointer input and publishes it to the channel.

use leptos::prelude::*;

use crate::components::overlay_host::{LaserOverlayHost, OverlayRole};
use crate::net::types::SlideListResponse;
use crate::state::laser::LaserSession;
#[cfg(feature = "hydrate")]
use crate::state::laser::SessionEffect;

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

/// Re-fetch the deck listing into the signal.
#[cfg(feature = "hydrate")]
fn refresh_deck(deck: RwSignal<Option<SlideListResponse>>) {
    spawn_local(async move {
        if let Some(listing) = api::fetch_slides().await {
            deck.set(Some(listing));
        }
    });
}

/// Control page component.
#[component]
pub fn ControlPage() -> impl IntoView {
    let laser = expect_context::<RwSignal<LaserSession>>();
    let deck = RwSignal::new(None::<SlideListResponse>);

    // Poll the deck so a second console on another machine stays in sync
    // with the shared cursor.
    #[cfg(feature = "hydrate")]
    {
        let poll = Rc::new(RefCell::new(None::<Interval>));
        refresh_deck(deck);
        *poll.borrow_mut() = Some(Interval::new(SLIDE_POLL_MS, move || {
            refresh_deck(deck);
        }));
        let poll = Rc::clone(&poll);
        on_cleanup(move || {
            poll.borrow_mut().take();
        });
    }

    let on_previous = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::MouseEvent| {
                spawn_local(async move {
                    let _ = api::previous_slide().await;
                    refresh_deck(deck);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_next = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::MouseEvent| {
                spawn_local(async move {
                    let _ = api::next_slide().await;
                    refresh_deck(deck);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let goto = move |index: usize| {
        #[cfg(feature = "hydrate")]
        {
            spawn_local(async move {
                let _ = api::goto_slide(index).await;
                refresh_deck(deck);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = index;
        }
    };

    // The session transition yields its channel side effects in order; the
    // local-trail wipe is handled by the producer overlay host watching the
    // session signal.
    let on_toggle = move |_ev: leptos::ev::MouseEvent| {
        let mut session = laser.get_untracked();
        let effects = session.set_active(!session.is_active());
        laser.set(session);
        #[cfg(feature = "hydrate")]
        for effect in effects {
            match effect {
                SessionEffect::NotifyActive(active) => {
                    spawn_local(async move {
                        api::set_laser_active(active).await;
                    });
                }
                SessionEffect::ClearChannel => {
                    spawn_local(async move {
                        api::clear_laser_points().await;
                    });
                }
                SessionEffect::ClearLocalTrail => {}
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = effects;
    };

    let counter = move || deck.get().map(|d| d.counter_label()).unwrap_or_default();
    let current_title = move || {
        deck.get().map_or_else(String::new, |d| {
            d.slides
                .get(d.current_index)
                .map_or_else(String::new, |s| s.title.clone())
        })
    };
    let toggle_label = move || {
        if laser.get().is_active() {
            "Laser on"
        } else {
            "Laser off"
        }
    };

    view! {
        <main class="control-page">
            <header class="control-header">
                <h1>"Presenter console"</h1>
                <span class="slide-counter">{counter}</span>
            </header>

            <section class="slide-preview">
                <div class="preview-title">{current_title}</div>
                <LaserOverlayHost role=OverlayRole::Producer/>
            </section>

            <section class="deck-controls">
                <button class="nav-button" on:click=on_previous>"Previous"</button>
                <button class="nav-button" on:click=on_next>"Next"</button>
                <button
                    class="laser-toggle"
                    class:active=move || laser.get().is_active()
                    on:click=on_toggle
                >
                    {toggle_label}
                </button>
            </section>

            <ul class="slide-list">
                {move || {
                    deck.get().map_or_else(Vec::new, |listing| {
                        listing
                            .slides
                            .iter()
                            .enumerate()
                            .map(|(index, slide)| {
                                let label = format!("{}. {}", index + 1, slide.title);
                                let is_current = index == listing.current_index;
                                view! {
                                    <li class:current=is_current>
                                        <button on:click=move |_| goto(index)>{label}</button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </ul>
        </main>
    }
}
