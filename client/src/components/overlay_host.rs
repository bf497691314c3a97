//! Bridge component between Leptos state and the imperative `overlay` engine.
//!
//! ARCHITECTURE
//! ============
//! The overlay crate owns trail, capture, and render logic; this host mounts
//! the engine on a `<canvas>`, drives the animation-frame loop, and maps DOM
//! events and channel sync into engine operations. The same component serves
//! both surfaces: a producer (presenter drawing and publishing points) and a
//! consumer (viewer polling the channel and mirroring the stroke).

use leptos::prelude::*;

use crate::state::laser::LaserSession;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::spawn_local;

#[cfg(feature = "hydrate")]
use overlay::capture::CaptureEvent;
#[cfg(feature = "hydrate")]
use overlay::consts::POINT_POLL_MS;
#[cfg(feature = "hydrate")]
use overlay::overlay::{Overlay, OverlayAction};
#[cfg(feature = "hydrate")]
use overlay::render::LaserStyle;
#[cfg(feature = "hydrate")]
use overlay::wire::{NormalizedPoint, rescale_batch};

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::util::raf::RenderLoop;
#[cfg(feature = "hydrate")]
use crate::util::viewport::{container_size, now_ms, pointer_point, sync_viewport};

/// Which side of the shared channel this surface plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRole {
    /// Captures pointer input and publishes points (control page).
    Producer,
    /// Polls the channel and mirrors the remote stroke (presentation page).
    Consumer,
}

/// Route a pointer event through the engine; a producer surface publishes
/// any appended point against the container's current bounding box.
#[cfg(feature = "hydrate")]
fn forward_event(
    overlay: &Rc<RefCell<Option<Overlay>>>,
    canvas_ref: &NodeRef<leptos::html::Canvas>,
    event: CaptureEvent,
) {
    let action = {
        let mut borrowed = overlay.borrow_mut();
        let Some(overlay) = borrowed.as_mut() else {
            return;
        };
        overlay.on_pointer(event, now_ms())
    };
    if let OverlayAction::PointAppended(point) = action
        && let Some((width, height)) = container_size(canvas_ref)
    {
        let wire = NormalizedPoint::from_local(&point, width, height);
        spawn_local(async move {
            api::publish_point(&wire).await;
        });
    }
}

/// Laser overlay host.
///
/// On hydration this mounts `overlay::Overlay` on the canvas, starts the
/// per-frame decay/render loop, keeps the backing store sized to the
/// container, and — depending on `role` — either captures and publishes
/// pointer input or polls the channel for the remote snapshot.
#[component]
pub fn LaserOverlayHost(role: OverlayRole) -> impl IntoView {
    let laser = expect_context::<RwSignal<LaserSession>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let overlay = Rc::new(RefCell::new(None::<Overlay>));
    #[cfg(feature = "hydrate")]
    let render_loop = Rc::new(RefCell::new(None::<RenderLoop>));
    #[cfg(feature = "hydrate")]
    let poll = Rc::new(RefCell::new(None::<Interval>));
    #[cfg(feature = "hydrate")]
    let resize = Rc::new(RefCell::new(
        None::<(web_sys::ResizeObserver, Closure<dyn FnMut(js_sys::Array)>)>,
    ));

    #[cfg(feature = "hydrate")]
    {
        let overlay = Rc::clone(&overlay);
        let render_loop = Rc::clone(&render_loop);
        let poll = Rc::clone(&poll);
        let resize = Rc::clone(&resize);
        let canvas_ref_mount = canvas_ref;
        Effect::new(move || {
            let Some(canvas) = canvas_ref_mount.get() else {
                return;
            };
            if overlay.borrow().is_some() {
                return;
            }

            let style = match role {
                OverlayRole::Producer => LaserStyle::producer(),
                OverlayRole::Consumer => LaserStyle::default(),
            };
            let mut instance = match Overlay::new(canvas, style) {
                Ok(instance) => instance,
                Err(err) => {
                    log::warn!("laser overlay mount failed: {err:?}");
                    return;
                }
            };
            sync_viewport(&mut instance, &canvas_ref_mount);
            *overlay.borrow_mut() = Some(instance);

            let overlay_for_frame = Rc::clone(&overlay);
            *render_loop.borrow_mut() = Some(RenderLoop::start(move || {
                if let Some(overlay) = overlay_for_frame.borrow_mut().as_mut()
                    && let Err(err) = overlay.frame()
                {
                    log::warn!("laser overlay render failed: {err:?}");
                }
            }));

            let overlay_for_resize = Rc::clone(&overlay);
            let canvas_ref_resize = canvas_ref_mount;
            let resize_cb = Closure::<dyn FnMut(js_sys::Array)>::new(move |_entries| {
                if let Some(overlay) = overlay_for_resize.borrow_mut().as_mut() {
                    sync_viewport(overlay, &canvas_ref_resize);
                }
            });
            if let Ok(observer) = web_sys::ResizeObserver::new(resize_cb.as_ref().unchecked_ref()) {
                if let Some(canvas) = canvas_ref_mount.get_untracked() {
                    observer.observe(&canvas);
                }
                *resize.borrow_mut() = Some((observer, resize_cb));
            }

            if role == OverlayRole::Consumer {
                let overlay_for_poll = Rc::clone(&overlay);
                *poll.borrow_mut() = Some(Interval::new(POINT_POLL_MS, move || {
                    let overlay = Rc::clone(&overlay_for_poll);
                    spawn_local(async move {
                        // None means the fetch failed; skip this cycle and keep
                        // whatever is on screen decaying.
                        let Some(resp) = api::fetch_points().await else {
                            return;
                        };
                        if let Some(overlay) = overlay.borrow_mut().as_mut() {
                            // An inactive session is a positive "no laser"
                            // report, distinct from a fully decayed stroke.
                            if !resp.active {
                                overlay.clear();
                                return;
                            }
                            let width = overlay.core.viewport_width;
                            let height = overlay.core.viewport_height;
                            let points = rescale_batch(&resp.points, width, height, now_ms());
                            overlay.apply_remote(points);
                        }
                    });
                }));
            }
        });
    }

    // Deactivating the laser wipes the producer's trail immediately; the
    // channel-side effects are dispatched by whoever flipped the session.
    #[cfg(feature = "hydrate")]
    {
        if role == OverlayRole::Producer {
            let overlay = Rc::clone(&overlay);
            let was_active = RwSignal::new(false);
            Effect::new(move || {
                let active = laser.get().is_active();
                if was_active.get_untracked()
                    && !active
                    && let Some(overlay) = overlay.borrow_mut().as_mut()
                {
                    overlay.clear();
                }
                was_active.set(active);
            });
        }
    }

    #[cfg(feature = "hydrate")]
    {
        let render_loop = Rc::clone(&render_loop);
        let poll = Rc::clone(&poll);
        let resize = Rc::clone(&resize);
        on_cleanup(move || {
            render_loop.borrow_mut().take();
            poll.borrow_mut().take();
            if let Some((observer, _cb)) = resize.borrow_mut().take() {
                observer.disconnect();
            }
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let overlay = Rc::clone(&overlay);
            move |ev: leptos::ev::PointerEvent| {
                if role != OverlayRole::Producer || !laser.get_untracked().is_active() {
                    return;
                }
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get_untracked() {
                    let _ = canvas.set_pointer_capture(ev.pointer_id());
                }
                forward_event(&overlay, &canvas_ref, CaptureEvent::Start(pointer_point(&ev)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let overlay = Rc::clone(&overlay);
            move |ev: leptos::ev::PointerEvent| {
                if role != OverlayRole::Producer || !laser.get_untracked().is_active() {
                    return;
                }
                forward_event(&overlay, &canvas_ref, CaptureEvent::Move(pointer_point(&ev)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    // Up, leave, and cancel all end the session; the trail keeps decaying on
    // its own.
    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let overlay = Rc::clone(&overlay);
            move |ev: leptos::ev::PointerEvent| {
                if role != OverlayRole::Producer {
                    return;
                }
                if let Some(canvas) = canvas_ref.get_untracked() {
                    let _ = canvas.release_pointer_capture(ev.pointer_id());
                }
                forward_event(&overlay, &canvas_ref, CaptureEvent::End);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let overlay = Rc::clone(&overlay);
            move |ev: leptos::ev::PointerEvent| {
                if role != OverlayRole::Producer {
                    return;
                }
                if let Some(canvas) = canvas_ref.get_untracked() {
                    let _ = canvas.release_pointer_capture(ev.pointer_id());
                }
                forward_event(&overlay, &canvas_ref, CaptureEvent::End);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_cancel = {
        #[cfg(feature = "hydrate")]
        {
            let overlay = Rc::clone(&overlay);
            move |ev: leptos::ev::PointerEvent| {
                if role != OverlayRole::Producer {
                    return;
                }
                if let Some(canvas) = canvas_ref.get_untracked() {
                    let _ = canvas.release_pointer_capture(ev.pointer_id());
                }
                forward_event(&overlay, &canvas_ref, CaptureEvent::End);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    // The canvas only intercepts input on an active producer surface;
    // otherwise clicks pass through to the slide content underneath.
    let pointer_events = move || {
        if role == OverlayRole::Producer && laser.get().is_active() {
            "pointer-events: auto; cursor: crosshair;"
        } else {
            "pointer-events: none;"
        }
    };

    view! {
        <canvas
            class="laser-overlay"
            node_ref=canvas_ref
            style=pointer_events
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
            on:pointercancel=on_pointer_cancel
        ></canvas>
    }
}
