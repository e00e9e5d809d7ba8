//! Custom cursor follower: an outer halo ring and an inner dot.
//!
//! The pointer position is written on every `mousemove`. A ~60 Hz loop
//! advances the springs by the measured frame time and exits once both
//! indicators settle; the next `mousemove` starts it again. The listener and
//! any running loop are released when the component unmounts. On devices
//! without a fine pointer nothing is subscribed and the indicators stay
//! hidden by CSS.

use leptos::prelude::*;

use crate::state::cursor::{CursorTrail, translate_style};

#[cfg(feature = "hydrate")]
const FRAME_MS: u64 = 16;

#[component]
pub fn CursorFollower() -> impl IntoView {
    let trail = RwSignal::new(CursorTrail::default());

    #[cfg(feature = "hydrate")]
    track_pointer(trail);

    let ring_style = move || translate_style(trail.with(CursorTrail::ring_position));
    let dot_style = move || translate_style(trail.with(CursorTrail::dot_position));

    view! {
        <div class="cursor cursor--ring" aria-hidden="true" style=ring_style></div>
        <div class="cursor cursor--dot" aria-hidden="true" style=dot_style></div>
    }
}

#[cfg(feature = "hydrate")]
fn track_pointer(trail: RwSignal<CursorTrail>) {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    if !crate::util::pointer::has_fine_pointer() {
        return;
    }

    let alive = Arc::new(AtomicBool::new(true));
    let running = Arc::new(AtomicBool::new(false));

    let listener = window_event_listener(leptos::ev::mousemove, {
        let alive = alive.clone();
        move |ev| {
            trail.update(|t| t.pointer_moved(f64::from(ev.client_x()), f64::from(ev.client_y())));
            if !running.swap(true, Ordering::Relaxed) {
                follow(trail, alive.clone(), running.clone());
            }
        }
    });
    let listener = StoredValue::new_local(Some(listener));

    on_cleanup(move || {
        alive.store(false, Ordering::Relaxed);
        listener.try_update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.remove();
            }
        });
    });
}

/// Step the springs until they settle or the follower unmounts, then clear
/// `running` so the next pointer move restarts the loop.
#[cfg(feature = "hydrate")]
fn follow(
    trail: RwSignal<CursorTrail>,
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
    running: std::sync::Arc<std::sync::atomic::AtomicBool>,
) {
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use crate::state::cursor::frame_secs;

    leptos::task::spawn_local(async move {
        let frame = Duration::from_millis(FRAME_MS);
        let mut last = js_sys::Date::now();
        loop {
            gloo_timers::future::sleep(frame).await;
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            let now = js_sys::Date::now();
            let dt = frame_secs(last, now);
            last = now;
            if !trail.try_update(|t| t.tick(dt)).unwrap_or(false) {
                break;
            }
        }
        running.store(false, Ordering::Relaxed);
    });
}
