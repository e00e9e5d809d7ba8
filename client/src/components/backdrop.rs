//! Fixed page background that drifts with scroll, plus the centre progress line.

use leptos::prelude::*;

use crate::util::scroll::background_drift_style;

#[component]
pub fn ScrollBackdrop() -> impl IntoView {
    let progress = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    track_scroll(progress);

    view! {
        <div class="backdrop" aria-hidden="true" style=move || background_drift_style(progress.get())></div>
        <div class="backdrop__texture" aria-hidden="true"></div>
        <div class="progress-line" aria-hidden="true">
            <div class="progress-line__fill" style=move || format!("transform:scaleY({:.4})", progress.get())></div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn track_scroll(progress: RwSignal<f64>) {
    use crate::util::scroll::read_scroll_progress;

    Effect::new(move || progress.set(read_scroll_progress()));
    let on_scroll = window_event_listener(leptos::ev::scroll, move |_| progress.set(read_scroll_progress()));
    let on_resize = window_event_listener(leptos::ev::resize, move |_| progress.set(read_scroll_progress()));
    let handles = StoredValue::new_local(vec![on_scroll, on_resize]);

    on_cleanup(move || {
        handles.try_update_value(|handles| {
            for handle in handles.drain(..) {
                handle.remove();
            }
        });
    });
}
