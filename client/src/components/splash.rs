//! Full-screen loading overlay shown until the splash timer fires.

#[cfg(test)]
#[path = "splash_test.rs"]
mod splash_test;

use leptos::prelude::*;

use crate::state::splash::SplashState;

#[component]
pub fn SplashOverlay(#[prop(into)] state: Signal<SplashState>) -> impl IntoView {
    view! {
        <Show when=move || state.get().overlay_mounted()>
            <div
                class=move || state.get().overlay_class()
                role="status"
                aria-live="polite"
                aria-hidden=move || (!state.get().is_loading()).to_string()
            >
                <div class="splash__content">
                    <div class="splash__bar"></div>
                    <div class="splash__label mono">"Initializing Portfolio"</div>
                </div>
            </div>
        </Show>
    }
}
