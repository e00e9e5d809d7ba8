//! Root application component, HTML shell, and the splash timer.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::cursor::CursorFollower;
use crate::components::splash::SplashOverlay;
use crate::content::schema::person_json_ld_script;
use crate::content::{EDUCATION, PROFILE, SKILL_CATEGORIES};
use crate::pages::home::HomePage;
use crate::state::splash::SplashState;

/// Sections stay visible when scripts never run.
const NOSCRIPT_REVEAL_CSS: &str =
    ".reveal,.skill-card{opacity:1!important;transform:none!important}.splash,.cursor{display:none}";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <noscript>
                    <style>{NOSCRIPT_REVEAL_CSS}</style>
                </noscript>
                <script type="application/ld+json" inner_html=person_json_ld_script(&PROFILE, SKILL_CATEGORIES, EDUCATION)></script>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the loading flag: the splash overlay is shown on mount and a
/// one-shot timer flips it to loaded after `SPLASH_DELAY`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let splash = RwSignal::new(SplashState::default());

    #[cfg(feature = "hydrate")]
    schedule_splash(splash);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=format!("{} | AI & ML Engineer", PROFILE.name)/>
        <Meta name="description" content=PROFILE.headline/>

        <div class="app">
            <CursorFollower/>
            <SplashOverlay state=splash/>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </div>
    }
}

/// Fire the splash transitions once; nothing fires after the app unmounts.
#[cfg(feature = "hydrate")]
fn schedule_splash(splash: RwSignal<SplashState>) {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::state::splash::{SPLASH_DELAY, SPLASH_EXIT};

    let alive = Arc::new(AtomicBool::new(true));
    let alive_task = alive.clone();
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(SPLASH_DELAY).await;
        if !alive_task.load(Ordering::Relaxed) {
            return;
        }
        if splash.try_update(SplashState::finish).unwrap_or(false) {
            log::debug!("splash finished");
        }

        gloo_timers::future::sleep(SPLASH_EXIT).await;
        if !alive_task.load(Ordering::Relaxed) {
            return;
        }
        splash.update(|state| {
            state.retire();
        });
    });
    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}
