//! Landing hero: animated avatar, name, headline and call-to-action buttons.
//!
//! Each block plays a CSS fade/slide-in after a fixed delay, in the order of
//! [`HERO_SEQUENCE`]. The timings are cosmetic and independent of content.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::content::{Profile, SectionId};
use crate::util::scroll::scroll_to_section;

/// Delay (seconds) before the navigation bar slides down.
pub const NAV_ENTRANCE_DELAY_SECS: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroStep {
    Avatar,
    Name,
    Headline,
    Actions,
}

/// Entrance order and delay (seconds) of each hero block.
pub const HERO_SEQUENCE: &[(HeroStep, f64)] = &[
    (HeroStep::Avatar, 1.2),
    (HeroStep::Name, 1.4),
    (HeroStep::Headline, 1.6),
    (HeroStep::Actions, 2.0),
];

/// Delay for `step`; steps missing from the sequence enter immediately.
#[must_use]
pub fn entrance_delay(step: HeroStep) -> f64 {
    HERO_SEQUENCE
        .iter()
        .find(|(s, _)| *s == step)
        .map_or(0.0, |(_, delay)| *delay)
}

fn entrance_style(step: HeroStep) -> String {
    format!("animation-delay:{}s", entrance_delay(step))
}

fn go_to(id: SectionId) -> impl Fn(leptos::ev::MouseEvent) + 'static {
    move |ev: leptos::ev::MouseEvent| {
        if scroll_to_section(id.as_str()) {
            ev.prevent_default();
        }
    }
}

/// Faceless figure in a softly bobbing card.
#[component]
fn AnimatedAvatar() -> impl IntoView {
    view! {
        <div class="avatar">
            <div class="avatar__glow"></div>
            <svg class="avatar__figure" viewBox="0 0 100 100" aria-hidden="true">
                <circle class="avatar__head" cx="50" cy="35" r="18"></circle>
                <path
                    class="avatar__shoulders"
                    d="M20 90 Q50 60 80 90"
                    stroke-width="10"
                    stroke="currentColor"
                    fill="none"
                    stroke-linecap="round"
                ></path>
            </svg>
            <div class="avatar__frame"></div>
        </div>
    }
}

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__step hero__avatar" style=entrance_style(HeroStep::Avatar)>
                <div class="hero__halo"></div>
                <AnimatedAvatar/>
            </div>
            <div class="hero__step" style=entrance_style(HeroStep::Name)>
                <h1 class="hero__name">{profile.name.to_uppercase()}</h1>
            </div>
            <p class="hero__step hero__headline" style=entrance_style(HeroStep::Headline)>
                {profile.headline}
            </p>
            <div class="hero__step hero__actions" style=entrance_style(HeroStep::Actions)>
                <a class="button button--primary" href=SectionId::Projects.fragment() on:click=go_to(SectionId::Projects)>
                    "View Projects"
                </a>
                <a class="button button--ghost" href=SectionId::Contact.fragment() on:click=go_to(SectionId::Contact)>
                    "Get in Touch"
                </a>
            </div>
            <a
                class="hero__scroll-hint"
                href=SectionId::About.fragment()
                aria-label="Scroll to about"
                on:click=go_to(SectionId::About)
            >
                <Icon glyph=Glyph::ChevronDown/>
            </a>
        </section>
    }
}
