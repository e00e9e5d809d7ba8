//! Fixed top navigation with in-page links and the GitHub action.

use leptos::prelude::*;

use crate::components::hero::NAV_ENTRANCE_DELAY_SECS;
use crate::components::icon::{Glyph, Icon};
use crate::content::{NavItem, Profile};
use crate::util::links::open_github;
use crate::util::scroll::{scroll_to_section, scroll_to_top};

#[component]
pub fn NavBar(profile: Profile, items: &'static [NavItem]) -> impl IntoView {
    let entrance = format!("animation-delay:{NAV_ENTRANCE_DELAY_SECS}s");

    view! {
        <nav class="nav-bar" style=entrance>
            <a
                class="nav-bar__brand"
                href="#"
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to_top();
                }
            >
                <span class="nav-bar__logo">{profile.initial}</span>
                <span class="nav-bar__name">{profile.name}</span>
            </a>
            <div class="nav-bar__actions">
                <div class="nav-bar__links">
                    {items
                        .iter()
                        .map(|item| {
                            let target = item.target;
                            view! {
                                <a
                                    class="nav-bar__link"
                                    href=target.fragment()
                                    on:click=move |ev| {
                                        if scroll_to_section(target.as_str()) {
                                            ev.prevent_default();
                                        }
                                    }
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="nav-bar__github" type="button" on:click=move |_| open_github()>
                    <Icon glyph=Glyph::Github size=14/>
                    "GitHub"
                </button>
            </div>
        </nav>
    }
}
