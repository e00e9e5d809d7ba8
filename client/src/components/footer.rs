//! Page footer with secondary contact actions and the copyright line.

use leptos::prelude::*;

use crate::content::Profile;
use crate::util::clock::current_year;
use crate::util::links::open_github;

#[component]
pub fn SiteFooter(profile: Profile) -> impl IntoView {
    let copyright = format!("© {} {} • BUILT WITH PASSION", current_year(), profile.name.to_uppercase());

    view! {
        <footer class="site-footer mono">
            <div class="site-footer__links">
                <button class="site-footer__link" type="button" on:click=move |_| open_github()>
                    "GITHUB"
                </button>
                <a class="site-footer__link" href=profile.mailto_href()>
                    "EMAIL"
                </a>
            </div>
            <div class="site-footer__copyright">{copyright}</div>
        </footer>
    }
}
