//! Contact block with static email and phone actions.

use leptos::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::content::Profile;

#[component]
pub fn ContactCard(profile: Profile) -> impl IntoView {
    view! {
        <div class="contact-card">
            <div class="contact-card__accent"></div>
            <h2 class="contact-card__title">"LET'S CONNECT"</h2>
            <p class="contact-card__lead">
                "Have a challenging project or just want to chat about AI/ML? I'm always open to new opportunities."
            </p>
            <div class="contact-card__actions">
                <a class="contact-action" href=profile.mailto_href()>
                    <span class="contact-action__icon contact-action__icon--mail">
                        <Icon glyph=Glyph::Mail/>
                    </span>
                    <span class="contact-action__text">
                        <span class="contact-action__label mono">"Email Me"</span>
                        <span class="contact-action__value">{profile.email}</span>
                    </span>
                </a>
                <a class="contact-action" href=profile.tel_href()>
                    <span class="contact-action__icon contact-action__icon--phone">
                        <Icon glyph=Glyph::Phone/>
                    </span>
                    <span class="contact-action__text">
                        <span class="contact-action__label mono">"Call Me"</span>
                        <span class="contact-action__value">{profile.phone}</span>
                    </span>
                </a>
            </div>
        </div>
    }
}
