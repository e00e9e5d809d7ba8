//! Section wrapper that fades and rises into view the first time it is seen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every content section on the page is a `RevealSection`. SSR renders the
//! hidden state; after hydration an `IntersectionObserver` feeds
//! [`RevealState::observe`] and is disconnected as soon as the section is
//! revealed. Browsers without `IntersectionObserver` get the revealed state
//! immediately.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;

use crate::content::SectionId;
use crate::state::reveal::{RevealState, RevealStyle, section_class};

#[component]
pub fn RevealSection(
    id: SectionId,
    /// Extra classes appended to the shared section class.
    #[prop(optional)]
    class: &'static str,
    /// Entrance delay in seconds.
    #[prop(optional)]
    delay: f64,
    children: Children,
) -> impl IntoView {
    let reveal = RwSignal::new(RevealState::default());
    let node = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    observe_once(node, reveal, id);

    section_view(id, class, RevealStyle::new(delay), reveal, node, children)
}

fn section_view(
    id: SectionId,
    class: &'static str,
    style: RevealStyle,
    reveal: RwSignal<RevealState>,
    node: NodeRef<leptos::html::Section>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id.as_str()
            node_ref=node
            class=move || section_class(class, reveal.get())
            style=move || style.css(reveal.get())
        >
            {children()}
        </section>
    }
}

#[cfg(feature = "hydrate")]
type ObserverCallback = wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Attach a one-shot intersection observer to `node`.
#[cfg(feature = "hydrate")]
fn observe_once(node: NodeRef<leptos::html::Section>, reveal: RwSignal<RevealState>, id: SectionId) {
    use wasm_bindgen::JsCast;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::state::reveal::REVEAL_ROOT_MARGIN;

    let slot = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

    Effect::new(move || {
        let Some(element) = node.get() else {
            return;
        };
        if slot.with_value(Option::is_some) || reveal.get_untracked().is_revealed() {
            return;
        }

        let callback: ObserverCallback = wasm_bindgen::closure::Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
                let revealed = reveal.try_update(|state| state.observe(intersecting)).unwrap_or(false);
                if revealed {
                    log::debug!("section #{id} revealed");
                    observer.disconnect();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                slot.set_value(Some((observer, callback)));
            }
            Err(_) => {
                log::debug!("IntersectionObserver unavailable; revealing #{id}");
                reveal.update(|state| {
                    state.force_reveal();
                });
            }
        }
    });

    on_cleanup(move || {
        slot.try_update_value(|entry| {
            if let Some((observer, _callback)) = entry.take() {
                observer.disconnect();
            }
        });
    });
}
