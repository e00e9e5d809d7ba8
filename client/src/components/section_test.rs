use super::*;
use leptos::tachys::view::RenderHtml;

fn body() -> Children {
    Box::new(|| view! { <p>"Body copy"</p> }.into_any())
}

fn render_with(state: RevealState, delay: f64) -> String {
    Owner::new().with(|| {
        let reveal = RwSignal::new(state);
        section_view(SectionId::Skills, "section--band", RevealStyle::new(delay), reveal, NodeRef::new(), body())
            .to_html()
    })
}

#[test]
fn section_renders_hidden_before_observation() {
    let html = Owner::new().with(|| {
        view! {
            <RevealSection id=SectionId::About class="section--narrow">
                <p>"Body copy"</p>
            </RevealSection>
        }
        .to_html()
    });
    assert!(html.contains(r#"id="about""#));
    assert!(html.contains(r#"class="section reveal section--narrow""#));
    assert!(html.contains("opacity:0;transform:translateY(40px)"));
    assert!(html.contains("Body copy"));
}

#[test]
fn pending_state_markup_is_hidden() {
    let html = render_with(RevealState::Pending, 0.0);
    assert!(html.contains(r#"class="section reveal section--band""#));
    assert!(!html.contains("reveal--revealed"));
    assert!(html.contains("opacity:0"));
}

#[test]
fn revealed_state_markup_is_visible_with_delay() {
    let html = render_with(RevealState::Revealed, 0.3);
    assert!(html.contains(r#"id="skills""#));
    assert!(html.contains(r#"class="section reveal reveal--revealed section--band""#));
    assert!(html.contains("opacity:1;transform:none"));
    assert!(html.contains("0.3s"));
    assert!(!html.contains("translateY(40px)"));
    assert!(html.contains("Body copy"));
}
