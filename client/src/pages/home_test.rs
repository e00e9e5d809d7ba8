use super::*;
use leptos::tachys::view::RenderHtml;

fn render() -> String {
    Owner::new().with(|| view! { <HomePage/> }.to_html())
}

#[test]
fn every_section_anchor_exists_exactly_once() {
    let html = render();
    for id in SectionId::ALL {
        let needle = format!("id=\"{id}\"");
        assert_eq!(html.matches(&needle).count(), 1, "{needle}");
    }
}

#[test]
fn sections_render_in_navigation_order() {
    let html = render();
    let mut last = 0;
    for item in NAV_ITEMS {
        let at = html
            .find(&format!("id=\"{}\"", item.target))
            .expect("section rendered");
        assert!(at > last, "{} out of order", item.target);
        last = at;
    }
}

#[test]
fn sections_start_hidden_before_hydration() {
    let html = render();
    let hidden = html.matches("opacity:0;transform:translateY(40px)").count();
    assert_eq!(hidden, SectionId::ALL.len());
    assert!(!html.contains("reveal--revealed"));
}

#[test]
fn nav_links_point_at_section_fragments() {
    let html = render();
    for item in NAV_ITEMS {
        assert!(html.contains(&format!("href=\"#{}\"", item.target)), "{}", item.label);
    }
}

#[test]
fn contact_links_use_fixed_endpoints() {
    let html = render();
    assert!(html.contains("href=\"mailto:syedowaismohi@gmail.com\""));
    assert!(html.contains("href=\"tel:+919353120726\""));
    assert!(html.contains("+91 9353120726"));
}
