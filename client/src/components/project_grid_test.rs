use super::*;
use crate::content::PROJECTS;
use leptos::tachys::view::RenderHtml;

const LINKED: &[Project] = &[Project {
    title: "Linked",
    description: "Has a link.",
    technologies: &["Rust"],
    link: Some("https://example.com/linked"),
}];

fn render(projects: &'static [Project]) -> String {
    Owner::new().with(|| view! { <ProjectGrid projects=projects/> }.to_html())
}

#[test]
fn renders_one_card_per_project() {
    let html = render(PROJECTS);
    assert_eq!(html.matches("class=\"project-card\"").count(), PROJECTS.len());
}

#[test]
fn cards_follow_collection_order() {
    let html = render(PROJECTS);
    let mut last = 0;
    for project in PROJECTS {
        let at = html.find(project.title).expect("title rendered");
        assert!(at >= last, "{} out of order", project.title);
        last = at;
    }
}

#[test]
fn technology_tags_keep_source_order() {
    let html = render(PROJECTS);
    let tags: usize = PROJECTS.iter().map(|p| p.technologies.len()).sum();
    assert_eq!(html.matches("class=\"tag mono\"").count(), tags);

    let first = &PROJECTS[0];
    let start = html.find(first.title).expect("first card");
    let end = html.find(PROJECTS[1].title).expect("second card");
    let tags_at = html[start..end].find("project-card__tags").expect("tag row");
    let card = &html[start + tags_at..end];
    let mut last = 0;
    for tech in first.technologies {
        let at = card.find(tech).unwrap_or_else(|| panic!("{tech} missing"));
        assert!(at >= last);
        last = at;
    }
}

#[test]
fn project_links_open_in_new_context() {
    let html = render(LINKED);
    assert!(html.contains("href=\"https://example.com/linked\""));
    assert!(html.contains("target=\"_blank\""));
}

#[test]
fn projects_without_link_render_no_anchor() {
    let html = render(PROJECTS);
    assert!(!html.contains("target=\"_blank\""));
}

#[test]
fn empty_project_list_renders_no_cards() {
    let html = render(&[]);
    assert_eq!(html.matches("class=\"project-card\"").count(), 0);
}
