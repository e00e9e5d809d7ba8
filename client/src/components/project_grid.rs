//! Project showcase: one card per project with its technology tags.

#[cfg(test)]
#[path = "project_grid_test.rs"]
mod project_grid_test;

use leptos::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::content::Project;

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let corner = match project.link {
        Some(href) => view! {
            <a
                class="project-card__corner"
                href=href
                target="_blank"
                rel="noopener noreferrer"
                aria-label=format!("Open {}", project.title)
            >
                <Icon glyph=Glyph::ExternalLink size=20/>
            </a>
        }
        .into_any(),
        None => view! {
            <span class="project-card__corner">
                <Icon glyph=Glyph::ExternalLink size=20/>
            </span>
        }
        .into_any(),
    };

    view! {
        <article class="project-card">
            {corner}
            <div class="project-card__header">
                <div class="project-card__badge">
                    <Icon glyph=Glyph::Layers size=20/>
                </div>
                <h3 class="project-card__title">{project.title}</h3>
            </div>
            <p class="project-card__description">{project.description}</p>
            <div class="project-card__tags">
                {project
                    .technologies
                    .iter()
                    .map(|tech| view! { <span class="tag mono">{*tech}</span> })
                    .collect_view()}
            </div>
        </article>
    }
}

#[component]
pub fn ProjectGrid(projects: &'static [Project]) -> impl IntoView {
    view! {
        <div class="section__heading section__heading--center">
            <span class="eyebrow mono">"Showcase"</span>
            <h2>"Engineered Solutions"</h2>
        </div>
        <div class="project-grid">
            {projects.iter().map(|project| view! { <ProjectCard project=*project/> }).collect_view()}
        </div>
    }
}
