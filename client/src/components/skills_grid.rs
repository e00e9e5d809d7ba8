//! Skills grid: one card per skill category, skills as pills in source order.

#[cfg(test)]
#[path = "skills_grid_test.rs"]
mod skills_grid_test;

use leptos::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::content::SkillCategory;

/// Stagger between consecutive cards' entrances.
const CARD_STAGGER_MS: usize = 100;

const CATEGORY_GLYPHS: [Glyph; 4] = [Glyph::Code, Glyph::Brain, Glyph::Database, Glyph::Cpu];

/// Icon for the card at `index`; categories past the icon table share a generic glyph.
#[must_use]
pub fn category_glyph(index: usize) -> Glyph {
    CATEGORY_GLYPHS.get(index).copied().unwrap_or(Glyph::Layers)
}

fn card_style(index: usize) -> String {
    format!("transition-delay:{}ms", index * CARD_STAGGER_MS)
}

#[component]
pub fn SkillsGrid(categories: &'static [SkillCategory]) -> impl IntoView {
    view! {
        <div class="section__inner">
            <div class="section__heading">
                <span class="eyebrow mono">"Expertise"</span>
                <h2>"Technical Arsenal"</h2>
            </div>
            <div class="skills-grid">
                {categories
                    .iter()
                    .enumerate()
                    .map(|(index, category)| {
                        view! {
                            <article class="skill-card" style=card_style(index)>
                                <div class="skill-card__icon">
                                    <Icon glyph=category_glyph(index)/>
                                </div>
                                <h3 class="skill-card__title">{category.name}</h3>
                                <div class="skill-card__skills">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| view! { <span class="pill">{*skill}</span> })
                                        .collect_view()}
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
