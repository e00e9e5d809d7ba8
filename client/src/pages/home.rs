//! The single landing page: navigation, hero and the five content sections.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::backdrop::ScrollBackdrop;
use crate::components::contact::ContactCard;
use crate::components::footer::SiteFooter;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::project_grid::ProjectGrid;
use crate::components::section::RevealSection;
use crate::components::skills_grid::SkillsGrid;
use crate::components::timeline::Timeline;
use crate::content::{EDUCATION, INTERNSHIPS, NAV_ITEMS, PROFILE, PROJECTS, SKILL_CATEGORIES, SectionId};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <ScrollBackdrop/>
        <NavBar profile=PROFILE items=NAV_ITEMS/>
        <main class="page">
            <Hero profile=PROFILE/>

            <RevealSection id=SectionId::About class="section--narrow">
                <div class="about">
                    <div class="about__title">
                        <h2>"THE " <br/> <span class="accent">"SUMMARY"</span></h2>
                        <div class="about__rule"></div>
                    </div>
                    <p class="about__body">{PROFILE.summary}</p>
                </div>
            </RevealSection>

            <RevealSection id=SectionId::Skills class="section--band">
                <SkillsGrid categories=SKILL_CATEGORIES/>
            </RevealSection>

            <RevealSection id=SectionId::Projects class="section--narrow">
                <ProjectGrid projects=PROJECTS/>
            </RevealSection>

            <RevealSection id=SectionId::Experience class="section--shade">
                <Timeline internships=INTERNSHIPS education=EDUCATION/>
            </RevealSection>

            <RevealSection id=SectionId::Contact class="section--narrow section--contact">
                <ContactCard profile=PROFILE/>
            </RevealSection>
        </main>
        <SiteFooter profile=PROFILE/>
    }
}
