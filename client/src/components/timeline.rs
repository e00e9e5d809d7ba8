//! Two-column experience / education timeline.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use leptos::prelude::*;

use crate::content::{Education, Internship};

#[component]
pub fn Timeline(internships: &'static [Internship], education: &'static [Education]) -> impl IntoView {
    view! {
        <div class="timeline">
            <div class="timeline__column">
                <h2 class="timeline__heading">
                    <span class="timeline__rule"></span>
                    "Professional Experience"
                </h2>
                <div class="timeline__entries">
                    {internships
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="timeline-entry timeline-entry--work">
                                    <div class="timeline-entry__marker"></div>
                                    <div class="timeline-entry__header">
                                        <h3>{item.company}</h3>
                                        <span class="timeline-entry__period mono">{item.period}</span>
                                    </div>
                                    <p class="timeline-entry__subtitle">{item.role}</p>
                                    <ul class="timeline-entry__points">
                                        {item.points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="timeline__column">
                <h2 class="timeline__heading">
                    <span class="timeline__rule"></span>
                    "Academic Journey"
                </h2>
                <div class="timeline__entries">
                    {education
                        .iter()
                        .map(|edu| {
                            view! {
                                <div class="timeline-entry timeline-entry--study">
                                    <div class="timeline-entry__marker"></div>
                                    <div class="timeline-entry__header">
                                        <h3>{edu.degree}</h3>
                                        <span class="timeline-entry__period mono">{edu.period}</span>
                                    </div>
                                    <p class="timeline-entry__subtitle">{edu.institution}</p>
                                    <p class="timeline-entry__details mono">{edu.details}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
