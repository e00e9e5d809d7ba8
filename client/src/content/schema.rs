//! schema.org `Person` metadata embedded in the document head.
//!
//! Search engines read the owner's name, contact points and skills from
//! this block, so it is built from the same static records the page renders.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use serde::Serialize;

use super::types::{Education, Profile, SkillCategory};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// JSON-LD `Person` node.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonLd<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    description: &'a str,
    email: String,
    telephone: &'a str,
    same_as: Vec<String>,
    knows_about: Vec<&'a str>,
    alumni_of: Vec<OrganizationLd<'a>>,
}

/// JSON-LD `EducationalOrganization` node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OrganizationLd<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

/// Build the JSON-LD node describing the site owner.
#[must_use]
pub fn person_json_ld<'a>(
    profile: &'a Profile,
    skills: &'a [SkillCategory],
    education: &'a [Education],
) -> PersonLd<'a> {
    PersonLd {
        context: SCHEMA_CONTEXT,
        kind: "Person",
        name: profile.name,
        description: profile.headline,
        email: profile.mailto_href(),
        telephone: profile.phone,
        same_as: vec![profile.github_url()],
        knows_about: skills.iter().flat_map(|cat| cat.skills.iter().copied()).collect(),
        alumni_of: education
            .iter()
            .map(|edu| OrganizationLd { kind: "EducationalOrganization", name: edu.institution })
            .collect(),
    }
}

/// Serialize the metadata for a `<script type="application/ld+json">` body.
///
/// `<` is escaped so no string value can close the surrounding script tag.
/// Serialization failures yield an empty object.
#[must_use]
pub fn person_json_ld_script(profile: &Profile, skills: &[SkillCategory], education: &[Education]) -> String {
    serde_json::to_string(&person_json_ld(profile, skills, education))
        .map_or_else(|_| String::from("{}"), |json| json.replace('<', "\\u003c"))
}
