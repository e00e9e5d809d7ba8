//! Record shapes for the static content collections.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

/// A showcased project. Display order is slice order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub link: Option<&'static str>,
}

/// One internship entry on the experience side of the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Internship {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub points: &'static [&'static str],
}

/// One education entry on the academic side of the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub details: &'static str,
}

/// A named group of skills; rendered as one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

/// Identity of the site owner plus contact endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initial: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub github_handle: &'static str,
    pub email: &'static str,
    /// Human-readable phone number; may contain spaces.
    pub phone: &'static str,
}

impl Profile {
    /// Public GitHub profile URL.
    #[must_use]
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github_handle)
    }

    #[must_use]
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` URI with all whitespace stripped from the display number.
    #[must_use]
    pub fn tel_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }
}

/// In-page navigation targets. Each maps to exactly one rendered section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// DOM id of the section element.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// `#id` fragment used as the anchor `href`, so links still work before hydration.
    #[must_use]
    pub fn fragment(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry in the fixed navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}
