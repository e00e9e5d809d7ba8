//! Static portfolio content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the page shows (owner profile, skills, projects, internships,
//! education) is compiled in as `'static` data. Components receive these
//! slices as props and only iterate them; nothing is looked up by key or
//! mutated at runtime.

pub mod data;
pub mod schema;
pub mod types;

pub use data::{EDUCATION, INTERNSHIPS, NAV_ITEMS, PROFILE, PROJECTS, SKILL_CATEGORIES};
pub use types::{Education, Internship, NavItem, Profile, Project, SectionId, SkillCategory};
