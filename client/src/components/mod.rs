//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive static content as props and own their animation state
//! locally. Browser subscriptions (pointer, scroll, intersection) are only
//! created in the `hydrate` build and are released with the component.

pub mod backdrop;
pub mod contact;
pub mod cursor;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod nav_bar;
pub mod project_grid;
pub mod section;
pub mod skills_grid;
pub mod splash;
pub mod timeline;
