//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Each browser-facing helper has a server-side fallback so the same
//! components render under SSR.

pub mod clock;
pub mod links;
pub mod pointer;
pub mod scroll;
pub mod spring;
