//! Component-owned UI state machines.
//!
//! DESIGN
//! ======
//! Each state type has a single writer, the component that owns its signal.
//! The lifecycle states only move forward: the splash never returns to
//! loading and a revealed section never hides again.

pub mod cursor;
pub mod reveal;
pub mod splash;
