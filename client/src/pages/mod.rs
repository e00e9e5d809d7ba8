//! Route-level page modules.

pub mod home;
