//! Platform integration: OS clipboard and per-user config location.

pub mod clipboard;
pub mod paths;
