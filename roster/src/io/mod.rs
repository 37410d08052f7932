//! I/O helpers for the roster front-end.

pub mod config;
pub mod prompt;
