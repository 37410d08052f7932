//! In-memory student roster editor.
//!
//! A session holds an ordered list of student records and a form draft used
//! to create or edit one record at a time. The architecture keeps a strict
//! separation:
//!
//! - **[`core`]**: Pure, deterministic logic (validation, roster mutations,
//!   the confirmation-gate contract). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting helpers (config file, terminal prompt).
//!
//! The front-end modules ([`render`], [`shell`]) read the whole state after
//! every command and drive the core from a line-oriented terminal session.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod render;
pub mod shell;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
