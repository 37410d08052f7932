//! Deterministic, pure logic behind the roster editor.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod confirm;
pub mod draft;
pub mod invariants;
pub mod roster;
pub mod types;
pub mod validate;
