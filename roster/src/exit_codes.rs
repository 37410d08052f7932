//! Stable exit codes for roster CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, bad arguments, or an I/O error.
pub const INVALID: i32 = 1;
