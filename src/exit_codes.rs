//! Exit codes for sprig.
//!
//! The contract is deliberately coarse: 0 for success (including a user
//! cancelling a prompt), 1 for every failure. When the launched assistant is
//! the terminal action its own exit code is propagated instead.

/// Successful execution, including user-cancelled flows.
pub const SUCCESS: i32 = 0;

/// Any failure: bad usage, missing dependency, git error.
pub const FAILURE: i32 = 1;
