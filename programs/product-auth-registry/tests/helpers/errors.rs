//! Error code re-exports from the program
//!
//! We re-export the program's AuthError enum for use in tests.
//! Anchor custom errors start at 6000.
//!
//! These helpers are shared across multiple test files. Each test binary
//! only uses a subset, so dead_code warnings are expected and suppressed.

#![allow(dead_code)]

pub use product_auth_registry::errors::AuthError;

/// Convert AuthError to u32 for ProgramError::Custom
pub fn error_code(code: AuthError) -> u32 {
    // Anchor error codes start at 6000
    6000 + code as u32
}

/// Anchor's AccountNotInitialized, raised when a typed account is empty
pub const ACCOUNT_NOT_INITIALIZED: u32 = 3012;
