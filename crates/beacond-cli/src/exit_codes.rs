//! Exit codes for beacond.
//! These codes are part of the public contract; scripts branch on them.

use beacond_core::{JwtError, TosError};

pub const SUCCESS: i32 = 0;
pub const COMMAND_FAILED: i32 = 1; // Command ran and failed
pub const CONFIG_ERROR: i32 = 2; // Configuration, filesystem, or internal error
pub const CONSENT_REQUIRED: i32 = 3; // Terms declined or prompt could not complete

/// Exit code for a consent gate failure.
pub fn for_tos_error(err: &TosError) -> i32 {
    match err {
        // Operator must re-run and accept
        TosError::Declined | TosError::PromptFailed { .. } => CONSENT_REQUIRED,

        // Filesystem issues
        TosError::MarkerWrite { .. } | TosError::MarkerRead { .. } => CONFIG_ERROR,
    }
}

/// Exit code for a `jwt` command failure.
pub fn for_jwt_error(err: &JwtError) -> i32 {
    match err {
        // Misconfiguration
        JwtError::InvalidSecret
        | JwtError::InvalidHeader
        | JwtError::MalformedSecret { .. }
        | JwtError::SecretFile { .. } => CONFIG_ERROR,

        JwtError::SecretExists { .. }
        | JwtError::SigningFailure { .. }
        | JwtError::TokenRejected { .. } => COMMAND_FAILED,
    }
}
