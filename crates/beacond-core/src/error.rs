//! Error types for the consent gate and Engine API authentication.

use std::path::PathBuf;

use crate::tos::DECLINED_ERROR_TEXT;

/// Consent gate errors.
///
/// Every variant aborts the enclosing command before it runs.
#[derive(Debug, thiserror::Error)]
pub enum TosError {
    /// Operator declined, or answered with anything other than the accept token.
    #[error("{}", DECLINED_ERROR_TEXT)]
    Declined,

    /// The answer could not be read from the input stream.
    #[error("{message}: {source}")]
    PromptFailed {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Acceptance could not be recorded on disk.
    #[error("failed to record terms acceptance at {}: {source}", path.display())]
    MarkerWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Marker existence could not be determined.
    #[error("failed to check terms acceptance at {}: {source}", path.display())]
    MarkerRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for consent gate operations.
pub type TosResult<T> = Result<T, TosError>;

/// JWT secret and header builder errors.
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// No secret was configured.
    #[error("jwt secret is missing")]
    InvalidSecret,

    /// No header container was supplied.
    #[error("http header map is missing")]
    InvalidHeader,

    /// The signing library failed.
    #[error("failed to sign jwt: {message}")]
    SigningFailure { message: String },

    /// Secret text is not a 32-byte hex string.
    #[error("malformed jwt secret: {reason}")]
    MalformedSecret { reason: String },

    /// Secret file could not be read or written.
    #[error("jwt secret file {}: {source}", path.display())]
    SecretFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Refusing to overwrite an existing secret file.
    #[error("jwt secret already exists: {} (use --force to overwrite)", path.display())]
    SecretExists { path: PathBuf },

    /// A token failed verification against the secret.
    #[error("token rejected: {reason}")]
    TokenRejected { reason: String },
}

impl From<jsonwebtoken::errors::Error> for JwtError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::SigningFailure {
            message: err.to_string(),
        }
    }
}

/// Result type for JWT operations.
pub type JwtResult<T> = Result<T, JwtError>;
