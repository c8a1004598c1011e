//! Startup consent gate and Engine API authentication for beacond.
//!
//! This crate provides:
//!
//! - A terms-of-use gate that runs before any command, backed by a marker file
//!   in the node home directory
//! - A 32-byte shared JWT secret and the `Authorization: Bearer` header builder
//!   used on every authenticated Engine API request
//! - Node configuration resolved from defaults, environment, and CLI overrides
//!
//! # Quick Start
//!
//! ```no_run
//! use beacond_core::{new_header_with_jwt, JwtSecret};
//!
//! # fn example() -> Result<(), beacond_core::JwtError> {
//! let secret = JwtSecret::load("jwt.hex")?;
//! let headers = new_header_with_jwt(Some(&secret))?;
//! assert!(headers.contains_key("authorization"));
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `BEACOND_HOME` | Node home directory (default: `~/.beacond`) |
//! | `BEACOND_ACCEPT_TOS` | Accept the terms of use non-interactively (`1`/`true`) |
//! | `BEACOND_JWT_SECRET` | Path to the hex-encoded Engine API JWT secret |
//! | `BEACOND_TOS_URL` | Terms of use URL shown in the prompt |

pub mod config;
pub mod error;
pub mod jwt;
pub mod tos;

pub use config::NodeConfig;
pub use error::{JwtError, JwtResult, TosError, TosResult};
pub use jwt::{add_jwt_header, new_header_with_jwt, EngineAuth, EngineClaims, JwtSecret};
pub use tos::{
    parse_decision, prompt_error_text, AcceptedVia, ConsentGate, ConsentState, TosDecision,
    TosMarker, ACCEPT_TOKEN, ACCEPT_TOS_FILENAME, DECLINED_ERROR_TEXT, DECLINE_TOKEN,
};
