//! `Authorization: Bearer` header construction for Engine API requests.

use std::path::Path;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::debug;

use super::secret::JwtSecret;
use crate::error::{JwtError, JwtResult};

/// Append a freshly signed bearer token to `header`.
///
/// Pre-existing entries are left untouched. Nothing is mutated on error.
pub fn add_jwt_header(header: Option<&mut HeaderMap>, secret: Option<&JwtSecret>) -> JwtResult<()> {
    // Authenticate the execution node JSON-RPC endpoint.
    let secret = secret.ok_or(JwtError::InvalidSecret)?;
    let header = header.ok_or(JwtError::InvalidHeader)?;

    let value = bearer_value(secret)?;
    header.append(AUTHORIZATION, value);
    debug!(entries = header.len(), "attached engine api bearer token");
    Ok(())
}

/// Build a new header map carrying only the bearer token.
pub fn new_header_with_jwt(secret: Option<&JwtSecret>) -> JwtResult<HeaderMap> {
    let mut header = HeaderMap::new();
    add_jwt_header(Some(&mut header), secret)?;
    Ok(header)
}

fn bearer_value(secret: &JwtSecret) -> JwtResult<HeaderValue> {
    let token = secret.sign()?;
    let mut value =
        HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| JwtError::SigningFailure {
            message: e.to_string(),
        })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Engine API credentials held by a client.
///
/// A fresh token is signed on every call, so one instance can be shared
/// across request paths.
#[derive(Debug, Clone, Default)]
pub struct EngineAuth {
    secret: Option<Arc<JwtSecret>>,
}

impl EngineAuth {
    pub fn new(secret: Option<JwtSecret>) -> Self {
        Self {
            secret: secret.map(Arc::new),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> JwtResult<Self> {
        Ok(Self::new(Some(JwtSecret::load(path)?)))
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Headers for a single request.
    pub fn headers(&self) -> JwtResult<HeaderMap> {
        new_header_with_jwt(self.secret.as_deref())
    }

    /// Add the bearer token to headers the caller already built.
    pub fn apply(&self, header: &mut HeaderMap) -> JwtResult<()> {
        add_jwt_header(Some(header), self.secret.as_deref())
    }
}
