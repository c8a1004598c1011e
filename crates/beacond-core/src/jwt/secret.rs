//! The 32-byte shared secret between the consensus and execution clients.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{JwtError, JwtResult};

/// Secret length in bytes (256 bits).
pub const SECRET_LENGTH: usize = 32;

/// Maximum distance between a token's `iat` and the verifier's clock.
pub const IAT_DRIFT_SECONDS: i64 = 60;

/// Claims carried by an Engine API token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineClaims {
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
}

/// Engine API shared secret.
#[derive(Clone, PartialEq, Eq)]
pub struct JwtSecret([u8; SECRET_LENGTH]);

impl JwtSecret {
    pub fn new(bytes: [u8; SECRET_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Generate a secret from the thread-local CSPRNG.
    pub fn random() -> Self {
        let mut bytes = [0u8; SECRET_LENGTH];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Parse hex text, with or without a `0x` prefix. Surrounding whitespace is ignored.
    pub fn from_hex(text: &str) -> JwtResult<Self> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let decoded = hex::decode(digits).map_err(|e| JwtError::MalformedSecret {
            reason: e.to_string(),
        })?;
        let bytes: [u8; SECRET_LENGTH] =
            decoded
                .try_into()
                .map_err(|rest: Vec<u8>| JwtError::MalformedSecret {
                    reason: format!("expected {} bytes, got {}", SECRET_LENGTH, rest.len()),
                })?;

        Ok(Self(bytes))
    }

    /// Read a hex-encoded secret file.
    pub fn load(path: impl AsRef<Path>) -> JwtResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| JwtError::SecretFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded jwt secret");
        Self::from_hex(&text)
    }

    /// Write the secret as `0x` hex. The file is readable by the owner only.
    pub fn write(&self, path: impl AsRef<Path>, force: bool) -> JwtResult<()> {
        let path = path.as_ref();
        let file_err = |source| JwtError::SecretFile {
            path: path.to_path_buf(),
            source,
        };

        if path.exists() && !force {
            return Err(JwtError::SecretExists {
                path: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(file_err)?;
        }
        fs::write(path, self.to_hex()).map_err(file_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(file_err)?;
        }

        Ok(())
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Sign a token issued now.
    pub fn sign(&self) -> JwtResult<String> {
        self.sign_at(chrono::Utc::now().timestamp())
    }

    /// Sign a token with an explicit issued-at.
    pub fn sign_at(&self, issued_at: i64) -> JwtResult<String> {
        let claims = EngineClaims { iat: issued_at };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.0),
        )?;
        Ok(token)
    }

    /// Verify a token the way an execution client does.
    pub fn verify(&self, token: &str) -> JwtResult<EngineClaims> {
        self.verify_at(token, chrono::Utc::now().timestamp())
    }

    /// Verify against an explicit clock. Only HS256 is accepted; `iat` must be
    /// within [`IAT_DRIFT_SECONDS`] of `now`.
    pub fn verify_at(&self, token: &str, now: i64) -> JwtResult<EngineClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_aud = false;

        let data = decode::<EngineClaims>(token, &DecodingKey::from_secret(&self.0), &validation)
            .map_err(|e| JwtError::TokenRejected {
                reason: e.to_string(),
            })?;

        let claims = data.claims;
        let drift = (now - claims.iat).abs();
        if drift > IAT_DRIFT_SECONDS {
            return Err(JwtError::TokenRejected {
                reason: format!(
                    "iat {} is {}s from local clock (max {}s)",
                    claims.iat, drift, IAT_DRIFT_SECONDS
                ),
            });
        }

        Ok(claims)
    }
}

impl fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JwtSecret(<redacted>)")
    }
}

impl FromStr for JwtSecret {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEX: &str = "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    #[test]
    fn from_hex_accepts_prefix_and_whitespace() {
        let a = JwtSecret::from_hex(HEX).unwrap();
        let b = JwtSecret::from_hex(&format!("  {}\n", &HEX[2..])).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_hex(), HEX);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let err = JwtSecret::from_hex("0xdeadbeef").unwrap_err();
        assert!(matches!(err, JwtError::MalformedSecret { .. }));
        assert!(err.to_string().contains("expected 32 bytes, got 4"));

        assert!(JwtSecret::from_hex("").is_err());
        assert!(JwtSecret::from_hex("0xzz").is_err());
    }

    #[test]
    fn debug_redacts_key_material() {
        let secret = JwtSecret::from_hex(HEX).unwrap();
        let printed = format!("{secret:?}");
        assert_eq!(printed, "JwtSecret(<redacted>)");
        assert!(!printed.contains("0123"));
    }

    #[test]
    fn write_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("jwt.hex");
        let secret = JwtSecret::random();

        secret.write(&path, false).unwrap();
        assert_eq!(JwtSecret::load(&path).unwrap(), secret);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
            assert_eq!(mode, 0o600);
        }
    }

    #[test]
    fn write_refuses_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("jwt.hex");
        JwtSecret::random().write(&path, false).unwrap();

        let err = JwtSecret::random().write(&path, false).unwrap_err();
        assert!(matches!(err, JwtError::SecretExists { .. }));

        let replacement = JwtSecret::random();
        replacement.write(&path, true).unwrap();
        assert_eq!(JwtSecret::load(&path).unwrap(), replacement);
    }

    #[test]
    fn load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = JwtSecret::load(tmp.path().join("absent.hex")).unwrap_err();
        assert!(matches!(err, JwtError::SecretFile { .. }));
    }

    #[test]
    fn verify_checks_signature_and_drift() {
        let secret = JwtSecret::random();
        let token = secret.sign_at(1_700_000_000).unwrap();

        let claims = secret.verify_at(&token, 1_700_000_030).unwrap();
        assert_eq!(claims.iat, 1_700_000_000);

        let stale = secret.verify_at(&token, 1_700_000_061).unwrap_err();
        assert!(stale.to_string().contains("from local clock"));

        let other = JwtSecret::random();
        assert!(matches!(
            other.verify_at(&token, 1_700_000_000),
            Err(JwtError::TokenRejected { .. })
        ));
    }
}
