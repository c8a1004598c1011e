//! Node configuration: defaults, then environment, then CLI overrides.

use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::tos::DEFAULT_TOS_URL;

/// Directory under the user's home used when no home is configured.
pub const DEFAULT_HOME_DIR: &str = ".beacond";

/// Default file name for the Engine API secret inside the home directory.
pub const DEFAULT_JWT_SECRET_FILE: &str = "jwt.hex";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    pub home: PathBuf,
    pub accept_tos: bool,
    pub jwt_secret: Option<PathBuf>,
    pub tos_url: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            home: default_home(),
            accept_tos: false,
            jwt_secret: None,
            tos_url: DEFAULT_TOS_URL.to_string(),
        }
    }
}

impl NodeConfig {
    /// Load from environment.
    ///
    /// Reads `BEACOND_HOME`, `BEACOND_ACCEPT_TOS`, `BEACOND_JWT_SECRET` and
    /// `BEACOND_TOS_URL`; unset or empty variables keep the default.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Some(v) = non_empty_var("BEACOND_HOME") {
            cfg.home = PathBuf::from(v);
        }

        if let Some(v) = non_empty_var("BEACOND_ACCEPT_TOS") {
            cfg.accept_tos = match parse_bool(&v) {
                Some(b) => b,
                None => {
                    warn!(value = %v, "ignoring unrecognized BEACOND_ACCEPT_TOS value");
                    false
                }
            };
        }

        if let Some(v) = non_empty_var("BEACOND_JWT_SECRET") {
            cfg.jwt_secret = Some(PathBuf::from(v));
        }

        if let Some(v) = non_empty_var("BEACOND_TOS_URL") {
            cfg.tos_url = v;
        }

        cfg
    }

    /// Apply command-line values. A set flag always wins; `accept_tos` can only
    /// be switched on from the command line, never off.
    pub fn with_overrides(
        mut self,
        home: Option<PathBuf>,
        accept_tos: bool,
        jwt_secret: Option<PathBuf>,
    ) -> Self {
        if let Some(home) = home {
            self.home = home;
        }
        self.accept_tos |= accept_tos;
        if jwt_secret.is_some() {
            self.jwt_secret = jwt_secret;
        }
        self
    }

    /// Configured secret path, or `<home>/jwt.hex`.
    pub fn jwt_secret_path(&self) -> PathBuf {
        self.jwt_secret
            .clone()
            .unwrap_or_else(|| self.home.join(DEFAULT_JWT_SECRET_FILE))
    }
}

/// `~/.beacond`, or `.beacond` relative to the working directory when no home is known.
pub fn default_home() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(DEFAULT_HOME_DIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_HOME_DIR))
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "BEACOND_HOME",
        "BEACOND_ACCEPT_TOS",
        "BEACOND_JWT_SECRET",
        "BEACOND_TOS_URL",
    ];

    fn clear_env() {
        for key in VARS {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn from_env_defaults() {
        clear_env();
        let cfg = NodeConfig::from_env();
        assert_eq!(cfg, NodeConfig::default());
        assert!(cfg.home.ends_with(DEFAULT_HOME_DIR));
        assert!(!cfg.accept_tos);
        assert_eq!(cfg.tos_url, DEFAULT_TOS_URL);
    }

    #[test]
    #[serial]
    fn from_env_reads_all_vars() {
        clear_env();
        env::set_var("BEACOND_HOME", "/srv/beacond");
        env::set_var("BEACOND_ACCEPT_TOS", "TRUE");
        env::set_var("BEACOND_JWT_SECRET", "/etc/beacond/jwt.hex");
        env::set_var("BEACOND_TOS_URL", "https://example.com/tos");

        let cfg = NodeConfig::from_env();
        clear_env();

        assert_eq!(cfg.home, PathBuf::from("/srv/beacond"));
        assert!(cfg.accept_tos);
        assert_eq!(cfg.jwt_secret_path(), PathBuf::from("/etc/beacond/jwt.hex"));
        assert_eq!(cfg.tos_url, "https://example.com/tos");
    }

    #[test]
    #[serial]
    fn unrecognized_accept_value_does_not_accept() {
        clear_env();
        env::set_var("BEACOND_ACCEPT_TOS", "sure");
        let cfg = NodeConfig::from_env();
        clear_env();
        assert!(!cfg.accept_tos);
    }

    #[test]
    fn overrides_win_over_env() {
        let base = NodeConfig {
            home: PathBuf::from("/from/env"),
            accept_tos: true,
            jwt_secret: Some(PathBuf::from("/from/env/jwt.hex")),
            tos_url: DEFAULT_TOS_URL.to_string(),
        };

        let cfg = base
            .clone()
            .with_overrides(Some(PathBuf::from("/from/cli")), false, None);
        assert_eq!(cfg.home, PathBuf::from("/from/cli"));
        assert!(cfg.accept_tos, "flag absence must not revoke env acceptance");
        assert_eq!(cfg.jwt_secret, base.jwt_secret);
    }

    #[test]
    fn jwt_secret_defaults_into_home() {
        let cfg = NodeConfig::default().with_overrides(Some(PathBuf::from("/h")), false, None);
        assert_eq!(cfg.jwt_secret_path(), PathBuf::from("/h/jwt.hex"));
    }
}
