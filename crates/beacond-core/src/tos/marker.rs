//! Persisted record of terms acceptance.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{TosError, TosResult};

/// Marker file name inside the home directory.
pub const ACCEPT_TOS_FILENAME: &str = "tosaccepted";

/// `<home>/tosaccepted`. Its existence is the only signal; content is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TosMarker {
    path: PathBuf,
}

impl TosMarker {
    pub fn new(home: impl AsRef<Path>) -> Self {
        Self {
            path: home.as_ref().join(ACCEPT_TOS_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> TosResult<bool> {
        self.path.try_exists().map_err(|source| TosError::MarkerRead {
            path: self.path.clone(),
            source,
        })
    }

    /// Create the marker (and the home directory if needed).
    pub fn write(&self) -> TosResult<()> {
        let write_err = |source| TosError::MarkerWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(home) = self.path.parent() {
            fs::create_dir_all(home).map_err(write_err)?;
        }
        fs::write(&self.path, b"").map_err(write_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(write_err)?;
        }

        debug!(path = %self.path.display(), "wrote terms acceptance marker");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn marker_lives_in_home() {
        let marker = TosMarker::new("/var/lib/beacond");
        assert_eq!(marker.path(), Path::new("/var/lib/beacond/tosaccepted"));
    }

    #[test]
    fn write_creates_home_and_marker() {
        let tmp = TempDir::new().unwrap();
        let home = tmp.path().join("fresh-home");
        let marker = TosMarker::new(&home);

        assert!(!marker.exists().unwrap());
        marker.write().unwrap();
        assert!(marker.exists().unwrap());
        assert!(home.join(ACCEPT_TOS_FILENAME).is_file());
    }

    #[test]
    fn write_is_repeatable() {
        let tmp = TempDir::new().unwrap();
        let marker = TosMarker::new(tmp.path());
        marker.write().unwrap();
        marker.write().unwrap();
        assert!(marker.exists().unwrap());
    }

    #[test]
    fn existing_content_still_counts() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(ACCEPT_TOS_FILENAME), "anything").unwrap();
        assert!(TosMarker::new(tmp.path()).exists().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn write_failure_is_reported() {
        let tmp = TempDir::new().unwrap();
        // Dangling link: reads as absent, but the write target's directory is missing.
        std::os::unix::fs::symlink(
            tmp.path().join("missing-dir").join("target"),
            tmp.path().join(ACCEPT_TOS_FILENAME),
        )
        .unwrap();

        let marker = TosMarker::new(tmp.path());
        assert!(!marker.exists().unwrap());
        let err = marker.write().unwrap_err();
        assert!(matches!(err, TosError::MarkerWrite { .. }));
    }
}
