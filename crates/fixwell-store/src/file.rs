//! Filesystem-backed session store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use fixwell_core::error::{Error, InvalidInputError, TransportError};
use fixwell_core::{Result, Session, SessionStore};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// File name of the single persisted session record.
const SESSION_FILE: &str = "session.json";

fn map_io(err: std::io::Error) -> Error {
    Error::Transport(TransportError::Io {
        message: err.to_string(),
    })
}

/// Session persistence backed by one JSON file in an injected directory.
///
/// Saves are atomic: the record is serialized as a unit, written to a
/// temp file in the same directory, then renamed into place, so a crash
/// mid-write never leaves a half-written session behind. A record that
/// fails to parse on load is treated as "not authenticated", not as an
/// error.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the persisted session record.
    pub fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn temp_path(&self) -> PathBuf {
        self.session_path().with_extension("tmp")
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(map_io)?;

        let json = serde_json::to_string_pretty(session).map_err(|e| {
            Error::InvalidInput(InvalidInputError::Other {
                message: e.to_string(),
            })
        })?;

        let path = self.session_path();
        let temp_path = self.temp_path();

        fs::write(&temp_path, &json).map_err(map_io)?;

        // Restrictive permissions before the record becomes visible (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&temp_path).map_err(map_io)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&temp_path, perms).map_err(map_io)?;
        }

        fs::rename(&temp_path, &path).map_err(map_io)?;

        debug!(path = %path.display(), "session saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>> {
        let path = self.session_path();

        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).map_err(map_io)?;

        match serde_json::from_str::<Session>(&json) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                let err = Error::CorruptSession(err.to_string());
                warn!(%err, path = %path.display(), "treating stored session as signed out");
                Ok(None)
            }
        }
    }

    fn clear(&self) -> Result<()> {
        // Sweep partial-write leftovers along with the record itself.
        let temp_path = self.temp_path();
        if temp_path.exists() {
            fs::remove_file(&temp_path).map_err(map_io)?;
        }

        let path = self.session_path();
        if path.exists() {
            fs::remove_file(&path).map_err(map_io)?;
            debug!(path = %path.display(), "session cleared");
        }

        Ok(())
    }
}
