//! On-disk cache of the signed-in session.
//!
//! Two slots, picked by "remember me" at sign-in:
//! - `durable.json` lives until sign-out
//! - `session-<key>.json` is keyed by the parent process (the invoking shell),
//!   so a new terminal session starts signed out
//!
//! Files are written with the temp-file, fsync, rename pattern so a crash
//! mid-write never leaves a torn token file behind.

use crate::error::{ClientError, Result as ClientResult};

use ra_core::{AuthSession, StorageScope};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;
const DURABLE_FILE: &str = "durable.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    session: AuthSession,
    saved_at: DateTime<Utc>,
    schema_version: u32,
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
    session_key: String,
}

impl SessionStore {
    /// Store rooted at `dir`, with the session-scoped slot keyed by the parent
    /// process id.
    pub fn new(dir: PathBuf) -> Self {
        Self::with_session_key(dir, Self::terminal_session_key())
    }

    pub fn with_session_key(dir: PathBuf, session_key: impl Into<String>) -> Self {
        Self {
            dir,
            session_key: session_key.into(),
        }
    }

    #[cfg(unix)]
    fn terminal_session_key() -> String {
        std::os::unix::process::parent_id().to_string()
    }

    #[cfg(not(unix))]
    fn terminal_session_key() -> String {
        std::process::id().to_string()
    }

    pub fn path(&self, scope: StorageScope) -> PathBuf {
        match scope {
            StorageScope::Durable => self.dir.join(DURABLE_FILE),
            StorageScope::SessionScoped => {
                self.dir.join(format!("session-{}.json", self.session_key))
            }
        }
    }

    /// Save `session` in `scope`, replacing whatever the other slot held.
    pub fn save(&self, scope: StorageScope, session: &AuthSession) -> ClientResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| ClientError::io(self.dir.clone(), e))?;

        let final_path = self.path(scope);
        let temp_path = final_path.with_extension(format!("json.tmp.{}", std::process::id()));

        let stored = StoredSession {
            session: session.clone(),
            saved_at: Utc::now(),
            schema_version: SCHEMA_VERSION,
        };
        let json = serde_json::to_string_pretty(&stored)?;

        {
            let mut file = Self::create_private(&temp_path)?;

            file.write_all(json.as_bytes())
                .map_err(|e| ClientError::io(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| ClientError::io(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ClientError::io(final_path.clone(), e)
        })?;

        // One caller, one slot
        let other = match scope {
            StorageScope::Durable => StorageScope::SessionScoped,
            StorageScope::SessionScoped => StorageScope::Durable,
        };
        Self::remove_if_exists(&self.path(other))?;

        info!("Saved {} session to {}", scope.as_str(), final_path.display());
        Ok(())
    }

    /// Load the cached session, session-scoped slot first.
    ///
    /// A corrupted file is removed with a warning and treated as absent.
    pub fn load(&self) -> ClientResult<Option<(StorageScope, AuthSession)>> {
        for scope in [StorageScope::SessionScoped, StorageScope::Durable] {
            let path = self.path(scope);
            if !path.exists() {
                continue;
            }

            let contents = fs::read_to_string(&path).map_err(|e| ClientError::io(path.clone(), e))?;

            match serde_json::from_str::<StoredSession>(&contents) {
                Ok(stored) => {
                    debug!(
                        "Loaded {} session saved at {} (schema v{})",
                        scope.as_str(),
                        stored.saved_at,
                        stored.schema_version
                    );
                    return Ok(Some((scope, stored.session)));
                }
                Err(e) => {
                    warn!("Session file corrupted at {}: {e}", path.display());
                    Self::remove_if_exists(&path)?;
                }
            }
        }

        Ok(None)
    }

    /// Forget both slots
    pub fn clear(&self) -> ClientResult<()> {
        Self::remove_if_exists(&self.path(StorageScope::SessionScoped))?;
        Self::remove_if_exists(&self.path(StorageScope::Durable))?;
        Ok(())
    }

    fn remove_if_exists(path: &Path) -> ClientResult<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::io(path.to_path_buf(), e)),
        }
    }

    #[cfg(unix)]
    fn create_private(path: &Path) -> ClientResult<fs::File> {
        use std::os::unix::fs::OpenOptionsExt;

        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)
            .map_err(|e| ClientError::io(path.to_path_buf(), e))
    }

    #[cfg(not(unix))]
    fn create_private(path: &Path) -> ClientResult<fs::File> {
        fs::File::create(path).map_err(|e| ClientError::io(path.to_path_buf(), e))
    }
}
