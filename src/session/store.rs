//! File-backed session persistence
//!
//! The store owns one JSON storage slot. Every mutation rewrites the full
//! state; `clear` removes the slot instead of writing an empty object. On
//! open, an existing parseable snapshot is restored, anything else yields
//! defaults.

use crate::error::{CoachError, Result};
use crate::model::Roadmap;
use crate::session::model::{SessionState, SessionStep, SessionUpdate};
use log::{debug, error};
use std::path::{Path, PathBuf};

/// File name of the storage slot under the application data directory.
pub const SESSION_FILE: &str = "session.json";

pub struct SessionStore {
    path: PathBuf,
    state: SessionState,
}

impl SessionStore {
    /// Open the store at the default location.
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    pub fn open(path: PathBuf) -> Self {
        let state = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(state) => {
                    debug!("Restored session from {}", path.display());
                    state
                }
                Err(e) => {
                    error!("Error loading session state: {}", e);
                    SessionState::default()
                }
            },
            Err(_) => SessionState::default(),
        };

        Self { path, state }
    }

    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("comeback-coach")
            .join(SESSION_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Merge a partial update and persist the result.
    pub fn update(&mut self, update: SessionUpdate) -> Result<()> {
        self.state.apply(update);
        self.persist()
    }

    /// Mark the session active at `step` and persist.
    pub fn start_session(&mut self, step: SessionStep) -> Result<()> {
        self.state.start(step);
        self.persist()
    }

    /// Replace the session with a fresh resume run and persist.
    pub fn set_resume(&mut self, resume_data: String, roadmap_weeks: u32) -> Result<()> {
        self.state.set_resume(resume_data, roadmap_weeks);
        self.persist()
    }

    /// Restore a session from a previously exported roadmap file (JSON),
    /// tagging where it came from and dropping the user into interview prep.
    pub fn restore_roadmap(&mut self, file: &Path) -> Result<()> {
        let content = std::fs::read_to_string(file)?;
        let mut roadmap: Roadmap = serde_json::from_str(&content).map_err(|e| {
            CoachError::InvalidInput(format!(
                "'{}' is not a saved roadmap export: {}",
                file.display(),
                e
            ))
        })?;
        roadmap.restored_from = Some(
            file.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| file.display().to_string()),
        );

        self.state.apply(SessionUpdate {
            has_active_session: Some(true),
            current_step: Some(SessionStep::Interview),
            roadmap_data: Some(roadmap),
            ..Default::default()
        });
        self.persist()
    }

    /// Reset to defaults and remove the storage slot.
    pub fn clear(&mut self) -> Result<()> {
        self.state = SessionState::default();
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// True when abandoning the session would lose wizard progress. Callers
    /// warn before discarding such a session.
    pub fn has_unfinished_work(&self) -> bool {
        self.state.has_active_session && self.state.current_step != SessionStep::Idle
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.state)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SessionStore {
        SessionStore::open(dir.path().join(SESSION_FILE))
    }

    #[test]
    fn test_open_missing_slot_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.state(), &SessionState::default());
    }

    #[test]
    fn test_update_persists_snapshot_equal_to_memory() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store
            .update(SessionUpdate {
                resume_data: Some("text".to_string()),
                ..Default::default()
            })
            .unwrap();
        store
            .update(SessionUpdate {
                roadmap_weeks: Some(4),
                ..Default::default()
            })
            .unwrap();

        // Both updates merged in memory
        assert_eq!(store.state().resume_data.as_deref(), Some("text"));
        assert_eq!(store.state().roadmap_weeks, Some(4));

        // And the snapshot on disk equals the in-memory state
        let reloaded = store_in(&dir);
        assert_eq!(reloaded.state(), store.state());
    }

    #[test]
    fn test_clear_removes_slot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SESSION_FILE);
        let mut store = SessionStore::open(path.clone());

        store.start_session(SessionStep::Analyzing).unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
        assert_eq!(store.state(), &SessionState::default());

        // Subsequent open yields defaults, not an empty object
        let reloaded = SessionStore::open(path);
        assert_eq!(reloaded.state(), &SessionState::default());
    }

    #[test]
    fn test_corrupt_slot_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SESSION_FILE);
        std::fs::write(&path, "{not json").unwrap();

        let store = SessionStore::open(path);
        assert_eq!(store.state(), &SessionState::default());
    }

    #[test]
    fn test_unfinished_work_guard() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert!(!store.has_unfinished_work());

        store.start_session(SessionStep::Roadmap).unwrap();
        assert!(store.has_unfinished_work());

        store
            .update(SessionUpdate {
                current_step: Some(SessionStep::Idle),
                ..Default::default()
            })
            .unwrap();
        assert!(!store.has_unfinished_work());
    }
}
