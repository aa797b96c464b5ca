//! Snapshot storage backends.

use std::fs;
use std::path::{Path, PathBuf};

use super::snapshot::Snapshot;
use crate::core::EngineResult;

/// Where the session keeps its save.
pub trait SnapshotStore {
    /// Overwrite the save.
    fn save(&mut self, snapshot: &Snapshot) -> EngineResult<()>;

    /// The current save, if any.
    fn load(&self) -> EngineResult<Option<Snapshot>>;

    /// Delete the save.
    fn clear(&mut self) -> EngineResult<()>;
}

/// In-memory store, mostly for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    snapshot: Option<Snapshot>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with a save.
    #[must_use]
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            saves: 0,
        }
    }

    /// Number of successful `save` calls.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, snapshot: &Snapshot) -> EngineResult<()> {
        self.snapshot = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }

    fn load(&self) -> EngineResult<Option<Snapshot>> {
        Ok(self.snapshot.clone())
    }

    fn clear(&mut self) -> EngineResult<()> {
        self.snapshot = None;
        Ok(())
    }
}

/// JSON save file on disk.
///
/// Writes go to a sibling temp file that is then renamed over the save,
/// so a crash mid-write leaves the previous save intact.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, snapshot: &Snapshot) -> EngineResult<()> {
        let tmp = self.temp_path();
        fs::write(&tmp, snapshot.to_json()?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn load(&self) -> EngineResult<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(Some(Snapshot::from_json(&text)?))
    }

    fn clear(&mut self) -> EngineResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
