//! Favorites persistence.
//!
//! The favorites set is stored as a JSON array of record identifiers under
//! a single file in the platform data directory. Loading fails soft - a
//! missing or unreadable file is the expected first-run state - while saves
//! report [`PersistenceError`] so the GUI can surface them. Writes go
//! through a temp file and rename so a crash mid-write cannot corrupt the
//! stored set.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

/// Errors from writing the favorites file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PersistenceError {
    /// The underlying medium rejected the write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The favorites set could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed store for the favorites set.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    /// A store backed by a specific file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store in the platform data directory.
    pub fn from_project_dirs() -> Self {
        let path = directories::ProjectDirs::from("com", "PokedexDesktop", "Pokedex")
            .map(|dirs| dirs.data_dir().join("favorites.json"))
            .unwrap_or_else(|| PathBuf::from("favorites.json"));
        Self::at(path)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted set.
    ///
    /// Absence or corruption of the file yields an empty set, never an
    /// error; corruption is logged.
    pub fn load(&self) -> BTreeSet<u32> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return BTreeSet::new(),
        };

        match serde_json::from_str::<Vec<u32>>(&content) {
            Ok(ids) => ids.into_iter().collect(),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "Ignoring corrupt favorites file");
                BTreeSet::new()
            }
        }
    }

    /// Write the full set to disk, atomically.
    pub fn save(&self, favorites: &BTreeSet<u32>) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let ids: Vec<u32> = favorites.iter().copied().collect();
        let content = serde_json::to_string(&ids)?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
