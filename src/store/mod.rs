// src/store/mod.rs
// Favorites store: durable collection of favorite catalog items

mod types;

pub use types::{Favorite, FavoritesFile, ItemType};

use crate::config::DuplicatePolicy;
use crate::error::{HolocronError, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

/// Durable favorites collection.
///
/// The in-memory vector is authoritative; every mutation writes the next
/// state to disk (temp file + rename) and only then commits it to memory,
/// so a failed flush leaves both the file and the memory image at the last
/// durable state. The write lock covers the whole read-modify-flush region;
/// reads clone a snapshot under the read lock.
pub struct FavoritesStore {
    path: PathBuf,
    on_duplicate: DuplicatePolicy,
    match_labels: bool,
    entries: RwLock<Vec<Favorite>>,
}

impl FavoritesStore {
    /// Open the store at `path`, creating parent directories as needed.
    ///
    /// A missing file yields an empty collection. A corrupt file also
    /// yields an empty collection, with the original preserved next to it
    /// as `<path>.corrupt` for inspection.
    pub fn open(path: &Path, on_duplicate: DuplicatePolicy, match_labels: bool) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HolocronError::Persistence(format!(
                    "failed to create {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let entries = Self::load(path)?;
        debug!(path = %path.display(), count = entries.len(), "Opened favorites store");

        Ok(Self {
            path: path.to_path_buf(),
            on_duplicate,
            match_labels,
            entries: RwLock::new(entries),
        })
    }

    fn load(path: &Path) -> Result<Vec<Favorite>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(HolocronError::Persistence(format!(
                    "failed to read {}: {e}",
                    path.display()
                )));
            }
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<FavoritesFile>(&contents) {
            Ok(file) => Ok(file.favorites),
            Err(e) => {
                let quarantine = path.with_extension("json.corrupt");
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Favorites file is corrupt; starting empty (original kept as {})",
                    quarantine.display()
                );
                if let Err(e) = std::fs::rename(path, &quarantine) {
                    warn!(error = %e, "Failed to preserve corrupt favorites file");
                }
                Ok(Vec::new())
            }
        }
    }

    /// Flush a collection state to disk atomically (temp file + rename).
    fn persist(&self, entries: &[Favorite]) -> Result<()> {
        let file = FavoritesFile {
            favorites: entries.to_vec(),
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| HolocronError::Persistence(format!("failed to encode favorites: {e}")))?;

        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, json).map_err(|e| {
            HolocronError::Persistence(format!("failed to write {}: {e}", temp_path.display()))
        })?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| {
            HolocronError::Persistence(format!("failed to replace {}: {e}", self.path.display()))
        })?;
        Ok(())
    }

    fn validate_identity(item_id: u32) -> Result<()> {
        if item_id == 0 {
            return Err(HolocronError::Validation(
                "item_id must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Add a favorite. Duplicate identities are rejected, or update the
    /// existing entry's notes when the store was opened with the `update`
    /// duplicate policy.
    pub async fn add(&self, item_type: ItemType, item_id: u32, notes: String) -> Result<Favorite> {
        Self::validate_identity(item_id)?;

        let mut entries = self.entries.write().await;

        if let Some(pos) = position_of(&entries, item_type, item_id) {
            match self.on_duplicate {
                DuplicatePolicy::Reject => {
                    return Err(HolocronError::DuplicateEntry(format!(
                        "{item_type} {item_id} is already in favorites"
                    )));
                }
                DuplicatePolicy::Update => {
                    let mut next = entries.clone();
                    next[pos].notes = notes;
                    let updated = next[pos].clone();
                    self.persist(&next)?;
                    *entries = next;
                    return Ok(updated);
                }
            }
        }

        let favorite = Favorite {
            item_type,
            item_id,
            notes,
            added_at: Utc::now(),
        };

        let mut next = entries.clone();
        next.push(favorite.clone());
        self.persist(&next)?;
        *entries = next;

        Ok(favorite)
    }

    /// List favorites in insertion order, optionally filtered by type.
    pub async fn list(&self, item_type: Option<ItemType>) -> Vec<Favorite> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .filter(|f| item_type.is_none_or(|t| f.item_type == t))
            .cloned()
            .collect()
    }

    /// Remove a favorite by identity. Removing an absent entry reports
    /// not-found rather than succeeding silently.
    pub async fn remove(&self, item_type: ItemType, item_id: u32) -> Result<()> {
        Self::validate_identity(item_id)?;

        let mut entries = self.entries.write().await;
        let pos = position_of(&entries, item_type, item_id).ok_or_else(|| {
            HolocronError::NotFound(format!("{item_type} {item_id} is not in favorites"))
        })?;

        let mut next = entries.clone();
        next.remove(pos);
        self.persist(&next)?;
        *entries = next;

        Ok(())
    }

    /// Replace the notes of an existing favorite. Identity and `added_at`
    /// are immutable.
    pub async fn update_notes(
        &self,
        item_type: ItemType,
        item_id: u32,
        notes: String,
    ) -> Result<Favorite> {
        Self::validate_identity(item_id)?;

        let mut entries = self.entries.write().await;
        let pos = position_of(&entries, item_type, item_id).ok_or_else(|| {
            HolocronError::NotFound(format!("{item_type} {item_id} is not in favorites"))
        })?;

        let mut next = entries.clone();
        next[pos].notes = notes;
        let updated = next[pos].clone();
        self.persist(&next)?;
        *entries = next;

        Ok(updated)
    }

    /// Case-insensitive substring search over notes (and, when configured,
    /// over the synthesized "{type} {id}" label). A blank query matches
    /// nothing; otherwise the query is matched verbatim, whitespace
    /// included.
    pub async fn search(&self, query: &str) -> Vec<Favorite> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        let entries = self.entries.read().await;
        entries
            .iter()
            .filter(|f| {
                f.notes.to_lowercase().contains(&needle)
                    || (self.match_labels && f.label().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Number of stored favorites.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Path of the underlying favorites file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn position_of(entries: &[Favorite], item_type: ItemType, item_id: u32) -> Option<usize> {
    entries
        .iter()
        .position(|f| f.item_type == item_type && f.item_id == item_id)
}
