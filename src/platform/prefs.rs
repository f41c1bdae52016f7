// logwindow - platform/prefs.rs
//
// Persistent key-value preference store. The dashboard keeps exactly one
// preference here today (the timezone display toggle), but the store is a
// generic get/set-with-ttl interface so the storage medium stays
// swappable.
//
// Design principles:
// - The file is saved atomically (write→temp, rename→final) so a crash
//   during save never corrupts the previous good state.
// - Load errors are silently discarded: a corrupt or incompatible file
//   just means starting with no stored preferences.
// - Expired entries behave exactly like absent ones.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::util::error::PreferenceError;

/// Persists display preferences across dashboard sessions.
///
/// `get` returns `None` for missing AND expired keys. `set` stores a value
/// with a time-to-live after which it lapses.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str, ttl: Duration) -> Result<(), PreferenceError>;
}

// A borrowed store is a store; lets one store outlive several sessions.
impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str, ttl: Duration) -> Result<(), PreferenceError> {
        (**self).set(key, value, ttl)
    }
}

// =============================================================================
// On-disk store
// =============================================================================

/// A single stored value with its expiry instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredPreference {
    value: String,
    expires_at: DateTime<Utc>,
}

/// File-backed preference store (JSON map, atomic writes).
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    entries: HashMap<String, StoredPreference>,
}

impl FilePreferenceStore {
    /// Open the store at `path`, loading whatever valid state exists.
    ///
    /// A missing or malformed file starts the store empty rather than
    /// surfacing an error; preferences are never load-bearing.
    pub fn open(path: &Path) -> Self {
        let entries = Self::load_entries(path).unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    fn load_entries(path: &Path) -> Option<HashMap<String, StoredPreference>> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| {
                // File-not-found is the normal first run.
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::debug!(path = %path.display(), error = %e, "Cannot read preference file");
                }
            })
            .ok()?;

        serde_json::from_str(&content)
            .map_err(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Preference file is malformed — starting fresh"
                );
            })
            .ok()
    }

    /// Save the current map atomically (write temp → rename).
    fn save(&self) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PreferenceError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|source| PreferenceError::Serialise { source })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json.as_bytes()).map_err(|source| PreferenceError::Io {
            path: tmp.clone(),
            source,
        })?;

        std::fs::rename(&tmp, &self.path).map_err(|source| {
            let _ = std::fs::remove_file(&tmp);
            PreferenceError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::debug!(path = %self.path.display(), "Preferences saved");
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        let entry = self.entries.get(key)?;
        if entry.expires_at <= Utc::now() {
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&mut self, key: &str, value: &str, ttl: Duration) -> Result<(), PreferenceError> {
        self.entries.insert(
            key.to_string(),
            StoredPreference {
                value: value.to_string(),
                expires_at: Utc::now() + ttl,
            },
        );
        self.save()
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Preference store with no persistence. Useful for tests and for
/// embedders that manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, StoredPreference>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        let entry = self.entries.get(key)?;
        if entry.expires_at <= Utc::now() {
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&mut self, key: &str, value: &str, ttl: Duration) -> Result<(), PreferenceError> {
        self.entries.insert(
            key.to_string(),
            StoredPreference {
                value: value.to_string(),
                expires_at: Utc::now() + ttl,
            },
        );
        Ok(())
    }
}

// =============================================================================
// Unit tests
// =============================================================================
