//! Per-guild report channel configuration.
//!
//! At most one reports channel per guild, last write wins. The mapping is
//! loaded once at startup and the file is rewritten in full on every
//! mutation; the in-memory map only changes after the file write lands, so
//! durable and in-memory state never diverge.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::storage::StorageError;

/// Default location of the persisted channel configuration.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// On-disk shape of the configuration file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredConfig {
    report_channels: HashMap<u64, u64>,
}

/// Maps guild IDs to their configured reports channel.
pub struct ReportChannelStore {
    path: PathBuf,
    channels: RwLock<HashMap<u64, u64>>,
}

impl ReportChannelStore {
    /// Loads the store from disk. A missing file starts an empty mapping.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let channels = match fs::read_to_string(&path) {
            Ok(contents) => {
                let stored: StoredConfig =
                    serde_json::from_str(&contents).map_err(|source| StorageError::Format {
                        path: path.clone(),
                        source,
                    })?;
                stored.report_channels
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        Ok(Self {
            path,
            channels: RwLock::new(channels),
        })
    }

    /// The configured reports channel for a guild, if any.
    pub async fn get(&self, guild_id: u64) -> Option<u64> {
        self.channels.read().await.get(&guild_id).copied()
    }

    /// Associates a guild with a reports channel and persists the change.
    ///
    /// The write lock serializes concurrent mutations. The in-memory map is
    /// only updated once the file rewrite succeeds, so a failed write leaves
    /// the previous configuration in effect.
    pub async fn set(&self, guild_id: u64, channel_id: u64) -> Result<(), StorageError> {
        let mut channels = self.channels.write().await;

        let mut updated = channels.clone();
        updated.insert(guild_id, channel_id);
        persist(&self.path, updated.clone())?;

        *channels = updated;
        Ok(())
    }
}

/// Writes the full configuration to a temp file, then renames it over the
/// target so readers never observe a partial write.
fn persist(path: &Path, channels: HashMap<u64, u64>) -> Result<(), StorageError> {
    let stored = StoredConfig {
        report_channels: channels,
    };
    let contents =
        serde_json::to_string_pretty(&stored).map_err(|source| StorageError::Format {
            path: path.to_path_buf(),
            source,
        })?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents).map_err(|source| StorageError::Io {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
