//! Snapshot persistence with a checksummed binary format.
//!
//! The arena core is an in-memory library; this is the host-facing utility
//! layer that writes its snapshot to the platform save directory.

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::combat::arena::ArenaSave;
use crate::core::constants::SAVE_VERSION_MAGIC;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("malformed snapshot: {0}")]
    Decoding(#[from] serde_json::Error),

    #[error("invalid save version: expected {expected:#018x}, got {found:#018x}")]
    VersionMismatch { expected: u64, found: u64 },

    #[error("checksum verification failed")]
    ChecksumMismatch,

    #[error("snapshot violates arena invariants: {0}")]
    InvalidSnapshot(String),

    #[error("could not determine the platform save directory")]
    NoSaveDirectory,
}

/// Saves and loads arena snapshots with checksum verification.
///
/// File format: version magic (8 bytes), data length (4 bytes), bincode
/// payload, SHA-256 checksum (32 bytes) over everything before it.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Sets up the save file in the platform config directory.
    pub fn new() -> Result<Self, SaveError> {
        let project_dirs =
            ProjectDirs::from("", "", "isekai").ok_or(SaveError::NoSaveDirectory)?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            save_path: config_dir.join("save.dat"),
        })
    }

    /// Uses an explicit save file path instead of the platform directory.
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn save_path(&self) -> &PathBuf {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn save(&self, snapshot: &ArenaSave) -> Result<(), SaveError> {
        let data = bincode::serialize(snapshot)?;
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;
        Ok(())
    }

    pub fn load(&self) -> Result<ArenaSave, SaveError> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            return Err(SaveError::VersionMismatch {
                expected: SAVE_VERSION_MAGIC,
                found: version,
            });
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        if stored_checksum != hasher.finalize().as_slice() {
            return Err(SaveError::ChecksumMismatch);
        }

        let snapshot: ArenaSave = bincode::deserialize(&data)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
