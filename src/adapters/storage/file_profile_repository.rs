//! File-based Profile Repository
//!
//! Stores one YAML file per player under a base directory, named after the
//! player's id with unsafe characters percent-encoded.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::PlayerProfile;
use crate::ports::ProfileRepository;

/// File-based storage for player profiles
#[derive(Debug, Clone)]
pub struct FileProfileRepository {
    base_path: PathBuf,
}

impl FileProfileRepository {
    /// Create a repository rooted at `base_path`; the directory is created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let profiles = FileProfileRepository::new("./data/profiles");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn profile_path(&self, user_id: &UserId) -> PathBuf {
        self.base_path.join(format!("{}.yaml", file_stem(user_id)))
    }

    async fn read_profile(path: &Path) -> Result<Option<PlayerProfile>, DomainError> {
        let yaml = match fs::read_to_string(path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(path, e)),
        };

        serde_yaml::from_str(&yaml).map(Some).map_err(|e| {
            DomainError::database(format!("Failed to parse profile: {}", e))
                .with_detail("path", path.display().to_string())
        })
    }
}

#[async_trait]
impl ProfileRepository for FileProfileRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<PlayerProfile>, DomainError> {
        Self::read_profile(&self.profile_path(user_id)).await
    }

    async fn upsert(&self, profile: &PlayerProfile) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| io_error(&self.base_path, e))?;

        let yaml = serde_yaml::to_string(profile)
            .map_err(|e| DomainError::database(format!("Failed to serialize profile: {}", e)))?;

        // Write atomically through a temporary file
        let path = self.profile_path(&profile.user_id);
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, yaml)
            .await
            .map_err(|e| io_error(&temp_path, e))?;
        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| io_error(&path, e))?;

        tracing::debug!(user_id = %profile.user_id, path = %path.display(), "Profile written");
        Ok(())
    }

    async fn list_others(
        &self,
        exclude: &UserId,
        only_complete: bool,
    ) -> Result<Vec<PlayerProfile>, DomainError> {
        let mut entries = match fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(&self.base_path, e)),
        };

        let mut profiles = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| io_error(&self.base_path, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("yaml") {
                continue;
            }
            let profile = match Self::read_profile(&path).await {
                Ok(Some(profile)) => profile,
                Ok(None) => continue,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "Skipping unreadable profile");
                    continue;
                }
            };
            if &profile.user_id != exclude && (!only_complete || profile.complete) {
                profiles.push(profile);
            }
        }

        // Directory order is platform dependent
        profiles.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(profiles)
    }
}

fn file_stem(user_id: &UserId) -> String {
    user_id
        .as_str()
        .bytes()
        .map(|b| match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' => (b as char).to_string(),
            other => format!("%{:02X}", other),
        })
        .collect()
}

fn io_error(path: &Path, err: std::io::Error) -> DomainError {
    DomainError::database(format!("IO error: {}", err)).with_detail("path", path.display().to_string())
}
