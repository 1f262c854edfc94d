//! Bind mount derivation
//!
//! Pure transform from the folder list to bind mounts. Each folder lands
//! under the folder root keyed by its basename; the storage mount is
//! always appended last.

use crate::config::{MountSettings, SyncConfig};

/// Host-to-container bind mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindMount {
    /// Host source path
    pub source: String,
    /// Container target path
    pub target: String,
}

/// Derive the bind mounts for a validated configuration
pub fn derive_mounts(config: &SyncConfig, settings: &MountSettings) -> Vec<BindMount> {
    let folder_root = settings.folder_root.trim_end_matches('/');

    let mut mounts: Vec<BindMount> = config
        .folders
        .iter()
        .map(|folder| {
            let basename = folder.rsplit('/').next().unwrap_or(folder);
            BindMount {
                source: folder.clone(),
                target: format!("{folder_root}/{basename}"),
            }
        })
        .collect();

    mounts.push(BindMount {
        source: config.storage.clone(),
        target: settings.storage_target.clone(),
    });

    mounts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_extraction() {
        let config = SyncConfig {
            folders: vec!["/data/nested/photos".to_string()],
            storage: "/cfg".to_string(),
            ..Default::default()
        };

        let mounts = derive_mounts(&config, &MountSettings::default());
        assert_eq!(mounts[0].source, "/data/nested/photos");
        assert_eq!(mounts[0].target, "/mnt/folders/photos");
    }

    #[test]
    fn test_storage_mount_always_present() {
        let config = SyncConfig {
            storage: "/cfg".to_string(),
            ..Default::default()
        };

        let mounts = derive_mounts(&config, &MountSettings::default());
        assert_eq!(
            mounts,
            vec![BindMount {
                source: "/cfg".to_string(),
                target: "/mnt/config".to_string(),
            }]
        );
    }

    #[test]
    fn test_trailing_slash_on_folder_root() {
        let config = SyncConfig {
            folders: vec!["/data/a".to_string()],
            storage: "/cfg".to_string(),
            ..Default::default()
        };
        let settings = MountSettings {
            folder_root: "/mnt/folders/".to_string(),
            ..Default::default()
        };

        let mounts = derive_mounts(&config, &settings);
        assert_eq!(mounts[0].target, "/mnt/folders/a");
    }
}
