//! Sync configuration types
//!
//! `SyncConfig` mirrors the JSON document handed to the binary. Keys are
//! PascalCase in the file; every field defaults so a minimal document
//! parses and validation decides what is actually required.

use serde::{Deserialize, Serialize};

/// Parsed sync configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SyncConfig {
    /// Host folders exposed inside the container
    pub folders: Vec<String>,

    /// Host directory holding the sync state
    pub storage: String,

    /// Static IP to assign inside `network`
    pub ip: Option<String>,

    /// Docker network to attach to
    pub network: Option<String>,

    /// User id handed to the image as USERID
    pub uid: i64,

    /// Group id handed to the image as GROUPID
    pub gid: i64,
}

impl SyncConfig {
    /// IP value with empty strings treated as unset
    pub(crate) fn ip_value(&self) -> Option<&str> {
        self.ip.as_deref().filter(|s| !s.is_empty())
    }

    /// Network value with empty strings treated as unset
    pub(crate) fn network_value(&self) -> Option<&str> {
        self.network.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case_keys() {
        let json = r#"{
            "Folders": ["/data/a"],
            "Storage": "/cfg",
            "Ip": "172.18.0.10",
            "Network": "syncnet",
            "Uid": 1000,
            "Gid": 1000
        }"#;

        let config: SyncConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.folders, vec!["/data/a"]);
        assert_eq!(config.storage, "/cfg");
        assert_eq!(config.ip_value(), Some("172.18.0.10"));
        assert_eq!(config.network_value(), Some("syncnet"));
    }

    #[test]
    fn test_empty_strings_count_as_unset() {
        let config = SyncConfig {
            ip: Some(String::new()),
            network: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(config.ip_value(), None);
        assert_eq!(config.network_value(), None);
    }
}
