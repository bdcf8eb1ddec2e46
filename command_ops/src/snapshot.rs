//! Point-in-time copy of settings and key mappings

use key_map::{KeyMap, KeyRemapMode, RemapEntry};
use serde::{Deserialize, Serialize};
use settings_registry::{Setting, SettingsStore};

/// Settings and mappings as seen through the command seams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub settings: Vec<Setting>,
    /// Every rule, in mode order then insertion order
    pub mappings: Vec<RemapEntry>,
}

impl SessionSnapshot {
    pub fn capture(settings: &dyn SettingsStore, key_map: &dyn KeyMap) -> Self {
        Self {
            settings: settings.all_settings(),
            mappings: KeyRemapMode::ALL
                .iter()
                .flat_map(|&mode| key_map.get_key_mappings_for_mode(mode))
                .collect(),
        }
    }

    /// Compute a deterministic hash of the snapshot state
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        for setting in &self.settings {
            hasher.update(setting.name().as_bytes());
            hasher.update(b"\0");
            hasher.update([setting.kind() as u8, setting.is_read_only() as u8]);
            hasher.update(setting.default_value().to_string().as_bytes());
            hasher.update(b"\0");
            hasher.update(setting.current_value().to_string().as_bytes());
            hasher.update(b"\n");
        }

        for entry in &self.mappings {
            hasher.update([entry.mode() as u8, entry.allow_remap() as u8]);
            hasher.update(entry.from_keys().to_string().as_bytes());
            hasher.update(b"\0");
            hasher.update(entry.to_keys().to_string().as_bytes());
            hasher.update(b"\n");
        }

        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }
}
