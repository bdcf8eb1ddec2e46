//! Key remapping rules

use crate::KeyRemapMode;
use key_input::KeyInputSet;
use serde::{Deserialize, Serialize};

/// One `:map`-style rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemapEntry {
    mode: KeyRemapMode,
    from_keys: KeyInputSet,
    to_keys: KeyInputSet,
    allow_remap: bool,
}

impl RemapEntry {
    pub fn new(
        mode: KeyRemapMode,
        from_keys: KeyInputSet,
        to_keys: KeyInputSet,
        allow_remap: bool,
    ) -> Self {
        Self {
            mode,
            from_keys,
            to_keys,
            allow_remap,
        }
    }

    pub fn mode(&self) -> KeyRemapMode {
        self.mode
    }

    pub fn from_keys(&self) -> &KeyInputSet {
        &self.from_keys
    }

    pub fn to_keys(&self) -> &KeyInputSet {
        &self.to_keys
    }

    /// True for `:map` rules, false for `:noremap` rules
    pub fn allow_remap(&self) -> bool {
        self.allow_remap
    }
}
