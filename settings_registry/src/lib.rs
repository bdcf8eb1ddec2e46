#![no_std]

//! # Settings Registry
//!
//! A typed registry of editor options for the `:set` family of commands.
//!
//! ## Philosophy
//!
//! - **Typed settings**: Every option is a toggle, a number or a string, fixed for life
//! - **Exact names**: Lookup is by canonical name or short alias, case-sensitive, no prefixes
//! - **Validated writes**: A write that does not fit the option is refused, never coerced
//! - **Deterministic**: Enumeration follows registration order
//! - **In-memory**: Nothing is loaded from or saved to disk
//!
//! ## Example
//!
//! ```ignore
//! use settings_registry::{SettingsRegistry, SettingsStore, Setting, SettingValue};
//!
//! let mut registry = SettingsRegistry::new();
//! registry.register(Setting::with_default("tabstop", "ts", SettingValue::Number(8)))?;
//!
//! assert!(registry.try_set_value_from_string("ts", "4"));
//! assert!(!registry.try_set_value("ts", SettingValue::Toggle(true)));
//! ```

extern crate alloc;

pub mod defaults;
pub mod layered;
pub mod parse;
pub mod setting;

pub use layered::LayeredSettings;
pub use setting::{Setting, SettingKind, SettingValue};

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Errors raised while building a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Default or current value is not of the declared kind
    KindMismatch { name: String, kind: SettingKind },
    /// A setting with this canonical name already exists
    DuplicateName(String),
    /// The name or alias is already taken by another setting
    NameCollision(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::KindMismatch { name, kind } => {
                write!(f, "Setting {} does not hold a {} value", name, kind)
            }
            SettingsError::DuplicateName(name) => {
                write!(f, "Setting {} is already registered", name)
            }
            SettingsError::NameCollision(name) => {
                write!(f, "Name {} is already used by another setting", name)
            }
        }
    }
}

/// Read/write access to a set of settings
///
/// This is the seam the command layer talks to. Implemented by
/// [`SettingsRegistry`] and [`LayeredSettings`].
pub trait SettingsStore {
    /// Looks up a setting by canonical name or alias
    fn get_setting(&self, name: &str) -> Option<Setting>;

    /// Replaces the current value
    ///
    /// Returns false without mutating when the setting is absent, read-only,
    /// or `value` is not of the setting's kind.
    fn try_set_value(&mut self, name: &str, value: SettingValue) -> bool;

    /// Parses `text` according to the setting's kind, then sets it
    fn try_set_value_from_string(&mut self, name: &str, text: &str) -> bool {
        let Some(setting) = self.get_setting(name) else {
            log::debug!("set from string: unknown setting {}", name);
            return false;
        };
        match parse::parse_value(setting.kind(), text) {
            Some(value) => self.try_set_value(name, value),
            None => {
                log::debug!(
                    "set from string: {:?} is not a {} value for {}",
                    text,
                    setting.kind(),
                    setting.name()
                );
                false
            }
        }
    }

    /// Snapshot of every setting in registration order
    fn all_settings(&self) -> Vec<Setting>;
}

/// Settings registry
pub struct SettingsRegistry {
    /// Settings in registration order
    settings: Vec<Setting>,
    /// Canonical names and aliases to slot index
    index: BTreeMap<String, usize>,
}

impl SettingsRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            settings: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Registers a setting
    pub fn register(&mut self, setting: Setting) -> Result<(), SettingsError> {
        if !setting.is_consistent() {
            return Err(SettingsError::KindMismatch {
                name: setting.name().to_string(),
                kind: setting.kind(),
            });
        }
        if self.index.contains_key(setting.name()) {
            let existing = &self.settings[self.index[setting.name()]];
            return Err(if existing.name() == setting.name() {
                SettingsError::DuplicateName(setting.name().to_string())
            } else {
                SettingsError::NameCollision(setting.name().to_string())
            });
        }
        let alias = setting.short_name();
        if !alias.is_empty() && (alias == setting.name() || self.index.contains_key(alias)) {
            return Err(SettingsError::NameCollision(alias.to_string()));
        }

        let slot = self.settings.len();
        self.index.insert(setting.name().to_string(), slot);
        if !alias.is_empty() {
            self.index.insert(alias.to_string(), slot);
        }
        log::trace!("registered setting {} ({})", setting.name(), setting.kind());
        self.settings.push(setting);
        Ok(())
    }

    /// Registers a writable setting whose kind follows its default
    pub fn define(
        &mut self,
        name: &str,
        short_name: &str,
        default_value: SettingValue,
    ) -> Result<(), SettingsError> {
        self.register(Setting::with_default(name, short_name, default_value))
    }

    /// Borrows a setting by canonical name or alias
    pub fn get(&self, name: &str) -> Option<&Setting> {
        self.index.get(name).map(|&slot| &self.settings[slot])
    }

    /// Current value of a setting
    pub fn value(&self, name: &str) -> Option<&SettingValue> {
        self.get(name).map(Setting::current_value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Settings whose current value differs from the default
    pub fn modified_settings(&self) -> Vec<Setting> {
        self.settings
            .iter()
            .filter(|s| s.is_modified())
            .cloned()
            .collect()
    }

    /// Restores every writable setting to its default
    pub fn reset_all(&mut self) {
        for setting in self.settings.iter_mut().filter(|s| !s.is_read_only()) {
            let default = setting.default_value().clone();
            setting.set_current_value(default);
        }
    }
}

impl SettingsStore for SettingsRegistry {
    fn get_setting(&self, name: &str) -> Option<Setting> {
        self.get(name).cloned()
    }

    fn try_set_value(&mut self, name: &str, value: SettingValue) -> bool {
        let Some(&slot) = self.index.get(name) else {
            log::debug!("set: unknown setting {}", name);
            return false;
        };
        let setting = &mut self.settings[slot];
        if setting.is_read_only() {
            log::debug!("set: {} is read-only", setting.name());
            return false;
        }
        if !value.is_kind(setting.kind()) {
            log::debug!(
                "set: {} expects a {} value, got {}",
                setting.name(),
                setting.kind(),
                value.kind()
            );
            return false;
        }
        log::trace!("set {} = {}", setting.name(), value);
        setting.set_current_value(value);
        true
    }

    fn all_settings(&self) -> Vec<Setting> {
        self.settings.clone()
    }
}

impl Default for SettingsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
