//! Command-mode verbs over settings and key mappings
//!
//! Each verb takes already-parsed arguments and reports every outcome
//! through the [`StatusSink`]; nothing is returned to the caller.

use crate::display::{format_mapping, format_setting};
use crate::{OperationError, StatusSink};
use key_map::{KeyMap, KeyRemapMode};
use settings_registry::{Setting, SettingKind, SettingValue, SettingsStore};

/// Listing text when no mapping matches
pub const NO_MAPPING_FOUND: &str = "No mapping found";

/// Verbs behind `:set`, `:map` and friends
///
/// Borrows its collaborators for the duration of a command; it holds no
/// state of its own.
pub struct Operations<'a> {
    settings: &'a mut dyn SettingsStore,
    key_map: &'a mut dyn KeyMap,
    status: &'a mut dyn StatusSink,
}

impl<'a> Operations<'a> {
    pub fn new(
        settings: &'a mut dyn SettingsStore,
        key_map: &'a mut dyn KeyMap,
        status: &'a mut dyn StatusSink,
    ) -> Self {
        Self {
            settings,
            key_map,
            status,
        }
    }

    /// `:set name`: flips a toggle, shows any other kind
    pub fn operate_setting(&mut self, name: &str) {
        let Some(setting) = self.lookup(name) else {
            return;
        };
        match setting.kind() {
            SettingKind::Toggle => self.flip(name, &setting),
            SettingKind::Number | SettingKind::String => {
                let line = format!("{}={}", setting.name(), setting.current_value());
                self.status.on_status(&line);
            }
        }
    }

    /// `:set name&`: restores the default value
    pub fn reset_setting(&mut self, name: &str) {
        let Some(setting) = self.lookup(name) else {
            return;
        };
        if !setting.is_consistent()
            || !self
                .settings
                .try_set_value(setting.name(), setting.default_value().clone())
        {
            self.report(OperationError::InvalidArgument(name.to_string()));
        }
    }

    /// `:set invname` / `:set name!`: flips a toggle, rejects other kinds
    pub fn invert_setting(&mut self, name: &str) {
        let Some(setting) = self.lookup(name) else {
            return;
        };
        if setting.kind() != SettingKind::Toggle {
            self.report(OperationError::InvalidArgument(name.to_string()));
            return;
        }
        self.flip(name, &setting);
    }

    /// `:set name?`
    pub fn print_setting(&mut self, name: &str) {
        if let Some(setting) = self.lookup(name) {
            self.status.on_status(&format_setting(&setting));
        }
    }

    /// `:set`: every setting whose value differs from its default
    pub fn print_modified_settings(&mut self) {
        self.print_settings(Setting::is_modified);
    }

    /// `:set all`
    pub fn print_all_settings(&mut self) {
        self.print_settings(|_| true);
    }

    /// `:set name=value`
    pub fn set_setting_value(&mut self, name: &str, value: &str) {
        if !self.settings.try_set_value_from_string(name, value) {
            self.report(OperationError::InvalidValue {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    }

    /// `:map` / `:noremap` and their mode variants
    ///
    /// Modes are handled independently; each failing mode reports once.
    pub fn remap_keys(&mut self, from: &str, to: &str, modes: &[KeyRemapMode], allow_remap: bool) {
        for &mode in modes {
            let mapped = if allow_remap {
                self.key_map.map_with_remap(from, to, mode)
            } else {
                self.key_map.map_with_no_remap(from, to, mode)
            };
            if !mapped {
                self.report(OperationError::UnsupportedKeyMapping {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
        }
    }

    /// `:unmap` and its mode variants
    pub fn unmap_keys(&mut self, from: &str, modes: &[KeyRemapMode]) {
        for &mode in modes {
            if !self.key_map.unmap(from, mode) {
                self.report(OperationError::NoSuchMapping);
            }
        }
    }

    /// `:map` without arguments: lists the rules of `modes`
    pub fn print_key_mappings(&mut self, modes: &[KeyRemapMode]) {
        let mut lines: Vec<String> = modes
            .iter()
            .flat_map(|&mode| self.key_map.get_key_mappings_for_mode(mode))
            .map(|entry| format_mapping(&entry))
            .collect();
        if lines.is_empty() {
            lines.push(NO_MAPPING_FOUND.to_string());
        }
        self.status.on_status_long(&lines);
    }

    /// `:mapclear` and its mode variants
    pub fn clear_key_mappings(&mut self, modes: &[KeyRemapMode]) {
        for &mode in modes {
            self.key_map.clear(mode);
        }
    }

    fn lookup(&mut self, name: &str) -> Option<Setting> {
        let setting = self.settings.get_setting(name);
        if setting.is_none() {
            self.report(OperationError::UnknownOption(name.to_string()));
        }
        setting
    }

    fn flip(&mut self, name: &str, setting: &Setting) {
        let flipped = match setting.current_value() {
            SettingValue::Toggle(value) => self
                .settings
                .try_set_value(setting.name(), SettingValue::Toggle(!value)),
            _ => false,
        };
        if !flipped {
            self.report(OperationError::InvalidArgument(name.to_string()));
        }
    }

    fn print_settings(&mut self, filter: impl Fn(&Setting) -> bool) {
        let lines: Vec<String> = self
            .settings
            .all_settings()
            .iter()
            .filter(|s| filter(s))
            .map(format_setting)
            .collect();
        self.status.on_status_long(&lines);
    }

    fn report(&mut self, error: OperationError) {
        log::debug!("command failed: {}", error);
        self.status.on_error(&error.to_string());
    }
}
