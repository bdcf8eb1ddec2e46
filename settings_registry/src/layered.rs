//! Buffer-local settings layered over the global registry

use crate::{Setting, SettingValue, SettingsRegistry, SettingsStore};
use alloc::vec::Vec;

/// Routes each name to the local registry when it knows it, else to global
///
/// Both registries stay owned by the session; this only borrows them for the
/// duration of one command.
pub struct LayeredSettings<'a> {
    local: &'a mut SettingsRegistry,
    global: &'a mut SettingsRegistry,
}

impl<'a> LayeredSettings<'a> {
    pub fn new(local: &'a mut SettingsRegistry, global: &'a mut SettingsRegistry) -> Self {
        Self { local, global }
    }
}

impl SettingsStore for LayeredSettings<'_> {
    fn get_setting(&self, name: &str) -> Option<Setting> {
        self.local
            .get_setting(name)
            .or_else(|| self.global.get_setting(name))
    }

    fn try_set_value(&mut self, name: &str, value: SettingValue) -> bool {
        if self.local.contains(name) {
            self.local.try_set_value(name, value)
        } else {
            self.global.try_set_value(name, value)
        }
    }

    fn all_settings(&self) -> Vec<Setting> {
        let mut settings = self.local.all_settings();
        settings.extend(
            self.global
                .all_settings()
                .into_iter()
                .filter(|s| !self.local.contains(s.name())),
        );
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{create_global_registry, create_local_registry, keys};

    #[test]
    fn test_lookup_falls_through_to_global() {
        let mut local = create_local_registry();
        let mut global = create_global_registry();
        let layered = LayeredSettings::new(&mut local, &mut global);

        assert_eq!(layered.get_setting("nu").unwrap().name(), keys::NUMBER);
        assert_eq!(layered.get_setting("ic").unwrap().name(), keys::IGNORECASE);
        assert!(layered.get_setting("nosuch").is_none());
    }

    #[test]
    fn test_writes_go_to_owning_registry() {
        let mut local = create_local_registry();
        let mut global = create_global_registry();
        {
            let mut layered = LayeredSettings::new(&mut local, &mut global);
            assert!(layered.try_set_value("nu", SettingValue::Toggle(true)));
            assert!(layered.try_set_value_from_string("ts", "4"));
        }
        assert_eq!(local.value(keys::NUMBER), Some(&SettingValue::Toggle(true)));
        assert_eq!(global.value(keys::TABSTOP), Some(&SettingValue::Number(4)));
        assert!(global.modified_settings().iter().all(|s| s.name() != keys::NUMBER));
    }

    #[test]
    fn test_local_settings_listed_first() {
        let mut local = create_local_registry();
        let mut global = create_global_registry();
        let local_len = local.len();
        let global_len = global.len();
        let layered = LayeredSettings::new(&mut local, &mut global);

        let all = layered.all_settings();
        assert_eq!(all.len(), local_len + global_len);
        assert_eq!(all[0].name(), keys::NUMBER);
    }
}
