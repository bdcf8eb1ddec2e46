//! User-facing text for settings and mappings

use key_map::RemapEntry;
use settings_registry::{Setting, SettingKind, SettingValue};

/// `:set name?` style line: `name`/`noname` for toggles, `name=value` otherwise
///
/// The setting's kind picks the form; a toggle-kind setting holding some
/// other value falls back to `name=value`.
pub fn format_setting(setting: &Setting) -> String {
    match (setting.kind(), setting.current_value()) {
        (SettingKind::Toggle, SettingValue::Toggle(true)) => setting.name().to_string(),
        (SettingKind::Toggle, SettingValue::Toggle(false)) => format!("no{}", setting.name()),
        (_, value) => format!("{}={}", setting.name(), value),
    }
}

/// `:map` listing line: mode letter, source, `*` for noremap, target
pub fn format_mapping(entry: &RemapEntry) -> String {
    let marker = if entry.allow_remap() { ' ' } else { '*' };
    format!(
        "{}  {}  {}{}",
        entry.mode().letter(),
        entry.from_keys(),
        marker,
        entry.to_keys()
    )
}
