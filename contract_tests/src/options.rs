//! Built-in option table contract tests
//!
//! Option names and aliases are typed by users and stored in their config;
//! renaming one is a breaking change.

use settings_registry::SettingValue;

/// Vim defaults that hosts rely on
pub fn expected_default(name: &str) -> SettingValue {
    match name {
        "magic" | "wrapscan" | "startofline" | "timeout" | "wrap" => SettingValue::Toggle(true),
        "timeoutlen" | "maxmapdepth" => SettingValue::Number(1000),
        "shiftwidth" | "tabstop" => SettingValue::Number(8),
        "scrolloff" | "scroll" => SettingValue::Number(0),
        "selection" => SettingValue::from("inclusive"),
        "clipboard" | "virtualedit" => SettingValue::from(""),
        "term" => SettingValue::from("builtin"),
        _ => SettingValue::Toggle(false),
    }
}
