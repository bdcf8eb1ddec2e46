//! Setting values and entries

use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

/// The kind of value a setting holds for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingKind {
    Toggle,
    Number,
    String,
}

impl SettingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKind::Toggle => "toggle",
            SettingKind::Number => "number",
            SettingKind::String => "string",
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Setting value (strongly typed, no coercion between variants)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingValue {
    Toggle(bool),
    Number(i64),
    String(String),
}

impl SettingValue {
    /// Returns the kind matching this variant
    pub fn kind(&self) -> SettingKind {
        match self {
            SettingValue::Toggle(_) => SettingKind::Toggle,
            SettingValue::Number(_) => SettingKind::Number,
            SettingValue::String(_) => SettingKind::String,
        }
    }

    pub fn is_kind(&self, kind: SettingKind) -> bool {
        self.kind() == kind
    }

    pub fn as_toggle(&self) -> Option<bool> {
        match self {
            SettingValue::Toggle(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            SettingValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            SettingValue::String(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Toggle(v) => write!(f, "{}", v),
            SettingValue::Number(v) => write!(f, "{}", v),
            SettingValue::String(v) => f.write_str(v),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Toggle(v)
    }
}

impl From<i64> for SettingValue {
    fn from(v: i64) -> Self {
        SettingValue::Number(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::String(v.into())
    }
}

/// A named, typed, defaultable configuration value
///
/// `Setting::new` does not check that both values match `kind`; the
/// registry does that at registration. Readers that receive settings from
/// elsewhere should use [`Setting::is_consistent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    name: String,
    short_name: String,
    kind: SettingKind,
    default_value: SettingValue,
    current_value: SettingValue,
    is_read_only: bool,
}

impl Setting {
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        kind: SettingKind,
        default_value: SettingValue,
        current_value: SettingValue,
        is_read_only: bool,
    ) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            kind,
            default_value,
            current_value,
            is_read_only,
        }
    }

    /// Writable setting whose kind and current value follow `default_value`
    pub fn with_default(
        name: impl Into<String>,
        short_name: impl Into<String>,
        default_value: SettingValue,
    ) -> Self {
        let kind = default_value.kind();
        let current_value = default_value.clone();
        Self::new(name, short_name, kind, default_value, current_value, false)
    }

    /// Marks the setting read-only
    pub fn read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short alias; empty when the setting has none
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn kind(&self) -> SettingKind {
        self.kind
    }

    pub fn default_value(&self) -> &SettingValue {
        &self.default_value
    }

    pub fn current_value(&self) -> &SettingValue {
        &self.current_value
    }

    pub fn is_read_only(&self) -> bool {
        self.is_read_only
    }

    /// True when the current value differs from the default
    pub fn is_modified(&self) -> bool {
        self.current_value != self.default_value
    }

    /// True when both values are of the setting's kind
    pub fn is_consistent(&self) -> bool {
        self.default_value.is_kind(self.kind) && self.current_value.is_kind(self.kind)
    }

    /// Answers to either the canonical name or the alias
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || (!self.short_name.is_empty() && self.short_name == name)
    }

    pub(crate) fn set_current_value(&mut self, value: SettingValue) {
        self.current_value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_value_kind() {
        assert_eq!(SettingValue::Toggle(true).kind(), SettingKind::Toggle);
        assert_eq!(SettingValue::Number(3).kind(), SettingKind::Number);
        assert_eq!(SettingValue::from("x").kind(), SettingKind::String);
    }

    #[test]
    fn test_value_accessors() {
        let val = SettingValue::Number(42);
        assert_eq!(val.as_number(), Some(42));
        assert_eq!(val.as_toggle(), None);
        assert_eq!(val.as_string(), None);
        assert_eq!(SettingValue::from("abc").as_string(), Some("abc"));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(SettingValue::Toggle(false).to_string(), "false");
        assert_eq!(SettingValue::Number(-7).to_string(), "-7");
        assert_eq!(SettingValue::from("inclusive").to_string(), "inclusive");
    }

    #[test]
    fn test_setting_with_default() {
        let setting = Setting::with_default("tabstop", "ts", SettingValue::Number(8));
        assert_eq!(setting.kind(), SettingKind::Number);
        assert_eq!(setting.current_value(), &SettingValue::Number(8));
        assert!(!setting.is_modified());
        assert!(!setting.is_read_only());
        assert!(setting.is_consistent());
    }

    #[test]
    fn test_setting_modified_is_structural() {
        let mut setting = Setting::with_default("sel", "", SettingValue::from("inclusive"));
        setting.set_current_value(SettingValue::from("exclusive"));
        assert!(setting.is_modified());
        setting.set_current_value(SettingValue::from("inclusive"));
        assert!(!setting.is_modified());
    }

    #[test]
    fn test_setting_answers_to_alias() {
        let setting = Setting::with_default("ignorecase", "ic", SettingValue::Toggle(false));
        assert!(setting.answers_to("ignorecase"));
        assert!(setting.answers_to("ic"));
        assert!(!setting.answers_to("IC"));

        let no_alias = Setting::with_default("wrap", "", SettingValue::Toggle(true));
        assert!(!no_alias.answers_to(""));
    }

    #[test]
    fn test_inconsistent_setting_detected() {
        let setting = Setting::new(
            "foobar",
            "fb",
            SettingKind::Number,
            SettingValue::Toggle(false),
            SettingValue::Toggle(false),
            false,
        );
        assert!(!setting.is_consistent());
    }
}
