//! String-to-value coercion for `:set name=value`

use crate::{SettingKind, SettingValue};

/// Parses a toggle literal (ASCII case-insensitive)
pub fn parse_toggle(text: &str) -> Option<bool> {
    const TRUE: [&str; 4] = ["true", "on", "yes", "1"];
    const FALSE: [&str; 4] = ["false", "off", "no", "0"];

    if TRUE.iter().any(|t| t.eq_ignore_ascii_case(text)) {
        Some(true)
    } else if FALSE.iter().any(|f| f.eq_ignore_ascii_case(text)) {
        Some(false)
    } else {
        None
    }
}

/// Parses a signed decimal integer; no whitespace, no radix prefixes
pub fn parse_number(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<i64>().ok()
}

/// Parses `text` as a value of the given kind
pub fn parse_value(kind: SettingKind, text: &str) -> Option<SettingValue> {
    match kind {
        SettingKind::Toggle => parse_toggle(text).map(SettingValue::Toggle),
        SettingKind::Number => parse_number(text).map(SettingValue::Number),
        SettingKind::String => Some(SettingValue::String(text.into())),
    }
}
