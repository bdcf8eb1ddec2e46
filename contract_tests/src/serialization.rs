//! Serialized shape contract tests
//!
//! Pins the serialized shape of settings, keys and mappings as seen through
//! serde_json.

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use key_input::{Key, KeyInput, KeyInputSet, Modifiers};
    use key_map::{KeyRemapMode, RemapEntry};
    use serde_json::json;
    use settings_registry::{Setting, SettingKind, SettingValue};

    #[test]
    fn test_setting_value_contract() {
        verify_json_contract(&SettingValue::Toggle(true), json!({ "Toggle": true }));
        verify_json_contract(&SettingValue::Number(-3), json!({ "Number": -3 }));
        verify_json_contract(&SettingValue::from("all"), json!({ "String": "all" }));
        verify_json_contract(&SettingKind::Number, json!("Number"));
    }

    #[test]
    fn test_setting_contract() {
        let setting = Setting::with_default("tabstop", "ts", SettingValue::Number(8));
        verify_json_contract(
            &setting,
            json!({
                "name": "tabstop",
                "short_name": "ts",
                "kind": "Number",
                "default_value": { "Number": 8 },
                "current_value": { "Number": 8 },
                "is_read_only": false
            }),
        );
    }

    #[test]
    fn test_key_input_contract() {
        verify_json_contract(&KeyInput::from_char('a'), json!({
            "key": { "Char": "a" },
            "modifiers": { "bits": 0 }
        }));
        verify_json_contract(
            &KeyInput::new(Key::Function(3), Modifiers::CTRL),
            json!({ "key": { "Function": 3 }, "modifiers": { "bits": 1 } }),
        );
        verify_json_contract(&Key::Escape, json!("Escape"));
    }

    #[test]
    fn test_key_input_set_is_a_plain_array() {
        verify_json_contract(
            &KeyInputSet::from_notation("<Esc>x"),
            json!([
                { "key": "Escape", "modifiers": { "bits": 0 } },
                { "key": { "Char": "x" }, "modifiers": { "bits": 0 } }
            ]),
        );
    }

    #[test]
    fn test_remap_entry_contract() {
        let entry = RemapEntry::new(
            KeyRemapMode::OperatorPending,
            KeyInputSet::from_notation("w"),
            KeyInputSet::from_notation("e"),
            false,
        );
        verify_json_contract(
            &entry,
            json!({
                "mode": "OperatorPending",
                "from_keys": [{ "key": { "Char": "w" }, "modifiers": { "bits": 0 } }],
                "to_keys": [{ "key": { "Char": "e" }, "modifiers": { "bits": 0 } }],
                "allow_remap": false
            }),
        );
    }
}
