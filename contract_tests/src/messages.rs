//! Command verb output contract tests
//!
//! These tests define the exact lines a user reads after `:set` and `:map`
//! style commands.

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use command_ops::StatusEvent;
    use key_map::KeyRemapMode;

    // ===== Error Messages =====
    const ERR_UNKNOWN_OPTION: &str = "unknown option: foo";
    const ERR_INVALID_ARGUMENT: &str = "invalid argument: tabstop";
    const ERR_INVALID_VALUE: &str = "invalid value for ts: eight";
    const ERR_NO_SUCH_MAPPING: &str = "no such mapping";
    const ERR_UNSUPPORTED_MAPPING: &str = "no supported: key mapping  x";

    // ===== Status Lines =====
    const STATUS_TOGGLE_ON: &str = "wrapscan";
    const STATUS_TOGGLE_OFF: &str = "nohlsearch";
    const STATUS_NUMBER: &str = "tabstop=8";
    const STATUS_STRING: &str = "selection=inclusive";
    const STATUS_EMPTY_STRING: &str = "clipboard=";
    const STATUS_NO_MAPPING: &str = "No mapping found";

    #[test]
    fn test_error_message_contract() {
        let (mut settings, mut key_map) = session();
        let sink = run_commands(&mut settings, &mut key_map, |ops| {
            ops.print_setting("foo");
            ops.invert_setting("tabstop");
            ops.set_setting_value("ts", "eight");
            ops.unmap_keys("x", &[KeyRemapMode::Normal]);
            ops.remap_keys("", "x", &[KeyRemapMode::Normal], true);
        });

        assert_eq!(
            sink.errors(),
            vec![
                ERR_UNKNOWN_OPTION,
                ERR_INVALID_ARGUMENT,
                ERR_INVALID_VALUE,
                ERR_NO_SUCH_MAPPING,
                ERR_UNSUPPORTED_MAPPING,
            ]
        );
    }

    #[test]
    fn test_print_setting_contract() {
        let (mut settings, mut key_map) = session();
        let sink = run_commands(&mut settings, &mut key_map, |ops| {
            ops.print_setting("ws");
            ops.print_setting("hls");
            ops.print_setting("ts");
            ops.print_setting("sel");
            ops.print_setting("cb");
        });

        assert_eq!(
            sink.statuses(),
            vec![
                STATUS_TOGGLE_ON,
                STATUS_TOGGLE_OFF,
                STATUS_NUMBER,
                STATUS_STRING,
                STATUS_EMPTY_STRING,
            ]
        );
    }

    #[test]
    fn test_operate_non_toggle_contract() {
        let (mut settings, mut key_map) = session();
        let sink = run_commands(&mut settings, &mut key_map, |ops| {
            ops.operate_setting("ts");
            ops.operate_setting("cb");
        });

        assert_eq!(sink.statuses(), vec![STATUS_NUMBER, STATUS_EMPTY_STRING]);
    }

    #[test]
    fn test_listing_contract() {
        let (mut settings, mut key_map) = session();
        let sink = run_commands(&mut settings, &mut key_map, |ops| {
            ops.print_modified_settings();
            ops.print_key_mappings(&KeyRemapMode::ALL);
        });

        assert_eq!(
            sink.events(),
            &[
                StatusEvent::StatusLong(vec![]),
                StatusEvent::StatusLong(vec![STATUS_NO_MAPPING.to_string()]),
            ]
        );
    }

    #[test]
    fn test_mapping_listing_contract() {
        let (mut settings, mut key_map) = session();
        let sink = run_commands(&mut settings, &mut key_map, |ops| {
            ops.remap_keys("<C-S>", ":w<CR>", &[KeyRemapMode::Normal], false);
            ops.remap_keys("<lt>", "<Space>", &[KeyRemapMode::Visual], true);
            ops.print_key_mappings(&KeyRemapMode::ALL);
        });

        assert_eq!(
            sink.last_listing().unwrap(),
            &[
                "n  <C-s>  *:w<CR>".to_string(),
                "x  <lt>   <Space>".to_string(),
            ]
        );
    }
}
