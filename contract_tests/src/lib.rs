//! # Contract Tests
//!
//! "Golden" tests for the user-visible surface, so that message text, key
//! notation, option tables and serialized shapes don't drift accidentally.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Expected text is written out literally
//! - **Testability first**: Contract tests fail when a visible string changes
//! - **Mechanism not policy**: Pin what users and hosts see, not internals
//!
//! ## Structure
//!
//! - `messages`: status and error lines produced by command verbs
//! - `notation`: canonical key notation
//! - `options`: built-in option names, aliases and defaults
//! - `serialization`: JSON shapes of settings, keys and mappings

pub mod messages;
pub mod notation;
pub mod options;
pub mod serialization;

/// Common test helpers for contract validation
pub mod test_helpers {
    use command_ops::{Operations, RecordingStatusSink};
    use key_map::KeyMapTable;
    use serde::Serialize;
    use settings_registry::defaults::create_global_registry;
    use settings_registry::SettingsRegistry;

    /// Fresh session state: built-in global options and an empty key map
    pub fn session() -> (SettingsRegistry, KeyMapTable) {
        (create_global_registry(), KeyMapTable::new())
    }

    /// Runs verbs against a session and returns what the sink saw
    pub fn run_commands(
        settings: &mut SettingsRegistry,
        key_map: &mut KeyMapTable,
        commands: impl FnOnce(&mut Operations<'_>),
    ) -> RecordingStatusSink {
        let mut sink = RecordingStatusSink::new();
        let mut ops = Operations::new(settings, key_map, &mut sink);
        commands(&mut ops);
        sink
    }

    /// Verifies a value serializes to exactly the expected JSON
    pub fn verify_json_contract<T: Serialize>(value: &T, expected: serde_json::Value) {
        let actual = serde_json::to_value(value).expect("Failed to serialize value");
        assert_eq!(
            actual, expected,
            "Serialized shape changed: expected {}, got {}",
            expected, actual
        );
    }
}
