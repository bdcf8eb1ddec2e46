//! Key notation contract tests
//!
//! Mappings are listed back to the user in canonical notation; these tests
//! pin that spelling.

use key_input::KeyInputSet;

/// Parses then formats, the round trip every listing goes through
pub fn canonical(text: &str) -> String {
    KeyInputSet::from_notation(text).to_string()
}
