//! Modes a key mapping can apply in

use core::fmt;
use serde::{Deserialize, Serialize};

/// Editor mode scoping a key mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KeyRemapMode {
    Normal,
    Visual,
    Select,
    OperatorPending,
    Insert,
    /// Command-line mode
    Command,
    /// Language mappings (`:lmap`)
    Language,
}

impl KeyRemapMode {
    pub const COUNT: usize = 7;

    /// Every mode, in listing order
    pub const ALL: [KeyRemapMode; Self::COUNT] = [
        KeyRemapMode::Normal,
        KeyRemapMode::Visual,
        KeyRemapMode::Select,
        KeyRemapMode::OperatorPending,
        KeyRemapMode::Insert,
        KeyRemapMode::Command,
        KeyRemapMode::Language,
    ];

    /// Modes covered by `:map` / `:noremap` / `:unmap`
    pub const MAP_MODES: [KeyRemapMode; 4] = [
        KeyRemapMode::Normal,
        KeyRemapMode::Visual,
        KeyRemapMode::Select,
        KeyRemapMode::OperatorPending,
    ];

    /// Modes covered by `:map!` / `:noremap!` / `:unmap!`
    pub const MAP_BANG_MODES: [KeyRemapMode; 2] = [KeyRemapMode::Insert, KeyRemapMode::Command];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyRemapMode::Normal => "NORMAL",
            KeyRemapMode::Visual => "VISUAL",
            KeyRemapMode::Select => "SELECT",
            KeyRemapMode::OperatorPending => "OPERATOR-PENDING",
            KeyRemapMode::Insert => "INSERT",
            KeyRemapMode::Command => "COMMAND",
            KeyRemapMode::Language => "LANGUAGE",
        }
    }

    /// Single-letter tag used when listing mappings
    pub fn letter(&self) -> char {
        match self {
            KeyRemapMode::Normal => 'n',
            KeyRemapMode::Visual => 'x',
            KeyRemapMode::Select => 's',
            KeyRemapMode::OperatorPending => 'o',
            KeyRemapMode::Insert => 'i',
            KeyRemapMode::Command => 'c',
            KeyRemapMode::Language => 'l',
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for KeyRemapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_strings() {
        assert_eq!(KeyRemapMode::Normal.as_str(), "NORMAL");
        assert_eq!(KeyRemapMode::Insert.as_str(), "INSERT");
        assert_eq!(KeyRemapMode::OperatorPending.as_str(), "OPERATOR-PENDING");
    }

    #[test]
    fn test_index_matches_listing_order() {
        for (i, mode) in KeyRemapMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
    }

    #[test]
    fn test_letters_are_distinct() {
        for (i, a) in KeyRemapMode::ALL.iter().enumerate() {
            for b in &KeyRemapMode::ALL[i + 1..] {
                assert_ne!(a.letter(), b.letter());
            }
        }
    }
}
