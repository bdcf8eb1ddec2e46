#![no_std]

//! # Key Input
//!
//! Key press values shared by the key-mapping engine and its hosts.
//!
//! ## Philosophy
//!
//! - **Keys, not bytes**: A mapping is a sequence of typed key presses, not a raw string
//! - **Notation in, notation out**: `<Esc>`, `<C-a>` and friends parse to the same
//!   values a host produces from real key events, and format back canonically
//! - **Total parsing**: Unknown `<...>` groups are literal text, never an error
//!
//! ## Example
//!
//! ```ignore
//! use key_input::KeyInputSet;
//!
//! let keys = KeyInputSet::from_notation("jj<Esc>");
//! assert_eq!(keys.len(), 3);
//! assert_eq!(keys.to_string(), "jj<Esc>");
//! ```

extern crate alloc;

pub mod notation;

use alloc::vec::Vec;
use core::fmt;
use core::slice;
use serde::{Deserialize, Serialize};

/// Logical key, independent of keyboard layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Printable character (including space and `<`)
    Char(char),
    Escape,
    Enter,
    Tab,
    Backspace,
    Delete,
    Insert,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function key `F1`..`F12`
    Function(u8),
    /// No-op key (`<Nop>`), used as an empty right-hand side
    Nop,
}

/// Modifier keys
///
/// Bitflags representing which modifiers were held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self { bits: 0 };
    /// Control key
    pub const CTRL: Self = Self { bits: 1 << 0 };
    /// Alt key (`A-` and `M-` in notation)
    pub const ALT: Self = Self { bits: 1 << 1 };
    /// Shift key
    pub const SHIFT: Self = Self { bits: 1 << 2 };
    /// Meta/Command key (`D-` in notation)
    pub const META: Self = Self { bits: 1 << 3 };

    /// Adds a modifier
    pub fn with(mut self, other: Modifiers) -> Self {
        self.bits |= other.bits;
        self
    }

    /// Removes a modifier
    pub fn without(mut self, other: Modifiers) -> Self {
        self.bits &= !other.bits;
        self
    }

    /// Checks if a modifier is present
    pub fn contains(&self, other: Modifiers) -> bool {
        (self.bits & other.bits) == other.bits
    }

    pub fn is_ctrl(&self) -> bool {
        self.contains(Self::CTRL)
    }

    pub fn is_alt(&self) -> bool {
        self.contains(Self::ALT)
    }

    pub fn is_shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub fn is_meta(&self) -> bool {
        self.contains(Self::META)
    }

    /// Returns true if no modifiers are held
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

/// A single key press: key plus held modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// Creates a key input, folding modifiers the way Vim does
    ///
    /// `S-` on a letter becomes the upper-case letter and `C-` on a letter
    /// is case-insensitive, so `<C-A>` and `<C-a>` compare equal.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        let (key, modifiers) = match key {
            Key::Char(c) if c.is_ascii_alphabetic() && modifiers.is_ctrl() => {
                (Key::Char(c.to_ascii_lowercase()), modifiers.without(Modifiers::SHIFT))
            }
            Key::Char(c) if c.is_ascii_alphabetic() && modifiers.is_shift() => {
                (Key::Char(c.to_ascii_uppercase()), modifiers.without(Modifiers::SHIFT))
            }
            _ => (key, modifiers),
        };
        Self { key, modifiers }
    }

    /// Unmodified key
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Converts a raw character, mapping control characters to their keys
    pub fn from_char(c: char) -> Self {
        match c {
            '\x1b' => Self::plain(Key::Escape),
            '\r' | '\n' => Self::plain(Key::Enter),
            '\t' => Self::plain(Key::Tab),
            '\x08' | '\x7f' => Self::plain(Key::Backspace),
            _ => Self::plain(Key::Char(c)),
        }
    }
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        notation::write_key(f, self)
    }
}

/// Ordered sequence of key presses
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyInputSet(Vec<KeyInput>);

impl KeyInputSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses key notation (never fails; see [`notation::parse`])
    pub fn from_notation(text: &str) -> Self {
        notation::parse(text)
    }

    pub fn from_keys(keys: Vec<KeyInput>) -> Self {
        Self(keys)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&KeyInput> {
        self.0.first()
    }

    pub fn as_slice(&self) -> &[KeyInput] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, KeyInput> {
        self.0.iter()
    }

    /// Returns true if `prefix` is a (not necessarily strict) prefix of this set
    pub fn starts_with(&self, prefix: &[KeyInput]) -> bool {
        self.0.starts_with(prefix)
    }

    pub fn into_vec(self) -> Vec<KeyInput> {
        self.0
    }
}

impl fmt::Display for KeyInputSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in &self.0 {
            notation::write_key(f, key)?;
        }
        Ok(())
    }
}

impl From<Vec<KeyInput>> for KeyInputSet {
    fn from(keys: Vec<KeyInput>) -> Self {
        Self(keys)
    }
}

impl From<&str> for KeyInputSet {
    fn from(text: &str) -> Self {
        Self::from_notation(text)
    }
}

impl FromIterator<KeyInput> for KeyInputSet {
    fn from_iter<I: IntoIterator<Item = KeyInput>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a KeyInputSet {
    type Item = &'a KeyInput;
    type IntoIter = slice::Iter<'a, KeyInput>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
