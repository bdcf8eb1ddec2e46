//! Key notation parsing and formatting
//!
//! Notation is the text form used by `:map` arguments: plain characters stand
//! for themselves and `<...>` groups name special or modified keys.

use crate::{Key, KeyInput, KeyInputSet, Modifiers};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

/// Parses key notation into a key sequence
///
/// Group names are case-insensitive. A `<` that does not open a recognised
/// group is a literal `<`, so this never fails; the result is empty only
/// for empty input.
pub fn parse(text: &str) -> KeyInputSet {
    let chars: Vec<char> = text.chars().collect();
    let mut keys = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '<' {
            if let Some(close) = chars[i + 1..].iter().position(|&c| c == '>') {
                let end = i + 1 + close;
                let group: String = chars[i + 1..end].iter().collect();
                if let Some(key) = parse_group(&group) {
                    keys.push(key);
                    i = end + 1;
                    continue;
                }
            }
        }
        keys.push(KeyInput::from_char(chars[i]));
        i += 1;
    }

    KeyInputSet::from_keys(keys)
}

/// Parses the inside of a `<...>` group
fn parse_group(group: &str) -> Option<KeyInput> {
    let mut modifiers = Modifiers::NONE;
    let mut rest = group;

    loop {
        let bytes = rest.as_bytes();
        if bytes.len() < 3 || bytes[1] != b'-' {
            break;
        }
        let modifier = match bytes[0].to_ascii_lowercase() {
            b'c' => Modifiers::CTRL,
            b's' => Modifiers::SHIFT,
            b'a' | b'm' => Modifiers::ALT,
            b'd' => Modifiers::META,
            _ => break,
        };
        modifiers = modifiers.with(modifier);
        rest = &rest[2..];
    }

    let key = match named_key(rest) {
        Some(key) => key,
        None => {
            // A bare character is only a group when modified: `<C-x>`, not `<x>`
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if !modifiers.is_empty() => Key::Char(c),
                _ => return None,
            }
        }
    };

    Some(KeyInput::new(key, modifiers))
}

fn named_key(name: &str) -> Option<Key> {
    let key = match name.to_ascii_lowercase().as_str() {
        "esc" => Key::Escape,
        "cr" | "enter" | "return" => Key::Enter,
        "tab" => Key::Tab,
        "bs" | "backspace" => Key::Backspace,
        "del" | "delete" => Key::Delete,
        "insert" => Key::Insert,
        "space" => Key::Char(' '),
        "lt" => Key::Char('<'),
        "bar" => Key::Char('|'),
        "bslash" => Key::Char('\\'),
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "nop" => Key::Nop,
        other => {
            let number = other.strip_prefix('f')?.parse::<u8>().ok()?;
            if !(1..=12).contains(&number) {
                return None;
            }
            Key::Function(number)
        }
    };
    Some(key)
}

/// Formats a key sequence in canonical notation
pub fn format(keys: &[KeyInput]) -> String {
    let mut out = String::new();
    for key in keys {
        // Writing into a String cannot fail
        let _ = write_key(&mut out, key);
    }
    out
}

/// Writes one key in canonical notation
pub fn write_key<W: Write>(out: &mut W, input: &KeyInput) -> fmt::Result {
    let modifiers = input.modifiers;

    if modifiers.is_empty() {
        if let Key::Char(c) = input.key {
            if c != ' ' && c != '<' {
                return out.write_char(c);
            }
        }
    }

    out.write_char('<')?;
    if modifiers.is_ctrl() {
        out.write_str("C-")?;
    }
    if modifiers.is_shift() {
        out.write_str("S-")?;
    }
    if modifiers.is_alt() {
        out.write_str("A-")?;
    }
    if modifiers.is_meta() {
        out.write_str("D-")?;
    }
    match input.key {
        Key::Char(' ') => out.write_str("Space")?,
        Key::Char('<') => out.write_str("lt")?,
        Key::Char(c) => out.write_char(c)?,
        Key::Escape => out.write_str("Esc")?,
        Key::Enter => out.write_str("CR")?,
        Key::Tab => out.write_str("Tab")?,
        Key::Backspace => out.write_str("BS")?,
        Key::Delete => out.write_str("Del")?,
        Key::Insert => out.write_str("Insert")?,
        Key::Up => out.write_str("Up")?,
        Key::Down => out.write_str("Down")?,
        Key::Left => out.write_str("Left")?,
        Key::Right => out.write_str("Right")?,
        Key::Home => out.write_str("Home")?,
        Key::End => out.write_str("End")?,
        Key::PageUp => out.write_str("PageUp")?,
        Key::PageDown => out.write_str("PageDown")?,
        Key::Function(n) => write!(out, "F{}", n)?,
        Key::Nop => out.write_str("Nop")?,
    }
    out.write_char('>')
}
