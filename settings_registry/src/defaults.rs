//! Built-in option tables

use crate::{Setting, SettingValue, SettingsRegistry};

/// Canonical option names
pub mod keys {
    // Global options
    pub const IGNORECASE: &str = "ignorecase";
    pub const SMARTCASE: &str = "smartcase";
    pub const MAGIC: &str = "magic";
    pub const HLSEARCH: &str = "hlsearch";
    pub const INCSEARCH: &str = "incsearch";
    pub const WRAPSCAN: &str = "wrapscan";
    pub const STARTOFLINE: &str = "startofline";
    pub const TILDEOP: &str = "tildeop";
    pub const VISUALBELL: &str = "visualbell";
    pub const TIMEOUT: &str = "timeout";
    pub const TIMEOUTLEN: &str = "timeoutlen";
    pub const SCROLLOFF: &str = "scrolloff";
    pub const SHIFTWIDTH: &str = "shiftwidth";
    pub const TABSTOP: &str = "tabstop";
    pub const MAXMAPDEPTH: &str = "maxmapdepth";
    pub const SELECTION: &str = "selection";
    pub const CLIPBOARD: &str = "clipboard";
    pub const VIRTUALEDIT: &str = "virtualedit";
    pub const TERM: &str = "term";

    // Buffer-local options
    pub const NUMBER: &str = "number";
    pub const RELATIVENUMBER: &str = "relativenumber";
    pub const CURSORLINE: &str = "cursorline";
    pub const EXPANDTAB: &str = "expandtab";
    pub const WRAP: &str = "wrap";
    pub const SCROLL: &str = "scroll";
}

/// Default value of `maxmapdepth`, the key-mapping recursion bound
pub const DEFAULT_MAX_MAP_DEPTH: i64 = 1000;

const GLOBAL_OPTIONS: &[(&str, &str, Initial)] = &[
    (keys::IGNORECASE, "ic", Initial::Toggle(false)),
    (keys::SMARTCASE, "scs", Initial::Toggle(false)),
    (keys::MAGIC, "", Initial::Toggle(true)),
    (keys::HLSEARCH, "hls", Initial::Toggle(false)),
    (keys::INCSEARCH, "is", Initial::Toggle(false)),
    (keys::WRAPSCAN, "ws", Initial::Toggle(true)),
    (keys::STARTOFLINE, "sol", Initial::Toggle(true)),
    (keys::TILDEOP, "top", Initial::Toggle(false)),
    (keys::VISUALBELL, "vb", Initial::Toggle(false)),
    (keys::TIMEOUT, "to", Initial::Toggle(true)),
    (keys::TIMEOUTLEN, "tm", Initial::Number(1000)),
    (keys::SCROLLOFF, "so", Initial::Number(0)),
    (keys::SHIFTWIDTH, "sw", Initial::Number(8)),
    (keys::TABSTOP, "ts", Initial::Number(8)),
    (keys::MAXMAPDEPTH, "mmd", Initial::Number(DEFAULT_MAX_MAP_DEPTH)),
    (keys::SELECTION, "sel", Initial::String("inclusive")),
    (keys::CLIPBOARD, "cb", Initial::String("")),
    (keys::VIRTUALEDIT, "ve", Initial::String("")),
];

const LOCAL_OPTIONS: &[(&str, &str, Initial)] = &[
    (keys::NUMBER, "nu", Initial::Toggle(false)),
    (keys::RELATIVENUMBER, "rnu", Initial::Toggle(false)),
    (keys::CURSORLINE, "cul", Initial::Toggle(false)),
    (keys::EXPANDTAB, "et", Initial::Toggle(false)),
    (keys::WRAP, "", Initial::Toggle(true)),
    (keys::SCROLL, "scr", Initial::Number(0)),
];

/// `const`-friendly mirror of [`SettingValue`]
#[derive(Clone, Copy)]
enum Initial {
    Toggle(bool),
    Number(i64),
    String(&'static str),
}

impl Initial {
    fn value(self) -> SettingValue {
        match self {
            Initial::Toggle(v) => SettingValue::Toggle(v),
            Initial::Number(v) => SettingValue::Number(v),
            Initial::String(v) => SettingValue::from(v),
        }
    }
}

fn build(table: &[(&str, &str, Initial)]) -> SettingsRegistry {
    let mut registry = SettingsRegistry::new();
    for &(name, short_name, default) in table {
        if let Err(err) = registry.define(name, short_name, default.value()) {
            // Tables are static; the unit tests keep them collision-free
            log::error!("built-in option table: {}", err);
        }
    }
    registry
}

/// Creates the global option registry with Vim defaults
pub fn create_global_registry() -> SettingsRegistry {
    let mut registry = build(GLOBAL_OPTIONS);
    let term = Setting::with_default(keys::TERM, "", SettingValue::from("builtin")).read_only();
    if let Err(err) = registry.register(term) {
        log::error!("built-in option table: {}", err);
    }
    registry
}

/// Creates a buffer-local option registry with Vim defaults
pub fn create_local_registry() -> SettingsRegistry {
    build(LOCAL_OPTIONS)
}
