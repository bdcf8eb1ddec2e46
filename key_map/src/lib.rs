#![no_std]

//! # Key Map
//!
//! Mode-scoped key remapping for the `:map` family of commands.
//!
//! ## Philosophy
//!
//! - **Vim-like remapping**: `:map` rules expand recursively, `:noremap` rules never do
//! - **Per-mode tables**: The same keys may map differently, or not at all, per mode
//! - **Always terminates**: Recursive expansion is bounded by `max_depth`
//! - **Explicit mappings**: No built-in rules; a fresh table is empty
//!
//! ## Example
//!
//! ```ignore
//! use key_map::{KeyMap, KeyMapTable, KeyMappingResult, KeyRemapMode};
//!
//! let mut table = KeyMapTable::new();
//! table.map_with_no_remap("jj", "<Esc>", KeyRemapMode::Insert);
//!
//! let result = table.get_key_mapping(&"jj".into(), KeyRemapMode::Insert);
//! assert!(result.is_mapped());
//! ```

extern crate alloc;

pub mod entry;
pub mod mode;
pub mod resolve;
pub mod table;

pub use entry::RemapEntry;
pub use mode::KeyRemapMode;
pub use resolve::KeyMappingResult;
pub use table::{KeyMapTable, DEFAULT_MAX_DEPTH};

use alloc::vec::Vec;

/// Mutation and listing of mapping rules
///
/// This is the seam the command layer talks to; key arguments are in key
/// notation (`"<C-w>j"`).
pub trait KeyMap {
    /// Adds or replaces a recursive rule; false when `from` is empty
    fn map_with_remap(&mut self, from: &str, to: &str, mode: KeyRemapMode) -> bool;

    /// Adds or replaces a non-recursive rule; false when `from` is empty
    fn map_with_no_remap(&mut self, from: &str, to: &str, mode: KeyRemapMode) -> bool;

    /// Removes the rule for `from`; false when there is none
    fn unmap(&mut self, from: &str, mode: KeyRemapMode) -> bool;

    /// Removes every rule of one mode
    fn clear(&mut self, mode: KeyRemapMode);

    /// Snapshot of one mode's rules in insertion order
    fn get_key_mappings_for_mode(&self, mode: KeyRemapMode) -> Vec<RemapEntry>;
}
