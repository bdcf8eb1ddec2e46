//! Per-mode mapping table

use crate::{KeyMap, KeyRemapMode, RemapEntry};
use alloc::vec::Vec;
use key_input::KeyInputSet;

/// Default recursion bound, Vim's `maxmapdepth`
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Mapping table owning every rule of one session
///
/// Within a mode `from_keys` is unique; entries keep insertion order and a
/// replacing insert keeps the original slot.
#[derive(Debug, Clone)]
pub struct KeyMapTable {
    modes: [Vec<RemapEntry>; KeyRemapMode::COUNT],
    max_depth: usize,
}

impl KeyMapTable {
    /// Creates an empty table with the default recursion bound
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Creates an empty table with a custom recursion bound
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            modes: Default::default(),
            max_depth,
        }
    }

    /// Maximum number of substitutions one resolution may perform
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    /// Entries of one mode in insertion order
    pub fn entries(&self, mode: KeyRemapMode) -> &[RemapEntry] {
        &self.modes[mode.index()]
    }

    /// Exact lookup of a rule
    pub fn get(&self, from: &KeyInputSet, mode: KeyRemapMode) -> Option<&RemapEntry> {
        self.entries(mode).iter().find(|e| e.from_keys() == from)
    }

    /// Number of rules across all modes
    pub fn len(&self) -> usize {
        self.modes.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.iter().all(Vec::is_empty)
    }

    /// Inserts or replaces a rule; false when `from` is empty
    pub fn insert(&mut self, entry: RemapEntry) -> bool {
        if entry.from_keys().is_empty() {
            log::debug!("map: empty source sequence in {} mode", entry.mode());
            return false;
        }
        log::trace!(
            "map {} {} -> {} (remap: {})",
            entry.mode(),
            entry.from_keys(),
            entry.to_keys(),
            entry.allow_remap()
        );
        let entries = &mut self.modes[entry.mode().index()];
        match entries.iter_mut().find(|e| e.from_keys() == entry.from_keys()) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
        true
    }

    /// Removes a rule, returning it
    pub fn remove(&mut self, from: &KeyInputSet, mode: KeyRemapMode) -> Option<RemapEntry> {
        let entries = &mut self.modes[mode.index()];
        let slot = entries.iter().position(|e| e.from_keys() == from)?;
        log::trace!("unmap {} {}", mode, from);
        Some(entries.remove(slot))
    }

    /// Removes every rule of every mode
    pub fn clear_all(&mut self) {
        for entries in &mut self.modes {
            entries.clear();
        }
    }

    fn map(&mut self, from: &str, to: &str, mode: KeyRemapMode, allow_remap: bool) -> bool {
        let entry = RemapEntry::new(
            mode,
            KeyInputSet::from_notation(from),
            KeyInputSet::from_notation(to),
            allow_remap,
        );
        self.insert(entry)
    }
}

impl KeyMap for KeyMapTable {
    fn map_with_remap(&mut self, from: &str, to: &str, mode: KeyRemapMode) -> bool {
        self.map(from, to, mode, true)
    }

    fn map_with_no_remap(&mut self, from: &str, to: &str, mode: KeyRemapMode) -> bool {
        self.map(from, to, mode, false)
    }

    fn unmap(&mut self, from: &str, mode: KeyRemapMode) -> bool {
        let removed = self.remove(&KeyInputSet::from_notation(from), mode).is_some();
        if !removed {
            log::debug!("unmap: no mapping for {:?} in {} mode", from, mode);
        }
        removed
    }

    fn clear(&mut self, mode: KeyRemapMode) {
        log::trace!("mapclear {}", mode);
        self.modes[mode.index()].clear();
    }

    fn get_key_mappings_for_mode(&self, mode: KeyRemapMode) -> Vec<RemapEntry> {
        self.entries(mode).to_vec()
    }
}

impl Default for KeyMapTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_creation() {
        let table = KeyMapTable::new();
        assert!(table.is_empty());
        assert_eq!(table.max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_map_with_remap() {
        let mut table = KeyMapTable::new();
        assert!(table.map_with_remap("foo", "bar", KeyRemapMode::Insert));

        let entry = table.get(&"foo".into(), KeyRemapMode::Insert).unwrap();
        assert_eq!(entry.to_keys(), &KeyInputSet::from_notation("bar"));
        assert!(entry.allow_remap());
        assert!(table.get(&"foo".into(), KeyRemapMode::Normal).is_none());
    }

    #[test]
    fn test_map_with_no_remap() {
        let mut table = KeyMapTable::new();
        assert!(table.map_with_no_remap("a", "b", KeyRemapMode::Normal));
        let entry = table.get(&"a".into(), KeyRemapMode::Normal).unwrap();
        assert!(!entry.allow_remap());
    }

    #[test]
    fn test_map_rejects_empty_source() {
        let mut table = KeyMapTable::new();
        assert!(!table.map_with_remap("", "b", KeyRemapMode::Normal));
        assert!(!table.map_with_no_remap("", "b", KeyRemapMode::Normal));
        assert!(table.is_empty());
    }

    #[test]
    fn test_map_allows_empty_target() {
        let mut table = KeyMapTable::new();
        assert!(table.map_with_no_remap("a", "", KeyRemapMode::Normal));
        assert!(table
            .get(&"a".into(), KeyRemapMode::Normal)
            .unwrap()
            .to_keys()
            .is_empty());
    }

    #[test]
    fn test_map_replaces_in_place() {
        let mut table = KeyMapTable::new();
        table.map_with_remap("a", "1", KeyRemapMode::Normal);
        table.map_with_remap("b", "2", KeyRemapMode::Normal);
        table.map_with_no_remap("a", "3", KeyRemapMode::Normal);

        let entries = table.get_key_mappings_for_mode(KeyRemapMode::Normal);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].from_keys(), &KeyInputSet::from_notation("a"));
        assert_eq!(entries[0].to_keys(), &KeyInputSet::from_notation("3"));
        assert!(!entries[0].allow_remap());
    }

    #[test]
    fn test_notation_variants_share_a_slot() {
        let mut table = KeyMapTable::new();
        table.map_with_remap("<C-A>", "x", KeyRemapMode::Normal);
        table.map_with_remap("<c-a>", "y", KeyRemapMode::Normal);
        assert_eq!(table.len(), 1);
        assert!(table.unmap("<C-a>", KeyRemapMode::Normal));
    }

    #[test]
    fn test_unmap() {
        let mut table = KeyMapTable::new();
        table.map_with_no_remap("a", "b", KeyRemapMode::Insert);

        assert!(!table.unmap("a", KeyRemapMode::Normal));
        assert!(table.unmap("a", KeyRemapMode::Insert));
        assert!(!table.unmap("a", KeyRemapMode::Insert));
        assert!(!table.unmap("h", KeyRemapMode::Insert));
    }

    #[test]
    fn test_modes_are_independent() {
        let mut table = KeyMapTable::new();
        table.map_with_remap("a", "1", KeyRemapMode::Normal);
        table.map_with_remap("a", "2", KeyRemapMode::Visual);

        assert_eq!(
            table.get(&"a".into(), KeyRemapMode::Normal).unwrap().to_keys(),
            &KeyInputSet::from_notation("1")
        );
        assert_eq!(
            table.get(&"a".into(), KeyRemapMode::Visual).unwrap().to_keys(),
            &KeyInputSet::from_notation("2")
        );
    }

    #[test]
    fn test_clear_and_clear_all() {
        let mut table = KeyMapTable::new();
        table.map_with_remap("a", "1", KeyRemapMode::Normal);
        table.map_with_remap("a", "2", KeyRemapMode::Insert);

        table.clear(KeyRemapMode::Normal);
        assert!(table.entries(KeyRemapMode::Normal).is_empty());
        assert_eq!(table.len(), 1);

        table.clear_all();
        assert!(table.is_empty());
    }

    #[test]
    fn test_entry_serialization() {
        let mut table = KeyMapTable::new();
        table.map_with_no_remap("jj", "<Esc>", KeyRemapMode::Insert);
        let entry = table.get(&"jj".into(), KeyRemapMode::Insert).unwrap();

        let json = serde_json::to_string(entry).unwrap();
        let back: RemapEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, entry);
    }
}
