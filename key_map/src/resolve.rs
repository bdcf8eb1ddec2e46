//! Mapping resolution
//!
//! A `:map` rule's target is fed back through the table as if typed, so it
//! can trigger further rules; a `:noremap` rule's target is emitted as is.
//! Expansion is iterative and counts substitutions against the table's
//! `max_depth`, so self-referential rule sets always terminate.

use crate::{KeyMapTable, KeyRemapMode, RemapEntry};
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use key_input::{Key, KeyInput, KeyInputSet};

/// Outcome of looking up typed keys in one mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMappingResult {
    /// No rule starts with these keys
    NoMapping,
    /// The keys are a strict prefix of at least one rule
    NeedsMoreInput,
    /// Fully expanded replacement keys
    Mapped(KeyInputSet),
    /// Expansion exceeded `max_depth`; carries the rule's unexpanded target
    Recursive(KeyInputSet),
}

impl KeyMappingResult {
    pub fn is_mapped(&self) -> bool {
        matches!(self, KeyMappingResult::Mapped(_))
    }
}

impl KeyMapTable {
    /// Resolves typed keys against the rules of `mode`
    pub fn get_key_mapping(&self, keys: &KeyInputSet, mode: KeyRemapMode) -> KeyMappingResult {
        let Some(entry) = self.get(keys, mode) else {
            let is_prefix = !keys.is_empty()
                && self.entries(mode).iter().any(|e| {
                    e.from_keys().len() > keys.len() && e.from_keys().starts_with(keys.as_slice())
                });
            return if is_prefix {
                KeyMappingResult::NeedsMoreInput
            } else {
                KeyMappingResult::NoMapping
            };
        };

        if !entry.allow_remap() {
            return KeyMappingResult::Mapped(without_nop(entry.to_keys().iter().copied()));
        }

        match self.expand(entry, mode) {
            Some(keys) => KeyMappingResult::Mapped(keys),
            None => {
                log::debug!(
                    "mapping {} in {} mode exceeds depth {}",
                    entry.from_keys(),
                    mode,
                    self.max_depth()
                );
                KeyMappingResult::Recursive(entry.to_keys().clone())
            }
        }
    }

    /// Expands a remappable rule, or None past the depth bound
    fn expand(&self, entry: &RemapEntry, mode: KeyRemapMode) -> Option<KeyInputSet> {
        let entries = self.entries(mode);
        // Typeahead: each key carries whether it may still trigger a rule
        let mut pending: VecDeque<(KeyInput, bool)> = VecDeque::new();
        let mut output = Vec::new();
        let mut substitutions = 0usize;

        push_target(&mut pending, entry);

        while let Some(&(key, remappable)) = pending.front() {
            let next = if remappable {
                longest_match(entries, &pending)
            } else {
                None
            };
            match next {
                Some(rule) => {
                    substitutions += 1;
                    if substitutions > self.max_depth() {
                        return None;
                    }
                    pending.drain(..rule.from_keys().len());
                    push_target(&mut pending, rule);
                }
                None => {
                    output.push(key);
                    pending.pop_front();
                }
            }
        }

        Some(without_nop(output))
    }
}

/// Queues a rule's target at the head of the typeahead
///
/// When the target begins with the rule's own source, that leading copy is
/// not remappable (`:map x xy` must not loop).
fn push_target(pending: &mut VecDeque<(KeyInput, bool)>, entry: &RemapEntry) {
    let from = entry.from_keys().as_slice();
    let to = entry.to_keys().as_slice();
    let guarded = if to.starts_with(from) { from.len() } else { 0 };

    for (i, key) in to.iter().enumerate().rev() {
        pending.push_front((*key, entry.allow_remap() && i >= guarded));
    }
}

/// Longest rule whose source matches remappable keys at the typeahead head
fn longest_match<'a>(
    entries: &'a [RemapEntry],
    pending: &VecDeque<(KeyInput, bool)>,
) -> Option<&'a RemapEntry> {
    entries
        .iter()
        .filter(|e| {
            let from = e.from_keys();
            from.len() <= pending.len()
                && from
                    .iter()
                    .zip(pending.iter())
                    .all(|(want, (have, remappable))| *remappable && want == have)
        })
        .max_by_key(|e| e.from_keys().len())
}

fn without_nop(keys: impl IntoIterator<Item = KeyInput>) -> KeyInputSet {
    keys.into_iter().filter(|k| k.key != Key::Nop).collect()
}
