//! Once-only bookkeeping for reveal animations.
//!
//! Skill bars and faded-in sections animate the first time they become
//! visible and never again, no matter how often scroll or intersection
//! callbacks fire afterwards.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;
use std::hash::Hash;

/// Set of keys that have already been revealed.
#[derive(Clone, Debug)]
pub struct RevealSet<K> {
    done: HashSet<K>,
}

impl<K: Eq + Hash> Default for RevealSet<K> {
    fn default() -> Self {
        Self { done: HashSet::new() }
    }
}

impl<K: Eq + Hash> RevealSet<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key`. Returns `true` only the first time, when the caller should animate.
    pub fn claim(&mut self, key: K) -> bool {
        self.done.insert(key)
    }

    #[must_use]
    pub fn is_revealed(&self, key: &K) -> bool {
        self.done.contains(key)
    }
}

/// Extract a percentage width (`"75%"`) from an inline style attribute.
///
/// Accepts `width:75%` with any whitespace after the colon. Declarations such
/// as `min-width` or `max-width` are ignored.
#[must_use]
pub fn inline_width_percent(style: &str) -> Option<&str> {
    style.split(';').find_map(|decl| {
        let (prop, value) = decl.split_once(':')?;
        if !prop.trim().eq_ignore_ascii_case("width") {
            return None;
        }
        let value = value.trim();
        let digits = value.strip_suffix('%')?;
        (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(value)
    })
}
