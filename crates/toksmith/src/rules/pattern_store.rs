//! # Pattern Store

use crate::{
    errors::{TSResult, ToksmithError},
    rules::{Rule, RuleBuilder},
    types::{TSHashMap, hash_map_new},
};

/// The set of registered [`Rule`]s, keyed by pattern.
///
/// Patterns are unique; inserting a pattern which is already present
/// replaces the old rule (last write wins). Each rule carries its own
/// justification, so removing a pattern removes both.
///
/// The store is plain data; scanning happens on a
/// [`RewriteEngine`](crate::rewrite::RewriteEngine) compiled from it.
#[derive(Debug, Clone, Default)]
pub struct PatternStore {
    /// Rules, in slot order.
    rules: Vec<Rule>,

    /// `{ pattern -> slot }` index into `rules`.
    index: TSHashMap<String, usize>,
}

impl PartialEq for PatternStore {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.len() == other.len() && self.iter().all(|rule| other.get(rule.pattern()) == Some(rule))
    }
}

impl Eq for PatternStore {}

impl PatternStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            index: hash_map_new(),
        }
    }

    /// The number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Is the store empty?
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over all rules; in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Get the rules as a slice; in no particular order.
    pub fn as_slice(&self) -> &[Rule] {
        &self.rules
    }

    /// Get the rule for a pattern, if any.
    pub fn get(
        &self,
        pattern: &str,
    ) -> Option<&Rule> {
        self.index.get(pattern).map(|&slot| &self.rules[slot])
    }

    /// Is there a rule for this pattern?
    pub fn contains(
        &self,
        pattern: &str,
    ) -> bool {
        self.index.contains_key(pattern)
    }

    /// Register a rule, replacing any rule with the same pattern.
    ///
    /// ## Returns
    /// * `Ok(Some(old))` if a rule was replaced,
    /// * `Ok(None)` if the pattern was new,
    /// * `Err(ToksmithError::InvalidPattern)` if the pattern is empty.
    pub fn insert(
        &mut self,
        rule: Rule,
    ) -> TSResult<Option<Rule>> {
        if rule.pattern().is_empty() {
            return Err(ToksmithError::InvalidPattern);
        }

        match self.index.get(rule.pattern()) {
            Some(&slot) => Ok(Some(core::mem::replace(&mut self.rules[slot], rule))),
            None => {
                self.index.insert(rule.pattern().to_string(), self.rules.len());
                self.rules.push(rule);
                Ok(None)
            }
        }
    }

    /// Remove the rule for a pattern.
    ///
    /// Removing a pattern which is not present is a no-op.
    ///
    /// ## Returns
    /// The removed rule, or `None` if the pattern was not present.
    pub fn remove(
        &mut self,
        pattern: &str,
    ) -> Option<Rule> {
        let slot = self.index.remove(pattern)?;
        let rule = self.rules.swap_remove(slot);

        // The last rule moved into `slot`.
        if let Some(moved) = self.rules.get(slot) {
            self.index.insert(moved.pattern().to_string(), slot);
        }

        Some(rule)
    }

    /// Every rule whose pattern contains `substring`; in no particular order.
    pub fn lookup_containing(
        &self,
        substring: &str,
    ) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| rule.pattern().contains(substring))
            .collect()
    }
}

impl RuleBuilder for PatternStore {
    fn add_rule(
        &mut self,
        rule: Rule,
    ) -> TSResult<()> {
        self.insert(rule).map(|_| ())
    }
}

impl FromIterator<Rule> for PatternStore {
    /// Collect rules into a store; later duplicates win.
    ///
    /// Rules with empty patterns are skipped.
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut store = Self::new();
        for rule in iter {
            if !rule.pattern().is_empty() {
                let _ = store.insert(rule);
            }
        }
        store
    }
}
