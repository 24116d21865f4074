//! The flat boolean mini-language of `condition` and `if` attributes.
use log::debug;
use std::collections::HashSet;

/// The set of enabled condition names. Names are case-insensitive and are
/// stored lower-cased.
#[derive(Debug, Clone, Default)]
pub struct ConditionSet {
    flags: HashSet<String>,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self, name: &str) {
        debug!("Enabled: {}", name);
        self.flags.insert(name.to_ascii_lowercase());
    }

    /// Returns whether the name was actually enabled.
    pub fn disable(&mut self, name: &str) -> bool {
        debug!("Disabled: {}", name);
        self.flags.remove(&name.to_ascii_lowercase())
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.flags.contains(&name.to_ascii_lowercase())
    }

    /// Evaluates a flat boolean expression over the enabled set.
    ///
    /// An empty or all-whitespace expression is true. `|` and `&` split at
    /// their *first* occurrence and recurse on both halves (`|` is checked
    /// before `&`), a leading `!` negates the rest, and anything else is a
    /// membership test on the trimmed, lower-cased name. There is no
    /// grouping. The greedy first-split means `a&b|c` reads as
    /// `a&b OR c` only for the `|` found first; chained expressions are
    /// re-split the same way on the right, not parsed associatively.
    /// Templates rely on this exact behavior.
    ///
    /// Never fails: an unknown name is simply not in the set.
    pub fn evaluate(&self, expression: &str) -> bool {
        if expression.trim().is_empty() {
            return true;
        }
        if let Some((left, right)) = expression.split_once('|') {
            return self.evaluate(left) || self.evaluate(right);
        }
        if let Some((left, right)) = expression.split_once('&') {
            return self.evaluate(left) && self.evaluate(right);
        }
        let trimmed = expression.trim();
        if let Some(rest) = trimmed.strip_prefix('!') {
            return !self.evaluate(rest);
        }
        self.flags.contains(&trimmed.to_ascii_lowercase())
    }
}
