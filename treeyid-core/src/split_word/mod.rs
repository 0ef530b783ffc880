//! Splitting a merged script form back into its parts
//!
//! Rules are kept per merged tag and tried in registration order: fixed
//! spellings from the simple-split table, then the generalized patterns, then
//! the apostrophe patterns. The first rule that matches the word exactly once
//! wins; its substitution is split on whitespace.

mod apostrophe;
pub mod constants;
mod generalized;
mod simple;

use crate::error::{CoreError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

static BUILTIN: OnceLock<SplitRules> = OnceLock::new();

/// Split a script form with the built-in rules
///
/// The rules are built on first use; a failure is returned and retried on the
/// next call.
pub fn split_word(pos: &str, script: &str) -> Result<Option<Vec<String>>> {
    let rules = match BUILTIN.get() {
        Some(rules) => rules,
        None => {
            let rules = SplitRules::builtin()?;
            BUILTIN.get_or_init(|| rules)
        }
    };
    Ok(rules.split_word(pos, script))
}

/// A pattern and the substitution template applied when it matches
#[derive(Debug, Clone)]
pub struct SplitRule {
    pattern: Regex,
    template: String,
}

impl SplitRule {
    /// Substitute the single match, or `None` when the pattern does not
    /// match exactly once
    fn apply(&self, script: &str) -> Option<String> {
        let mut matches = self.pattern.captures_iter(script);
        let caps = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        let whole = caps.get(0)?;

        let mut out = String::with_capacity(script.len() + 4);
        out.push_str(&script[..whole.start()]);
        caps.expand(&self.template, &mut out);
        out.push_str(&script[whole.end()..]);
        Some(out)
    }
}

/// Ordered split rules keyed by merged tag
#[derive(Debug, Clone, Default)]
pub struct SplitRules {
    by_tag: HashMap<String, Vec<SplitRule>>,
}

impl SplitRules {
    /// Rules with the embedded simple-split table
    pub fn builtin() -> Result<Self> {
        Self::with_simple_splits(include_str!("../../data/simple-splits.tsv"))
    }

    /// Rules with a caller-supplied simple-split table
    pub fn with_simple_splits(content: &str) -> Result<Self> {
        let mut rules = Self::default();
        simple::register(&mut rules, content)?;
        generalized::register(&mut rules)?;
        apostrophe::register(&mut rules)?;
        log::debug!(
            "split rules: {} tags, {} patterns",
            rules.by_tag.len(),
            rules.by_tag.values().map(Vec::len).sum::<usize>()
        );
        Ok(rules)
    }

    /// Append a rule for `pos`; it is tried after every rule added before it
    pub fn add(&mut self, pos: &str, pattern: &str, template: &str) -> Result<()> {
        let pattern = Regex::new(pattern).map_err(|source| CoreError::Pattern {
            pos: pos.to_string(),
            source,
        })?;
        self.by_tag.entry(pos.to_string()).or_default().push(SplitRule {
            pattern,
            template: template.to_string(),
        });
        Ok(())
    }

    /// Parts of `script` for a leaf tagged `pos`, or `None` when no rule for
    /// the tag applies
    pub fn split_word(&self, pos: &str, script: &str) -> Option<Vec<String>> {
        let rules = self.by_tag.get(pos)?;
        rules.iter().find_map(|rule| {
            rule.apply(script)
                .map(|out| out.split_whitespace().map(str::to_string).collect())
        })
    }

    pub fn has_rules_for(&self, pos: &str) -> bool {
        self.by_tag.contains_key(pos)
    }
}
