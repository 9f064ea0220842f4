//! # Rule Explanations

use core::fmt;

use crate::rules::{PatternStore, Rule};

/// The message for an explanation which found no rules.
pub const NO_EXPLANATION: &str = "No explanation, meaning there is nothing specified for the input";

/// Why a single pattern is rewritten the way it is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleExplanation {
    /// The registered pattern.
    pub pattern: String,

    /// The replacement emitted for the pattern.
    pub replacement: String,

    /// The reason the rule exists.
    pub justification: String,
}

impl From<&Rule> for RuleExplanation {
    fn from(rule: &Rule) -> Self {
        Self {
            pattern: rule.pattern().to_string(),
            replacement: rule.replacement().to_string(),
            justification: rule.justification().to_string(),
        }
    }
}

/// The result of [`Tokenizer::explain`](crate::Tokenizer::explain).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Explanation {
    /// No registered pattern contains the input.
    Nothing,

    /// Every rule whose pattern contains the input; sorted by pattern.
    Rules(Vec<RuleExplanation>),
}

impl Explanation {
    /// Explain every rule in `store` whose pattern contains `substring`.
    pub fn from_store(
        store: &PatternStore,
        substring: &str,
    ) -> Self {
        let mut rules: Vec<RuleExplanation> = store
            .lookup_containing(substring)
            .into_iter()
            .map(RuleExplanation::from)
            .collect();

        if rules.is_empty() {
            return Explanation::Nothing;
        }
        rules.sort_by(|a, b| a.pattern.cmp(&b.pattern));
        Explanation::Rules(rules)
    }

    /// Did the explanation find nothing?
    pub fn is_nothing(&self) -> bool {
        matches!(self, Explanation::Nothing)
    }

    /// The explained rules; empty for [`Explanation::Nothing`].
    pub fn rules(&self) -> &[RuleExplanation] {
        match self {
            Explanation::Nothing => &[],
            Explanation::Rules(rules) => rules,
        }
    }

    /// The explanation for exactly `pattern`, if present.
    pub fn get(
        &self,
        pattern: &str,
    ) -> Option<&RuleExplanation> {
        self.rules().iter().find(|r| r.pattern == pattern)
    }
}

impl fmt::Display for Explanation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Explanation::Nothing => write!(f, "{NO_EXPLANATION}"),
            Explanation::Rules(rules) => {
                for (idx, rule) in rules.iter().enumerate() {
                    if idx > 0 {
                        writeln!(f)?;
                    }
                    write!(
                        f,
                        "{:?} -> {:?}: {}",
                        rule.pattern, rule.replacement, rule.justification
                    )?;
                }
                Ok(())
            }
        }
    }
}
