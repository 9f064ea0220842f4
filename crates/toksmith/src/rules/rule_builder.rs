//! # Rule Builder
//!
//! The keep / split / drop / strip / add primitives, and protected words.

use crate::{errors::TSResult, rules::Rule};

/// Justification for the as-is variant of a protected word.
pub const REASON_AS_IS: &str = "protected word: adds word as is, prevents splitting it.";

/// Justification for the upper-cased variant of a protected word.
pub const REASON_UPPER: &str = "protected word: adds word uppercased, prevents splitting it.";

/// Justification for the title-cased variant of a protected word.
pub const REASON_TITLE: &str = "protected word: adds word titlecased, prevents splitting it.";

/// A protected word, and the text it is rewritten to.
///
/// Built from a bare `&str` (rewritten to itself), or a `(form, replacement)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProtectedWord {
    /// The form to match.
    pub form: String,

    /// The text emitted in place of the form.
    pub replacement: String,
}

impl ProtectedWord {
    /// Create a protected word with an explicit replacement.
    pub fn new<F, R>(
        form: F,
        replacement: R,
    ) -> Self
    where
        F: Into<String>,
        R: Into<String>,
    {
        Self {
            form: form.into(),
            replacement: replacement.into(),
        }
    }

    /// Create a protected word which is rewritten to itself.
    pub fn keep<F: Into<String>>(form: F) -> Self {
        let form = form.into();
        Self {
            replacement: form.clone(),
            form,
        }
    }

    /// The as-is, upper-cased, and title-cased variants; with justifications.
    ///
    /// A variant whose form coincides with an earlier variant is skipped,
    /// so a word without case (`"'em"`, `"$"`) keeps its as-is replacement.
    pub fn variants(&self) -> Vec<Rule> {
        let candidates = [
            Rule::new(self.form.as_str(), self.replacement.as_str(), REASON_AS_IS),
            Rule::new(
                self.form.to_uppercase(),
                self.replacement.to_uppercase(),
                REASON_UPPER,
            ),
            Rule::new(
                title_case(&self.form),
                title_case(&self.replacement),
                REASON_TITLE,
            ),
        ];

        let mut variants: Vec<Rule> = Vec::with_capacity(candidates.len());
        for rule in candidates {
            if variants.iter().all(|v| v.pattern() != rule.pattern()) {
                variants.push(rule);
            }
        }
        variants
    }
}

impl From<&str> for ProtectedWord {
    fn from(form: &str) -> Self {
        Self::keep(form)
    }
}

impl From<String> for ProtectedWord {
    fn from(form: String) -> Self {
        Self::keep(form)
    }
}

impl From<&String> for ProtectedWord {
    fn from(form: &String) -> Self {
        Self::keep(form.as_str())
    }
}

impl<F, R> From<(F, R)> for ProtectedWord
where
    F: Into<String>,
    R: Into<String>,
{
    fn from((form, replacement): (F, R)) -> Self {
        Self::new(form, replacement)
    }
}

impl From<&ProtectedWord> for ProtectedWord {
    fn from(word: &ProtectedWord) -> Self {
        word.clone()
    }
}

/// Upper-case the first character; leave the rest unchanged.
pub fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Registers rewrite rules.
///
/// Implementors provide [`add_rule`](Self::add_rule);
/// the canonical replacement shapes are provided on top of it.
///
/// Every `reason` argument is optional; when `None`, a justification
/// naming the operation and the pattern is generated.
pub trait RuleBuilder {
    /// Register a rule, replacing any rule with the same pattern.
    ///
    /// Fails with [`InvalidPattern`](crate::ToksmithError::InvalidPattern)
    /// when the pattern is empty.
    fn add_rule(
        &mut self,
        rule: Rule,
    ) -> TSResult<()>;

    /// Register `pattern -> replacement`, with an explicit justification.
    fn add(
        &mut self,
        pattern: &str,
        replacement: &str,
        justification: &str,
    ) -> TSResult<()> {
        self.add_rule(Rule::new(pattern, replacement, justification))
    }

    /// Whenever `pattern` is found, leave it unchanged.
    ///
    /// Prevents shorter, overlapping rules from splitting it.
    fn keep(
        &mut self,
        pattern: &str,
        reason: Option<&str>,
    ) -> TSResult<()> {
        let reason = reason.map_or_else(
            || format!("keep: whenever it finds {pattern:?}, it will not add whitespace."),
            str::to_string,
        );
        self.add(pattern, pattern, &reason)
    }

    /// Whenever `pattern` is found, surround it by whitespace; making it a token.
    fn split(
        &mut self,
        pattern: &str,
        reason: Option<&str>,
    ) -> TSResult<()> {
        let reason = reason.map_or_else(
            || {
                format!(
                    "split: whenever it finds {pattern:?}, it will surround it by whitespace, thus creating a token."
                )
            },
            str::to_string,
        );
        self.add(pattern, &format!(" {pattern} "), &reason)
    }

    /// Whenever `pattern` is found, remove it; but leave a token boundary.
    fn drop(
        &mut self,
        pattern: &str,
        reason: Option<&str>,
    ) -> TSResult<()> {
        let reason = reason.map_or_else(
            || format!("drop: whenever it finds {pattern:?}, it will remove it but add a split."),
            str::to_string,
        );
        self.add(pattern, " ", &reason)
    }

    /// Whenever `pattern` is found, remove it without adding a token boundary.
    fn strip(
        &mut self,
        pattern: &str,
        reason: Option<&str>,
    ) -> TSResult<()> {
        let reason = reason.map_or_else(
            || format!("strip: whenever it finds {pattern:?}, it will remove it without splitting."),
            str::to_string,
        );
        self.add(pattern, "", &reason)
    }

    /// Register protected words in their as-is, upper-cased, and title-cased forms.
    ///
    /// Each entry is either a bare word (rewritten to itself),
    /// or a `(form, replacement)` pair; the replacement is cased
    /// the same way as the form.
    fn add_words<I, W>(
        &mut self,
        words: I,
    ) -> TSResult<()>
    where
        Self: Sized,
        I: IntoIterator<Item = W>,
        W: Into<ProtectedWord>,
    {
        for word in words {
            for rule in word.into().variants() {
                self.add_rule(rule)?;
            }
        }
        Ok(())
    }
}
