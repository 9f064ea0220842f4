//! # Rewrite Engine

use core::ops::Range;

use aho_corasick::{AhoCorasick, Input, MatchKind};

use crate::{
    errors::TSResult,
    rewrite::{Entity, Rewrite},
    rules::{MatchExtent, PatternStore, Rule},
};

/// Span reference for [`RewriteEngine::for_each_span`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanSpan<'a> {
    /// Text copied through unchanged.
    Literal(Range<usize>),

    /// Text replaced by a rule.
    Rewrite {
        /// The matched range; for [`MatchExtent::UntilWhitespace`] rules
        /// this extends past the pattern.
        range: Range<usize>,

        /// The rule which matched.
        rule: &'a Rule,
    },
}

impl ScanSpan<'_> {
    /// The byte range of the span.
    pub fn range(&self) -> Range<usize> {
        match self {
            ScanSpan::Literal(range) => range.clone(),
            ScanSpan::Rewrite { range, .. } => range.clone(),
        }
    }
}

/// A compiled, immutable snapshot of a [`PatternStore`].
///
/// Scanning is longest-match-first, earliest-start-first:
/// at the current position, find the leftmost offset where any pattern
/// matches; among the patterns matching there, take the longest.
/// Skipped text is copied literally, the match is replaced,
/// and the scan resumes after the match.
///
/// Every input byte is consumed exactly once; either as a literal copy,
/// or as part of exactly one match. Two distinct patterns of the same
/// length can't both match at one offset, so resolution never ties.
///
/// Mutating the store does not affect an already compiled engine.
#[derive(Debug, Clone)]
pub struct RewriteEngine {
    /// Leftmost-longest automaton; pattern ids index `rules`.
    automaton: AhoCorasick,

    /// Rule snapshot, in automaton pattern order.
    rules: Vec<Rule>,
}

impl RewriteEngine {
    /// Compile an engine from the current rules of a store.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(store)))]
    pub fn compile(store: &PatternStore) -> TSResult<Self> {
        let rules = store.as_slice().to_vec();

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(rules.iter().map(|rule| rule.pattern()))?;

        log::trace!(
            "compiled rewrite engine: {} patterns, {} bytes",
            rules.len(),
            automaton.memory_usage()
        );

        Ok(Self { automaton, rules })
    }

    /// The number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Is the engine empty?
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The compiled rule snapshot.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Iterate over the spans of a scan, in order.
    ///
    /// The visited ranges are contiguous, non-empty, and cover `text` exactly.
    pub fn for_each_span<'a, F>(
        &'a self,
        text: &str,
        f: &mut F,
    ) where
        F: FnMut(ScanSpan<'a>),
    {
        let mut pos = 0;

        while pos < text.len() {
            let Some(m) = self.automaton.find(Input::new(text).span(pos..text.len())) else {
                break;
            };

            if pos < m.start() {
                f(ScanSpan::Literal(pos..m.start()));
            }

            let rule = &self.rules[m.pattern().as_usize()];
            let end = match rule.extent() {
                MatchExtent::Pattern => m.end(),
                MatchExtent::UntilWhitespace => text[m.end()..]
                    .find(char::is_whitespace)
                    .map_or(text.len(), |offset| m.end() + offset),
            };

            f(ScanSpan::Rewrite {
                range: m.start()..end,
                rule,
            });
            pos = end;
        }

        if pos < text.len() {
            f(ScanSpan::Literal(pos..text.len()));
        }
    }

    /// Split `text` into its scan spans.
    pub fn scan_spans(
        &self,
        text: &str,
    ) -> Vec<ScanSpan<'_>> {
        let mut spans = Vec::new();
        self.for_each_span(text, &mut |span| spans.push(span));
        spans
    }

    /// Rewrite `text`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, text)))]
    pub fn rewrite(
        &self,
        text: &str,
    ) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 2);
        self.for_each_span(text, &mut |span| match span {
            ScanSpan::Literal(range) => out.push_str(&text[range]),
            ScanSpan::Rewrite { range, rule } => {
                push_replacement(&mut out, text, &range, rule);
            }
        });
        out
    }

    /// Rewrite `text`, and report the matched spans.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, text)))]
    pub fn rewrite_with_entities(
        &self,
        text: &str,
    ) -> Rewrite {
        let mut out = String::with_capacity(text.len() + text.len() / 2);
        let mut entities = Vec::new();

        self.for_each_span(text, &mut |span| match span {
            ScanSpan::Literal(range) => out.push_str(&text[range]),
            ScanSpan::Rewrite { range, rule } => {
                let start = out.len();
                push_replacement(&mut out, text, &range, rule);
                entities.push(Entity {
                    replacement: out[start..].to_string(),
                    pattern: rule.pattern().to_string(),
                    range,
                });
            }
        });

        Rewrite {
            text: out,
            entities,
        }
    }
}

/// Append the output for a matched span.
fn push_replacement(
    out: &mut String,
    text: &str,
    range: &Range<usize>,
    rule: &Rule,
) {
    out.push_str(rule.replacement());

    // Any extension past the pattern is copied verbatim.
    let tail = range.start + rule.pattern().len();
    out.push_str(&text[tail..range.end]);
}
