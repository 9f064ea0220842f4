//! # Tokenizer Façade

use core::ops::Range;
use std::sync::Arc;

use crate::{
    errors::TSResult,
    rewrite::{Entity, RewriteEngine},
    rules::{PatternStore, ProtectedWord, Rule, RuleBuilder},
    tokenizer::{Explanation, TokenizerOptions, default_rules::SENTENCE_TERMINATORS},
};

/// Rule-driven word and sentence tokenizer.
///
/// Combines:
///  * a [`PatternStore`] of the current rules, and
///  * a [`RewriteEngine`] compiled from it.
///
/// Tokenization takes `&self` and never fails. Rule mutation takes `&mut self`,
/// and recompiles the engine before returning; so every mutation applies to all
/// later calls.
///
/// ## Style Hints
///
/// Instance names should prefer `tokenizer`.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    eol: String,
    parallel: bool,
    store: PatternStore,
    engine: Arc<RewriteEngine>,
}

impl Tokenizer {
    /// Build a tokenizer with the default rule set described by `options`.
    ///
    /// ## Returns
    /// * `Err(ToksmithError::Configuration)` for inconsistent options,
    /// * `Err(ToksmithError::InvalidPattern)` if a configured word,
    ///   abbreviation, or currency is empty.
    pub fn new(options: &TokenizerOptions) -> TSResult<Self> {
        options.validate()?;

        let mut store = PatternStore::new();
        super::default_rules::assemble_default_rules(options, &mut store)?;
        log::debug!("assembled {} tokenizer rules", store.len());

        let mut tokenizer = Self::from_store(store, options.eol.clone())?;
        tokenizer.parallel = options.parallel;
        Ok(tokenizer)
    }

    /// Build a tokenizer over an explicit rule store.
    ///
    /// ## Arguments
    /// * `store` - the rules.
    /// * `eol` - the sentence boundary marker the rules insert.
    pub fn from_store<S: Into<String>>(
        store: PatternStore,
        eol: S,
    ) -> TSResult<Self> {
        let engine = RewriteEngine::compile(&store)?.into();
        Ok(Self {
            eol: eol.into(),
            parallel: false,
            store,
            engine,
        })
    }

    /// Build a tokenizer with no rules; it splits on whitespace only.
    pub fn blank() -> TSResult<Self> {
        Self::from_store(PatternStore::new(), "\n")
    }

    /// The current rules.
    pub fn rules(&self) -> &PatternStore {
        &self.store
    }

    /// The compiled engine.
    pub fn engine(&self) -> &Arc<RewriteEngine> {
        &self.engine
    }

    /// The sentence boundary marker.
    pub fn eol(&self) -> &str {
        &self.eol
    }

    /// Gets the configured parallelism value.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded batch implementations.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Apply a batch of edits to the rules, then recompile once.
    ///
    /// The engine is recompiled even if `edit` fails part way;
    /// edits made before the failure stay applied.
    pub fn update<F, R>(
        &mut self,
        edit: F,
    ) -> TSResult<R>
    where
        F: FnOnce(&mut PatternStore) -> TSResult<R>,
    {
        let result = edit(&mut self.store);
        self.engine = RewriteEngine::compile(&self.store)?.into();
        result
    }

    /// Remove the rule for a pattern.
    ///
    /// ## Returns
    /// The removed rule, or `None` if no rule existed; in which case nothing changes.
    pub fn remove(
        &mut self,
        pattern: &str,
    ) -> TSResult<Option<Rule>> {
        if !self.store.contains(pattern) {
            log::debug!("no rule to remove for {pattern:?}");
            return Ok(None);
        }
        log::trace!("removing rule for {pattern:?}");
        self.update(|store| Ok(store.remove(pattern)))
    }

    /// Explain every rule whose pattern contains `substring`.
    pub fn explain(
        &self,
        substring: &str,
    ) -> Explanation {
        Explanation::from_store(&self.store, substring)
    }

    /// Split text into word tokens.
    ///
    /// The text is scanned with a leading space, so rules anchored on a
    /// preceding boundary (initials such as `" J."`) also match at the start.
    /// The eol marker inserted by the rules separates words like whitespace,
    /// and is never returned as a token.
    pub fn word_tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.split_words(&self.engine.rewrite(&padded(text)))
    }

    /// Split text into word tokens, lower-casing every token.
    pub fn word_tokenize_lowercase(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.word_tokenize(text)
            .into_iter()
            .map(|token| token.to_lowercase())
            .collect()
    }

    /// Split text into word tokens, and report the matched entities.
    ///
    /// Entity ranges are byte offsets into `text`; a match which includes the
    /// synthetic leading space starts at `0`. Such an entity keeps its
    /// registered pattern, so `pattern` (`" J."`) is one byte longer than
    /// [`Entity::matched`] (`"J."`).
    pub fn word_tokenize_with_entities(
        &self,
        text: &str,
    ) -> (Vec<String>, Vec<Entity>) {
        let rewrite = self.engine.rewrite_with_entities(&padded(text));

        let entities = rewrite
            .entities
            .into_iter()
            .map(|entity| Entity {
                range: unpad_range(entity.range.clone()),
                ..entity
            })
            .collect();

        (self.split_words(&rewrite.text), entities)
    }

    /// Split rewritten text on whitespace and the eol marker.
    fn split_words(
        &self,
        text: &str,
    ) -> Vec<String> {
        text.split(self.eol.as_str())
            .flat_map(str::split_whitespace)
            .map(str::to_string)
            .collect()
    }

    /// Split text into sentences of word tokens.
    ///
    /// The text is split on the eol marker the punctuation rules insert;
    /// a sentence's terminating punctuation token (`.`, `!!!`, `?`) is not
    /// part of the sentence, and empty sentences are discarded.
    pub fn sent_tokenize(
        &self,
        text: &str,
    ) -> Vec<Vec<String>> {
        self.engine
            .rewrite(text)
            .split(self.eol.as_str())
            .filter_map(|segment| {
                let mut sentence = split_tokens(segment);
                if sentence.last().is_some_and(|token| is_terminator(token)) {
                    sentence.pop();
                }
                (!sentence.is_empty()).then_some(sentence)
            })
            .collect()
    }

    /// Split text into word tokens, with an eol token between sentences.
    ///
    /// There is no eol token after the last sentence.
    pub fn word_newlined_tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        let sentences = self.sent_tokenize(text);

        let mut tokens = Vec::with_capacity(sentences.iter().map(|s| s.len() + 1).sum());
        for (idx, sentence) in sentences.into_iter().enumerate() {
            if idx > 0 {
                tokens.push(self.eol.clone());
            }
            tokens.extend(sentence);
        }
        tokens
    }

    /// Batch version of [`Self::word_tokenize`].
    ///
    /// Threaded when the `rayon` feature is enabled and [`Self::parallel`] is set.
    pub fn word_tokenize_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<String>> {
        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                if self.parallel {
                    use rayon::prelude::*;
                    batch.par_iter().map(|text| self.word_tokenize(text)).collect()
                } else {
                    batch.iter().map(|text| self.word_tokenize(text)).collect()
                }
            } else {
                batch.iter().map(|text| self.word_tokenize(text)).collect()
            }
        }
    }

    /// Batch version of [`Self::sent_tokenize`].
    ///
    /// Threaded when the `rayon` feature is enabled and [`Self::parallel`] is set.
    pub fn sent_tokenize_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<Vec<String>>> {
        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                if self.parallel {
                    use rayon::prelude::*;
                    batch.par_iter().map(|text| self.sent_tokenize(text)).collect()
                } else {
                    batch.iter().map(|text| self.sent_tokenize(text)).collect()
                }
            } else {
                batch.iter().map(|text| self.sent_tokenize(text)).collect()
            }
        }
    }
}

impl RuleBuilder for Tokenizer {
    fn add_rule(
        &mut self,
        rule: Rule,
    ) -> TSResult<()> {
        self.update(|store| store.add_rule(rule))
    }

    fn add_words<I, W>(
        &mut self,
        words: I,
    ) -> TSResult<()>
    where
        Self: Sized,
        I: IntoIterator<Item = W>,
        W: Into<ProtectedWord>,
    {
        self.update(|store| store.add_words(words))
    }
}

/// Build the stock tokenizer: default options, with URL handling enabled.
pub fn default_tokenizer() -> TSResult<Tokenizer> {
    TokenizerOptions::default().with_handle_http(true).build()
}

fn padded(text: &str) -> String {
    let mut buf = String::with_capacity(text.len() + 1);
    buf.push(' ');
    buf.push_str(text);
    buf
}

/// Map a range over the padded text onto the caller's text.
fn unpad_range(range: Range<usize>) -> Range<usize> {
    range.start.saturating_sub(1)..range.end.saturating_sub(1)
}

fn split_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Is this token only sentence-terminating punctuation?
fn is_terminator(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| SENTENCE_TERMINATORS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::ToksmithError,
        types::{check_is_send, check_is_sync},
    };

    fn tokenizer() -> Tokenizer {
        TokenizerOptions::default().build().unwrap()
    }

    fn words(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_send_sync() {
        let tokenizer = tokenizer();
        check_is_send(&tokenizer);
        check_is_sync(&tokenizer);
    }

    #[test]
    fn test_word_tokenize() {
        let tokenizer = tokenizer();

        assert_eq!(
            tokenizer.word_tokenize("Hello, world!"),
            words(&["Hello", ",", "world", "!"])
        );
        assert_eq!(tokenizer.word_tokenize("wait!!!"), words(&["wait", "!!!"]));
        assert_eq!(tokenizer.word_tokenize("wait!!!!!"), words(&["wait", "!!!"]));
        assert_eq!(tokenizer.word_tokenize("Mr. Smith"), words(&["Mr.", "Smith"]));
        assert_eq!(
            tokenizer.word_tokenize("I wouldn't do that"),
            words(&["I", "would", "not", "do", "that"])
        );
        assert_eq!(
            tokenizer.word_tokenize("It costs $5.00 or 3,50."),
            words(&["It", "costs", "$", "5.00", "or", "3,50."])
        );
        assert_eq!(
            tokenizer.word_tokenize("J. R. R. Tolkien"),
            words(&["J.", "R.", "R.", "Tolkien"])
        );
        assert_eq!(
            tokenizer.word_tokenize("\"quoted\" - dash"),
            words(&["\"", "quoted", "\"", "-", "dash"])
        );

        assert!(tokenizer.word_tokenize("").is_empty());
        assert!(tokenizer.word_tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn test_word_tokenize_lowercase() {
        let tokenizer = tokenizer();
        assert_eq!(
            tokenizer.word_tokenize_lowercase("Hello WORLD."),
            words(&["hello", "world", "."])
        );
    }

    #[test]
    fn test_word_tokenize_with_entities() {
        let tokenizer = tokenizer();
        let text = "J. said no, twice";

        let (tokens, entities) = tokenizer.word_tokenize_with_entities(text);
        assert_eq!(tokens, words(&["J.", "said", "no", ",", "twice"]));

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].pattern, " J.");
        assert_eq!(entities[0].range, 0..2);
        assert_eq!(entities[0].matched(text), "J.");
        assert_eq!(entities[0].pattern.trim_start(), entities[0].matched(text));
        assert_eq!(entities[1].pattern, ",");
        assert_eq!(entities[1].replacement, " , ");
        assert_eq!(entities[1].matched(text), ",");
    }

    #[test]
    fn test_sent_tokenize() {
        let tokenizer = tokenizer();

        assert_eq!(
            tokenizer.sent_tokenize("Hello world. Bye now."),
            vec![words(&["Hello", "world"]), words(&["Bye", "now"])]
        );
        assert_eq!(
            tokenizer.sent_tokenize("Really?? Yes!\n\n\nNew paragraph"),
            vec![
                words(&["Really"]),
                words(&["Yes"]),
                words(&["New", "paragraph"]),
            ]
        );
        assert_eq!(
            tokenizer.sent_tokenize("Wait... what, Mr. Smith?"),
            vec![words(&["Wait", "...", "what", ",", "Mr.", "Smith"])]
        );

        assert!(tokenizer.sent_tokenize("").is_empty());
        assert!(tokenizer.sent_tokenize("!!!").is_empty());
    }

    #[test]
    fn test_custom_eol() {
        let tokenizer = TokenizerOptions::default()
            .with_eol("<EOS>")
            .build()
            .unwrap();

        assert_eq!(
            tokenizer.sent_tokenize("One. Two\nThree"),
            vec![words(&["One"]), words(&["Two"]), words(&["Three"])]
        );
        assert_eq!(
            tokenizer.word_newlined_tokenize("One. Two"),
            words(&["One", "<EOS>", "Two"])
        );

        // The marker separates words, but is never a word itself.
        assert_eq!(tokenizer.word_tokenize("One. Two"), words(&["One", ".", "Two"]));
        assert_eq!(
            tokenizer.word_tokenize("One!!\nTwo?"),
            words(&["One", "!!!", "Two", "?"])
        );
        let (tokens, entities) = tokenizer.word_tokenize_with_entities("One. Two");
        assert_eq!(tokens, words(&["One", ".", "Two"]));
        assert_eq!(entities[0].replacement, " . <EOS>");

        let result = TokenizerOptions::default().with_eol("EOS").build();
        assert!(matches!(result, Err(ToksmithError::Configuration(_))));
    }

    #[test]
    fn test_dotted_abbreviations() {
        let tokenizer = tokenizer();

        assert_eq!(
            tokenizer.word_tokenize("use e.g. this"),
            words(&["use", "e.g.", "this"])
        );
        assert_eq!(
            tokenizer.word_tokenize("e.g. at 5 p.m. in D.C. today, i.e. now"),
            words(&["e.g.", "at", "5", "p.m.", "in", "D.C.", "today", ",", "i.e.", "now"])
        );
        assert_eq!(
            tokenizer.word_tokenize("E.G. and A.M."),
            words(&["E.G.", "and", "A.M."])
        );
        assert_eq!(
            tokenizer.sent_tokenize("Bring snacks, e.g. chips. Then go."),
            vec![
                words(&["Bring", "snacks", ",", "e.g.", "chips"]),
                words(&["Then", "go"]),
            ]
        );

        // Initials are unaffected.
        assert_eq!(
            tokenizer.word_tokenize("e. e. cummings"),
            words(&["e.", "e.", "cummings"])
        );
    }

    #[test]
    fn test_word_newlined_tokenize() {
        let tokenizer = tokenizer();

        assert_eq!(
            tokenizer.word_newlined_tokenize("Hello world. Bye now."),
            words(&["Hello", "world", "\n", "Bye", "now"])
        );
        assert_eq!(
            tokenizer.word_newlined_tokenize("single sentence"),
            words(&["single", "sentence"])
        );
        assert!(tokenizer.word_newlined_tokenize("").is_empty());
    }

    #[test]
    fn test_explain() {
        let mut tokenizer = tokenizer();
        tokenizer.split("-", Some("J")).unwrap();

        let explanation = tokenizer.explain("-");
        let dash = explanation.get("-").unwrap();
        assert_eq!(dash.replacement, " - ");
        assert_eq!(dash.justification, "J");

        assert!(tokenizer.explain("\u{2603}").is_nothing());
    }

    #[test]
    fn test_mutation_applies_to_later_calls() {
        let mut tokenizer = tokenizer();
        assert_eq!(tokenizer.word_tokenize("C++ rocks"), words(&["C++", "rocks"]));

        tokenizer.split("+", None).unwrap();
        assert_eq!(
            tokenizer.word_tokenize("C++ rocks"),
            words(&["C", "+", "+", "rocks"])
        );

        tokenizer.add_words(["C++"]).unwrap();
        assert_eq!(
            tokenizer.word_tokenize("C++ c++"),
            words(&["C++", "c", "+", "+"])
        );

        let removed = tokenizer.remove("+").unwrap().unwrap();
        assert_eq!(removed.replacement(), " + ");
        assert!(tokenizer.rules().get("+").is_none());
        assert!(tokenizer.explain("+").get("+").is_none());
        assert_eq!(tokenizer.word_tokenize("a+b"), words(&["a+b"]));

        assert_eq!(tokenizer.remove("+").unwrap(), None);
    }

    #[test]
    fn test_drop_and_strip() {
        let mut tokenizer = tokenizer();
        tokenizer.drop("_", None).unwrap();
        tokenizer.strip("*", None).unwrap();

        assert_eq!(
            tokenizer.word_tokenize("snake_case *bold*"),
            words(&["snake", "case", "bold"])
        );
    }

    #[test]
    fn test_update_batches_edits() {
        let mut tokenizer = Tokenizer::blank().unwrap();
        let count = tokenizer
            .update(|store| {
                store.split("+", None)?;
                store.split("=", None)?;
                Ok(store.len())
            })
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(tokenizer.engine().len(), 2);
        assert_eq!(
            tokenizer.word_tokenize("1+1=2"),
            words(&["1", "+", "1", "=", "2"])
        );

        // A failed edit keeps earlier changes, and the engine stays in sync.
        let result = tokenizer.update(|store| {
            store.split("*", None)?;
            store.split("", None)
        });
        assert!(matches!(result, Err(ToksmithError::InvalidPattern)));
        assert_eq!(tokenizer.engine().len(), 3);
    }

    #[test]
    fn test_blank_tokenizer() {
        let mut tokenizer = Tokenizer::blank().unwrap();
        assert!(tokenizer.rules().is_empty());
        assert_eq!(
            tokenizer.word_tokenize("Mr. Smith."),
            words(&["Mr.", "Smith."])
        );

        tokenizer.split(".", None).unwrap();
        tokenizer.keep("Mr.", None).unwrap();
        assert_eq!(
            tokenizer.word_tokenize("Mr. Smith."),
            words(&["Mr.", "Smith", "."])
        );
    }

    #[test]
    fn test_configuration_errors() {
        let result = TokenizerOptions::default().with_language("nl").build();
        assert!(matches!(result, Err(ToksmithError::Configuration(_))));

        let tokenizer = TokenizerOptions::default()
            .with_language("nl")
            .with_contractions(false)
            .build()
            .unwrap();
        assert!(tokenizer.rules().get("won't").is_none());

        let result = TokenizerOptions::default()
            .with_protected_words([""])
            .build();
        assert!(matches!(result, Err(ToksmithError::InvalidPattern)));
    }

    #[test]
    fn test_default_tokenizer_handles_urls() {
        let tokenizer = default_tokenizer().unwrap();
        assert_eq!(
            tokenizer.word_tokenize("see https://example.com/a,b. ok"),
            words(&["see", "https://example.com/a,b.", "ok"])
        );
    }

    #[test]
    fn test_batches() {
        let texts = ["Hello world. Bye now.", "wait!!!", ""];

        for parallel in [false, true] {
            let tokenizer = TokenizerOptions::default()
                .with_parallel(parallel)
                .build()
                .unwrap();
            assert_eq!(tokenizer.parallel(), parallel);

            let expected: Vec<_> = texts.iter().map(|t| tokenizer.word_tokenize(t)).collect();
            assert_eq!(tokenizer.word_tokenize_batch(&texts), expected);

            let expected: Vec<_> = texts.iter().map(|t| tokenizer.sent_tokenize(t)).collect();
            assert_eq!(tokenizer.sent_tokenize_batch(&texts), expected);
        }
    }
}
