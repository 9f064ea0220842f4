//! # Tokenizer Options

use crate::{
    errors::{TSResult, ToksmithError},
    rules::ProtectedWord,
    tables::{DEFAULT_CURRENCIES, DEFAULT_LANGUAGE, builtin_contractions, default_abbreviations},
    tokenizer::Tokenizer,
};

/// Contraction expansion policy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Contractions {
    /// No contraction rules.
    Disabled,

    /// The builtin table for the configured language.
    ///
    /// Only `"en"` has a builtin table.
    #[default]
    Builtin,

    /// An explicit `(form, expansion)` table; accepted for any language.
    Custom(Vec<(String, String)>),
}

impl From<bool> for Contractions {
    fn from(enabled: bool) -> Self {
        if enabled {
            Contractions::Builtin
        } else {
            Contractions::Disabled
        }
    }
}

impl<F, E> FromIterator<(F, E)> for Contractions
where
    F: Into<String>,
    E: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, E)>>(iter: I) -> Self {
        Contractions::Custom(
            iter.into_iter()
                .map(|(form, expansion)| (form.into(), expansion.into()))
                .collect(),
        )
    }
}

/// Options for configuring a [`Tokenizer`].
///
/// The defaults match the stock rule set:
/// numbers and punctuation runs protected, `$` protected,
/// English contractions expanded, common abbreviations kept;
/// URL and domain handling off.
///
/// ## Style Hints
///
/// Instance names should prefer `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Keep `http://`, `https://`, and `www.` runs intact up to the next whitespace.
    pub handle_http: bool,

    /// Keep top-level domain suffixes (`.com`, `.co.uk`) intact.
    pub handle_domains: bool,

    /// Keep a digit followed by `,` or `.` intact.
    pub numbers: bool,

    /// Collapse runs of `!`, `.`, `?`, `-`, and newlines.
    pub combine_punctuation: bool,

    /// The sentence boundary marker inserted by punctuation rules.
    ///
    /// Must not start or end with an alphanumeric character, so it can't
    /// fuse with a neighbouring word. Any literal occurrence of the marker
    /// in the input is also read as a sentence boundary.
    pub eol: String,

    /// Currency symbols to split off, and protect ahead of numbers.
    pub currencies: Vec<String>,

    /// Words which should never be split; optionally with replacements.
    pub protected_words: Vec<ProtectedWord>,

    /// Contraction expansion policy.
    pub contractions: Contractions,

    /// The language; selects the builtin contraction table.
    pub language: String,

    /// Abbreviations to protect.
    pub abbrevs: Vec<String>,

    /// Use threaded batch tokenization, when the `rayon` feature is enabled.
    pub parallel: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            handle_http: false,
            handle_domains: false,
            numbers: true,
            combine_punctuation: true,
            eol: "\n".to_string(),
            currencies: DEFAULT_CURRENCIES.iter().map(|s| s.to_string()).collect(),
            protected_words: Vec::new(),
            contractions: Contractions::Builtin,
            language: DEFAULT_LANGUAGE.to_string(),
            abbrevs: default_abbreviations(),
            parallel: false,
        }
    }
}

impl TokenizerOptions {
    /// Set URL prefix handling.
    pub fn with_handle_http(
        self,
        handle_http: bool,
    ) -> Self {
        Self {
            handle_http,
            ..self
        }
    }

    /// Set top-level domain handling.
    pub fn with_handle_domains(
        self,
        handle_domains: bool,
    ) -> Self {
        Self {
            handle_domains,
            ..self
        }
    }

    /// Set digit + punctuation protection.
    pub fn with_numbers(
        self,
        numbers: bool,
    ) -> Self {
        Self { numbers, ..self }
    }

    /// Set punctuation run collapsing.
    pub fn with_combine_punctuation(
        self,
        combine_punctuation: bool,
    ) -> Self {
        Self {
            combine_punctuation,
            ..self
        }
    }

    /// Set the sentence boundary marker.
    pub fn with_eol<S: Into<String>>(
        self,
        eol: S,
    ) -> Self {
        Self {
            eol: eol.into(),
            ..self
        }
    }

    /// Replace the currency symbols.
    pub fn with_currencies<I, S>(
        self,
        currencies: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            currencies: currencies.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Replace the protected words.
    ///
    /// Entries are bare words, or `(form, replacement)` pairs.
    pub fn with_protected_words<I, W>(
        self,
        words: I,
    ) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<ProtectedWord>,
    {
        Self {
            protected_words: words.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Set the contraction expansion policy.
    ///
    /// Accepts a [`Contractions`], or a `bool`.
    pub fn with_contractions<C: Into<Contractions>>(
        self,
        contractions: C,
    ) -> Self {
        Self {
            contractions: contractions.into(),
            ..self
        }
    }

    /// Set the language.
    pub fn with_language<S: Into<String>>(
        self,
        language: S,
    ) -> Self {
        Self {
            language: language.into(),
            ..self
        }
    }

    /// Replace the abbreviations.
    pub fn with_abbrevs<I, S>(
        self,
        abbrevs: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            abbrevs: abbrevs.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded batch implementations.
    pub fn with_parallel(
        self,
        parallel: bool,
    ) -> Self {
        Self { parallel, ..self }
    }

    /// Resolve the contraction table to register, if any.
    ///
    /// ## Returns
    /// * `Ok(None)` when contractions are disabled,
    /// * `Ok(Some(table))` for the builtin or custom table,
    /// * `Err(ToksmithError::Configuration)` when no builtin table exists
    ///   for the language.
    pub fn contraction_table(&self) -> TSResult<Option<Vec<(String, String)>>> {
        match &self.contractions {
            Contractions::Disabled => Ok(None),
            Contractions::Custom(table) => Ok(Some(table.clone())),
            Contractions::Builtin => match builtin_contractions(&self.language) {
                Some(table) => Ok(Some(table)),
                None => Err(ToksmithError::Configuration(format!(
                    "no contractions known for language {:?}; only {DEFAULT_LANGUAGE:?} has a builtin table",
                    self.language
                ))),
            },
        }
    }

    /// Check the options for consistency.
    pub fn validate(&self) -> TSResult<()> {
        if self.eol.is_empty() {
            return Err(ToksmithError::Configuration(
                "the eol marker must be non-empty".to_string(),
            ));
        }
        let edges = [self.eol.chars().next(), self.eol.chars().next_back()];
        if edges.into_iter().flatten().any(char::is_alphanumeric) {
            return Err(ToksmithError::Configuration(format!(
                "the eol marker {:?} must not start or end with an alphanumeric character",
                self.eol
            )));
        }
        self.contraction_table().map(|_| ())
    }

    /// Build a [`Tokenizer`] with these options.
    pub fn build(&self) -> TSResult<Tokenizer> {
        Tokenizer::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TokenizerOptions::default();
        assert!(!options.handle_http);
        assert!(!options.handle_domains);
        assert!(options.numbers);
        assert!(options.combine_punctuation);
        assert_eq!(options.eol, "\n");
        assert_eq!(options.currencies, vec!["$".to_string()]);
        assert!(options.protected_words.is_empty());
        assert_eq!(options.contractions, Contractions::Builtin);
        assert_eq!(options.language, "en");
        assert!(options.abbrevs.contains(&"Mr.".to_string()));
        assert!(!options.parallel);

        options.validate().unwrap();
    }

    #[test]
    fn test_builders() {
        let options = TokenizerOptions::default()
            .with_handle_http(true)
            .with_handle_domains(true)
            .with_numbers(false)
            .with_combine_punctuation(false)
            .with_eol("<EOS>")
            .with_currencies(["\u{20ac}", "\u{a3}"])
            .with_protected_words(["C++", "C#"])
            .with_contractions(false)
            .with_language("nl")
            .with_abbrevs(["bijv."])
            .with_parallel(true);

        assert!(options.handle_http);
        assert!(options.handle_domains);
        assert!(!options.numbers);
        assert!(!options.combine_punctuation);
        assert_eq!(options.eol, "<EOS>");
        assert_eq!(options.currencies.len(), 2);
        assert_eq!(options.protected_words[0], ProtectedWord::keep("C++"));
        assert_eq!(options.contractions, Contractions::Disabled);
        assert_eq!(options.language, "nl");
        assert_eq!(options.abbrevs, vec!["bijv.".to_string()]);
        assert!(options.parallel);

        options.validate().unwrap();
    }

    #[test]
    fn test_contraction_table() {
        let options = TokenizerOptions::default();
        assert!(options.contraction_table().unwrap().unwrap().len() > 50);

        let options = options.with_language("nl");
        assert!(matches!(
            options.contraction_table(),
            Err(ToksmithError::Configuration(_))
        ));
        assert!(options.validate().is_err());

        let options = options.with_contractions([("m'n", "mijn")].into_iter().collect::<Contractions>());
        assert_eq!(
            options.contraction_table().unwrap(),
            Some(vec![("m'n".to_string(), "mijn".to_string())])
        );

        let options = options.with_contractions(false);
        assert_eq!(options.contraction_table().unwrap(), None);
    }

    #[test]
    fn test_eol_validation() {
        for eol in ["", "EOS", "EOS>", "<EOS", "\u{e9}"] {
            let options = TokenizerOptions::default().with_eol(eol);
            assert!(
                matches!(options.validate(), Err(ToksmithError::Configuration(_))),
                "{eol:?}"
            );
        }

        for eol in ["\n", "<EOS>", " || ", "\u{2029}"] {
            TokenizerOptions::default().with_eol(eol).validate().unwrap();
        }
    }
}
