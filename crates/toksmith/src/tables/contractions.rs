//! # English Contractions
//!
//! Expansions are plain words; they contain no punctuation which
//! other rules would split on.

/// English contractions, and their expansions.
pub const EN_CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "are not"),
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("can't've", "cannot have"),
    ("could've", "could have"),
    ("couldn't", "could not"),
    ("couldn't've", "could not have"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'd", "he would"),
    ("he'll", "he will"),
    ("he's", "he is"),
    ("how'd", "how did"),
    ("how'll", "how will"),
    ("how's", "how is"),
    ("I'd", "I would"),
    ("I'll", "I will"),
    ("I'm", "I am"),
    ("I've", "I have"),
    ("isn't", "is not"),
    ("it'd", "it would"),
    ("it'll", "it will"),
    ("it's", "it is"),
    ("let's", "let us"),
    ("ma'am", "madam"),
    ("mayn't", "may not"),
    ("might've", "might have"),
    ("mightn't", "might not"),
    ("must've", "must have"),
    ("mustn't", "must not"),
    ("needn't", "need not"),
    ("o'clock", "of the clock"),
    ("oughtn't", "ought not"),
    ("shan't", "shall not"),
    ("she'd", "she would"),
    ("she'll", "she will"),
    ("she's", "she is"),
    ("should've", "should have"),
    ("shouldn't", "should not"),
    ("that'd", "that would"),
    ("that's", "that is"),
    ("there'd", "there would"),
    ("there's", "there is"),
    ("they'd", "they would"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("wasn't", "was not"),
    ("we'd", "we would"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("what's", "what is"),
    ("what've", "what have"),
    ("when's", "when is"),
    ("where'd", "where did"),
    ("where's", "where is"),
    ("where've", "where have"),
    ("who'll", "who will"),
    ("who's", "who is"),
    ("who've", "who have"),
    ("why's", "why is"),
    ("won't", "will not"),
    ("would've", "would have"),
    ("wouldn't", "would not"),
    ("y'all", "you all"),
    ("you'd", "you would"),
    ("you'll", "you will"),
    ("you're", "you are"),
    ("you've", "you have"),
];

/// Informal English forms which are not contractions proper.
pub const EN_LEFTOVER_CONTRACTIONS: &[(&str, &str)] = &[
    ("'cause", "because"),
    ("'coz", "because"),
    ("'em", "them"),
    ("doin'", "doing"),
    ("goin'", "going"),
    ("havin'", "having"),
    ("lovin'", "loving"),
    ("nothin'", "nothing"),
    ("somethin'", "something"),
];

/// The builtin contraction table for a language, if any.
///
/// The table includes the leftover forms.
pub fn builtin_contractions(language: &str) -> Option<Vec<(String, String)>> {
    match language {
        "en" => Some(
            EN_CONTRACTIONS
                .iter()
                .chain(EN_LEFTOVER_CONTRACTIONS)
                .map(|&(form, expansion)| (form.to_string(), expansion.to_string()))
                .collect(),
        ),
        _ => None,
    }
}
