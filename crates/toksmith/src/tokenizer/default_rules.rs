//! # Default Rule Assembly
//!
//! Registration order matters: a later rule for the same pattern replaces
//! an earlier one.

use crate::{
    errors::TSResult,
    rules::{MatchExtent, ProtectedWord, Rule, RuleBuilder},
    tables::{TOP_LEVEL_DOMAINS, URL_PREFIXES, is_plain_domain_suffix},
    tokenizer::TokenizerOptions,
};

/// Punctuation which collapses into a canonical three character run.
const RUN_PUNCTUATION: [char; 4] = ['!', '.', '?', '-'];

/// Punctuation which ends a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['!', '.', '?'];

/// Mixed `!` / `?` runs split as a single token.
const MIXED_EXCLAMATIONS: [&str; 7] = ["!?", "!?!", "!!?", "!??", "?!!", "?!?", "??!"];

/// Register the full default rule set described by `options`.
///
/// ## Arguments
/// * `options` - the tokenizer options; assumed valid.
/// * `rules` - the rule sink.
pub fn assemble_default_rules<B: RuleBuilder>(
    options: &TokenizerOptions,
    rules: &mut B,
) -> TSResult<()> {
    add_base_rules(options, rules)?;
    add_currency_rules(&options.currencies, rules)?;
    add_protected_words(&options.protected_words, rules)?;

    if options.handle_http {
        add_url_rules(rules)?;
    }
    if options.handle_domains {
        add_domain_rules(rules)?;
    }
    if let Some(table) = options.contraction_table()? {
        rules.add_words(table)?;
    }
    add_protected_words(&options.abbrevs, rules)?;

    Ok(())
}

/// Register numbers, punctuation, initials, commas, and quotes.
pub fn add_base_rules<B: RuleBuilder>(
    options: &TokenizerOptions,
    rules: &mut B,
) -> TSResult<()> {
    let eol = options.eol.as_str();

    if options.numbers {
        for digit in '0'..='9' {
            rules.keep(&format!("{digit},"), None)?;
            rules.keep(&format!("{digit}."), None)?;
        }
    }

    if options.combine_punctuation {
        for s in RUN_PUNCTUATION {
            let canonical = s.to_string().repeat(3);
            let end = if s == '-' {
                " ".to_string()
            } else {
                format!(" {eol}")
            };
            for n in 2..=9 {
                let run = s.to_string().repeat(n);
                rules.add(
                    &run,
                    &format!(" {canonical}{end}"),
                    &format!(
                        "combine punctuation: merges {run:?} into {:?} and starts a new sentence.",
                        format!("{canonical}{end}")
                    ),
                )?;
            }
        }

        for n in 2..=9 {
            rules.add(&"\n".repeat(n), &format!(" {eol} "), "merges newlines")?;
        }
    }

    for s in SENTENCE_TERMINATORS {
        rules.add(
            &s.to_string(),
            &format!(" {s} {eol}"),
            &format!("Splits on {s:?} and creating a new sentence."),
        )?;
    }
    rules.split("-", Some("Splits on '-'."))?;
    rules.add("\n", &format!(" {eol} "), "Splits on '\\n' and creating a new sentence.")?;

    rules.split("- ", None)?;
    rules.split("...", None)?;
    for mixed in MIXED_EXCLAMATIONS {
        rules.split(mixed, None)?;
    }

    // Initials: "J. Smith".
    for letter in ('a'..='z').chain('A'..='Z') {
        rules.keep(&format!(" {letter}."), None)?;
    }

    rules.split(",", None)?;
    rules.split("'", None)?;
    rules.split("\"", None)?;

    Ok(())
}

/// Register protected words, as [`RuleBuilder::add_words`] does.
///
/// A variant which starts like an initial (`e.g.`, `D.C.`) is also
/// registered with a leading space. The initial rule `" e."` matches one
/// byte earlier than `e.g.`, so only the space-prefixed form outranks it.
pub fn add_protected_words<B, I, W>(
    words: I,
    rules: &mut B,
) -> TSResult<()>
where
    B: RuleBuilder,
    I: IntoIterator<Item = W>,
    W: Into<ProtectedWord>,
{
    for word in words {
        for rule in word.into().variants() {
            if starts_like_initial(rule.pattern()) {
                rules.add(
                    &format!(" {}", rule.pattern()),
                    &format!(" {}", rule.replacement()),
                    rule.justification(),
                )?;
            }
            rules.add_rule(rule)?;
        }
    }
    Ok(())
}

/// Does the text start with an ASCII letter followed by `.`?
fn starts_like_initial(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() > 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b'.'
}

/// Split off currency symbols, and keep them from being read as numbers.
pub fn add_currency_rules<B, S>(
    currencies: &[S],
    rules: &mut B,
) -> TSResult<()>
where
    B: RuleBuilder,
    S: AsRef<str>,
{
    for currency in currencies {
        let currency = currency.as_ref();
        rules.split(currency, None)?;

        for digit in '0'..='9' {
            for punct in [',', '.'] {
                rules.add(
                    &format!("{currency}{digit}{punct}"),
                    &format!(" {currency} {digit}{punct}"),
                    "protecting currency from being seen as a number.",
                )?;
            }
        }
    }
    Ok(())
}

/// Keep URL-like runs intact up to the next whitespace.
pub fn add_url_rules<B: RuleBuilder>(rules: &mut B) -> TSResult<()> {
    for prefix in URL_PREFIXES {
        rules.add_rule(
            Rule::new(
                *prefix,
                *prefix,
                format!("url: when it finds {prefix:?} it will stop after it finds a space."),
            )
            .with_extent(MatchExtent::UntilWhitespace),
        )?;
    }
    Ok(())
}

/// Keep top-level domain suffixes intact.
pub fn add_domain_rules<B: RuleBuilder>(rules: &mut B) -> TSResult<()> {
    for tld in TOP_LEVEL_DOMAINS
        .iter()
        .filter(|tld| is_plain_domain_suffix(tld))
    {
        rules.keep(
            &format!(".{tld}"),
            Some("Added by domain handler, keeps the token existing."),
        )?;
    }
    Ok(())
}
