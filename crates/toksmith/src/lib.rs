//! # `toksmith` Rule-Driven Tokenizer
//!
//! This is a rule-driven word and sentence tokenizer.
//!
//! Text is rewritten in a single left-to-right pass: at each position the
//! longest registered pattern wins, and is replaced by its rule's replacement.
//! Splitting the rewritten text on whitespace gives the word tokens;
//! splitting it on the eol marker gives the sentences.
//!
//! See:
//! * [`rules`] to build and manage rewrite rules.
//! * [`rewrite`] for the compiled scanning engine.
//! * [`tokenizer`] for the tokenizer façade and its default rule set.
//! * [`tables`] for the builtin contraction, abbreviation, and domain tables.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``foldhash``
//! * ``rayon``
//!
//! #### feature: ``foldhash``
//!
//! This swaps the pattern index HashMap for ``foldhash``.
//!
//! This is done by the ``types::TSHashMap`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables threaded batch tokenization using the ``rayon`` crate;
//! see [`TokenizerOptions::with_parallel`].
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Tokenizing
//!
//! ```rust
//! use toksmith::{RuleBuilder, default_tokenizer};
//!
//! let mut tokenizer = default_tokenizer()?;
//!
//! assert_eq!(
//!     tokenizer.sent_tokenize("Hello world. Bye now."),
//!     vec![vec!["Hello", "world"], vec!["Bye", "now"]],
//! );
//!
//! tokenizer.split("+", Some("split on plus"))?;
//! assert_eq!(tokenizer.word_tokenize("1+1"), vec!["1", "+", "1"]);
//! assert_eq!(
//!     tokenizer.explain("+").get("+").unwrap().justification,
//!     "split on plus",
//! );
//! # Ok::<(), toksmith::ToksmithError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod rewrite;
pub mod rules;
pub mod tables;
pub mod tokenizer;
pub mod types;

#[doc(inline)]
pub use errors::{TSResult, ToksmithError};
#[doc(inline)]
pub use rewrite::{Entity, RewriteEngine};
#[doc(inline)]
pub use rules::{PatternStore, ProtectedWord, Rule, RuleBuilder};
#[doc(inline)]
pub use tokenizer::{Contractions, Explanation, Tokenizer, TokenizerOptions, default_tokenizer};
