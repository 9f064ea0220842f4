//! # Tokenizer
//!
//! [`Tokenizer`] owns a [`PatternStore`](crate::rules::PatternStore) and the
//! [`RewriteEngine`](crate::rewrite::RewriteEngine) compiled from it; and
//! provides word and sentence tokenization on top of the rewritten text.
//!
//! [`TokenizerOptions`] selects which default rules are assembled.
//!
//! ```rust
//! use toksmith::tokenizer::TokenizerOptions;
//!
//! let tokenizer = TokenizerOptions::default().build().unwrap();
//! assert_eq!(
//!     tokenizer.word_tokenize("Mr. Smith can't wait!!!"),
//!     vec!["Mr.", "Smith", "cannot", "wait", "!!!"],
//! );
//! ```

pub mod default_rules;
pub mod explain;
pub mod tokenizer_impl;
pub mod tokenizer_options;

#[doc(inline)]
pub use explain::{Explanation, NO_EXPLANATION, RuleExplanation};
#[doc(inline)]
pub use tokenizer_impl::{Tokenizer, default_tokenizer};
#[doc(inline)]
pub use tokenizer_options::{Contractions, TokenizerOptions};
