//! # Rewrite Rules
//!
//! [`Rule`] is a single `pattern -> replacement` association, with its justification.
//!
//! [`PatternStore`] holds the current set of rules, keyed by pattern.
//!
//! [`RuleBuilder`] provides the canonical replacement shapes on top of any rule sink:
//! * `keep` - `x -> x`
//! * `split` - `x -> " x "`
//! * `drop` - `x -> " "`
//! * `strip` - `x -> ""`
//! * `add` - `x -> y`
//! * `add_words` - protected words, in as-is / upper / title case.

pub mod pattern_store;
pub mod rule;
pub mod rule_builder;

#[doc(inline)]
pub use pattern_store::PatternStore;
#[doc(inline)]
pub use rule::{MatchExtent, Rule};
#[doc(inline)]
pub use rule_builder::{ProtectedWord, RuleBuilder, title_case};
