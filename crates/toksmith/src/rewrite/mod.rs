//! # Pattern Rewriting
//!
//! [`RewriteEngine`] is compiled from a [`PatternStore`](crate::rules::PatternStore),
//! and performs single-pass, longest-match-first scans over text;
//! producing the rewritten text, and optionally the matched [`Entity`] spans.

pub mod entity;
pub mod rewrite_engine;

#[doc(inline)]
pub use entity::{Entity, Rewrite};
#[doc(inline)]
pub use rewrite_engine::{RewriteEngine, ScanSpan};
