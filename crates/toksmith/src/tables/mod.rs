//! # Rule Tables
//!
//! Static configuration data consumed by the default rule assembly.
//! The tables are data only; nothing here is validated against the engine.

pub mod abbreviations;
pub mod contractions;
pub mod domains;

#[doc(inline)]
pub use abbreviations::{ABBREVIATIONS, default_abbreviations};
#[doc(inline)]
pub use contractions::{EN_CONTRACTIONS, EN_LEFTOVER_CONTRACTIONS, builtin_contractions};
#[doc(inline)]
pub use domains::{TOP_LEVEL_DOMAINS, is_plain_domain_suffix};

/// The currency symbols protected by default.
pub const DEFAULT_CURRENCIES: &[&str] = &["$"];

/// URL prefixes; a match keeps everything up to the next whitespace.
pub const URL_PREFIXES: &[&str] = &["http://", "https://", "www."];

/// The language with a builtin contraction table.
pub const DEFAULT_LANGUAGE: &str = "en";
