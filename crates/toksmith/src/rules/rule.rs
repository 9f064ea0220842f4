//! # Rewrite Rules

/// How far a match reaches past its pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchExtent {
    /// The match covers exactly the pattern.
    #[default]
    Pattern,

    /// The match continues past the pattern up to (not including) the next
    /// whitespace character, or the end of the input.
    ///
    /// The replacement is emitted for the pattern, followed by the tail verbatim.
    UntilWhitespace,
}

/// A single `pattern -> replacement` rewrite rule, with the reason it exists.
///
/// ## Style Hints
///
/// Instance names should prefer `rule`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pattern: String,
    replacement: String,
    justification: String,
    extent: MatchExtent,
}

impl Rule {
    /// Create a new rule which matches exactly `pattern`.
    ///
    /// ## Arguments
    /// * `pattern` - the literal text to match.
    /// * `replacement` - the text emitted in place of a match.
    /// * `justification` - a human-readable reason, reported by `explain`.
    pub fn new<P, R, J>(
        pattern: P,
        replacement: R,
        justification: J,
    ) -> Self
    where
        P: Into<String>,
        R: Into<String>,
        J: Into<String>,
    {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            justification: justification.into(),
            extent: MatchExtent::Pattern,
        }
    }

    /// Set the match extent.
    pub fn with_extent(
        self,
        extent: MatchExtent,
    ) -> Self {
        Self { extent, ..self }
    }

    /// The literal text this rule matches.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The text emitted in place of the pattern.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Why this rule exists.
    pub fn justification(&self) -> &str {
        &self.justification
    }

    /// How far a match reaches past the pattern.
    pub fn extent(&self) -> MatchExtent {
        self.extent
    }

    /// Is this a rule which leaves matched text unchanged?
    pub fn is_keep(&self) -> bool {
        self.pattern == self.replacement
    }
}
