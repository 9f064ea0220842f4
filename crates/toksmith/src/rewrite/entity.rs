//! # Rewrite Results

use core::ops::Range;

/// A matched span from a scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    /// Byte offsets of the match in the scanned text.
    pub range: Range<usize>,

    /// The registered pattern which matched.
    pub pattern: String,

    /// The text emitted for the match.
    pub replacement: String,
}

impl Entity {
    /// The matched text.
    ///
    /// ## Arguments
    /// * `text` - the text the entity was produced from.
    pub fn matched<'a>(
        &self,
        text: &'a str,
    ) -> &'a str {
        &text[self.range.clone()]
    }
}

/// The output of a scan, with the entities it matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewrite {
    /// The rewritten text.
    pub text: String,

    /// The matched spans; disjoint, in scan order.
    pub entities: Vec<Entity>,
}
