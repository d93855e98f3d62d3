//! Source Parser Port
//!
//! Turns the text of one source unit into a declaration tree.

use crate::domain::entities::{SourceCode, SourceTree};
use crate::error::HeraldResult;

/// Grammar-specific parser producing [`SourceTree`]s
///
/// Implementations must fail with `HeraldError::Syntax` rather than return
/// a partial tree.
pub trait SourceParser {
    /// Language handled by this parser (for listings)
    fn language(&self) -> &'static str;

    /// File extensions (without the dot) this parser accepts
    fn extensions(&self) -> &'static [&'static str];

    fn parse(&self, source: &SourceCode) -> HeraldResult<SourceTree>;
}
