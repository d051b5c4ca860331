// crates/find_large_blocks/src/lib.rs

//! `find_large_blocks` — locates "large dictionary blocks" in source text.
//!
//! The detection is a textual heuristic, not a parser: any line holding a
//! `{` opens a span and the next line holding a `}` closes it. Braces in
//! strings or comments count like any other. Spans are never nested.

use block_markers::LARGE_BLOCK_THRESHOLD;

mod matcher;
mod scanner;

pub use matcher::{BraceMatcher, LineMatcher, PatternMatcher};
pub use scanner::ScanState;

/// Inclusive span of 1-based line numbers. `end` is always greater than
/// `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Number of lines covered, both ends included.
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Returns the large dictionary blocks of `source` in the order they were
/// found, scanning top to bottom.
///
/// A block qualifies when its closing line sits more than
/// [`LARGE_BLOCK_THRESHOLD`] lines below its opening line. A block that is
/// never closed is dropped.
pub fn find_large_block_ranges(source: &str) -> Vec<LineRange> {
    find_block_ranges_with(source, &BraceMatcher, LARGE_BLOCK_THRESHOLD)
}

/// Same scan as [`find_large_block_ranges`], with the open/close test and
/// the size threshold supplied by the caller.
pub fn find_block_ranges_with<M>(source: &str, matcher: &M, threshold: usize) -> Vec<LineRange>
where
    M: LineMatcher + ?Sized,
{
    scanner::scan(source, matcher, threshold)
}
