// crates/find_large_blocks/src/matcher.rs

use block_markers::{BLOCK_CLOSE, BLOCK_OPEN};
use once_cell::sync::Lazy;
use regex::Regex;

/// Decides whether a single line opens or closes a block.
///
/// The scanner only ever asks about one line at a time; implementations
/// never see surrounding context.
pub trait LineMatcher: Sync + Send {
    fn opens(&self, line: &str) -> bool;
    fn closes(&self, line: &str) -> bool;
}

/// Plain character containment on `{` and `}`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BraceMatcher;

impl LineMatcher for BraceMatcher {
    fn opens(&self, line: &str) -> bool {
        line.contains(BLOCK_OPEN)
    }

    fn closes(&self, line: &str) -> bool {
        line.contains(BLOCK_CLOSE)
    }
}

// ---------------------------------------------------------------------------
//  Regex-backed matcher
// ---------------------------------------------------------------------------

static OPEN_BRACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{").unwrap());
static CLOSE_BRACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\}").unwrap());

/// A pair of unanchored patterns; a line opens (closes) a block when the
/// open (close) pattern matches anywhere in it.
#[derive(Clone, Debug)]
pub struct PatternMatcher {
    open: Regex,
    close: Regex,
}

impl PatternMatcher {
    pub fn new(open: &str, close: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            open: Regex::new(open)?,
            close: Regex::new(close)?,
        })
    }

    /// Builds a matcher where either side may be left out; a missing side
    /// falls back to the literal brace pattern.
    pub fn with_defaults(open: Option<&str>, close: Option<&str>) -> Result<Self, regex::Error> {
        let open = match open {
            Some(pattern) => Regex::new(pattern)?,
            None => OPEN_BRACE_RE.clone(),
        };
        let close = match close {
            Some(pattern) => Regex::new(pattern)?,
            None => CLOSE_BRACE_RE.clone(),
        };
        Ok(Self { open, close })
    }

    pub fn open_pattern(&self) -> &str {
        self.open.as_str()
    }

    pub fn close_pattern(&self) -> &str {
        self.close.as_str()
    }
}

impl LineMatcher for PatternMatcher {
    fn opens(&self, line: &str) -> bool {
        self.open.is_match(line)
    }

    fn closes(&self, line: &str) -> bool {
        self.close.is_match(line)
    }
}
