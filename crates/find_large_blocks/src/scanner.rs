// crates/find_large_blocks/src/scanner.rs

use crate::matcher::LineMatcher;
use crate::LineRange;

/// State of the single-span scanner between two lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// No span is open; the next opening line starts one.
    Searching,
    /// A span opened at `open_index` (0-based) and waits for a closing line.
    SpanOpen { open_index: usize },
}

impl ScanState {
    /// Advances the scanner over the line at `index`.
    ///
    /// Opening is only checked while searching, so a line carrying both
    /// markers acts as an opener when no span is open and as a closer
    /// otherwise. Closing always returns to `Searching`, whether or not the
    /// span was long enough to be reported.
    pub fn step<M>(self, index: usize, line: &str, matcher: &M, threshold: usize) -> (ScanState, Option<LineRange>)
    where
        M: LineMatcher + ?Sized,
    {
        match self {
            ScanState::Searching if matcher.opens(line) => {
                (ScanState::SpanOpen { open_index: index }, None)
            }
            ScanState::Searching => (ScanState::Searching, None),
            ScanState::SpanOpen { open_index } if matcher.closes(line) => {
                let range = (index - open_index > threshold).then(|| LineRange {
                    start: open_index + 1,
                    end: index + 1,
                });
                (ScanState::Searching, range)
            }
            open @ ScanState::SpanOpen { .. } => (open, None),
        }
    }
}

pub(crate) fn scan<M>(source: &str, matcher: &M, threshold: usize) -> Vec<LineRange>
where
    M: LineMatcher + ?Sized,
{
    let (last_state, ranges) = source.split('\n').enumerate().fold(
        (ScanState::Searching, Vec::new()),
        |(state, mut ranges), (index, line)| {
            let (next, emitted) = state.step(index, line, matcher, threshold);
            if let Some(range) = emitted {
                log::debug!("large block at lines {}-{}", range.start, range.end);
                ranges.push(range);
            }
            (next, ranges)
        },
    );

    if let ScanState::SpanOpen { open_index } = last_state {
        log::debug!("block opened at line {} never closed; dropped", open_index + 1);
    }
    ranges
}
