// crates/resolve_end_column/src/lib.rs

/// Returns the 1-based column just past the last character of the line at
/// `line_index` (0-based), i.e. the line's length plus one.
///
/// Lines are split on `'\n'` only, so a `'\r'` left at the end of a line is
/// counted. Length is measured in UTF-16 code units, the unit editor
/// columns are expressed in.
///
/// A line that does not exist yields `0`.
pub fn resolve_end_column(source: &str, line_index: usize) -> usize {
    source
        .split('\n')
        .nth(line_index)
        .map(|line| line.encode_utf16().count() + 1)
        .unwrap_or(0)
}

/// Signed variant for callers holding an index that may be negative; any
/// negative index is treated as a missing line.
pub fn resolve_end_column_signed(source: &str, line_index: i64) -> usize {
    usize::try_from(line_index)
        .map(|index| resolve_end_column(source, index))
        .unwrap_or(0)
}
