// crates/block_markers/src/lib.rs

//! Markers and limits shared by the block scanner and the fold plan.

/// Character that opens a dictionary literal.
pub const BLOCK_OPEN: char = '{';

/// Character that closes a dictionary literal.
pub const BLOCK_CLOSE: char = '}';

/// A block is "large" when its closing line is **more than** this many
/// lines below its opening line (0-based indices).
pub const LARGE_BLOCK_THRESHOLD: usize = 5;

/// Text shown in the zone rendered under a folded block.
pub const FOLDED_BLOCK_NOTE: &str = "# Whoa! This is a big object and we made it folded.";

/// Prefix of the id given to each inspect widget; the block's
/// discovery index is appended.
pub const INSPECT_WIDGET_ID_PREFIX: &str = "inspect.button.";
