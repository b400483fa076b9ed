//! Symbol path rules
//!
//! A symbol is the root-to-node join of segments with [`SEPARATOR`], e.g.
//! `ROLE_ARTIST_TOOL2`. Symbols double as persistence keys and as build
//! symbols, so segments are restricted to characters that are valid in both.

use crate::{Error, Result};

/// Joins segments into a full symbol path
pub const SEPARATOR: char = '_';

/// Joins symbols in the external active-symbol list
pub const DELIMITER: char = ';';

/// Validate a segment before it is attached to a tree.
///
/// Segments must be non-empty ASCII alphanumerics. This keeps [`SEPARATOR`]
/// and [`DELIMITER`] out of segments, which makes every symbol path split back
/// into exactly the segments it was built from.
pub fn validate_segment(segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(invalid(segment, "segment cannot be empty"));
    }
    if segment.contains(SEPARATOR) {
        return Err(invalid(
            segment,
            format!("segment cannot contain the path separator '{SEPARATOR}'"),
        ));
    }
    if segment.contains(DELIMITER) {
        return Err(invalid(
            segment,
            format!("segment cannot contain the symbol delimiter '{DELIMITER}'"),
        ));
    }
    if !segment.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid(
            segment,
            "segment can only contain ASCII letters and digits",
        ));
    }
    Ok(())
}

/// Join a parent symbol and a child segment.
pub fn join(parent: &str, segment: &str) -> String {
    let mut symbol = String::with_capacity(parent.len() + 1 + segment.len());
    symbol.push_str(parent);
    symbol.push(SEPARATOR);
    symbol.push_str(segment);
    symbol
}

/// Split a symbol path into its segments, root first.
pub fn segments(path: &str) -> std::str::Split<'_, char> {
    path.split(SEPARATOR)
}

fn invalid(segment: &str, reason: impl Into<String>) -> Error {
    Error::InvalidSegment {
        segment: segment.to_string(),
        reason: reason.into(),
    }
}
