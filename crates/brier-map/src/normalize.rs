//! Grammar normalization: raw text to an ordered list of content rows.

use brier_core::MapError;

/// Normalize raw map source into trimmed content rows.
///
/// The whole input is trimmed first, so leading and trailing blank lines
/// never survive; the only blank-line case left is a blank row strictly
/// between two content rows, which is rejected as
/// [`MapError::InteriorBlankLine`]. Each returned row is trimmed, which
/// also discards any carriage-return artifact from CRLF sources and lets
/// catalog literals be indented freely — the border hedges delimit the
/// real row extent.
pub fn normalize(raw: &str) -> Result<Vec<String>, MapError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MapError::EmptyInput);
    }

    let mut rows = Vec::new();
    let mut blank_after_content = false;
    for line in trimmed.lines() {
        let row = line.trim();
        if row.is_empty() {
            if !rows.is_empty() {
                blank_after_content = true;
            }
            continue;
        }
        if blank_after_content {
            return Err(MapError::InteriorBlankLine);
        }
        rows.push(row.to_string());
    }

    if rows.is_empty() {
        return Err(MapError::NoContentRows);
    }
    Ok(rows)
}
