//! Display-width measurement and truncation.
//!
//! Approximates rendered text width for excerpt budgeting: characters in
//! the common East-Asian ranges count as two columns, everything else as
//! one. This is a terminal/CJK heuristic, not full Unicode width tables.

/// Marker appended to excerpts that were cut short.
pub const TRUNCATION_MARKER: &str = "...";

/// Whether a character occupies two display columns.
///
/// Covers CJK unified ideographs, CJK symbols and punctuation, and the
/// halfwidth/fullwidth forms block.
#[inline]
pub const fn is_wide(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FA5}' | '\u{3000}'..='\u{303F}' | '\u{FF00}'..='\u{FFEF}')
}

/// Sum of per-character display widths.
pub fn measure(text: &str) -> usize {
    text.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

/// Longest prefix of `text` whose measured width does not exceed `budget`.
///
/// Consumes characters left to right and stops before the character that
/// would overflow the budget. Never splits a character.
pub fn truncate(text: &str, budget: usize) -> &str {
    let mut used = 0;
    let mut end = 0;

    for (idx, c) in text.char_indices() {
        let w = if is_wide(c) { 2 } else { 1 };
        if used + w > budget {
            break;
        }
        used += w;
        end = idx + c.len_utf8();
    }

    &text[..end]
}

/// Build a width-bounded excerpt from plain text.
///
/// Appends [`TRUNCATION_MARKER`] only when the full text exceeds the
/// budget; otherwise the text is returned verbatim.
pub fn make_excerpt(text: &str, budget: usize) -> String {
    if measure(text) > budget {
        let mut excerpt = truncate(text, budget).to_owned();
        excerpt.push_str(TRUNCATION_MARKER);
        excerpt
    } else {
        text.to_owned()
    }
}
