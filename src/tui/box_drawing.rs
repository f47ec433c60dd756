//! Unicode-width-aware box-drawing helpers for the sequence row.
//!
//! Single place for width measurement, so element values with emoji or CJK
//! text line up with their borders.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
///
/// Emoji = 2, CJK = 2, ASCII = 1.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Strip Variation Selector VS16 (U+FE0F) from text.
///
/// Terminals render `⚠️` as 2 columns but `unicode-width` measures
/// `⚠` as 1. Stripping VS16 makes measurement and rendering agree.
pub fn strip_vs16(s: &str) -> String {
    s.chars().filter(|&c| c != '\u{FE0F}').collect()
}

/// Cut `s` to at most `max` columns, ending in `…` when shortened.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let budget = max - 1; // room for the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Horizontal border: `left` + `─` × (width + 2) + `right`.
///
/// Example: `build_border(3, '┌', '┐')` → `"┌─────┐"`.
pub fn build_border(width: usize, left: char, right: char) -> String {
    let mut s = String::with_capacity(width + 4);
    s.push(left);
    // +2 for the padding spaces around the content
    for _ in 0..(width + 2) {
        s.push('─');
    }
    s.push(right);
    s
}

/// Pad content to `target_width` columns, with 1-space margins.
pub fn pad_cell(content: &str, target_width: usize) -> String {
    let pad = target_width.saturating_sub(display_width(content));
    format!(" {}{} ", content, " ".repeat(pad))
}

/// Center `content` in `target_width` columns.
pub fn center(content: &str, target_width: usize) -> String {
    let pad = target_width.saturating_sub(display_width(content));
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), content, " ".repeat(pad - left))
}
