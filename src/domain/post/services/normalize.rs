// src/domain/post/services/normalize.rs
use crate::domain::post::value_objects::is_slug_char;

/// Whitespace as recognised by ECMAScript `\s` and `String.prototype.trim`.
/// Differs from `char::is_whitespace`: U+FEFF counts, U+0085 does not.
fn is_separator(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Derive the slug base for `title`.
///
/// Trims, lower-cases, turns whitespace runs into a single hyphen, drops
/// anything outside the slug alphabet and collapses repeated hyphens.
/// Returns `None` when nothing usable is left.
pub fn slug_base(title: &str) -> Option<String> {
    let lowered = title.trim_matches(is_separator).to_lowercase();
    let mut out = String::with_capacity(lowered.len());

    for ch in lowered.chars() {
        if is_separator(ch) || ch == '-' {
            if !out.ends_with('-') {
                out.push('-');
            }
        } else if is_slug_char(ch) {
            out.push(ch);
        }
    }

    if out.is_empty() { None } else { Some(out) }
}
