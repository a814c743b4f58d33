//! Turning editor text into a model prompt

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters a mention search term may contain after the `@` trigger.
///
/// Hebrew letters, digits, Latin letters and whitespace. Shared with the JS
/// glue as the mention plugin's `allowedChars`.
pub const MENTION_ALLOWED_CHARS: &str = r"^[א-ת0-9A-Za-z\s]*$";

// U+FEFF is whitespace to browsers but not to Unicode's White_Space.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x{FEFF}]{2,}").unwrap());
static ALLOWED_SEARCH_TERM: Lazy<Regex> = Lazy::new(|| Regex::new(MENTION_ALLOWED_CHARS).unwrap());

/// Normalize raw document text into prompt text.
///
/// Steps run in this order:
/// 1. drop `\n` and `\r`
/// 2. typographic single quotes to `'`
/// 3. typographic double quotes to `"`
/// 4. ellipsis glyph to `...`
/// 5. en/em dash to `-`
/// 6. whitespace runs of two or more to a single space
/// 7. trim
///
/// Whitespace in steps 6 and 7 includes U+FEFF.
pub fn normalize_prompt_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' | '\r' => {}
            '\u{2018}' | '\u{2019}' | '\u{201A}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' => out.push('"'),
            '\u{2026}' => out.push_str("..."),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            other => out.push(other),
        }
    }

    WHITESPACE_RUN
        .replace_all(&out, " ")
        .trim_matches(is_prompt_whitespace)
        .to_string()
}

fn is_prompt_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

/// The last `length_prefix` characters of `normalized`, minus the very last
/// character (the partially typed mention trigger).
///
/// Counts Unicode scalar values, so Hebrew text is never split mid-character.
pub fn extract_prefix(normalized: &str, length_prefix: usize) -> String {
    let len = normalized.chars().count();
    let Some(end) = len.checked_sub(1) else {
        return String::new();
    };
    let start = len.saturating_sub(length_prefix).min(end);

    normalized
        .chars()
        .skip(start)
        .take(end - start)
        .collect()
}

/// Whether the mention plugin would accept this search term.
pub fn is_allowed_search_term(term: &str) -> bool {
    ALLOWED_SEARCH_TERM.is_match(term)
}
