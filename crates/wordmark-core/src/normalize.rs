use regex::Captures;
use unicode_normalization::char::is_combining_mark;

use crate::link::{LINK_REGEX, LinkSpan};

/// Replace every link with the text it shows
pub fn strip_links(text: &str) -> String {
    LINK_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            let target = caps.get(1).map_or("", |m| m.as_str());
            let display = caps.get(2).map(|m| m.as_str().to_string());
            LinkSpan::new(target, display).shown().to_string()
        })
        .into_owned()
}

/// Characters that survive punctuation stripping
pub fn is_kept_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, ',' | '.' | '[' | ']' | '|')
}

/// Letters of any script, combining marks and the link delimiters `[`, `]` and `|`.
///
/// A combining mark belongs to the letter before it, so `cafe` followed by
/// U+0301 is not a free-standing word.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || is_combining_mark(c) || matches!(c, '[' | ']' | '|')
}

/// Drop everything except ASCII letters, digits, whitespace, `,`, `.`, `[`, `]` and `|`
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| is_kept_char(*c)).collect()
}

/// Links first, so a literal bracket never leaks into a token
pub fn normalize(text: &str) -> String {
    strip_punctuation(&strip_links(text))
}

/// Put a space after every non-word character so the lexer sees clean boundaries
pub fn space_boundaries(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        out.push(c);
        if !is_word_char(c) {
            out.push(' ');
        }
    }
    out
}
