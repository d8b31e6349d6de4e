use std::sync::LazyLock;

use regex::Regex;
use wordmark_core::Lexer;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)*|[0-9]+|[^\sA-Za-z0-9]").expect("valid regex"));

/// Splits prepared text into words, numbers and single symbols
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLexer;

impl EnglishLexer {
    pub fn new() -> Self {
        Self
    }
}

impl Lexer for EnglishLexer {
    fn lex(&self, text: &str) -> Vec<String> {
        TOKEN_REGEX
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
