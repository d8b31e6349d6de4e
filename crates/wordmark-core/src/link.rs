use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::CoreError;

/// `[[target]]` or `[[target|display]]`
pub(crate) static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^|\]]*)(?:\|([^\]]*))?\]\]").expect("valid regex"));

/// A wiki-style link as written in the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpan {
    pub target: String,
    pub display: Option<String>,
}

impl LinkSpan {
    pub fn new(target: impl Into<String>, display: Option<String>) -> Self {
        Self {
            target: target.into(),
            display,
        }
    }

    /// Text a reader sees for this link
    pub fn shown(&self) -> &str {
        match self.display.as_deref() {
            Some(display) if !display.is_empty() => display,
            _ => &self.target,
        }
    }

    fn from_captures(caps: &Captures<'_>) -> Self {
        Self {
            target: caps.get(1).map_or("", |m| m.as_str()).to_string(),
            display: caps.get(2).map(|m| m.as_str().to_string()),
        }
    }
}

/// Parse the first link found in `span`.
///
/// Asking for a link in text that has none is a caller bug and is reported as
/// `CoreError::NotALink`.
pub fn parse_link(span: &str) -> Result<LinkSpan, CoreError> {
    LINK_REGEX
        .captures(span)
        .map(|caps| LinkSpan::from_captures(&caps))
        .ok_or_else(|| CoreError::NotALink(span.to_string()))
}

/// Every link in `text` with its byte range, left to right
pub fn find_links(text: &str) -> impl Iterator<Item = (Range<usize>, LinkSpan)> + '_ {
    LINK_REGEX.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        Some((whole.range(), LinkSpan::from_captures(&caps)))
    })
}
