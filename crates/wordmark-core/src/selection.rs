use std::ops::Range;

/// What an editor knows about where the user is pointing
pub trait CursorContext {
    /// Selected text, if anything is selected
    fn selection(&self) -> Option<&str>;

    /// The word under the caret, possibly empty
    fn word_at_cursor(&self) -> &str;
}

/// The word the user interacted with, letters only
pub fn selected_surface_word(context: &impl CursorContext) -> String {
    let raw = match context.selection() {
        Some(selected) if !selected.is_empty() => selected,
        _ => context.word_at_cursor(),
    };
    raw.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

/// A caret (and optional selection) inside a plain string
#[derive(Debug, Clone)]
pub struct TextCursor<'a> {
    text: &'a str,
    offset: usize,
    selection: Option<Range<usize>>,
}

impl<'a> TextCursor<'a> {
    /// `offset` is a byte offset, clamped to the text and moved back to a char boundary
    pub fn at(text: &'a str, offset: usize) -> Self {
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        Self {
            text,
            offset,
            selection: None,
        }
    }

    pub fn with_selection(mut self, range: Range<usize>) -> Self {
        self.selection = Some(range);
        self
    }

    /// Byte range of the word touching the caret
    pub fn word_range(&self) -> Range<usize> {
        let is_word = |c: char| c.is_alphanumeric() || c == '\'';

        let start = self.text[..self.offset]
            .char_indices()
            .rev()
            .take_while(|(_, c)| is_word(*c))
            .last()
            .map_or(self.offset, |(i, _)| i);
        let end = self.text[self.offset..]
            .char_indices()
            .find(|(_, c)| !is_word(*c))
            .map_or(self.text.len(), |(i, _)| self.offset + i);

        start..end
    }
}

impl CursorContext for TextCursor<'_> {
    fn selection(&self) -> Option<&str> {
        self.selection.clone().and_then(|range| self.text.get(range))
    }

    fn word_at_cursor(&self) -> &str {
        &self.text[self.word_range()]
    }
}
