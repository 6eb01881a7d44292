//! Single-line editor for the generation prompt.

/// Prompt text with a byte-offset cursor.
#[derive(Debug, Clone, Default)]
pub struct PromptInput {
    text: String,
    cursor: usize,
}

impl PromptInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input with initial text, cursor at end.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_text(text);
        input
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor position in characters, for placing the terminal cursor.
    #[must_use]
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    /// Replace the text; line breaks become spaces. Cursor moves to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = flatten(&text.into());
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let c = if c == '\n' || c == '\r' { ' ' } else { c };
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text at the cursor.
    pub fn insert_str(&mut self, s: &str) {
        let flat = flatten(s.trim_end_matches(['\n', '\r']));
        self.text.insert_str(self.cursor, &flat);
        self.cursor += flat.len();
    }

    /// Backspace.
    pub fn delete_char_before(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    /// Delete key.
    pub fn delete_char_after(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.drain(self.cursor..next);
        }
    }

    /// Delete the word before the cursor (Ctrl+W).
    pub fn delete_word(&mut self) {
        let word_start = self.word_start();
        self.text.drain(word_start..self.cursor);
        self.cursor = word_start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_word_left(&mut self) {
        self.cursor = self.word_start();
    }

    pub const fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    fn word_start(&self) -> usize {
        let trimmed = self.text[..self.cursor].trim_end();
        trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8())
    }
}

fn flatten(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_appends_and_advances() {
        let mut input = PromptInput::new();
        for c in "fox".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text(), "fox");
        assert_eq!(input.cursor_column(), 3);
    }

    #[test]
    fn insert_in_middle() {
        let mut input = PromptInput::with_text("ac");
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn backspace_and_delete_respect_multibyte_chars() {
        let mut input = PromptInput::with_text("лиса");
        input.delete_char_before();
        assert_eq!(input.text(), "лис");

        input.move_home();
        input.delete_char_after();
        assert_eq!(input.text(), "ис");
    }

    #[test]
    fn edits_at_bounds_are_noops() {
        let mut input = PromptInput::with_text("x");
        input.delete_char_after();
        input.move_right();
        assert_eq!(input.text(), "x");

        input.move_home();
        input.delete_char_before();
        input.move_left();
        assert_eq!(input.text(), "x");
        assert_eq!(input.cursor_column(), 0);
    }

    #[test]
    fn delete_word_removes_previous_word() {
        let mut input = PromptInput::with_text("a red fox  ");
        input.delete_word();
        assert_eq!(input.text(), "a red ");
        input.delete_word();
        assert_eq!(input.text(), "a ");
    }

    #[test]
    fn move_word_left_stops_at_word_start() {
        let mut input = PromptInput::with_text("a red fox");
        input.move_word_left();
        assert_eq!(input.cursor_column(), 6);
        input.move_word_left();
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut input = PromptInput::new();
        input.insert_str("space ship\nnebula\r\n");
        assert_eq!(input.text(), "space ship nebula");
    }

    #[test]
    fn set_text_moves_cursor_to_end() {
        let mut input = PromptInput::with_text("old");
        input.move_home();
        input.set_text("new prompt");
        assert_eq!(input.cursor_column(), 10);
    }
}
