//! Editable source text with a cursor
//!
//! The buffer is a plain text input: it stores whatever the user types and
//! never interprets it. The cursor is a byte offset that always sits on a
//! char boundary.

/// Editing operation applied to a [`SourceBuffer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    Insert(char),
    Newline,
    /// Insert [`INDENT`]
    Indent,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Text inserted by [`EditCommand::Indent`]
pub const INDENT: &str = "    ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    text: String,
    cursor: usize,
}

impl SourceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole text; the cursor moves to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Cursor as `(line, column)`, both zero-based, column counted in chars
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let column = before[self.line_start()..].chars().count();
        (line, column)
    }

    pub fn apply(&mut self, command: EditCommand) {
        match command {
            EditCommand::Insert(c) => self.insert_char(c),
            EditCommand::Newline => self.insert_char('\n'),
            EditCommand::Indent => self.insert_str(INDENT),
            EditCommand::Backspace => self.backspace(),
            EditCommand::Delete => self.delete(),
            EditCommand::Left => self.move_left(),
            EditCommand::Right => self.move_right(),
            EditCommand::Up => self.move_vertical(false),
            EditCommand::Down => self.move_vertical(true),
            EditCommand::Home => self.cursor = self.line_start(),
            EditCommand::End => self.cursor = self.line_end(),
        }
    }

    fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    fn backspace(&mut self) {
        if let Some(c) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    fn move_left(&mut self) {
        if let Some(c) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Byte offset where the cursor's line starts
    fn line_start(&self) -> usize {
        self.text[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// Byte offset where the cursor's line ends (before its newline)
    fn line_end(&self) -> usize {
        self.text[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.text.len())
    }

    /// Move to the same column on the adjacent line, clamped to its length
    fn move_vertical(&mut self, down: bool) {
        let column = self.text[self.line_start()..self.cursor].chars().count();

        let target_start = if down {
            let end = self.line_end();
            if end == self.text.len() {
                return;
            }
            end + 1
        } else {
            let start = self.line_start();
            if start == 0 {
                return;
            }
            self.text[..start - 1]
                .rfind('\n')
                .map(|i| i + 1)
                .unwrap_or(0)
        };

        let line = &self.text[target_start..];
        let line = &line[..line.find('\n').unwrap_or(line.len())];
        let offset: usize = line.chars().take(column).map(char::len_utf8).sum();
        self.cursor = target_start + offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> SourceBuffer {
        let mut buffer = SourceBuffer::new();
        for c in text.chars() {
            if c == '\n' {
                buffer.apply(EditCommand::Newline);
            } else {
                buffer.apply(EditCommand::Insert(c));
            }
        }
        buffer
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let buffer = typed("print(\"hi\")");
        assert_eq!(buffer.text(), "print(\"hi\")");
        assert_eq!(buffer.cursor_position(), (0, 11));
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut buffer = typed("abc");
        buffer.apply(EditCommand::Backspace);
        assert_eq!(buffer.text(), "ab");

        buffer.apply(EditCommand::Home);
        buffer.apply(EditCommand::Delete);
        assert_eq!(buffer.text(), "b");

        // Backspace at start of text is a no-op
        buffer.apply(EditCommand::Backspace);
        assert_eq!(buffer.text(), "b");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut buffer = typed("héllo");
        buffer.apply(EditCommand::Left);
        buffer.apply(EditCommand::Left);
        buffer.apply(EditCommand::Left);
        buffer.apply(EditCommand::Backspace);
        assert_eq!(buffer.text(), "hllo");
        assert_eq!(buffer.cursor_position(), (0, 1));
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let mut buffer = typed("long line\nab\nlast line");
        // Cursor at end of "last line" (column 9)
        buffer.apply(EditCommand::Up);
        assert_eq!(buffer.cursor_position(), (1, 2));
        buffer.apply(EditCommand::Up);
        assert_eq!(buffer.cursor_position(), (0, 2));
        buffer.apply(EditCommand::Up);
        assert_eq!(buffer.cursor_position(), (0, 2));

        buffer.apply(EditCommand::Down);
        buffer.apply(EditCommand::Down);
        assert_eq!(buffer.cursor_position(), (2, 2));
        buffer.apply(EditCommand::Down);
        assert_eq!(buffer.cursor_position(), (2, 2));
    }

    #[test]
    fn test_home_end_stay_on_line() {
        let mut buffer = typed("one\ntwo");
        buffer.apply(EditCommand::Home);
        assert_eq!(buffer.cursor_position(), (1, 0));
        buffer.apply(EditCommand::Up);
        buffer.apply(EditCommand::End);
        assert_eq!(buffer.cursor_position(), (0, 3));
    }

    #[test]
    fn test_indent_inserts_spaces() {
        let mut buffer = typed("x");
        buffer.apply(EditCommand::Home);
        buffer.apply(EditCommand::Indent);
        assert_eq!(buffer.text(), "    x");
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut buffer = typed("old");
        buffer.set_text("fib(10)\nprint(x)");
        assert_eq!(buffer.text(), "fib(10)\nprint(x)");
        assert_eq!(buffer.cursor_position(), (1, 8));
    }
}
