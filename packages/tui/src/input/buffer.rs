use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single-line text input with grapheme-aware cursor management
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    /// The actual text content
    content: String,
    /// Cursor position as byte index in the content string
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Length in graphemes, not bytes
    pub fn len(&self) -> usize {
        self.content.graphemes(true).count()
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.content.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        self.content.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Replace the whole content, cursor at the end
    pub fn set_content(&mut self, s: &str) {
        self.content.clear();
        self.content.push_str(s);
        self.cursor = self.content.len();
    }

    /// Delete the grapheme before the cursor (Backspace)
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let start = self.prev_boundary(self.cursor);
        self.content.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    /// Delete the grapheme under the cursor (Delete)
    pub fn delete_char(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }

        let end = self.next_boundary(self.cursor);
        self.content.drain(self.cursor..end);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = self.prev_boundary(self.cursor);
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.cursor = self.next_boundary(self.cursor);
        true
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Display column of the cursor, accounting for wide characters
    pub fn cursor_display_column(&self) -> u16 {
        self.content[..self.cursor].width() as u16
    }

    /// Last grapheme boundary strictly before `pos`
    fn prev_boundary(&self, pos: usize) -> usize {
        self.content
            .grapheme_indices(true)
            .take_while(|(idx, _)| *idx < pos)
            .last()
            .map(|(idx, _)| idx)
            .unwrap_or(0)
    }

    /// First grapheme boundary strictly after `pos`
    fn next_boundary(&self, pos: usize) -> usize {
        self.content
            .grapheme_indices(true)
            .find(|(idx, _)| *idx >= pos)
            .map(|(idx, g)| idx + g.len())
            .unwrap_or(self.content.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer() {
        let buffer = InputBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.cursor_position(), 0);
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("Hello");
        assert_eq!(buffer.content(), "Hello");

        assert!(buffer.backspace());
        assert_eq!(buffer.content(), "Hell");
        assert_eq!(buffer.cursor_position(), 4);

        buffer.move_to_start();
        assert!(!buffer.backspace());
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("abc");
        buffer.move_to_start();

        assert!(buffer.delete_char());
        assert_eq!(buffer.content(), "bc");
        assert_eq!(buffer.cursor_position(), 0);

        buffer.move_to_end();
        assert!(!buffer.delete_char());
    }

    #[test]
    fn test_cursor_movement() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("Hello");

        assert!(buffer.move_left());
        assert_eq!(buffer.cursor_position(), 4);

        buffer.move_to_start();
        assert!(!buffer.move_left());

        buffer.move_to_end();
        assert!(!buffer.move_right());
    }

    #[test]
    fn test_unicode_handling() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("🦀rust");

        // The crab emoji is 4 bytes but 1 grapheme
        assert_eq!(buffer.len(), 5);

        buffer.move_left(); // before 't'
        buffer.insert_char('!');
        assert_eq!(buffer.content(), "🦀rus!t");

        buffer.move_to_start();
        assert!(buffer.move_right());
        assert_eq!(buffer.cursor_position(), 4); // past the emoji
    }

    #[test]
    fn test_set_content_places_cursor_at_end() {
        let mut buffer = InputBuffer::new();
        buffer.set_content("recalled input");
        assert_eq!(buffer.content(), "recalled input");
        assert_eq!(buffer.cursor_position(), "recalled input".len());
    }
}
