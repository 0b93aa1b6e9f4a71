//! Line editor state for the interactive console.
//!
//! Tracks the input buffer, cursor, and command history separately from
//! the terminal so the editing rules stay testable without a TTY. The
//! cursor is a byte offset, always on a character boundary.

/// Editable input line with history navigation.
#[derive(Debug)]
pub struct LineEditor {
    input: String,
    cursor: usize,

    /// Command history, oldest first
    history: Vec<String>,

    /// Current position in history (None = not browsing)
    history_index: Option<usize>,

    /// Saved input while browsing history (restored if browsing is
    /// walked past the newest entry)
    saved_input: Option<String>,

    /// Maximum history entries kept; 0 disables history
    history_limit: usize,
}

impl LineEditor {
    pub fn new(history_limit: usize) -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
            saved_input: None,
            history_limit,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Replace the whole line, placing the cursor at the end.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.cursor = self.input.len();
    }

    /// Take the current input, recording it in history.
    ///
    /// Blank lines and immediate repeats are not recorded. History is
    /// trimmed from the oldest end once it exceeds the limit.
    pub fn consume_input(&mut self) -> String {
        let input = std::mem::take(&mut self.input);
        self.cursor = 0;

        if self.history_limit > 0 && !input.trim().is_empty() {
            if self.history.last().map(|s| s.as_str()) != Some(input.as_str()) {
                self.history.push(input.clone());
                if self.history.len() > self.history_limit {
                    let excess = self.history.len() - self.history_limit;
                    self.history.drain(..excess);
                }
            }
        }

        self.history_index = None;
        self.saved_input = None;

        input
    }

    /// Navigate to the previous history entry (up arrow)
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }

        match self.history_index {
            None => {
                self.saved_input = Some(self.input.clone());
                self.history_index = Some(self.history.len() - 1);
                self.input = self.history[self.history.len() - 1].clone();
            }
            Some(idx) if idx > 0 => {
                self.history_index = Some(idx - 1);
                self.input = self.history[idx - 1].clone();
            }
            Some(_) => {
                // Already at the oldest entry
            }
        }
        self.cursor = self.input.len();
    }

    /// Navigate to the next history entry (down arrow)
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {
                // Not browsing history
            }
            Some(idx) => {
                if idx + 1 < self.history.len() {
                    self.history_index = Some(idx + 1);
                    self.input = self.history[idx + 1].clone();
                } else {
                    self.history_index = None;
                    if let Some(saved) = self.saved_input.take() {
                        self.input = saved;
                    }
                }
            }
        }
        self.cursor = self.input.len();
    }

    /// Insert text at the cursor
    pub fn insert(&mut self, text: &str) {
        self.input.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Delete the character before the cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.input[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.input.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor (delete)
    pub fn delete(&mut self) {
        if self.cursor < self.input.len() {
            let next = self.input[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.input.len());
            self.input.replace_range(self.cursor..next, "");
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.input[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.input.len() {
            self.cursor = self.input[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.input.len());
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.input.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_navigation() {
        let mut editor = LineEditor::new(100);

        editor.set_input("first");
        editor.consume_input();
        editor.set_input("second");
        editor.consume_input();
        editor.set_input("third");
        editor.consume_input();

        // Type something new, then walk back
        editor.set_input("current");

        editor.history_prev();
        assert_eq!(editor.input(), "third");

        editor.history_prev();
        assert_eq!(editor.input(), "second");

        editor.history_next();
        assert_eq!(editor.input(), "third");

        // Walking past the newest entry restores the typed line
        editor.history_next();
        assert_eq!(editor.input(), "current");
    }

    #[test]
    fn test_duplicate_history_prevention() {
        let mut editor = LineEditor::new(100);

        for _ in 0..3 {
            editor.set_input("same");
            editor.consume_input();
        }

        editor.history_prev();
        assert_eq!(editor.input(), "same");
        editor.history_prev();
        assert_eq!(editor.input(), "same");
        // Still just one entry, so walking forward lands on saved input
        editor.history_next();
        assert_eq!(editor.input(), "");
    }

    #[test]
    fn test_blank_lines_not_recorded() {
        let mut editor = LineEditor::new(100);
        editor.set_input("   ");
        editor.consume_input();
        editor.history_prev();
        assert_eq!(editor.input(), "");
    }

    #[test]
    fn test_history_limit_trims_oldest() {
        let mut editor = LineEditor::new(2);
        for cmd in ["one", "two", "three"] {
            editor.set_input(cmd);
            editor.consume_input();
        }

        editor.history_prev();
        assert_eq!(editor.input(), "three");
        editor.history_prev();
        assert_eq!(editor.input(), "two");
        editor.history_prev();
        assert_eq!(editor.input(), "two", "oldest entry was trimmed");
    }

    #[test]
    fn test_zero_limit_disables_history() {
        let mut editor = LineEditor::new(0);
        editor.set_input("dm x");
        assert_eq!(editor.consume_input(), "dm x");
        editor.history_prev();
        assert_eq!(editor.input(), "");
    }

    #[test]
    fn test_cursor_movement() {
        let mut editor = LineEditor::new(100);
        editor.insert("hello");
        assert_eq!(editor.cursor(), 5);

        editor.cursor_left();
        assert_eq!(editor.cursor(), 4);

        editor.cursor_home();
        assert_eq!(editor.cursor(), 0);

        editor.cursor_end();
        assert_eq!(editor.cursor(), 5);
    }

    #[test]
    fn test_editing_at_cursor() {
        let mut editor = LineEditor::new(100);
        editor.insert("dm xy");
        editor.cursor_left();
        editor.insert(",");
        assert_eq!(editor.input(), "dm x,y");

        editor.backspace();
        assert_eq!(editor.input(), "dm xy");

        editor.cursor_home();
        editor.delete();
        assert_eq!(editor.input(), "m xy");
    }

    #[test]
    fn test_multibyte_boundaries() {
        let mut editor = LineEditor::new(100);
        editor.insert("caf\u{e9}");
        assert_eq!(editor.cursor(), 5);

        editor.backspace();
        assert_eq!(editor.input(), "caf");
        assert_eq!(editor.cursor(), 3);

        editor.insert("\u{e9}");
        editor.cursor_left();
        assert_eq!(editor.cursor(), 3);
        editor.delete();
        assert_eq!(editor.input(), "caf");
    }
}
