use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Single-line query input with a byte-indexed cursor
#[derive(Debug, Clone, Default)]
pub struct InputField {
    value: String,
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Set the value and move cursor to end
    pub fn set_value(&mut self, value: String) {
        self.cursor = value.len();
        self.value = value;
    }

    /// Handle an editing key; returns whether the text changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let changed = !self.value.is_empty();
                self.value.clear();
                self.cursor = 0;
                changed
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            KeyCode::Char(c) => {
                self.value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let prev = self.prev_char_boundary(self.cursor);
                self.value.remove(prev);
                self.cursor = prev;
                true
            }
            KeyCode::Delete => {
                if self.cursor >= self.value.len() {
                    return false;
                }
                self.value.remove(self.cursor);
                true
            }
            KeyCode::Left => {
                self.cursor = self.prev_char_boundary(self.cursor);
                false
            }
            KeyCode::Right => {
                self.cursor = self.next_char_boundary(self.cursor);
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                false
            }
            _ => false,
        }
    }

    fn prev_char_boundary(&self, pos: usize) -> usize {
        let mut new_pos = pos.saturating_sub(1);
        while new_pos > 0 && !self.value.is_char_boundary(new_pos) {
            new_pos -= 1;
        }
        new_pos
    }

    fn next_char_boundary(&self, pos: usize) -> usize {
        let mut new_pos = pos + 1;
        while new_pos < self.value.len() && !self.value.is_char_boundary(new_pos) {
            new_pos += 1;
        }
        new_pos.min(self.value.len())
    }

    /// Cursor position in characters, for placing the terminal cursor
    pub fn visual_cursor(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }
}

/// Picker-level key command; anything else is text input
#[derive(Debug, Clone, PartialEq)]
pub enum KeyCommand {
    NextRow,
    PrevRow,
    PageDown,
    PageUp,
    Accept,
    Rebuild,
    Cancel,
    None,
}

impl KeyCommand {
    pub fn from_key(key: KeyEvent) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => Self::Cancel,
            KeyCode::Char('n') if ctrl => Self::NextRow,
            KeyCode::Char('p') if ctrl => Self::PrevRow,
            KeyCode::Char('r') if ctrl => Self::Rebuild,
            KeyCode::Esc => Self::Cancel,
            KeyCode::Enter => Self::Accept,
            KeyCode::Down => Self::NextRow,
            KeyCode::Up => Self::PrevRow,
            KeyCode::PageDown => Self::PageDown,
            KeyCode::PageUp => Self::PageUp,
            _ => Self::None,
        }
    }
}
