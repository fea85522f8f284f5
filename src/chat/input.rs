// chat-panel — A chat panel component with a terminal host
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Cursor movement inside the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Multi-line text being composed. Cursor positions count characters,
/// not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    pub lines: Vec<String>,
    pub cursor_row: usize,
    pub cursor_col: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self { lines: vec![String::new()], cursor_row: 0, cursor_col: 0 }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    /// Replace the whole buffer; the cursor ends up after the last character.
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.insert_str(text);
    }

    pub fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.cursor_row];
        let at = byte_index(line, self.cursor_col);
        line.insert(at, c);
        self.cursor_col += 1;
    }

    pub fn insert_newline(&mut self) {
        let line = &mut self.lines[self.cursor_row];
        let at = byte_index(line, self.cursor_col);
        let tail = line.split_off(at);
        self.cursor_row += 1;
        self.lines.insert(self.cursor_row, tail);
        self.cursor_col = 0;
    }

    pub fn insert_str(&mut self, s: &str) {
        let normalized = s.replace("\r\n", "\n");
        for c in normalized.chars() {
            if c == '\n' || c == '\r' {
                self.insert_newline();
            } else {
                self.insert_char(c);
            }
        }
    }

    /// Backspace. Returns whether anything was removed.
    pub fn delete_before(&mut self) -> bool {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_row];
            self.cursor_col -= 1;
            let at = byte_index(line, self.cursor_col);
            line.remove(at);
            true
        } else if self.cursor_row > 0 {
            let removed = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.lines[self.cursor_row].chars().count();
            self.lines[self.cursor_row].push_str(&removed);
            true
        } else {
            false
        }
    }

    /// Delete. Returns whether anything was removed.
    pub fn delete_after(&mut self) -> bool {
        let len = self.lines[self.cursor_row].chars().count();
        if self.cursor_col < len {
            let line = &mut self.lines[self.cursor_row];
            let at = byte_index(line, self.cursor_col);
            line.remove(at);
            true
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next);
            true
        } else {
            false
        }
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        let line_len = |s: &Self, row: usize| s.lines[row].chars().count();
        match movement {
            CursorMove::Left => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                } else if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.cursor_col = line_len(self, self.cursor_row);
                }
            }
            CursorMove::Right => {
                if self.cursor_col < line_len(self, self.cursor_row) {
                    self.cursor_col += 1;
                } else if self.cursor_row + 1 < self.lines.len() {
                    self.cursor_row += 1;
                    self.cursor_col = 0;
                }
            }
            CursorMove::Up if self.cursor_row > 0 => {
                self.cursor_row -= 1;
                self.cursor_col = self.cursor_col.min(line_len(self, self.cursor_row));
            }
            CursorMove::Down if self.cursor_row + 1 < self.lines.len() => {
                self.cursor_row += 1;
                self.cursor_col = self.cursor_col.min(line_len(self, self.cursor_row));
            }
            CursorMove::Home => self.cursor_col = 0,
            CursorMove::End => self.cursor_col = line_len(self, self.cursor_row),
            CursorMove::Up | CursorMove::Down => {}
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}
