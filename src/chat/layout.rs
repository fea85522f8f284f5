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

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Lengths used to place messages, in layout points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub line_height: f64,
    pub char_width: f64,
    /// Space above and below each message.
    pub message_margin: f64,
    /// Space between bubble edge and text.
    pub text_padding: f64,
    /// Extra inset on the tail side of a bubble.
    pub tail_margin: f64,
    pub avatar_size: f64,
    pub avatar_gap: f64,
}

impl LayoutMetrics {
    #[must_use]
    pub const fn desktop() -> Self {
        Self {
            line_height: 16.0,
            char_width: 7.0,
            message_margin: 5.0,
            text_padding: 10.0,
            tail_margin: 8.0,
            avatar_size: 28.0,
            avatar_gap: 5.0,
        }
    }

    /// One terminal cell = 10 x 10 points.
    #[must_use]
    pub const fn terminal() -> Self {
        Self {
            line_height: 10.0,
            char_width: 10.0,
            message_margin: 5.0,
            text_padding: 10.0,
            tail_margin: 10.0,
            avatar_size: 30.0,
            avatar_gap: 10.0,
        }
    }

    /// Horizontal bubble space not taken by text.
    #[must_use]
    pub fn bubble_chrome(&self) -> f64 {
        self.text_padding * 2.0 + self.tail_margin
    }

    #[must_use]
    pub fn avatar_slot(&self) -> f64 {
        self.avatar_size + self.avatar_gap
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::desktop()
    }
}

/// Greedy word wrap by display width. Explicit newlines are kept, words
/// longer than `max_cols` are split, and the result always has at least one
/// line.
#[must_use]
pub fn wrap_text(text: &str, max_cols: usize) -> Vec<String> {
    let max_cols = max_cols.max(1);
    let mut out = Vec::new();
    for raw in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0usize;
        for word in raw.split(' ') {
            let word_width = word.width();
            let sep = usize::from(!line.is_empty());
            if line_width + sep + word_width <= max_cols {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += sep + word_width;
                continue;
            }
            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if word_width <= max_cols {
                line.push_str(word);
                line_width = word_width;
                continue;
            }
            for ch in word.chars() {
                let w = ch.width().unwrap_or(0);
                if line_width + w > max_cols && !line.is_empty() {
                    out.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += w;
            }
        }
        out.push(line);
    }
    out
}
