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

use ratatui::style::Color;
use std::fmt;
use uuid::Uuid;

/// Horizontal alignment of a message; also selects default styling and the
/// avatar slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(Uuid);

impl MessageId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single chat entry. Colors are optional overrides, resolved against the
/// panel's [`SideStyle`] when drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    id: MessageId,
    text: String,
    side: Side,
    is_typing: bool,
    background: Option<Color>,
    foreground: Option<Color>,
}

impl Message {
    pub fn new(text: impl Into<String>, side: Side) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            side,
            is_typing: false,
            background: None,
            foreground: None,
        }
    }

    pub fn left(text: impl Into<String>) -> Self {
        Self::new(text, Side::Left)
    }

    pub fn right(text: impl Into<String>) -> Self {
        Self::new(text, Side::Right)
    }

    /// Transient "is typing" entry for `side`.
    pub fn typing(side: Side) -> Self {
        Self { is_typing: true, ..Self::new(String::new(), side) }
    }

    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    #[must_use]
    pub fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_colors(&mut self, background: Option<Color>, foreground: Option<Color>) {
        self.background = background;
        self.foreground = foreground;
    }

    #[must_use]
    pub fn resolved_background(&self, style: &SideStyle) -> Color {
        self.background.unwrap_or(style.background)
    }

    #[must_use]
    pub fn resolved_foreground(&self, style: &SideStyle) -> Color {
        self.foreground.unwrap_or(style.foreground)
    }
}

/// Glyph used for typing indicators when a side has no explicit icon.
pub const DEFAULT_TYPING_ICON: &str = "\u{00B7}\u{00B7}\u{00B7}";

/// Per-side defaults applied to messages without overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideStyle {
    pub background: Color,
    pub foreground: Color,
    pub typing_icon: Option<String>,
}

impl SideStyle {
    #[must_use]
    pub fn default_for(side: Side) -> Self {
        match side {
            // (250, 250, 250, a65) over the panel gradient
            Side::Left => Self {
                background: Color::Rgb(107, 117, 127),
                foreground: Color::Rgb(245, 245, 245),
                typing_icon: None,
            },
            // (255, 191, 0, a210) over the panel gradient
            Side::Right => Self {
                background: Color::Rgb(220, 170, 15),
                foreground: Color::Rgb(30, 30, 30),
                typing_icon: None,
            },
        }
    }

    #[must_use]
    pub fn typing_icon(&self) -> &str {
        self.typing_icon.as_deref().unwrap_or(DEFAULT_TYPING_ICON)
    }
}

/// Avatar image stand-in: a short glyph supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    glyph: String,
}

impl Avatar {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self { glyph: glyph.into() }
    }

    #[must_use]
    pub fn glyph(&self) -> &str {
        &self.glyph
    }
}
