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

use super::panel::ChatPanel;
use crate::animation::MaterialButtonState;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Horizontal padding inside an option button, in layout points.
pub const BUTTON_PADDING: f64 = 10.0;
/// Space between neighbouring option buttons.
pub const BUTTON_GAP: f64 = 10.0;

pub type ButtonCallback = Rc<dyn Fn(&mut ChatPanel)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonPosition {
    Left,
    Right,
}

#[derive(Clone)]
pub struct ButtonDescriptor {
    id: ButtonId,
    icon: Option<String>,
    text: Option<String>,
    callback: Option<ButtonCallback>,
    position: ButtonPosition,
    state: MaterialButtonState,
}

impl ButtonDescriptor {
    #[must_use]
    pub fn id(&self) -> ButtonId {
        self.id
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn position(&self) -> ButtonPosition {
        self.position
    }

    #[must_use]
    pub fn callback(&self) -> Option<ButtonCallback> {
        self.callback.clone()
    }

    #[must_use]
    pub fn state(&self) -> &MaterialButtonState {
        &self.state
    }

    /// Icon and text joined by a space, whichever are present.
    #[must_use]
    pub fn label(&self) -> String {
        match (self.icon.as_deref(), self.text.as_deref()) {
            (Some(icon), Some(text)) => format!("{icon} {text}"),
            (Some(only), None) | (None, Some(only)) => only.to_owned(),
            (None, None) => String::new(),
        }
    }
}

impl fmt::Debug for ButtonDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonDescriptor")
            .field("id", &self.id)
            .field("icon", &self.icon)
            .field("text", &self.text)
            .field("position", &self.position)
            .field("has_callback", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}

/// Horizontal placement of one button, in layout points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonSlot {
    pub id: ButtonId,
    pub x: f64,
    pub width: f64,
}

/// Auxiliary buttons shown between the message list and the input.
#[derive(Debug, Clone, Default)]
pub struct OptionButtons {
    left: Vec<ButtonDescriptor>,
    right: Vec<ButtonDescriptor>,
    next_id: u64,
}

impl OptionButtons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        icon: Option<String>,
        text: Option<String>,
        callback: Option<ButtonCallback>,
        position: ButtonPosition,
    ) -> ButtonId {
        let id = ButtonId(self.next_id);
        self.next_id += 1;
        let descriptor = ButtonDescriptor {
            id,
            icon,
            text,
            callback,
            position,
            state: MaterialButtonState::new(),
        };
        match position {
            ButtonPosition::Left => self.left.push(descriptor),
            ButtonPosition::Right => self.right.push(descriptor),
        }
        id
    }

    pub fn remove(&mut self, id: ButtonId) -> bool {
        for list in [&mut self.left, &mut self.right] {
            if let Some(index) = list.iter().position(|b| b.id == id) {
                list.remove(index);
                return true;
            }
        }
        false
    }

    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.left.is_empty() || !self.right.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_visible()
    }

    #[must_use]
    pub fn get(&self, id: ButtonId) -> Option<&ButtonDescriptor> {
        self.left.iter().chain(&self.right).find(|b| b.id == id)
    }

    pub(crate) fn state_mut(&mut self, id: ButtonId) -> Option<&mut MaterialButtonState> {
        self.left.iter_mut().chain(&mut self.right).find(|b| b.id == id).map(|b| &mut b.state)
    }

    /// Buttons in insertion order per position.
    #[must_use]
    pub fn left(&self) -> &[ButtonDescriptor] {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &[ButtonDescriptor] {
        &self.right
    }

    /// Left-to-right visual order: left buttons as added, then right buttons
    /// with the most recent one furthest from the trailing edge.
    pub fn visual_order(&self) -> impl Iterator<Item = &ButtonDescriptor> {
        self.left.iter().chain(self.right.iter().rev())
    }

    /// Place buttons in a row `width` points wide. `char_width` converts
    /// label columns to points.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn layout(&self, width: f64, char_width: f64) -> Vec<ButtonSlot> {
        let measure =
            |b: &ButtonDescriptor| b.label().width() as f64 * char_width + BUTTON_PADDING * 2.0;
        let mut slots = Vec::with_capacity(self.len());

        let mut x = 0.0;
        for button in &self.left {
            let w = measure(button);
            slots.push(ButtonSlot { id: button.id, x, width: w });
            x += w + BUTTON_GAP;
        }

        let mut trailing = width;
        let mut right_slots = Vec::with_capacity(self.right.len());
        for button in &self.right {
            let w = measure(button);
            trailing -= w;
            right_slots.push(ButtonSlot { id: button.id, x: trailing, width: w });
            trailing -= BUTTON_GAP;
        }
        slots.extend(right_slots.into_iter().rev());
        slots
    }

    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        let mut active = false;
        for button in self.left.iter_mut().chain(&mut self.right) {
            active |= button.state.tick(now);
        }
        active
    }
}
