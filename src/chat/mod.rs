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

//! The chat component, independent of any rendering backend.
//!
//! [`ChatPanel`] owns the message list, the composed input, the title bar,
//! the option buttons and every animation; hosts feed it input and a clock
//! and read back what to draw.

mod buttons;
mod geometry;
mod input;
mod layout;
mod list;
mod listeners;
mod message;
mod panel;
mod translation;

pub use buttons::{
    BUTTON_GAP, BUTTON_PADDING, ButtonCallback, ButtonDescriptor, ButtonId, ButtonPosition,
    ButtonSlot, OptionButtons,
};
pub use geometry::{
    BubbleGeometry, CORNER_RADIUS, MIN_BUBBLE_SIZE, PathSegment, Point, TAIL_WIDTH,
};
pub use input::{CursorMove, InputState};
pub use layout::{LayoutMetrics, wrap_text};
pub use list::{MessageLayout, MessageList};
pub use listeners::{ChatEvent, ChatListener, ListenerRegistry};
pub use message::{Avatar, DEFAULT_TYPING_ICON, Message, MessageId, Side, SideStyle};
pub use panel::{ChatPanel, PLACEHOLDER_TEXT};
pub use translation::{TranslationMap, Translator};
