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

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the send button at the end of the input row.
pub const SEND_WIDTH: u16 = 5;

pub struct PanelLayout {
    /// Zero-height when neither title nor close button is shown.
    pub title: Rect,
    pub body: Rect,
    /// Zero-height without option buttons.
    pub buttons: Rect,
    pub input_sep: Rect,
    pub input: Rect,
    pub send: Rect,
}

pub fn compute(area: Rect, input_lines: u16, show_title: bool, show_buttons: bool) -> PanelLayout {
    let [title, body, buttons, input_sep, input_row] = Layout::vertical([
        Constraint::Length(u16::from(show_title)),
        Constraint::Min(1),
        Constraint::Length(u16::from(show_buttons)),
        Constraint::Length(1),
        Constraint::Length(input_lines.max(1)),
    ])
    .areas(area);
    let [input, send] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(SEND_WIDTH)]).areas(input_row);
    PanelLayout { title, body, buttons, input_sep, input, send }
}
