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

use super::buttons::paint_material;
use crate::chat::ChatPanel;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const HEADER_PAD: u16 = 1;
const CLOSE_WIDTH: u16 = 3;

/// Title bar; returns the close button's rect when it is shown.
pub fn render(frame: &mut Frame, area: Rect, panel: &ChatPanel) -> Option<Rect> {
    frame.render_widget(Paragraph::new("").style(Style::default().bg(theme::TITLE_BG)), area);

    let close = (panel.is_close_visible() && area.width > CLOSE_WIDTH)
        .then(|| Rect::new(area.right() - CLOSE_WIDTH, area.y, CLOSE_WIDTH, 1));

    if let Some(title) = panel.title_text() {
        let reserved = close.map_or(0, |r| r.width);
        let padded = Rect {
            x: area.x + HEADER_PAD,
            y: area.y,
            width: area.width.saturating_sub(HEADER_PAD * 2 + reserved),
            height: 1,
        };
        let line = Line::from(Span::styled(
            title.to_owned(),
            Style::default().fg(theme::TITLE_FG).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), padded);
    }

    if let Some(rect) = close {
        let state = panel.close_button();
        let background = state.background();
        let icon = theme::CLOSE_ICON;
        paint_material(frame.buffer_mut(), rect, state, background, icon, theme::BUTTON_FG);
    }
    close
}
