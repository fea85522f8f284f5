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

mod buttons;
mod chat;
mod header;
mod input;
mod layout;
pub mod theme;

use crate::app::{App, HitAreas};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

/// Layout points per terminal cell, both axes.
pub const POINTS_PER_CELL: f64 = 10.0;

pub fn render(frame: &mut Frame, app: &mut App) {
    let frame_area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme::PANEL_BG)), frame_area);

    let panel = &mut app.panel;
    let input_lines = input::visual_line_count(panel, frame_area.width);
    let areas = layout::compute(
        frame_area,
        input_lines,
        panel.is_title_bar_visible(),
        panel.are_option_buttons_visible(),
    );
    panel.resize(cells_to_points(areas.body.width), cells_to_points(areas.body.height));

    let mut hits = HitAreas {
        body: areas.body,
        input: areas.input,
        send: areas.send,
        ..HitAreas::default()
    };

    if areas.title.height > 0 {
        hits.close = header::render(frame, areas.title, panel);
    }
    hits.scroll_down = chat::render(frame, areas.body, panel);
    if areas.buttons.height > 0 {
        hits.options = buttons::render(frame, areas.buttons, panel);
    }
    render_separator(frame, areas.input_sep);
    input::render(frame, areas.input, panel);
    input::render_send(frame, areas.send, panel);

    app.hit_areas = hits;
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let line = Line::from(Span::styled(
        theme::SEPARATOR_CHAR.repeat(usize::from(area.width)),
        Style::default().fg(theme::DIM),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn cells_to_points(cells: u16) -> f64 {
    f64::from(cells) * POINTS_PER_CELL
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn points_to_cells(points: f64) -> u16 {
    (points / POINTS_PER_CELL).round().clamp(0.0, f64::from(u16::MAX)) as u16
}
