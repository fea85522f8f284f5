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
use super::{points_to_cells, theme};
use crate::chat::ChatPanel;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

/// Horizontal padding inside the input field.
const INPUT_PAD: u16 = 1;

/// Maximum input area height (lines) to prevent the input from consuming the entire screen.
const MAX_INPUT_HEIGHT: u16 = 6;

pub fn render(frame: &mut Frame, area: Rect, panel: &ChatPanel) {
    let fg = if panel.is_enabled() { theme::INPUT_FG } else { theme::DIM };
    frame.render_widget(Paragraph::new("").style(Style::default().bg(theme::INPUT_BG)), area);
    let padded = Rect {
        x: area.x + INPUT_PAD,
        y: area.y,
        width: area.width.saturating_sub(INPUT_PAD * 2),
        height: area.height,
    };
    if padded.width == 0 {
        return;
    }

    let input = panel.input();
    let lines: Vec<Line> = input.lines.iter().map(|l| Line::raw(l.clone())).collect();
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(fg).bg(theme::INPUT_BG))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, padded);

    render_placeholder(frame, padded, panel);

    if panel.has_input_focus() {
        place_cursor(frame, padded, panel);
    }
}

/// The placeholder fades and drifts right while text is being typed, so it
/// is drawn after whatever the first line already holds.
fn render_placeholder(frame: &mut Frame, padded: Rect, panel: &ChatPanel) {
    let input = panel.input();
    let fade = panel.placeholder();
    if !input.is_empty() && !fade.is_running() {
        return;
    }
    let alpha = fade.alpha();
    if alpha <= 0.0 {
        return;
    }
    let first = input.lines.first().map_or(0, |l| l.width());
    let gap = usize::from(first > 0);
    let shift = usize::from(points_to_cells(fade.shift()));
    let Ok(x) = u16::try_from(first + gap + shift) else { return };
    if x >= padded.width {
        return;
    }
    let color = theme::blend(theme::INPUT_BG, theme::PLACEHOLDER_FG, alpha);
    let max = usize::from(padded.width - x);
    let style = Style::default().fg(color);
    frame.buffer_mut().set_stringn(padded.x + x, padded.y, panel.placeholder_text(), max, style);
}

#[allow(clippy::cast_possible_truncation)]
fn place_cursor(frame: &mut Frame, padded: Rect, panel: &ChatPanel) {
    let input = panel.input();
    let content_width = usize::from(padded.width);
    let mut visual_row: u16 = 0;
    for (row, line) in input.lines.iter().enumerate() {
        let line_chars = line.chars().count();
        let wrapped_lines = ((line_chars + content_width) / content_width).max(1) as u16;
        if row == input.cursor_row {
            let wrap_row = (input.cursor_col / content_width) as u16;
            let wrap_col = (input.cursor_col % content_width) as u16;
            let cursor_x = padded.x + wrap_col;
            let cursor_y = padded.y + visual_row + wrap_row;
            if cursor_x < padded.right() && cursor_y < padded.bottom() {
                frame.set_cursor_position((cursor_x, cursor_y));
            }
            return;
        }
        visual_row += wrapped_lines;
    }
}

pub fn render_send(frame: &mut Frame, area: Rect, panel: &ChatPanel) {
    let (start, end) = panel.send_button_color();
    // One glyph wide: it takes the colour at the middle of the gradient
    let fg = if panel.is_enabled() { theme::blend(start, end, 0.5) } else { theme::DIM };
    let state = panel.send_button();
    let background =
        if state.is_background_painted() { state.background() } else { theme::INPUT_BG };
    paint_material(frame.buffer_mut(), area, state, background, theme::SEND_ICON, fg);
}

/// Compute the number of visual lines the input occupies, accounting for wrapping.
/// Used by the layout to allocate the correct input area height.
#[allow(clippy::cast_possible_truncation)]
pub fn visual_line_count(panel: &ChatPanel, area_width: u16) -> u16 {
    let input = panel.input();
    if input.is_empty() {
        return 1;
    }
    let content_width = area_width
        .saturating_sub(super::layout::SEND_WIDTH)
        .saturating_sub(INPUT_PAD * 2) as usize;
    if content_width == 0 {
        return input.line_count().min(usize::from(MAX_INPUT_HEIGHT)) as u16;
    }

    let mut total: u16 = 0;
    for line in &input.lines {
        let chars = line.chars().count();
        let wrapped = ((chars + content_width) / content_width).max(1) as u16;
        total = total.saturating_add(wrapped);
    }
    total.min(MAX_INPUT_HEIGHT)
}
