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

use super::{POINTS_PER_CELL, cells_to_points, points_to_cells, theme};
use crate::animation::MaterialButtonState;
use crate::chat::{ButtonId, ChatPanel};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use unicode_width::UnicodeWidthStr;

/// Draw the option button row; returns each button's screen rect.
pub fn render(frame: &mut Frame, area: Rect, panel: &ChatPanel) -> Vec<(ButtonId, Rect)> {
    let buttons = panel.option_buttons();
    let slots = buttons.layout(cells_to_points(area.width), POINTS_PER_CELL);
    let mut hits = Vec::with_capacity(slots.len());
    for slot in slots {
        let Some(button) = buttons.get(slot.id) else {
            continue;
        };
        let x = area.x.saturating_add(points_to_cells(slot.x));
        let width = points_to_cells(slot.width).min(area.right().saturating_sub(x));
        if width == 0 {
            continue;
        }
        let rect = Rect::new(x, area.y, width, 1);
        let state = button.state();
        let background = if state.is_background_painted() {
            state.background()
        } else {
            theme::OPTION_BUTTON_BG
        };
        let label = button.label();
        paint_material(frame.buffer_mut(), rect, state, background, &label, theme::BUTTON_FG);
        hits.push((slot.id, rect));
    }
    hits
}

/// Paint a button: background, centred label, and the ripple as a tint of
/// the cells whose centres it currently covers.
pub(super) fn paint_material(
    buf: &mut Buffer,
    rect: Rect,
    state: &MaterialButtonState,
    background: Color,
    label: &str,
    foreground: Color,
) {
    let rect = rect.intersection(buf.area);
    if rect.is_empty() {
        return;
    }
    let ripple = state.ripple();
    for row in 0..rect.height {
        for col in 0..rect.width {
            let mut bg = background;
            if let Some(r) = ripple {
                let cx = cells_to_points(col) + POINTS_PER_CELL / 2.0;
                let cy = cells_to_points(row) + POINTS_PER_CELL / 2.0;
                if (cx - r.x).hypot(cy - r.y) <= r.diameter / 2.0 {
                    bg = theme::blend(bg, state.pressed_color(), r.alpha);
                }
            }
            if let Some(cell) = buf.cell_mut((rect.x + col, rect.y + row)) {
                cell.set_symbol(" ");
                cell.set_style(Style::default().bg(bg));
            }
        }
    }

    let label_width = u16::try_from(label.width()).unwrap_or(u16::MAX).min(rect.width);
    let x = rect.x + (rect.width - label_width) / 2;
    let y = rect.y + rect.height / 2;
    // Keep the (possibly tinted) background under the label
    for (i, ch) in label.chars().enumerate() {
        let Ok(offset) = u16::try_from(i) else { break };
        if offset >= label_width {
            break;
        }
        if let Some(cell) = buf.cell_mut((x + offset, y)) {
            cell.set_char(ch);
            cell.set_fg(foreground);
        }
    }
}
