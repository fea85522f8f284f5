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
use crate::chat::{BubbleGeometry, ChatPanel, Message, MessageLayout, Side};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthStr;

/// Floating "scroll to bottom" button size, in cells.
const FLOATING_WIDTH: u16 = 5;
const FLOATING_MARGIN: u16 = 1;

/// Draw the visible messages and the floating button; returns the button's
/// clickable rect while any of it is on screen.
pub fn render(frame: &mut Frame, area: Rect, panel: &ChatPanel) -> Option<Rect> {
    if area.is_empty() {
        return None;
    }
    let scroll_rows = i32::from(points_to_cells(panel.scroll_offset()));
    let avatar_cols = points_to_cells(panel.metrics().avatar_slot());
    let buf = frame.buffer_mut();

    for (message, placed) in panel.message_list().placed() {
        let Some(placed) = placed else { continue };
        let top = i32::from(points_to_cells(placed.y)) - scroll_rows;
        let rows = i32::from(points_to_cells(placed.bubble_height));
        if top + rows <= 0 || top >= i32::from(area.height) {
            continue;
        }
        let side = message.side();
        let avatar = panel.avatar(side);
        let reserved = if avatar.is_some() { avatar_cols } else { 0 };
        let bubble = Bubble::new(message, placed, panel, area, reserved);
        bubble.draw(buf, area, top);
        if let Some(avatar) = avatar {
            let x = match side {
                Side::Left => area.x,
                Side::Right => area.right().saturating_sub(reserved.saturating_sub(1)),
            };
            let style = Style::default().fg(theme::DIM).add_modifier(Modifier::BOLD);
            put(buf, area, x, top + bubble.tail_row(), avatar.glyph(), style);
        }
    }

    render_floating(buf, area, panel)
}

struct Bubble<'a> {
    lines: &'a [String],
    side: Side,
    geometry: BubbleGeometry,
    x: u16,
    /// Box width without the tail column.
    width: u16,
    rows: i32,
    background: Color,
    foreground: Color,
    italic: bool,
}

impl<'a> Bubble<'a> {
    fn new(
        message: &Message,
        placed: &'a MessageLayout,
        panel: &ChatPanel,
        area: Rect,
        reserved: u16,
    ) -> Self {
        let style = panel.side_style(message.side());
        let total =
            points_to_cells(placed.bubble_width).max(3).min(area.width.saturating_sub(reserved));
        let x = match message.side() {
            Side::Left => area.x + reserved,
            Side::Right => area.right().saturating_sub(reserved + total),
        };
        Self {
            lines: &placed.lines,
            side: message.side(),
            geometry: BubbleGeometry::new(
                message.side(),
                placed.bubble_width,
                placed.bubble_height,
            ),
            x,
            width: total.saturating_sub(1),
            rows: i32::from(points_to_cells(placed.bubble_height)),
            background: message.resolved_background(style),
            foreground: message.resolved_foreground(style),
            italic: message.is_typing(),
        }
    }

    /// Row of the tail tip, relative to the bubble top.
    fn tail_row(&self) -> i32 {
        i32::from(points_to_cells(self.geometry.tail_tip().y)).min(self.rows - 1)
    }

    fn draw(&self, buf: &mut Buffer, area: Rect, top: i32) {
        if self.width < 2 {
            return;
        }
        let (box_x, tail_x) = match self.side {
            Side::Left => (self.x + 1, self.x),
            Side::Right => (self.x, self.x + self.width),
        };
        let edge = Style::default().fg(self.background).bg(theme::PANEL_BG);
        let mut body = Style::default().fg(self.foreground).bg(self.background);
        if self.italic {
            body = body.add_modifier(Modifier::ITALIC);
        }
        let inner = usize::from(self.width - 2);
        let rule = "\u{2500}".repeat(inner);

        let top_edge = format!("{}{rule}{}", theme::CORNER_TOP_LEFT, theme::CORNER_TOP_RIGHT);
        put(buf, area, box_x, top, &top_edge, edge);
        for (i, line) in self.lines.iter().enumerate() {
            let Ok(row) = i32::try_from(i) else { break };
            let y = top + 1 + row;
            put(buf, area, box_x, y, "\u{2502}", edge);
            let pad = inner.saturating_sub(line.width());
            put(buf, area, box_x + 1, y, &format!("{line}{}", " ".repeat(pad)), body);
            put(buf, area, box_x + self.width - 1, y, "\u{2502}", edge);
        }
        let bottom = top + self.rows - 1;
        let bottom_edge =
            format!("{}{rule}{}", theme::CORNER_BOTTOM_LEFT, theme::CORNER_BOTTOM_RIGHT);
        put(buf, area, box_x, bottom, &bottom_edge, edge);
        let tail = match self.side {
            Side::Left => theme::TAIL_LEFT,
            Side::Right => theme::TAIL_RIGHT,
        };
        put(buf, area, tail_x, top + self.tail_row(), &tail.to_string(), edge);
    }
}

fn render_floating(buf: &mut Buffer, area: Rect, panel: &ChatPanel) -> Option<Rect> {
    let floating = panel.floating_button();
    if !floating.is_visible() && !floating.is_running() {
        return None;
    }
    let rest_y = area.bottom().checked_sub(1 + FLOATING_MARGIN)?;
    let y = rest_y.saturating_add(points_to_cells(floating.offset()));
    if y >= area.bottom() || area.width < FLOATING_WIDTH + FLOATING_MARGIN {
        return None;
    }
    let x = area.right() - FLOATING_WIDTH - FLOATING_MARGIN;
    let rect = Rect::new(x, y, FLOATING_WIDTH, 1);
    let state = panel.scroll_button();
    paint_material(buf, rect, state, state.background(), theme::SCROLL_DOWN_ICON, theme::BUTTON_FG);
    Some(rect)
}

/// Write `text` at column `x` of content row `y` (relative to `area.y`),
/// clipped to `area`.
fn put(buf: &mut Buffer, area: Rect, x: u16, y: i32, text: &str, style: Style) {
    let Ok(row) = u16::try_from(y) else { return };
    if row >= area.height || x >= area.right() {
        return;
    }
    let max_width = usize::from(area.right() - x);
    buf.set_stringn(x, area.y + row, text, max_width, style);
}
