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

use super::{App, HostEvent, demo, keys};
use crate::ui::POINTS_PER_CELL;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Rows scrolled per mouse wheel notch.
const MOUSE_SCROLL_LINES: f64 = 3.0;

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => keys::handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Paste(text) => app.panel.insert_str(&text),
        Event::FocusLost => app.panel.blur(),
        Event::FocusGained => app.panel.request_focus(),
        // Resize is picked up by the next render
        _ => {}
    }
}

pub fn handle_host_event(app: &mut App, event: HostEvent) {
    match event {
        HostEvent::BotReply(text) => demo::deliver_reply(app, text),
        HostEvent::Close => app.should_quit = true,
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.panel.scroll_by(-MOUSE_SCROLL_LINES * POINTS_PER_CELL),
        MouseEventKind::ScrollDown => app.panel.scroll_by(MOUSE_SCROLL_LINES * POINTS_PER_CELL),
        MouseEventKind::Down(MouseButton::Left) => {
            handle_click(app, Position::new(mouse.column, mouse.row));
        }
        _ => {}
    }
}

fn handle_click(app: &mut App, pos: Position) {
    let areas = &app.hit_areas;
    if let Some(rect) = areas.close.filter(|r| r.contains(pos)) {
        let (x, y, w, h) = local_points(rect, pos);
        app.panel.press_close(x, y, w, h);
    } else if let Some(rect) = areas.scroll_down.filter(|r| r.contains(pos)) {
        let (x, y, w, h) = local_points(rect, pos);
        app.panel.press_scroll_down(x, y, w, h);
    } else if areas.send.contains(pos) {
        let (x, y, w, h) = local_points(areas.send, pos);
        app.panel.press_send(x, y, w, h);
    } else if let Some((id, rect)) = areas.options.iter().find(|(_, r)| r.contains(pos)).copied() {
        let (x, y, w, h) = local_points(rect, pos);
        app.panel.press_option(id, x, y, w, h);
    } else if areas.input.contains(pos) {
        app.panel.request_focus();
    } else if areas.body.contains(pos) {
        app.panel.blur();
    }
}

/// Click position inside `rect` (cell centre) and the rect's size, in layout points.
fn local_points(rect: Rect, pos: Position) -> (f64, f64, f64, f64) {
    let cell = |v: u16| f64::from(v) * POINTS_PER_CELL;
    (
        cell(pos.x - rect.x) + POINTS_PER_CELL / 2.0,
        cell(pos.y - rect.y) + POINTS_PER_CELL / 2.0,
        cell(rect.width),
        cell(rect.height),
    )
}
