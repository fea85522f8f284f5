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

use super::App;
use crate::chat::CursorMove;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Fraction of the viewport a page key scrolls.
const PAGE_FRACTION: f64 = 0.9;

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match (key.code, key.modifiers) {
        // Ctrl+C / Ctrl+Q: quit
        (KeyCode::Char('c' | 'q'), _) if ctrl => app.should_quit = true,
        // Esc / Ctrl+W: same as the close button
        (KeyCode::Esc, _) => request_close(app),
        (KeyCode::Char('w'), _) if ctrl => request_close(app),
        // Ctrl+L: force full terminal redraw
        (KeyCode::Char('l'), _) if ctrl => app.force_redraw = true,
        // Shift+Enter / Alt+Enter: newline; plain Enter and Ctrl+Enter send
        (KeyCode::Enter, m) if m.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) => {
            app.panel.insert_newline();
        }
        (KeyCode::Enter, _) => {
            app.panel.submit_message();
        }
        (KeyCode::Backspace, _) => app.panel.delete_backward(),
        (KeyCode::Delete, _) => app.panel.delete_forward(),
        (KeyCode::Left, _) => app.panel.move_cursor(CursorMove::Left),
        (KeyCode::Right, _) => app.panel.move_cursor(CursorMove::Right),
        (KeyCode::Up, _) => app.panel.move_cursor(CursorMove::Up),
        (KeyCode::Down, _) => app.panel.move_cursor(CursorMove::Down),
        (KeyCode::End, _) if ctrl => app.panel.scroll_to_bottom(),
        (KeyCode::Home, _) => app.panel.move_cursor(CursorMove::Home),
        (KeyCode::End, _) => app.panel.move_cursor(CursorMove::End),
        (KeyCode::PageUp, _) => page(app, -1.0),
        (KeyCode::PageDown, _) => page(app, 1.0),
        (KeyCode::Tab, _) => app.panel.insert_str("    "),
        (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            app.panel.request_focus();
            app.panel.insert_char(c);
        }
        _ => {}
    }
}

fn request_close(app: &mut App) {
    if app.panel.is_close_visible() {
        app.panel.request_close();
    }
}

fn page(app: &mut App, direction: f64) {
    let (_, height) = app.panel.viewport();
    app.panel.scroll_by(direction * height * PAGE_FRACTION);
}
