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

use chat_panel::animation::{ManualClock, PLACEHOLDER_DURATION};
use chat_panel::app::App;
use chat_panel::chat::{Avatar, ButtonPosition, Message, PLACEHOLDER_TEXT, Side};
use chat_panel::ui::theme;
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use std::rc::Rc;

fn test_app() -> (App, ManualClock) {
    let clock = ManualClock::new();
    (App::test_default(Rc::new(clock.clone())), clock)
}

fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| chat_panel::ui::render(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_owned()).collect()
}

fn screen(buf: &Buffer) -> String {
    (0..buf.area.height).map(|y| row(buf, y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn empty_panel_shows_placeholder() {
    let (mut app, _) = test_app();
    let buf = draw(&mut app, 40, 8);
    assert!(row(&buf, 7).contains(PLACEHOLDER_TEXT));
    // no title bar: first row is message area
    assert!(!screen(&buf).contains('\u{2715}'));
}

#[test]
fn placeholder_fades_out_once_typing_settles() {
    let (mut app, clock) = test_app();
    app.panel.insert_str("hey");
    clock.advance(PLACEHOLDER_DURATION);
    app.panel.tick();
    let buf = draw(&mut app, 40, 8);
    assert!(row(&buf, 7).contains("hey"));
    assert!(!row(&buf, 7).contains(PLACEHOLDER_TEXT));
}

#[test]
fn title_and_close_button_render_in_title_bar() {
    let (mut app, _) = test_app();
    app.panel.set_title(Some("Support"));
    app.panel.set_close_visible(true);
    let buf = draw(&mut app, 40, 8);
    let title = row(&buf, 0);
    assert!(title.contains("Support"));
    assert!(title.contains('\u{2715}'));
    assert_eq!(app.hit_areas.close.map(|r| (r.y, r.width)), Some((0, 3)));
}

#[test]
fn messages_and_avatars_render_on_their_sides() {
    let (mut app, _) = test_app();
    app.panel.set_avatar(Side::Left, Some(Avatar::new("B")));
    draw(&mut app, 40, 12);
    app.panel.add_message(Message::left("hello"));
    app.panel.add_message(Message::right("hi there"));
    let buf = draw(&mut app, 40, 12);
    let text = screen(&buf);
    assert!(text.contains("hello"));
    assert!(text.contains("hi there"));
    // left bubble sits after the 4-column avatar slot, its avatar level with the tail
    assert!(row(&buf, 0).starts_with("B   \u{25E4}\u{256D}"));
    assert!(row(&buf, 1).starts_with("     \u{2502}hello\u{2502}"));
    assert!(row(&buf, 5).trim_end().ends_with("\u{2502}hi there\u{2502}"));
}

#[test]
fn option_buttons_get_hit_areas() {
    let (mut app, _) = test_app();
    let left = app.panel.add_button(None, Some("one"), None, ButtonPosition::Left);
    let right = app.panel.add_button(None, Some("two"), None, ButtonPosition::Right);
    let buf = draw(&mut app, 40, 10);
    let ids: Vec<_> = app.hit_areas.options.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![left, right]);
    let (_, right_rect) = app.hit_areas.options[1];
    assert_eq!(right_rect.right(), 40);
    assert!(row(&buf, right_rect.y).contains("two"));
}

#[test]
fn send_icon_takes_gradient_midpoint() {
    let (mut app, _) = test_app();
    app.panel.set_send_button_color(Color::Rgb(0, 0, 0), Color::Rgb(200, 100, 50));
    let buf = draw(&mut app, 40, 8);
    let send = app.hit_areas.send;
    let icon = (send.x..send.right())
        .flat_map(|x| (send.y..send.bottom()).map(move |y| (x, y)))
        .map(|pos| &buf[pos])
        .find(|cell| cell.symbol() == theme::SEND_ICON)
        .unwrap();
    assert_eq!(icon.fg, Color::Rgb(100, 50, 25));
}
