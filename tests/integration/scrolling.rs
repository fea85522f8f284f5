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

use crate::helpers::{settle, test_panel};
use chat_panel::animation::{FLOATING_DURATION, SCROLL_DURATION};
use chat_panel::chat::{ChatPanel, Message};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn fill(panel: &mut ChatPanel, count: usize) {
    for i in 0..count {
        panel.add_message(Message::left(format!("message {i}")));
    }
}

#[test]
fn new_message_scrolls_to_bottom_smoothly() {
    let (mut panel, clock) = test_panel(40, 10);
    fill(&mut panel, 10);
    assert!(panel.scroll().running());
    clock.advance(SCROLL_DURATION / 2);
    panel.tick();
    let midway = panel.scroll_offset();
    assert!(midway > 0.0 && midway < panel.max_scroll());
    clock.advance(SCROLL_DURATION);
    assert!(!panel.tick() || panel.floating_button().is_running());
    assert_eq!(panel.scroll_offset(), panel.max_scroll());
}

#[test]
fn retargeting_never_moves_backwards() {
    let (mut panel, clock) = test_panel(40, 10);
    fill(&mut panel, 10);
    let mut last = 0.0;
    for step in 0..20 {
        clock.advance(Duration::from_millis(40));
        panel.tick();
        if step % 5 == 0 {
            panel.add_message(Message::right(format!("more {step}")));
        }
        let now = panel.scroll_offset();
        assert!(now >= last, "offset went back from {last} to {now}");
        last = now;
    }
}

#[test]
fn floating_button_appears_when_scrolled_up_and_hides_at_bottom() {
    let (mut panel, clock) = test_panel(40, 10);
    fill(&mut panel, 20);
    settle(&mut panel, &clock);
    assert!(!panel.floating_button().is_visible());

    // jump far from the bottom in one step, then nudge down
    panel.set_scroll_value(0.0);
    panel.scroll_by(10.0);
    assert!(panel.floating_button().is_visible());
    clock.advance(FLOATING_DURATION);
    panel.tick();
    assert_eq!(panel.floating_button().offset(), 0.0);

    panel.set_scroll_value(panel.max_scroll());
    assert!(!panel.floating_button().is_visible());
}

#[test]
fn scrolling_away_from_latest_reveals_button() {
    let (mut panel, clock) = test_panel(40, 10);
    fill(&mut panel, 30);
    settle(&mut panel, &clock);
    assert!(!panel.floating_button().is_visible());
    for _ in 0..5 {
        panel.scroll_by(-100.0);
    }
    assert!(panel.scroll_offset() < panel.max_scroll());
    assert!(panel.floating_button().is_visible());
    clock.advance(FLOATING_DURATION);
    panel.tick();
    assert_eq!(panel.floating_button().offset(), 0.0);
}

#[test]
fn button_holds_while_scroll_to_bottom_runs() {
    let (mut panel, clock) = test_panel(40, 10);
    fill(&mut panel, 30);
    settle(&mut panel, &clock);
    panel.set_scroll_value(0.0);
    assert!(panel.floating_button().is_visible());
    panel.scroll_to_bottom();
    clock.advance(SCROLL_DURATION / 2);
    panel.tick();
    assert!(panel.scroll().running());
    assert!(panel.floating_button().is_visible());
    settle(&mut panel, &clock);
    assert!(!panel.floating_button().is_visible());
}

#[test]
fn removing_messages_mid_scroll_stays_within_content() {
    let (mut panel, clock) = test_panel(40, 10);
    let ids: Vec<_> =
        (0..30).map(|i| panel.add_message(Message::left(format!("message {i}")))).collect();
    assert!(panel.scroll().running());
    for id in &ids[10..] {
        panel.remove_message(*id);
    }
    settle(&mut panel, &clock);
    assert!(panel.scroll_offset() <= panel.max_scroll());
    assert_eq!(panel.scroll_offset(), panel.max_scroll());
}

#[test]
fn shrinking_content_mid_scroll_does_not_jump() {
    let (mut panel, clock) = test_panel(40, 10);
    let ids: Vec<_> =
        (0..30).map(|i| panel.add_message(Message::left(format!("message {i}")))).collect();
    clock.advance(SCROLL_DURATION / 2);
    panel.tick();
    let before = panel.scroll_offset();
    panel.remove_message(ids[29]);
    assert_eq!(panel.scroll_offset(), before);
    assert!(panel.scroll().target() <= panel.max_scroll());
    settle(&mut panel, &clock);
    assert_eq!(panel.scroll_offset(), panel.max_scroll());
}

#[test]
fn scroll_down_button_returns_to_bottom() {
    let (mut panel, clock) = test_panel(40, 10);
    fill(&mut panel, 20);
    settle(&mut panel, &clock);
    panel.set_scroll_value(0.0);
    panel.press_scroll_down(25.0, 5.0, 50.0, 10.0);
    assert!(panel.scroll_button().is_running());
    settle(&mut panel, &clock);
    assert_eq!(panel.scroll_offset(), panel.max_scroll());
    assert!(!panel.floating_button().is_visible());
}

#[test]
fn user_scroll_is_clamped() {
    let (mut panel, clock) = test_panel(40, 10);
    fill(&mut panel, 5);
    settle(&mut panel, &clock);
    panel.scroll_by(-10_000.0);
    assert_eq!(panel.scroll_offset(), 0.0);
    panel.scroll_by(10_000.0);
    assert_eq!(panel.scroll_offset(), panel.max_scroll());
}

#[test]
fn short_content_never_scrolls() {
    let (mut panel, _) = test_panel(40, 10);
    panel.add_message(Message::left("only"));
    assert_eq!(panel.max_scroll(), 0.0);
    assert!(!panel.scroll().running());
}
