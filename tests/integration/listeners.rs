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

use crate::helpers::{recorder, test_panel};
use chat_panel::chat::{ChatEvent, ChatListener, ChatPanel, Message, Side};
use pretty_assertions::assert_eq;
use std::sync::Arc;

struct Echo;

impl ChatListener for Echo {
    fn chat_notification(&self, chat: &mut ChatPanel, event: &ChatEvent) {
        if let ChatEvent::MessageSubmitted(text) = event {
            chat.add_message(Message::right(text.clone()));
        }
    }
}

#[test]
fn same_listener_registers_once() {
    let (panel, _) = test_panel(40, 10);
    let echo: Arc<dyn ChatListener> = Arc::new(Echo);
    assert!(panel.add_chat_listener(Arc::clone(&echo)));
    assert!(!panel.add_chat_listener(Arc::clone(&echo)));
    assert_eq!(panel.chat_listeners().len(), 1);
    assert!(panel.remove_chat_listener(&echo));
    assert!(!panel.remove_chat_listener(&echo));
}

#[test]
fn echo_listener_adds_message_synchronously() {
    let (mut panel, _) = test_panel(40, 10);
    panel.add_chat_listener(Arc::new(Echo));
    panel.set_typing_indicator(Side::Right, true);
    panel.insert_str("ping");
    panel.submit_message();
    let messages = panel.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text(), "ping");
    assert!(messages[1].is_typing());
    assert!(panel.scroll().running() || panel.max_scroll() == 0.0);
}

#[test]
fn registration_from_another_thread() {
    let (mut panel, _) = test_panel(40, 10);
    let handle = panel.listeners();
    std::thread::spawn(move || {
        handle.add(Arc::new(Echo));
    })
    .join()
    .unwrap();
    let events = recorder(&panel);
    panel.insert_str("from thread");
    panel.submit_message();
    assert_eq!(panel.messages().len(), 1);
    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn close_request_is_broadcast() {
    let (mut panel, _) = test_panel(40, 10);
    let a = recorder(&panel);
    let b = recorder(&panel);
    panel.request_close();
    assert_eq!(*a.lock().unwrap(), vec![ChatEvent::CloseRequested]);
    assert_eq!(*b.lock().unwrap(), vec![ChatEvent::CloseRequested]);
}
