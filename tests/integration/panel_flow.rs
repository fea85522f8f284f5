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
use chat_panel::chat::{
    ButtonCallback, ButtonPosition, ChatEvent, ChatPanel, Message, Side, TranslationMap,
};
use pretty_assertions::assert_eq;
use std::io::Write as _;
use std::rc::Rc;
use std::sync::Arc;

fn texts(panel: &ChatPanel) -> Vec<String> {
    panel
        .messages()
        .iter()
        .map(|m| {
            if m.is_typing() { format!("<{:?} typing>", m.side()) } else { m.text().to_owned() }
        })
        .collect()
}

#[test]
fn reply_lands_above_typing_indicator() {
    let (mut panel, _) = test_panel(40, 10);
    panel.set_typing_indicator(Side::Left, true);
    panel.add_message(Message::left("hi"));
    assert_eq!(texts(&panel), vec!["hi", "<Left typing>"]);

    panel.set_typing_indicator(Side::Left, false);
    assert_eq!(texts(&panel), vec!["hi"]);
}

#[test]
fn indicators_for_both_sides_coexist() {
    let (mut panel, _) = test_panel(40, 10);
    panel.set_typing_indicator(Side::Left, true);
    panel.set_typing_indicator(Side::Right, true);
    panel.add_message(Message::right("out"));
    panel.add_message(Message::left("in"));
    assert_eq!(texts(&panel), vec!["in", "<Left typing>", "out", "<Right typing>"]);
}

#[test]
fn empty_submit_sends_nothing_and_keeps_focus() {
    let (mut panel, _) = test_panel(40, 10);
    let events = recorder(&panel);
    assert!(!panel.submit_message());
    panel.insert_str(" \n ");
    assert!(!panel.submit_message());
    assert!(events.lock().unwrap().is_empty());
    assert!(!panel.has_input_focus());
}

#[test]
fn submit_reaches_every_listener_in_order() {
    let (mut panel, _) = test_panel(40, 10);
    let first = recorder(&panel);
    let second = recorder(&panel);
    panel.insert_str("hello");
    assert!(panel.submit_message());
    let expected = vec![ChatEvent::MessageSubmitted("hello".to_owned())];
    assert_eq!(*first.lock().unwrap(), expected);
    assert_eq!(*second.lock().unwrap(), expected);
    assert!(panel.input().is_empty());
    assert!(panel.has_input_focus());
}

#[test]
fn listener_can_unregister_itself_during_dispatch() {
    let (mut panel, _) = test_panel(40, 10);
    let registry = panel.listeners();
    let slot: Arc<std::sync::Mutex<Option<Arc<dyn chat_panel::chat::ChatListener>>>> =
        Arc::default();
    let me = Arc::clone(&slot);
    let listener: Arc<dyn chat_panel::chat::ChatListener> =
        Arc::new(move |_: &mut ChatPanel, _: &ChatEvent| {
            if let Some(this) = me.lock().unwrap().take() {
                registry.remove(&this);
            }
        });
    *slot.lock().unwrap() = Some(Arc::clone(&listener));
    panel.add_chat_listener(listener);
    let later = recorder(&panel);

    panel.insert_str("x");
    panel.submit_message();
    assert_eq!(panel.chat_listeners().len(), 1);
    assert_eq!(later.lock().unwrap().len(), 1);
}

#[test]
fn close_visibility_is_idempotent() {
    let (mut panel, _) = test_panel(40, 10);
    panel.set_close_visible(true);
    panel.set_close_visible(true);
    assert!(panel.is_close_visible());
    assert!(panel.is_title_bar_visible());
    panel.set_close_visible(false);
    panel.set_close_visible(false);
    assert!(!panel.is_title_bar_visible());
}

#[test]
fn close_button_notifies_only_when_shown() {
    let (mut panel, _) = test_panel(40, 10);
    let events = recorder(&panel);
    panel.press_close(5.0, 5.0, 30.0, 10.0);
    assert!(events.lock().unwrap().is_empty());
    panel.set_close_visible(true);
    panel.press_close(5.0, 5.0, 30.0, 10.0);
    assert_eq!(*events.lock().unwrap(), vec![ChatEvent::CloseRequested]);
    assert!(panel.close_button().is_running());
}

#[test]
fn absent_targets_are_ignored() {
    let (mut panel, _) = test_panel(40, 10);
    let orphan = Message::left("never added");
    assert!(!panel.remove_message(orphan.id()));
    assert!(panel.message(orphan.id()).is_none());
    let id = panel.add_button(None, Some("x"), None, ButtonPosition::Left);
    assert!(panel.remove_button(id));
    assert!(!panel.remove_button(id));
    assert!(!panel.press_option(id, 0.0, 0.0, 10.0, 10.0));
}

#[test]
fn option_buttons_order_and_visibility() {
    let (mut panel, _) = test_panel(40, 10);
    assert!(!panel.are_option_buttons_visible());
    let l1 = panel.add_button(None, Some("l1"), None, ButtonPosition::Left);
    let l2 = panel.add_button(None, Some("l2"), None, ButtonPosition::Left);
    let r1 = panel.add_button(None, Some("r1"), None, ButtonPosition::Right);
    let r2 = panel.add_button(None, Some("r2"), None, ButtonPosition::Right);
    let order: Vec<_> = panel.option_buttons().visual_order().map(|b| b.id()).collect();
    assert_eq!(order, vec![l1, l2, r2, r1]);
    panel.remove_all_buttons();
    assert!(!panel.are_option_buttons_visible());
}

#[test]
fn option_callback_can_edit_panel() {
    let (mut panel, _) = test_panel(40, 10);
    panel.add_message(Message::left("a"));
    panel.add_message(Message::right("b"));
    let clear: ButtonCallback = Rc::new(|chat: &mut ChatPanel| {
        for m in chat.messages() {
            chat.remove_message(m.id());
        }
    });
    let id = panel.add_button(None, Some("clear"), Some(clear), ButtonPosition::Right);
    assert!(panel.press_option(id, 1.0, 1.0, 70.0, 10.0));
    assert!(panel.messages().is_empty());
    assert_eq!(panel.content_height(), 0.0);
}

#[test]
fn translation_file_drives_placeholder_and_title() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"Enter your message": "Schreib was", "Help": "Hilfe", "hi": "hallo"}}"#)
        .unwrap();
    let map = TranslationMap::from_path(file.path()).unwrap();

    let (mut panel, _) = test_panel(40, 10);
    panel.set_title(Some("Help"));
    let id = panel.add_message(Message::left("hi"));
    panel.set_translation(Some(Rc::new(map)));
    assert_eq!(panel.placeholder_text(), "Schreib was");
    assert_eq!(panel.title_text(), Some("Hilfe"));
    let message = panel.message(id).unwrap().clone();
    assert_eq!(panel.display_text(&message), "hallo");
    // stored text is untouched
    assert_eq!(message.text(), "hi");
}

#[test]
fn disabled_panel_blocks_editing() {
    let (mut panel, _) = test_panel(40, 10);
    panel.insert_str("draft");
    panel.set_enabled(false);
    panel.insert_char('!');
    panel.delete_backward();
    assert_eq!(panel.input().text(), "draft");
    assert!(!panel.submit_message());
    panel.set_enabled(true);
    assert!(panel.submit_message());
}
