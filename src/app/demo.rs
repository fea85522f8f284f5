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

use super::{App, HostEvent};
use crate::chat::{
    ButtonCallback, ButtonPosition, ChatEvent, ChatListener, ChatPanel, Message, Side,
};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

/// Echo bot: shows what the user sent as an outgoing bubble and answers
/// after `delay`, with the left typing indicator up in the meantime.
pub struct EchoListener {
    host_tx: mpsc::UnboundedSender<HostEvent>,
    pending: Arc<AtomicUsize>,
    delay: Duration,
}

impl EchoListener {
    pub fn new(
        host_tx: mpsc::UnboundedSender<HostEvent>,
        pending: Arc<AtomicUsize>,
        delay: Duration,
    ) -> Self {
        Self { host_tx, pending, delay }
    }

    fn schedule_reply(&self, text: &str) {
        self.pending.fetch_add(1, Ordering::SeqCst);
        let reply = format!("You said: {text}");
        let tx = self.host_tx.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(HostEvent::BotReply(reply)).is_err() {
                tracing::debug!("host gone before bot reply was delivered");
            }
        });
    }
}

impl ChatListener for EchoListener {
    fn chat_notification(&self, chat: &mut ChatPanel, event: &ChatEvent) {
        match event {
            ChatEvent::MessageSubmitted(text) => {
                chat.add_message(Message::right(text.clone()));
                chat.set_typing_indicator(Side::Left, true);
                self.schedule_reply(text);
            }
            ChatEvent::CloseRequested => {
                tracing::info!("close requested");
                let _ = self.host_tx.send(HostEvent::Close);
            }
        }
    }
}

/// Register the echo bot and the demo option buttons on `app`'s panel.
pub fn install(app: &mut App, reply_delay: Duration) {
    let listener =
        EchoListener::new(app.host_tx.clone(), Arc::clone(&app.pending_replies), reply_delay);
    app.panel.add_chat_listener(Arc::new(listener));

    let toggle_typing: ButtonCallback = Rc::new(|chat: &mut ChatPanel| {
        let typing = chat.is_typing(Side::Right);
        chat.set_typing_indicator(Side::Right, !typing);
    });
    app.panel.add_button(
        Some("\u{270E}"),
        Some("typing"),
        Some(toggle_typing),
        ButtonPosition::Left,
    );

    let clear: ButtonCallback = Rc::new(|chat: &mut ChatPanel| {
        for message in chat.messages() {
            chat.remove_message(message.id());
        }
    });
    app.panel.add_button(Some("\u{2716}"), Some("clear"), Some(clear), ButtonPosition::Right);
}

/// A delayed reply arrived: post it and drop the typing indicator once
/// nothing else is outstanding.
pub fn deliver_reply(app: &mut App, text: String) {
    let previous = app
        .pending_replies
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some(n.saturating_sub(1)))
        .unwrap_or(0);
    app.panel.add_message(Message::left(text));
    if previous <= 1 {
        app.panel.set_typing_indicator(Side::Left, false);
    }
}
