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

use chat_panel::animation::{ManualClock, SCROLL_DURATION};
use chat_panel::chat::{ChatEvent, ChatPanel, LayoutMetrics};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

/// Panel on a manual clock with terminal metrics and a `cols` x `rows` viewport.
pub fn test_panel(cols: u16, rows: u16) -> (ChatPanel, ManualClock) {
    let clock = ManualClock::new();
    let mut panel =
        ChatPanel::with_clock(Rc::new(clock.clone())).with_metrics(LayoutMetrics::terminal());
    panel.resize(f64::from(cols) * 10.0, f64::from(rows) * 10.0);
    (panel, clock)
}

/// Run every animation to completion.
pub fn settle(panel: &mut ChatPanel, clock: &ManualClock) {
    for _ in 0..4 {
        clock.advance(SCROLL_DURATION);
        panel.tick();
    }
}

/// Listener that records every event it sees.
pub fn recorder(panel: &ChatPanel) -> Arc<Mutex<Vec<ChatEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    panel.add_chat_listener(Arc::new(move |_: &mut ChatPanel, e: &ChatEvent| {
        sink.lock().unwrap().push(e.clone());
    }));
    events
}
