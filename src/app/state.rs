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

use crate::chat::{ButtonId, ChatPanel};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc;

/// Events delivered to the host loop from outside the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The echo bot finished "typing" a reply.
    BotReply(String),
    /// A listener asked the host to close the panel.
    Close,
}

/// Screen rectangles of clickable elements, refreshed on every render.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub body: Rect,
    pub input: Rect,
    pub send: Rect,
    pub close: Option<Rect>,
    pub scroll_down: Option<Rect>,
    pub options: Vec<(ButtonId, Rect)>,
}

pub struct App {
    pub panel: ChatPanel,
    pub should_quit: bool,
    pub host_tx: mpsc::UnboundedSender<HostEvent>,
    pub host_rx: mpsc::UnboundedReceiver<HostEvent>,
    /// Replies the echo bot still owes; shared with its listener.
    pub pending_replies: Arc<AtomicUsize>,
    /// Where clickable elements landed in the last frame (for mouse hit-testing).
    pub hit_areas: HitAreas,
    /// Force a full terminal clear on next render frame.
    pub force_redraw: bool,
}

impl App {
    /// Bare app around `panel`, without the demo listener or buttons.
    pub fn with_panel(panel: ChatPanel) -> Self {
        let (host_tx, host_rx) = mpsc::unbounded_channel();
        Self {
            panel,
            should_quit: false,
            host_tx,
            host_rx,
            pending_replies: Arc::new(AtomicUsize::new(0)),
            hit_areas: HitAreas::default(),
            force_redraw: false,
        }
    }

    #[must_use]
    pub fn pending_replies(&self) -> usize {
        self.pending_replies.load(Ordering::SeqCst)
    }

    /// Minimal app for tests: terminal metrics, manual time, no listeners.
    #[doc(hidden)]
    pub fn test_default(clock: std::rc::Rc<dyn crate::animation::Clock>) -> Self {
        let panel =
            ChatPanel::with_clock(clock).with_metrics(crate::chat::LayoutMetrics::terminal());
        Self::with_panel(panel)
    }
}
