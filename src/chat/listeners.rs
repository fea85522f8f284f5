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

use super::panel::ChatPanel;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Notifications a panel sends to its listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    CloseRequested,
    MessageSubmitted(String),
}

/// Receives panel notifications on the UI thread, in registration order.
///
/// The panel is handed in mutably so a listener can react synchronously,
/// e.g. by echoing a submitted message with [`ChatPanel::add_message`].
pub trait ChatListener: Send + Sync {
    fn chat_notification(&self, chat: &mut ChatPanel, event: &ChatEvent);
}

impl<F> ChatListener for F
where
    F: Fn(&mut ChatPanel, &ChatEvent) + Send + Sync,
{
    fn chat_notification(&self, chat: &mut ChatPanel, event: &ChatEvent) {
        self(chat, event);
    }
}

/// Shared listener list.
///
/// Clones are handles to the same list, so other threads may register or
/// drop listeners. Dispatch works on a [`snapshot`](Self::snapshot), which
/// lets callbacks change the registration while a notification runs.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<Vec<Arc<dyn ChatListener>>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` unless the same instance is already present.
    pub fn add(&self, listener: Arc<dyn ChatListener>) -> bool {
        let mut list = self.lock();
        if list.iter().any(|l| same_listener(l, &listener)) {
            return false;
        }
        list.push(listener);
        true
    }

    pub fn remove(&self, listener: &Arc<dyn ChatListener>) -> bool {
        let mut list = self.lock();
        let Some(index) = list.iter().position(|l| same_listener(l, listener)) else {
            return false;
        };
        list.remove(index);
        true
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<dyn ChatListener>> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A listener that panicked while registered must not take the panel down.
    fn lock(&self) -> MutexGuard<'_, Vec<Arc<dyn ChatListener>>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry").field("len", &self.len()).finish()
    }
}

fn same_listener(a: &Arc<dyn ChatListener>, b: &Arc<dyn ChatListener>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
