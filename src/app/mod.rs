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

mod demo;
mod events;
mod keys;
mod state;

pub use demo::{EchoListener, deliver_reply};
pub use events::{handle_host_event, handle_terminal_event};
pub use state::{App, HitAreas, HostEvent};

use crate::Cli;
use crate::chat::{Avatar, ChatPanel, LayoutMetrics, Side, TranslationMap};
use crate::error::AppError;
use crossterm::event::{
    EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use futures::{FutureExt as _, StreamExt};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Build the demo app from the command line: panel options, translations,
/// the echo bot and its option buttons.
pub fn create_app(cli: &Cli) -> Result<App, AppError> {
    let mut panel = ChatPanel::new().with_metrics(LayoutMetrics::terminal());
    if let Some(path) = cli.translations.as_deref() {
        panel.set_translation(Some(Rc::new(TranslationMap::from_path(path)?)));
    }
    panel.set_title(cli.title.as_deref());
    panel.set_close_visible(cli.closable);
    panel.set_avatar(Side::Left, cli.avatar_left.as_deref().map(Avatar::new));
    panel.set_avatar(Side::Right, cli.avatar_right.as_deref().map(Avatar::new));
    panel.request_focus();

    let mut app = App::with_panel(panel);
    demo::install(&mut app, Duration::from_millis(cli.echo_delay_ms));
    tracing::debug!(title = ?cli.title, closable = cli.closable, "demo app created");
    Ok(app)
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::try_init().map_err(|e| {
        tracing::error!("failed to initialise terminal: {e}");
        AppError::TerminalFailed
    })?;

    // Enable bracketed paste and mouse capture (ignore error on unsupported terminals)
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::EnableBracketedPaste,
        crossterm::event::EnableMouseCapture,
        crossterm::event::EnableFocusChange,
        // Enable enhanced keyboard protocol for reliable modifier detection (e.g. Shift+Enter)
        PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
        )
    );

    let result = event_loop(&mut terminal, app).await;

    // Restore terminal
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::DisableBracketedPaste,
        crossterm::event::DisableMouseCapture,
        crossterm::event::DisableFocusChange,
        PopKeyboardEnhancementFlags
    );
    ratatui::restore();

    result
}

async fn event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                events::handle_terminal_event(app, event);
            }
            Some(event) = app.host_rx.recv() => {
                events::handle_host_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        loop {
            // Try terminal events first (keeps typing responsive)
            if let Some(Some(Ok(event))) = events.next().now_or_never() {
                events::handle_terminal_event(app, event);
                continue;
            }
            match app.host_rx.try_recv() {
                Ok(event) => events::handle_host_event(app, event),
                Err(_) => break,
            }
        }

        if app.should_quit {
            break;
        }

        // Phase 3: advance animations and render once
        app.panel.tick();
        if app.force_redraw {
            terminal.clear().map_err(|e| {
                tracing::error!("terminal clear failed: {e}");
                AppError::TerminalFailed
            })?;
            app.force_redraw = false;
        }
        terminal.draw(|f| crate::ui::render(f, app)).map_err(|e| {
            tracing::error!("terminal draw failed: {e}");
            AppError::TerminalFailed
        })?;
        last_render = Instant::now();
    }

    tracing::info!(messages = app.panel.message_list().len(), "chat panel closed");
    Ok(())
}
