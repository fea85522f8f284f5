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

pub mod animation;
pub mod app;
pub mod chat;
pub mod error;
pub mod ui;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "chat-demo", about = "Terminal chat panel demo with an echo bot")]
pub struct Cli {
    /// Title shown in the title bar
    #[arg(long, short)]
    pub title: Option<String>,

    /// Show the close button in the title bar
    #[arg(long)]
    pub closable: bool,

    /// Avatar glyph for incoming (left) messages
    #[arg(long)]
    pub avatar_left: Option<String>,

    /// Avatar glyph for outgoing (right) messages
    #[arg(long)]
    pub avatar_right: Option<String>,

    /// JSON object mapping source texts to translations
    #[arg(long)]
    pub translations: Option<std::path::PathBuf>,

    /// Delay before the echo bot answers
    #[arg(long, default_value_t = 1200)]
    pub echo_delay_ms: u64,

    /// Write tracing output to this file (tracing is off without it)
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives, e.g. `chat_panel=debug`
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
