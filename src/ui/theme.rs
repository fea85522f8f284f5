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

use ratatui::style::Color;

// Panel background and chrome
pub const PANEL_BG: Color = Color::Rgb(60, 70, 82);
pub const TITLE_BG: Color = Color::Rgb(42, 49, 58);
pub const TITLE_FG: Color = Color::Rgb(235, 235, 235);
pub const DIM: Color = Color::Rgb(150, 156, 164);
pub const SEPARATOR_CHAR: &str = "\u{2500}";

// Input
pub const INPUT_BG: Color = Color::Rgb(245, 245, 245);
pub const INPUT_FG: Color = Color::Rgb(30, 30, 30);
pub const PLACEHOLDER_FG: Color = Color::Rgb(120, 120, 120);

// Buttons
pub const SEND_ICON: &str = "\u{27A4}";
pub const CLOSE_ICON: &str = "\u{2715}";
pub const SCROLL_DOWN_ICON: &str = "\u{2193}";
pub const BUTTON_FG: Color = Color::Rgb(245, 245, 245);
pub const OPTION_BUTTON_BG: Color = Color::Rgb(85, 96, 110);

// Bubble outline glyphs
pub const CORNER_TOP_LEFT: char = '\u{256D}';
pub const CORNER_TOP_RIGHT: char = '\u{256E}';
pub const CORNER_BOTTOM_LEFT: char = '\u{2570}';
pub const CORNER_BOTTOM_RIGHT: char = '\u{256F}';
pub const TAIL_LEFT: char = '\u{25E4}';
pub const TAIL_RIGHT: char = '\u{25E5}';

/// Mix `over` onto `base`. Only RGB colors blend; anything else snaps to
/// whichever side dominates.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blend(base: Color, over: Color, alpha: f64) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (base, over) {
        (Color::Rgb(br, bg, bb), Color::Rgb(or, og, ob)) => {
            let mix =
                |b: u8, o: u8| (f64::from(b) + (f64::from(o) - f64::from(b)) * alpha).round() as u8;
            Color::Rgb(mix(br, or), mix(bg, og), mix(bb, ob))
        }
        _ if alpha >= 0.5 => over,
        _ => base,
    }
}
