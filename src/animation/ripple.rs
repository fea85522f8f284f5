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

use super::{Animator, Easing};
use ratatui::style::Color;
use std::time::{Duration, Instant};

pub const RIPPLE_DURATION: Duration = Duration::from_millis(400);

const RIPPLE_START_ALPHA: f64 = 0.5;

/// Snapshot of a press ripple, in the button's own coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
    pub alpha: f64,
}

/// Material style button: optional filled background plus an expanding
/// press ripple.
#[derive(Debug, Clone)]
pub struct MaterialButtonState {
    animator: Animator,
    pressed_at: Option<(f64, f64)>,
    target_size: f64,
    size: f64,
    alpha: f64,
    background_painted: bool,
    background: Color,
    pressed_color: Color,
}

impl MaterialButtonState {
    pub fn new() -> Self {
        Self {
            animator: Animator::new(RIPPLE_DURATION, Easing::Linear),
            pressed_at: None,
            target_size: 0.0,
            size: 0.0,
            alpha: 0.0,
            background_painted: false,
            background: Color::White,
            pressed_color: Color::Rgb(173, 173, 173),
        }
    }

    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self.background_painted = true;
        self
    }

    /// Start a ripple at `(x, y)` inside a `width` x `height` button.
    /// A running ripple is restarted.
    pub fn press(&mut self, x: f64, y: f64, width: f64, height: f64, now: Instant) {
        self.pressed_at = Some((x, y));
        self.target_size = width.max(height) * 2.0;
        self.size = 0.0;
        self.alpha = RIPPLE_START_ALPHA;
        self.animator.stop();
        self.animator.start(now);
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(f) = self.animator.tick(now) else {
            return false;
        };
        if f > 0.5 {
            self.alpha = 1.0 - f;
        }
        self.size = f * self.target_size;
        true
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    /// Current ripple, if one is still visible.
    #[must_use]
    pub fn ripple(&self) -> Option<Ripple> {
        let (x, y) = self.pressed_at?;
        (self.alpha > 0.0).then_some(Ripple { x, y, diameter: self.size, alpha: self.alpha })
    }

    #[must_use]
    pub fn is_background_painted(&self) -> bool {
        self.background_painted
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub fn pressed_color(&self) -> Color {
        self.pressed_color
    }
}

impl Default for MaterialButtonState {
    fn default() -> Self {
        Self::new()
    }
}
