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
use std::time::{Duration, Instant};

pub const PLACEHOLDER_DURATION: Duration = Duration::from_millis(350);

/// Horizontal drift of the placeholder while it fades out.
pub const PLACEHOLDER_SHIFT: f64 = 30.0;

/// Fade state of the input placeholder.
///
/// `amount` is 0 while the placeholder is fully shown and 1 once it has
/// faded out. The direction flips whenever a run ends or is interrupted,
/// and an interrupted run restarts from `1 - f` so the fade reverses in
/// place.
#[derive(Debug, Clone)]
pub struct PlaceholderFadeState {
    animator: Animator,
    fading_out: bool,
    amount: f64,
}

impl PlaceholderFadeState {
    pub fn new() -> Self {
        Self {
            animator: Animator::new(PLACEHOLDER_DURATION, Easing::SMOOTH),
            fading_out: true,
            amount: 0.0,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Placeholder opacity.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        1.0 - self.amount
    }

    #[must_use]
    pub fn shift(&self) -> f64 {
        self.amount * PLACEHOLDER_SHIFT
    }

    /// Text was inserted; `blank` describes the text afterwards.
    pub fn on_insert(&mut self, blank: bool, now: Instant) {
        if blank {
            return;
        }
        if self.fading_out {
            if !self.animator.is_running() {
                self.start(now);
            }
        } else if self.animator.is_running() {
            self.start(now);
        }
    }

    /// Text was removed; `blank` describes the text afterwards.
    pub fn on_remove(&mut self, blank: bool, now: Instant) {
        if blank {
            self.start(now);
        }
    }

    /// Input was cleared programmatically: show the placeholder at once.
    pub fn clear_without_animation(&mut self) {
        self.animator.stop();
        self.amount = 0.0;
        self.fading_out = true;
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(f) = self.animator.tick(now) else {
            return false;
        };
        self.amount = if self.fading_out { f } else { 1.0 - f };
        if !self.animator.is_running() {
            self.fading_out = !self.fading_out;
        }
        true
    }

    fn start(&mut self, now: Instant) {
        let start = match self.animator.raw_fraction(now) {
            Some(f) => {
                self.animator.stop();
                self.fading_out = !self.fading_out;
                1.0 - f
            }
            None => 0.0,
        };
        self.animator.start_from(now, start);
    }
}

impl Default for PlaceholderFadeState {
    fn default() -> Self {
        Self::new()
    }
}
