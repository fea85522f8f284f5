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

use super::{Animator, Easing, lerp};
use std::time::{Duration, Instant};

pub const SCROLL_DURATION: Duration = Duration::from_millis(350);

/// Animated vertical scroll offset.
///
/// Only one transition is ever in flight. A new `scroll_to` samples where
/// the running one currently is and continues from there, so retargeting
/// never jumps.
#[derive(Debug, Clone)]
pub struct ScrollController {
    animator: Animator,
    offset: f64,
    from: f64,
    target: f64,
}

impl ScrollController {
    pub fn new() -> Self {
        Self::with_duration(SCROLL_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            animator: Animator::new(duration, Easing::SMOOTH),
            offset: 0.0,
            from: 0.0,
            target: 0.0,
        }
    }

    /// Offset as of the last tick (or the last direct change).
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn running(&self) -> bool {
        self.animator.is_running()
    }

    /// Interpolated offset at `now` without advancing the animation.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f64 {
        match self.animator.eased_fraction(now) {
            Some(f) => lerp(self.from, self.target, f),
            None => self.offset,
        }
    }

    #[allow(clippy::float_cmp)]
    pub fn scroll_to(&mut self, target: f64, now: Instant) {
        self.offset = self.value_at(now);
        self.animator.stop();
        self.from = self.offset;
        self.target = target;
        if target == self.offset {
            return;
        }
        tracing::debug!(from = self.from, target, "scroll animation started");
        self.animator.start(now);
    }

    /// Direct (user driven) change; cancels any animation.
    pub fn set_offset(&mut self, value: f64) {
        self.animator.stop();
        self.offset = value;
        self.from = value;
        self.target = value;
    }

    /// Advance to `now`; yields the new offset while a transition runs.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        let f = self.animator.tick(now)?;
        // The last frame lands exactly on the target
        self.offset = if self.animator.is_running() {
            lerp(self.from, self.target, f)
        } else {
            self.target
        };
        tracing::trace!(offset = self.offset, "scroll tick");
        Some(self.offset)
    }
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new()
    }
}
