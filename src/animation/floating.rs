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

pub const FLOATING_DURATION: Duration = Duration::from_millis(300);

/// Distance the button travels between shown (0) and hidden.
pub const FLOATING_TRAVEL: f64 = 50.0;

/// Within this distance of the end of the content the button is hidden.
pub const BOTTOM_THRESHOLD: f64 = 80.0;

/// Vertical scroll model as seen by the floating button rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub value: f64,
    pub extent: f64,
    pub maximum: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn near_bottom(&self) -> bool {
        self.value + self.extent >= self.maximum - BOTTOM_THRESHOLD
    }
}

/// Reveal state of the "scroll to bottom" button.
#[derive(Debug, Clone)]
pub struct FloatingButtonController {
    animator: Animator,
    visible: bool,
    progress: f64,
}

impl FloatingButtonController {
    pub fn new() -> Self {
        Self {
            animator: Animator::new(FLOATING_DURATION, Easing::SMOOTH),
            visible: false,
            progress: 0.0,
        }
    }

    /// Logical target state, independent of the animation.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    /// 0 = fully hidden, 1 = fully shown.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Displacement from the resting position, 0 when fully shown.
    #[must_use]
    pub fn offset(&self) -> f64 {
        (1.0 - self.progress) * FLOATING_TRAVEL
    }

    /// Returns `true` when a transition was started.
    pub fn set_visible(&mut self, visible: bool, now: Instant) -> bool {
        if visible == self.visible {
            return false;
        }
        // A run in flight at f continues in the other direction from 1 - f,
        // which lands on the same eased progress.
        let start = self.animator.raw_fraction(now).map_or(0.0, |f| 1.0 - f);
        self.animator.stop();
        self.visible = visible;
        self.animator.start_from(now, start);
        tracing::debug!(visible, start, "floating button transition");
        true
    }

    /// Apply the scroll rule for one observed scroll position.
    ///
    /// Near the bottom the button always hides. Anywhere else it shows,
    /// unless a programmatic scroll is running, in which case the state is
    /// held until that scroll settles. Moving in either direction away from
    /// the bottom therefore reveals it.
    pub fn observe(&mut self, metrics: ScrollMetrics, scroll_running: bool, now: Instant) -> bool {
        if metrics.near_bottom() {
            self.set_visible(false, now)
        } else if scroll_running {
            false
        } else {
            self.set_visible(true, now)
        }
    }

    /// Advance to `now`; yields the new offset while animating.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        let f = self.animator.tick(now)?;
        self.progress = if self.visible { f } else { 1.0 - f };
        Some(self.offset())
    }
}

impl Default for FloatingButtonController {
    fn default() -> Self {
        Self::new()
    }
}
