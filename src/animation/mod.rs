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

//! Frame-driven animation primitives.
//!
//! Every animated piece of the panel (scrolling, the floating button, the
//! input placeholder, button ripples) is a thin wrapper around [`Animator`]:
//! a start instant, a duration, a start fraction and an easing curve. Nothing
//! here owns a timer. The host calls `tick(now)` once per frame and the
//! controllers derive their values from the elapsed time.

mod floating;
mod placeholder;
mod ripple;
mod scroll;

pub use floating::{
    BOTTOM_THRESHOLD, FLOATING_DURATION, FLOATING_TRAVEL, FloatingButtonController, ScrollMetrics,
};
pub use placeholder::{PLACEHOLDER_DURATION, PLACEHOLDER_SHIFT, PlaceholderFadeState};
pub use ripple::{MaterialButtonState, RIPPLE_DURATION, Ripple};
pub use scroll::{SCROLL_DURATION, ScrollController};

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Time source for the panel. Injected so hosts can drive animations
/// deterministically.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { now: Rc::new(Cell::new(Instant::now())) }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Maps linear progress onto the displayed progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Constant acceleration over the first `acceleration` share of the run,
    /// constant deceleration over the last `deceleration` share, constant
    /// speed in between.
    AccelDecel { acceleration: f64, deceleration: f64 },
}

impl Easing {
    /// Symmetric ease-in/ease-out used by scrolling and reveal animations.
    pub const SMOOTH: Self = Self::AccelDecel { acceleration: 0.5, deceleration: 0.5 };

    #[must_use]
    pub fn apply(self, fraction: f64) -> f64 {
        let f = fraction.clamp(0.0, 1.0);
        let Self::AccelDecel { acceleration: a, deceleration: d } = self else {
            return f;
        };
        if a <= 0.0 && d <= 0.0 {
            return f;
        }
        let run_rate = 1.0 / (1.0 - a / 2.0 - d / 2.0);
        let eased = if f < a {
            run_rate * f * f / (2.0 * a)
        } else if f > 1.0 - d {
            let t = f - (1.0 - d);
            run_rate * (1.0 - a / 2.0 - d + t * (2.0 - t / d) / 2.0)
        } else {
            run_rate * (f - a / 2.0)
        };
        eased.clamp(0.0, 1.0)
    }
}

/// A single replaceable animation run.
#[derive(Debug, Clone)]
pub struct Animator {
    duration: Duration,
    easing: Easing,
    started_at: Option<Instant>,
    start_fraction: f64,
}

impl Animator {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing, started_at: None, start_fraction: 0.0 }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn start(&mut self, now: Instant) {
        self.start_from(now, 0.0);
    }

    /// Start a run that is already `fraction` of the way through. The
    /// remaining time is `(1 - fraction) * duration`.
    pub fn start_from(&mut self, now: Instant, fraction: f64) {
        self.start_fraction = fraction.clamp(0.0, 1.0);
        self.started_at = Some(now);
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Linear progress of the current run at `now`, `None` when idle.
    #[must_use]
    pub fn raw_fraction(&self, now: Instant) -> Option<f64> {
        let started = self.started_at?;
        if self.duration.is_zero() {
            return Some(1.0);
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f64();
        Some((self.start_fraction + elapsed / self.duration.as_secs_f64()).min(1.0))
    }

    #[must_use]
    pub fn eased_fraction(&self, now: Instant) -> Option<f64> {
        self.raw_fraction(now).map(|f| self.easing.apply(f))
    }

    /// Advance to `now`. Yields the eased fraction while running, including
    /// the final `1.0` frame, after which the animator goes idle.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        let raw = self.raw_fraction(now)?;
        if raw >= 1.0 {
            self.started_at = None;
        }
        Some(self.easing.apply(raw))
    }
}

pub(crate) fn lerp(from: f64, to: f64, fraction: f64) -> f64 {
    from + (to - from) * fraction
}
