// SPDX-License-Identifier: MPL-2.0
//! Eased scrolling towards a section anchor.
//!
//! The page scrollable has no animated scroll of its own, so a request is
//! turned into a short ease-in-out curve sampled on every frame. Each sample
//! is an absolute offset that the caller applies with a snap operation.
//! Scrolling by the user while a run is active cancels it.

use std::time::{Duration, Instant};

/// Largest gap between a reported offset and an emitted sample that still
/// counts as our own snap.
const SNAP_TOLERANCE: f32 = 1.0;

/// Cubic ease-in-out over `t` in `[0, 1]`.
#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Run {
    from: f32,
    to: f32,
    started: Option<Instant>,
    /// The two most recent samples; a scroll event may still report the
    /// older one.
    last: f32,
    previous: f32,
}

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    duration: Duration,
    run: Option<Run>,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            run: None,
        }
    }

    /// Starts scrolling from `from` to `to`, replacing any running scroll.
    /// The clock starts on the next frame.
    pub fn start(&mut self, from: f32, to: f32) {
        tracing::debug!(from, to, "smooth scroll requested");
        self.run = Some(Run {
            from,
            to,
            started: None,
            last: from,
            previous: from,
        });
    }

    /// Stops a running scroll where it is.
    pub fn cancel(&mut self) {
        self.run = None;
    }

    /// Checks a scroll offset reported by the scrollable against the run.
    ///
    /// An offset away from the samples this run emitted comes from the user;
    /// the run is cancelled and `true` returned.
    pub fn observe(&mut self, offset: f32) -> bool {
        let Some(run) = self.run else {
            return false;
        };
        let ours = (offset - run.last).abs() <= SNAP_TOLERANCE
            || (offset - run.previous).abs() <= SNAP_TOLERANCE;
        if ours {
            return false;
        }
        tracing::debug!(offset, expected = run.last, "smooth scroll interrupted");
        self.run = None;
        true
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    #[must_use]
    pub fn target(&self) -> Option<f32> {
        self.run.map(|run| run.to)
    }

    /// Samples the curve at `now`.
    ///
    /// Returns the offset to apply, or `None` when nothing is running. The
    /// sample that reaches the target ends the run.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let run = self.run.as_mut()?;
        let started = *run.started.get_or_insert(now);

        let progress = if self.duration.is_zero() {
            1.0
        } else {
            now.saturating_duration_since(started).as_secs_f32() / self.duration.as_secs_f32()
        };

        if progress >= 1.0 {
            let target = run.to;
            self.run = None;
            return Some(target);
        }
        let offset = run.from + (run.to - run.from) * ease_in_out_cubic(progress);
        run.previous = run.last;
        run.last = offset;
        Some(offset)
    }
}
