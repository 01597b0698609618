//! Count-up statistics.
//!
//! A [`CounterGroup`] drives every counter in the about section from a single
//! [`Tween`]. Displayed values only ever grow, never exceed their target, and
//! are pinned to the target once the tween completes.

use crate::state::tween::{Easing, FrameStep, Tween};

/// Parse a `data-target` attribute.
///
/// Leading whitespace and one optional `+` are skipped and leading decimal
/// digits are read, so `"20+"` and `"+20"` both yield 20. Missing, empty,
/// negative, non-numeric or overflowing values yield 0.
pub fn parse_target(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// One count-up number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterStat {
    target: u32,
    displayed: u32,
}

impl CounterStat {
    /// A counter at 0 heading for `target`.
    pub fn new(target: u32) -> Self {
        Self {
            target,
            displayed: 0,
        }
    }

    /// Final value.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Value currently shown.
    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    /// Whether the target is shown.
    pub fn is_complete(&self) -> bool {
        self.displayed == self.target
    }

    /// Move toward the target for eased progress `eased` in `[0, 1]`.
    ///
    /// Intermediate values are `floor(eased * target)`; reaching 1.0 pins the
    /// target exactly. Returns the new displayed value.
    pub fn advance(&mut self, eased: f64) -> u32 {
        let next = if eased >= 1.0 {
            self.target
        } else {
            let scaled = (eased.max(0.0) * f64::from(self.target)).floor();
            // Float error must never push past the target.
            (scaled as u32).min(self.target)
        };
        self.displayed = self.displayed.max(next);
        self.displayed
    }
}

/// Counters that start together and share one duration.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterGroup {
    counters: Vec<CounterStat>,
    duration_ms: f64,
    tween: Option<Tween>,
    cancelled: bool,
}

impl CounterGroup {
    /// Counters for `targets`, not yet started.
    pub fn new(targets: impl IntoIterator<Item = u32>, duration_ms: f64) -> Self {
        Self {
            counters: targets.into_iter().map(CounterStat::new).collect(),
            duration_ms,
            tween: None,
            cancelled: false,
        }
    }

    /// Counters in document order.
    pub fn counters(&self) -> &[CounterStat] {
        &self.counters
    }

    /// Whether there is nothing to animate.
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Started, not finished and not cancelled.
    pub fn is_running(&self) -> bool {
        self.tween.is_some() && !self.cancelled && !self.is_complete()
    }

    /// Started and every counter is on its target.
    pub fn is_complete(&self) -> bool {
        self.counters.iter().all(CounterStat::is_complete) && self.tween.is_some()
    }

    /// Anchor the animation at `now_ms`. Later calls are ignored.
    pub fn start(&mut self, now_ms: f64) {
        if self.tween.is_none() && !self.cancelled {
            self.tween = Some(Tween::new(now_ms, self.duration_ms, Easing::OutCubic));
        }
    }

    /// Recompute every counter for the frame at `now_ms`.
    ///
    /// Returns `None` when there is nothing to animate (not started, or
    /// cancelled), in which case the caller must not touch the DOM.
    pub fn tick(&mut self, now_ms: f64) -> Option<FrameStep> {
        if self.cancelled {
            return None;
        }
        let tween = self.tween?;
        let complete = tween.is_complete(now_ms);
        let eased = if complete { 1.0 } else { tween.eased(now_ms) };
        for counter in &mut self.counters {
            counter.advance(eased);
        }
        Some(if complete {
            FrameStep::Finished
        } else {
            FrameStep::Continue
        })
    }

    /// Stop for good (the owning view unmounted).
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether [`cancel`](Self::cancel) was called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
