//! Time-based interpolation for frame-driven animations.
//!
//! Animations never count frames. Each frame asks a [`Tween`] how far along it
//! is given the current monotonic timestamp, so dropped frames shorten the
//! number of steps without changing the duration or the end value.

/// Easing curves used by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// `1 - (1 - t)^3`
    OutCubic,
    /// `1 - (1 - t)^4`
    OutQuart,
}

impl Easing {
    /// Map linear progress to eased progress. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::OutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// A fixed-duration interpolation anchored at a start timestamp (milliseconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Tween {
    /// Non-finite or negative durations are treated as zero (complete immediately).
    pub fn new(start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        let duration_ms = if duration_ms.is_finite() && duration_ms > 0.0 {
            duration_ms
        } else {
            0.0
        };
        Self {
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Linear progress in `[0, 1]`.
    ///
    /// Timestamps earlier than the start report 0, so a clock that steps
    /// backwards never un-animates anything.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms == 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Eased progress at `now_ms`.
    pub fn eased(&self, now_ms: f64) -> f64 {
        self.easing.apply(self.progress(now_ms))
    }

    /// Whether `now_ms` is at or past the end.
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

/// Whether a frame-driven animation wants another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// Request another frame.
    Continue,
    /// Stop.
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::OutCubic, Easing::OutQuart] {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn ease_out_runs_ahead_of_linear() {
        assert!(Easing::OutCubic.apply(0.5) > 0.5);
        assert!(Easing::OutQuart.apply(0.5) > Easing::OutCubic.apply(0.5));
        assert_eq!(Easing::OutCubic.apply(0.5), 0.875);
        assert_eq!(Easing::OutQuart.apply(0.5), 0.9375);
    }

    #[test]
    fn easing_clamps_out_of_range_input() {
        assert_eq!(Easing::OutCubic.apply(-3.0), 0.0);
        assert_eq!(Easing::OutCubic.apply(7.0), 1.0);
        assert_eq!(Easing::OutQuart.apply(f64::NAN), 0.0);
    }

    #[test]
    fn progress_is_relative_to_start() {
        let tween = Tween::new(1000.0, 200.0, Easing::Linear);
        assert_eq!(tween.progress(900.0), 0.0);
        assert_eq!(tween.progress(1000.0), 0.0);
        assert_eq!(tween.progress(1100.0), 0.5);
        assert_eq!(tween.progress(1200.0), 1.0);
        assert_eq!(tween.progress(5000.0), 1.0);
        assert!(!tween.is_complete(1199.0));
        assert!(tween.is_complete(1200.0));
    }

    #[test]
    fn zero_or_invalid_duration_completes_immediately() {
        for duration in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let tween = Tween::new(10.0, duration, Easing::OutCubic);
            assert!(tween.is_complete(10.0), "duration {duration}");
            assert_eq!(tween.eased(0.0), 1.0, "duration {duration}");
        }
    }
}
