//! Testimonial carousel state machine (pure).
//!
//! ```text
//!            pointer down
//!   Idle ─────────────────────▶ Dragging { start_x }
//!    ▲                              │  move: offset = x - start_x
//!    └──────────────────────────────┘
//!      release / cancel / leave:
//!        |offset| > threshold ⇒ step (right ⇒ prev, left ⇒ next)
//!        offset := 0
//! ```
//!
//! The index always wraps modulo the testimonial count in both directions.

/// Number of testimonials in the carousel.
pub const TESTIMONIAL_COUNT: usize = 3;

/// Index shown when the page loads (the middle card).
pub const INITIAL_INDEX: usize = 1;

/// Default minimum horizontal travel, in pixels, for a drag to navigate.
pub const DEFAULT_DRAG_THRESHOLD_PX: f64 = 50.0;

/// Which way the carousel stepped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Previous card (dragged right).
    Prev,
    /// Next card (dragged left).
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragPhase {
    Idle,
    Dragging { start_x: f64 },
}

/// Carousel position and in-flight gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    current_index: usize,
    len: usize,
    drag_offset_px: f64,
    phase: DragPhase,
    threshold_px: f64,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(TESTIMONIAL_COUNT, DEFAULT_DRAG_THRESHOLD_PX)
    }
}

impl CarouselState {
    /// Carousel over `len` entries (at least one) starting on [`INITIAL_INDEX`].
    pub fn new(len: usize, threshold_px: f64) -> Self {
        let len = len.max(1);
        Self {
            current_index: INITIAL_INDEX.min(len - 1),
            len,
            drag_offset_px: 0.0,
            phase: DragPhase::Idle,
            threshold_px: threshold_px.abs(),
        }
    }

    /// Index of the active card.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Live drag offset, 0 when idle.
    pub fn drag_offset_px(&self) -> f64 {
        self.drag_offset_px
    }

    /// Whether a gesture is in flight.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Travel a drag must exceed to navigate.
    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    /// Step forward, wrapping to the first card.
    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.len;
    }

    /// Step back, wrapping to the last card.
    pub fn prev(&mut self) {
        self.current_index = (self.current_index + self.len - 1) % self.len;
    }

    /// Step in `direction`.
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Prev => self.prev(),
            Direction::Next => self.next(),
        }
    }

    /// Jump directly to `index` (wrapped).
    pub fn go_to(&mut self, index: usize) {
        self.current_index = index % self.len;
    }

    /// Pointer went down at `x`. Restarts the gesture if one is in flight.
    pub fn begin_drag(&mut self, x: f64) {
        self.phase = DragPhase::Dragging { start_x: x };
        self.drag_offset_px = 0.0;
    }

    /// Pointer moved to `x`. Ignored while idle.
    pub fn drag_to(&mut self, x: f64) {
        if let DragPhase::Dragging { start_x } = self.phase {
            let offset = x - start_x;
            self.drag_offset_px = if offset.is_finite() { offset } else { 0.0 };
        }
    }

    /// Pointer released, cancelled or left the document.
    ///
    /// Navigates when the final offset is strictly beyond the threshold and
    /// always resets the offset. Returns the step taken, if any. Ending while
    /// idle is a no-op.
    pub fn end_drag(&mut self) -> Option<Direction> {
        if !self.is_dragging() {
            return None;
        }
        let offset = std::mem::take(&mut self.drag_offset_px);
        self.phase = DragPhase::Idle;

        let direction = if offset > self.threshold_px {
            Some(Direction::Prev)
        } else if offset < -self.threshold_px {
            Some(Direction::Next)
        } else {
            None
        };
        if let Some(direction) = direction {
            self.step(direction);
        }
        direction
    }

    /// Abandon the gesture without navigating (view teardown).
    pub fn abort_drag(&mut self) {
        self.phase = DragPhase::Idle;
        self.drag_offset_px = 0.0;
    }

    /// What the view needs to render this state.
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.current_index,
            drag_offset_px: self.drag_offset_px,
            dragging: self.is_dragging(),
        }
    }
}

/// Render-facing copy of [`CarouselState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSnapshot {
    /// Index of the active card.
    pub current_index: usize,
    /// Live drag offset.
    pub drag_offset_px: f64,
    /// Whether a gesture is in flight (transition disabled).
    pub dragging: bool,
}

impl Default for CarouselSnapshot {
    fn default() -> Self {
        CarouselState::default().snapshot()
    }
}

/// Card geometry for the track translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackLayout {
    /// Desktop: the active card is centred by offsetting from card 1.
    Wide {
        /// Card width.
        card_width_px: f64,
        /// Space between cards.
        gap_px: f64,
    },
    /// Narrow screens: the active card is centred with `calc(50% - half card)`.
    Compact {
        /// Card width.
        card_width_px: f64,
        /// Space between cards.
        gap_px: f64,
    },
}

impl TrackLayout {
    /// Desktop geometry.
    pub const WIDE: TrackLayout = TrackLayout::Wide {
        card_width_px: 670.0,
        gap_px: 32.0,
    };
    /// Narrow-screen geometry.
    pub const COMPACT: TrackLayout = TrackLayout::Compact {
        card_width_px: 280.0,
        gap_px: 16.0,
    };

    /// Pick the layout for a viewport width.
    pub fn for_viewport(width_px: f64, compact_breakpoint_px: f64) -> Self {
        if width_px <= compact_breakpoint_px {
            Self::COMPACT
        } else {
            Self::WIDE
        }
    }

    /// CSS `transform` for the track.
    pub fn transform(&self, snapshot: &CarouselSnapshot) -> String {
        let index = snapshot.current_index as f64;
        let drag = snapshot.drag_offset_px;
        match *self {
            TrackLayout::Wide {
                card_width_px,
                gap_px,
            } => {
                let x = (1.0 - index) * (card_width_px + gap_px) + drag;
                format!("translateX({}px)", x)
            }
            TrackLayout::Compact {
                card_width_px,
                gap_px,
            } => {
                let shift = index * (card_width_px + gap_px) - drag;
                let (sign, magnitude) = if shift < 0.0 { ('+', -shift) } else { ('-', shift) };
                format!(
                    "translateX(calc(50% - {}px {} {}px))",
                    card_width_px / 2.0,
                    sign,
                    magnitude
                )
            }
        }
    }
}

/// CSS `transition` for the track: instant while dragging so the track follows the pointer.
pub fn track_transition(snapshot: &CarouselSnapshot, transition_ms: u32) -> String {
    if snapshot.dragging {
        "none".to_string()
    } else {
        format!("transform {}ms ease", transition_ms)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "carousel_tests.rs"]
mod tests;
