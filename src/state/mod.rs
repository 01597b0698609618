//! Animation and interaction state machines (pure).
//!
//! Nothing here touches the browser. The shell feeds observations and
//! timestamps in and applies the resulting decisions to the DOM.

pub mod carousel;
pub mod counter;
pub mod reveal;
pub mod tool_progress;
pub mod tween;

// Re-export for convenience
pub use carousel::{CarouselSnapshot, CarouselState, Direction, TrackLayout};
pub use counter::{CounterGroup, CounterStat};
pub use reveal::{
    BadgeTrigger, ChildCategory, OneShot, PlayState, RevealEngine, RevealStep, RevealTarget,
    VisibilityOptions,
};
pub use tool_progress::{Tool, ToolAnimation, ToolProgress};
pub use tween::{Easing, FrameStep, Tween};
