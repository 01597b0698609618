//! Favourite-tools percentages.
//!
//! Each tool shows a proficiency percentage that counts up from zero the first
//! time the tools section is seen. The run waits a short start delay, then
//! follows an ease-out-quart [`Tween`] and finishes exactly on each target.

use crate::state::tween::{Easing, FrameStep, Tween};

/// A tool in the favourite-tools showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Figma.
    Figma,
    /// Canva.
    Canva,
    /// Adobe Photoshop.
    Photoshop,
    /// InVision.
    Invision,
    /// Sketch.
    Sketch,
}

impl Tool {
    /// Display order.
    pub const ALL: [Tool; 5] = [
        Tool::Figma,
        Tool::Canva,
        Tool::Photoshop,
        Tool::Invision,
        Tool::Sketch,
    ];

    /// Percentage the run ends on.
    pub fn target_percent(self) -> u32 {
        match self {
            Tool::Figma => 99,
            Tool::Canva => 50,
            Tool::Photoshop => 30,
            Tool::Invision => 20,
            Tool::Sketch => 40,
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Figma => "Figma",
            Tool::Canva => "Canva",
            Tool::Photoshop => "Photoshop",
            Tool::Invision => "InVision",
            Tool::Sketch => "Sketch",
        }
    }

    /// Logo asset path.
    pub fn logo_src(self) -> &'static str {
        match self {
            Tool::Figma => "/devicon_figma.jpg",
            Tool::Canva => "/devicon_canva.jpg",
            Tool::Photoshop => "/photoshop.jpg",
            Tool::Invision => "/logos_invision-icon.jpg",
            Tool::Sketch => "/devicon_sketch.jpg",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Current percentage per tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolProgress {
    values: [u32; 5],
}

impl ToolProgress {
    /// Current percentage for `tool`.
    pub fn get(&self, tool: Tool) -> u32 {
        self.values[tool.slot()]
    }

    /// Every tool with its percentage, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Tool, u32)> + '_ {
        Tool::ALL.into_iter().map(|tool| (tool, self.get(tool)))
    }

    /// Whether every tool shows its target.
    pub fn is_complete(&self) -> bool {
        Tool::ALL
            .into_iter()
            .all(|tool| self.get(tool) == tool.target_percent())
    }

    /// Update every tool for eased progress in `[0, 1]`.
    ///
    /// Values are `round(eased * target)`, never decrease, and are exactly the
    /// targets once `eased` reaches 1.0.
    pub fn advance(&mut self, eased: f64) {
        for tool in Tool::ALL {
            let target = tool.target_percent();
            let next = if eased >= 1.0 {
                target
            } else {
                ((eased.max(0.0) * f64::from(target)).round() as u32).min(target)
            };
            let slot = &mut self.values[tool.slot()];
            *slot = (*slot).max(next);
        }
    }
}

/// The one-time percentage run.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolAnimation {
    progress: ToolProgress,
    start_delay_ms: f64,
    duration_ms: f64,
    tween: Option<Tween>,
}

impl ToolAnimation {
    /// A run that waits `start_delay_ms` once visible, then lasts `duration_ms`.
    pub fn new(start_delay_ms: f64, duration_ms: f64) -> Self {
        Self {
            progress: ToolProgress::default(),
            start_delay_ms: start_delay_ms.max(0.0),
            duration_ms,
            tween: None,
        }
    }

    /// Current percentages.
    pub fn progress(&self) -> ToolProgress {
        self.progress
    }

    /// Delay before the run starts.
    pub fn start_delay_ms(&self) -> f64 {
        self.start_delay_ms
    }

    /// Whether the run has been anchored.
    pub fn is_started(&self) -> bool {
        self.tween.is_some()
    }

    /// Anchor the run at `now_ms` (called once the start delay has elapsed).
    pub fn start(&mut self, now_ms: f64) {
        if self.tween.is_none() {
            self.tween = Some(Tween::new(now_ms, self.duration_ms, Easing::OutQuart));
        }
    }

    /// Recompute percentages for the frame at `now_ms`. `None` before [`start`](Self::start).
    pub fn tick(&mut self, now_ms: f64) -> Option<FrameStep> {
        let tween = self.tween?;
        if tween.is_complete(now_ms) {
            self.progress.advance(1.0);
            Some(FrameStep::Finished)
        } else {
            self.progress.advance(tween.eased(now_ms));
            Some(FrameStep::Continue)
        }
    }
}
