//! Scroll-triggered reveal engine (pure).
//!
//! Sections marked `scroll-animate` are revealed the first time they cross
//! the visibility threshold. Revealing marks the section immediately and each
//! marked child after a stagger delay computed from the child's category and
//! its position among siblings of that category.
//!
//! The engine is generic over the element handle `E` so that the browser
//! shell can use `web_sys::Element` while tests use plain values. It decides
//! *what* to mutate and *when*; the shell performs the mutation.

/// Class marking a section for reveal.
pub const SECTION_MARKER: &str = "scroll-animate";

/// Class applied to revealed sections and children.
pub const ANIMATED_CLASS: &str = "animate-in";

/// CSS selector matching every element that stays hidden until revealed:
/// marked sections and their marked children.
pub fn hidden_selector() -> String {
    format!(".{SECTION_MARKER}, {}", ChildCategory::selector())
}

/// Observer configuration for a group of targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the target's box that must be visible, in `[0, 1]`.
    pub threshold: f64,
    /// How far above the viewport bottom the trigger line sits, in pixels.
    pub bottom_margin_px: u32,
}

impl VisibilityOptions {
    /// `rootMargin` string for `IntersectionObserverInit`.
    pub fn root_margin(&self) -> String {
        if self.bottom_margin_px == 0 {
            "0px".to_string()
        } else {
            format!("0px 0px -{}px 0px", self.bottom_margin_px)
        }
    }
}

/// Stagger category of a marked child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildCategory {
    /// Titles and subtitles: appear with the section.
    Header,
    /// Densely packed cards: short stride.
    Card,
    /// Everything else: relaxed stride.
    Item,
}

impl ChildCategory {
    /// Every category.
    pub const ALL: [ChildCategory; 3] = [
        ChildCategory::Header,
        ChildCategory::Card,
        ChildCategory::Item,
    ];

    /// Delay added per preceding sibling of the same category.
    pub fn stride_ms(self) -> u32 {
        match self {
            ChildCategory::Header => 0,
            ChildCategory::Card => 100,
            ChildCategory::Item => 150,
        }
    }

    /// Class that marks a child of this category.
    pub fn marker_class(self) -> &'static str {
        match self {
            ChildCategory::Header => "reveal-header",
            ChildCategory::Card => "reveal-card",
            ChildCategory::Item => "reveal-item",
        }
    }

    /// CSS selector matching any marked child.
    pub fn selector() -> String {
        Self::ALL
            .iter()
            .map(|category| format!(".{}", category.marker_class()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Category for a whitespace-separated class list. First marker wins.
    pub fn from_class_list(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(|class| {
            Self::ALL
                .into_iter()
                .find(|category| category.marker_class() == class)
        })
    }
}

/// A marked child with its computed delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealChild<E> {
    /// Element handle.
    pub element: E,
    /// Stagger category.
    pub category: ChildCategory,
    /// Delay after the section is revealed.
    pub delay_ms: u32,
}

/// A section and its staggered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget<E> {
    element: E,
    revealed: bool,
    children: Vec<RevealChild<E>>,
}

impl<E> RevealTarget<E> {
    /// Build a target from children in document order.
    ///
    /// Each child's delay is `index * stride`, where `index` counts earlier
    /// children of the same category.
    pub fn new(element: E, children: impl IntoIterator<Item = (E, ChildCategory)>) -> Self {
        let mut seen = [0u32; ChildCategory::ALL.len()];
        let children = children
            .into_iter()
            .map(|(child, category)| {
                let slot = &mut seen[category as usize];
                let delay_ms = *slot * category.stride_ms();
                *slot += 1;
                RevealChild {
                    element: child,
                    category,
                    delay_ms,
                }
            })
            .collect();
        Self {
            element,
            revealed: false,
            children,
        }
    }

    /// The section element.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Whether the section has been revealed.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Children in document order.
    pub fn children(&self) -> &[RevealChild<E>] {
        &self.children
    }

    /// Feed one visibility observation.
    ///
    /// Returns the children to schedule on the first intersecting
    /// observation only; every later call returns `None`.
    pub fn observe(&mut self, intersecting: bool) -> Option<&[RevealChild<E>]> {
        if !intersecting || self.revealed {
            return None;
        }
        self.revealed = true;
        Some(&self.children)
    }
}

/// A DOM mutation requested by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealStep<E> {
    /// Mark the section now.
    Section(E),
    /// Mark a child after `delay_ms`.
    Child {
        /// The child to mark.
        element: E,
        /// Wait before marking; 0 means now.
        delay_ms: u32,
    },
}

/// All reveal targets of a mounted view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealEngine<E> {
    targets: Vec<RevealTarget<E>>,
    mounted: bool,
}

impl<E> Default for RevealEngine<E> {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            mounted: true,
        }
    }
}

impl<E: PartialEq + Clone> RevealEngine<E> {
    /// An empty mounted engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section to watch.
    pub fn register(&mut self, target: RevealTarget<E>) {
        self.targets.push(target);
    }

    /// Whether no sections are registered.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Targets still waiting for their first intersection.
    pub fn pending(&self) -> usize {
        self.targets.iter().filter(|t| !t.is_revealed()).count()
    }

    /// Whether [`unmount`](Self::unmount) has not been called.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Handle a visibility change for `element`.
    ///
    /// Unknown elements, non-intersecting entries, already revealed targets
    /// and an unmounted engine all produce no steps. Child steps are returned
    /// in document order; a zero delay means "apply now".
    pub fn on_intersection(&mut self, element: &E, intersecting: bool) -> Vec<RevealStep<E>> {
        if !self.mounted {
            return Vec::new();
        }
        let Some(target) = self.targets.iter_mut().find(|t| t.element() == element) else {
            return Vec::new();
        };
        let Some(children) = target.observe(intersecting) else {
            return Vec::new();
        };

        let mut steps = Vec::with_capacity(children.len() + 1);
        steps.push(RevealStep::Section(element.clone()));
        steps.extend(children.iter().map(|child| RevealStep::Child {
            element: child.element.clone(),
            delay_ms: child.delay_ms,
        }));
        steps
    }

    /// Detach from the view. No further steps are produced.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

/// Guard for triggers that must fire at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// `true` the first time only.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    /// Whether the guard has fired.
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// CSS `animation-play-state` values used by the orbiting badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    /// Frozen in place.
    Paused,
    /// Moving.
    Running,
}

impl PlayState {
    /// Value for the `animation-play-state` property.
    pub fn css_value(self) -> &'static str {
        match self {
            PlayState::Paused => "paused",
            PlayState::Running => "running",
        }
    }
}

/// Decorative badges: continuous motion, started once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BadgeTrigger {
    shot: OneShot,
}

impl BadgeTrigger {
    /// State the badges are put in when the view mounts.
    pub fn initial(&self) -> PlayState {
        PlayState::Paused
    }

    /// Returns `Some(Running)` on the first intersecting observation.
    pub fn observe(&mut self, intersecting: bool) -> Option<PlayState> {
        (intersecting && self.shot.fire()).then_some(PlayState::Running)
    }

    /// Whether the badges were started.
    pub fn has_fired(&self) -> bool {
        self.shot.has_fired()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "reveal_tests.rs"]
mod tests;
