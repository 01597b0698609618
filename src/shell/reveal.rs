//! Binds the reveal engine to `scroll-animate` sections.

use crate::dom::{self, Timeout, VisibilityObserver};
use crate::model::error::DomError;
use crate::state::reveal::{
    hidden_selector, ChildCategory, RevealEngine, RevealStep, RevealTarget, VisibilityOptions, ANIMATED_CLASS,
    SECTION_MARKER,
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use web_sys::Element;

/// Live reveal wiring for one mounted view.
///
/// Dropping it unmounts the engine, clears pending stagger timeouts and
/// disconnects the observer.
pub struct RevealBinding {
    engine: Rc<RefCell<RevealEngine<Element>>>,
    timeouts: Rc<RefCell<Vec<Timeout>>>,
    _observer: Option<VisibilityObserver>,
}

impl RevealBinding {
    /// Discover marked sections under `root` and start observing them.
    ///
    /// A root without marked sections yields a binding that does nothing.
    pub fn attach(root: &Element, options: VisibilityOptions) -> Result<Self, DomError> {
        let mut engine = RevealEngine::new();
        let sections = dom::query_all(root, &format!(".{SECTION_MARKER}"))?;
        let child_selector = ChildCategory::selector();

        for section in &sections {
            let children = dom::query_all(section, &child_selector)?
                .into_iter()
                .filter_map(|child| {
                    ChildCategory::from_class_list(&child.class_name()).map(|c| (child, c))
                });
            engine.register(RevealTarget::new(section.clone(), children));
        }

        let engine = Rc::new(RefCell::new(engine));
        let timeouts = Rc::new(RefCell::new(Vec::new()));

        if sections.is_empty() {
            return Ok(Self {
                engine,
                timeouts,
                _observer: None,
            });
        }

        let observer = VisibilityObserver::new(options, {
            let engine = Rc::clone(&engine);
            let timeouts = Rc::clone(&timeouts);
            move |element, intersecting| {
                let steps = engine.borrow_mut().on_intersection(element, intersecting);
                if !steps.is_empty() {
                    debug!(
                        section = %element.class_name(),
                        children = steps.len() - 1,
                        "Revealing section"
                    );
                }
                for step in steps {
                    apply_step(step, &timeouts);
                }
            }
        })?;
        for section in &sections {
            observer.observe(section);
        }
        debug!(sections = sections.len(), "Reveal observer attached");

        Ok(Self {
            engine,
            timeouts,
            _observer: Some(observer),
        })
    }

    /// Sections not yet revealed.
    pub fn pending(&self) -> usize {
        self.engine.borrow().pending()
    }
}

/// Mark every hidden section and child under `root` as revealed at once.
///
/// Used when the observer cannot be attached, so content is never left at
/// its hidden starting state. Returns how many elements were marked.
pub fn reveal_all(root: &Element) -> Result<usize, DomError> {
    let elements = dom::query_all(root, &hidden_selector())?;
    for element in &elements {
        dom::add_class(element, ANIMATED_CLASS);
    }
    Ok(elements.len())
}

fn apply_step(step: RevealStep<Element>, timeouts: &Rc<RefCell<Vec<Timeout>>>) {
    match step {
        RevealStep::Section(section) => dom::add_class(&section, ANIMATED_CLASS),
        RevealStep::Child {
            element,
            delay_ms: 0,
        } => dom::add_class(&element, ANIMATED_CLASS),
        RevealStep::Child { element, delay_ms } => {
            match Timeout::new(delay_ms, move || dom::add_class(&element, ANIMATED_CLASS)) {
                Ok(timeout) => timeouts.borrow_mut().push(timeout),
                Err(e) => warn!(error = %e, "Failed to schedule staggered reveal"),
            }
        }
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.engine.borrow_mut().unmount();
        self.timeouts.borrow_mut().clear();
    }
}
