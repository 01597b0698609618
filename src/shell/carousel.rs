//! Pointer wiring for the testimonial carousel.
//!
//! The pointer-down handler lives on the track (attached by the view); move,
//! release, cancel and leave are listened for on the document only while a
//! drag is in flight so the gesture survives the pointer leaving the track.

use crate::dom::{self, EventSubscription};
use crate::model::error::DomError;
use crate::state::carousel::{CarouselSnapshot, CarouselState};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace, warn};
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, MouseEvent};

/// Document-level listeners for one drag gesture.
struct DragSession {
    _subscriptions: Vec<EventSubscription>,
}

struct Inner {
    state: CarouselState,
    session: Option<DragSession>,
}

type Publish = Rc<dyn Fn(CarouselSnapshot)>;

/// Owns the carousel state machine and publishes a snapshot after every
/// transition.
#[derive(Clone)]
pub struct DragController {
    inner: Rc<RefCell<Inner>>,
    publish: Publish,
}

impl DragController {
    /// Controller over `state`. `publish` receives every new snapshot.
    pub fn new(state: CarouselState, publish: impl Fn(CarouselSnapshot) + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state,
                session: None,
            })),
            publish: Rc::new(publish),
        }
    }

    /// Current render state.
    pub fn snapshot(&self) -> CarouselSnapshot {
        self.inner.borrow().state.snapshot()
    }

    /// Step forward, wrapping.
    pub fn next(&self) {
        self.update(CarouselState::next);
    }

    /// Step back, wrapping.
    pub fn prev(&self) {
        self.update(CarouselState::prev);
    }

    /// Start a gesture at client `x` and listen on the document until it ends.
    pub fn pointer_down(&self, x: f64) {
        self.update(|state| state.begin_drag(x));
        // A fresh session replaces any stale one.
        let session = match self.open_session() {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, "Drag tracking unavailable");
                self.update(CarouselState::abort_drag);
                None
            }
        };
        self.inner.borrow_mut().session = session;
    }

    /// Track the pointer while a drag is in flight. Ignored otherwise.
    pub fn pointer_move(&self, x: f64) {
        if !self.inner.borrow().state.is_dragging() {
            return;
        }
        self.update(|state| state.drag_to(x));
    }

    /// Release, cancel or leave: settle the gesture and stop listening.
    pub fn pointer_up(&self) {
        let session = {
            let mut inner = self.inner.borrow_mut();
            let direction = inner.state.end_drag();
            if let Some(direction) = direction {
                debug!(?direction, index = inner.state.current_index(), "Carousel swiped");
            }
            inner.session.take()
        };
        drop(session);
        self.publish_current();
    }

    /// Drop the gesture without navigating.
    pub fn abort(&self) {
        let session = {
            let mut inner = self.inner.borrow_mut();
            inner.state.abort_drag();
            inner.session.take()
        };
        drop(session);
        self.publish_current();
    }

    fn update(&self, f: impl FnOnce(&mut CarouselState)) {
        f(&mut self.inner.borrow_mut().state);
        self.publish_current();
    }

    fn publish_current(&self) {
        let snapshot = self.snapshot();
        trace!(?snapshot, "Carousel snapshot");
        (self.publish)(snapshot);
    }

    fn open_session(&self) -> Result<DragSession, DomError> {
        let document = dom::document()?;
        let doc_target: &EventTarget = document.as_ref();

        let on_move = {
            let this = self.downgrade();
            move |event: Event| {
                if let (Some(this), Some(x)) = (this.upgrade(), client_x(&event)) {
                    this.pointer_move(x);
                }
            }
        };
        let on_end = |this: WeakController| {
            move |_event: Event| {
                if let Some(this) = this.upgrade() {
                    this.pointer_up();
                }
            }
        };

        let mut subscriptions = vec![
            EventSubscription::new(doc_target, "pointermove", on_move)?,
            EventSubscription::new(doc_target, "pointerup", on_end(self.downgrade()))?,
            EventSubscription::new(doc_target, "pointercancel", on_end(self.downgrade()))?,
        ];
        if let Some(root) = document.document_element() {
            let root_target: &EventTarget = root.as_ref();
            subscriptions.push(EventSubscription::new(
                root_target,
                "mouseleave",
                on_end(self.downgrade()),
            )?);
        }
        Ok(DragSession {
            _subscriptions: subscriptions,
        })
    }

    fn downgrade(&self) -> WeakController {
        WeakController {
            inner: Rc::downgrade(&self.inner),
            publish: Rc::downgrade(&self.publish),
        }
    }
}

struct WeakController {
    inner: std::rc::Weak<RefCell<Inner>>,
    publish: std::rc::Weak<dyn Fn(CarouselSnapshot)>,
}

impl WeakController {
    fn upgrade(&self) -> Option<DragController> {
        Some(DragController {
            inner: self.inner.upgrade()?,
            publish: self.publish.upgrade()?,
        })
    }
}

/// Horizontal client coordinate of a pointer or mouse event.
pub fn client_x(event: &Event) -> Option<f64> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|event| f64::from(event.client_x()))
}

/// Viewport width subscription driving the wide/compact track layout.
pub struct ResizeWatch {
    _subscription: EventSubscription,
}

impl ResizeWatch {
    /// Calls `on_width` with the current width now and again on every resize.
    pub fn attach(on_width: impl Fn(f64) + 'static) -> Result<Self, DomError> {
        let window = dom::window()?;
        if let Some(width) = viewport_width(&window) {
            on_width(width);
        }
        let target: &EventTarget = window.as_ref();
        let subscription = EventSubscription::new(target, "resize", {
            let window = window.clone();
            move |_event| {
                if let Some(width) = viewport_width(&window) {
                    on_width(width);
                }
            }
        })?;
        Ok(Self {
            _subscription: subscription,
        })
    }
}

fn viewport_width(window: &web_sys::Window) -> Option<f64> {
    window.inner_width().ok().and_then(|width| width.as_f64())
}
