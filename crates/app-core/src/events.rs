//! Explicit subscriptions in place of free-floating event listeners.

use crate::loader::LoadProgress;
use crate::ports::Viewport;
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

type Handler<E> = Box<dyn FnMut(&E)>;

struct Registry<E> {
    next_id: Cell<u64>,
    handlers: RefCell<FnvHashMap<u64, Handler<E>>>,
    // ids removed while their handler was out being called
    dropped: RefCell<Vec<u64>>,
}

/// Multicast event source. Handlers run in subscription order.
pub struct Subject<E> {
    inner: Rc<Registry<E>>,
}

impl<E> Default for Subject<E> {
    fn default() -> Self {
        Self {
            inner: Rc::new(Registry {
                next_id: Cell::new(0),
                handlers: RefCell::new(FnvHashMap::default()),
                dropped: RefCell::new(Vec::new()),
            }),
        }
    }
}

impl<E: 'static> Subject<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl FnMut(&E) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.handlers.borrow_mut().insert(id, Box::new(handler));
        let weak: Weak<Registry<E>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(reg) = weak.upgrade() {
                    if reg.handlers.borrow_mut().remove(&id).is_none() {
                        reg.dropped.borrow_mut().push(id);
                    }
                }
            })),
        }
    }

    /// Deliver `event` to every current subscriber. Handlers may subscribe or
    /// unsubscribe (themselves included) while being called.
    pub fn emit(&self, event: &E) {
        let mut ids: Vec<u64> = self.inner.handlers.borrow().keys().copied().collect();
        ids.sort_unstable();
        for id in ids {
            let taken = self.inner.handlers.borrow_mut().remove(&id);
            let Some(mut handler) = taken else {
                continue;
            };
            handler(event);
            let mut dropped = self.inner.dropped.borrow_mut();
            if let Some(pos) = dropped.iter().position(|d| *d == id) {
                dropped.swap_remove(pos);
            } else {
                self.inner.handlers.borrow_mut().insert(id, handler);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }
}

/// Handle returned by [`Subject::subscribe`]. Dropping it keeps the handler
/// alive for the page session; call [`Subscription::unsubscribe`] to detach.
#[must_use = "keep the subscription or call unsubscribe"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Discrete page actions, one per clickable affordance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    Customize,
    ExitCustomizer,
    NextSection,
    ScrollToTop,
    /// Index into the configured color variants.
    Variant(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadEvent {
    Progress(LoadProgress),
    Complete,
}

/// Every input the orchestrator reacts to.
#[derive(Default)]
pub struct EventSources {
    pub page: Subject<PageEvent>,
    pub load: Subject<LoadEvent>,
    pub scroll: Subject<Viewport>,
    /// Animation clock with the elapsed time since the previous tick.
    pub tick: Subject<Duration>,
    /// The engine is about to render a frame.
    pub frame: Subject<()>,
}
