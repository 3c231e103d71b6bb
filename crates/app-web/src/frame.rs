use crate::constants::MAX_TICK_SEC;
use instant::Instant;
use showcase_core::EventSources;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Animation clock driving fades, fly-tos and lagged scrub. Independent of the
/// viewer's own render loop, which only reports frames.
struct Clock {
    sources: Rc<EventSources>,
    last_instant: Instant,
}

impl Clock {
    fn tick(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_secs_f32(MAX_TICK_SEC));
        self.last_instant = now;
        self.sources.tick.emit(&dt);
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(callback: &FrameCallback) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = callback.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(sources: Rc<EventSources>) {
    let mut clock = Clock {
        sources,
        last_instant: Instant::now(),
    };
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        clock.tick();
        request_frame(&next);
    }) as Box<dyn FnMut()>));
    request_frame(&callback);
}
