use crate::constants::*;
use crate::dom;
use crate::engine::ViewerBridge;
use crate::scroll::WindowScroll;
use showcase_core::{EventSources, LoadEvent, LoadProgress, PageEvent, ScrollHost};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Clicks on the page affordances become [`PageEvent`]s.
pub fn wire_page(document: &web::Document, sources: &Rc<EventSources>) {
    let emit = |ev: PageEvent| {
        let sources = sources.clone();
        move || sources.page.emit(&ev)
    };
    dom::add_click_listener(document, CUSTOMIZE_BUTTON, emit(PageEvent::Customize));
    dom::add_click_listener(document, EXIT_BUTTON, emit(PageEvent::ExitCustomizer));
    dom::add_click_listener(document, HERO_BUTTON, emit(PageEvent::NextSection));
    let footers = dom::add_click_listener_all(document, FOOTER_BUTTONS, emit(PageEvent::ScrollToTop));
    log::debug!("[setup] {} footer buttons", footers);
    for (i, selector) in COLOR_BUTTONS.iter().enumerate() {
        dom::add_click_listener(document, selector, emit(PageEvent::Variant(i)));
    }
}

/// Scroll and resize both re-sample the viewport.
pub fn wire_scroll(window: &web::Window, scroll: Rc<WindowScroll>, sources: &Rc<EventSources>) {
    for event in ["scroll", "resize"] {
        let scroll = scroll.clone();
        let sources = sources.clone();
        dom::listen(window, event, move || sources.scroll.emit(&scroll.viewport()));
    }
}

/// Viewer callbacks: pre-frame, importer progress and completion.
pub fn wire_engine(viewer: &ViewerBridge, sources: &Rc<EventSources>) {
    {
        let sources = sources.clone();
        let closure = Closure::wrap(Box::new(move || {
            sources.frame.emit(&());
        }) as Box<dyn FnMut()>);
        viewer.on_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let sources = sources.clone();
        let closure = Closure::wrap(Box::new(move |loaded: f64, total: f64| {
            sources
                .load
                .emit(&LoadEvent::Progress(LoadProgress { loaded, total }));
        }) as Box<dyn FnMut(f64, f64)>);
        viewer.on_progress(closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let sources = sources.clone();
        let closure = Closure::wrap(Box::new(move || {
            sources.load.emit(&LoadEvent::Complete);
        }) as Box<dyn FnMut()>);
        viewer.on_load(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
