use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Attach `handler` to the first element matching `selector`. Returns whether
/// an element was found.
pub fn add_click_listener(
    document: &web::Document,
    selector: &str,
    handler: impl FnMut() + 'static,
) -> bool {
    let Ok(Some(el)) = document.query_selector(selector) else {
        log::warn!("[dom] no element for '{}'", selector);
        return false;
    };
    listen(&el, "click", handler);
    true
}

/// Attach a clone of `handler` to every element matching `selector`.
pub fn add_click_listener_all(
    document: &web::Document,
    selector: &str,
    handler: impl FnMut() + Clone + 'static,
) -> usize {
    let elements = query_all(document, selector);
    for el in &elements {
        listen(el, "click", handler.clone());
    }
    elements.len()
}

/// Listeners live for the page session.
pub fn listen(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}
