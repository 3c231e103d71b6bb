use crate::constants::*;
use crate::dom;
use fnv::FnvHashMap;
use showcase_core::{Cursor, ElementStyle, PageUi};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM side of the page. Fixed affordances are looked up once; elements
/// animated by scroll legs are cached on first use.
pub struct DomPage {
    document: web::Document,
    body: web::HtmlElement,
    loader: Option<web::HtmlElement>,
    progress: Option<web::HtmlElement>,
    narrative: Option<web::HtmlElement>,
    canvas_container: Option<web::HtmlElement>,
    exit: Option<web::HtmlElement>,
    customizer: Option<web::HtmlElement>,
    animated: RefCell<FnvHashMap<String, Option<web::HtmlElement>>>,
}

impl DomPage {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
        let canvas_container = document
            .get_element_by_id(CANVAS_CONTAINER_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        let page = Self {
            document: document.clone(),
            body,
            loader: dom::query_html(document, LOADER_SELECTOR),
            progress: dom::query_html(document, PROGRESS_SELECTOR),
            narrative: dom::query_html(document, NARRATIVE_SELECTOR),
            canvas_container,
            exit: dom::query_html(document, EXIT_BUTTON),
            customizer: dom::query_html(document, CUSTOMIZER_PANEL),
            animated: RefCell::new(FnvHashMap::default()),
        };
        for (name, el) in [
            (LOADER_SELECTOR, &page.loader),
            (PROGRESS_SELECTOR, &page.progress),
            (NARRATIVE_SELECTOR, &page.narrative),
            (EXIT_BUTTON, &page.exit),
            (CUSTOMIZER_PANEL, &page.customizer),
        ] {
            if el.is_none() {
                log::warn!("[setup] page is missing '{}'", name);
            }
        }
        Ok(page)
    }

    fn animated(&self, selector: &str) -> Option<web::HtmlElement> {
        self.animated
            .borrow_mut()
            .entry(selector.to_string())
            .or_insert_with(|| dom::query_html(&self.document, selector))
            .clone()
    }
}

#[inline]
fn visibility(el: &Option<web::HtmlElement>, visible: bool) {
    if let Some(el) = el {
        dom::set_style(el, "visibility", if visible { "visible" } else { "hidden" });
    }
}

impl PageUi for DomPage {
    fn set_progress(&self, ratio: f32) {
        if let Some(el) = &self.progress {
            let _ = el.set_attribute("style", &format!("transform: scaleX({ratio})"));
        }
    }

    fn set_loader_opacity(&self, opacity: f32) {
        if let Some(el) = &self.loader {
            dom::set_style(el, "opacity", &opacity.to_string());
        }
    }

    fn set_loader_visible(&self, visible: bool) {
        if let Some(el) = &self.loader {
            dom::set_style(el, "display", if visible { "" } else { "none" });
        }
    }

    fn set_scroll_locked(&self, locked: bool) {
        dom::set_style(&self.body, "overflow-y", if locked { "hidden" } else { "auto" });
    }

    fn set_narrative_visible(&self, visible: bool) {
        visibility(&self.narrative, visible);
    }

    fn set_canvas_interactive(&self, interactive: bool) {
        if let Some(el) = &self.canvas_container {
            dom::set_style(el, "pointer-events", if interactive { "all" } else { "none" });
        }
    }

    fn set_cursor(&self, cursor: Cursor) {
        let value = match cursor {
            Cursor::Default => "default",
            Cursor::Grab => "grab",
        };
        dom::set_style(&self.body, "cursor", value);
    }

    fn set_exit_visible(&self, visible: bool) {
        visibility(&self.exit, visible);
    }

    fn set_customizer_visible(&self, visible: bool) {
        visibility(&self.customizer, visible);
    }

    fn has_customizer_controls(&self) -> bool {
        self.exit.is_some() && self.customizer.is_some()
    }

    fn has_element(&self, selector: &str) -> bool {
        self.animated(selector).is_some()
    }

    fn set_element_style(&self, selector: &str, style: ElementStyle) {
        let Some(el) = self.animated(selector) else {
            return;
        };
        dom::set_style(&el, "transform", &format!("translateX({}%)", style.x_percent));
        dom::set_style(&el, "opacity", &style.opacity.to_string());
    }
}
