use showcase_core::{ScrollHost, SectionMetrics, Viewport};
use web_sys as web;

/// Window scrolling in document coordinates.
pub struct WindowScroll {
    window: web::Window,
    document: web::Document,
}

impl WindowScroll {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }
}

impl ScrollHost for WindowScroll {
    fn viewport(&self) -> Viewport {
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Viewport {
            scroll_y: self.window.scroll_y().unwrap_or(0.0),
            height,
        }
    }

    fn section(&self, selector: &str) -> Option<SectionMetrics> {
        let el = self.document.query_selector(selector).ok().flatten()?;
        let rect = el.get_bounding_client_rect();
        Some(SectionMetrics {
            top: rect.top() + self.window.scroll_y().unwrap_or(0.0),
            height: rect.height(),
        })
    }

    fn scroll_to(&self, y: f64, smooth: bool) {
        if !smooth {
            self.window.scroll_to_with_x_and_y(0.0, y);
            return;
        }
        let opts = web::ScrollToOptions::new();
        opts.set_left(0.0);
        opts.set_top(y);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}
