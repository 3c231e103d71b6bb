// Recording doubles for the showcase ports, shared by the host-side tests.

#![allow(dead_code)]

use glam::Vec3;
use showcase_core::*;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

pub const VIEWPORT_H: f64 = 800.0;

#[derive(Default)]
pub struct FakeEngine {
    pub camera: Cell<CameraPose>,
    pub notified: RefCell<Vec<CameraPose>>,
    pub shadow_resets: Cell<usize>,
    pub controls: Cell<bool>,
    pub controls_calls: RefCell<Vec<bool>>,
    pub materials: RefCell<Vec<String>>,
    pub colors: RefCell<Vec<(MaterialId, u32)>>,
    pub scene_dirty: Cell<usize>,
    pub fov: Cell<Option<f32>>,
}

impl FakeEngine {
    pub fn with_material(name: &str) -> Self {
        let e = Self::default();
        e.materials.borrow_mut().push(name.to_string());
        e
    }

    pub fn notify_count(&self) -> usize {
        self.notified.borrow().len()
    }

    /// What user drag input would do while controls are on.
    pub fn drag_camera_to(&self, pose: CameraPose) {
        assert!(self.controls.get(), "drag while controls disabled");
        self.camera.set(pose);
    }
}

impl RenderEngine for FakeEngine {
    fn notify_camera_changed(&self, pose: &CameraPose) {
        self.camera.set(*pose);
        self.notified.borrow_mut().push(*pose);
    }
    fn invalidate_shadow_cache(&self) {
        self.shadow_resets.set(self.shadow_resets.get() + 1);
    }
    fn set_controls_enabled(&self, enabled: bool) {
        self.controls.set(enabled);
        self.controls_calls.borrow_mut().push(enabled);
    }
    fn find_material(&self, name: &str) -> Option<MaterialId> {
        self.materials
            .borrow()
            .iter()
            .position(|m| m == name)
            .map(|i| MaterialId(i as u32))
    }
    fn set_material_color(&self, material: MaterialId, rgb: u32) {
        self.colors.borrow_mut().push((material, rgb));
    }
    fn set_scene_dirty(&self) {
        self.scene_dirty.set(self.scene_dirty.get() + 1);
    }
    fn camera_pose(&self) -> CameraPose {
        self.camera.get()
    }
    fn set_field_of_view(&self, degrees: f32) {
        self.fov.set(Some(degrees));
    }
}

pub struct FakePage {
    pub log: RefCell<Vec<String>>,
    pub progress: RefCell<Vec<f32>>,
    pub loader_opacity: Cell<f32>,
    pub loader_visible: Cell<bool>,
    pub scroll_locked: Cell<bool>,
    pub narrative_visible: Cell<bool>,
    pub canvas_interactive: Cell<bool>,
    pub cursor: Cell<Cursor>,
    pub exit_visible: Cell<bool>,
    pub customizer_visible: Cell<bool>,
    pub controls_present: bool,
    pub elements: Vec<String>,
    pub styles: RefCell<HashMap<String, ElementStyle>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self {
            log: RefCell::new(Vec::new()),
            progress: RefCell::new(Vec::new()),
            loader_opacity: Cell::new(1.0),
            loader_visible: Cell::new(true),
            scroll_locked: Cell::new(false),
            narrative_visible: Cell::new(true),
            canvas_interactive: Cell::new(false),
            cursor: Cell::new(Cursor::Default),
            exit_visible: Cell::new(false),
            customizer_visible: Cell::new(false),
            controls_present: true,
            elements: vec![SECTION_ONE_COPY.to_string()],
            styles: RefCell::new(HashMap::new()),
        }
    }

    pub fn without_controls() -> Self {
        Self {
            controls_present: false,
            ..Self::new()
        }
    }

    fn record(&self, entry: String) {
        self.log.borrow_mut().push(entry);
    }

    pub fn position_in_log(&self, entry: &str) -> Option<usize> {
        self.log.borrow().iter().rposition(|e| e == entry)
    }

    pub fn style(&self, selector: &str) -> Option<ElementStyle> {
        self.styles.borrow().get(selector).copied()
    }
}

impl PageUi for FakePage {
    fn set_progress(&self, ratio: f32) {
        self.progress.borrow_mut().push(ratio);
    }
    fn set_loader_opacity(&self, opacity: f32) {
        self.loader_opacity.set(opacity);
        if opacity == 0.0 {
            self.record("loader_opacity:0".into());
        }
    }
    fn set_loader_visible(&self, visible: bool) {
        self.loader_visible.set(visible);
        self.record(format!("loader_visible:{visible}"));
    }
    fn set_scroll_locked(&self, locked: bool) {
        self.scroll_locked.set(locked);
        self.record(format!("scroll_locked:{locked}"));
    }
    fn set_narrative_visible(&self, visible: bool) {
        self.narrative_visible.set(visible);
        self.record(format!("narrative:{visible}"));
    }
    fn set_canvas_interactive(&self, interactive: bool) {
        self.canvas_interactive.set(interactive);
    }
    fn set_cursor(&self, cursor: Cursor) {
        self.cursor.set(cursor);
    }
    fn set_exit_visible(&self, visible: bool) {
        self.exit_visible.set(visible);
        self.record(format!("exit:{visible}"));
    }
    fn set_customizer_visible(&self, visible: bool) {
        self.customizer_visible.set(visible);
        self.record(format!("customizer:{visible}"));
    }
    fn has_customizer_controls(&self) -> bool {
        self.controls_present
    }
    fn has_element(&self, selector: &str) -> bool {
        self.elements.iter().any(|e| e == selector)
    }
    fn set_element_style(&self, selector: &str, style: ElementStyle) {
        self.styles.borrow_mut().insert(selector.to_string(), style);
    }
}

pub struct FakeScroll {
    pub sections: HashMap<String, SectionMetrics>,
    pub viewport: Cell<Viewport>,
    pub scroll_calls: RefCell<Vec<(f64, bool)>>,
}

impl FakeScroll {
    /// Three stacked full-height sections: hero, `.second`, `.third`.
    pub fn three_sections() -> Self {
        let mut sections = HashMap::new();
        for (i, name) in [".first", SECTION_SECOND, SECTION_THIRD].iter().enumerate() {
            sections.insert(
                name.to_string(),
                SectionMetrics {
                    top: i as f64 * VIEWPORT_H,
                    height: VIEWPORT_H,
                },
            );
        }
        Self {
            sections,
            viewport: Cell::new(Viewport {
                scroll_y: 0.0,
                height: VIEWPORT_H,
            }),
            scroll_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn without(mut self, selector: &str) -> Self {
        self.sections.remove(selector);
        self
    }

    pub fn set_scroll(&self, y: f64) -> Viewport {
        let v = Viewport {
            scroll_y: y,
            height: VIEWPORT_H,
        };
        self.viewport.set(v);
        v
    }
}

impl ScrollHost for FakeScroll {
    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }
    fn section(&self, selector: &str) -> Option<SectionMetrics> {
        self.sections.get(selector).copied()
    }
    fn scroll_to(&self, y: f64, smooth: bool) {
        self.scroll_calls.borrow_mut().push((y, smooth));
        self.set_scroll(y);
    }
}

pub fn desktop_start() -> CameraPose {
    CameraPose::new(Vec3::new(4.0, 1.0, 8.0), Vec3::new(0.0, 0.5, 0.0))
}

pub struct Harness {
    pub engine: Rc<FakeEngine>,
    pub page: Rc<FakePage>,
    pub scroll: Rc<FakeScroll>,
    pub showcase: Showcase,
}

impl Harness {
    pub fn build(engine: FakeEngine, page: FakePage, scroll: FakeScroll) -> Self {
        let engine = Rc::new(engine);
        let page = Rc::new(page);
        let scroll = Rc::new(scroll);
        let ports = Ports {
            engine: engine.clone(),
            page: page.clone(),
            scroll: scroll.clone(),
        };
        let showcase = Showcase::new(ShowcaseConfig::default(), ports);
        Self {
            engine,
            page,
            scroll,
            showcase,
        }
    }

    /// Desktop page with every element present, loaded and unlocked.
    pub fn desktop() -> Self {
        Self::loaded(DeviceClass::Desktop, FakePage::new(), FakeScroll::three_sections())
    }

    pub fn loaded(device: DeviceClass, page: FakePage, scroll: FakeScroll) -> Self {
        let engine = FakeEngine::with_material(DRILL_MATERIAL);
        engine.camera.set(desktop_start());
        let mut h = Self::build(engine, page, scroll);
        h.showcase.bind_scene(&FixedProbe(device));
        h.showcase.handle_load(LoadEvent::Complete);
        h.tick_for(Duration::from_secs(2));
        assert!(h.showcase.is_loaded());
        h.frame();
        h
    }

    pub fn scroll_to(&mut self, y: f64) {
        let v = self.scroll.set_scroll(y);
        self.showcase.on_scroll(v);
    }

    /// Advance the animation clock in 1/60 s steps, one frame per step.
    pub fn tick_for(&mut self, total: Duration) {
        let step = Duration::from_micros(16_667);
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            self.showcase.tick(step);
            self.showcase.on_frame();
            elapsed += step;
        }
    }

    pub fn frame(&mut self) -> Option<RenderRequest> {
        self.showcase.on_frame()
    }

    pub fn pose(&self) -> CameraPose {
        self.showcase.pose().expect("scene bound")
    }

    pub fn assert_controls_invariant(&self) {
        let customizing = self.showcase.mode() == InteractionMode::Customization;
        assert_eq!(
            self.engine.controls.get(),
            customizing,
            "engine controls vs mode {:?}",
            self.showcase.mode()
        );
        assert_eq!(self.showcase.controls_enabled(), customizing);
    }
}

pub fn assert_vec3_eq(a: Vec3, b: Vec3) {
    assert!(
        (a - b).abs().max_element() < 1e-5,
        "expected {b:?}, got {a:?}"
    );
}
