//! Top-level orchestrator tying the components to the event sources.

use crate::choreographer::Choreographer;
use crate::config::ShowcaseConfig;
use crate::device::DeviceClass;
use crate::error::NavigationError;
use crate::events::{EventSources, LoadEvent, PageEvent, Subscription};
use crate::gate::RenderRequest;
use crate::loader::LoadReporter;
use crate::material::MaterialSwitch;
use crate::pose::CameraPose;
use crate::ports::{CapabilityProbe, PageUi, RenderEngine, ScrollHost, Viewport};
use crate::rig::CameraRig;
use crate::session::{InteractionMode, InteractionSession};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Handles onto the outside world.
#[derive(Clone)]
pub struct Ports {
    pub engine: Rc<dyn RenderEngine>,
    pub page: Rc<dyn PageUi>,
    pub scroll: Rc<dyn ScrollHost>,
}

// Parts that only exist once the scene is in the engine.
struct SceneBindings {
    rig: Rc<CameraRig>,
    choreographer: Choreographer,
    session: InteractionSession,
    material: MaterialSwitch,
}

pub struct Showcase {
    config: ShowcaseConfig,
    ports: Ports,
    loader: LoadReporter,
    scene: Option<SceneBindings>,
}

impl Showcase {
    /// Pins the page and shows the loader. Call before the scene starts loading
    /// so no progress event is missed.
    pub fn new(config: ShowcaseConfig, ports: Ports) -> Self {
        let loader = LoadReporter::new(config.loader_fade, ports.page.clone(), ports.scroll.as_ref());
        Self {
            config,
            ports,
            loader,
            scene: None,
        }
    }

    /// Wire camera, modes, materials and scroll legs once the scene is loaded.
    /// The device class is probed here, once, and never re-evaluated.
    pub fn bind_scene(&mut self, probe: &dyn CapabilityProbe) {
        if self.scene.is_some() {
            log::warn!("[setup] scene already bound");
            return;
        }
        let Ports {
            engine,
            page,
            scroll,
        } = self.ports.clone();
        let device = probe.device_class();
        let initial = match device {
            DeviceClass::Mobile => {
                engine.set_field_of_view(self.config.mobile_fov_deg);
                self.config.mobile_start
            }
            DeviceClass::Desktop => engine.camera_pose(),
        };
        log::info!(
            "[setup] device={:?} start=({:.2},{:.2},{:.2})",
            device,
            initial.position.x,
            initial.position.y,
            initial.position.z
        );
        let rig = Rc::new(CameraRig::new(engine.clone(), initial));
        let session =
            InteractionSession::new(self.config.transition, rig.clone(), engine.clone(), page.clone());
        let material = MaterialSwitch::resolve(&self.config.material_name, engine, rig.clone());
        let choreographer = Choreographer::new(
            self.config.narrative.resolve(device),
            rig.clone(),
            page,
            scroll.clone(),
        );
        self.scene = Some(SceneBindings {
            rig,
            choreographer,
            session,
            material,
        });
        if self.loader.is_ready() {
            self.on_scroll(scroll.viewport());
        }
    }

    pub fn handle(&mut self, event: PageEvent) {
        match event {
            PageEvent::Customize => self.enter_customizer(),
            PageEvent::ExitCustomizer => self.exit_customizer(),
            PageEvent::NextSection => {
                let section = self.config.next_section.clone();
                if let Err(e) = self.scroll_to_section(&section) {
                    log::debug!("[nav] {}", e);
                }
            }
            PageEvent::ScrollToTop => {
                if let Err(e) = self.scroll_to_top() {
                    log::debug!("[nav] {}", e);
                }
            }
            PageEvent::Variant(i) => {
                self.apply_variant(i);
            }
        }
    }

    pub fn handle_load(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Progress(p) => {
                self.loader.on_progress(p);
            }
            LoadEvent::Complete => self.loader.on_complete(),
        }
    }

    /// Scroll moved. Dropped until the loader has released the page.
    pub fn on_scroll(&mut self, viewport: Viewport) {
        if !self.loader.is_ready() {
            return;
        }
        if let Some(scene) = &mut self.scene {
            scene.choreographer.update(viewport);
        }
    }

    /// Animation clock: loader fade, mode fly-to, lagged scrub.
    pub fn tick(&mut self, dt: Duration) {
        if self.loader.tick(dt) {
            let viewport = self.ports.scroll.viewport();
            self.on_scroll(viewport);
        }
        let Some(scene) = &mut self.scene else {
            return;
        };
        if scene.session.tick(dt) == Some(InteractionMode::Presentation) {
            scene.choreographer.resume();
        }
        scene.choreographer.tick(dt);
    }

    /// Engine pre-frame callback.
    pub fn on_frame(&mut self) -> Option<RenderRequest> {
        self.scene.as_ref()?.rig.consume_if_dirty()
    }

    /// Subscribe to every source. Handlers hold a weak reference, so dropping
    /// the last `Rc` silences them.
    pub fn attach(this: &Rc<RefCell<Showcase>>, sources: &EventSources) -> Vec<Subscription> {
        let mut subs = Vec::with_capacity(5);
        let w = Rc::downgrade(this);
        subs.push(sources.page.subscribe(move |ev| {
            if let Some(s) = w.upgrade() {
                s.borrow_mut().handle(*ev);
            }
        }));
        let w = Rc::downgrade(this);
        subs.push(sources.load.subscribe(move |ev| {
            if let Some(s) = w.upgrade() {
                s.borrow_mut().handle_load(*ev);
            }
        }));
        let w = Rc::downgrade(this);
        subs.push(sources.scroll.subscribe(move |v| {
            if let Some(s) = w.upgrade() {
                s.borrow_mut().on_scroll(*v);
            }
        }));
        let w = Rc::downgrade(this);
        subs.push(sources.tick.subscribe(move |dt| {
            if let Some(s) = w.upgrade() {
                s.borrow_mut().tick(*dt);
            }
        }));
        let w = Rc::downgrade(this);
        subs.push(sources.frame.subscribe(move |_| {
            if let Some(s) = w.upgrade() {
                s.borrow_mut().on_frame();
            }
        }));
        subs
    }

    pub fn scroll_to_section(&self, selector: &str) -> Result<(), NavigationError> {
        self.check_navigation()?;
        let section = self
            .ports
            .scroll
            .section(selector)
            .ok_or_else(|| NavigationError::MissingSection(selector.to_string()))?;
        self.ports.scroll.scroll_to(section.top, true);
        Ok(())
    }

    pub fn scroll_to_top(&self) -> Result<(), NavigationError> {
        self.check_navigation()?;
        self.ports.scroll.scroll_to(0.0, true);
        Ok(())
    }

    pub fn apply_variant(&self, index: usize) -> bool {
        let (Some(scene), Some(variant)) = (&self.scene, self.config.variants.get(index)) else {
            log::debug!("[material] variant {} unavailable", index);
            return false;
        };
        log::debug!("[material] applying '{}'", variant.name);
        scene.material.apply(variant.color)
    }

    pub fn mode(&self) -> InteractionMode {
        self.scene
            .as_ref()
            .map_or(InteractionMode::Presentation, |s| s.session.mode())
    }

    pub fn controls_enabled(&self) -> bool {
        self.scene.as_ref().is_some_and(|s| s.session.controls_enabled())
    }

    pub fn pose(&self) -> Option<CameraPose> {
        self.scene.as_ref().map(|s| s.rig.pose())
    }

    pub fn pending_render(&self) -> RenderRequest {
        self.scene
            .as_ref()
            .map(|s| s.rig.gate().pending())
            .unwrap_or_default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loader.is_ready()
    }

    pub fn choreographer(&self) -> Option<&Choreographer> {
        self.scene.as_ref().map(|s| &s.choreographer)
    }

    fn enter_customizer(&mut self) {
        let Some(scene) = &mut self.scene else {
            log::debug!("[session] scene not bound; customize ignored");
            return;
        };
        match scene.session.enter_customizer() {
            Ok(()) => scene.choreographer.suspend(),
            Err(e) => log::debug!("[session] {}", e),
        }
    }

    fn exit_customizer(&mut self) {
        let Some(scene) = &mut self.scene else {
            return;
        };
        if let Err(e) = scene.session.exit_customizer() {
            log::debug!("[session] {}", e);
        }
    }

    fn check_navigation(&self) -> Result<(), NavigationError> {
        if !self.loader.is_ready() {
            return Err(NavigationError::ScrollLocked);
        }
        if self.mode() != InteractionMode::Presentation {
            return Err(NavigationError::NotPresenting);
        }
        Ok(())
    }
}
