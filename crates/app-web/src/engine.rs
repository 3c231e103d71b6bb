//! Render-engine port over the JS viewer facade.
//!
//! The page script constructs a `ViewerBridge` around its viewer and hands it
//! to [`crate::mount`]. Everything the showcase asks of the renderer goes
//! through the methods below; nothing here touches the scene graph directly.

use glam::Vec3;
use showcase_core::{CameraPose, MaterialId, RenderEngine};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    pub type ViewerBridge;

    /// Resolves once the asset is in the scene.
    #[wasm_bindgen(method, js_name = loadScene)]
    pub fn load_scene(this: &ViewerBridge, path: &str) -> js_sys::Promise;

    /// `cb()` before every rendered frame.
    #[wasm_bindgen(method, js_name = onFrame)]
    pub fn on_frame(this: &ViewerBridge, cb: &js_sys::Function);

    /// `cb(loaded, total)` while the asset streams in.
    #[wasm_bindgen(method, js_name = onProgress)]
    pub fn on_progress(this: &ViewerBridge, cb: &js_sys::Function);

    /// `cb()` once the importer reports the load finished.
    #[wasm_bindgen(method, js_name = onLoad)]
    pub fn on_load(this: &ViewerBridge, cb: &js_sys::Function);

    #[wasm_bindgen(method, js_name = notifyCameraChanged)]
    pub fn notify_camera_changed(
        this: &ViewerBridge,
        px: f64,
        py: f64,
        pz: f64,
        tx: f64,
        ty: f64,
        tz: f64,
    );

    #[wasm_bindgen(method, js_name = invalidateShadowCache)]
    pub fn invalidate_shadow_cache(this: &ViewerBridge);

    #[wasm_bindgen(method, js_name = setControlsEnabled)]
    pub fn set_controls_enabled(this: &ViewerBridge, enabled: bool);

    /// First material with that name, or `undefined`.
    #[wasm_bindgen(method, js_name = findMaterialByName)]
    pub fn find_material_by_name(this: &ViewerBridge, name: &str) -> JsValue;

    #[wasm_bindgen(method, js_name = setMaterialColor)]
    pub fn set_material_color(this: &ViewerBridge, material: &JsValue, rgb: u32);

    #[wasm_bindgen(method, js_name = setSceneDirty)]
    pub fn set_scene_dirty(this: &ViewerBridge);

    /// `[px, py, pz, tx, ty, tz]` as the camera currently sits.
    #[wasm_bindgen(method, js_name = cameraPose)]
    pub fn camera_pose(this: &ViewerBridge) -> js_sys::Float64Array;

    #[wasm_bindgen(method, js_name = setFieldOfView)]
    pub fn set_field_of_view(this: &ViewerBridge, degrees: f64);
}

pub struct WebEngine {
    viewer: ViewerBridge,
    // JS material handles, indexed by MaterialId
    materials: RefCell<Vec<JsValue>>,
}

impl WebEngine {
    pub fn new(viewer: ViewerBridge) -> Self {
        Self {
            viewer,
            materials: RefCell::new(Vec::new()),
        }
    }
}

impl RenderEngine for WebEngine {
    fn notify_camera_changed(&self, pose: &CameraPose) {
        let (p, t) = (pose.position, pose.target);
        self.viewer.notify_camera_changed(
            p.x as f64, p.y as f64, p.z as f64, t.x as f64, t.y as f64, t.z as f64,
        );
    }

    fn invalidate_shadow_cache(&self) {
        self.viewer.invalidate_shadow_cache();
    }

    fn set_controls_enabled(&self, enabled: bool) {
        self.viewer.set_controls_enabled(enabled);
    }

    fn find_material(&self, name: &str) -> Option<MaterialId> {
        let handle = self.viewer.find_material_by_name(name);
        if handle.is_undefined() || handle.is_null() {
            return None;
        }
        let mut table = self.materials.borrow_mut();
        table.push(handle);
        Some(MaterialId((table.len() - 1) as u32))
    }

    fn set_material_color(&self, material: MaterialId, rgb: u32) {
        match self.materials.borrow().get(material.0 as usize) {
            Some(handle) => self.viewer.set_material_color(handle, rgb),
            None => log::warn!("[material] unknown handle {:?}", material),
        }
    }

    fn set_scene_dirty(&self) {
        self.viewer.set_scene_dirty();
    }

    fn camera_pose(&self) -> CameraPose {
        let v = self.viewer.camera_pose().to_vec();
        if v.len() < 6 {
            log::warn!("[setup] cameraPose() returned {} values", v.len());
            return CameraPose::default();
        }
        let f = |i: usize| v[i] as f32;
        CameraPose::new(Vec3::new(f(0), f(1), f(2)), Vec3::new(f(3), f(4), f(5)))
    }

    fn set_field_of_view(&self, degrees: f32) {
        self.viewer.set_field_of_view(degrees as f64);
    }
}
