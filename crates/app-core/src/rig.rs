use crate::gate::{RenderGate, RenderRequest};
use crate::pose::{CameraPose, PoseField};
use crate::ports::RenderEngine;
use glam::Vec3;
use std::cell::Cell;
use std::rc::Rc;

/// Owner of the showcase camera pose and the render gate that guards it.
///
/// Every pose write goes through [`CameraRig::set_field`] or
/// [`CameraRig::set_pose`], both of which mark the gate, so a pose can never
/// change without the next frame learning about it.
pub struct CameraRig {
    pose: Cell<CameraPose>,
    gate: RenderGate,
    engine: Rc<dyn RenderEngine>,
}

impl CameraRig {
    pub fn new(engine: Rc<dyn RenderEngine>, initial: CameraPose) -> Self {
        let rig = Self {
            pose: Cell::new(CameraPose::default()),
            gate: RenderGate::new(),
            engine,
        };
        rig.set_pose(initial);
        rig
    }

    #[inline]
    pub fn pose(&self) -> CameraPose {
        self.pose.get()
    }

    #[inline]
    pub fn gate(&self) -> &RenderGate {
        &self.gate
    }

    pub fn set_field(&self, field: PoseField, value: Vec3) -> bool {
        if !value.is_finite() {
            log::warn!("[gate] rejected non-finite {:?} {:?}", field, value);
            return false;
        }
        let mut pose = self.pose.get();
        pose.set(field, value);
        self.pose.set(pose);
        self.mark_dirty();
        true
    }

    pub fn set_pose(&self, pose: CameraPose) -> bool {
        if !pose.is_finite() {
            log::warn!("[gate] rejected non-finite pose {:?}", pose);
            return false;
        }
        self.pose.set(pose);
        self.mark_dirty();
        true
    }

    /// Camera moved: flag it and drop accumulated shadow samples.
    pub fn mark_dirty(&self) {
        self.gate.mark_camera();
        self.engine.invalidate_shadow_cache();
    }

    /// Scene content changed without camera motion.
    pub fn mark_scene_dirty(&self) {
        self.gate.mark_scene();
    }

    /// Per-frame consumer. Notifies the engine at most once per kind and
    /// clears each flag only after its notification was sent.
    pub fn consume_if_dirty(&self) -> Option<RenderRequest> {
        let mut req = RenderRequest::default();
        if self.gate.is_camera_dirty() {
            self.engine.notify_camera_changed(&self.pose.get());
            req.camera = self.gate.consume_camera();
        }
        if self.gate.is_scene_dirty() {
            self.engine.set_scene_dirty();
            req.scene = self.gate.consume_scene();
        }
        (!req.is_empty()).then_some(req)
    }
}
