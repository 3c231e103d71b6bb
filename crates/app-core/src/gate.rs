//! Coalescing render-dirty flags.
//!
//! Producers set flags as often as they like; the per-frame consumer swaps
//! them back to `false` and receives a single [`RenderRequest`]. Between two
//! consumptions any number of marks collapses into one request.

use std::sync::atomic::{AtomicBool, Ordering};

/// What the render engine has to re-derive for the upcoming frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderRequest {
    /// Camera position/target changed; matrices must be recomputed.
    pub camera: bool,
    /// Scene content (materials) changed; a redraw is required.
    pub scene: bool,
}

impl RenderRequest {
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.camera && !self.scene
    }
}

#[derive(Debug, Default)]
pub struct RenderGate {
    camera: AtomicBool,
    scene: AtomicBool,
}

impl RenderGate {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mark_camera(&self) {
        self.camera.store(true, Ordering::Release);
    }

    #[inline]
    pub fn mark_scene(&self) {
        self.scene.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_camera_dirty(&self) -> bool {
        self.camera.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_scene_dirty(&self) -> bool {
        self.scene.load(Ordering::Acquire)
    }

    /// Clear the camera flag, returning whether it was set.
    #[inline]
    pub fn consume_camera(&self) -> bool {
        self.camera.swap(false, Ordering::AcqRel)
    }

    /// Clear the scene flag, returning whether it was set.
    #[inline]
    pub fn consume_scene(&self) -> bool {
        self.scene.swap(false, Ordering::AcqRel)
    }

    /// Peek without clearing.
    pub fn pending(&self) -> RenderRequest {
        RenderRequest {
            camera: self.is_camera_dirty(),
            scene: self.is_scene_dirty(),
        }
    }
}
