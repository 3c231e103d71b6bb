//! Boundaries to the outside world.
//!
//! These traits intentionally avoid referencing platform-specific APIs. The
//! web front-end implements them over `web-sys` and the JS viewer; the host
//! tests implement them with recording doubles. All methods take `&self`
//! because the real implementations are thin handles onto JS objects.

use crate::device::DeviceClass;
use crate::pose::CameraPose;

/// Opaque, non-owning handle to a material that lives in the engine's asset
/// manager. Only meaningful to the engine that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u32);

/// The external render engine.
pub trait RenderEngine {
    /// Commit `pose` to the engine camera and have it re-derive its matrices.
    fn notify_camera_changed(&self, pose: &CameraPose);
    /// Drop accumulated shadow/GI samples; they depend on camera-relative geometry.
    fn invalidate_shadow_cache(&self);
    /// Enable or disable the engine's own free-look camera controls.
    fn set_controls_enabled(&self, enabled: bool);
    fn find_material(&self, name: &str) -> Option<MaterialId>;
    fn set_material_color(&self, material: MaterialId, rgb: u32);
    /// Scene content changed; re-render even if the camera did not move.
    fn set_scene_dirty(&self);
    /// Current engine camera, which user controls may have moved.
    fn camera_pose(&self) -> CameraPose;
    fn set_field_of_view(&self, degrees: f32);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Grab,
}

/// Horizontal offset (percent of own width) and opacity applied to a page element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementStyle {
    pub x_percent: f32,
    pub opacity: f32,
}

impl ElementStyle {
    pub const REST: ElementStyle = ElementStyle {
        x_percent: 0.0,
        opacity: 1.0,
    };

    pub fn lerp(&self, other: &ElementStyle, t: f32) -> ElementStyle {
        ElementStyle {
            x_percent: self.x_percent + (other.x_percent - self.x_percent) * t,
            opacity: self.opacity + (other.opacity - self.opacity) * t,
        }
    }
}

/// DOM-side visual state the orchestrator toggles.
pub trait PageUi {
    /// Loading bar fill, `ratio` in [0, 1].
    fn set_progress(&self, ratio: f32);
    fn set_loader_opacity(&self, opacity: f32);
    fn set_loader_visible(&self, visible: bool);
    /// Pin the page at the top while locked.
    fn set_scroll_locked(&self, locked: bool);
    fn set_narrative_visible(&self, visible: bool);
    fn set_canvas_interactive(&self, interactive: bool);
    fn set_cursor(&self, cursor: Cursor);
    fn set_exit_visible(&self, visible: bool);
    fn set_customizer_visible(&self, visible: bool);
    /// Exit button and customizer panel were both found at setup.
    fn has_customizer_controls(&self) -> bool;
    fn has_element(&self, selector: &str) -> bool;
    fn set_element_style(&self, selector: &str, style: ElementStyle);
}

/// Document-space box of a narrative section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionMetrics {
    /// Distance from the document top to the section top, in CSS px.
    pub top: f64,
    pub height: f64,
}

/// Scroll offset and visible height of the window, in CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

pub trait ScrollHost {
    fn viewport(&self) -> Viewport;
    fn section(&self, selector: &str) -> Option<SectionMetrics>;
    fn scroll_to(&self, y: f64, smooth: bool);
}

/// Decides once, at setup, which keyframe variant set the session uses.
pub trait CapabilityProbe {
    fn device_class(&self) -> DeviceClass;
}

/// A probe that always answers the same; handy for hosts without a browser.
#[derive(Clone, Copy, Debug)]
pub struct FixedProbe(pub DeviceClass);

impl CapabilityProbe for FixedProbe {
    fn device_class(&self) -> DeviceClass {
        self.0
    }
}
