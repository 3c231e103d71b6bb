//! Declarative scroll keyframes and the per-device narrative table.

use crate::device::{DeviceClass, DeviceValue};
use crate::pose::PoseField;
use crate::ports::{ElementStyle, SectionMetrics, Viewport};
use crate::tween::Easing;
use glam::Vec3;
use smallvec::SmallVec;
use std::time::Duration;

/// A line on the trigger element matched against a line on the viewport.
///
/// Both are fractions: `element` of the section height from its top,
/// `viewport` of the window height from its top. "top bottom" is
/// `{ element: 0.0, viewport: 1.0 }`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    pub element: f32,
    pub viewport: f32,
}

impl Offset {
    pub const TOP_BOTTOM: Offset = Offset::new(0.0, 1.0);
    pub const TOP_TOP: Offset = Offset::new(0.0, 0.0);

    pub const fn new(element: f32, viewport: f32) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which this line pair meets.
    #[inline]
    pub fn scroll_at(&self, section: &SectionMetrics, viewport_height: f64) -> f64 {
        section.top + self.element as f64 * section.height - self.viewport as f64 * viewport_height
    }
}

/// Start/end window anchored to one section element.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerWindow {
    pub selector: String,
    pub start: Offset,
    pub end: Offset,
}

impl TriggerWindow {
    pub fn new(selector: &str, start: Offset, end: Offset) -> Self {
        Self {
            selector: selector.to_string(),
            start,
            end,
        }
    }

    /// Fraction of the window covered at `viewport`, clamped to [0, 1].
    pub fn progress(&self, section: &SectionMetrics, viewport: &Viewport) -> f32 {
        let start = self.start.scroll_at(section, viewport.height);
        let end = self.end.scroll_at(section, viewport.height);
        let span = end - start;
        if !span.is_finite() || span.abs() < f64::EPSILON {
            return if viewport.scroll_y >= start { 1.0 } else { 0.0 };
        }
        let p = (viewport.scroll_y - start) / span;
        if p.is_finite() {
            p.clamp(0.0, 1.0) as f32
        } else {
            0.0
        }
    }
}

/// How progress follows scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scrub {
    /// Progress equals scroll progress on every update.
    Locked,
    /// Progress chases scroll progress with this time constant.
    Lagged(Duration),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollKeyframe {
    pub window: TriggerWindow,
    pub scrub: Scrub,
    pub field: PoseField,
    pub end: Vec3,
    pub easing: Easing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElementKeyframe {
    pub window: TriggerWindow,
    pub scrub: Scrub,
    pub selector: String,
    pub from: ElementStyle,
    pub to: ElementStyle,
    pub easing: Easing,
}

/// Keyframes of one narrative section, resolved for a device.
#[derive(Clone, Debug, PartialEq)]
pub struct Phase {
    pub name: String,
    pub camera: SmallVec<[ScrollKeyframe; 2]>,
    pub elements: SmallVec<[ElementKeyframe; 1]>,
}

/// A camera keyframe before device resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTrackSpec {
    pub field: PoseField,
    pub end: DeviceValue<Vec3>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementTrackSpec {
    pub selector: &'static str,
    pub end: Offset,
    pub scrub: Scrub,
    pub to: ElementStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhaseSpec {
    pub name: &'static str,
    pub trigger: &'static str,
    pub start: Offset,
    pub end: Offset,
    pub scrub: Scrub,
    pub easing: Easing,
    pub camera: Vec<CameraTrackSpec>,
    pub elements: Vec<ElementTrackSpec>,
}

impl PhaseSpec {
    pub fn resolve(&self, class: DeviceClass) -> Phase {
        let camera = self
            .camera
            .iter()
            .map(|t| ScrollKeyframe {
                window: TriggerWindow::new(self.trigger, self.start, self.end),
                scrub: self.scrub,
                field: t.field,
                end: t.end.resolve(class),
                easing: self.easing,
            })
            .collect();
        let elements = self
            .elements
            .iter()
            .map(|t| ElementKeyframe {
                window: TriggerWindow::new(self.trigger, self.start, t.end),
                scrub: t.scrub,
                selector: t.selector.to_string(),
                from: ElementStyle::REST,
                to: t.to,
                easing: self.easing,
            })
            .collect();
        Phase {
            name: self.name.to_string(),
            camera,
            elements,
        }
    }
}

/// Narrative phases for every device class; resolved once per session.
#[derive(Clone, Debug, PartialEq)]
pub struct NarrativeTable {
    pub phases: Vec<PhaseSpec>,
}

impl NarrativeTable {
    pub fn resolve(&self, class: DeviceClass) -> Vec<Phase> {
        self.phases.iter().map(|p| p.resolve(class)).collect()
    }
}
