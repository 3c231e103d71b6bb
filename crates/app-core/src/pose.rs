use glam::Vec3;

/// Which half of a [`CameraPose`] a keyframe or tween writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoseField {
    Position,
    Target,
}

/// Eye position and look-at target of the showcase camera.
///
/// The orchestrator owns the only mutable copy (see [`crate::CameraRig`]);
/// the render engine receives it by reference once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
        }
    }
}

impl CameraPose {
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    #[inline]
    pub fn get(&self, field: PoseField) -> Vec3 {
        match field {
            PoseField::Position => self.position,
            PoseField::Target => self.target,
        }
    }

    #[inline]
    pub fn set(&mut self, field: PoseField, value: Vec3) {
        match field {
            PoseField::Position => self.position = value,
            PoseField::Target => self.target = value,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.target.is_finite()
    }

    /// Component-wise interpolation of both vectors; `t` is not clamped.
    #[inline]
    pub fn lerp(&self, other: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: self.position.lerp(other.position, t),
            target: self.target.lerp(other.target, t),
        }
    }
}
