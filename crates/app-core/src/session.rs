//! Presentation ⇄ Customization mode arbitration.
//!
//! ```text
//! Presentation ─enter→ Transitioning(Entering) ─tween done→ Customization
//!      ↑                                                        │
//!      └──tween done── Transitioning(Exiting) ←──────exit───────┘
//! ```
//!
//! Free camera controls are enabled only in `Customization`. Requests that
//! are illegal from the current mode are dropped.

use crate::error::TransitionError;
use crate::pose::CameraPose;
use crate::ports::{Cursor, PageUi, RenderEngine};
use crate::rig::CameraRig;
use crate::tween::{Easing, PoseTween};
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Entering,
    Exiting,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    #[default]
    Presentation,
    Transitioning(Direction),
    Customization,
}

/// Fly-to parameters for both transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionConfig {
    pub customize_pose: CameraPose,
    pub enter_duration: Duration,
    pub exit_duration: Duration,
    pub easing: Easing,
}

pub struct InteractionSession {
    mode: InteractionMode,
    tween: Option<PoseTween>,
    return_pose: CameraPose,
    controls_enabled: bool,
    config: TransitionConfig,
    rig: Rc<CameraRig>,
    engine: Rc<dyn RenderEngine>,
    page: Rc<dyn PageUi>,
}

impl InteractionSession {
    pub fn new(
        config: TransitionConfig,
        rig: Rc<CameraRig>,
        engine: Rc<dyn RenderEngine>,
        page: Rc<dyn PageUi>,
    ) -> Self {
        let return_pose = rig.pose();
        let mut session = Self {
            mode: InteractionMode::Presentation,
            tween: None,
            return_pose,
            controls_enabled: true,
            config,
            rig,
            engine,
            page,
        };
        session.set_controls(false);
        session
    }

    #[inline]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[inline]
    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    /// A fly-to is in flight; transition triggers must stay unavailable.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.tween.is_some()
    }

    pub fn enter_customizer(&mut self) -> Result<(), TransitionError> {
        if self.mode != InteractionMode::Presentation || self.is_busy() {
            return Err(TransitionError::Ignored { mode: self.mode });
        }
        if !self.page.has_customizer_controls() {
            log::warn!("[session] customizer controls missing; staying in presentation");
            return Err(TransitionError::MissingControls);
        }
        self.page.set_narrative_visible(false);
        self.page.set_canvas_interactive(true);
        self.page.set_cursor(Cursor::Grab);

        let from = self.rig.pose();
        self.return_pose = from;
        self.tween = Some(PoseTween::new(
            from,
            self.config.customize_pose,
            self.config.enter_duration,
            self.config.easing,
        ));
        self.mode = InteractionMode::Transitioning(Direction::Entering);
        log::info!("[session] entering customizer");
        Ok(())
    }

    pub fn exit_customizer(&mut self) -> Result<(), TransitionError> {
        if self.mode != InteractionMode::Customization {
            return Err(TransitionError::Ignored { mode: self.mode });
        }
        // Controls off before anything else so drag input cannot fight the tween.
        self.set_controls(false);
        let from = self.engine.camera_pose();
        let from = if from.is_finite() { from } else { self.rig.pose() };
        self.rig.set_pose(from);
        self.tween = Some(PoseTween::new(
            from,
            self.return_pose,
            self.config.exit_duration,
            self.config.easing,
        ));

        self.page.set_narrative_visible(true);
        self.page.set_canvas_interactive(false);
        self.page.set_cursor(Cursor::Default);
        self.page.set_exit_visible(false);
        self.page.set_customizer_visible(false);
        self.mode = InteractionMode::Transitioning(Direction::Exiting);
        log::info!("[session] leaving customizer");
        Ok(())
    }

    /// Advance an in-flight fly-to. Returns the new mode when a transition
    /// completed during this tick.
    pub fn tick(&mut self, dt: Duration) -> Option<InteractionMode> {
        let tween = self.tween.as_mut()?;
        let pose = tween.advance(dt);
        let finished = tween.is_finished();
        self.rig.set_pose(pose);
        if !finished {
            return None;
        }
        self.tween = None;
        match self.mode {
            InteractionMode::Transitioning(Direction::Entering) => {
                self.page.set_exit_visible(true);
                self.page.set_customizer_visible(true);
                self.mode = InteractionMode::Customization;
                self.set_controls(true);
            }
            InteractionMode::Transitioning(Direction::Exiting) => {
                self.mode = InteractionMode::Presentation;
            }
            other => {
                log::warn!("[session] tween finished in {:?}", other);
                return None;
            }
        }
        log::info!("[session] now {:?}", self.mode);
        Some(self.mode)
    }

    fn set_controls(&mut self, enabled: bool) {
        debug_assert!(!enabled || self.mode == InteractionMode::Customization);
        if self.controls_enabled != enabled {
            self.engine.set_controls_enabled(enabled);
            self.controls_enabled = enabled;
        }
    }
}
